//! Renovo Walls WebAssembly Bindings
//!
//! JavaScript/TypeScript API for floor plan wall cleanup built with wasm-bindgen.

use wasm_bindgen::prelude::*;

#[cfg(feature = "console_error_panic_hook")]
pub use console_error_panic_hook::set_once as set_panic_hook;

mod utils;
mod walls;

pub use utils::set_panic_hook as init_panic_hook;
pub use walls::WallCleanupAPI;

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    utils::set_panic_hook();
}

/// Get the version of the wall cleanup module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
