// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! CLI tool: clean up AI-detected floor plan walls
//!
//! Reads a JSON wall array (or an extraction document with a `walls`
//! field), runs axis snapping, endpoint clustering and collinear merging,
//! and writes the result back as JSON.
//!
//! Usage:
//!   wall-cleanup <input.json> [options]

use renovo_walls::{
    parse_walls_json, post_process_walls_report, InvalidWallPolicy, PostProcessConfig,
};
use std::env;
use std::fs;
use std::process;

#[derive(Debug)]
struct CliOptions {
    input_path: String,
    output_path: Option<String>,
    config: PostProcessConfig,
    print_stats: bool,
}

enum Command {
    Run(CliOptions),
    Help,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(env::var("RUST_LOG").unwrap_or_else(|_| "info,renovo_walls=info".into()))
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let options = match parse_args(&args, PostProcessConfig::from_env()) {
        Ok(Command::Run(options)) => options,
        Ok(Command::Help) => {
            print_usage();
            return;
        }
        Err(message) => {
            eprintln!("Error: {}", message);
            print_usage();
            process::exit(1);
        }
    };

    if let Err(message) = run(&options) {
        eprintln!("Error: {}", message);
        process::exit(1);
    }
}

fn run(options: &CliOptions) -> Result<(), String> {
    tracing::info!(path = %options.input_path, "Loading walls");
    let input = fs::read_to_string(&options.input_path)
        .map_err(|e| format!("Cannot read '{}': {}", options.input_path, e))?;

    let mut document = parse_walls_json(&input)
        .map_err(|e| format!("Cannot parse '{}': {}", options.input_path, e))?;

    let result = post_process_walls_report(document.walls(), &options.config)
        .map_err(|e| format!("Post-processing failed: {}", e))?;

    let stats = &result.stats;
    tracing::info!(
        input = stats.input_count,
        output = stats.output_count,
        merged_away = stats.merged_away,
        dropped_invalid = stats.dropped_invalid,
        "Walls cleaned"
    );

    if options.print_stats {
        eprintln!("Cleanup statistics:");
        eprintln!("  Input:               {} walls", stats.input_count);
        eprintln!("  Dropped (invalid):   {}", stats.dropped_invalid);
        eprintln!("  Snapped horizontal:  {}", stats.snapped_horizontal);
        eprintln!("  Snapped vertical:    {}", stats.snapped_vertical);
        eprintln!("  Endpoint clusters:   {}", stats.endpoint_clusters);
        eprintln!("  Merged away:         {}", stats.merged_away);
        eprintln!("  Output:              {} walls", stats.output_count);
    }

    document.replace_walls(result.walls);
    let json = document
        .to_json_pretty()
        .map_err(|e| format!("Serialization error: {}", e))?;

    match &options.output_path {
        Some(path) => {
            fs::write(path, json).map_err(|e| format!("Cannot write '{}': {}", path, e))?;
            tracing::info!(path = %path, "Wrote cleaned walls");
        }
        None => println!("{}", json),
    }

    Ok(())
}

fn parse_args(args: &[String], mut config: PostProcessConfig) -> Result<Command, String> {
    let mut input_path = None;
    let mut output_path = None;
    let mut print_stats = false;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "--output" => {
                i += 1;
                output_path = Some(value_of(args, i, "--output")?.to_string());
            }
            "--snap" => {
                i += 1;
                config.snap_threshold = parse_threshold(args, i, "--snap")?;
            }
            "--cluster" => {
                i += 1;
                config.cluster_threshold = parse_threshold(args, i, "--cluster")?;
            }
            "--merge" => {
                i += 1;
                config.merge_threshold = parse_threshold(args, i, "--merge")?;
            }
            "--skip-invalid" => {
                config.invalid_walls = InvalidWallPolicy::Skip;
            }
            "--stats" => {
                print_stats = true;
            }
            other if other.starts_with('-') => {
                return Err(format!("Unknown option: {}", other));
            }
            path => {
                if input_path.is_some() {
                    return Err(format!("Unexpected argument: {}", path));
                }
                input_path = Some(path.to_string());
            }
        }
        i += 1;
    }

    let input_path = input_path.ok_or_else(|| "Missing input file".to_string())?;
    Ok(Command::Run(CliOptions {
        input_path,
        output_path,
        config,
        print_stats,
    }))
}

fn value_of<'a>(args: &'a [String], i: usize, option: &str) -> Result<&'a str, String> {
    args.get(i)
        .map(String::as_str)
        .ok_or_else(|| format!("{} requires a value", option))
}

fn parse_threshold(args: &[String], i: usize, option: &str) -> Result<f64, String> {
    let raw = value_of(args, i, option)?;
    raw.parse()
        .map_err(|_| format!("Invalid {} value: {}", option, raw))
}

fn print_usage() {
    eprintln!(
        r#"Wall Cleanup
============

Cleans up AI-detected floor plan walls and writes them back as JSON.

USAGE:
  wall-cleanup <input.json> [OPTIONS]

ARGUMENTS:
  <input.json>              Wall array, or extraction document with a "walls" field

OPTIONS:
  --output <path>           Output file (default: stdout)
  --snap <units>            Axis snapping threshold (default: 5)
  --cluster <units>         Endpoint clustering distance (default: 10)
  --merge <units>           Collinear merge tolerance (default: 5)
  --skip-invalid            Drop walls with NaN/infinite values instead of failing
  --stats                   Print per-stage statistics
  -h, --help                Show this help message

ENVIRONMENT:
  WALL_SNAP_THRESHOLD, WALL_CLUSTER_THRESHOLD, WALL_MERGE_THRESHOLD,
  WALL_INVALID_POLICY (reject|skip), RUST_LOG

PIPELINE:
  1. Axis snap:     nearly horizontal/vertical walls become exact
  2. Endpoints:     endpoints within the cluster distance share one point
  3. Merge:         touching fragments on one line become a single wall

EXAMPLES:
  wall-cleanup extraction.json --output cleaned.json --stats
  wall-cleanup walls.json --cluster 20 --skip-invalid"#
    );
}
