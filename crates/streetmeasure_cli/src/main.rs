//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `streetmeasure_core` linkage.
//! - Render one distance with a configured display unit for quick checks.
//!
//! Usage: `streetmeasure_cli [<config.json> <distance_m>]`

use std::process::ExitCode;
use streetmeasure_core::{core_version, ping, CoreConfig};

fn main() -> ExitCode {
    println!("streetmeasure_core ping={}", ping());
    println!("streetmeasure_core version={}", core_version());

    let args: Vec<String> = std::env::args().skip(1).collect();
    let [config_path, distance] = args.as_slice() else {
        return ExitCode::SUCCESS;
    };

    let config = match CoreConfig::load(config_path) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };
    let distance_m = match distance.parse::<f64>() {
        Ok(value) if value >= 0.0 => value,
        _ => {
            eprintln!("distance must be a non-negative number of meters, got `{distance}`");
            return ExitCode::FAILURE;
        }
    };

    println!("{}", config.display_unit.format(distance_m));
    ExitCode::SUCCESS
}
