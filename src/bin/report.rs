//! Prints the elimination status of every team in a season file.
//! Run with: cargo run --bin report -- <season-file> [--json]
//! Log level via RUST_LOG (default: warn).

use baseball_elimination::{division_report, Standings};
use std::process::ExitCode;

const USAGE: &str = "usage: report <season-file> [--json]";

fn main() -> ExitCode {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("warn"));

    let mut path = None;
    let mut json = false;
    for arg in std::env::args().skip(1) {
        if arg == "--json" {
            json = true;
        } else if path.is_none() {
            path = Some(arg);
        } else {
            eprintln!("{}", USAGE);
            return ExitCode::from(2);
        }
    }
    let Some(path) = path else {
        eprintln!("{}", USAGE);
        return ExitCode::from(2);
    };

    match run(&path, json) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(path: &str, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let standings = Standings::from_file(path)?;
    log::info!("Loaded {} teams from {}", standings.team_count(), path);

    let report = division_report(&standings)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for status in &report {
            println!("{}", status);
        }
    }
    Ok(())
}
