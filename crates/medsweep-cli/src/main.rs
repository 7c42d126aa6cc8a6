mod commands;
mod logging;

use std::io::{self, Write};
use std::process;
use std::time::Instant;

use clap::{CommandFactory, Parser};
use colored::*;
use commands::{Cli, Commands};
use dotenv::dotenv;
use medsweep_core::Engine;
use tracing::error;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();

    let _guard = logging::init_logger();

    let config = match medsweep_core::config::load_configuration() {
        Ok(config) => config,
        Err(err) => {
            error!("Error loading configuration: {}", err);
            process::exit(1);
        }
    };

    let args = Cli::parse();

    match args.command {
        Some(Commands::Scan) => {
            if let Err(err) = run_scan(&config) {
                error!("Error: {}", err);
            }
        }
        Some(Commands::Delete { yes }) => {
            let confirmed = yes
                || matches!(
                    prompt_confirm(
                        "Are you SURE you want to delete every file marked DELETE in the ledger?",
                        Some(false),
                    ),
                    Ok(true)
                );
            if !confirmed {
                process::exit(0);
            }
            if let Err(err) = run_delete(&config) {
                error!("Error: {}", err);
            }
        }
        Some(Commands::PrintConfig) => {
            println!("Configuration: {:?}", config);
        }
        None => {
            let _ = Cli::command().print_long_help();
        }
    }

    Ok(())
}

fn run_scan(config: &medsweep_core::AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let engine = Engine::new(config.clone())?;

    let start = Instant::now();
    let status = engine.run_scan()?;

    println!();
    println!(
        "{} ({})",
        status,
        format!("{:.2}s", start.elapsed().as_secs_f64()).green()
    );
    Ok(())
}

fn run_delete(config: &medsweep_core::AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let engine = Engine::new(config.clone())?;
    let status = engine.run_delete()?;

    println!();
    println!("{}", status);
    Ok(())
}

fn prompt_confirm(prompt: &str, default: Option<bool>) -> io::Result<bool> {
    let mut input = String::new();

    loop {
        input.clear();

        match default {
            Some(true) => print!("{} (Y/n): ", prompt),
            Some(false) | None => print!("{} (y/N): ", prompt),
        }
        io::stdout().flush()?;

        io::stdin().read_line(&mut input)?;

        match input.trim().to_uppercase().as_str() {
            "Y" => return Ok(true),
            "N" => return Ok(false),
            "" => match default {
                Some(default) => return Ok(default),
                None => continue,
            },
            _ => continue,
        }
    }
}
