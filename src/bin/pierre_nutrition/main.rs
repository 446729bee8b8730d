// ABOUTME: Pierre nutrition CLI - calculates plans, rebalances splits and exports reports
// ABOUTME: Thin clap front end over the pure nutrition planner library
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Maintenance plan for a moderately active client, printed as JSON
//! pierre-nutrition calculate --weight-kg 70 --height-cm 175 --age 30 --sex male \
//!     --activity moderate --goal maintain
//!
//! # Ketogenic cut with a 25% deficit, exported as CSV
//! pierre-nutrition calculate --weight-kg 82 --height-cm 180 --age 41 --sex female \
//!     --activity light --goal lose --intensity 25 --preset keto --format csv --output plan.csv
//!
//! # Move protein to 50% and rebalance carbs and fat
//! pierre-nutrition rebalance --protein 30 --carbs 40 --fat 30 --set protein=50
//!
//! # List diet presets / show the default split for five meals
//! pierre-nutrition presets
//! pierre-nutrition meals --count 5
//! ```

mod commands;
mod helpers;

use clap::{Parser, Subcommand};
use pierre_nutrition_planner::{
    config::NutritionConfig,
    errors::{AppResult, ErrorResponse},
    logging::LoggingConfig,
};
use std::process::ExitCode;
use tracing::debug;

use commands::calculate::CalculateArgs;
use commands::split::{MealsArgs, RebalanceArgs};

#[derive(Parser)]
#[command(
    name = "pierre-nutrition",
    about = "Pierre Nutrition Planner CLI",
    long_about = "Calculate BMR, TDEE and macro targets, rebalance percentage splits and export nutrition plans."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Calculate a full nutrition plan and export it
    Calculate(Box<CalculateArgs>),

    /// Set one macro percentage and rebalance the others
    Rebalance(RebalanceArgs),

    /// List the available diet presets
    Presets,

    /// Show the default meal split for a meal count
    Meals(MealsArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.with_level("debug");
    }
    if let Err(e) = logging.init() {
        eprintln!("Logging disabled: {e}");
    }

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            let code = error.code.exit_code();
            debug!(error = %error, "Command failed");
            let response = ErrorResponse::from(error);
            match serde_json::to_string_pretty(&response) {
                Ok(json) => eprintln!("{json}"),
                Err(_) => eprintln!("{}", response.error.message),
            }
            ExitCode::from(code)
        }
    }
}

fn run(command: Command) -> AppResult<()> {
    let config = NutritionConfig::load()?;

    match command {
        Command::Calculate(args) => commands::calculate::run(&args, &config),
        Command::Rebalance(args) => commands::split::rebalance(&args, &config),
        Command::Presets => {
            commands::split::presets();
            Ok(())
        }
        Command::Meals(args) => commands::split::meals(&args, &config),
    }
}
