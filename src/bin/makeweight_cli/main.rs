// ABOUTME: Makeweight CLI - command-line shell around the protocol engine
// ABOUTME: Handles profile setup, weight/food logging, status, and the fuel guide
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Makeweight Athletics
//!
//! Usage:
//! ```bash
//! # Set up the athlete profile
//! makeweight-cli profile set --weight 158 --class 150 \
//!     --weigh-in 2025-11-08 --protocol optimal_cut
//!
//! # Log this morning's weight
//! makeweight-cli log-weight --type morning --weight 155.4
//!
//! # Log a food by its nutrient facts
//! makeweight-cli log-food --calories 200 --protein 30 --carbs 5 --fat 5 --fiber 1
//!
//! # Where the cut stands right now
//! makeweight-cli status
//!
//! # What to eat in this phase
//! makeweight-cli fuel-guide
//! ```

mod commands;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use makeweight::logging::{init_logging, LoggingConfig};
use makeweight::persistence::JsonFileStore;

#[derive(Parser)]
#[command(
    name = "makeweight-cli",
    about = "Makeweight weight-cut and nutrition CLI",
    long_about = "Command-line shell around the Makeweight protocol engine: profile setup, weight and food logging, safety status, and the phase fuel guide."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Snapshot file override
    #[arg(long, global = true)]
    data_file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Profile management
    Profile {
        #[command(subcommand)]
        action: commands::ProfileCommand,
    },

    /// Where the cut stands right now
    Status,

    /// Log a body weight
    LogWeight(commands::LogWeightArgs),

    /// Log a food by its nutrient facts
    LogFood(commands::LogFoodArgs),

    /// Log water intake
    LogWater(commands::LogWaterArgs),

    /// Mark today as a rest day (no practice weigh-ins required)
    RestDay,

    /// What to eat in the current phase
    FuelGuide {
        /// Show the between-matches tournament view
        #[arg(long)]
        between_matches: bool,
    },

    /// Dismiss the currently surfaced protocol recommendation
    Dismiss,

    /// Accept the currently surfaced protocol recommendation
    AcceptSwitch,
}

fn store_for(data_file: Option<PathBuf>) -> Result<JsonFileStore> {
    if let Some(path) = data_file {
        return Ok(JsonFileStore::new(path));
    }
    JsonFileStore::at_default_path().context("could not resolve a platform data directory; pass --data-file")
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let logging = if cli.verbose {
        LoggingConfig::from_env().verbose()
    } else {
        LoggingConfig::from_env()
    };
    init_logging(&logging)?;

    let store = store_for(cli.data_file)?;
    match cli.command {
        Command::Profile { action } => commands::profile(&store, action),
        Command::Status => commands::status(&store),
        Command::LogWeight(args) => commands::log_weight(&store, &args),
        Command::LogFood(args) => commands::log_food(&store, &args),
        Command::LogWater(args) => commands::log_water(&store, &args),
        Command::RestDay => commands::rest_day(&store),
        Command::FuelGuide { between_matches } => commands::fuel_guide(&store, between_matches),
        Command::Dismiss => commands::dismiss(&store),
        Command::AcceptSwitch => commands::accept_switch(&store),
    }
}
