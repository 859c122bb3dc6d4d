//! CLI module for the Manufacturing Defect Predictor

pub mod serve;

use clap::{Parser, Subcommand};

/// Manufacturing Defect Predictor - train and serve a defect classifier
#[derive(Parser)]
#[command(name = "mfg-defect-predictor")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the prediction API server
    Serve,
}
