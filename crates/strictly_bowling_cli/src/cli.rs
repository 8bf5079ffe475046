//! Command-line interface for strictly_bowling.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Strictly Bowling - ten-pin scorer and game sheet printer
#[derive(Parser, Debug)]
#[command(name = "strictly_bowling")]
#[command(about = "Scores ten-pin bowling games from TOML scorecards", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Score one scorecard and print every frame
    Score {
        /// Scorecard TOML file
        file: PathBuf,

        /// Print the game as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Print a game sheet for one or more scorecards
    Sheet {
        /// Scorecard TOML files, one game each
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Sheet style TOML file
        #[arg(short, long)]
        style: Option<PathBuf>,
    },
}
