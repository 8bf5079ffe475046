//! Strictly Bowling - command-line scorer
//!
//! Loads TOML scorecards, scores them and prints frame listings or game sheets.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::path::{Path, PathBuf};
use strictly_bowling::{Game, GameSheet, Scorecard, ScoringEngine, SheetStyle};
use tracing::{debug, info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn,strictly_bowling=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Score { file, json } => run_score(&file, json),
        Command::Sheet { files, style } => run_sheet(&files, style.as_deref()),
    }
}

/// Loads a scorecard and runs every frame through a scoring engine.
#[instrument(skip(path), fields(path = %path.display()))]
fn load_engine(path: &Path) -> Result<ScoringEngine> {
    let card = Scorecard::from_file(path)?;
    let engine = card
        .into_engine()
        .with_context(|| format!("Scorecard {} has an illegal frame", path.display()))?;
    debug!(frames = engine.frame_count(), "Scorecard scored");
    Ok(engine)
}

/// Print a frame-by-frame listing
#[instrument(skip(path), fields(path = %path.display()))]
fn run_score(path: &Path, json: bool) -> Result<()> {
    let engine = load_engine(path)?;
    let game = engine.game();

    if json {
        println!("{}", serde_json::to_string_pretty(game)?);
    } else {
        print!("{}", frame_listing(game));
    }
    Ok(())
}

/// Print a game sheet for every scorecard
#[instrument(skip(paths), fields(games = paths.len()))]
fn run_sheet(paths: &[PathBuf], style: Option<&Path>) -> Result<()> {
    let style = match style {
        Some(path) => SheetStyle::from_file(path)?,
        None => SheetStyle::default(),
    };
    let sheet = GameSheet::new(style);

    let games = paths
        .iter()
        .map(|path| load_engine(path).map(|engine| engine.game().clone()))
        .collect::<Result<Vec<Game>>>()?;

    info!(games = games.len(), "Rendering game sheet");
    match games.as_slice() {
        [game] => print!("{}", sheet.render(game)),
        _ => print!("{}", sheet.render_all(&games)),
    }
    Ok(())
}

/// One line per frame, then the game score and completion state.
fn frame_listing(game: &Game) -> String {
    let mut out = String::new();
    for (index, frame) in game.frames().iter().enumerate() {
        out.push_str(&format!(
            "Frame {}: ({}, {}) {} score {}\n",
            index + 1,
            frame.first_ball(),
            frame.second_ball(),
            frame.kind(),
            frame.score()
        ));
    }
    out.push_str(&format!("Score: {}\n", game.score()));
    out.push_str(if game.is_complete() {
        "Game: Complete\n"
    } else {
        "Game: Incomplete\n"
    });
    out
}
