//! Scorecard files and game sheet styling, both stored as TOML.

use crate::error::{ScoringError, caller_location};
use crate::rules::ScoringEngine;
use crate::types::{Bowler, Frame};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// A bowler and the frames they bowled, in order.
///
/// ```toml
/// [bowler]
/// first_name = "Joe"
/// last_name = "Morgan"
///
/// [[frames]]
/// first_ball = 8
/// second_ball = 2
/// split = true
///
/// [[frames]]
/// first_ball = 10
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Scorecard {
    /// Who bowled.
    #[serde(default)]
    bowler: Bowler,

    /// Frames in the order they were bowled, bonus balls last.
    #[serde(default)]
    frames: Vec<Frame>,
}

impl Scorecard {
    /// Creates a scorecard.
    #[instrument(skip(frames), fields(frames = frames.len()))]
    pub fn new(bowler: Bowler, frames: Vec<Frame>) -> Self {
        Self { bowler, frames }
    }

    /// Loads a scorecard from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading scorecard from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read scorecard file: {}", e)))?;

        let scorecard: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse scorecard: {}", e)))?;

        info!(
            bowler = %scorecard.bowler.display_name(),
            frames = scorecard.frames.len(),
            "Scorecard loaded"
        );
        Ok(scorecard)
    }

    /// Feeds every frame through a fresh scoring engine.
    ///
    /// # Errors
    ///
    /// Returns the first frame rejected by the engine.
    #[instrument(skip(self), fields(bowler = %self.bowler.display_name()))]
    pub fn into_engine(self) -> Result<ScoringEngine, ScoringError> {
        let mut engine = ScoringEngine::new(self.bowler);
        engine.add_frames(self.frames)?;
        Ok(engine)
    }
}

/// Layout and symbols used when printing a game sheet.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct SheetStyle {
    /// Width of the bowler name column.
    #[serde(default = "default_name_width")]
    #[getter(copy)]
    name_width: usize,

    /// Symbol for a strike.
    #[serde(default = "default_strike_mark")]
    #[getter(copy)]
    strike_mark: char,

    /// Symbol for a spare.
    #[serde(default = "default_spare_mark")]
    #[getter(copy)]
    spare_mark: char,

    /// Symbol for a ball that knocked down no pins.
    #[serde(default = "default_gutter_mark")]
    #[getter(copy)]
    gutter_mark: char,

    /// Prefix for the first ball of a split frame.
    #[serde(default = "default_split_mark")]
    #[getter(copy)]
    split_mark: char,
}

fn default_name_width() -> usize {
    20
}

fn default_strike_mark() -> char {
    'X'
}

fn default_spare_mark() -> char {
    '/'
}

fn default_gutter_mark() -> char {
    '-'
}

fn default_split_mark() -> char {
    'S'
}

impl SheetStyle {
    /// Loads a style from a TOML file. Missing keys fall back to defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading sheet style from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read style file: {}", e)))?;

        let style: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse style: {}", e)))?;

        info!(name_width = style.name_width, "Sheet style loaded");
        Ok(style)
    }

    /// Returns a copy with a different name column width.
    pub fn with_name_width(mut self, name_width: usize) -> Self {
        self.name_width = name_width;
        self
    }
}

impl Default for SheetStyle {
    fn default() -> Self {
        Self {
            name_width: default_name_width(),
            strike_mark: default_strike_mark(),
            spare_mark: default_spare_mark(),
            gutter_mark: default_gutter_mark(),
            split_mark: default_split_mark(),
        }
    }
}

/// Failure to read or parse a scorecard or style file.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates an error located at the caller.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let (file, line) = caller_location();
        Self { message, line, file }
    }
}
