//! Core domain types for ten-pin bowling.

use derive_getters::Getters;
use derive_new::new;
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Pins standing at the start of a frame.
pub const PINS: u8 = 10;

/// Number of regular frames in a game.
pub const LAST_FRAME: usize = 10;

/// Highest possible game score.
pub const PERFECT_SCORE: u16 = 300;

/// Category of a frame, derived from its ball values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum FrameKind {
    /// All ten pins on the first ball.
    Strike,
    /// All ten pins with the second ball.
    Spare,
    /// Pins left standing after both balls.
    Open,
}

/// One frame of bowling.
///
/// The bonus balls of the tenth frame are recorded as extra frames after
/// frame ten, so a finished game holds ten to twelve entries.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Getters, Setters,
)]
#[setters(prefix = "with_")]
#[serde(default)]
pub struct Frame {
    /// Pins knocked down by the first ball.
    #[getter(copy)]
    first_ball: u8,

    /// Pins knocked down by the second ball.
    #[getter(copy)]
    second_ball: u8,

    /// Cumulative score through this frame. Overwritten by the scoring engine.
    #[getter(copy)]
    score: u16,

    /// Whether the bowler left a split. Informational only.
    #[getter(copy)]
    split: bool,
}

impl Frame {
    /// Creates an unscored frame from two ball results.
    pub fn new(first_ball: u8, second_ball: u8) -> Self {
        Self {
            first_ball,
            second_ball,
            ..Self::default()
        }
    }

    /// A strike frame.
    pub fn strike() -> Self {
        Self::one_ball(PINS)
    }

    /// A frame where only the first ball was recorded.
    pub fn one_ball(pins: u8) -> Self {
        Self::new(pins, 0)
    }

    /// Two gutter balls.
    pub fn gutter() -> Self {
        Self::default()
    }

    /// True when the first ball knocked down every pin.
    pub fn is_strike(&self) -> bool {
        self.first_ball == PINS
    }

    /// True when both balls together knocked down every pin but the first alone did not.
    pub fn is_spare(&self) -> bool {
        self.total() == u16::from(PINS) && self.first_ball != PINS
    }

    /// True for neither a strike nor a spare.
    pub fn is_open_frame(&self) -> bool {
        !self.is_spare() && !self.is_strike()
    }

    /// Pins knocked down by both balls.
    pub fn total(&self) -> u16 {
        u16::from(self.first_ball) + u16::from(self.second_ball)
    }

    /// Returns which of strike, spare or open this frame is.
    pub fn kind(&self) -> FrameKind {
        if self.is_strike() {
            FrameKind::Strike
        } else if self.is_spare() {
            FrameKind::Spare
        } else {
            FrameKind::Open
        }
    }

    /// Stores the computed cumulative score.
    pub(crate) fn set_score(&mut self, score: u16) {
        self.score = score;
    }
}

impl std::fmt::Display for Frame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({}, {}) {} {}",
            self.first_ball,
            self.second_ball,
            self.kind(),
            self.score
        )
    }
}

/// The person bowling a game.
#[derive(
    Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Getters, Setters, new,
)]
#[setters(prefix = "with_", strip_option, into)]
#[serde(default)]
pub struct Bowler {
    /// Given name.
    first_name: Option<String>,

    /// Family name.
    last_name: Option<String>,
}

impl Bowler {
    /// Name as printed on a game sheet, "" when no name is known.
    #[instrument(skip(self))]
    pub fn display_name(&self) -> String {
        [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// One bowler's game as published by the scoring engine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    /// Frames in ascending frame-number order.
    frames: Vec<Frame>,
    /// Score through frame ten, or through the last frame bowled.
    score: u16,
    /// Whether the tenth frame and its bonus balls are finished.
    complete: bool,
    /// Who bowled.
    bowler: Bowler,
}

impl Game {
    /// Creates an empty, incomplete game.
    #[instrument]
    pub fn new(bowler: Bowler) -> Self {
        Self {
            bowler,
            ..Self::default()
        }
    }

    /// Returns the frames.
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Returns the number of frames.
    pub fn number_of_frames(&self) -> usize {
        self.frames.len()
    }

    /// Returns the game score.
    pub fn score(&self) -> u16 {
        self.score
    }

    /// Returns true once the game is finished.
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Returns the bowler.
    pub fn bowler(&self) -> &Bowler {
        &self.bowler
    }

    /// Swaps in a freshly built frame list.
    pub(crate) fn replace_frames(&mut self, frames: Vec<Frame>) {
        self.frames = frames;
    }

    /// Sets the game score.
    pub(crate) fn set_score(&mut self, score: u16) {
        self.score = score;
    }

    /// Sets the completion flag.
    pub(crate) fn set_complete(&mut self, complete: bool) {
        self.complete = complete;
    }
}
