//! Scoring error types.

use derive_more::{Display, Error};
use tracing::instrument;

/// Specific reason a frame mutation was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ScoringErrorKind {
    /// First ball knocked down more than ten pins.
    #[display("Invalid value for the first ball: {}", _0)]
    InvalidFirstBall(u8),

    /// Second ball knocked down more than ten pins.
    #[display("Invalid value for the second ball: {}", _0)]
    InvalidSecondBall(u8),

    /// Caller-supplied score field outside 0..=300.
    #[display("The score must be a value between 0 and 300. Received: {}", _0)]
    InvalidScore(u16),

    /// Replace targeted a frame number with no frame.
    #[display("Frame not found for frame number {}", _0)]
    FrameNotFound(usize),
}

impl ScoringErrorKind {
    /// Returns true for the kinds raised by frame validation.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidFirstBall(_) | Self::InvalidSecondBall(_) | Self::InvalidScore(_)
        )
    }

    /// Returns true when the target frame does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::FrameNotFound(_))
    }
}

/// Scoring error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Scoring error: {} at {}:{}", kind, file, line)]
pub struct ScoringError {
    /// What went wrong.
    pub kind: ScoringErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ScoringError {
    /// Creates a new scoring error with caller location tracking.
    #[track_caller]
    #[instrument]
    pub fn new(kind: ScoringErrorKind) -> Self {
        let (file, line) = caller_location();
        Self { kind, line, file }
    }
}

/// Source file and line of the nearest caller not marked `#[track_caller]`.
#[track_caller]
pub(crate) fn caller_location() -> (&'static str, u32) {
    let loc = std::panic::Location::caller();
    (loc.file(), loc.line())
}
