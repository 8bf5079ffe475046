//! Preconditions a frame must satisfy before the scoring engine accepts it.
//!
//! Each check is a small unit struct so the engine can compose them and
//! tests can exercise them one at a time.

use super::error::{ScoringError, ScoringErrorKind};
use super::types::{Frame, PERFECT_SCORE, PINS};
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Ball preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the first ball knocked down at most ten pins.
pub struct FirstBallInRange;

impl FirstBallInRange {
    /// Checks the first ball.
    #[track_caller]
    #[instrument(skip(frame), fields(first_ball = frame.first_ball()))]
    pub fn check(frame: &Frame) -> Result<(), ScoringError> {
        if frame.first_ball() > PINS {
            warn!("First ball out of range");
            Err(ScoringError::new(ScoringErrorKind::InvalidFirstBall(
                frame.first_ball(),
            )))
        } else {
            Ok(())
        }
    }
}

/// Precondition: the second ball knocked down at most ten pins.
pub struct SecondBallInRange;

impl SecondBallInRange {
    /// Checks the second ball.
    #[track_caller]
    #[instrument(skip(frame), fields(second_ball = frame.second_ball()))]
    pub fn check(frame: &Frame) -> Result<(), ScoringError> {
        if frame.second_ball() > PINS {
            warn!("Second ball out of range");
            Err(ScoringError::new(ScoringErrorKind::InvalidSecondBall(
                frame.second_ball(),
            )))
        } else {
            Ok(())
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Score precondition
// ─────────────────────────────────────────────────────────────

/// Precondition: the score carried by the incoming frame is at most 300.
///
/// This looks at the value the caller put on the frame, not at the score
/// the engine is about to compute. A frame built with an out-of-range
/// placeholder is rejected even though the engine would overwrite it.
pub struct ScoreInRange;

impl ScoreInRange {
    /// Checks the caller-supplied score.
    #[track_caller]
    #[instrument(skip(frame), fields(score = frame.score()))]
    pub fn check(frame: &Frame) -> Result<(), ScoringError> {
        if frame.score() > PERFECT_SCORE {
            warn!("Score out of range");
            Err(ScoringError::new(ScoringErrorKind::InvalidScore(frame.score())))
        } else {
            Ok(())
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Composite
// ─────────────────────────────────────────────────────────────

/// Composite precondition: both balls and the score field are in range.
pub struct LegalFrame;

impl LegalFrame {
    /// Validates all preconditions for a frame, first failure wins.
    #[track_caller]
    #[instrument(skip(frame))]
    pub fn check(frame: &Frame) -> Result<(), ScoringError> {
        FirstBallInRange::check(frame)?;
        SecondBallInRange::check(frame)?;
        ScoreInRange::check(frame)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legal_frame_accepts_boundaries() {
        assert!(LegalFrame::check(&Frame::gutter()).is_ok());
        assert!(LegalFrame::check(&Frame::new(10, 10)).is_ok());
        assert!(LegalFrame::check(&Frame::strike().with_score(300)).is_ok());
    }

    #[test]
    fn test_first_ball_too_high() {
        let err = LegalFrame::check(&Frame::new(11, 0)).unwrap_err();
        assert_eq!(err.kind, ScoringErrorKind::InvalidFirstBall(11));
        assert!(err.kind.is_validation());
    }

    #[test]
    fn test_second_ball_too_high() {
        let err = LegalFrame::check(&Frame::new(0, 11)).unwrap_err();
        assert_eq!(err.kind, ScoringErrorKind::InvalidSecondBall(11));
    }

    #[test]
    fn test_first_ball_checked_before_second() {
        let err = LegalFrame::check(&Frame::new(12, 13)).unwrap_err();
        assert_eq!(err.kind, ScoringErrorKind::InvalidFirstBall(12));
    }

    #[test]
    fn test_placeholder_score_too_high() {
        let err = ScoreInRange::check(&Frame::new(1, 1).with_score(301)).unwrap_err();
        assert_eq!(err.kind, ScoringErrorKind::InvalidScore(301));
    }

    #[test]
    fn test_pin_total_is_not_checked() {
        // Eight then nine is accepted; each ball is in range on its own.
        assert!(LegalFrame::check(&Frame::new(8, 9)).is_ok());
    }
}
