//! Strictly Bowling - ten-pin bowling scoring
//!
//! Pure game logic: frames go into a [`ScoringEngine`], which rescores the
//! whole game after every change and publishes a [`Game`] snapshot that a
//! [`GameSheet`] can print.
//!
//! # Architecture
//!
//! - **Types**: frames, bowlers and the published game
//! - **Contracts**: preconditions every incoming frame must satisfy
//! - **Rules**: strike/spare look-ahead scoring and tenth-frame completion
//! - **Sheet**: fixed-width text game sheets
//! - **Config**: TOML scorecards and sheet styles
//!
//! # Example
//!
//! ```
//! use strictly_bowling::{Bowler, Frame, ScoringEngine};
//!
//! # fn example() -> Result<(), strictly_bowling::ScoringError> {
//! let bowler = Bowler::default().with_first_name("Joe").with_last_name("Morgan");
//! let mut engine = ScoringEngine::new(bowler);
//!
//! engine.add_frames([Frame::new(8, 1), Frame::new(8, 2), Frame::strike()])?;
//! assert_eq!(engine.game().score(), 39);
//! assert!(!engine.game().is_complete());
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod contracts;
mod error;
mod rules;
mod sheet;
mod types;

// Crate-level exports - Domain types
pub use types::{Bowler, Frame, FrameKind, Game, LAST_FRAME, PERFECT_SCORE, PINS};

// Crate-level exports - Frame preconditions
pub use contracts::{FirstBallInRange, LegalFrame, ScoreInRange, SecondBallInRange};

// Crate-level exports - Scoring
pub use error::{ScoringError, ScoringErrorKind};
pub use rules::ScoringEngine;

// Crate-level exports - Rendering
pub use sheet::GameSheet;

// Crate-level exports - Configuration
pub use config::{ConfigError, Scorecard, SheetStyle};
