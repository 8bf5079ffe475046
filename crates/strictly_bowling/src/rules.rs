//! Scoring rules and the engine that applies them.

use super::contracts::LegalFrame;
use super::error::{ScoringError, ScoringErrorKind};
use super::types::{Bowler, Frame, FrameKind, Game, LAST_FRAME, PINS};
use std::collections::BTreeMap;
use tracing::{debug, info, instrument, warn};

/// Bonus for one mark.
const MARK_1: u16 = PINS as u16;
/// Bonus for two marks.
const MARK_2: u16 = 2 * MARK_1;
/// Bonus for three marks.
const MARK_3: u16 = 3 * MARK_1;

/// Ten-pin scoring engine for one bowler's game.
///
/// Frames are stored by frame number, starting at 1. Only numbers in
/// `1..=frame_count()` are visible to lookups: deleting a frame removes its
/// key without renumbering the frames after it, so a frame past the new
/// count drops out of view until a later [`add_frame`](Self::add_frame)
/// overwrites it.
///
/// Every mutation validates first, then rescores the whole game.
#[derive(Debug, Clone)]
pub struct ScoringEngine {
    frames: BTreeMap<usize, Frame>,
    game: Game,
}

impl ScoringEngine {
    /// Creates an engine with no frames.
    #[instrument(skip(bowler), fields(bowler = %bowler.display_name()))]
    pub fn new(bowler: Bowler) -> Self {
        Self {
            frames: BTreeMap::new(),
            game: Game::new(bowler),
        }
    }

    /// Returns the current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Returns the bowler.
    pub fn bowler(&self) -> &Bowler {
        self.game.bowler()
    }

    /// Returns the number of stored frames.
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Appends a frame as frame number `frame_count() + 1`.
    ///
    /// # Errors
    ///
    /// Returns a validation error if a ball or the frame's score field is out
    /// of range. The engine is left untouched.
    #[instrument(skip(self, frame), fields(frame = %frame))]
    pub fn add_frame(&mut self, frame: Frame) -> Result<(), ScoringError> {
        LegalFrame::check(&frame)?;

        let number = self.frames.len() + 1;
        debug!(number, "Adding frame");
        self.frames.insert(number, frame);

        self.calculate_score();
        Ok(())
    }

    /// Appends each frame in order.
    ///
    /// # Errors
    ///
    /// Stops at the first rejected frame; frames before it stay added.
    #[instrument(skip(self, frames))]
    pub fn add_frames(&mut self, frames: impl IntoIterator<Item = Frame>) -> Result<(), ScoringError> {
        for frame in frames {
            self.add_frame(frame)?;
        }
        Ok(())
    }

    /// Substitutes the frame stored at `number`.
    ///
    /// # Errors
    ///
    /// Returns [`ScoringErrorKind::FrameNotFound`] if no frame is visible at
    /// `number`, or a validation error for an out-of-range frame.
    #[instrument(skip(self, frame), fields(frame = %frame))]
    pub fn replace_frame(&mut self, number: usize, frame: Frame) -> Result<(), ScoringError> {
        if self.retrieve_frame(number).is_none() {
            warn!(number, "Frame not found");
            return Err(ScoringError::new(ScoringErrorKind::FrameNotFound(number)));
        }

        LegalFrame::check(&frame)?;

        self.frames.insert(number, frame);

        self.calculate_score();
        Ok(())
    }

    /// Removes the frame at `number`. Does nothing if there is none.
    #[instrument(skip(self))]
    pub fn delete_frame(&mut self, number: usize) {
        if self.retrieve_frame(number).is_none() {
            debug!("No frame to delete");
            return;
        }

        self.frames.remove(&number);

        self.calculate_score();
    }

    /// Returns the frame at `number`, if one is visible there.
    pub fn retrieve_frame(&self, number: usize) -> Option<&Frame> {
        if (1..=self.frames.len()).contains(&number) {
            self.frames.get(&number)
        } else {
            None
        }
    }

    /// Returns the frame `ahead` places after `number`.
    fn frame_ahead(&self, number: usize, ahead: usize) -> Option<&Frame> {
        self.retrieve_frame(number + ahead)
    }

    /// Returns the score of the frame before `number`, 0 if there is none.
    fn prior_score(&self, number: usize) -> u16 {
        number
            .checked_sub(1)
            .and_then(|prior| self.retrieve_frame(prior))
            .map_or(0, Frame::score)
    }

    /// Rescores every frame, then republishes the game.
    #[instrument(skip(self), fields(frames = self.frames.len()))]
    fn calculate_score(&mut self) {
        let top = self.frames.len();
        for number in 1..=top {
            let Some(frame) = self.frames.get(&number).copied() else {
                debug!(number, "Gap in frame numbers");
                continue;
            };

            let earned = match frame.kind() {
                FrameKind::Open => frame.total(),
                FrameKind::Spare => self.spare_pins(number),
                FrameKind::Strike => self.strike_pins(number),
            };
            // Saturates at u16::MAX once a long run of bonus entries passes it.
            let score = self.prior_score(number).saturating_add(earned);

            if let Some(stored) = self.frames.get_mut(&number) {
                stored.set_score(score);
            }
        }

        self.set_frames_to_game();
        self.set_finished_game_properties();
    }

    /// Ten plus the next ball, if thrown.
    fn spare_pins(&self, number: usize) -> u16 {
        let bonus = self
            .frame_ahead(number, 1)
            .map_or(0, |next| u16::from(next.first_ball()));
        MARK_1 + bonus
    }

    /// Ten plus the next two balls, as far as they are known.
    fn strike_pins(&self, number: usize) -> u16 {
        let Some(next) = self.frame_ahead(number, 1) else {
            return MARK_1;
        };

        match next.kind() {
            FrameKind::Open => MARK_1 + next.total(),
            FrameKind::Spare => MARK_2,
            FrameKind::Strike => match self.frame_ahead(number, 2) {
                None => MARK_2,
                Some(after) if after.is_strike() => MARK_3,
                Some(after) => MARK_2 + u16::from(after.first_ball()),
            },
        }
    }

    /// Replaces the game's frame list with the frames currently in view.
    fn set_frames_to_game(&mut self) {
        let frames: Vec<Frame> = self
            .frames
            .range(..=self.frames.len())
            .map(|(_, frame)| *frame)
            .collect();
        self.game.replace_frames(frames);
    }

    /// Sets the game score and completion flag.
    fn set_finished_game_properties(&mut self) {
        let last_scored = self.frames.len().min(LAST_FRAME);
        let score = self
            .frames
            .range(..=last_scored)
            .next_back()
            .map_or(0, |(_, frame)| frame.score());
        self.game.set_score(score);

        let was_complete = self.game.is_complete();
        let complete = self.is_complete();
        self.game.set_complete(complete);

        if complete && !was_complete {
            info!(score, "Game complete");
        }
        debug!(score, complete, "Game rescored");
    }

    /// Applies the tenth-frame completion rule.
    fn is_complete(&self) -> bool {
        if self.frames.len() < LAST_FRAME {
            return false;
        }
        let Some(tenth) = self.retrieve_frame(LAST_FRAME) else {
            return false;
        };

        match tenth.kind() {
            FrameKind::Open => true,
            FrameKind::Spare => self.frame_ahead(LAST_FRAME, 1).is_some(),
            FrameKind::Strike => match self.frame_ahead(LAST_FRAME, 1) {
                Some(next) if !next.is_strike() => true,
                _ => self.frame_ahead(LAST_FRAME, 2).is_some(),
            },
        }
    }
}
