//! Fixed-width text game sheets.
//!
//! A sheet has a header numbering frames 1 to 10 and, per game, a rule, a
//! marks row (bowler name first), a separator row and a running score row.
//! Frames 1 to 9 are 11 columns wide; frame 10 is 17 columns wide so it can
//! show up to three balls. Rendering only reads the game.

use crate::config::SheetStyle;
use crate::types::{Frame, FrameKind, Game, LAST_FRAME};
use tracing::instrument;

const COL_DELIM: char = '|';
/// Width of frames 1 to 9.
const CELL: usize = 11;
/// Width of frame 10.
const TENTH_CELL: usize = 17;
/// Width of one ball inside a frame, excluding its delimiter.
const BALL_CELL: usize = 5;
/// Spaces before a ball mark.
const BALL_PADDING: usize = 2;
/// Spaces before a running score.
const SCORE_PADDING: usize = 5;
/// Spaces before the running score of frame 10.
const TENTH_SCORE_PADDING: usize = 7;
/// Balls shown in frame 10.
const TENTH_BALLS: usize = 3;

/// Renders games as aligned text.
#[derive(Debug, Clone, Default)]
pub struct GameSheet {
    style: SheetStyle,
}

impl GameSheet {
    /// Creates a renderer with the given style.
    #[instrument(skip(style), fields(name_width = style.name_width()))]
    pub fn new(style: SheetStyle) -> Self {
        Self { style }
    }

    /// Returns the style.
    pub fn style(&self) -> &SheetStyle {
        &self.style
    }

    /// Renders one game followed by its completion state.
    #[instrument(skip(self, game), fields(bowler = %game.bowler().display_name()))]
    pub fn render(&self, game: &Game) -> String {
        let mut out = self.header();
        out.push_str(&self.game_block(game));
        out.push_str("\nGame: ");
        out.push_str(if game.is_complete() {
            "Complete"
        } else {
            "Incomplete"
        });
        out.push('\n');
        out
    }

    /// Renders several games under a single header.
    #[instrument(skip(self, games), fields(games = games.len()))]
    pub fn render_all(&self, games: &[Game]) -> String {
        let mut out = self.header();
        for game in games {
            out.push_str(&self.game_block(game));
        }
        out
    }

    /// Total width of a game block.
    pub fn line_length(&self) -> usize {
        self.style.name_width() + 1 + (LAST_FRAME - 1) * (CELL + 1) + TENTH_CELL + 1
    }

    fn cell_width(number: usize) -> usize {
        if number == LAST_FRAME { TENTH_CELL } else { CELL }
    }

    fn header(&self) -> String {
        let mut out = " ".repeat(self.style.name_width());
        for number in 1..=LAST_FRAME {
            let width = Self::cell_width(number);
            out.push(COL_DELIM);
            out.push_str(&format!("{:^width$}", number));
        }
        out.push(COL_DELIM);
        out.push('\n');
        out
    }

    fn game_block(&self, game: &Game) -> String {
        let width = self.style.name_width();
        let frames = game.frames();

        let mut out = "-".repeat(self.line_length());
        out.push('\n');
        out.push_str(&format!("{:<width$}", game.bowler().display_name()));
        out.push(COL_DELIM);
        out.push_str(&self.marks_row(frames));
        out.push_str(&self.separator_row());
        out.push_str(&self.score_row(frames));
        out
    }

    fn marks_row(&self, frames: &[Frame]) -> String {
        let mut out = String::new();
        for index in 0..LAST_FRAME - 1 {
            out.push_str(&self.frame_marks(frames.get(index)));
        }
        let tenth = frames.get(LAST_FRAME - 1..).unwrap_or_default();
        out.push_str(&self.tenth_frame_marks(tenth));
        out.push('\n');
        out
    }

    fn frame_marks(&self, frame: Option<&Frame>) -> String {
        let Some(frame) = frame else {
            return format!("{}{}", Self::ball_cell(" "), Self::ball_cell(" "));
        };

        match frame.kind() {
            FrameKind::Strike => {
                let side = " ".repeat(CELL / 2);
                format!("{side}{}{side}{COL_DELIM}", self.style.strike_mark())
            }
            FrameKind::Spare => format!(
                "{}{}",
                Self::ball_cell(&self.pin_mark(frame.first_ball(), frame.split())),
                Self::ball_cell(&self.style.spare_mark().to_string()),
            ),
            FrameKind::Open => format!(
                "{}{}",
                Self::ball_cell(&self.pin_mark(frame.first_ball(), frame.split())),
                Self::ball_cell(&self.pin_mark(frame.second_ball(), false)),
            ),
        }
    }

    /// Marks for frame 10, drawn from its entry and the bonus entries after it.
    fn tenth_frame_marks(&self, frames: &[Frame]) -> String {
        let balls = self.tenth_frame_balls(frames);
        (0..TENTH_BALLS)
            .map(|index| Self::ball_cell(balls.get(index).map_or(" ", String::as_str)))
            .collect()
    }

    fn tenth_frame_balls(&self, frames: &[Frame]) -> Vec<String> {
        let strike = self.style.strike_mark().to_string();
        let spare = self.style.spare_mark().to_string();

        let mut balls = Vec::with_capacity(TENTH_BALLS);
        let Some(tenth) = frames.first() else {
            return balls;
        };

        match tenth.kind() {
            FrameKind::Strike => {
                balls.push(strike.clone());
                if let Some(bonus) = frames.get(1) {
                    if bonus.is_strike() {
                        balls.push(strike);
                        if let Some(last) = frames.get(2) {
                            balls.push(self.first_ball_mark(last));
                        }
                    } else {
                        balls.push(self.pin_mark(bonus.first_ball(), bonus.split()));
                        balls.push(if bonus.is_spare() {
                            spare
                        } else {
                            self.pin_mark(bonus.second_ball(), false)
                        });
                    }
                }
            }
            FrameKind::Spare => {
                balls.push(self.pin_mark(tenth.first_ball(), tenth.split()));
                balls.push(spare);
                if let Some(bonus) = frames.get(1) {
                    balls.push(self.first_ball_mark(bonus));
                }
            }
            FrameKind::Open => {
                balls.push(self.pin_mark(tenth.first_ball(), tenth.split()));
                balls.push(self.pin_mark(tenth.second_ball(), false));
            }
        }
        balls
    }

    fn first_ball_mark(&self, frame: &Frame) -> String {
        if frame.is_strike() {
            self.style.strike_mark().to_string()
        } else {
            self.pin_mark(frame.first_ball(), frame.split())
        }
    }

    fn pin_mark(&self, pins: u8, split: bool) -> String {
        match pins {
            0 => self.style.gutter_mark().to_string(),
            _ if split => format!("{}{}", self.style.split_mark(), pins),
            _ => pins.to_string(),
        }
    }

    /// One ball: leading padding, the mark, trailing padding, delimiter.
    fn ball_cell(mark: &str) -> String {
        let trailing = BALL_CELL.saturating_sub(BALL_PADDING + mark.chars().count());
        format!(
            "{}{}{}{}",
            " ".repeat(BALL_PADDING),
            mark,
            " ".repeat(trailing),
            COL_DELIM
        )
    }

    fn separator_row(&self) -> String {
        let mut out = " ".repeat(self.style.name_width());
        out.push(COL_DELIM);
        for number in 1..=LAST_FRAME {
            out.push_str(&"-".repeat(Self::cell_width(number)));
            out.push(COL_DELIM);
        }
        out.push('\n');
        out
    }

    fn score_row(&self, frames: &[Frame]) -> String {
        let mut out = " ".repeat(self.style.name_width());
        out.push(COL_DELIM);
        for number in 1..=LAST_FRAME {
            let width = Self::cell_width(number);
            let text = match frames.get(number - 1) {
                Some(frame) => {
                    let padding = if number == LAST_FRAME {
                        TENTH_SCORE_PADDING
                    } else {
                        SCORE_PADDING
                    };
                    format!("{}{}", " ".repeat(padding), frame.score())
                }
                None => String::new(),
            };
            out.push_str(&format!("{text:<width$}"));
            out.push(COL_DELIM);
        }
        out.push('\n');
        out
    }
}
