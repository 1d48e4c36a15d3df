//! Move results and move history records.
//!
//! A move in Kalah is just a pit index. What is worth recording is what the
//! move *did*: where the last stone landed, whether it captured, whether the
//! mover earned another turn and whether the game ended.

use serde::{Deserialize, Serialize};

use super::player::Player;

/// A capture made by the last stone of a sow.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Capture {
    /// Pit where the last stone landed (on the mover's side).
    pub pit: usize,

    /// The opponent's pit across from `pit`.
    pub opposite: usize,

    /// Stones moved into the mover's store: the landing stone plus the
    /// opposite pit's contents.
    pub stones: u32,
}

/// Everything a single accepted move did to the board and turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// The player who moved.
    pub player: Player,

    /// The pit that was emptied and sown.
    pub pit: usize,

    /// Where the last stone was dropped.
    pub last_pit: usize,

    /// Last stone landed in the mover's store; the mover goes again.
    pub extra_turn: bool,

    /// Capture made by the last stone, if any.
    pub capture: Option<Capture>,

    /// One side emptied and the remaining stones were swept into the stores.
    pub game_over: bool,
}

impl MoveOutcome {
    /// Check if the turn passes to the opponent after this move.
    #[must_use]
    pub fn turn_passes(&self) -> bool {
        !self.extra_turn
    }
}

/// A recorded move for history tracking.
///
/// Used for:
/// - Replaying a session
/// - Displaying the move list
/// - Debugging
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Move number within the session, starting at 1.
    pub ply: u32,

    /// What the move did.
    pub outcome: MoveOutcome,
}

impl MoveRecord {
    /// Create a new move record.
    #[must_use]
    pub fn new(ply: u32, outcome: MoveOutcome) -> Self {
        Self { ply, outcome }
    }

    /// The player who made the move.
    #[must_use]
    pub fn player(&self) -> Player {
        self.outcome.player
    }

    /// The pit that was played.
    #[must_use]
    pub fn pit(&self) -> usize {
        self.outcome.pit
    }
}

impl std::fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}. {} sows pit {}", self.ply, self.outcome.player, self.outcome.pit)?;
        if let Some(capture) = self.outcome.capture {
            write!(f, ", captures {} from pit {}", capture.stones, capture.opposite)?;
        }
        if self.outcome.extra_turn {
            write!(f, ", extra turn")?;
        }
        if self.outcome.game_over {
            write!(f, ", game over")?;
        }
        Ok(())
    }
}
