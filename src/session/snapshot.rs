//! The single retained undo point.

use serde::{Deserialize, Serialize};

use crate::core::board::Board;
use crate::core::player::Player;
use crate::core::state::GameState;

/// Board and mover captured at the start of the last accepted move.
///
/// `player` doubles as the "previous player": the mover of the last
/// confirmed move, which is who gets the turn back on undo.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Snapshot {
    /// Board before the move.
    pub board: Board,

    /// Player who made the move.
    pub player: Player,
}

impl Snapshot {
    /// Capture a position.
    #[must_use]
    pub fn capture(state: &GameState) -> Self {
        Self {
            board: state.board,
            player: state.to_move,
        }
    }

    /// The position to return to.
    #[must_use]
    pub fn restore(&self) -> GameState {
        GameState::new(self.board, self.player)
    }
}
