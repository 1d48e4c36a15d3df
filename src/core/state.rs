//! Game state: the board plus whose turn it is.
//!
//! `GameState` is everything the rules need to decide legality and apply a
//! move. Session concerns (undo, history, observers) live in
//! [`crate::session`] and never leak into rule evaluation.

use serde::{Deserialize, Serialize};

use super::board::Board;
use super::player::Player;

/// A position: board contents and the player on move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameState {
    /// Stone counts.
    pub board: Board,

    /// Player whose turn it is.
    pub to_move: Player,
}

impl GameState {
    /// Create a state from a board and the player on move.
    #[must_use]
    pub const fn new(board: Board, to_move: Player) -> Self {
        Self { board, to_move }
    }

    /// Starting position with `stones_per_pit` in every pit.
    #[must_use]
    pub fn initial(stones_per_pit: u32, to_move: Player) -> Self {
        Self::new(Board::initial(stones_per_pit), to_move)
    }

    /// Check if it is player A's turn.
    #[must_use]
    pub fn is_player_a_turn(&self) -> bool {
        self.to_move.is_a()
    }
}

impl Default for GameState {
    /// An empty board with player A on move, as before any setup.
    fn default() -> Self {
        Self::new(Board::empty(), Player::A)
    }
}
