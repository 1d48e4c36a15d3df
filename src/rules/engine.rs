//! Rules engine trait for game implementations.
//!
//! Implementations decide:
//! - What moves are legal
//! - How a move changes the state
//! - When the game is over and who won

use smallvec::SmallVec;

use crate::core::action::MoveOutcome;
use crate::core::board::PITS_PER_PLAYER;
use crate::core::player::Player;
use crate::core::state::GameState;

/// Legal pits for the player on move. Never more than one side's worth.
pub type MoveList = SmallVec<[usize; PITS_PER_PLAYER]>;

/// Result of comparing the two stores.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum GameResult {
    /// One player has strictly more stones in their store.
    Winner(Player),
    /// Both stores hold the same number of stones.
    Tie,
}

impl GameResult {
    /// Compare two store counts.
    #[must_use]
    pub fn from_stores(a_store: u32, b_store: u32) -> Self {
        match a_store.cmp(&b_store) {
            std::cmp::Ordering::Greater => GameResult::Winner(Player::A),
            std::cmp::Ordering::Less => GameResult::Winner(Player::B),
            std::cmp::Ordering::Equal => GameResult::Tie,
        }
    }

    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: Player) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameResult::Winner(player) => write!(f, "{player} wins"),
            GameResult::Tie => write!(f, "Tie"),
        }
    }
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `legal_moves`: Return empty if the player on move cannot act
/// - `apply_move`: Must be deterministic; an illegal move returns `None`
///   and leaves the state untouched
/// - `is_terminal`: Return `None` if the game continues
pub trait RulesEngine {
    /// Pits the player on move may sow.
    fn legal_moves(&self, state: &GameState) -> MoveList;

    /// Check a single pit without building the full list.
    ///
    /// Panics if `pit` is not a board index.
    fn is_legal(&self, state: &GameState, pit: usize) -> bool;

    /// Sow `pit` for the player on move.
    ///
    /// Returns `None`, without touching `state`, if the move is illegal.
    fn apply_move(&self, state: &mut GameState, pit: usize) -> Option<MoveOutcome>;

    /// Check if the game is over.
    ///
    /// Returns `Some(result)` if the game has ended, `None` if it continues.
    fn is_terminal(&self, state: &GameState) -> Option<GameResult>;

    /// Current standing by store counts, whether or not the game is over.
    fn score(&self, state: &GameState) -> GameResult;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_stores() {
        assert_eq!(GameResult::from_stores(25, 23), GameResult::Winner(Player::A));
        assert_eq!(GameResult::from_stores(10, 38), GameResult::Winner(Player::B));
        assert_eq!(GameResult::from_stores(24, 24), GameResult::Tie);
        assert_eq!(GameResult::from_stores(0, 0), GameResult::Tie);
    }

    #[test]
    fn test_game_result_is_winner() {
        let result = GameResult::Winner(Player::B);
        assert!(!result.is_winner(Player::A));
        assert!(result.is_winner(Player::B));

        let tie = GameResult::Tie;
        assert!(!tie.is_winner(Player::A));
        assert!(!tie.is_winner(Player::B));
    }

    #[test]
    fn test_display() {
        assert_eq!(GameResult::Winner(Player::A).to_string(), "Player A wins");
        assert_eq!(GameResult::Tie.to_string(), "Tie");
    }
}
