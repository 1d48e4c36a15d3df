//! Player identification and side ownership.
//!
//! ## Player
//!
//! Kalah is strictly two-player. Each player owns one row of six pits and the
//! store at the end of that row:
//!
//! ```text
//!        12 11 10  9  8  7
//!    13                     6
//!         0  1  2  3  4  5
//! ```
//!
//! Player A owns pits `0..=5` and store `6`; player B owns pits `7..=12` and
//! store `13`. Sowing runs counter-clockwise, i.e. in increasing index order.

use serde::{Deserialize, Serialize};
use std::ops::Range;

use super::board::{PITS_PER_PLAYER, TOTAL_PITS};

/// One of the two Kalah players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Owns the bottom row (pits 0..=5) and store 6.
    A,
    /// Owns the top row (pits 7..=12) and store 13.
    B,
}

impl Player {
    /// Both players, A first.
    pub const ALL: [Player; 2] = [Player::A, Player::B];

    /// Get the other player.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Player::A => Player::B,
            Player::B => Player::A,
        }
    }

    /// Index of this player's store.
    #[must_use]
    pub const fn store(self) -> usize {
        match self {
            Player::A => PITS_PER_PLAYER,
            Player::B => TOTAL_PITS - 1,
        }
    }

    /// Indices of this player's six pits (store excluded).
    ///
    /// ```
    /// use kalah::core::Player;
    ///
    /// assert_eq!(Player::A.pits(), 0..6);
    /// assert_eq!(Player::B.pits(), 7..13);
    /// ```
    #[must_use]
    pub const fn pits(self) -> Range<usize> {
        match self {
            Player::A => 0..PITS_PER_PLAYER,
            Player::B => PITS_PER_PLAYER + 1..TOTAL_PITS - 1,
        }
    }

    /// Check whether `index` is one of this player's pits (stores excluded).
    #[must_use]
    pub fn owns_pit(self, index: usize) -> bool {
        self.pits().contains(&index)
    }

    /// Which player's side `index` lies on, store included.
    ///
    /// Panics if `index` is not a valid board position.
    #[must_use]
    pub fn owner_of(index: usize) -> Self {
        assert!(index < TOTAL_PITS, "pit index {index} out of range (0..{TOTAL_PITS})");
        if index <= Player::A.store() {
            Player::A
        } else {
            Player::B
        }
    }

    /// Check if this is player A.
    #[must_use]
    pub const fn is_a(self) -> bool {
        matches!(self, Player::A)
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::A => write!(f, "Player A"),
            Player::B => write!(f, "Player B"),
        }
    }
}

/// Index of the pit directly across the board from `index`.
///
/// Pits face each other in pairs summing to 12: `0 <-> 12`, `1 <-> 11`, ...,
/// `5 <-> 7`. Only meaningful for non-store indices.
///
/// ```
/// use kalah::core::opposite_pit;
///
/// assert_eq!(opposite_pit(1), 11);
/// assert_eq!(opposite_pit(7), 5);
/// ```
#[must_use]
pub fn opposite_pit(index: usize) -> usize {
    debug_assert!(
        index != Player::A.store() && index != Player::B.store(),
        "stores have no opposite pit"
    );
    Player::B.store() - 1 - index
}
