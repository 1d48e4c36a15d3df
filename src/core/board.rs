//! The Kalah board: fourteen stone counts.
//!
//! Stores are regular cells of the array; which cell is which is described in
//! [`Player`](super::Player). Out-of-range indices are caller bugs and panic.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::player::Player;

/// Number of cells on the board, stores included.
pub const TOTAL_PITS: usize = 14;

/// Number of playable pits each player owns.
pub const PITS_PER_PLAYER: usize = TOTAL_PITS / 2 - 1;

/// Index of player A's store.
pub const A_STORE: usize = PITS_PER_PLAYER;

/// Index of player B's store.
pub const B_STORE: usize = TOTAL_PITS - 1;

/// Stone counts for every pit and store.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    pits: [u32; TOTAL_PITS],
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            pits: [0; TOTAL_PITS],
        }
    }

    /// Create a starting board: `stones_per_pit` in every pit, stores empty.
    #[must_use]
    pub fn initial(stones_per_pit: u32) -> Self {
        let mut board = Self::empty();
        for player in Player::ALL {
            for pit in player.pits() {
                board.pits[pit] = stones_per_pit;
            }
        }
        board
    }

    /// Create a board from each side's six pits and the two stores.
    ///
    /// ```
    /// use kalah::core::Board;
    ///
    /// let board = Board::from_sides([1, 0, 3, 3, 3, 3], [3; 6], (0, 0));
    /// assert_eq!(board[0], 1);
    /// assert_eq!(board[11], 3);
    /// assert_eq!(board.total(), 37);
    /// ```
    #[must_use]
    pub fn from_sides(
        a_pits: [u32; PITS_PER_PLAYER],
        b_pits: [u32; PITS_PER_PLAYER],
        stores: (u32, u32),
    ) -> Self {
        let mut board = Self::empty();
        board.pits[Player::A.pits()].copy_from_slice(&a_pits);
        board.pits[Player::B.pits()].copy_from_slice(&b_pits);
        board.pits[A_STORE] = stores.0;
        board.pits[B_STORE] = stores.1;
        board
    }

    /// Raw cell counts, indices 0..13.
    #[must_use]
    pub fn as_array(&self) -> &[u32; TOTAL_PITS] {
        &self.pits
    }

    /// Stones in the given cell.
    #[must_use]
    pub fn get(&self, index: usize) -> u32 {
        self[index]
    }

    /// Stones in a player's store.
    #[must_use]
    pub fn store(&self, player: Player) -> u32 {
        self.pits[player.store()]
    }

    /// A player's six pits.
    #[must_use]
    pub fn side(&self, player: Player) -> &[u32] {
        &self.pits[player.pits()]
    }

    /// Stones still in play on a player's side (store excluded).
    #[must_use]
    pub fn side_total(&self, player: Player) -> u32 {
        self.side(player).iter().sum()
    }

    /// Check whether all of a player's pits are empty.
    #[must_use]
    pub fn side_is_empty(&self, player: Player) -> bool {
        self.side(player).iter().all(|&stones| stones == 0)
    }

    /// Total stones on the board. Constant for the whole game.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.pits.iter().sum()
    }

    /// Total stones, or `None` if the count does not fit in a `u32`.
    ///
    /// No cell can hold more than the total, so sowing, capturing and
    /// sweeping a board whose total fits never overflow.
    #[must_use]
    pub fn checked_total(&self) -> Option<u32> {
        self.pits
            .iter()
            .try_fold(0u32, |sum, &stones| sum.checked_add(stones))
    }

    /// Move every stone left on each side into that side's store.
    ///
    /// Returns the number of stones moved per player, `(a, b)`.
    pub fn sweep(&mut self) -> (u32, u32) {
        let mut moved = [0u32; 2];
        for (player, slot) in Player::ALL.into_iter().zip(moved.iter_mut()) {
            let remaining = self.side_total(player);
            self.pits[player.pits()].fill(0);
            self.pits[player.store()] += remaining;
            *slot = remaining;
        }
        (moved[0], moved[1])
    }
}

impl Index<usize> for Board {
    type Output = u32;

    fn index(&self, index: usize) -> &Self::Output {
        assert!(index < TOTAL_PITS, "pit index {index} out of range (0..{TOTAL_PITS})");
        &self.pits[index]
    }
}

impl IndexMut<usize> for Board {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        assert!(index < TOTAL_PITS, "pit index {index} out of range (0..{TOTAL_PITS})");
        &mut self.pits[index]
    }
}

impl std::fmt::Display for Board {
    /// Renders the board as seen from player A's seat.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "    ")?;
        for pit in Player::B.pits().rev() {
            write!(f, "{:>3}", self.pits[pit])?;
        }
        writeln!(f)?;
        writeln!(f, "{:>3}{:>21}", self.pits[B_STORE], self.pits[A_STORE])?;
        write!(f, "    ")?;
        for pit in Player::A.pits() {
            write!(f, "{:>3}", self.pits[pit])?;
        }
        Ok(())
    }
}
