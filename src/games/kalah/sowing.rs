//! The sowing walk: one stone per pit, counter-clockwise.
//!
//! Rules applied while walking:
//! - The opponent's store is skipped and does not count as a step.
//! - A last stone in the mover's own store earns an extra turn.
//! - A last stone in an empty pit on the mover's side captures: it and the
//!   opposite pit's stones go to the mover's store. No capture if the
//!   opposite pit is empty.

use crate::core::action::Capture;
use crate::core::board::{Board, TOTAL_PITS};
use crate::core::player::{opposite_pit, Player};

/// What a single sow did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Sow {
    pub last_pit: usize,
    pub extra_turn: bool,
    pub capture: Option<Capture>,
}

/// Next cell after `index`, jumping over `skipped_store`.
fn next_pit(index: usize, skipped_store: usize) -> usize {
    let next = (index + 1) % TOTAL_PITS;
    if next == skipped_store {
        (next + 1) % TOTAL_PITS
    } else {
        next
    }
}

/// Empty `pit` and sow its stones for `mover`.
///
/// The caller has checked that `pit` belongs to `mover` and is not empty.
pub(crate) fn sow(board: &mut Board, mover: Player, pit: usize) -> Sow {
    let own_store = mover.store();
    let skipped_store = mover.opponent().store();

    let mut remaining = board[pit];
    debug_assert!(remaining > 0, "sowing an empty pit");
    board[pit] = 0;

    let mut index = pit;
    let mut capture = None;

    while remaining > 0 {
        index = next_pit(index, skipped_store);
        remaining -= 1;

        if remaining == 0 && mover.owns_pit(index) && board[index] == 0 {
            let opposite = opposite_pit(index);
            let taken = board[opposite];
            if taken > 0 {
                board[opposite] = 0;
                board[own_store] += taken + 1;
                capture = Some(Capture {
                    pit: index,
                    opposite,
                    stones: taken + 1,
                });
                break;
            }
        }

        board[index] += 1;
    }

    Sow {
        last_pit: index,
        extra_turn: index == own_store,
        capture,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::board::{A_STORE, B_STORE};

    #[test]
    fn test_next_pit_skips_opponent_store() {
        // Player A skips 13
        assert_eq!(next_pit(5, B_STORE), 6);
        assert_eq!(next_pit(12, B_STORE), 0);
        // Player B skips 6
        assert_eq!(next_pit(5, A_STORE), 7);
        assert_eq!(next_pit(12, A_STORE), 13);
        assert_eq!(next_pit(13, A_STORE), 0);
    }

    #[test]
    fn test_simple_sow() {
        let mut board = Board::initial(4);
        let result = sow(&mut board, Player::A, 0);

        assert_eq!(board.side(Player::A), &[0, 5, 5, 5, 5, 4]);
        assert_eq!(result.last_pit, 4);
        assert!(!result.extra_turn);
        assert!(result.capture.is_none());
    }

    #[test]
    fn test_last_stone_in_own_store() {
        let mut board = Board::initial(4);
        let result = sow(&mut board, Player::A, 2);

        assert_eq!(result.last_pit, A_STORE);
        assert!(result.extra_turn);
        assert_eq!(board.store(Player::A), 1);
    }

    #[test]
    fn test_capture() {
        let mut board = Board::from_sides([1, 0, 3, 3, 3, 3], [3; 6], (0, 0));
        let result = sow(&mut board, Player::A, 0);

        assert_eq!(
            result.capture,
            Some(Capture {
                pit: 1,
                opposite: 11,
                stones: 4
            })
        );
        assert_eq!(board[0], 0);
        assert_eq!(board[1], 0);
        assert_eq!(board[11], 0);
        assert_eq!(board.store(Player::A), 4);
    }

    #[test]
    fn test_no_capture_when_opposite_empty() {
        let mut board = Board::from_sides([1, 0, 3, 3, 3, 3], [3, 3, 3, 3, 0, 3], (0, 0));
        let result = sow(&mut board, Player::A, 0);

        assert!(result.capture.is_none());
        assert_eq!(board[1], 1);
        assert_eq!(board.store(Player::A), 0);
    }

    #[test]
    fn test_no_capture_on_opponent_side() {
        // A's last stone lands in B's empty pit 7
        let mut board = Board::from_sides([3, 3, 3, 3, 3, 2], [0, 3, 3, 3, 3, 3], (0, 0));
        let result = sow(&mut board, Player::A, 5);

        assert_eq!(result.last_pit, 7);
        assert!(result.capture.is_none());
        assert_eq!(board[7], 1);
    }
}
