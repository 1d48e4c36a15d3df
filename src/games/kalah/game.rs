//! Kalah rules.

use crate::core::action::MoveOutcome;
use crate::core::board::Board;
use crate::core::player::Player;
use crate::core::state::GameState;
use crate::rules::{GameResult, MoveList, RulesEngine};

use super::sowing::sow;

/// Kalah with six pits a side.
///
/// Stateless: every method works on the `GameState` it is given.
/// Boards are assumed to hold at most `u32::MAX` stones in total;
/// [`BoardEngine::from_state`](crate::session::BoardEngine::from_state)
/// checks this for positions that did not come from play.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Kalah;

impl Kalah {
    /// Create the rules.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// The game ends as soon as either side has no stones left in its pits.
    #[must_use]
    pub fn is_game_over(board: &Board) -> bool {
        Player::ALL.into_iter().any(|player| board.side_is_empty(player))
    }
}

impl RulesEngine for Kalah {
    fn legal_moves(&self, state: &GameState) -> MoveList {
        state
            .to_move
            .pits()
            .filter(|&pit| state.board[pit] > 0)
            .collect()
    }

    fn is_legal(&self, state: &GameState, pit: usize) -> bool {
        let owner = Player::owner_of(pit);
        owner == state.to_move && pit != owner.store() && state.board[pit] > 0
    }

    fn apply_move(&self, state: &mut GameState, pit: usize) -> Option<MoveOutcome> {
        if !self.is_legal(state, pit) {
            return None;
        }

        let player = state.to_move;
        let sown = sow(&mut state.board, player, pit);

        let game_over = Self::is_game_over(&state.board);
        if game_over {
            state.board.sweep();
        }

        let outcome = MoveOutcome {
            player,
            pit,
            last_pit: sown.last_pit,
            extra_turn: sown.extra_turn,
            capture: sown.capture,
            game_over,
        };
        if outcome.turn_passes() {
            state.to_move = player.opponent();
        }

        Some(outcome)
    }

    fn is_terminal(&self, state: &GameState) -> Option<GameResult> {
        if Self::is_game_over(&state.board) {
            Some(self.score(state))
        } else {
            None
        }
    }

    fn score(&self, state: &GameState) -> GameResult {
        GameResult::from_stores(state.board.store(Player::A), state.board.store(Player::B))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::Capture;

    fn state(a: [u32; 6], b: [u32; 6], stores: (u32, u32), to_move: Player) -> GameState {
        GameState::new(Board::from_sides(a, b, stores), to_move)
    }

    #[test]
    fn test_legal_moves_initial() {
        let rules = Kalah::new();
        let a = GameState::initial(4, Player::A);
        let b = GameState::initial(4, Player::B);

        assert_eq!(rules.legal_moves(&a).as_slice(), &[0, 1, 2, 3, 4, 5]);
        assert_eq!(rules.legal_moves(&b).as_slice(), &[7, 8, 9, 10, 11, 12]);
    }

    #[test]
    fn test_legal_moves_skip_empty_pits() {
        let rules = Kalah::new();
        let s = state([0, 2, 0, 1, 0, 0], [1; 6], (0, 0), Player::A);
        assert_eq!(rules.legal_moves(&s).as_slice(), &[1, 3]);
    }

    #[test]
    fn test_illegal_moves_leave_state_untouched() {
        let rules = Kalah::new();
        let original = state([1, 0, 3, 3, 3, 3], [3; 6], (2, 5), Player::A);

        for pit in [1, 6, 7, 10, 13] {
            let mut s = original;
            assert!(rules.apply_move(&mut s, pit).is_none(), "pit {pit} should be illegal");
            assert_eq!(s, original);
        }
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_out_of_range_pit_panics() {
        let rules = Kalah::new();
        let mut s = GameState::initial(4, Player::A);
        let _ = rules.apply_move(&mut s, 14);
    }

    #[test]
    fn test_capture_golden_board() {
        let rules = Kalah::new();
        let mut s = state([1, 0, 3, 3, 3, 3], [3; 6], (0, 0), Player::A);

        let outcome = rules.apply_move(&mut s, 0).unwrap();

        assert_eq!(
            outcome.capture,
            Some(Capture {
                pit: 1,
                opposite: 11,
                stones: 4
            })
        );
        assert_eq!(s.board.store(Player::A), 4);
        assert_eq!(s.board.side(Player::A), &[0, 0, 3, 3, 3, 3]);
        assert_eq!(s.board.side(Player::B), &[3, 3, 3, 3, 0, 3]);
        assert_eq!(s.board.total(), 37);
        assert_eq!(s.to_move, Player::B);
        assert!(!outcome.game_over);
    }

    #[test]
    fn test_player_b_capture() {
        let rules = Kalah::new();
        let mut s = state([3; 6], [1, 0, 3, 3, 3, 3], (0, 0), Player::B);

        let outcome = rules.apply_move(&mut s, 7).unwrap();

        assert_eq!(
            outcome.capture,
            Some(Capture {
                pit: 8,
                opposite: 4,
                stones: 4
            })
        );
        assert_eq!(s.board.store(Player::B), 4);
        assert_eq!(s.board[4], 0);
        assert_eq!(s.board[8], 0);
        assert_eq!(s.to_move, Player::A);
    }

    #[test]
    fn test_wraparound_capture_on_origin_pit() {
        // 13 stones visit every other cell once and land back in the
        // emptied origin pit.
        let rules = Kalah::new();
        let mut s = state([13, 1, 1, 1, 1, 1], [1; 6], (0, 0), Player::A);

        let outcome = rules.apply_move(&mut s, 0).unwrap();

        assert_eq!(outcome.last_pit, 0);
        assert_eq!(
            outcome.capture,
            Some(Capture {
                pit: 0,
                opposite: 12,
                stones: 3
            })
        );
        assert_eq!(s.board.side(Player::A), &[0, 2, 2, 2, 2, 2]);
        assert_eq!(s.board.side(Player::B), &[2, 2, 2, 2, 2, 0]);
        assert_eq!(s.board.store(Player::A), 4);
        assert_eq!(s.board.store(Player::B), 0);
        assert_eq!(s.board.total(), 24);
    }

    #[test]
    fn test_player_a_skips_b_store() {
        let rules = Kalah::new();
        let mut s = state([1, 1, 1, 1, 1, 10], [1; 6], (0, 0), Player::A);

        let outcome = rules.apply_move(&mut s, 5).unwrap();

        assert_eq!(outcome.last_pit, 2);
        assert!(outcome.capture.is_none());
        assert_eq!(s.board.store(Player::A), 1);
        assert_eq!(s.board.store(Player::B), 0);
        assert_eq!(s.board.side(Player::A), &[2, 2, 2, 1, 1, 0]);
        assert_eq!(s.board.side(Player::B), &[2; 6]);
        assert_eq!(s.board.total(), 21);
    }

    #[test]
    fn test_player_b_skips_a_store() {
        let rules = Kalah::new();
        let mut s = state([1; 6], [1, 1, 1, 1, 1, 10], (0, 0), Player::B);

        let outcome = rules.apply_move(&mut s, 12).unwrap();

        assert_eq!(outcome.last_pit, 9);
        assert_eq!(s.board.store(Player::B), 1);
        assert_eq!(s.board.store(Player::A), 0);
        assert_eq!(s.board.side(Player::A), &[2; 6]);
        assert_eq!(s.board.side(Player::B), &[2, 2, 2, 1, 1, 0]);
    }

    #[test]
    fn test_extra_turn_keeps_mover() {
        let rules = Kalah::new();
        let mut s = GameState::initial(4, Player::A);

        let outcome = rules.apply_move(&mut s, 2).unwrap();

        assert!(outcome.extra_turn);
        assert_eq!(outcome.last_pit, 6);
        assert_eq!(s.to_move, Player::A);

        let mut s = GameState::initial(4, Player::B);
        let outcome = rules.apply_move(&mut s, 9).unwrap();

        assert!(outcome.extra_turn);
        assert_eq!(outcome.last_pit, 13);
        assert_eq!(s.to_move, Player::B);
    }

    #[test]
    fn test_turn_passes() {
        let rules = Kalah::new();
        let mut s = GameState::initial(4, Player::A);

        let outcome = rules.apply_move(&mut s, 0).unwrap();

        assert!(!outcome.extra_turn);
        assert_eq!(s.to_move, Player::B);
    }

    #[test]
    fn test_game_end_sweep_golden_board() {
        let rules = Kalah::new();
        let mut s = state([0; 6], [0, 2, 0, 0, 5, 0], (10, 9), Player::B);

        let outcome = rules.apply_move(&mut s, 8).unwrap();

        assert!(outcome.game_over);
        assert!(Kalah::is_game_over(&s.board));
        assert_eq!(s.board.store(Player::B), 16);
        assert_eq!(s.board.store(Player::A), 10);
        assert!(s.board.side_is_empty(Player::B));
        assert_eq!(s.board.total(), 26);
        assert_eq!(rules.is_terminal(&s), Some(GameResult::Winner(Player::B)));
        assert!(rules.legal_moves(&s).is_empty());
    }

    #[test]
    fn test_game_ends_on_extra_turn() {
        let rules = Kalah::new();
        let mut s = state([0, 0, 0, 0, 0, 1], [1, 0, 2, 0, 0, 0], (20, 12), Player::A);

        let outcome = rules.apply_move(&mut s, 5).unwrap();

        assert!(outcome.extra_turn);
        assert!(outcome.game_over);
        assert_eq!(s.board.store(Player::A), 21);
        assert_eq!(s.board.store(Player::B), 15);
        assert!(rules.legal_moves(&s).is_empty());
    }

    #[test]
    fn test_score_before_game_over() {
        let rules = Kalah::new();
        let s = state([4; 6], [4; 6], (3, 3), Player::A);
        assert_eq!(rules.is_terminal(&s), None);
        assert_eq!(rules.score(&s), GameResult::Tie);

        let s = state([4; 6], [4; 6], (1, 3), Player::A);
        assert_eq!(rules.score(&s), GameResult::Winner(Player::B));
    }
}
