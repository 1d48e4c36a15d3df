//! The board engine: one game session.
//!
//! `BoardEngine` wraps a [`GameState`] with everything a front end needs
//! around the bare rules:
//! - setup with an injected starting player
//! - move validation (illegal moves are silent no-ops)
//! - a single-level undo with a per-turn budget
//! - move history
//! - change notification
//!
//! ## Turn and undo state
//!
//! ```text
//!            make_move (turn passes)
//!   AwaitingMove(A) <───────────────> AwaitingMove(B)
//!     │  ↺ make_move (extra turn)       │  ↺
//!     │  ↺ undo                         │  ↺
//!     └──────────┐            ┌─────────┘
//!                ▼ one side empty ▼
//!                    GameOver
//! ```
//!
//! `undo` restores the board and mover captured at the start of the last
//! accepted move. It cannot be applied twice in a row, and a player may undo
//! at most `undo_budget` times before the turn passes to the opponent.
//! The move that ends the game can be undone like any other, which puts the
//! unswept position back on the board; once the game is over no further
//! moves are accepted, so that is the only way out of `GameOver`.

use im::Vector;

use crate::core::action::{MoveOutcome, MoveRecord};
use crate::core::board::Board;
use crate::core::config::{validate_stones_per_pit, GameConfig, MAX_UNDO_COUNT};
use crate::core::error::ConfigError;
use crate::core::player::Player;
use crate::core::rng::StarterSource;
use crate::core::state::GameState;
use crate::games::kalah::Kalah;
use crate::rules::{GameResult, MoveList, RulesEngine};

use super::observer::{Observer, ObserverId, ObserverRegistry};
use super::snapshot::Snapshot;

/// A Kalah game session.
///
/// ## Example
///
/// ```
/// use kalah::core::Player;
/// use kalah::rules::GameResult;
/// use kalah::session::BoardEngine;
///
/// let mut engine = BoardEngine::new();
/// engine.setup(4, &mut Player::A).unwrap();
///
/// // Pit 2 holds 4 stones: the last one lands in A's store.
/// let outcome = engine.make_move(2).unwrap();
/// assert!(outcome.extra_turn);
/// assert!(engine.is_player_a_turn());
///
/// // B's pits are not A's to play.
/// assert!(engine.make_move(9).is_none());
///
/// assert!(engine.undo());
/// assert_eq!(engine.get_marbles(2), 4);
/// assert_eq!(engine.get_undo_remaining(), 2);
/// assert_eq!(engine.winner(), GameResult::Tie);
/// ```
#[derive(Debug)]
pub struct BoardEngine {
    rules: Kalah,
    state: GameState,
    snapshot: Snapshot,
    undo_count: u32,
    undo_budget: u32,
    can_undo: bool,
    history: Vector<MoveRecord>,
    observers: ObserverRegistry,
}

impl Default for BoardEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardEngine {
    /// Create an engine with an empty board. Call [`setup`](Self::setup)
    /// before playing.
    #[must_use]
    pub fn new() -> Self {
        Self::with_state(GameState::default())
    }

    /// Create an engine on an arbitrary position.
    ///
    /// Nothing can be undone until the first move. Useful for puzzles,
    /// analysis and tests that need a specific board.
    ///
    /// # Errors
    ///
    /// [`ConfigError::BoardOverflow`] if the board's total stone count does
    /// not fit in a `u32`; such a board could overflow a store mid-move.
    pub fn from_state(state: GameState) -> Result<Self, ConfigError> {
        if state.board.checked_total().is_none() {
            return Err(ConfigError::BoardOverflow);
        }
        Ok(Self::with_state(state))
    }

    fn with_state(state: GameState) -> Self {
        Self {
            rules: Kalah::new(),
            state,
            snapshot: Snapshot::capture(&state),
            undo_count: 0,
            undo_budget: MAX_UNDO_COUNT,
            can_undo: false,
            history: Vector::new(),
            observers: ObserverRegistry::new(),
        }
    }

    /// Create an engine and set it up from a configuration.
    pub fn from_config<S>(config: &GameConfig, starter: &mut S) -> Result<Self, ConfigError>
    where
        S: StarterSource + ?Sized,
    {
        config.validate()?;
        let mut engine = Self::new();
        engine.undo_budget = config.undo_budget;
        engine.setup(config.stones_per_pit, starter)?;
        Ok(engine)
    }

    /// Start a new game.
    ///
    /// Fills every pit with `stones_per_pit`, empties both stores, resets the
    /// undo state and history, and asks `starter` who moves first. Observers
    /// stay attached but are not notified.
    ///
    /// On error the engine is left unchanged.
    pub fn setup<S>(&mut self, stones_per_pit: u32, starter: &mut S) -> Result<(), ConfigError>
    where
        S: StarterSource + ?Sized,
    {
        validate_stones_per_pit(stones_per_pit)?;

        self.state = GameState::initial(stones_per_pit, starter.pick_starter());
        self.snapshot = Snapshot::capture(&self.state);
        self.undo_count = 0;
        self.can_undo = false;
        self.history = Vector::new();
        Ok(())
    }

    /// Register an observer, called after every confirmed move or undo.
    ///
    /// Observers run in the order they were attached.
    pub fn attach<O>(&mut self, observer: O) -> ObserverId
    where
        O: Observer + Send + 'static,
    {
        self.observers.attach(Box::new(observer))
    }

    /// Remove an observer. Returns false if it was not attached.
    pub fn detach(&mut self, id: ObserverId) -> bool {
        self.observers.detach(id)
    }

    /// Number of attached observers.
    ///
    /// Reads 0 from inside a notification.
    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Sow `pit` for the player on move.
    ///
    /// Returns `None` and changes nothing (no notification either) if `pit`
    /// is a store, is empty, or belongs to the other player.
    ///
    /// # Panics
    ///
    /// If `pit >= TOTAL_PITS`.
    pub fn make_move(&mut self, pit: usize) -> Option<MoveOutcome> {
        if !self.rules.is_legal(&self.state, pit) {
            return None;
        }

        let mover = self.state.to_move;
        let turn_changed = mover != self.snapshot.player;
        let before = Snapshot::capture(&self.state);

        let outcome = self.rules.apply_move(&mut self.state, pit)?;

        if turn_changed {
            self.undo_count = 0;
        }
        self.snapshot = before;
        self.can_undo = true;

        let ply = self.history.last().map_or(1, |record| record.ply + 1);
        self.history.push_back(MoveRecord::new(ply, outcome));

        self.notify();
        Some(outcome)
    }

    /// Take back the last move.
    ///
    /// Returns false and changes nothing if there is no move to take back
    /// (none made yet, or an undo was just applied) or the budget for this
    /// turn is spent.
    pub fn undo(&mut self) -> bool {
        if !self.can_undo || self.undo_count >= self.undo_budget {
            return false;
        }

        self.state = self.snapshot.restore();
        self.undo_count += 1;
        self.can_undo = false;
        self.history.pop_back();

        self.notify();
        true
    }

    fn notify(&mut self) {
        let mut observers = std::mem::take(&mut self.observers);
        observers.notify(self);
        self.observers = observers;
    }

    // === Queries ===

    /// Stones in the given pit or store.
    ///
    /// # Panics
    ///
    /// If `index >= TOTAL_PITS`.
    #[must_use]
    pub fn get_marbles(&self, index: usize) -> u32 {
        self.state.board.get(index)
    }

    /// Check if it is player A's turn.
    #[must_use]
    pub fn is_player_a_turn(&self) -> bool {
        self.state.is_player_a_turn()
    }

    /// The player on move.
    #[must_use]
    pub fn current_player(&self) -> Player {
        self.state.to_move
    }

    /// Check if either side has run out of stones.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        Kalah::is_game_over(&self.state.board)
    }

    /// Compare the stores.
    ///
    /// Meant for finished games; before that it reports who is ahead on
    /// store counts alone, ignoring stones still in play.
    #[must_use]
    pub fn winner(&self) -> GameResult {
        self.rules.score(&self.state)
    }

    /// Undos left before the turn passes.
    #[must_use]
    pub fn get_undo_remaining(&self) -> u32 {
        self.undo_budget.saturating_sub(self.undo_count)
    }

    /// Check whether `undo` would do anything right now.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.can_undo && self.undo_count < self.undo_budget
    }

    /// Undo budget for this session.
    #[must_use]
    pub fn undo_budget(&self) -> u32 {
        self.undo_budget
    }

    /// Pits the player on move may sow.
    #[must_use]
    pub fn legal_moves(&self) -> MoveList {
        self.rules.legal_moves(&self.state)
    }

    /// Check whether `make_move(pit)` would be accepted.
    ///
    /// # Panics
    ///
    /// If `pit >= TOTAL_PITS`.
    #[must_use]
    pub fn is_legal(&self, pit: usize) -> bool {
        self.rules.is_legal(&self.state, pit)
    }

    /// Stones in a player's store.
    #[must_use]
    pub fn store(&self, player: Player) -> u32 {
        self.state.board.store(player)
    }

    /// The board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.state.board
    }

    /// The current position.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Confirmed moves of this session, oldest first. Undone moves are
    /// removed.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }
}
