//! # kalah
//!
//! Rules engine for Mancala, Kalah variant.
//!
//! ## Design Principles
//!
//! 1. **Rules Are Pure**: `Kalah` maps a `GameState` and a pit to a new
//!    `GameState`. No hidden state, fully deterministic.
//!
//! 2. **Sessions Own Everything Else**: undo, history and change
//!    notification live in `BoardEngine`, one instance per game.
//!
//! 3. **Illegal Is Not Exceptional**: a disallowed move or undo is a silent
//!    no-op reported through the return value. Out-of-range indices are bugs
//!    and panic.
//!
//! ## Board Layout
//!
//! ```text
//!        12 11 10  9  8  7
//!    13                     6
//!         0  1  2  3  4  5
//! ```
//!
//! Player A plays pits 0..=5 into store 6; player B plays 7..=12 into
//! store 13.
//!
//! ## Modules
//!
//! - `core`: Players, board, state, move records, RNG, configuration
//! - `rules`: RulesEngine trait and game results
//! - `games`: The Kalah rules
//! - `session`: BoardEngine, undo snapshot, observers
//! - `python`: PyO3 bindings (`python` feature)

pub mod core;
pub mod rules;
pub mod games;
pub mod session;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Board, GameState, Player,
    GameConfig, ConfigError,
    GameRng, StarterSource,
    Capture, MoveOutcome, MoveRecord,
    TOTAL_PITS, PITS_PER_PLAYER, A_STORE, B_STORE, MAX_UNDO_COUNT,
};

pub use crate::rules::{GameResult, MoveList, RulesEngine};

pub use crate::games::kalah::Kalah;

pub use crate::session::{BoardChanged, BoardEngine, Observer, ObserverId, Snapshot};
