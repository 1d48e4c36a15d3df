//! Core types: players, board, state, move records, RNG, configuration.
//!
//! Everything here is plain data. The rules that change it live in
//! [`crate::games::kalah`]; the session that owns it lives in
//! [`crate::session`].

pub mod player;
pub mod board;
pub mod state;
pub mod action;
pub mod rng;
pub mod config;
pub mod error;

pub use player::{opposite_pit, Player};
pub use board::{Board, A_STORE, B_STORE, PITS_PER_PLAYER, TOTAL_PITS};
pub use state::GameState;
pub use action::{Capture, MoveOutcome, MoveRecord};
pub use rng::{GameRng, StarterSource};
pub use config::{GameConfig, DEFAULT_STONES_PER_PIT, MAX_STONES_PER_PIT, MAX_UNDO_COUNT};
pub use error::ConfigError;
