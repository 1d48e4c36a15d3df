//! Rules engine trait for game implementations.
//!
//! Games implement `RulesEngine` to define:
//! - Legal moves for each position
//! - How moves modify state
//! - Win/loss conditions
//!
//! The session layer calls into `RulesEngine` but never sows stones itself.

pub mod engine;

pub use engine::{GameResult, MoveList, RulesEngine};
