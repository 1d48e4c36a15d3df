//! Kalah, the common Western Mancala.
//!
//! - Six pits a side, one store each
//! - Sow counter-clockwise, skipping the opponent's store
//! - Last stone in your store: play again
//! - Last stone in an empty pit of yours: capture it and the pit opposite
//! - Game ends when either side is empty; leftover stones go to their
//!   side's store

mod game;
mod sowing;

pub use game::Kalah;
