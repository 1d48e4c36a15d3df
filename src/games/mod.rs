//! Game rule implementations.

pub mod kalah;
