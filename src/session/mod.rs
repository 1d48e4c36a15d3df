//! Game sessions: the stateful layer a front end talks to.
//!
//! - `BoardEngine`: owns the position, undo snapshot, history and observers
//! - `Snapshot`: the single retained undo point
//! - `Observer`: change notification (closures and channels)

pub mod engine;
pub mod observer;
pub mod snapshot;

pub use engine::BoardEngine;
pub use observer::{BoardChanged, Observer, ObserverId};
pub use snapshot::Snapshot;
