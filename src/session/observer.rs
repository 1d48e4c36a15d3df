//! Change notification.
//!
//! Observers are told *that* the board changed, never *what* changed: they
//! re-read whatever they need through the engine's accessors. They receive a
//! shared reference, so an observer cannot call back into `make_move` or
//! `undo` while a notification is being delivered.

use std::sync::mpsc::Sender;

use serde::{Deserialize, Serialize};

use super::engine::BoardEngine;

/// Payload-free "board changed" message for channel observers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardChanged;

/// Something that wants to hear about confirmed moves and undos.
pub trait Observer {
    /// Called once after every confirmed state change.
    fn board_changed(&mut self, engine: &BoardEngine);
}

impl<F> Observer for F
where
    F: FnMut(&BoardEngine),
{
    fn board_changed(&mut self, engine: &BoardEngine) {
        self(engine)
    }
}

/// Channel observer. A dropped receiver is ignored.
impl Observer for Sender<BoardChanged> {
    fn board_changed(&mut self, _engine: &BoardEngine) {
        let _ = self.send(BoardChanged);
    }
}

/// Handle returned by `attach`, used to `detach` later.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ObserverId(pub u32);

impl ObserverId {
    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for ObserverId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Observer({})", self.0)
    }
}

/// Observers in insertion order.
#[derive(Default)]
pub(crate) struct ObserverRegistry {
    entries: Vec<(ObserverId, Box<dyn Observer + Send>)>,
    next_id: u32,
}

impl ObserverRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attach(&mut self, observer: Box<dyn Observer + Send>) -> ObserverId {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, observer));
        id
    }

    pub fn detach(&mut self, id: ObserverId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn notify(&mut self, engine: &BoardEngine) {
        for (_, observer) in &mut self.entries {
            observer.board_changed(engine);
        }
    }
}

impl std::fmt::Debug for ObserverRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObserverRegistry")
            .field("observers", &self.entries.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}
