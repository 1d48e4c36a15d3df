//! Python bindings for the Kalah engine.
//!
//! # Quick Start
//!
//! ```python
//! import kalah
//!
//! engine = kalah.BoardEngine(stones_per_pit=4, starter="A")
//! engine.attach(lambda: print("board changed"))
//!
//! outcome = engine.make_move(2)
//! assert outcome.extra_turn
//! engine.undo()
//! ```

use pyo3::prelude::*;

mod py_engine;

pub use py_engine::*;

/// kalah: Mancala (Kalah) rules engine.
#[pymodule]
fn kalah(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyBoardEngine>()?;
    m.add_class::<PyMoveOutcome>()?;
    Ok(())
}
