//! Board engine bindings for Python.

use numpy::PyArray1;
use pyo3::exceptions::{PyIndexError, PyValueError};
use pyo3::prelude::*;

use crate::core::{GameConfig, GameRng, MoveOutcome, Player, StarterSource, TOTAL_PITS};
use crate::rules::GameResult;
use crate::session::{BoardEngine, Observer, ObserverId};

fn parse_player(name: &str) -> PyResult<Player> {
    match name {
        "A" | "a" => Ok(Player::A),
        "B" | "b" => Ok(Player::B),
        other => Err(PyValueError::new_err(format!(
            "player must be 'A' or 'B', got {other:?}"
        ))),
    }
}

fn player_name(player: Player) -> &'static str {
    match player {
        Player::A => "A",
        Player::B => "B",
    }
}

/// Fixed starter if given, else a seeded (or OS-seeded) coin flip.
fn starter_source(starter: Option<&str>, seed: Option<u64>) -> PyResult<Box<dyn StarterSource>> {
    let source: Box<dyn StarterSource> = match (starter, seed) {
        (Some(name), _) => Box::new(parse_player(name)?),
        (None, Some(seed)) => Box::new(GameRng::new(seed)),
        (None, None) => Box::new(GameRng::from_entropy()),
    };
    Ok(source)
}

fn check_index(index: usize) -> PyResult<()> {
    if index >= TOTAL_PITS {
        return Err(PyIndexError::new_err(format!(
            "pit index {index} out of range (0..{TOTAL_PITS})"
        )));
    }
    Ok(())
}

/// Python callable used as an observer. Called with no arguments.
struct PyObserver(PyObject);

impl Observer for PyObserver {
    fn board_changed(&mut self, _engine: &BoardEngine) {
        Python::with_gil(|py| {
            if let Err(e) = self.0.call0(py) {
                eprintln!("BoardEngine: observer callback failed: {}", e);
            }
        });
    }
}

/// Python wrapper for MoveOutcome.
#[pyclass(name = "MoveOutcome")]
#[derive(Clone, Debug)]
pub struct PyMoveOutcome(pub MoveOutcome);

#[pymethods]
impl PyMoveOutcome {
    /// Player who moved ("A" or "B").
    #[getter]
    fn player(&self) -> &'static str {
        player_name(self.0.player)
    }

    #[getter]
    fn pit(&self) -> usize {
        self.0.pit
    }

    #[getter]
    fn last_pit(&self) -> usize {
        self.0.last_pit
    }

    #[getter]
    fn extra_turn(&self) -> bool {
        self.0.extra_turn
    }

    /// Stones captured into the store, 0 if no capture.
    #[getter]
    fn captured(&self) -> u32 {
        self.0.capture.map_or(0, |c| c.stones)
    }

    #[getter]
    fn game_over(&self) -> bool {
        self.0.game_over
    }

    fn __repr__(&self) -> String {
        format!(
            "MoveOutcome(player={}, pit={}, last_pit={}, extra_turn={}, captured={}, game_over={})",
            player_name(self.0.player),
            self.0.pit,
            self.0.last_pit,
            self.0.extra_turn,
            self.captured(),
            self.0.game_over
        )
    }
}

/// Python wrapper for BoardEngine.
#[pyclass(name = "BoardEngine")]
pub struct PyBoardEngine {
    engine: BoardEngine,
}

#[pymethods]
impl PyBoardEngine {
    /// Create and set up a new game.
    ///
    /// # Arguments
    /// - stones_per_pit: Stones in each pit at the start (default 4)
    /// - undo_budget: Undos allowed per turn (default 3)
    /// - seed: Seed for the starting-player coin flip
    /// - starter: "A" or "B" to pick the starting player directly
    #[new]
    #[pyo3(signature = (stones_per_pit = 4, undo_budget = 3, seed = None, starter = None))]
    fn new(
        stones_per_pit: u32,
        undo_budget: u32,
        seed: Option<u64>,
        starter: Option<&str>,
    ) -> PyResult<Self> {
        let config = GameConfig::new()
            .with_stones_per_pit(stones_per_pit)
            .with_undo_budget(undo_budget);
        let mut source = starter_source(starter, seed)?;
        let engine = BoardEngine::from_config(&config, source.as_mut())
            .map_err(|e| PyValueError::new_err(e.to_string()))?;
        Ok(Self { engine })
    }

    /// Start a new game. Observers stay attached.
    #[pyo3(signature = (stones_per_pit = 4, seed = None, starter = None))]
    fn setup(&mut self, stones_per_pit: u32, seed: Option<u64>, starter: Option<&str>) -> PyResult<()> {
        let mut source = starter_source(starter, seed)?;
        self.engine
            .setup(stones_per_pit, source.as_mut())
            .map_err(|e| PyValueError::new_err(e.to_string()))
    }

    /// Sow a pit. Returns None if the move is not allowed.
    fn make_move(&mut self, pit: usize) -> PyResult<Option<PyMoveOutcome>> {
        check_index(pit)?;
        Ok(self.engine.make_move(pit).map(PyMoveOutcome))
    }

    /// Take back the last move. Returns whether anything was undone.
    fn undo(&mut self) -> bool {
        self.engine.undo()
    }

    /// Register a zero-argument callable, invoked after every move and undo.
    ///
    /// The callback must not call make_move or undo.
    fn attach(&mut self, callback: PyObject) -> u32 {
        self.engine.attach(PyObserver(callback)).raw()
    }

    /// Remove an observer by the id `attach` returned.
    fn detach(&mut self, id: u32) -> bool {
        self.engine.detach(ObserverId(id))
    }

    fn get_marbles(&self, index: usize) -> PyResult<u32> {
        check_index(index)?;
        Ok(self.engine.get_marbles(index))
    }

    fn is_player_a_turn(&self) -> bool {
        self.engine.is_player_a_turn()
    }

    fn is_game_over(&self) -> bool {
        self.engine.is_game_over()
    }

    /// "A", "B" or "Tie" by store counts.
    fn winner(&self) -> &'static str {
        match self.engine.winner() {
            GameResult::Winner(player) => player_name(player),
            GameResult::Tie => "Tie",
        }
    }

    fn get_undo_remaining(&self) -> u32 {
        self.engine.get_undo_remaining()
    }

    fn legal_moves(&self) -> Vec<usize> {
        self.engine.legal_moves().to_vec()
    }

    /// Board as a numpy array of 14 stone counts.
    fn board<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<u32>> {
        PyArray1::from_slice_bound(py, self.engine.board().as_array())
    }

    #[getter]
    fn current_player(&self) -> &'static str {
        player_name(self.engine.current_player())
    }

    fn __repr__(&self) -> String {
        let status = if self.engine.is_game_over() {
            "over"
        } else {
            "ongoing"
        };
        format!(
            "BoardEngine(to_move={}, stores=({}, {}), status={})",
            player_name(self.engine.current_player()),
            self.engine.store(Player::A),
            self.engine.store(Player::B),
            status
        )
    }
}
