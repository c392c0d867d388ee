//! Python bindings that expose a comparison session via PyO3.
use pyo3::{exceptions::PyValueError, prelude::*, types::PyModule};

use crate::{Session, SessionConfig, SessionError, SessionId, TargetChoice};

fn to_py_err(err: SessionError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

/// Python-facing session: compare sequences and keep a leaderboard.
#[pyclass(unsendable)]
#[derive(Debug)]
pub struct PySession {
    session: Session,
}

#[pymethods]
impl PySession {
    #[new]
    #[pyo3(signature = (session_id, seed=None))]
    /// Create a session, optionally seeded for reproducible random targets.
    pub fn new(session_id: String, seed: Option<u64>) -> Self {
        let mut config = SessionConfig::new();
        config.seed = seed;
        Self {
            session: Session::new(SessionId::from(session_id), config),
        }
    }

    /// Compare a sequence against `"Random Sequence"` or a preset name.
    ///
    /// Returns:
    ///     Tuple of `(target, [(symbol, matched), ...], similarity)`.
    pub fn compare(
        &mut self,
        sequence: &str,
        target: &str,
    ) -> PyResult<(String, Vec<(char, bool)>, f64)> {
        let choice = match target.parse::<TargetChoice>() {
            Ok(choice) => choice,
            Err(never) => match never {},
        };
        let comparison = self
            .session
            .compare_request(sequence, &choice)
            .map_err(to_py_err)?;

        let tags = comparison
            .result
            .tags()
            .map(|tag| (tag.symbol.as_char(), tag.matched))
            .collect();
        Ok((comparison.target.to_string(), tags, comparison.similarity()))
    }

    /// Add a `(name, score)` entry to the leaderboard.
    pub fn submit(&mut self, name: &str, score: f64) -> PyResult<()> {
        self.session.submit_request(name, score).map_err(to_py_err)
    }

    /// Ranked leaderboard as `(rank, name, score)` tuples.
    pub fn leaderboard(&self) -> Vec<(usize, String, f64)> {
        self.session
            .snapshot()
            .into_iter()
            .map(|row| (row.rank, row.name, row.score))
            .collect()
    }
}

/// Create Python module.
#[pymodule]
pub fn dnamatch_py(_py: Python<'_>, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PySession>()?;
    Ok(())
}
