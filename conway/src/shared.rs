// shared.rs - Grid handle shared between a render thread and a simulation task

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::error::LifeResult;
use crate::grid::Grid;

/// Cloneable handle to one grid behind a single mutex.
///
/// `advance` and `toggle` both take the lock, so an edit can never land in the
/// middle of a stage/commit pass.
#[derive(Debug, Clone)]
pub struct SharedGrid {
    inner: Arc<Mutex<Grid>>,
}

impl SharedGrid {
    pub fn new(grid: Grid) -> Self {
        Self { inner: Arc::new(Mutex::new(grid)) }
    }

    pub fn with_dimensions(rows: usize, cols: usize) -> LifeResult<Self> {
        Ok(Self::new(Grid::new(rows, cols)?))
    }

    // A panic while holding the lock cannot leave a half-committed grid:
    // `advance` does not panic and edits are single-cell.
    fn lock(&self) -> MutexGuard<'_, Grid> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn advance(&self) {
        self.lock().advance();
    }

    pub fn toggle(&self, x: usize, y: usize) -> LifeResult<()> {
        self.lock().toggle(x, y)
    }

    pub fn is_alive(&self, x: usize, y: usize) -> LifeResult<bool> {
        self.lock().is_alive(x, y)
    }

    /// `(rows, cols)`
    pub fn dimensions(&self) -> (usize, usize) {
        self.lock().dimensions()
    }

    /// Run `f` against the grid while holding the lock (draw passes).
    pub fn read<R>(&self, f: impl FnOnce(&Grid) -> R) -> R {
        f(&self.lock())
    }

    /// Batch edit under one lock, e.g. clearing and seeding a pattern.
    pub fn write<R>(&self, f: impl FnOnce(&mut Grid) -> R) -> R {
        f(&mut self.lock())
    }

    pub fn snapshot(&self) -> Grid {
        self.lock().clone()
    }
}
