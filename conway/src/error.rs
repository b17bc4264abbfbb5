// error.rs - Errors raised by grid construction and coordinate access

use thiserror::Error;

/// Caller misuse of the engine. Nothing here is transient or retryable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LifeError {
    /// A grid needs at least one row and one column, and must fit in memory.
    #[error("invalid grid dimension: {rows} rows x {cols} cols")]
    InvalidDimension { rows: usize, cols: usize },

    /// Coordinate outside `[0, cols) x [0, rows)`.
    #[error("cell ({x}, {y}) is outside a grid of {cols} cols x {rows} rows")]
    OutOfRange {
        x:    usize,
        y:    usize,
        cols: usize,
        rows: usize,
    },
}

pub type LifeResult<T> = Result<T, LifeError>;
