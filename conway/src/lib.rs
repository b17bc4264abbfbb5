//! Conway's Game of Life engine.
//!
//! A fixed-size grid of cells advanced one generation at a time in two
//! passes: every cell's next state is staged from the current generation,
//! then all cells commit together. Rendering and input live with the caller.

pub mod cell;
pub mod error;
pub mod grid;
pub mod shared;

pub use cell::{Cell, State};
pub use error::{LifeError, LifeResult};
pub use grid::{DUMP_SEPARATOR, Grid, NEIGHBOR_OFFSETS};
pub use shared::SharedGrid;
