// grid.rs - Fixed-size grid of cells and the two-pass generation update

use std::fmt;

use log::{debug, trace};

use crate::cell::{Cell, State};
use crate::error::{LifeError, LifeResult};

/// Moore neighborhood as (dx, dy) offsets.
pub const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1,  0),          (1,  0),
    (-1,  1), (0,  1), (1,  1),
];

/// Separator line printed after every text dump.
pub const DUMP_SEPARATOR: &str = "--------------";

/// Rows x cols cells, row-major. Coordinates are `(x, y)` = (column, row).
///
/// Edges are hard: cells beyond the border do not exist and never count as
/// neighbors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows:  usize,
    cols:  usize,
    cells: Vec<Cell>,
}

impl Grid {
    pub fn new(rows: usize, cols: usize) -> LifeResult<Self> {
        let len = rows
            .checked_mul(cols)
            .filter(|&len| len != 0 && len <= isize::MAX as usize / size_of::<Cell>())
            .ok_or(LifeError::InvalidDimension { rows, cols })?;
        debug!("allocating {rows}x{cols} grid");
        Ok(Self {
            rows,
            cols,
            cells: vec![Cell::new(); len],
        })
    }

    pub fn square(n: usize) -> LifeResult<Self> {
        Self::new(n, n)
    }

    #[inline]
    pub fn rows(&self) -> usize { self.rows }

    #[inline]
    pub fn cols(&self) -> usize { self.cols }

    /// `(rows, cols)`
    #[inline]
    pub fn dimensions(&self) -> (usize, usize) { (self.rows, self.cols) }

    #[inline]
    pub fn len(&self) -> usize { self.cells.len() }

    /// Always false: `new` rejects empty grids. Kept alongside `len`.
    #[inline]
    pub fn is_empty(&self) -> bool { self.cells.is_empty() }

    #[inline]
    fn index(&self, x: usize, y: usize) -> usize {
        y * self.cols + x
    }

    fn check(&self, x: usize, y: usize) -> LifeResult<usize> {
        if x < self.cols && y < self.rows {
            Ok(self.index(x, y))
        } else {
            Err(LifeError::OutOfRange { x, y, cols: self.cols, rows: self.rows })
        }
    }

    pub fn get(&self, x: usize, y: usize) -> LifeResult<&Cell> {
        let idx = self.check(x, y)?;
        Ok(&self.cells[idx])
    }

    pub fn is_alive(&self, x: usize, y: usize) -> LifeResult<bool> {
        Ok(self.get(x, y)?.is_alive())
    }

    pub fn is_dead(&self, x: usize, y: usize) -> LifeResult<bool> {
        Ok(self.get(x, y)?.is_dead())
    }

    /// User edit: flips the cell immediately, independent of `advance`.
    pub fn toggle(&mut self, x: usize, y: usize) -> LifeResult<()> {
        let idx = self.check(x, y)?;
        self.cells[idx].switch();
        Ok(())
    }

    pub fn count_alive_neighbors(&self, x: usize, y: usize) -> LifeResult<usize> {
        self.check(x, y)?;
        Ok(self.live_neighbors(x, y))
    }

    // Reads current state only, so it is safe to call while staging.
    fn live_neighbors(&self, x: usize, y: usize) -> usize {
        NEIGHBOR_OFFSETS
            .iter()
            .filter_map(|&(dx, dy)| {
                let nx = x.checked_add_signed(dx)?;
                let ny = y.checked_add_signed(dy)?;
                (nx < self.cols && ny < self.rows).then(|| self.index(nx, ny))
            })
            .filter(|&idx| self.cells[idx].is_alive())
            .count()
    }

    /// Run one generation of B3/S23.
    ///
    /// Every cell is staged from the untouched current states before any cell
    /// is committed, so all cells see the same previous generation.
    pub fn advance(&mut self) {
        for idx in 0..self.cells.len() {
            let (x, y) = (idx % self.cols, idx / self.cols);
            let count = self.live_neighbors(x, y);
            let cell = &mut self.cells[idx];
            match (cell.state(), count) {
                (State::Dead, 3)                      => cell.stage_alive(), // Birth
                (State::Alive, 2) | (State::Alive, 3) => cell.stage_alive(), // Survival
                _                                     => cell.stage_dead(),  // Death or stays dead
            }
        }

        for cell in &mut self.cells {
            cell.commit();
        }
        trace!("advanced {}x{} grid", self.rows, self.cols);
    }

    /// Kill every cell.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::new());
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// All cells row-major as `(x, y, cell)`, for draw passes.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, &Cell)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .map(move |(idx, cell)| (idx % cols, idx / cols, cell))
    }

    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells()
            .filter(|(_, _, cell)| cell.is_alive())
            .map(|(x, y, _)| (x, y))
    }

    /// Text dump: one line of `0`/`1` per row, then a separator line.
    pub fn dump(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.cols) {
            for cell in row {
                f.write_str(if cell.is_alive() { "1" } else { "0" })?;
            }
            writeln!(f)?;
        }
        writeln!(f, "{DUMP_SEPARATOR}")
    }
}
