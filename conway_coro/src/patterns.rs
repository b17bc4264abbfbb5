// patterns.rs - Named seed patterns, placed on the grid through toggle edits

use conway::{Grid, LifeResult};
use rand::{Rng, SeedableRng};
use rand::rngs::StdRng;

const LIVE_DENSITY: f64 = 1.0 / 3.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    TopLeft,
    Center,
}

pub struct Pattern {
    pub name:   &'static str,
    pub anchor: Anchor,
    pub cells:  &'static [(usize, usize)],   // (x, y) relative to the pattern's top-left
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "Glider",
        anchor: Anchor::TopLeft,
        cells: &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)],
    },
    Pattern {
        name: "Blinker",
        anchor: Anchor::Center,
        cells: &[(0, 0), (1, 0), (2, 0)],
    },
    Pattern {
        name: "Toad",
        anchor: Anchor::Center,
        cells: &[(1, 0), (2, 0), (3, 0), (0, 1), (1, 1), (2, 1)],
    },
    Pattern {
        name: "Beacon",
        anchor: Anchor::Center,
        cells: &[(0, 0), (1, 0), (0, 1), (1, 1), (2, 2), (3, 2), (2, 3), (3, 3)],
    },
    Pattern {
        name: "Pulsar",
        anchor: Anchor::Center,
        cells: &[
            // Top half
            (2, 0), (3, 0), (4, 0), (8, 0), (9, 0), (10, 0),
            (0, 2), (5, 2), (7, 2), (12, 2),
            (0, 3), (5, 3), (7, 3), (12, 3),
            (0, 4), (5, 4), (7, 4), (12, 4),
            (2, 5), (3, 5), (4, 5), (8, 5), (9, 5), (10, 5),
            // Bottom half (mirrored)
            (2, 7), (3, 7), (4, 7), (8, 7), (9, 7), (10, 7),
            (0, 8), (5, 8), (7, 8), (12, 8),
            (0, 9), (5, 9), (7, 9), (12, 9),
            (0, 10), (5, 10), (7, 10), (12, 10),
            (2, 12), (3, 12), (4, 12), (8, 12), (9, 12), (10, 12),
        ],
    },
    Pattern {
        name: "R-pentomino",
        anchor: Anchor::Center,
        cells: &[(1, 0), (2, 0), (0, 1), (1, 1), (1, 2)],
    },
    Pattern {
        name: "Gosper Glider Gun",
        anchor: Anchor::TopLeft,
        cells: &[
            (0, 4), (1, 4), (0, 5), (1, 5),
            (10, 4), (10, 5), (10, 6), (11, 3), (11, 7), (12, 2), (12, 8),
            (13, 2), (13, 8), (14, 5), (15, 3), (15, 7), (16, 4), (16, 5),
            (16, 6), (17, 5), (20, 2), (20, 3), (20, 4), (21, 2), (21, 3),
            (21, 4), (22, 1), (22, 5), (24, 0), (24, 1), (24, 5), (24, 6),
            (34, 2), (34, 3), (35, 2), (35, 3),
        ],
    },
];

/// Case-insensitive lookup by name.
pub fn index_of(name: &str) -> Option<usize> {
    PATTERNS.iter().position(|pattern| pattern.name.eq_ignore_ascii_case(name))
}

pub fn find(name: &str) -> Option<&'static Pattern> {
    index_of(name).map(|index| &PATTERNS[index])
}

impl Pattern {
    /// `(width, height)` of the bounding box.
    pub fn extent(&self) -> (usize, usize) {
        self.cells
            .iter()
            .fold((0, 0), |(w, h), &(x, y)| (w.max(x + 1), h.max(y + 1)))
    }

    pub fn origin(&self, rows: usize, cols: usize) -> (usize, usize) {
        match self.anchor {
            Anchor::TopLeft => (0, 0),
            Anchor::Center  => {
                let (w, h) = self.extent();
                (cols.saturating_sub(w) / 2, rows.saturating_sub(h) / 2)
            }
        }
    }
}

/// Clear the grid and seed `pattern`. Cells past the edge are skipped.
/// Returns how many cells were placed.
pub fn apply_pattern(grid: &mut Grid, pattern: &Pattern) -> LifeResult<usize> {
    grid.clear();

    let (ox, oy) = pattern.origin(grid.rows(), grid.cols());
    let mut placed = 0;
    for &(dx, dy) in pattern.cells {
        let (x, y) = (ox + dx, oy + dy);
        if x < grid.cols() && y < grid.rows() {
            grid.toggle(x, y)?;
            placed += 1;
        }
    }
    Ok(placed)
}

/// Clear the grid and fill roughly a third of it, reproducibly from `seed`.
pub fn apply_random_pattern(grid: &mut Grid, seed: u64) -> LifeResult<usize> {
    grid.clear();

    let mut rng = StdRng::seed_from_u64(seed);
    let mut placed = 0;
    for y in 0..grid.rows() {
        for x in 0..grid.cols() {
            if rng.gen_bool(LIVE_DENSITY) {
                grid.toggle(x, y)?;
                placed += 1;
            }
        }
    }
    Ok(placed)
}
