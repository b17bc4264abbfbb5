use std::collections::HashSet;

use conway::{Grid, LifeError};
use rand::{Rng, SeedableRng};

fn set_cells(grid: &mut Grid, cells: &[(usize, usize)]) {
    for &(x, y) in cells {
        if grid.is_dead(x, y).unwrap() {
            grid.toggle(x, y).unwrap();
        }
    }
}

fn assert_alive(grid: &Grid, cells: &[(usize, usize)]) {
    for &(x, y) in cells {
        assert!(grid.is_alive(x, y).unwrap(), "expected alive at ({x},{y})");
    }
}

fn assert_dead(grid: &Grid, cells: &[(usize, usize)]) {
    for &(x, y) in cells {
        assert!(grid.is_dead(x, y).unwrap(), "expected dead at ({x},{y})");
    }
}

fn collect_live(grid: &Grid) -> HashSet<(usize, usize)> {
    grid.live_cells().collect()
}

// Reference stepper over a bounded board, no shared state with the engine.
fn step_naive(cells: &HashSet<(usize, usize)>, rows: usize, cols: usize) -> HashSet<(usize, usize)> {
    let mut next = HashSet::new();
    for y in 0..rows as isize {
        for x in 0..cols as isize {
            let mut neighbors = 0;
            for dy in -1..=1 {
                for dx in -1..=1 {
                    if dx == 0 && dy == 0 {
                        continue;
                    }
                    let (nx, ny) = (x + dx, y + dy);
                    if nx < 0 || ny < 0 {
                        continue;
                    }
                    if cells.contains(&(nx as usize, ny as usize)) {
                        neighbors += 1;
                    }
                }
            }
            let alive = cells.contains(&(x as usize, y as usize));
            let next_alive = if alive {
                neighbors == 2 || neighbors == 3
            } else {
                neighbors == 3
            };
            if next_alive {
                next.insert((x as usize, y as usize));
            }
        }
    }
    next
}

#[test]
fn toggle_twice_restores_cell() {
    let mut grid = Grid::square(4).unwrap();
    grid.toggle(2, 3).unwrap();
    assert_alive(&grid, &[(2, 3)]);
    grid.toggle(2, 3).unwrap();
    assert_dead(&grid, &[(2, 3)]);
}

#[test]
fn alive_and_dead_are_exclusive_everywhere() {
    let mut grid = Grid::new(6, 7).unwrap();
    set_cells(&mut grid, &[(0, 0), (1, 0), (2, 0), (3, 3), (6, 5)]);
    for _ in 0..3 {
        for (x, y, _) in grid.cells() {
            assert_ne!(grid.is_alive(x, y).unwrap(), grid.is_dead(x, y).unwrap());
        }
        grid.advance();
    }
}

#[test]
fn underpopulation_kills() {
    let mut grid = Grid::square(5).unwrap();
    set_cells(&mut grid, &[(2, 2)]);
    grid.advance();
    assert_dead(&grid, &[(2, 2)]);

    let mut grid = Grid::square(5).unwrap();
    set_cells(&mut grid, &[(2, 2), (3, 2)]);
    grid.advance();
    assert_dead(&grid, &[(2, 2), (3, 2)]);
}

#[test]
fn overpopulation_kills() {
    let mut grid = Grid::square(5).unwrap();
    // Center plus four orthogonal neighbors.
    set_cells(&mut grid, &[(2, 2), (2, 1), (1, 2), (3, 2), (2, 3)]);
    assert_eq!(grid.count_alive_neighbors(2, 2).unwrap(), 4);
    grid.advance();
    assert_dead(&grid, &[(2, 2)]);
}

#[test]
fn survival_with_two_or_three_neighbors() {
    let mut grid = Grid::square(5).unwrap();
    set_cells(&mut grid, &[(2, 2), (1, 1), (3, 3)]);
    assert_eq!(grid.count_alive_neighbors(2, 2).unwrap(), 2);
    grid.advance();
    assert_alive(&grid, &[(2, 2)]);

    let mut grid = Grid::square(5).unwrap();
    set_cells(&mut grid, &[(2, 2), (1, 1), (3, 3), (1, 3)]);
    assert_eq!(grid.count_alive_neighbors(2, 2).unwrap(), 3);
    grid.advance();
    assert_alive(&grid, &[(2, 2)]);
}

#[test]
fn birth_with_exactly_three_neighbors() {
    let mut grid = Grid::square(5).unwrap();
    set_cells(&mut grid, &[(1, 1), (3, 1), (2, 3)]);
    assert_eq!(grid.count_alive_neighbors(2, 2).unwrap(), 3);
    grid.advance();
    assert_alive(&grid, &[(2, 2)]);
}

#[test]
fn corner_has_no_wraparound() {
    let mut grid = Grid::square(5).unwrap();
    // Would be neighbors of (0, 0) on a torus.
    set_cells(&mut grid, &[(4, 4), (4, 0), (0, 4), (4, 1), (1, 4)]);
    assert_eq!(grid.count_alive_neighbors(0, 0).unwrap(), 0);
    grid.advance();
    assert_dead(&grid, &[(0, 0)]);
}

#[test]
fn block_is_stable() {
    let mut grid = Grid::square(4).unwrap();
    let block = [(1, 1), (1, 2), (2, 1), (2, 2)];
    set_cells(&mut grid, &block);
    for _ in 0..10 {
        grid.advance();
        assert_eq!(collect_live(&grid), HashSet::from(block));
    }
}

#[test]
fn blinker_has_period_two() {
    let mut grid = Grid::square(5).unwrap();
    let vertical = [(1, 0), (1, 1), (1, 2)];
    let horizontal = [(0, 1), (1, 1), (2, 1)];
    set_cells(&mut grid, &vertical);

    grid.advance();
    assert_eq!(collect_live(&grid), HashSet::from(horizontal));
    grid.advance();
    assert_eq!(collect_live(&grid), HashSet::from(vertical));
}

#[test]
fn empty_grid_stays_empty() {
    for (rows, cols) in [(1, 1), (1, 9), (7, 3), (32, 32)] {
        let mut grid = Grid::new(rows, cols).unwrap();
        grid.advance();
        grid.advance();
        assert_eq!(grid.population(), 0);
    }
}

#[test]
fn fully_surrounded_interior_cell_counts_eight() {
    let mut grid = Grid::square(3).unwrap();
    set_cells(
        &mut grid,
        &[(0, 0), (1, 0), (2, 0), (0, 1), (2, 1), (0, 2), (1, 2), (2, 2)],
    );
    assert_eq!(grid.count_alive_neighbors(1, 1).unwrap(), 8);
}

#[test]
fn glider_walks_diagonally() {
    let mut grid = Grid::square(10).unwrap();
    let glider = [(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)];
    set_cells(&mut grid, &glider);
    for _ in 0..4 {
        grid.advance();
    }
    let shifted: HashSet<_> = glider.iter().map(|&(x, y)| (x + 1, y + 1)).collect();
    assert_eq!(collect_live(&grid), shifted);
}

#[test]
fn glider_dump_golden_output() {
    let mut grid = Grid::square(5).unwrap();
    set_cells(&mut grid, &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)]);
    assert_eq!(
        grid.dump(),
        "01000\n00100\n11100\n00000\n00000\n--------------\n"
    );
    grid.advance();
    assert_eq!(
        grid.dump(),
        "00000\n10100\n01100\n01000\n00000\n--------------\n"
    );
}

#[test]
fn matches_reference_stepper_on_random_soup() {
    let (rows, cols) = (24, 31);
    let mut rng = rand::rngs::StdRng::seed_from_u64(0x5EED_1234_ABCD_EF01);
    let mut grid = Grid::new(rows, cols).unwrap();
    let mut reference = HashSet::new();
    for y in 0..rows {
        for x in 0..cols {
            if rng.gen_bool(0.4) {
                grid.toggle(x, y).unwrap();
                reference.insert((x, y));
            }
        }
    }

    for generation in 0..40 {
        grid.advance();
        reference = step_naive(&reference, rows, cols);
        assert_eq!(collect_live(&grid), reference, "mismatch at generation {generation}");
    }
}

#[test]
fn errors_are_reported_not_clamped() {
    assert_eq!(
        Grid::new(0, 0).unwrap_err(),
        LifeError::InvalidDimension { rows: 0, cols: 0 }
    );
    let mut grid = Grid::new(3, 2).unwrap();
    assert_eq!(
        grid.toggle(2, 0).unwrap_err(),
        LifeError::OutOfRange { x: 2, y: 0, cols: 2, rows: 3 }
    );
    assert!(grid.is_alive(0, 3).is_err());
    assert_eq!(grid.population(), 0);
}
