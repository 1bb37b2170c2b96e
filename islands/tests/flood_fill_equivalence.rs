//! Randomized checks of the quick-union labeler against a BFS flood fill.
use std::collections::VecDeque;

use islands::{affected_land_count, count_islands, ComponentLabeler, Grid};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_grid(rng: &mut StdRng, rows: usize, cols: usize, land: f64) -> Grid {
    let buf = (0..rows * cols)
        .map(|_| {
            if rng.gen_bool(land) {
                rng.gen_range(1..=9)
            } else {
                rng.gen_range(-3..=0)
            }
        })
        .collect();
    Grid::from_buf(rows, cols, buf).unwrap()
}

/// Label every land cell with a component id using BFS. Water gets `None`.
fn flood_labels(grid: &Grid) -> (Vec<Option<usize>>, usize) {
    let mut labels = vec![None; grid.rows() * grid.cols()];
    let mut next = 0;
    for r in 0..grid.rows() {
        for c in 0..grid.cols() {
            if !grid.is_land(r, c) || labels[grid.index(r, c)].is_some() {
                continue;
            }
            let mut queue = VecDeque::new();
            labels[grid.index(r, c)] = Some(next);
            queue.push_back((r, c));
            while let Some((y, x)) = queue.pop_front() {
                let mut neighbors = Vec::with_capacity(4);
                if y > 0 {
                    neighbors.push((y - 1, x));
                }
                if y + 1 < grid.rows() {
                    neighbors.push((y + 1, x));
                }
                if x > 0 {
                    neighbors.push((y, x - 1));
                }
                if x + 1 < grid.cols() {
                    neighbors.push((y, x + 1));
                }
                for (ny, nx) in neighbors {
                    let k = grid.index(ny, nx);
                    if grid.is_land(ny, nx) && labels[k].is_none() {
                        labels[k] = Some(next);
                        queue.push_back((ny, nx));
                    }
                }
            }
            next += 1;
        }
    }
    (labels, next)
}

#[test]
fn island_count_matches_flood_fill() {
    let mut rng = StdRng::seed_from_u64(0x15_1a_4d);
    for _ in 0..200 {
        let rows = rng.gen_range(1..=12);
        let cols = rng.gen_range(1..=12);
        let land = rng.gen_range(0.1..0.9);
        let grid = random_grid(&mut rng, rows, cols, land);
        let (_, expected) = flood_labels(&grid);
        assert_eq!(count_islands(&grid), expected, "grid: {grid:?}");
    }
}

#[test]
fn affected_land_matches_flood_fill() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..100 {
        let rows = rng.gen_range(1..=10);
        let cols = rng.gen_range(1..=10);
        let grid = random_grid(&mut rng, rows, cols, 0.55);
        let (labels, n) = flood_labels(&grid);
        let mut sizes = vec![0usize; n];
        for label in labels.iter().flatten() {
            sizes[*label] += 1;
        }

        let labeler = ComponentLabeler::build(&grid);
        for r in 0..rows {
            for c in 0..cols {
                let expected = labels[grid.index(r, c)].map_or(0, |l| sizes[l]);
                assert_eq!(labeler.affected_land_count(r, c), Ok(expected));
            }
        }
    }
}

#[test]
fn one_seed_per_component_sums_to_land() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..50 {
        let grid = random_grid(&mut rng, 9, 11, 0.5);
        let (labels, n) = flood_labels(&grid);
        let mut seen = vec![false; n];
        let mut total = 0;
        for r in 0..grid.rows() {
            for c in 0..grid.cols() {
                if let Some(l) = labels[grid.index(r, c)] {
                    if !seen[l] {
                        seen[l] = true;
                        total += affected_land_count(&grid, r, c).unwrap();
                    }
                }
            }
        }
        assert_eq!(total, grid.land_count());

        let labeler = ComponentLabeler::build(&grid);
        assert_eq!(labeler.component_sizes().iter().sum::<usize>(), grid.land_count());
    }
}

#[test]
fn isolated_cells_each_count() {
    // Land only on cells where row and column are both even
    let mut grid = Grid::new(7, 9);
    let mut land = 0;
    for r in (0..7).step_by(2) {
        for c in (0..9).step_by(2) {
            grid.set(r, c, 1);
            land += 1;
        }
    }
    assert_eq!(count_islands(&grid), land);
}

#[test]
fn long_snake_is_one_component() {
    // Serpentine path: worst case for tree height without compression
    let rows = 15;
    let cols = 20;
    let mut grid = Grid::new(rows, cols);
    for r in (0..rows).step_by(2) {
        for c in 0..cols {
            grid.set(r, c, 1);
        }
        if r + 1 < rows {
            let c = if (r / 2) % 2 == 0 { cols - 1 } else { 0 };
            grid.set(r + 1, c, 1);
        }
    }
    assert_eq!(count_islands(&grid), 1);
    assert_eq!(affected_land_count(&grid, 0, 0), Ok(grid.land_count()));
}
