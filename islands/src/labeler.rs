use crate::error::IslandsError;
use crate::grid::Grid;
use crate::unionfind::QuickUnion;

/// Union-find forest over every cell of a grid, joined along 4-connected land.
///
/// Water cells stay singleton roots; only land cells are counted.
pub struct ComponentLabeler<'a> {
    grid: &'a Grid,
    forest: QuickUnion,
}

impl<'a> ComponentLabeler<'a> {
    /// Build the forest in one row-major pass.
    ///
    /// Each land cell checks its down, right, up and left neighbors; a land
    /// neighbor's root is attached under the current cell's root.
    pub fn build(grid: &'a Grid) -> Self {
        let mut forest = QuickUnion::new(grid.rows() * grid.cols());
        let pad = grid.padded();
        let m = grid.cols();

        for p in 0..grid.rows() {
            for q in 0..grid.cols() {
                if !pad.is_land(p, q) {
                    continue;
                }
                let k = grid.index(p, q);

                if pad.down(p, q) {
                    forest.union(k, k + m);
                }
                if pad.right(p, q) {
                    forest.union(k, k + 1);
                }
                if pad.up(p, q) {
                    forest.union(k, k - m);
                }
                if pad.left(p, q) {
                    forest.union(k, k - 1);
                }
            }
        }

        Self { grid, forest }
    }

    pub fn grid(&self) -> &Grid {
        self.grid
    }

    pub fn forest(&self) -> &QuickUnion {
        &self.forest
    }

    /// Number of land components: land cells that are their own root.
    pub fn count_islands(&self) -> usize {
        self.grid
            .cells()
            .iter()
            .enumerate()
            .filter(|&(k, &v)| v > 0 && self.forest.is_root(k))
            .count()
    }

    /// Number of land cells sharing a component with the seed at (i, j).
    ///
    /// Returns 0 when the seed is water.
    pub fn affected_land_count(&self, i: usize, j: usize) -> Result<usize, IslandsError> {
        let seed = self.grid.checked_index(i, j)?;
        if self.grid.cells()[seed] <= 0 {
            return Ok(0);
        }
        let target = self.forest.find_root(seed);
        Ok(self
            .grid
            .cells()
            .iter()
            .enumerate()
            .filter(|&(k, &v)| v > 0 && self.forest.find_root(k) == target)
            .count())
    }

    /// Size of every land component, ordered by the row-major position of its root.
    pub fn component_sizes(&self) -> Vec<usize> {
        let mut counts = vec![0usize; self.forest.len()];
        for (k, &v) in self.grid.cells().iter().enumerate() {
            if v > 0 {
                counts[self.forest.find_root(k)] += 1;
            }
        }
        counts.into_iter().filter(|&n| n > 0).collect()
    }
}

/// Count 4-connected land components in `grid`.
pub fn count_islands(grid: &Grid) -> usize {
    ComponentLabeler::build(grid).count_islands()
}

/// Size of the land component containing (i, j), or 0 if that cell is water.
pub fn affected_land_count(grid: &Grid, i: usize, j: usize) -> Result<usize, IslandsError> {
    grid.checked_index(i, j)?;
    ComponentLabeler::build(grid).affected_land_count(i, j)
}
