use crate::error::IslandsError;

/// Rectangular grid of integer cells with row-major storage.
///
/// A cell is land when its value is positive, water otherwise. Shapes with
/// zero rows or zero columns are normalized to 0x0.
///
/// Fields are private so the cell count always matches the shape:
///
/// ```compile_fail
/// let grid = islands::Grid { rows: 2, cols: 2, buf: vec![1, 1, 1] };
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    buf: Vec<i64>,
}

impl Grid {
    /// Create an all-water grid.
    pub fn new(rows: usize, cols: usize) -> Self {
        if rows == 0 || cols == 0 {
            return Self::empty();
        }
        Self {
            rows,
            cols,
            buf: vec![0; rows * cols],
        }
    }

    fn empty() -> Self {
        Self {
            rows: 0,
            cols: 0,
            buf: Vec::new(),
        }
    }

    /// Create a grid from existing row-major cell data.
    pub fn from_buf(rows: usize, cols: usize, buf: Vec<i64>) -> Result<Self, IslandsError> {
        if buf.len() != rows * cols {
            return Err(IslandsError::CellCount {
                rows,
                cols,
                actual: buf.len(),
            });
        }
        if buf.is_empty() {
            return Ok(Self::empty());
        }
        Ok(Self { rows, cols, buf })
    }

    /// Build a grid from nested rows, rejecting ragged input.
    pub fn from_rows(rows: Vec<Vec<i64>>) -> Result<Self, IslandsError> {
        let cols = rows.first().map_or(0, Vec::len);
        let mut buf = Vec::with_capacity(rows.len() * cols);
        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != cols {
                return Err(IslandsError::InvalidGrid {
                    row,
                    expected: cols,
                    actual: cells.len(),
                });
            }
            buf.extend_from_slice(cells);
        }
        Self::from_buf(rows.len(), cols, buf)
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Row-major cell values.
    #[inline]
    pub fn cells(&self) -> &[i64] {
        &self.buf
    }

    /// True when the grid holds no cells at all.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Flat forest index of (row, col).
    #[inline]
    pub fn index(&self, row: usize, col: usize) -> usize {
        col + self.cols * row
    }

    /// Flat index of (row, col), or `OutOfBounds` when outside the grid.
    pub fn checked_index(&self, row: usize, col: usize) -> Result<usize, IslandsError> {
        if row >= self.rows || col >= self.cols {
            return Err(IslandsError::OutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(self.index(row, col))
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> i64 {
        self.buf[self.index(row, col)]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, val: i64) {
        let k = self.index(row, col);
        self.buf[k] = val;
    }

    #[inline]
    pub fn is_land(&self, row: usize, col: usize) -> bool {
        self.get(row, col) > 0
    }

    /// Number of land cells in the grid.
    pub fn land_count(&self) -> usize {
        self.buf.iter().filter(|&&v| v > 0).count()
    }

    /// Copy of the grid surrounded by a one-cell water border.
    pub fn padded(&self) -> PaddedGrid {
        let stride = self.cols + 2;
        let mut buf = vec![0; stride * (self.rows + 2)];
        for row in 0..self.rows {
            let src = &self.buf[row * self.cols..(row + 1) * self.cols];
            let start = (row + 1) * stride + 1;
            buf[start..start + self.cols].copy_from_slice(src);
        }
        PaddedGrid {
            rows: self.rows,
            cols: self.cols,
            stride,
            buf,
        }
    }
}

/// A grid with a water border, so neighbor probes never leave the buffer.
///
/// All accessors take interior coordinates; the border is implicit.
#[derive(Debug, Clone)]
pub struct PaddedGrid {
    pub rows: usize,
    pub cols: usize,
    stride: usize,
    buf: Vec<i64>,
}

impl PaddedGrid {
    #[inline]
    fn land_at(&self, padded_row: usize, padded_col: usize) -> bool {
        self.buf[padded_row * self.stride + padded_col] > 0
    }

    #[inline]
    pub fn is_land(&self, row: usize, col: usize) -> bool {
        self.land_at(row + 1, col + 1)
    }

    #[inline]
    pub fn down(&self, row: usize, col: usize) -> bool {
        self.land_at(row + 2, col + 1)
    }

    #[inline]
    pub fn right(&self, row: usize, col: usize) -> bool {
        self.land_at(row + 1, col + 2)
    }

    #[inline]
    pub fn up(&self, row: usize, col: usize) -> bool {
        self.land_at(row, col + 1)
    }

    #[inline]
    pub fn left(&self, row: usize, col: usize) -> bool {
        self.land_at(row + 1, col)
    }
}
