//! # Block Grid
//!
//! A fixed-size, row-major 2-D array of [`BlockKind`].
//!
//! ## Invariants
//!
//! - Both dimensions are non-zero ([`GridShape`] refuses anything else)
//! - Every index in `[0, rows) x [0, cols)` holds a defined block
//! - Dimensions never change; regenerating the world swaps in a new grid
//!
//! The grid has no interior locking. [`WorldState`](crate::WorldState) owns
//! it behind its own lock.

use crate::block::BlockKind;
use crate::error::{WorldError, WorldResult};

/// Validated grid dimensions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridShape {
    rows: usize,
    cols: usize,
}

impl GridShape {
    /// Creates a shape, rejecting zero-sized dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::InvalidDimensions`] if either dimension is zero
    /// or the cell count overflows `usize`.
    pub fn new(rows: usize, cols: usize) -> WorldResult<Self> {
        if rows == 0 || cols == 0 || rows.checked_mul(cols).is_none() {
            return Err(WorldError::InvalidDimensions { rows, cols });
        }
        Ok(Self { rows, cols })
    }

    /// Row count.
    #[inline]
    #[must_use]
    pub const fn rows(self) -> usize {
        self.rows
    }

    /// Column count.
    #[inline]
    #[must_use]
    pub const fn cols(self) -> usize {
        self.cols
    }

    /// Total number of cells.
    #[inline]
    #[must_use]
    pub const fn cell_count(self) -> usize {
        self.rows * self.cols
    }

    /// Returns true if `(row, col)` lies inside the shape.
    #[inline]
    #[must_use]
    pub const fn contains(self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }
}

/// The world's block grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    shape: GridShape,
    /// Cells indexed as `row * cols + col`.
    cells: Box<[BlockKind]>,
}

impl Grid {
    /// Creates a grid of the given shape with every cell set to `fill`.
    #[must_use]
    pub fn filled(shape: GridShape, fill: BlockKind) -> Self {
        Self {
            shape,
            cells: vec![fill; shape.cell_count()].into_boxed_slice(),
        }
    }

    /// Creates a grid by evaluating `f(row, col)` for every cell in row-major order.
    #[must_use]
    pub fn from_fn<F>(shape: GridShape, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> BlockKind,
    {
        let mut cells = Vec::with_capacity(shape.cell_count());
        for row in 0..shape.rows() {
            for col in 0..shape.cols() {
                cells.push(f(row, col));
            }
        }
        Self {
            shape,
            cells: cells.into_boxed_slice(),
        }
    }

    /// Convenience constructor from raw dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::InvalidDimensions`] if either dimension is zero.
    pub fn new(rows: usize, cols: usize, fill: BlockKind) -> WorldResult<Self> {
        Ok(Self::filled(GridShape::new(rows, cols)?, fill))
    }

    /// Grid dimensions.
    #[inline]
    #[must_use]
    pub const fn shape(&self) -> GridShape {
        self.shape
    }

    /// Row count.
    #[inline]
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.shape.rows()
    }

    /// Column count.
    #[inline]
    #[must_use]
    pub const fn cols(&self) -> usize {
        self.shape.cols()
    }

    /// Gets the block at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::IndexOutOfRange`] if the index is outside the grid.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> WorldResult<BlockKind> {
        let index = self.index_of(row, col)?;
        Ok(self.cells[index])
    }

    /// Sets the block at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::IndexOutOfRange`] if the index is outside the
    /// grid; the grid is left untouched.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, kind: BlockKind) -> WorldResult<()> {
        let index = self.index_of(row, col)?;
        self.cells[index] = kind;
        Ok(())
    }

    /// Iterates `(row, col, kind)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, BlockKind)> + '_ {
        let cols = self.cols();
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &kind)| (i / cols, i % cols, kind))
    }

    /// Counts the cells holding `kind`.
    #[must_use]
    pub fn count(&self, kind: BlockKind) -> usize {
        self.cells.iter().filter(|&&cell| cell == kind).count()
    }

    /// Row-major view of every cell.
    #[inline]
    #[must_use]
    pub fn cells(&self) -> &[BlockKind] {
        &self.cells
    }

    fn index_of(&self, row: usize, col: usize) -> WorldResult<usize> {
        if self.shape.contains(row, col) {
            Ok(row * self.cols() + col)
        } else {
            Err(WorldError::IndexOutOfRange {
                row,
                col,
                rows: self.rows(),
                cols: self.cols(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_rejects_zero() {
        assert_eq!(
            GridShape::new(0, 4),
            Err(WorldError::InvalidDimensions { rows: 0, cols: 4 })
        );
        assert_eq!(
            GridShape::new(4, 0),
            Err(WorldError::InvalidDimensions { rows: 4, cols: 0 })
        );
        assert!(GridShape::new(usize::MAX, 2).is_err());
        assert!(GridShape::new(1, 1).is_ok());
    }

    #[test]
    fn test_filled_grid() {
        let grid = Grid::new(3, 5, BlockKind::Sand).unwrap();
        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.cols(), 5);
        assert_eq!(grid.count(BlockKind::Sand), 15);
    }

    #[test]
    fn test_get_set() {
        let mut grid = Grid::new(2, 3, BlockKind::Air).unwrap();
        grid.set(1, 2, BlockKind::Stone).unwrap();
        assert_eq!(grid.get(1, 2), Ok(BlockKind::Stone));
        assert_eq!(grid.get(0, 0), Ok(BlockKind::Air));
    }

    #[test]
    fn test_out_of_range_has_no_effect() {
        let mut grid = Grid::new(2, 3, BlockKind::Air).unwrap();
        let before = grid.clone();

        let err = grid.set(2, 0, BlockKind::Stone).unwrap_err();
        assert_eq!(
            err,
            WorldError::IndexOutOfRange { row: 2, col: 0, rows: 2, cols: 3 }
        );
        assert!(grid.set(0, 3, BlockKind::Stone).is_err());
        assert!(grid.get(0, 3).is_err());
        assert!(grid.get(usize::MAX, usize::MAX).is_err());
        assert_eq!(grid, before);
    }

    #[test]
    fn test_from_fn_is_row_major() {
        let shape = GridShape::new(2, 2).unwrap();
        let mut order = Vec::new();
        let grid = Grid::from_fn(shape, |row, col| {
            order.push((row, col));
            if row == col { BlockKind::Water } else { BlockKind::Grass }
        });
        assert_eq!(order, vec![(0, 0), (0, 1), (1, 0), (1, 1)]);
        assert_eq!(grid.get(1, 1), Ok(BlockKind::Water));
        assert_eq!(grid.get(0, 1), Ok(BlockKind::Grass));
    }

    #[test]
    fn test_iter_coordinates() {
        let mut grid = Grid::new(2, 3, BlockKind::Air).unwrap();
        grid.set(1, 0, BlockKind::Lava).unwrap();
        let cells: Vec<_> = grid.iter().collect();
        assert_eq!(cells.len(), 6);
        assert_eq!(cells[3], (1, 0, BlockKind::Lava));
        assert_eq!(cells[5], (1, 2, BlockKind::Air));
    }
}
