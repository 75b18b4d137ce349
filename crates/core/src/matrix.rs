//! Matrix module - owned rectangular integer grids
//!
//! Backs the field, the next-piece preview and the render buffer.
//! Storage is a flat row-major `Vec` allocated once at construction; the grid
//! is released when the owner drops it.

use crate::types::{Cell, EMPTY_CELL};

/// A `rows x cols` grid of cells, row-major (`row * cols + col`)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Matrix {
    /// Allocate a zeroed grid
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![EMPTY_CELL; rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline(always)]
    fn index(&self, row: isize, col: isize) -> Option<usize> {
        if row < 0 || col < 0 || row as usize >= self.rows || col as usize >= self.cols {
            return None;
        }
        Some(row as usize * self.cols + col as usize)
    }

    /// Cell at (row, col); `None` when out of bounds
    pub fn get(&self, row: isize, col: isize) -> Option<Cell> {
        self.index(row, col).map(|i| self.cells[i])
    }

    /// Write a cell. Returns false if out of bounds
    pub fn set(&mut self, row: isize, col: isize, value: Cell) -> bool {
        match self.index(row, col) {
            Some(i) => {
                self.cells[i] = value;
                true
            }
            None => false,
        }
    }

    /// One row as a slice.
    ///
    /// Panics if `row >= rows`.
    pub fn row(&self, row: usize) -> &[Cell] {
        let start = row * self.cols;
        &self.cells[start..start + self.cols]
    }

    pub fn row_mut(&mut self, row: usize) -> &mut [Cell] {
        let start = row * self.cols;
        &mut self.cells[start..start + self.cols]
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks_exact(self.cols.max(1)).take(self.rows)
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Copy another grid of the same shape into this one without reallocating.
    ///
    /// Panics if the shapes differ.
    pub fn copy_from(&mut self, other: &Matrix) {
        assert_eq!(
            (self.rows, self.cols),
            (other.rows, other.cols),
            "matrix shape mismatch"
        );
        self.cells.copy_from_slice(&other.cells);
    }

    /// Move every row in `0..row` down by one, overwriting `row`, and empty row 0
    pub fn shift_down_into(&mut self, row: usize) {
        if row >= self.rows {
            return;
        }
        let cols = self.cols;
        // copy_within handles the overlapping ranges
        self.cells.copy_within(0..row * cols, cols);
        self.row_mut(0).fill(EMPTY_CELL);
    }

    pub fn fill(&mut self, value: Cell) {
        self.cells.fill(value);
    }

    pub fn clear(&mut self) {
        self.fill(EMPTY_CELL);
    }

    /// True when every cell is empty
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&c| c == EMPTY_CELL)
    }

    /// Build from nested rows (tests and tooling)
    pub fn from_rows<R: AsRef<[Cell]>>(rows: &[R]) -> Self {
        let cols = rows.first().map(|r| r.as_ref().len()).unwrap_or(0);
        let mut m = Self::new(rows.len(), cols);
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            assert_eq!(row.len(), cols, "ragged rows");
            m.row_mut(y).copy_from_slice(row);
        }
        m
    }

    /// Convert to nested rows (tests and tooling)
    pub fn to_rows(&self) -> Vec<Vec<Cell>> {
        self.iter_rows().map(|r| r.to_vec()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_matrix_is_zeroed() {
        let m = Matrix::new(20, 10);
        assert_eq!(m.rows(), 20);
        assert_eq!(m.cols(), 10);
        assert_eq!(m.cells().len(), 200);
        assert!(m.is_empty());
    }

    #[test]
    fn get_and_set_respect_bounds() {
        let mut m = Matrix::new(4, 4);
        assert!(m.set(1, 2, 5));
        assert_eq!(m.get(1, 2), Some(5));
        assert_eq!(m.cells()[6], 5);

        assert!(!m.set(-1, 0, 1));
        assert!(!m.set(0, 4, 1));
        assert_eq!(m.get(4, 0), None);
        assert_eq!(m.get(0, -1), None);
    }

    #[test]
    fn shift_down_into_moves_rows_and_empties_top() {
        let mut m = Matrix::from_rows(&[[1u8, 1], [2, 2], [3, 3], [4, 4]]);
        m.shift_down_into(2);
        assert_eq!(m.to_rows(), vec![vec![0, 0], vec![1, 1], vec![2, 2], vec![4, 4]]);
    }

    #[test]
    fn shift_down_into_row_zero_only_clears_it() {
        let mut m = Matrix::from_rows(&[[1u8, 1], [2, 2]]);
        m.shift_down_into(0);
        assert_eq!(m.to_rows(), vec![vec![0, 0], vec![2, 2]]);
    }

    #[test]
    fn copy_from_keeps_shape() {
        let src = Matrix::from_rows(&[[1u8, 2], [3, 4]]);
        let mut dst = Matrix::new(2, 2);
        dst.copy_from(&src);
        assert_eq!(dst, src);
    }

    #[test]
    #[should_panic(expected = "matrix shape mismatch")]
    fn copy_from_rejects_other_shapes() {
        let mut dst = Matrix::new(2, 2);
        dst.copy_from(&Matrix::new(3, 2));
    }
}
