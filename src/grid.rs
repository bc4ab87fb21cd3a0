//! Cell layout of a sprite-sheet canvas.
//!
//! Cells are `cell_size × cell_size` squares laid out from the top-left
//! corner. When the canvas is not a multiple of `cell_size`, the last column
//! (or row) is a narrower remainder cell of `width % cell_size` pixels.
//! Grid lines sit on every row/column that is a positive multiple of
//! `cell_size`, i.e. on the first row/column of every cell except the
//! top-left one.
use crate::error::{DimensionIssue, OutlineError};
use serde::{Deserialize, Serialize};

/// Canvas dimensions plus the cell edge length, all in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridSpec {
    width: usize,
    height: usize,
    cell_size: usize,
}

impl GridSpec {
    pub fn new(width: usize, height: usize, cell_size: usize) -> Result<Self, OutlineError> {
        if width == 0 {
            return Err(OutlineError::InvalidDimensions(DimensionIssue::ZeroWidth));
        }
        if height == 0 {
            return Err(OutlineError::InvalidDimensions(DimensionIssue::ZeroHeight));
        }
        if cell_size == 0 {
            return Err(OutlineError::InvalidDimensions(DimensionIssue::ZeroCellSize));
        }
        Ok(Self {
            width,
            height,
            cell_size,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn cell_size(&self) -> usize {
        self.cell_size
    }

    /// Number of cell columns, counting a trailing remainder column.
    pub fn columns(&self) -> usize {
        self.width.div_ceil(self.cell_size)
    }

    /// Number of cell rows, counting a trailing remainder row.
    pub fn rows(&self) -> usize {
        self.height.div_ceil(self.cell_size)
    }

    pub fn cell_count(&self) -> usize {
        self.columns() * self.rows()
    }

    /// Edge length of the last column: `width % cell_size`, or a full cell.
    pub fn remainder_width(&self) -> usize {
        match self.width % self.cell_size {
            0 => self.cell_size,
            r => r,
        }
    }

    pub fn remainder_height(&self) -> usize {
        match self.height % self.cell_size {
            0 => self.cell_size,
            r => r,
        }
    }

    /// True when `v` is a row or column index carrying a grid line.
    #[inline]
    pub fn is_line(&self, v: usize) -> bool {
        v > 0 && v % self.cell_size == 0
    }

    /// Cell at grid position `(col, row)`; `None` past the last cell.
    pub fn cell(&self, col: usize, row: usize) -> Option<Cell> {
        if col >= self.columns() || row >= self.rows() {
            return None;
        }
        let x0 = col * self.cell_size;
        let y0 = row * self.cell_size;
        Some(Cell {
            col,
            row,
            x0,
            y0,
            w: self.cell_size.min(self.width - x0),
            h: self.cell_size.min(self.height - y0),
        })
    }

    /// Every cell, visited in `order`.
    pub fn cells(&self, order: CellOrder) -> Cells {
        Cells {
            grid: *self,
            order,
            next: 0,
        }
    }
}

/// One cell: grid position plus pixel origin and extent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    pub col: usize,
    pub row: usize,
    pub x0: usize,
    pub y0: usize,
    pub w: usize,
    pub h: usize,
}

impl Cell {
    /// Half-cell offset from the origin; decides occupancy.
    #[inline]
    pub fn representative(&self) -> (isize, isize) {
        ((self.x0 + self.w / 2) as isize, (self.y0 + self.h / 2) as isize)
    }
}

/// Traversal order over the cells of a grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CellOrder {
    #[default]
    RowMajor,
    ReverseRowMajor,
    ColumnMajor,
}

/// Iterator returned by [`GridSpec::cells`].
#[derive(Clone, Debug)]
pub struct Cells {
    grid: GridSpec,
    order: CellOrder,
    next: usize,
}

impl Iterator for Cells {
    type Item = Cell;

    fn next(&mut self) -> Option<Cell> {
        let total = self.grid.cell_count();
        if self.next >= total {
            return None;
        }
        let k = self.next;
        self.next += 1;
        let (cols, rows) = (self.grid.columns(), self.grid.rows());
        let (col, row) = match self.order {
            CellOrder::RowMajor => (k % cols, k / cols),
            CellOrder::ReverseRowMajor => {
                let k = total - 1 - k;
                (k % cols, k / cols)
            }
            CellOrder::ColumnMajor => (k / rows, k % rows),
        };
        self.grid.cell(col, row)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.grid.cell_count() - self.next;
        (left, Some(left))
    }
}

impl ExactSizeIterator for Cells {}
