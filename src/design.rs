use std::sync::Arc;

use crate::error::{EditorError, EditorResult};
use crate::stitch::Stitch;

/// Reference-counted immutable design for sharing with the presentation
/// layer; `Arc::ptr_eq` is the change-detection test between renders.
pub type DesignRef = Arc<Design>;

/// The canonical grid: dimensions plus a row-major stitch sequence.
///
/// Invariant: `stitches.len() == columns * rows` after every transition.
/// The constructors below are the only way to build one, so the invariant
/// is upheld by construction rather than checked at use sites.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Design {
    columns: usize,
    rows: usize,
    stitches: Vec<Stitch>,
}

impl Design {
    /// A blank `columns x rows` grid, every cell unpunched.
    pub fn blank(columns: usize, rows: usize) -> EditorResult<Self> {
        if columns == 0 || rows == 0 {
            return Err(EditorError::InvalidDimensions { columns, rows });
        }
        Ok(Self {
            columns,
            rows,
            stitches: vec![Stitch::Unpunched; columns * rows],
        })
    }

    /// Build a design from an explicit stitch sequence, validating the
    /// length invariant up front.
    pub fn from_stitches(
        stitches: Vec<Stitch>,
        columns: usize,
        rows: usize,
    ) -> EditorResult<Self> {
        if columns == 0 || rows == 0 {
            return Err(EditorError::InvalidDimensions { columns, rows });
        }
        if stitches.len() != columns * rows {
            return Err(EditorError::LengthMismatch {
                expected: columns * rows,
                actual: stitches.len(),
            });
        }
        Ok(Self {
            columns,
            rows,
            stitches,
        })
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn stitches(&self) -> &[Stitch] {
        &self.stitches
    }

    /// Cell count, always `columns * rows`.
    // Dimensions are non-zero, so a design can never be empty.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.stitches.len()
    }

    /// Stitch at a flat index, `None` when out of range.
    pub fn get(&self, index: usize) -> Option<Stitch> {
        self.stitches.get(index).copied()
    }

    /// Stitch at `(row, col)`, `None` when either coordinate is out of range.
    pub fn stitch_at(&self, row: usize, col: usize) -> Option<Stitch> {
        if row >= self.rows || col >= self.columns {
            return None;
        }
        self.get(row * self.columns + col)
    }

    /// A new design identical except for one replaced cell.
    ///
    /// Allocates a fresh stitch vector so the result is a distinct value
    /// from `self` even when the cell already held `value`.
    pub fn with_stitch(&self, index: usize, value: Stitch) -> EditorResult<Self> {
        if index >= self.stitches.len() {
            return Err(EditorError::IndexOutOfRange {
                index,
                len: self.stitches.len(),
            });
        }
        let mut stitches = self.stitches.clone();
        stitches[index] = value;
        Ok(Self {
            columns: self.columns,
            rows: self.rows,
            stitches,
        })
    }

    /// Lossy crop/extend to new dimensions: the overlap region keeps its
    /// cells, everything outside it is unpunched. Callers confirm with the
    /// user before shrinking, since cells outside the new bounds are gone.
    pub fn resize(&self, new_columns: usize, new_rows: usize) -> EditorResult<Self> {
        let mut resized = Self::blank(new_columns, new_rows)?;
        for r in 0..self.rows.min(new_rows) {
            for c in 0..self.columns.min(new_columns) {
                resized.stitches[r * new_columns + c] = self.stitches[r * self.columns + c];
            }
        }
        Ok(resized)
    }
}

impl Default for Design {
    /// The startup grid: 24 columns by 20 rows, all unpunched.
    fn default() -> Self {
        Self::blank(24, 20).expect("default dimensions are non-zero")
    }
}
