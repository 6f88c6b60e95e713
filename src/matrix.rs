//! The fence grid used to show where characters sit on each rail.

use crate::path::ZigZag;
use crate::MIN_RAILS;
use alloc::vec;
use alloc::vec::Vec;
use core::fmt;
use zeroize::Zeroize;

/// A `rails × width` grid; column `i` has exactly one occupied cell, on `rail(i)`.
///
/// Built fresh from a `(sequence, rails)` pair and never shared between
/// operations. Degenerate input (empty sequence or fewer than two rails)
/// produces an empty grid with no rows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FenceMatrix<T> {
    rails: usize,
    width: usize,
    cells: Vec<Option<T>>,
}

impl<T: Copy> FenceMatrix<T> {
    /// The grid with no rows and no columns.
    pub fn empty() -> Self {
        Self {
            rails: 0,
            width: 0,
            cells: Vec::new(),
        }
    }

    /// Lays ciphertext out the way decryption does: the zig-zag cells are
    /// filled rail by rail, left to right, in input order.
    pub fn ciphertext_view(text: &[T], rails: usize) -> Self {
        let Some(mut matrix) = Self::blank(text.len(), rails) else {
            return Self::empty();
        };
        let width = matrix.width;

        let mut marked = vec![false; rails * width];
        for (col, rail) in ZigZag::new(rails, width).enumerate() {
            marked[rail * width + col] = true;
        }
        for ((cell, _), &item) in matrix
            .cells
            .iter_mut()
            .zip(&marked)
            .filter(|(_, m)| **m)
            .zip(text)
        {
            *cell = Some(item);
        }
        matrix
    }

    /// Lays plaintext out the way encryption does: item `i` sits at `(rail(i), i)`.
    pub fn plaintext_view(text: &[T], rails: usize) -> Self {
        let Some(mut matrix) = Self::blank(text.len(), rails) else {
            return Self::empty();
        };
        let width = matrix.width;
        for ((col, rail), &item) in ZigZag::new(rails, width).enumerate().zip(text) {
            matrix.cells[rail * width + col] = Some(item);
        }
        matrix
    }

    fn blank(width: usize, rails: usize) -> Option<Self> {
        if width == 0 || rails < MIN_RAILS {
            tracing::debug!(width, rails, "degenerate fence, returning empty grid");
            return None;
        }
        Some(Self {
            rails,
            width,
            cells: vec![None; rails * width],
        })
    }

    /// Occupied cells read rail by rail, which is the ciphertext order.
    pub fn read_rows(&self) -> Vec<T> {
        self.cells.iter().flatten().copied().collect()
    }

    /// Occupied cells read along the zig-zag path, which is the plaintext order.
    pub fn read_zigzag(&self) -> Vec<T> {
        if self.is_empty() {
            return Vec::new();
        }
        ZigZag::new(self.rails, self.width)
            .enumerate()
            .filter_map(|(col, rail)| self.cells[rail * self.width + col])
            .collect()
    }
}

impl<T> FenceMatrix<T> {
    /// Number of rows.
    pub fn rails(&self) -> usize {
        self.rails
    }

    /// Number of columns, equal to the sequence length.
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn is_empty(&self) -> bool {
        self.rails == 0
    }

    /// The cell at `(row, col)`, or `None` when out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<&Option<T>> {
        if row >= self.rails || col >= self.width {
            return None;
        }
        self.cells.get(row * self.width + col)
    }

    pub fn row(&self, row: usize) -> Option<&[Option<T>]> {
        if row >= self.rails {
            return None;
        }
        let start = row * self.width;
        Some(&self.cells[start..start + self.width])
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Option<T>]> {
        // `chunks_exact` panics on zero, and an empty grid has no rows anyway.
        self.cells.chunks_exact(self.width.max(1))
    }

    /// `(row, col, value)` for every occupied cell, in row-major order.
    pub fn occupied(&self) -> impl Iterator<Item = (usize, usize, &T)> {
        let width = self.width.max(1);
        self.cells
            .iter()
            .enumerate()
            .filter_map(move |(at, cell)| cell.as_ref().map(|value| (at / width, at % width, value)))
    }
}

impl<T: Zeroize> Zeroize for FenceMatrix<T> {
    fn zeroize(&mut self) {
        self.cells.zeroize();
        self.rails = 0;
        self.width = 0;
    }
}

/// One line per rail, `.` for empty cells.
impl fmt::Display for FenceMatrix<char> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell.unwrap_or('.'))?;
            }
        }
        Ok(())
    }
}
