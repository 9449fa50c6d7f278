//! Magic square core type and operations.
//!
//! This module provides [`MagicSquare`], the grid type produced by the
//! constructors and consumed by display collaborators, along with the
//! structured validity checker [`verify`].
//!
//! A magic square of order n is an n x n grid of the integers 1..n² in
//! which every row, every column, and both main diagonals sum to the magic
//! constant n(n² + 1)/2.

mod verify;

pub use verify::{verify, VerificationIssue, VerificationResult};

use ndarray::Array2;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// An n x n grid of integers, indexed `[row][col]`, 0-based.
///
/// Squares returned by [`generate`](crate::engine::generate) are magic by
/// construction; squares built from external data via
/// [`MagicSquare::from_rows`] carry no such guarantee and should be checked
/// with [`MagicSquare::is_magic`] or [`verify`].
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MagicSquare {
    /// The grid data, shape (n, n).
    data: Array2<u32>,
}

impl MagicSquare {
    /// Create a square from grid data.
    ///
    /// # Panics
    ///
    /// Panics if the data is not square. Constructors produce square data
    /// by construction; external data goes through [`Self::try_new`] or
    /// [`Self::from_rows`] instead.
    #[must_use]
    pub(crate) fn new(data: Array2<u32>) -> Self {
        assert_eq!(
            data.nrows(),
            data.ncols(),
            "grid must be square, got {} x {}",
            data.nrows(),
            data.ncols()
        );
        Self { data }
    }

    /// Create a square from grid data, validating the shape.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if the data is not square.
    pub fn try_new(data: Array2<u32>) -> Result<Self> {
        if data.nrows() != data.ncols() {
            return Err(Error::DimensionMismatch {
                expected: format!("{0} x {0} (square)", data.nrows()),
                actual: format!("{} x {}", data.nrows(), data.ncols()),
            });
        }
        Ok(Self { data })
    }

    /// Create a square from nested row vectors.
    ///
    /// This is the entry point for externally supplied grids, the inverse
    /// of [`Self::to_rows`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if any row's length differs
    /// from the number of rows.
    ///
    /// # Example
    ///
    /// ```
    /// use magic_square::MagicSquare;
    ///
    /// // The Lo Shu square.
    /// let square = MagicSquare::from_rows(vec![
    ///     vec![2, 7, 6],
    ///     vec![9, 5, 1],
    ///     vec![4, 3, 8],
    /// ])
    /// .unwrap();
    ///
    /// assert!(square.is_magic());
    /// ```
    pub fn from_rows(rows: Vec<Vec<u32>>) -> Result<Self> {
        let n = rows.len();
        for (i, row) in rows.iter().enumerate() {
            if row.len() != n {
                return Err(Error::DimensionMismatch {
                    expected: format!("{n} columns in row {i}"),
                    actual: format!("{} columns", row.len()),
                });
            }
        }

        let flat: Vec<u32> = rows.into_iter().flatten().collect();
        let data = Array2::from_shape_vec((n, n), flat)
            .expect("row-major data matches checked shape");
        Ok(Self { data })
    }

    /// Get the order (side length) of the square.
    #[must_use]
    pub fn order(&self) -> usize {
        self.data.nrows()
    }

    /// Compute the magic constant n(n² + 1)/2 for this square's order.
    ///
    /// This is the sum every row, column, and diagonal of a valid square
    /// yields. It is 0 for the degenerate empty square.
    #[must_use]
    pub fn magic_constant(&self) -> u64 {
        magic_constant(self.order() as u64)
    }

    /// Get the value at a specific position.
    ///
    /// # Panics
    ///
    /// Panics if the indices are out of bounds.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> u32 {
        self.data[[row, col]]
    }

    /// Get a reference to the underlying data.
    #[must_use]
    pub fn data(&self) -> &Array2<u32> {
        &self.data
    }

    /// Consume the square and return the underlying data.
    #[must_use]
    pub fn into_data(self) -> Array2<u32> {
        self.data
    }

    /// Materialize the rows as plain nested vectors.
    ///
    /// This is the pass-through normalization consumed by display
    /// collaborators (table builders, heatmaps); it performs no algorithmic
    /// work.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<u32>> {
        self.data.rows().into_iter().map(|r| r.to_vec()).collect()
    }

    /// Check whether the square is magic.
    ///
    /// True iff every row sum, every column sum, and both diagonal sums
    /// equal the magic constant. False for the empty square. This checks
    /// sums only; use [`verify`] for a report that also covers value range
    /// and duplicates.
    ///
    /// # Example
    ///
    /// ```
    /// use magic_square::generate;
    ///
    /// let square = generate(7).unwrap();
    /// assert!(square.is_magic());
    /// ```
    #[must_use]
    pub fn is_magic(&self) -> bool {
        let n = self.order();
        if n == 0 {
            return false;
        }

        let expected = self.magic_constant();

        for row in self.data.rows() {
            if row.iter().map(|&v| u64::from(v)).sum::<u64>() != expected {
                return false;
            }
        }
        for col in self.data.columns() {
            if col.iter().map(|&v| u64::from(v)).sum::<u64>() != expected {
                return false;
            }
        }

        let main: u64 = (0..n).map(|i| u64::from(self.data[[i, i]])).sum();
        let anti: u64 = (0..n).map(|c| u64::from(self.data[[n - 1 - c, c]])).sum();

        main == expected && anti == expected
    }

    /// Check whether the square contains each of 1..n² exactly once.
    #[must_use]
    pub fn values_complete(&self) -> bool {
        let n = self.order();
        let mut seen = vec![false; n * n];
        for &v in &self.data {
            let v = v as usize;
            if v < 1 || v > n * n || seen[v - 1] {
                return false;
            }
            seen[v - 1] = true;
        }
        true
    }
}

/// Compute the magic constant n(n² + 1)/2 for order `n`.
///
/// n(n² + 1) is always even, so the division is exact in integers.
#[must_use]
pub(crate) fn magic_constant(n: u64) -> u64 {
    n * (n * n + 1) / 2
}

impl fmt::Debug for MagicSquare {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "MagicSquare(order {}) with data {:?}",
            self.order(),
            self.data
        )
    }
}

impl fmt::Display for MagicSquare {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.order();
        let width = (n * n).to_string().len();
        for row in self.data.rows() {
            let row_str: Vec<String> = row.iter().map(|v| format!("{v:>width$}")).collect();
            writeln!(f, "  {}", row_str.join(" "))?;
        }
        Ok(())
    }
}
