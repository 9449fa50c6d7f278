//! Siamese construction for odd-order magic squares.
//!
//! The Siamese (De la Loubère) method fills an odd-order square by walking
//! diagonally up and to the right with wraparound, dropping down one row
//! whenever the target cell is already occupied.
//!
//! ## Algorithm
//!
//! Start at row 0, middle column. For each value 1..n²:
//! 1. Place the value at the current cell.
//! 2. Step to (row − 1 mod n, col + 1 mod n).
//! 3. If that cell is occupied, step to (row + 1 mod n, same col) instead.
//!
//! ## Example
//!
//! ```
//! use magic_square::construct::{Constructor, Siamese};
//!
//! let square = Siamese.construct(3).unwrap();
//! assert_eq!(square.to_rows(), vec![
//!     vec![8, 1, 6],
//!     vec![3, 5, 7],
//!     vec![4, 9, 2],
//! ]);
//! ```

use ndarray::Array2;

use super::Constructor;
use crate::error::{Error, Result};
use crate::order::Order;
use crate::square::MagicSquare;

/// Siamese construction for odd orders, including the degenerate n = 1.
#[derive(Debug, Clone, Copy, Default)]
pub struct Siamese;

impl Siamese {
    /// Construct an n x n magic square for odd n.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OrderMismatch`] if `n` is even or zero.
    pub fn construct(&self, n: u32) -> Result<MagicSquare> {
        if n == 0 || !Order::Odd.matches(n) {
            return Err(Error::OrderMismatch {
                n,
                algorithm: self.name(),
                requires: "an odd order",
            });
        }

        let n = n as usize;
        // 0 marks an empty cell; placed values are 1..n².
        let mut data = Array2::zeros((n, n));

        let mut row = 0usize;
        let mut col = n / 2;
        for value in 1..=(n * n) as u32 {
            data[[row, col]] = value;

            let up_row = (row + n - 1) % n;
            let right_col = (col + 1) % n;
            if data[[up_row, right_col]] == 0 {
                row = up_row;
                col = right_col;
            } else {
                row = (row + 1) % n;
            }
        }

        Ok(MagicSquare::new(data))
    }
}

impl Constructor for Siamese {
    fn name(&self) -> &'static str {
        "Siamese"
    }

    fn order(&self) -> Order {
        Order::Odd
    }

    fn construct(&self, n: u32) -> Result<MagicSquare> {
        Siamese::construct(self, n)
    }
}
