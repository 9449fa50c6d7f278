//! Pattern-fill construction for doubly-even-order magic squares.
//!
//! For n divisible by 4, a fixed 4×4 binary pattern tiled across the grid
//! splits the cells into two complementary sets. Counting 1..n² forward
//! over one set and backward over the other yields a magic square; the 4×4
//! case is the arrangement in Albrecht Dürer's *Melencolia I*.
//!
//! ## Algorithm
//!
//! 1. Tile the base pattern via `base[row % 4][col % 4]`.
//! 2. Pass 1: scan row-major from (0,0), counting every cell visited;
//!    write the count only where the pattern bit is 1.
//! 3. Pass 2: scan reverse row-major from (n−1,n−1) with a fresh count;
//!    write only where the bit is 0.
//!
//! The bit partitions the cells, so the two passes cover every cell
//! exactly once.

use ndarray::Array2;

use super::Constructor;
use crate::error::{Error, Result};
use crate::order::Order;
use crate::square::MagicSquare;

/// The tiled 4×4 pattern: 1 means "filled by the ascending pass".
const BASE: [[u8; 4]; 4] = [
    [1, 0, 0, 1],
    [0, 1, 1, 0],
    [0, 1, 1, 0],
    [1, 0, 0, 1],
];

/// Dürer-style pattern fill for doubly-even orders.
///
/// # Example
///
/// ```
/// use magic_square::construct::{Constructor, Durer};
///
/// let square = Durer.construct(4).unwrap();
/// assert!(square.is_magic());
/// assert_eq!(square.magic_constant(), 34);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Durer;

impl Durer {
    /// Construct an n x n magic square for n divisible by 4.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OrderMismatch`] if `n` is not a positive multiple
    /// of 4.
    pub fn construct(&self, n: u32) -> Result<MagicSquare> {
        if n == 0 || !Order::DoublyEven.matches(n) {
            return Err(Error::OrderMismatch {
                n,
                algorithm: self.name(),
                requires: "an order divisible by 4",
            });
        }

        let n = n as usize;
        let mut data = Array2::zeros((n, n));

        // Ascending pass: count every cell, write where the bit is 1.
        let mut counter = 0u32;
        for row in 0..n {
            for col in 0..n {
                counter += 1;
                if BASE[row % 4][col % 4] == 1 {
                    data[[row, col]] = counter;
                }
            }
        }

        // Descending pass: fresh count from the last cell backwards, write
        // where the bit is 0.
        counter = 0;
        for row in (0..n).rev() {
            for col in (0..n).rev() {
                counter += 1;
                if BASE[row % 4][col % 4] == 0 {
                    data[[row, col]] = counter;
                }
            }
        }

        Ok(MagicSquare::new(data))
    }
}

impl Constructor for Durer {
    fn name(&self) -> &'static str {
        "Durer"
    }

    fn order(&self) -> Order {
        Order::DoublyEven
    }

    fn construct(&self, n: u32) -> Result<MagicSquare> {
        Durer::construct(self, n)
    }
}
