//! Magic square construction algorithms.
//!
//! Each arithmetic class of order has its own filling algorithm:
//!
//! | Construction | Orders | Method |
//! |--------------|--------|--------|
//! | [`Siamese`] | n ≡ 1 (mod 2) | diagonal stepping with wraparound |
//! | [`Durer`] | n ≡ 0 (mod 4) | tiled 4×4 base pattern, two counting passes |
//! | [`Lux`] | n ≡ 2 (mod 4) | quadrant relabeling (Conway's LUX method) |
//!
//! All constructors implement the [`Constructor`] trait. Each guards its
//! own congruence requirement, so a wrong-parity order fails with
//! [`Error::OrderMismatch`](crate::Error::OrderMismatch) instead of
//! producing a broken grid. [`generate`](crate::engine::generate) performs
//! classification and dispatch so callers normally never pick a
//! constructor by hand.
//!
//! ```
//! use magic_square::construct::{Constructor, Siamese};
//!
//! let square = Siamese.construct(5).unwrap();
//! assert!(square.is_magic());
//! assert!(Siamese.construct(4).is_err());
//! ```

mod durer;
mod lux;
mod siamese;

pub use durer::Durer;
pub use lux::Lux;
pub use siamese::Siamese;

use crate::error::Result;
use crate::order::Order;
use crate::square::MagicSquare;

/// Trait for magic square construction algorithms.
pub trait Constructor: Send + Sync {
    /// Get the name of this construction method.
    fn name(&self) -> &'static str;

    /// Get the order class this constructor serves.
    fn order(&self) -> Order;

    /// Test whether this constructor applies to order `n`.
    fn applies_to(&self, n: u32) -> bool {
        self.order().matches(n)
    }

    /// Construct an n x n magic square.
    ///
    /// # Errors
    ///
    /// Returns an error if `n` is outside this constructor's congruence
    /// class.
    fn construct(&self, n: u32) -> Result<MagicSquare>;
}
