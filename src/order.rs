//! Order classification for magic squares.
//!
//! Every order n of a magic square falls into one of three arithmetic
//! classes, and each class has its own construction algorithm:
//!
//! | Order | Congruence | Construction |
//! |-------|------------|--------------|
//! | [`Order::Odd`] | n ≡ 1 (mod 2) | [`Siamese`](crate::construct::Siamese) |
//! | [`Order::DoublyEven`] | n ≡ 0 (mod 4) | [`Durer`](crate::construct::Durer) |
//! | [`Order::SinglyEven`] | n ≡ 2 (mod 4) | [`Lux`](crate::construct::Lux) |
//!
//! The classes are mutually exclusive over the positive integers with a
//! single gap: n = 2 matches no class, and indeed no 2 x 2 magic square
//! exists.

use crate::construct::{Constructor, Durer, Lux, Siamese};
use crate::utils::ceil_sqrt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

static SIAMESE: Siamese = Siamese;
static DURER: Durer = Durer;
static LUX: Lux = Lux;

/// The arithmetic class of a magic square order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Order {
    /// n ≡ 1 (mod 2), built with the Siamese method.
    Odd,
    /// n ≡ 0 (mod 4), built with the Dürer pattern fill.
    DoublyEven,
    /// n ≡ 2 (mod 4), built with the LUX quadrant method.
    SinglyEven,
}

impl Order {
    /// All orders, in classification priority.
    pub const ALL: [Order; 3] = [Order::Odd, Order::DoublyEven, Order::SinglyEven];

    /// Classify an order, returning the first matching class.
    ///
    /// Returns `None` for n = 0 and for n = 2. The singly-even congruence
    /// does cover 2, but no 2 x 2 magic square exists, so classification
    /// excludes it rather than dispatching to a constructor that cannot
    /// succeed.
    ///
    /// # Examples
    ///
    /// ```
    /// use magic_square::Order;
    ///
    /// assert_eq!(Order::classify(5), Some(Order::Odd));
    /// assert_eq!(Order::classify(8), Some(Order::DoublyEven));
    /// assert_eq!(Order::classify(6), Some(Order::SinglyEven));
    /// assert_eq!(Order::classify(2), None);
    /// ```
    #[must_use]
    pub fn classify(n: u32) -> Option<Self> {
        if n == 0 || n == 2 {
            return None;
        }
        Self::ALL.into_iter().find(|order| order.matches(n))
    }

    /// Test whether `n` satisfies this class's congruence.
    ///
    /// This is the raw congruence test: `Order::SinglyEven.matches(2)` is
    /// true even though [`Order::classify`] rejects n = 2.
    #[must_use]
    pub fn matches(self, n: u32) -> bool {
        match self {
            Order::Odd => n % 2 == 1,
            Order::DoublyEven => n % 4 == 0,
            Order::SinglyEven => n % 4 == 2,
        }
    }

    /// Compute the minimum width of a square of this class that can hold
    /// `cell_count` cells.
    ///
    /// With m = ceil(sqrt(cell_count)):
    /// - Odd: m, bumped to m+1 if m is even.
    /// - DoublyEven: m rounded up to a multiple of 4.
    /// - SinglyEven: m rounded up to the next value ≡ 2 (mod 4).
    ///
    /// # Examples
    ///
    /// ```
    /// use magic_square::Order;
    ///
    /// assert_eq!(Order::Odd.min_width(10), 5);
    /// assert_eq!(Order::DoublyEven.min_width(10), 4);
    /// assert_eq!(Order::SinglyEven.min_width(10), 6);
    /// ```
    #[must_use]
    pub fn min_width(self, cell_count: u32) -> u32 {
        let m = ceil_sqrt(cell_count);
        match self {
            Order::Odd => {
                if m % 2 == 0 {
                    m + 1
                } else {
                    m
                }
            }
            Order::DoublyEven => ((m + 3) / 4) * 4,
            // ceil((m - 2) / 4) * 4 + 2, kept division-safe for m < 2 where
            // the ceiling of the negative quotient is 0.
            Order::SinglyEven => ((m + 1) / 4) * 4 + 2,
        }
    }

    /// The construction algorithm for this class.
    #[must_use]
    pub fn constructor(self) -> &'static dyn Constructor {
        match self {
            Order::Odd => &SIAMESE,
            Order::DoublyEven => &DURER,
            Order::SinglyEven => &LUX,
        }
    }

    /// Human-readable class name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Order::Odd => "odd",
            Order::DoublyEven => "doubly even",
            Order::SinglyEven => "singly even",
        }
    }
}
