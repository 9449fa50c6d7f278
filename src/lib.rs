//! # magic-square
//!
//! A library for constructing and validating magic squares of arbitrary
//! order: n x n grids of the integers 1..n² whose rows, columns, and both
//! main diagonals all sum to n(n² + 1)/2.
//!
//! ## Overview
//!
//! Every order n (except the impossible n = 2) falls into one of three
//! arithmetic classes, each with its own construction algorithm:
//!
//! - **Odd** (n ≡ 1 mod 2): the Siamese diagonal-stepping method
//! - **Doubly even** (n ≡ 0 mod 4): a tiled 4×4 base pattern, Dürer style
//! - **Singly even** (n ≡ 2 mod 4): Conway's LUX quadrant relabeling
//!
//! This library provides:
//! - Automatic classification and dispatch ([`generate`])
//! - The three constructors for direct use ([`construct`])
//! - Width planning: the smallest square holding a cell count
//!   ([`compute_width`])
//! - Validation of constructed or externally supplied grids
//!   ([`MagicSquare::is_magic`], [`verify`])
//!
//! ## Quick Start
//!
//! ```rust
//! use magic_square::generate;
//!
//! let square = generate(5).unwrap();
//!
//! assert_eq!(square.order(), 5);
//! assert_eq!(square.magic_constant(), 65);
//! assert!(square.is_magic());
//! ```
//!
//! Or use a specific construction directly:
//!
//! ```rust
//! use magic_square::construct::{Constructor, Durer};
//!
//! let square = Durer.construct(8).expect("8 is doubly even");
//! assert!(square.is_magic());
//! ```
//!
//! ## Features
//!
//! - `serde`: Enable serialization/deserialization of squares and orders

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod construct;
pub mod engine;
pub mod error;
pub mod order;
pub mod square;
pub mod utils;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::construct::{Constructor, Durer, Lux, Siamese};
    pub use crate::engine::{compute_sum, compute_width, generate};
    pub use crate::error::{Error, Result};
    pub use crate::order::Order;
    pub use crate::square::{verify, MagicSquare, VerificationIssue, VerificationResult};
}

// Re-export commonly used items at crate root
pub use engine::{compute_sum, compute_width, generate};
pub use error::{Error, Result};
pub use order::Order;
pub use square::{verify, MagicSquare, VerificationResult};
