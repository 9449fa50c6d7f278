//! Top-level generation, width planning, and sum computation.
//!
//! This module is the orchestrator: it validates input eagerly, classifies
//! the order, and dispatches to the matching constructor. Callers that want
//! a magic square use [`generate`]; the individual constructors in
//! [`construct`](crate::construct) remain available for direct use.

use crate::error::{Error, Result};
use crate::order::Order;
use crate::square::{magic_constant, MagicSquare};

/// Generate an n x n magic square.
///
/// Classifies `n` into its arithmetic class and dispatches to the matching
/// construction algorithm.
///
/// # Errors
///
/// - [`Error::InvalidInput`] if `n` is 0.
/// - [`Error::NoSolution`] if `n` is 2 (mathematically impossible).
/// - [`Error::UnsupportedOrder`] if no class matches; defensive, not
///   reachable with the closed order set.
///
/// # Example
///
/// ```
/// use magic_square::generate;
///
/// let square = generate(5).unwrap();
/// assert_eq!(square.order(), 5);
/// assert_eq!(square.magic_constant(), 65);
/// assert!(square.is_magic());
/// ```
pub fn generate(n: u32) -> Result<MagicSquare> {
    if n == 0 {
        return Err(Error::invalid_input("order must be a positive integer"));
    }
    if n == 2 {
        return Err(Error::NoSolution { n });
    }

    let order = Order::classify(n).ok_or(Error::UnsupportedOrder { n })?;
    order.constructor().construct(n)
}

/// Compute the magic constant n(n² + 1)/2 of an n x n magic square.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] if `n` is 0.
///
/// # Example
///
/// ```
/// use magic_square::compute_sum;
///
/// assert_eq!(compute_sum(4).unwrap(), 34);
/// assert_eq!(compute_sum(5).unwrap(), 65);
/// ```
pub fn compute_sum(n: u32) -> Result<u64> {
    if n == 0 {
        return Err(Error::invalid_input("order must be a positive integer"));
    }
    Ok(magic_constant(u64::from(n)))
}

/// Compute the minimum magic square width that can hold `cell_count` cells.
///
/// Each order class yields a candidate width via
/// [`Order::min_width`]; the smallest candidate wins. A cell may hold a
/// character, number, or word, so a caller laying out `cell_count` items
/// gets the tightest square any construction can fill.
///
/// Note that the winning width says nothing about which class generates it:
/// 10 cells fit tightest in a 4 x 4 doubly-even square even though a 5 x 5
/// odd square also holds them.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] if `cell_count` is 0.
///
/// # Example
///
/// ```
/// use magic_square::compute_width;
///
/// assert_eq!(compute_width(10).unwrap(), 4);
/// assert_eq!(compute_width(17).unwrap(), 5);
/// ```
pub fn compute_width(cell_count: u32) -> Result<u32> {
    if cell_count == 0 {
        return Err(Error::invalid_input(
            "cell count must be a positive integer",
        ));
    }

    // 0 would signal "no order produced a candidate"; unreachable with the
    // closed, non-empty order set.
    Ok(Order::ALL
        .iter()
        .map(|order| order.min_width(cell_count))
        .min()
        .unwrap_or(0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_all_classes() {
        for n in [1u32, 3, 5, 7, 9, 4, 8, 12, 6, 10, 14] {
            let square = generate(n).unwrap();
            assert_eq!(square.order(), n as usize);
            assert!(square.is_magic(), "generate({n}) must be magic");
            assert!(
                square.values_complete(),
                "generate({n}) must contain 1..n² once each"
            );
        }
    }

    #[test]
    fn test_generate_dispatch() {
        // Odd beats the even classes in priority; spot-check each class
        // lands on its own algorithm via a distinctive cell.
        assert_eq!(generate(5).unwrap().get(0, 2), 1); // Siamese start
        assert_eq!(generate(4).unwrap().get(0, 0), 1); // ascending pass
        assert_eq!(generate(6).unwrap().get(0, 5), 1); // LUX anti-diagonal
    }

    #[test]
    fn test_generate_zero() {
        assert!(matches!(generate(0), Err(Error::InvalidInput { .. })));
    }

    #[test]
    fn test_generate_two() {
        assert_eq!(generate(2), Err(Error::NoSolution { n: 2 }));
    }

    #[test]
    fn test_mutated_cell_breaks_validity() {
        for n in [3u32, 4, 6] {
            let square = generate(n).unwrap();
            for row in 0..n as usize {
                for col in 0..n as usize {
                    let mut data = square.data().clone();
                    data[[row, col]] += 1;
                    let broken = MagicSquare::try_new(data).unwrap();
                    assert!(
                        !broken.is_magic(),
                        "mutating ({row}, {col}) of order {n} must break validity"
                    );
                }
            }
        }
    }

    #[test]
    fn test_compute_sum() {
        assert_eq!(compute_sum(1).unwrap(), 1);
        assert_eq!(compute_sum(3).unwrap(), 15);
        assert_eq!(compute_sum(4).unwrap(), 34);
        assert_eq!(compute_sum(5).unwrap(), 65);
        assert_eq!(compute_sum(100).unwrap(), 500_050);
        assert!(compute_sum(0).is_err());
    }

    #[test]
    fn test_compute_sum_matches_generated() {
        for n in [3u32, 4, 6, 9] {
            let square = generate(n).unwrap();
            assert_eq!(compute_sum(n).unwrap(), square.magic_constant());
        }
    }

    #[test]
    fn test_compute_width() {
        assert_eq!(compute_width(1).unwrap(), 1);
        assert_eq!(compute_width(2).unwrap(), 2);
        assert_eq!(compute_width(5).unwrap(), 3);
        assert_eq!(compute_width(9).unwrap(), 3);
        assert_eq!(compute_width(10).unwrap(), 4);
        assert_eq!(compute_width(16).unwrap(), 4);
        assert_eq!(compute_width(17).unwrap(), 5);
        assert_eq!(compute_width(26).unwrap(), 6);
        assert_eq!(compute_width(100).unwrap(), 10);
        assert!(compute_width(0).is_err());
    }

    #[test]
    fn test_compute_width_is_minimal() {
        // The winner must hold the cells and belong to some class; no
        // smaller width of any class may hold them.
        for cells in 1u32..=300 {
            let w = compute_width(cells).unwrap();
            assert!(w * w >= cells);
            assert!(Order::ALL.iter().any(|o| o.matches(w)));
            for smaller in 1..w {
                let fits = Order::ALL
                    .iter()
                    .any(|o| o.matches(smaller) && smaller * smaller >= cells);
                assert!(!fits, "width {smaller} also fits {cells} cells");
            }
        }
    }
}
