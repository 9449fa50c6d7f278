//! Structured verification of magic square properties.
//!
//! [`MagicSquare::is_magic`] answers yes/no; this module produces a report
//! naming every line whose sum is off and every value that is duplicated or
//! outside 1..n², which is what a caller debugging a hand-built grid wants.

use super::{magic_constant, MagicSquare};

/// Result of verifying a magic square.
#[derive(Debug, Clone)]
pub struct VerificationResult {
    /// Whether the square passes all checks.
    pub is_valid: bool,
    /// The magic constant every line is expected to sum to.
    pub expected_sum: u64,
    /// Details about any issues found.
    pub issues: Vec<VerificationIssue>,
}

/// A specific issue found during verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerificationIssue {
    /// A row does not sum to the magic constant.
    RowSumMismatch {
        /// The offending row index.
        row: usize,
        /// The actual sum.
        sum: u64,
    },
    /// A column does not sum to the magic constant.
    ColumnSumMismatch {
        /// The offending column index.
        col: usize,
        /// The actual sum.
        sum: u64,
    },
    /// The main (top-left to bottom-right) diagonal sum is off.
    MainDiagonalMismatch {
        /// The actual sum.
        sum: u64,
    },
    /// The anti (bottom-left to top-right) diagonal sum is off.
    AntiDiagonalMismatch {
        /// The actual sum.
        sum: u64,
    },
    /// A value lies outside the range 1..n².
    ValueOutOfRange {
        /// Row of the offending cell.
        row: usize,
        /// Column of the offending cell.
        col: usize,
        /// The out-of-range value.
        value: u32,
    },
    /// A value appears more than once.
    DuplicateValue {
        /// The duplicated value.
        value: u32,
    },
    /// The square has no cells.
    Empty,
}

/// Verify a magic square, reporting every failing line and value.
///
/// The sum criteria match [`MagicSquare::is_magic`] exactly; the value
/// checks (range and uniqueness) are additional, so a grid can be magic by
/// sums yet still report issues here.
///
/// # Example
///
/// ```
/// use magic_square::{generate, verify};
///
/// let square = generate(6).unwrap();
/// let report = verify(&square);
/// assert!(report.is_valid);
/// assert_eq!(report.expected_sum, 111);
/// assert!(report.issues.is_empty());
/// ```
#[must_use]
pub fn verify(square: &MagicSquare) -> VerificationResult {
    let n = square.order();
    let expected = magic_constant(n as u64);
    let mut issues = Vec::new();

    if n == 0 {
        return VerificationResult {
            is_valid: false,
            expected_sum: 0,
            issues: vec![VerificationIssue::Empty],
        };
    }

    for (row, line) in square.data().rows().into_iter().enumerate() {
        let sum: u64 = line.iter().map(|&v| u64::from(v)).sum();
        if sum != expected {
            issues.push(VerificationIssue::RowSumMismatch { row, sum });
        }
    }

    for (col, line) in square.data().columns().into_iter().enumerate() {
        let sum: u64 = line.iter().map(|&v| u64::from(v)).sum();
        if sum != expected {
            issues.push(VerificationIssue::ColumnSumMismatch { col, sum });
        }
    }

    let main: u64 = (0..n).map(|i| u64::from(square.get(i, i))).sum();
    if main != expected {
        issues.push(VerificationIssue::MainDiagonalMismatch { sum: main });
    }

    let anti: u64 = (0..n).map(|c| u64::from(square.get(n - 1 - c, c))).sum();
    if anti != expected {
        issues.push(VerificationIssue::AntiDiagonalMismatch { sum: anti });
    }

    let mut counts = vec![0usize; n * n + 1];
    for row in 0..n {
        for col in 0..n {
            let value = square.get(row, col);
            let v = value as usize;
            if v < 1 || v > n * n {
                issues.push(VerificationIssue::ValueOutOfRange { row, col, value });
            } else {
                counts[v] += 1;
            }
        }
    }
    for (v, &count) in counts.iter().enumerate() {
        if count > 1 {
            issues.push(VerificationIssue::DuplicateValue { value: v as u32 });
        }
    }

    VerificationResult {
        is_valid: issues.is_empty(),
        expected_sum: expected,
        issues,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lo_shu() -> MagicSquare {
        MagicSquare::from_rows(vec![vec![2, 7, 6], vec![9, 5, 1], vec![4, 3, 8]]).unwrap()
    }

    #[test]
    fn test_verify_valid() {
        let report = verify(&lo_shu());
        assert!(report.is_valid);
        assert_eq!(report.expected_sum, 15);
        assert!(report.issues.is_empty());
    }

    #[test]
    fn test_verify_agrees_with_is_magic() {
        let square = lo_shu();
        assert_eq!(verify(&square).is_valid, square.is_magic());
    }

    #[test]
    fn test_verify_broken_cell() {
        // 1 -> 2 at (1, 2): breaks row 1 and column 2, and duplicates the
        // value 2.
        let square =
            MagicSquare::from_rows(vec![vec![2, 7, 6], vec![9, 5, 2], vec![4, 3, 8]]).unwrap();
        let report = verify(&square);

        assert!(!report.is_valid);
        assert!(report
            .issues
            .contains(&VerificationIssue::RowSumMismatch { row: 1, sum: 16 }));
        assert!(report
            .issues
            .contains(&VerificationIssue::ColumnSumMismatch { col: 2, sum: 16 }));
        assert!(report
            .issues
            .contains(&VerificationIssue::DuplicateValue { value: 2 }));
    }

    #[test]
    fn test_verify_out_of_range() {
        let square =
            MagicSquare::from_rows(vec![vec![0, 7, 8], vec![9, 5, 1], vec![4, 3, 10]]).unwrap();
        let report = verify(&square);

        assert!(!report.is_valid);
        assert!(report.issues.contains(&VerificationIssue::ValueOutOfRange {
            row: 0,
            col: 0,
            value: 0
        }));
        assert!(report.issues.contains(&VerificationIssue::ValueOutOfRange {
            row: 2,
            col: 2,
            value: 10
        }));
    }

    #[test]
    fn test_verify_empty() {
        let square = MagicSquare::from_rows(Vec::new()).unwrap();
        let report = verify(&square);
        assert!(!report.is_valid);
        assert_eq!(report.issues, vec![VerificationIssue::Empty]);
    }
}
