//! Numeric helpers over integer sequences.
//!
//! Every helper is pure and total. Arithmetic saturates at the `i64` bounds
//! rather than panicking on overflow.

use serde::Serialize;

/// Fixed sample sequence rendered by the profile views.
pub const SAMPLE_NUMBERS: [i64; 5] = [1, 2, 3, 4, 5];

/// Double every element, preserving order and length.
///
/// # Examples
///
/// ```
/// use presentation_utils::doubled;
///
/// assert_eq!(doubled(&[1, -2, 0]), vec![2, -4, 0]);
/// ```
#[must_use]
pub fn doubled(values: &[i64]) -> Vec<i64> {
    values.iter().map(|value| value.saturating_mul(2)).collect()
}

/// Sum every element with a left fold starting at zero.
///
/// # Examples
///
/// ```
/// use presentation_utils::sum;
///
/// assert_eq!(sum(&[]), 0);
/// assert_eq!(sum(&[10, 20, 30]), 60);
/// ```
#[must_use]
pub fn sum(values: &[i64]) -> i64 {
    values
        .iter()
        .fold(0_i64, |total, value| total.saturating_add(*value))
}

/// Summary statistics for an integer sequence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NumberStats {
    /// Saturating sum of all values.
    pub total: i64,
    /// Arithmetic mean, or `0.0` for an empty sequence.
    pub mean: f64,
    /// Number of values summarised.
    pub count: usize,
}

/// Summarise a sequence as its total, mean, and count.
///
/// An empty sequence yields zeroes rather than a division by zero.
///
/// # Examples
///
/// ```
/// use presentation_utils::calculate_stats;
///
/// let stats = calculate_stats(&[10, 20, 30, 40, 50]);
/// assert_eq!(stats.total, 150);
/// assert_eq!(stats.count, 5);
/// assert!((stats.mean - 30.0).abs() < f64::EPSILON);
/// ```
#[must_use]
#[expect(
    clippy::cast_precision_loss,
    clippy::float_arithmetic,
    reason = "the mean is a display value and tolerates f64 rounding"
)]
pub fn calculate_stats(values: &[i64]) -> NumberStats {
    if values.is_empty() {
        return NumberStats {
            total: 0,
            mean: 0.0,
            count: 0,
        };
    }

    let total = sum(values);
    let count = values.len();
    NumberStats {
        total,
        mean: total as f64 / count as f64,
        count,
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for the numeric helpers.

    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[test]
    fn doubles_the_sample_sequence() {
        assert_eq!(doubled(&SAMPLE_NUMBERS), vec![2, 4, 6, 8, 10]);
    }

    #[test]
    fn sums_the_sample_sequence() {
        assert_eq!(sum(&SAMPLE_NUMBERS), 15);
    }

    #[test]
    fn helpers_are_repeatable() {
        let first = (doubled(&SAMPLE_NUMBERS), sum(&SAMPLE_NUMBERS));
        let second = (doubled(&SAMPLE_NUMBERS), sum(&SAMPLE_NUMBERS));
        assert_eq!(first, second);
        assert_eq!(SAMPLE_NUMBERS, [1, 2, 3, 4, 5], "input must not be mutated");
    }

    #[rstest]
    #[case::max(&[i64::MAX], vec![i64::MAX])]
    #[case::min(&[i64::MIN], vec![i64::MIN])]
    fn doubling_saturates_at_bounds(#[case] input: &[i64], #[case] expected: Vec<i64>) {
        assert_eq!(doubled(input), expected);
    }

    #[test]
    fn summing_saturates_at_bounds() {
        assert_eq!(sum(&[i64::MAX, 1]), i64::MAX);
        assert_eq!(sum(&[i64::MIN, -1]), i64::MIN);
    }

    #[test]
    fn empty_sequence_has_zeroed_stats() {
        let stats = calculate_stats(&[]);
        assert_eq!(stats.total, 0);
        assert_eq!(stats.count, 0);
        assert!(stats.mean.abs() < f64::EPSILON);
    }

    #[test]
    #[expect(clippy::float_arithmetic, reason = "tolerance check on the mean")]
    fn stats_report_total_mean_and_count() {
        let stats = calculate_stats(&[10, 20, 30, 40, 50]);
        assert_eq!(stats.total, 150);
        assert_eq!(stats.count, 5);
        assert!((stats.mean - 30.0).abs() < f64::EPSILON);
    }

    #[test]
    #[expect(clippy::expect_used, reason = "serialising plain fields cannot fail")]
    fn stats_serialise_as_named_fields() {
        let value =
            serde_json::to_value(calculate_stats(&SAMPLE_NUMBERS)).expect("serialise stats");
        assert_eq!(value, json!({ "total": 15, "mean": 3.0, "count": 5 }));
    }
}
