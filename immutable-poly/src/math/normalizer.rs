//! Trailing-zero bookkeeping for coefficient sequences.
//!
//! A coefficient sequence is _normalized_ if it is empty or its last element is
//! not zero. The empty sequence is the canonical zero polynomial.

use log::debug;
use log::trace;
use num_traits::Zero;

use crate::error::PolynomialError;

/// The index of the last non-zero coefficient, or `None` if all coefficients
/// are zero.
pub(crate) fn last_non_zero_index<T: Zero>(coefficients: &[T]) -> Option<usize> {
    coefficients.iter().rposition(|c| !c.is_zero())
}

/// The coefficients up to and including the last non-zero one.
pub(crate) fn trimmed<T: Zero>(coefficients: &[T]) -> &[T] {
    let len = last_non_zero_index(coefficients).map_or(0, |i| i + 1);
    &coefficients[..len]
}

/// Drop all trailing zeros.
pub(crate) fn normalize<T: Zero>(mut coefficients: Vec<T>) -> Vec<T> {
    let original_len = coefficients.len();
    while coefficients.last().is_some_and(Zero::is_zero) {
        coefficients.pop();
    }

    if coefficients.len() != original_len {
        trace!(
            "renormalized coefficient sequence from length {original_len} to {}",
            coefficients.len()
        );
    }
    coefficients
}

/// Check that `coefficients` is normalized without changing it.
pub(crate) fn validate<T: Zero>(coefficients: &[T]) -> Result<(), PolynomialError> {
    if coefficients.last().is_some_and(Zero::is_zero) {
        debug!(
            "rejecting coefficient sequence of length {} with zero leading coefficient",
            coefficients.len()
        );
        return Err(PolynomialError::InvalidLeadingCoefficient);
    }

    Ok(())
}

#[cfg(test)]
mod test_normalizer {
    use proptest::collection::vec;
    use proptest::prelude::*;
    use test_strategy::proptest;

    use super::*;

    #[test]
    fn normalizing_drops_trailing_zeros_only() {
        assert_eq!(vec![1, 2], normalize(vec![1, 2, 0]));
        assert_eq!(vec![1, 0, 3, 4], normalize(vec![1, 0, 3, 4]));
        assert_eq!(vec![0, 0, 1], normalize(vec![0, 0, 1, 0, 0]));
    }

    #[test]
    fn all_zero_sequences_normalize_to_empty() {
        assert!(normalize(vec![0_i64; 5]).is_empty());
        assert!(normalize(Vec::<f64>::new()).is_empty());
        assert!(normalize(vec![0.0, -0.0]).is_empty());
    }

    #[test]
    fn last_non_zero_index_of_zeros_is_none() {
        assert_eq!(None, last_non_zero_index(&[0, 0, 0]));
        assert_eq!(None, last_non_zero_index::<i32>(&[]));
        assert_eq!(Some(2), last_non_zero_index(&[0, 0, 1, 0]));
    }

    #[test]
    fn validation_rejects_zero_leading_coefficient() {
        assert_eq!(
            Err(PolynomialError::InvalidLeadingCoefficient),
            validate(&[1, 2, 0])
        );
        assert_eq!(Err(PolynomialError::InvalidLeadingCoefficient), validate(&[0]));
        assert_eq!(Ok(()), validate::<i64>(&[]));
        assert_eq!(Ok(()), validate(&[0, 0, 7]));
    }

    #[proptest]
    fn normalized_sequences_are_valid(#[strategy(vec(-3_i64..=3, 0..20))] coefficients: Vec<i64>) {
        let normalized = normalize(coefficients.clone());
        prop_assert!(validate(&normalized).is_ok());
        prop_assert_eq!(trimmed(&coefficients), normalized.as_slice());
    }

    #[proptest]
    fn normalizing_is_idempotent(#[strategy(vec(-3_i64..=3, 0..20))] coefficients: Vec<i64>) {
        let once = normalize(coefficients);
        let twice = normalize(once.clone());
        prop_assert_eq!(once, twice);
    }
}
