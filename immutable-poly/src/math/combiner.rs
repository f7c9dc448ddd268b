use itertools::EitherOrBoth;
use itertools::Itertools;

use crate::math::traits::Scalar;

/// Elementwise sum of two coefficient sequences, the shorter one padded with
/// zeros. The result has the length of the longer sequence and is never
/// trimmed: if both inputs have the same length and their leading coefficients
/// cancel, the sum ends in a zero.
pub(crate) fn padded_sum<T: Scalar>(lhs: &[T], rhs: &[T]) -> Vec<T> {
    lhs.iter()
        .zip_longest(rhs)
        .map(|pair| match pair {
            EitherOrBoth::Both(&l, &r) => l + r,
            EitherOrBoth::Left(&l) => l,
            EitherOrBoth::Right(&r) => r,
        })
        .collect()
}
