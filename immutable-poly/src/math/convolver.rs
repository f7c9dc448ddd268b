use log::trace;

use crate::math::normalizer;
use crate::math::traits::Scalar;

/// The discrete convolution `out[k] = Σ_{i+j=k} lhs[i]·rhs[j]` of two non-empty
/// coefficient sequences, accumulated with fused multiply-add.
///
/// The result has length `lhs.len() + rhs.len() - 1`. It is empty if either
/// input is empty.
pub(crate) fn convolve<T: Scalar>(lhs: &[T], rhs: &[T]) -> Vec<T> {
    if lhs.is_empty() || rhs.is_empty() {
        return vec![];
    }

    let product_len = lhs.len() + rhs.len() - 1;
    let mut product = Vec::with_capacity(product_len);
    for k in 0..product_len {
        let lowest = k.saturating_sub(rhs.len() - 1);
        let highest = k.min(lhs.len() - 1);
        let mut acc = T::zero();
        for i in lowest..=highest {
            acc = lhs[i].mul_add(rhs[k - i], acc);
        }
        product.push(acc);
    }

    product
}

/// The [convolution](convolve), renormalized if the leading terms cancel.
pub(crate) fn product<T: Scalar>(lhs: &[T], rhs: &[T]) -> Vec<T> {
    let product = convolve(lhs, rhs);
    if product.last().is_some_and(|c| c.is_zero()) {
        trace!(
            "leading terms of product of lengths {} and {} cancel",
            lhs.len(),
            rhs.len()
        );
        return normalizer::normalize(product);
    }

    product
}
