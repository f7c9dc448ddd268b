use num_traits::Float;
use num_traits::NumCast;
use num_traits::One;
use num_traits::Zero;

use crate::math::traits::Scalar;

/// Which norm of the coefficient vector to compute.
///
/// Converting from an `f64` recognizes `0`, `1`, `2`, and `+∞`; every other
/// value becomes a general [`Lp`](Self::Lp) norm.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub enum NormDegree {
    /// The number of non-zero coefficients.
    L0,

    /// The sum of the coefficients' magnitudes.
    L1,

    /// The Euclidean norm.
    #[default]
    L2,

    /// The largest magnitude of any coefficient.
    LInfinity,

    /// `(Σ|cᵢ|ᵖ)^(1/p)`
    Lp(f64),
}

impl From<f64> for NormDegree {
    fn from(p: f64) -> Self {
        if p == 0.0 {
            Self::L0
        } else if p == 1.0 {
            Self::L1
        } else if p == 2.0 {
            Self::L2
        } else if p == f64::INFINITY {
            Self::LInfinity
        } else {
            Self::Lp(p)
        }
    }
}

impl From<u32> for NormDegree {
    fn from(p: u32) -> Self {
        Self::from(<f64 as From<u32>>::from(p))
    }
}

/// The norm of a coefficient sequence. The empty sequence has norm zero under
/// every degree.
pub(crate) fn norm<T: Scalar>(coefficients: &[T], degree: NormDegree) -> T::Real {
    let magnitudes = coefficients.iter().map(|&c| c.magnitude());
    let zero = T::Real::zero();

    match degree {
        NormDegree::L0 => magnitudes
            .filter(|m| !m.is_zero())
            .fold(zero, |count, _| count + T::Real::one()),
        NormDegree::L1 => magnitudes.fold(zero, |sum, m| sum + m),
        NormDegree::L2 => magnitudes.fold(zero, |sum, m| sum + m * m).sqrt(),
        NormDegree::LInfinity => magnitudes.fold(zero, Float::max),
        NormDegree::Lp(p) => match <T::Real as NumCast>::from(p) {
            Some(p) if p.is_finite() => magnitudes
                .fold(zero, |sum, m| sum + m.powf(p))
                .powf(p.recip()),
            _ => magnitudes.fold(zero, Float::max),
        },
    }
}
