use std::fmt::Debug;
use std::ops::Add;
use std::ops::Div;
use std::ops::Mul;
use std::ops::Neg;
use std::ops::Sub;

use num_traits::Float;
use num_traits::MulAdd;
use num_traits::One;
use num_traits::Zero;

use crate::math::variable::Variable;

/// A number that can be a polynomial coefficient.
///
/// Implemented for the signed primitive integers `i32` and `i64` and for the
/// floating point types `f32` and `f64`.
pub trait Scalar:
    Copy
    + Debug
    + PartialEq
    + Zero
    + One
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + MulAdd<Output = Self>
    + From<i16>
    + Send
    + Sync
    + 'static
{
    /// The type magnitudes, norms, and tolerances are measured in.
    type Real: Float + Debug + Send + Sync + 'static;

    /// The absolute value, `|self|`.
    fn magnitude(self) -> Self::Real;

    /// The relative tolerance used by approximate comparisons unless a
    /// tolerance is given explicitly: `√ε` for floating point types, zero for
    /// integers.
    fn default_relative_tolerance() -> Self::Real;
}

macro_rules! impl_scalar_for_float {
    ($($float:ty),*) => {$(
        impl Scalar for $float {
            type Real = $float;

            fn magnitude(self) -> Self::Real {
                self.abs()
            }

            fn default_relative_tolerance() -> Self::Real {
                <$float>::EPSILON.sqrt()
            }
        }
    )*};
}

macro_rules! impl_scalar_for_int {
    ($($int:ty),*) => {$(
        impl Scalar for $int {
            type Real = f64;

            fn magnitude(self) -> Self::Real {
                (self as f64).abs()
            }

            fn default_relative_tolerance() -> Self::Real {
                0.0
            }
        }
    )*};
}

impl_scalar_for_float!(f32, f64);
impl_scalar_for_int!(i32, i64);

/// The read-side interface of a univariate polynomial in coefficient form.
///
/// Display layers and other collaborators only need this view; arithmetic
/// lives on the concrete types.
pub trait Polynomial {
    type Coefficient: Scalar;

    /// The coefficients in order of increasing degree. That is, the leading
    /// coefficient is the last element.
    fn coefficients(&self) -> &[Self::Coefficient];

    fn variable(&self) -> &Variable;

    /// The number of stored coefficients.
    fn len(&self) -> usize {
        self.coefficients().len()
    }

    /// `true` if no coefficients are stored, _i.e._, for the canonical zero
    /// polynomial.
    fn is_empty(&self) -> bool {
        self.coefficients().is_empty()
    }

    /// The number of stored coefficients minus one; -1 for the zero polynomial.
    fn degree(&self) -> isize {
        self.len() as isize - 1
    }

    /// The coefficient of `x^index`. Total: any index outside the stored
    /// range, including negative ones, gives zero.
    fn coefficient(&self, index: isize) -> Self::Coefficient {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.coefficients().get(i).copied())
            .unwrap_or_else(Self::Coefficient::zero)
    }

    /// Polynomials of length at most one. These can be combined with
    /// polynomials in any variable.
    fn is_constant(&self) -> bool {
        self.len() <= 1
    }

    /// The last stored coefficient. `None` for the zero polynomial.
    fn leading_coefficient(&self) -> Option<Self::Coefficient> {
        self.coefficients().last().copied()
    }

    fn constant_term(&self) -> Self::Coefficient {
        self.coefficient(0)
    }
}
