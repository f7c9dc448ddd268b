//! Promotion of two scalar types to a common type for binary operations.
//!
//! Floats always win over integers, and wider types win over narrower ones.
//! Combining a polynomial over `i64` with one over `f64` thus results in a
//! polynomial over `f64`.

use num_traits::AsPrimitive;

use crate::math::traits::Scalar;

/// The common type of `Self` and `Rhs`, and how to get there from either side.
pub trait Promote<Rhs: Scalar>: Scalar {
    type Output: Scalar;

    fn promote(self) -> <Self as Promote<Rhs>>::Output;

    fn promote_rhs(rhs: Rhs) -> <Self as Promote<Rhs>>::Output;
}

impl<T: Scalar> Promote<T> for T {
    type Output = T;

    fn promote(self) -> T {
        self
    }

    fn promote_rhs(rhs: T) -> T {
        rhs
    }
}

macro_rules! impl_promote {
    ($($lhs:ty, $rhs:ty => $output:ty;)*) => {$(
        impl Promote<$rhs> for $lhs {
            type Output = $output;

            fn promote(self) -> $output {
                AsPrimitive::<$output>::as_(self)
            }

            fn promote_rhs(rhs: $rhs) -> $output {
                AsPrimitive::<$output>::as_(rhs)
            }
        }
    )*};
}

impl_promote! {
    i32, i64 => i64;
    i64, i32 => i64;
    i32, f32 => f32;
    f32, i32 => f32;
    i64, f32 => f32;
    f32, i64 => f32;
    i32, f64 => f64;
    f64, i32 => f64;
    i64, f64 => f64;
    f64, i64 => f64;
    f32, f64 => f64;
    f64, f32 => f64;
}

#[cfg(test)]
mod test_promotion {
    use super::*;

    #[test]
    fn promoting_to_own_type_is_identity() {
        assert_eq!(7_i64, <i64 as Promote<i64>>::promote(7));
        assert_eq!(7_i64, <i64 as Promote<i64>>::promote_rhs(7));
    }

    #[test]
    fn floats_win_over_integers() {
        let lhs: f64 = <i64 as Promote<f64>>::promote(3);
        let rhs: f64 = <i64 as Promote<f64>>::promote_rhs(0.5);
        assert_eq!(3.5, lhs + rhs);

        let lhs: f64 = <f64 as Promote<i32>>::promote(0.25);
        let rhs: f64 = <f64 as Promote<i32>>::promote_rhs(2);
        assert_eq!(2.25, lhs + rhs);
    }

    #[test]
    fn wider_integers_win() {
        let promoted: i64 = <i32 as Promote<i64>>::promote(i32::MAX);
        assert_eq!(i64::from(i32::MAX), promoted);
    }
}
