//! Immutable univariate polynomials.
//!
//! A polynomial is an ordered, immutable sequence of coefficients, lowest
//! degree first, together with the name of its indeterminate. Constructors
//! normalize their input such that the leading coefficient is never zero, and
//! every arithmetic operation picks the length of its result from the lengths
//! of its operands. See [`ImmutablePolynomial`][poly] for the details.
//!
//! [poly]: crate::math::polynomial::ImmutablePolynomial

pub mod config;
pub mod error;
pub mod math;
pub mod prelude;
