use thiserror::Error;

use crate::math::variable::Variable;

#[derive(Debug, Clone, Eq, PartialEq, Error)]
#[non_exhaustive]
pub enum PolynomialError {
    /// A polynomial with a zero leading coefficient has a spurious trailing
    /// zero in its coefficient sequence. The raw constructor refuses to build
    /// such a value instead of silently trimming it.
    #[error("leading coefficient of a non-empty coefficient sequence must not be zero")]
    InvalidLeadingCoefficient,

    /// Polynomials in different indeterminates can only be combined if at
    /// least one of them is constant.
    #[error("variable mismatch: `{lhs}` and `{rhs}` differ and neither operand is constant")]
    VariableMismatch { lhs: Variable, rhs: Variable },

    #[error("immutable polynomials cannot be mutated; construct a new value instead")]
    ImmutableMutationRejected,
}
