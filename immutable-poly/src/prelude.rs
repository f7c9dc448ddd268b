pub use crate::error::PolynomialError;
pub use crate::math::norm::NormDegree;
pub use crate::math::polynomial::ImmutablePolynomial;
pub use crate::math::promotion::Promote;
pub use crate::math::traits::Polynomial;
pub use crate::math::traits::Scalar;
pub use crate::math::variable::Variable;
