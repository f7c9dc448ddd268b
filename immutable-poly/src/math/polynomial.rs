use std::fmt::Debug;
use std::fmt::Formatter;
use std::hash::Hash;
use std::hash::Hasher;
use std::ops::Add;
use std::ops::Div;
use std::ops::Index;
use std::ops::Mul;
use std::ops::Neg;
use std::ops::Sub;

use arbitrary::Arbitrary;
use arbitrary::Unstructured;
use log::debug;
use log::trace;
use num_traits::Float;
use num_traits::MulAdd;
use num_traits::NumCast;
use num_traits::One;
use num_traits::Zero;
use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::Serializer;
use serde::ser::SerializeStruct;

use crate::config;
use crate::error::PolynomialError;
use crate::math::combiner;
use crate::math::convolver;
use crate::math::norm;
use crate::math::norm::NormDegree;
use crate::math::normalizer;
use crate::math::promotion::Promote;
use crate::math::traits::Polynomial;
use crate::math::traits::Scalar;
use crate::math::variable::Variable;

/// A univariate polynomial in monomial form whose coefficients can never change.
///
/// Every constructor except [`try_from_raw`](Self::try_from_raw) removes
/// trailing zero coefficients, such that the leading coefficient of a
/// non-empty polynomial is not zero and the zero polynomial has no
/// coefficients at all. Every operation returns a new value.
///
/// The number of coefficients is fixed at construction. Which number an
/// operation produces depends on its operands' lengths:
///
/// | operation                 | result length                                |
/// |:--------------------------|:---------------------------------------------|
/// | `p + q`, same length `N`  | `N`, even if the leading terms cancel        |
/// | `p + q`, lengths `N ≠ M`  | `max(N, M)`                                  |
/// | `p * q`                   | `N + M - 1`, trimmed if leading terms cancel |
/// | `p * c`, `p / c`          | `N`, trimmed if the leading term vanishes    |
/// | `-p`                      | `N`                                          |
#[derive(Clone)]
pub struct ImmutablePolynomial<T: Scalar> {
    /// The polynomial's coefficients, in order of increasing degree.
    coefficients: Box<[T]>,

    variable: Variable,

    /// Backs [`Index`] for positions outside the stored coefficients.
    zero: T,
}

impl<T: Scalar> Polynomial for ImmutablePolynomial<T> {
    type Coefficient = T;

    fn coefficients(&self) -> &[T] {
        &self.coefficients
    }

    fn variable(&self) -> &Variable {
        &self.variable
    }
}

impl<T: Scalar> Debug for ImmutablePolynomial<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImmutablePolynomial")
            .field("variable", &self.variable.name())
            .field("coefficients", &self.coefficients)
            .finish()
    }
}

// Manually implemented to correctly handle spurious leading zeros, which can
// result from adding polynomials of equal length.
impl<T: Scalar> PartialEq for ImmutablePolynomial<T> {
    fn eq(&self, other: &Self) -> bool {
        if self.variable != other.variable {
            return false;
        }
        if self.coefficients == other.coefficients {
            return true;
        }

        normalizer::trimmed(&self.coefficients) == normalizer::trimmed(&other.coefficients)
    }
}

impl<T: Scalar + Eq> Eq for ImmutablePolynomial<T> {}

// Not derived because `PartialEq` is also not derived.
impl<T: Scalar + Hash> Hash for ImmutablePolynomial<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.variable.hash(state);
        normalizer::trimmed(&self.coefficients).hash(state);
    }
}

impl<T: Scalar> Index<isize> for ImmutablePolynomial<T> {
    type Output = T;

    /// The coefficient of `x^index`, zero for any index outside the stored
    /// coefficients.
    fn index(&self, index: isize) -> &T {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.coefficients.get(i))
            .unwrap_or(&self.zero)
    }
}

impl<T: Scalar> Zero for ImmutablePolynomial<T> {
    fn zero() -> Self {
        Self::new(vec![])
    }

    fn is_zero(&self) -> bool {
        self.coefficients.iter().all(Zero::is_zero)
    }
}

impl<T: Scalar> One for ImmutablePolynomial<T> {
    fn one() -> Self {
        Self::from_constant(T::one())
    }
}

impl<T: Scalar> ImmutablePolynomial<T> {
    /// Longest coefficient sequence produced by the [`Arbitrary`] impl.
    const MAX_ARBITRARY_LEN: usize = 16;

    /// Construct a polynomial in the [default variable](Variable::default),
    /// dropping trailing zeros.
    ///
    /// # Examples
    ///
    /// ```
    /// # use immutable_poly::prelude::*;
    /// let p = ImmutablePolynomial::new(vec![1_i64, 2, 0]);
    /// assert_eq!(&[1, 2], p.coefficients());
    /// assert_eq!(1, p.degree());
    /// ```
    pub fn new(coefficients: Vec<T>) -> Self {
        Self::with_variable(coefficients, Variable::default())
    }

    /// Construct a polynomial in the given variable, dropping trailing zeros.
    pub fn with_variable(coefficients: Vec<T>, variable: impl Into<Variable>) -> Self {
        Self::from_parts(normalizer::normalize(coefficients), variable.into())
    }

    /// Construct a polynomial from coefficients that are known to be
    /// normalized.
    ///
    /// # Errors
    ///
    /// Fails with [`PolynomialError::InvalidLeadingCoefficient`] if the
    /// coefficients are not empty and the last one is zero. Never trims.
    pub fn try_from_raw(
        coefficients: Vec<T>,
        variable: impl Into<Variable>,
    ) -> Result<Self, PolynomialError> {
        normalizer::validate(&coefficients)?;
        Ok(Self::from_parts(coefficients, variable.into()))
    }

    /// The constant polynomial `constant`. The zero polynomial if `constant`
    /// is zero.
    pub fn from_constant(constant: T) -> Self {
        Self::new(vec![constant])
    }

    /// The polynomial `x` in the [default variable](Variable::default).
    pub fn x() -> Self {
        Self::variable_polynomial(Variable::default())
    }

    /// The polynomial of degree 1 with leading coefficient 1 and no constant
    /// term in the given variable.
    pub fn variable_polynomial(variable: impl Into<Variable>) -> Self {
        Self::from_parts(vec![T::zero(), T::one()], variable.into())
    }

    fn from_parts(coefficients: Vec<T>, variable: Variable) -> Self {
        Self {
            coefficients: coefficients.into_boxed_slice(),
            variable,
            zero: T::zero(),
        }
    }

    /// Writing coefficients is not supported.
    ///
    /// # Errors
    ///
    /// Always fails with [`PolynomialError::ImmutableMutationRejected`].
    pub fn set_coefficient(&mut self, index: isize, _value: T) -> Result<(), PolynomialError> {
        debug!("rejecting write to coefficient {index} of an immutable polynomial");
        Err(PolynomialError::ImmutableMutationRejected)
    }

    /// Evaluate the polynomial in `x` using Horner's method with fused
    /// multiply-add. The result lives in the common type of the coefficients
    /// and `x`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use immutable_poly::prelude::*;
    /// let p = ImmutablePolynomial::new(vec![1_i64, 0, 3, 4]);
    /// assert_eq!(45, p.evaluate(2_i64));
    /// assert_eq!(2.25, p.evaluate(0.5_f64));
    /// ```
    pub fn evaluate<X: Scalar>(&self, x: X) -> <T as Promote<X>>::Output
    where
        T: Promote<X>,
    {
        let x = <T as Promote<X>>::promote_rhs(x);
        let mut coefficients = self
            .coefficients
            .iter()
            .rev()
            .map(|&c| <T as Promote<X>>::promote(c));

        let Some(mut acc) = coefficients.next() else {
            return Zero::zero();
        };
        for c in coefficients {
            acc = acc.mul_add(x, c);
        }

        acc
    }

    /// The same polynomial over the common type of `T` and `U`. The length is
    /// unchanged.
    pub fn promote<U: Scalar>(&self) -> ImmutablePolynomial<<T as Promote<U>>::Output>
    where
        T: Promote<U>,
    {
        let coefficients = self
            .coefficients
            .iter()
            .map(|&c| <T as Promote<U>>::promote(c))
            .collect();

        ImmutablePolynomial::from_parts(coefficients, self.variable.clone())
    }

    fn promote_operand<U: Scalar>(
        operand: &ImmutablePolynomial<U>,
    ) -> ImmutablePolynomial<<T as Promote<U>>::Output>
    where
        T: Promote<U>,
    {
        let coefficients = operand
            .coefficients
            .iter()
            .map(|&c| <T as Promote<U>>::promote_rhs(c))
            .collect();

        ImmutablePolynomial::from_parts(coefficients, operand.variable.clone())
    }

    /// Apply `f` to every coefficient and normalize the result.
    pub fn map_coefficients<U, F>(&self, f: F) -> ImmutablePolynomial<U>
    where
        U: Scalar,
        F: FnMut(T) -> U,
    {
        let coefficients = self.coefficients.iter().copied().map(f).collect();
        ImmutablePolynomial::with_variable(coefficients, self.variable.clone())
    }

    /// Add two polynomials.
    ///
    /// If both polynomials have the same length, the sum has that length too,
    /// even if the leading coefficients cancel. Such a sum is not normalized,
    /// but still [compares equal](PartialEq) to its normalized counterpart.
    ///
    /// # Errors
    ///
    /// Fails with [`PolynomialError::VariableMismatch`] if the variables differ
    /// and neither operand is constant.
    ///
    /// # Examples
    ///
    /// ```
    /// # use immutable_poly::prelude::*;
    /// let p = ImmutablePolynomial::new(vec![1_i64, 2, 3]);
    /// let q = ImmutablePolynomial::new(vec![1_i64, 2, -3]);
    /// let sum = p.try_add(&q).unwrap();
    /// assert_eq!(&[2, 4, 0], sum.coefficients());
    /// assert_eq!(ImmutablePolynomial::new(vec![2, 4]), sum);
    /// ```
    pub fn try_add<U: Scalar>(
        &self,
        other: &ImmutablePolynomial<U>,
    ) -> Result<ImmutablePolynomial<<T as Promote<U>>::Output>, PolynomialError>
    where
        T: Promote<U>,
    {
        self.promote::<U>().sum(&Self::promote_operand(other))
    }

    /// Subtract `other` from `self`, _i.e._, add the negation of `other`.
    ///
    /// # Errors
    ///
    /// See [`try_add`](Self::try_add).
    pub fn try_sub<U: Scalar>(
        &self,
        other: &ImmutablePolynomial<U>,
    ) -> Result<ImmutablePolynomial<<T as Promote<U>>::Output>, PolynomialError>
    where
        T: Promote<U>,
    {
        self.try_add(&other.negate())
    }

    /// Multiply two polynomials. If either operand is constant, this is a
    /// [scalar multiplication](Self::scalar_mul) with that constant.
    ///
    /// # Errors
    ///
    /// Fails with [`PolynomialError::VariableMismatch`] if the variables differ
    /// and neither operand is constant.
    pub fn try_mul<U: Scalar>(
        &self,
        other: &ImmutablePolynomial<U>,
    ) -> Result<ImmutablePolynomial<<T as Promote<U>>::Output>, PolynomialError>
    where
        T: Promote<U>,
    {
        self.promote::<U>().product(&Self::promote_operand(other))
    }

    /// Negate every coefficient. The length is unchanged.
    #[must_use]
    pub fn negate(&self) -> Self {
        let coefficients = self.coefficients.iter().map(|&c| -c).collect();
        Self::from_parts(coefficients, self.variable.clone())
    }

    /// Compute `self(x) + scalar`.
    pub fn scalar_add<S: Scalar>(&self, scalar: S) -> ImmutablePolynomial<<T as Promote<S>>::Output>
    where
        T: Promote<S>,
    {
        let scalar = <T as Promote<S>>::promote_rhs(scalar);
        self.promote::<S>().add_constant(scalar)
    }

    /// Compute `self(x) - scalar`.
    pub fn scalar_sub<S: Scalar>(&self, scalar: S) -> ImmutablePolynomial<<T as Promote<S>>::Output>
    where
        T: Promote<S>,
    {
        let scalar = <T as Promote<S>>::promote_rhs(scalar);
        self.promote::<S>().add_constant(-scalar)
    }

    /// Compute `scalar · self(x)`.
    ///
    /// # Panics
    ///
    /// Panics if the common type is an integer type and a product overflows,
    /// given that overflow checks are enabled.
    pub fn scalar_mul<S: Scalar>(&self, scalar: S) -> ImmutablePolynomial<<T as Promote<S>>::Output>
    where
        T: Promote<S>,
    {
        let scalar = <T as Promote<S>>::promote_rhs(scalar);
        self.promote::<S>().mul_constant(scalar)
    }

    /// Compute `self(x) / scalar`, coefficient by coefficient.
    ///
    /// # Panics
    ///
    /// Panics if the common type is an integer type and `scalar` is zero.
    pub fn scalar_div<S: Scalar>(&self, scalar: S) -> ImmutablePolynomial<<T as Promote<S>>::Output>
    where
        T: Promote<S>,
    {
        let scalar = <T as Promote<S>>::promote_rhs(scalar);
        self.promote::<S>().div_constant(scalar)
    }

    /// Raise the polynomial to the given power by repeated squaring.
    /// `p^0` is one, even for the zero polynomial.
    #[must_use]
    pub fn pow(&self, exponent: u32) -> Self {
        let mut acc = Self::from_parts(vec![T::one()], self.variable.clone());
        let mut base = self.clone();
        let mut exponent = exponent;
        while exponent > 0 {
            if exponent & 1 == 1 {
                acc = acc.product_unchecked(&base);
            }
            exponent >>= 1;
            if exponent > 0 {
                base = base.product_unchecked(&base);
            }
        }

        acc
    }

    /// The L2 norm of the coefficient vector.
    pub fn norm(&self) -> T::Real {
        self.norm_with(NormDegree::L2)
    }

    /// The norm of the coefficient vector of the given degree.
    ///
    /// # Examples
    ///
    /// ```
    /// # use immutable_poly::prelude::*;
    /// let p = ImmutablePolynomial::new(vec![3_i64, 4]);
    /// assert_eq!(5.0, p.norm());
    /// assert_eq!(7.0, p.norm_with(1));
    /// assert_eq!(4.0, p.norm_with(f64::INFINITY));
    /// assert_eq!(2.0, p.norm_with(NormDegree::L0));
    /// ```
    pub fn norm_with(&self, degree: impl Into<NormDegree>) -> T::Real {
        norm::norm(&self.coefficients, degree.into())
    }

    /// Drop trailing coefficients that are approximately zero, that is,
    /// coefficients `c` with `|c| ≤ atol + rtol·|c|`. Infinite coefficients are
    /// never approximately zero.
    #[must_use]
    pub fn chop(&self, rtol: T::Real, atol: T::Real) -> Self {
        let is_approximately_zero = |c: T| {
            let magnitude = c.magnitude();
            c.is_zero() || (magnitude.is_finite() && magnitude <= atol + rtol * magnitude)
        };

        let len = self
            .coefficients
            .iter()
            .rposition(|&c| !is_approximately_zero(c))
            .map_or(0, |i| i + 1);

        Self::from_parts(self.coefficients[..len].to_vec(), self.variable.clone())
    }

    /// [Chop](Self::chop), then set every coefficient whose magnitude is at
    /// most `max|cᵢ|·rtol + atol` to zero.
    #[must_use]
    pub fn truncate(&self, rtol: T::Real, atol: T::Real) -> Self {
        let chopped = self.chop(rtol, atol);
        let threshold = chopped.norm_with(NormDegree::LInfinity) * rtol + atol;
        let coefficients = chopped
            .coefficients
            .iter()
            .map(|&c| {
                let magnitude = c.magnitude();
                if magnitude.is_finite() && magnitude <= threshold {
                    T::zero()
                } else {
                    c
                }
            })
            .collect();

        Self::with_variable(coefficients, chopped.variable)
    }

    /// [Chop](Self::chop) using the type's default relative tolerance and the
    /// [configured](config::set_default_absolute_tolerance) absolute tolerance.
    #[must_use]
    pub fn chop_default(&self) -> Self {
        self.chop(T::default_relative_tolerance(), Self::default_absolute_tolerance())
    }

    /// [Truncate](Self::truncate) using the type's default relative tolerance
    /// and the [configured](config::set_default_absolute_tolerance) absolute
    /// tolerance.
    #[must_use]
    pub fn truncate_default(&self) -> Self {
        self.truncate(T::default_relative_tolerance(), Self::default_absolute_tolerance())
    }

    fn default_absolute_tolerance() -> T::Real {
        <T::Real as NumCast>::from(config::default_absolute_tolerance())
            .unwrap_or_else(T::Real::zero)
    }

    /// Whether `‖self - other‖ ≤ max(atol, rtol·max(‖self‖, ‖other‖))` in the L2
    /// norm. Polynomials in different variables are never close unless one of
    /// them is constant.
    pub fn is_approx(&self, other: &Self, rtol: T::Real, atol: T::Real) -> bool {
        let shares_variable =
            self.variable == other.variable || self.is_constant() || other.is_constant();
        if !shares_variable {
            return false;
        }

        let negated_other = other.coefficients.iter().map(|&c| -c).collect::<Vec<_>>();
        let difference = combiner::padded_sum(&self.coefficients, &negated_other);
        let distance = norm::norm(&difference, NormDegree::L2);

        distance <= atol.max(rtol * self.norm().max(other.norm()))
    }

    /// The variable of the result of combining `self` with `other`. A constant
    /// operand adopts the other operand's variable.
    fn reconcile_variables(&self, other: &Self) -> Result<Variable, PolynomialError> {
        if self.variable == other.variable {
            return Ok(self.variable.clone());
        }
        if other.is_constant() {
            trace!("constant operand adopts variable `{}`", self.variable);
            return Ok(self.variable.clone());
        }
        if self.is_constant() {
            trace!("constant operand adopts variable `{}`", other.variable);
            return Ok(other.variable.clone());
        }

        debug!(
            "cannot combine non-constant polynomials in `{}` and `{}`",
            self.variable, other.variable
        );
        Err(PolynomialError::VariableMismatch {
            lhs: self.variable.clone(),
            rhs: other.variable.clone(),
        })
    }

    fn sum(&self, other: &Self) -> Result<Self, PolynomialError> {
        if other.is_empty() {
            return Ok(self.clone());
        }
        if self.is_empty() {
            return Ok(other.clone());
        }

        let variable = self.reconcile_variables(other)?;
        let coefficients = combiner::padded_sum(&self.coefficients, &other.coefficients);
        Ok(Self::from_parts(coefficients, variable))
    }

    fn product(&self, other: &Self) -> Result<Self, PolynomialError> {
        if !self.is_constant() && !other.is_constant() {
            self.reconcile_variables(other)?;
        }

        Ok(self.product_unchecked(other))
    }

    fn product_unchecked(&self, other: &Self) -> Self {
        if other.is_constant() {
            return self.mul_constant(other.constant_term());
        }
        if self.is_constant() {
            return other.mul_constant(self.constant_term());
        }

        let coefficients = convolver::product(&self.coefficients, &other.coefficients);
        Self::from_parts(coefficients, self.variable.clone())
    }

    fn add_constant(&self, constant: T) -> Self {
        if constant.is_zero() {
            return self.clone();
        }

        let variable = self.variable.clone();
        match self.coefficients.len() {
            0 => Self::from_parts(vec![constant], variable),
            1 => Self::with_variable(vec![self.coefficients[0] + constant], variable),
            _ => Self::from_parts(
                combiner::padded_sum(&self.coefficients, &[constant]),
                variable,
            ),
        }
    }

    fn mul_constant(&self, constant: T) -> Self {
        let coefficients = self.coefficients.iter().map(|&c| c * constant).collect();
        Self::with_variable(coefficients, self.variable.clone())
    }

    fn div_constant(&self, constant: T) -> Self {
        let coefficients = self.coefficients.iter().map(|&c| c / constant).collect();
        Self::with_variable(coefficients, self.variable.clone())
    }
}

impl<const N: usize, T, E> From<[E; N]> for ImmutablePolynomial<T>
where
    T: Scalar,
    E: Into<T>,
{
    fn from(coefficients: [E; N]) -> Self {
        Self::new(coefficients.into_iter().map(|c| c.into()).collect())
    }
}

impl<T, E> From<&[E]> for ImmutablePolynomial<T>
where
    T: Scalar,
    E: Into<T> + Clone,
{
    fn from(coefficients: &[E]) -> Self {
        Self::from(coefficients.to_vec())
    }
}

impl<T, E> From<Vec<E>> for ImmutablePolynomial<T>
where
    T: Scalar,
    E: Into<T>,
{
    fn from(coefficients: Vec<E>) -> Self {
        Self::new(coefficients.into_iter().map(|c| c.into()).collect())
    }
}

impl<T: Scalar> FromIterator<T> for ImmutablePolynomial<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a, T: Scalar> Arbitrary<'a> for ImmutablePolynomial<T> {
    /// Coefficients are drawn from the `i16` range such that products of
    /// arbitrary polynomials over `i64` do not overflow and products over
    /// `f64` are exact.
    fn arbitrary(u: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
        let len = u.int_in_range(0..=Self::MAX_ARBITRARY_LEN)?;
        let coefficients = (0..len)
            .map(|_| u.arbitrary::<i16>().map(T::from))
            .collect::<arbitrary::Result<_>>()?;

        Ok(Self::new(coefficients))
    }
}

impl<T: Scalar + Serialize> Serialize for ImmutablePolynomial<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("ImmutablePolynomial", 2)?;
        state.serialize_field("variable", &self.variable)?;
        state.serialize_field("coefficients", &self.coefficients)?;
        state.end()
    }
}

#[derive(Deserialize)]
#[serde(rename = "ImmutablePolynomial")]
struct SerializedPolynomial<T> {
    variable: Variable,
    coefficients: Vec<T>,
}

/// Only normalized coefficient sequences are accepted, such that every
/// polynomial has exactly one encoding.
impl<'de, T: Scalar + Deserialize<'de>> Deserialize<'de> for ImmutablePolynomial<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let SerializedPolynomial {
            variable,
            coefficients,
        } = SerializedPolynomial::deserialize(deserializer)?;

        Self::try_from_raw(coefficients, variable).map_err(serde::de::Error::custom)
    }
}

/// # Panics
///
/// Panics if the variables differ and neither operand is constant. Use
/// [`ImmutablePolynomial::try_add`] to handle that case.
impl<T: Scalar> Add for ImmutablePolynomial<T> {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        self.sum(&other).unwrap_or_else(|e| panic!("{e}"))
    }
}

impl<T: Scalar> Add<&ImmutablePolynomial<T>> for &ImmutablePolynomial<T> {
    type Output = ImmutablePolynomial<T>;

    fn add(self, other: &ImmutablePolynomial<T>) -> Self::Output {
        self.sum(other).unwrap_or_else(|e| panic!("{e}"))
    }
}

/// # Panics
///
/// Panics if the variables differ and neither operand is constant. Use
/// [`ImmutablePolynomial::try_sub`] to handle that case.
impl<T: Scalar> Sub for ImmutablePolynomial<T> {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        self.sum(&other.negate()).unwrap_or_else(|e| panic!("{e}"))
    }
}

impl<T: Scalar> Sub<&ImmutablePolynomial<T>> for &ImmutablePolynomial<T> {
    type Output = ImmutablePolynomial<T>;

    fn sub(self, other: &ImmutablePolynomial<T>) -> Self::Output {
        self.sum(&other.negate()).unwrap_or_else(|e| panic!("{e}"))
    }
}

/// # Panics
///
/// Panics if the variables differ and neither operand is constant. Use
/// [`ImmutablePolynomial::try_mul`] to handle that case.
///
/// Also panics if `T` is an integer type and a coefficient of the product
/// overflows, given that overflow checks are enabled.
impl<T: Scalar> Mul for ImmutablePolynomial<T> {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        self.product(&other).unwrap_or_else(|e| panic!("{e}"))
    }
}

impl<T: Scalar> Mul<&ImmutablePolynomial<T>> for &ImmutablePolynomial<T> {
    type Output = ImmutablePolynomial<T>;

    fn mul(self, other: &ImmutablePolynomial<T>) -> Self::Output {
        self.product(other).unwrap_or_else(|e| panic!("{e}"))
    }
}

impl<T: Scalar> Neg for ImmutablePolynomial<T> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl<T: Scalar> Neg for &ImmutablePolynomial<T> {
    type Output = ImmutablePolynomial<T>;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl<T: Scalar> Add<T> for ImmutablePolynomial<T> {
    type Output = Self;

    fn add(self, scalar: T) -> Self {
        self.add_constant(scalar)
    }
}

impl<T: Scalar> Sub<T> for ImmutablePolynomial<T> {
    type Output = Self;

    fn sub(self, scalar: T) -> Self {
        self.add_constant(-scalar)
    }
}

/// # Panics
///
/// Panics if `T` is an integer type and a product overflows, given that overflow
/// checks are enabled.
impl<T: Scalar> Mul<T> for ImmutablePolynomial<T> {
    type Output = Self;

    fn mul(self, scalar: T) -> Self {
        self.mul_constant(scalar)
    }
}

/// # Panics
///
/// Panics if `T` is an integer type and `scalar` is zero.
impl<T: Scalar> Div<T> for ImmutablePolynomial<T> {
    type Output = Self;

    fn div(self, scalar: T) -> Self {
        self.div_constant(scalar)
    }
}

// It is impossible to
// `impl<T: Scalar> Mul<ImmutablePolynomial<T>> for T`
// because of Rust's orphan rules [E0210]. The primitive scalars are covered
// one by one instead.
macro_rules! impl_scalar_lhs_ops {
    ($($scalar:ty),*) => {$(
        impl Add<ImmutablePolynomial<$scalar>> for $scalar {
            type Output = ImmutablePolynomial<$scalar>;

            fn add(self, polynomial: ImmutablePolynomial<$scalar>) -> Self::Output {
                polynomial.add_constant(self)
            }
        }

        impl Sub<ImmutablePolynomial<$scalar>> for $scalar {
            type Output = ImmutablePolynomial<$scalar>;

            fn sub(self, polynomial: ImmutablePolynomial<$scalar>) -> Self::Output {
                polynomial.negate().add_constant(self)
            }
        }

        impl Mul<ImmutablePolynomial<$scalar>> for $scalar {
            type Output = ImmutablePolynomial<$scalar>;

            fn mul(self, polynomial: ImmutablePolynomial<$scalar>) -> Self::Output {
                polynomial.mul_constant(self)
            }
        }
    )*};
}

impl_scalar_lhs_ops!(i32, i64, f32, f64);
