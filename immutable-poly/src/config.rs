//! This module contains various configuration options. In general, the
//! configuration options only affect the defaults used when the caller does
//! not spell out a value explicitly. The default configuration is sane and
//! should fit most users.
//!
//! All configuration options can also be set via environment variables.
//! Generally, the environment variables take precedence over the options set
//! in this module.

use std::cell::RefCell;

use crate::math::variable::Variable;

thread_local! {
    static CONFIG: RefCell<Config> = RefCell::new(Config::new());
}

#[derive(Debug, Clone, PartialEq)]
struct Config {
    pub default_variable: DefaultVariable,
    pub default_absolute_tolerance: DefaultAbsoluteTolerance,
}

impl Config {
    fn new() -> Self {
        let default_variable = DefaultVariable::new(None);
        let default_absolute_tolerance = DefaultAbsoluteTolerance::new(None);

        Self {
            default_variable,
            default_absolute_tolerance,
        }
    }
}

#[derive(Debug, Clone, Eq, PartialEq, Hash)]
struct DefaultVariable(Variable);

impl DefaultVariable {
    const ENV_VAR: &'static str = "IMMUTABLE_POLY_DEFAULT_VARIABLE";
    const DEFAULT: &'static str = "x";

    /// Creates a new `DefaultVariable` with the given name.
    /// Respects the precedence of the environment variable if set. Uses the
    /// default if no value is provided. Empty names are ignored.
    fn new(config_value: Option<&str>) -> Self {
        let name = std::env::var(Self::ENV_VAR)
            .ok()
            .filter(|s| !s.is_empty())
            .or_else(|| config_value.filter(|s| !s.is_empty()).map(String::from))
            .unwrap_or_else(|| Self::DEFAULT.to_string());

        Self(Variable::new(name))
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
struct DefaultAbsoluteTolerance(f64);

impl DefaultAbsoluteTolerance {
    const ENV_VAR: &'static str = "IMMUTABLE_POLY_DEFAULT_ATOL";
    const DEFAULT: f64 = 0.0;
    const MINIMUM: f64 = 0.0;

    /// Creates a new `DefaultAbsoluteTolerance` with the given value.
    /// Respects the precedence of the environment variable if set. Uses the
    /// default if no value is provided. Non-finite values are ignored.
    fn new(config_value: Option<f64>) -> Self {
        let atol = std::env::var(Self::ENV_VAR)
            .ok()
            .and_then(|s| s.parse::<f64>().ok())
            .filter(|atol| atol.is_finite())
            .or(config_value.filter(|atol| atol.is_finite()))
            .unwrap_or(Self::DEFAULT)
            .max(Self::MINIMUM);

        Self(atol)
    }
}

/// Sets the name of the indeterminate that polynomials are created in unless
/// a variable is given explicitly, for example through
/// [`ImmutablePolynomial::new`][new] or [`From`] conversions.
///
/// Can also be set via the environment variable
/// `IMMUTABLE_POLY_DEFAULT_VARIABLE`. The environment variable has higher
/// precedence than this function.
///
/// The default is `x`.
///
/// [new]: crate::math::polynomial::ImmutablePolynomial::new
pub fn set_default_variable(name: &str) {
    let default_variable = DefaultVariable::new(Some(name));
    CONFIG.with(|c| c.borrow_mut().default_variable = default_variable);
}

/// Sets the absolute tolerance used by
/// [`chop_default`][chop] and [`truncate_default`][truncate].
///
/// Can also be set via the environment variable
/// `IMMUTABLE_POLY_DEFAULT_ATOL`. The environment variable has higher
/// precedence than this function.
///
/// The default is 0. Negative values are clamped to 0.
///
/// [chop]: crate::math::polynomial::ImmutablePolynomial::chop_default
/// [truncate]: crate::math::polynomial::ImmutablePolynomial::truncate_default
pub fn set_default_absolute_tolerance(atol: f64) {
    let atol = DefaultAbsoluteTolerance::new(Some(atol));
    CONFIG.with(|c| c.borrow_mut().default_absolute_tolerance = atol);
}

pub(crate) fn default_variable() -> Variable {
    CONFIG.with(|c| c.borrow().default_variable.0.clone())
}

pub(crate) fn default_absolute_tolerance() -> f64 {
    CONFIG.with(|c| c.borrow().default_absolute_tolerance).0
}

#[cfg(test)]
mod test_config {
    use super::*;

    // Each test runs on its own thread, hence sees a fresh thread-local config.

    #[test]
    fn default_variable_is_x() {
        if std::env::var(DefaultVariable::ENV_VAR).is_err() {
            assert_eq!("x", default_variable().name());
        }
    }

    #[test]
    fn setting_default_variable_is_observed() {
        if std::env::var(DefaultVariable::ENV_VAR).is_ok() {
            return;
        }
        set_default_variable("s");
        assert_eq!("s", default_variable().name());
    }

    #[test]
    fn empty_default_variable_falls_back_to_x() {
        if std::env::var(DefaultVariable::ENV_VAR).is_ok() {
            return;
        }
        set_default_variable("");
        assert_eq!("x", default_variable().name());
    }

    #[test]
    fn absolute_tolerance_is_clamped_and_finite() {
        if std::env::var(DefaultAbsoluteTolerance::ENV_VAR).is_ok() {
            return;
        }
        assert_eq!(0.0, default_absolute_tolerance());

        set_default_absolute_tolerance(1e-9);
        assert_eq!(1e-9, default_absolute_tolerance());

        set_default_absolute_tolerance(-1.0);
        assert_eq!(0.0, default_absolute_tolerance());

        set_default_absolute_tolerance(f64::NAN);
        assert_eq!(0.0, default_absolute_tolerance());
    }
}
