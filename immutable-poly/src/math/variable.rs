use std::fmt::Display;
use std::fmt::Formatter;
use std::sync::Arc;

use arbitrary::Arbitrary;
use arbitrary::Unstructured;
use serde::Deserialize;
use serde::Serialize;

use crate::config;

/// The name of a polynomial's indeterminate, like `x` or `s`.
///
/// The name carries no arithmetic meaning. It only decides which polynomials
/// may be combined: two non-constant polynomials in different variables cannot
/// be added or multiplied.
#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Variable(Arc<str>);

impl Variable {
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

/// The [configured](config::set_default_variable) default variable, `x` unless
/// changed.
impl Default for Variable {
    fn default() -> Self {
        config::default_variable()
    }
}

impl Display for Variable {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Variable {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Variable {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

impl<'a> Arbitrary<'a> for Variable {
    fn arbitrary(u: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
        u.choose(&["x", "y", "s", "t"]).map(|&name| Self::new(name))
    }
}
