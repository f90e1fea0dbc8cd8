//! Comparison operators accepted by illness checks.

use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// Direction of a threshold comparison over a patient's lab values.
///
/// `GreaterThan` compares the largest matching value, `LessThan` the smallest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Operator {
    /// `>`
    GreaterThan,
    /// `<`
    LessThan,
}

impl Operator {
    /// The operator's symbol.
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::GreaterThan => ">",
            Operator::LessThan => "<",
        }
    }

    /// Compare `lhs` against `rhs`.
    pub fn compare(self, lhs: f64, rhs: f64) -> bool {
        match self {
            Operator::GreaterThan => lhs > rhs,
            Operator::LessThan => lhs < rhs,
        }
    }

    /// Pick the extreme value the operator tests against: the maximum for
    /// `>` and the minimum for `<`. Returns `None` for an empty input.
    pub fn extreme<I>(self, values: I) -> Option<f64>
    where
        I: IntoIterator<Item = f64>,
    {
        let pick: fn(f64, f64) -> f64 = match self {
            Operator::GreaterThan => f64::max,
            Operator::LessThan => f64::min,
        };
        values.into_iter().reduce(pick)
    }
}

impl FromStr for Operator {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            ">" => Ok(Operator::GreaterThan),
            "<" => Ok(Operator::LessThan),
            other => Err(ModelError::InvalidOperator(other.to_string())),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
