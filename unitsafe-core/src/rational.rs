//! Exact rational numbers using dashu
//!
//! Uses dashu-ratio (RBig) so that conversion factors compose across
//! arbitrarily long chains without accumulating rounding error.
//! Values are only narrowed to `f64` at the very end of a computation.

use dashu_base::Approximation;
use dashu_int::{IBig, UBig};
use dashu_ratio::RBig;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Error type for rational operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RationalError {
    #[error("Not a finite number: {0}")]
    NonFinite(f64),

    #[error("Division by zero")]
    DivisionByZero,

    #[error("Invalid rational format: {0}")]
    ParseError(String),
}

/// Exact fraction of two arbitrary precision integers
///
/// All operations return Results or new Rationals - never panic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rational {
    inner: RBig,
}

impl Rational {
    // ========== Construction ==========

    /// The multiplicative identity
    pub fn one() -> Self {
        Self { inner: RBig::ONE }
    }

    /// Zero
    pub fn zero() -> Self {
        Self { inner: RBig::ZERO }
    }

    /// Create from i64
    pub fn from_i64(n: i64) -> Self {
        Self { inner: RBig::from(n) }
    }

    /// Create from ratio (exact division)
    pub fn from_ratio(num: i64, den: u64) -> Result<Self, RationalError> {
        if den == 0 {
            return Err(RationalError::DivisionByZero);
        }
        Ok(Self { inner: RBig::from_parts(IBig::from(num), UBig::from(den)) })
    }

    /// Create from f64, exactly.
    ///
    /// Every finite `f64` is a dyadic rational, so no precision is lost:
    /// `0.1` becomes `3602879701896397/36028797018963968`, not `1/10`.
    pub fn from_f64(f: f64) -> Result<Self, RationalError> {
        if !f.is_finite() {
            return Err(RationalError::NonFinite(f));
        }
        RBig::try_from(f)
            .map(|inner| Self { inner })
            .map_err(|_| RationalError::NonFinite(f))
    }

    /// Parse "a/b" or "a"
    pub fn parse(s: &str) -> Result<Self, RationalError> {
        let s = s.trim();
        let err = || RationalError::ParseError(s.to_string());

        let (num_str, den_str) = match s.split_once('/') {
            Some((n, d)) => (n.trim(), d.trim()),
            None => (s, "1"),
        };
        let num: IBig = num_str.parse().map_err(|_| err())?;
        let den: UBig = den_str.parse().map_err(|_| err())?;
        if den == UBig::ZERO {
            return Err(RationalError::DivisionByZero);
        }
        Ok(Self { inner: RBig::from_parts(num, den) })
    }

    // ========== Predicates ==========

    /// Check if zero
    pub fn is_zero(&self) -> bool {
        self.inner == RBig::ZERO
    }

    /// Check if one
    pub fn is_one(&self) -> bool {
        self.inner == RBig::ONE
    }

    /// Check if the reduced denominator is one
    pub fn is_integer(&self) -> bool {
        *self.inner.denominator() == UBig::ONE
    }

    // ========== Arithmetic ==========

    /// Multiplication
    pub fn mul(&self, other: &Self) -> Self {
        Self { inner: &self.inner * &other.inner }
    }

    /// Safe division (returns Result, never panics)
    pub fn checked_div(&self, other: &Self) -> Result<Self, RationalError> {
        if other.is_zero() {
            Err(RationalError::DivisionByZero)
        } else {
            Ok(Self { inner: &self.inner / &other.inner })
        }
    }

    // ========== Narrowing ==========

    /// Round to the nearest f64.
    ///
    /// This is the only lossy operation on a Rational.
    pub fn to_f64(&self) -> f64 {
        match self.inner.to_f64() {
            Approximation::Exact(f) => f,
            Approximation::Inexact(f, _) => f,
        }
    }

    /// Numerator of the reduced fraction
    pub fn numerator(&self) -> &IBig {
        self.inner.numerator()
    }

    /// Denominator of the reduced fraction (always positive)
    pub fn denominator(&self) -> &UBig {
        self.inner.denominator()
    }
}

// ========== Trait Implementations ==========

impl Default for Rational {
    fn default() -> Self {
        Self::one()
    }
}

impl From<i64> for Rational {
    fn from(n: i64) -> Self {
        Self::from_i64(n)
    }
}

impl std::fmt::Display for Rational {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.numerator())
        } else {
            write!(f, "{}/{}", self.numerator(), self.denominator())
        }
    }
}

impl Serialize for Rational {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Rational {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
