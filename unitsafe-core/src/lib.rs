//! unitsafe Core - Fundamental types
//!
//! This crate provides the core types used throughout unitsafe:
//! - `Rational`: Exact fractions for conversion factors and quantities
//! - `UnitError`: Structured errors for every unit-system operation

mod rational;
mod error;

pub use rational::{Rational, RationalError};
pub use error::{UnitError, codes};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{Rational, UnitError};
    pub use crate::error::codes;
}
