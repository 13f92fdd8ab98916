//! Structured errors for unit systems
//!
//! Errors never crash the system. Every failure is a value returned to the
//! immediate caller, tagged with the name of the unit system it came from.

use thiserror::Error;

/// Standard error codes (machine-readable)
pub mod codes {
    pub const DUPLICATE_UNIT: &str = "DUPLICATE_UNIT";
    pub const UNKNOWN_UNIT: &str = "UNKNOWN_UNIT";
    pub const SIMPLIFIABLE_UNIT: &str = "SIMPLIFIABLE_UNIT";
    pub const DUPLICATE_TYPE: &str = "DUPLICATE_TYPE";
    pub const UNKNOWN_TYPE: &str = "UNKNOWN_TYPE";
    pub const INCOMPATIBLE_UNITS: &str = "INCOMPATIBLE_UNITS";
    pub const INCONSISTENT_REGISTRY: &str = "INCONSISTENT_REGISTRY";
    pub const TOO_MANY_ARGUMENTS: &str = "TOO_MANY_ARGUMENTS";
    pub const IMPOSSIBLE_CONVERSION: &str = "IMPOSSIBLE_CONVERSION";
    pub const AMBIGUOUS_CONVERSION: &str = "AMBIGUOUS_CONVERSION";
    pub const INVALID_FACTOR: &str = "INVALID_FACTOR";
    pub const INVALID_VALUE: &str = "INVALID_VALUE";
    pub const DIV_ZERO: &str = "DIV_ZERO";
    pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
}

/// Error returned by every fallible unit-system operation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum UnitError {
    #[error("{system} already has a unit named {unit:?}")]
    DuplicateUnit { system: String, unit: String },

    #[error("{system} has no unit named {unit:?}")]
    UnknownUnit { system: String, unit: String },

    #[error("{system}: unit can be simplified: numerator {numerator:?} and denominator {denominator:?} share common unit {root:?}")]
    SimplifiableUnit {
        system: String,
        numerator: String,
        denominator: String,
        root: String,
    },

    #[error("{system} has a unit associated with type {type_name}")]
    DuplicateType { system: String, type_name: String },

    #[error("{system} has no unit associated with type {type_name}")]
    UnknownType { system: String, type_name: String },

    #[error("{system} cannot convert from {from} to {to}")]
    IncompatibleUnits { system: String, from: String, to: String },

    #[error("{system} was constructed out of order: {type_name} spans {found} base units, expected {expected}")]
    InconsistentRegistry {
        system: String,
        type_name: String,
        expected: usize,
        found: usize,
    },

    #[error("{system}: too many arguments to combine, max is {max}, got {got}")]
    TooManyArguments { system: String, max: usize, got: usize },

    #[error("{system}: impossible conversion: no multiply/divide combination of the arguments yields {target}")]
    ImpossibleConversion { system: String, target: String },

    #[error("{system}: ambiguous conversion: more than one multiply/divide combination of the arguments yields {target}")]
    AmbiguousConversion { system: String, target: String },

    #[error("{system}: conversion factor {factor} for unit {unit:?} must be finite and non-zero")]
    InvalidFactor { system: String, unit: String, factor: f64 },

    #[error("{system}: value {value} of type {type_name} is not finite")]
    InvalidValue { system: String, type_name: String, value: f64 },

    #[error("{system}: division by zero-valued {type_name}")]
    DivisionByZero { system: String, type_name: String },

    #[error("Invalid unit system configuration: {0}")]
    Config(String),
}

impl UnitError {
    /// Machine-readable error code
    pub fn code(&self) -> &'static str {
        match self {
            UnitError::DuplicateUnit { .. } => codes::DUPLICATE_UNIT,
            UnitError::UnknownUnit { .. } => codes::UNKNOWN_UNIT,
            UnitError::SimplifiableUnit { .. } => codes::SIMPLIFIABLE_UNIT,
            UnitError::DuplicateType { .. } => codes::DUPLICATE_TYPE,
            UnitError::UnknownType { .. } => codes::UNKNOWN_TYPE,
            UnitError::IncompatibleUnits { .. } => codes::INCOMPATIBLE_UNITS,
            UnitError::InconsistentRegistry { .. } => codes::INCONSISTENT_REGISTRY,
            UnitError::TooManyArguments { .. } => codes::TOO_MANY_ARGUMENTS,
            UnitError::ImpossibleConversion { .. } => codes::IMPOSSIBLE_CONVERSION,
            UnitError::AmbiguousConversion { .. } => codes::AMBIGUOUS_CONVERSION,
            UnitError::InvalidFactor { .. } => codes::INVALID_FACTOR,
            UnitError::InvalidValue { .. } => codes::INVALID_VALUE,
            UnitError::DivisionByZero { .. } => codes::DIV_ZERO,
            UnitError::Config(_) => codes::CONFIG_ERROR,
        }
    }

    /// Whether the error reports a request the declared units cannot satisfy,
    /// rather than a mistake in how the unit system was declared.
    ///
    /// Numeric guards (`InvalidValue`, `DivisionByZero`) are not in this
    /// class; they report bad values, not bad unit requests.
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            UnitError::ImpossibleConversion { .. }
                | UnitError::AmbiguousConversion { .. }
                | UnitError::IncompatibleUnits { .. }
        )
    }

    /// Name of the unit system that produced the error, if any
    pub fn system(&self) -> Option<&str> {
        match self {
            UnitError::DuplicateUnit { system, .. }
            | UnitError::UnknownUnit { system, .. }
            | UnitError::SimplifiableUnit { system, .. }
            | UnitError::DuplicateType { system, .. }
            | UnitError::UnknownType { system, .. }
            | UnitError::IncompatibleUnits { system, .. }
            | UnitError::InconsistentRegistry { system, .. }
            | UnitError::TooManyArguments { system, .. }
            | UnitError::ImpossibleConversion { system, .. }
            | UnitError::AmbiguousConversion { system, .. }
            | UnitError::InvalidFactor { system, .. }
            | UnitError::InvalidValue { system, .. }
            | UnitError::DivisionByZero { system, .. } => Some(system),
            UnitError::Config(_) => None,
        }
    }
}
