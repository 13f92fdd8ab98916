//! Conversion between measure types with the same canonical unit

use unitsafe_core::{Rational, UnitError};
use crate::system::TypeEntry;
use crate::{AnyMeasure, Measure, System};

impl System {
    /// Convert `from` into the measure type `To`.
    ///
    /// Both types must have been added to the system. The value is carried
    /// as an exact rational and narrowed to `f64` once, at the end.
    pub fn convert<To: Measure>(&self, from: &dyn AnyMeasure) -> Result<To, UnitError> {
        let to = self.entry_of::<To>()?;
        let source = self.entry(from.measure_type(), from.measure_name())?;

        if !to.dimension.is_convertible(&source.dimension) {
            return Err(UnitError::IncompatibleUnits {
                system: self.name().to_string(),
                from: source.type_name.to_string(),
                to: to.type_name.to_string(),
            });
        }

        let value = self.exact_value(from, source)?;
        let result = value
            .checked_div(to.dimension.factor())
            .map_err(|_| self.division_by_zero(to))?
            .mul(source.dimension.factor());
        Ok(To::new(result.to_f64()))
    }

    /// The raw value of a measure as an exact rational
    pub(crate) fn exact_value(&self, value: &dyn AnyMeasure, entry: &TypeEntry) -> Result<Rational, UnitError> {
        let raw = value.raw_value();
        Rational::from_f64(raw).map_err(|_| UnitError::InvalidValue {
            system: self.name().to_string(),
            type_name: entry.type_name.to_string(),
            value: raw,
        })
    }

    pub(crate) fn division_by_zero(&self, entry: &TypeEntry) -> UnitError {
        UnitError::DivisionByZero {
            system: self.name().to_string(),
            type_name: entry.type_name.to_string(),
        }
    }
}
