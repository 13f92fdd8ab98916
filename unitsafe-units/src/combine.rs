//! Combining several measures into one

use tracing::trace;
use unitsafe_core::{Rational, UnitError};
use crate::solve::{solve, Sign, Solution, MAX_ARGUMENTS};
use crate::{AnyMeasure, Measure, System};

impl System {
    /// Combine the values in `args` into a value of the measure type `To`.
    ///
    /// Each argument is either multiplied or divided into the result. The
    /// computation only happens if exactly one such assignment yields the
    /// unit of `To`: asking for meters per second from a value in meters and
    /// one in seconds gives m/s, while an assignment that could be read two
    /// ways is rejected as ambiguous.
    pub fn combine<To: Measure>(&self, args: &[&dyn AnyMeasure]) -> Result<To, UnitError> {
        let to = self.entry_of::<To>()?;
        if args.len() > MAX_ARGUMENTS {
            return Err(UnitError::TooManyArguments {
                system: self.name().to_string(),
                max: MAX_ARGUMENTS,
                got: args.len(),
            });
        }

        let expected = to.dimension.exponents().len();
        let mut entries = Vec::with_capacity(args.len());
        for arg in args {
            let entry = self.entry(arg.measure_type(), arg.measure_name())?;
            let found = entry.dimension.exponents().len();
            if found != expected {
                return Err(UnitError::InconsistentRegistry {
                    system: self.name().to_string(),
                    type_name: entry.type_name.to_string(),
                    expected,
                    found,
                });
            }
            entries.push(entry);
        }

        let vecs: Vec<&[i32]> = entries.iter().map(|e| e.dimension.exponents()).collect();
        let assignment = match solve(&vecs, to.dimension.exponents()) {
            Solution::Unique(assignment) => assignment,
            Solution::Ambiguous => {
                return Err(UnitError::AmbiguousConversion {
                    system: self.name().to_string(),
                    target: to.type_name.to_string(),
                })
            }
            Solution::Impossible => {
                return Err(UnitError::ImpossibleConversion {
                    system: self.name().to_string(),
                    target: to.type_name.to_string(),
                })
            }
        };
        trace!(system = %self.name(), to = to.type_name, %assignment, "combination solved");

        let mut result = Rational::one();
        for ((arg, entry), sign) in args.iter().zip(&entries).zip(assignment.signs()) {
            let term = self.exact_value(*arg, entry)?.mul(entry.dimension.factor());
            result = match sign {
                Sign::Multiply => result.mul(&term),
                Sign::Divide => result
                    .checked_div(&term)
                    .map_err(|_| self.division_by_zero(entry))?,
            };
        }
        let result = result
            .checked_div(to.dimension.factor())
            .map_err(|_| self.division_by_zero(to))?;
        Ok(To::new(result.to_f64()))
    }
}
