//! Dimensional analysis types
//!
//! A compound unit is recorded as the sorted root names of its numerator and
//! denominator, one signed exponent per base-unit slot, and the exact factor
//! that converts one of it into root units.

use std::fmt;
use serde::Serialize;
use unitsafe_core::{Rational, UnitError};
use crate::Registry;

/// Canonical form of a compound unit
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dimension {
    numerator: Vec<String>,
    denominator: Vec<String>,
    factor: Rational,
    exponents: Vec<i32>,
}

impl Dimension {
    /// Resolve unit names against a registry.
    ///
    /// A denominator unit whose root already appears in the numerator is
    /// rejected with `SimplifiableUnit`; callers must cancel it themselves.
    pub fn resolve(registry: &Registry, num: &[&str], den: &[&str]) -> Result<Self, UnitError> {
        let mut factor = Rational::one();
        let mut exponents = vec![0i32; registry.slots()];
        // root name => numerator name that introduced it
        let mut seen: Vec<(&str, &str)> = Vec::new();

        let mut numerator = Vec::with_capacity(num.len());
        for &n in num {
            let unit = registry.lookup(n)?;
            numerator.push(unit.root.clone());
            factor = factor.mul(&unit.factor);
            exponents[unit.index] += 1;
            seen.push((unit.root.as_str(), n));
        }

        let mut denominator = Vec::with_capacity(den.len());
        for &d in den {
            let unit = registry.lookup(d)?;
            if let Some(&(_, n)) = seen.iter().find(|(root, _)| *root == unit.root) {
                return Err(UnitError::SimplifiableUnit {
                    system: registry.system().to_string(),
                    numerator: n.to_string(),
                    denominator: d.to_string(),
                    root: unit.root.clone(),
                });
            }
            denominator.push(unit.root.clone());
            // Registered factors are never zero
            factor = factor.checked_div(&unit.factor).map_err(|_| UnitError::InvalidFactor {
                system: registry.system().to_string(),
                unit: d.to_string(),
                factor: unit.factor.to_f64(),
            })?;
            exponents[unit.index] -= 1;
        }

        numerator.sort();
        denominator.sort();
        Ok(Dimension { numerator, denominator, factor, exponents })
    }

    /// Sorted root names in the numerator
    pub fn numerator(&self) -> &[String] {
        &self.numerator
    }

    /// Sorted root names in the denominator
    pub fn denominator(&self) -> &[String] {
        &self.denominator
    }

    /// Root units per one of this unit
    pub fn factor(&self) -> &Rational {
        &self.factor
    }

    /// Net power of each base-unit slot
    pub fn exponents(&self) -> &[i32] {
        &self.exponents
    }

    /// Check if every exponent is zero
    pub fn is_dimensionless(&self) -> bool {
        self.exponents.iter().all(|&e| e == 0)
    }

    /// Two units convert into each other only when their canonical unit
    /// lists match exactly.
    pub fn is_convertible(&self, other: &Dimension) -> bool {
        self.numerator == other.numerator && self.denominator == other.denominator
    }

    /// Same record with `before` zero slots prepended and `after` appended
    pub fn padded(&self, before: usize, after: usize) -> Dimension {
        let mut exponents = vec![0i32; before];
        exponents.extend_from_slice(&self.exponents);
        exponents.resize(before + self.exponents.len() + after, 0);
        Dimension { exponents, ..self.clone() }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} * {} / {}",
            self.factor,
            self.numerator.join("*"),
            self.denominator.join("*")
        )
    }
}
