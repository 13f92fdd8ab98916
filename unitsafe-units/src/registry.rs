//! Base unit registry
//!
//! Maps every unit name to the basic unit it aliases (its root), the exact
//! factor converting one of it into its root, and the exponent-vector slot
//! shared by the root and all of its aliases.

use std::collections::HashMap;
use serde::Serialize;
use tracing::debug;
use unitsafe_core::{Rational, UnitError};

/// A registered unit name
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BaseUnit {
    /// The unit name (e.g., "m", "km")
    pub name: String,
    /// The basic unit this name ultimately aliases
    pub root: String,
    /// Root units per one of this unit
    pub factor: Rational,
    /// Exponent-vector slot, shared with the root
    pub index: usize,
}

impl BaseUnit {
    /// Check if this unit is its own root
    pub fn is_basic(&self) -> bool {
        self.name == self.root
    }
}

/// Registry of basic units and the conversions layered on them
#[derive(Debug, Clone)]
pub struct Registry {
    system: String,
    units: HashMap<String, BaseUnit>,
    slots: usize,
}

impl Registry {
    pub fn new(system: &str) -> Self {
        Registry {
            system: system.to_string(),
            units: HashMap::new(),
            slots: 0,
        }
    }

    /// Name of the owning system
    pub fn system(&self) -> &str {
        &self.system
    }

    /// Get a unit by name
    pub fn get(&self, name: &str) -> Option<&BaseUnit> {
        self.units.get(name)
    }

    /// Look up a unit, failing with `UnknownUnit`
    pub fn lookup(&self, name: &str) -> Result<&BaseUnit, UnitError> {
        self.units.get(name).ok_or_else(|| UnitError::UnknownUnit {
            system: self.system.clone(),
            unit: name.to_string(),
        })
    }

    /// Number of exponent-vector slots (one per basic unit)
    pub fn slots(&self) -> usize {
        self.slots
    }

    /// Number of registered names, basic and converted
    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// All registered units, in slot order then name order
    pub fn units(&self) -> Vec<&BaseUnit> {
        let mut units: Vec<&BaseUnit> = self.units.values().collect();
        units.sort_by(|a, b| a.index.cmp(&b.index).then_with(|| a.name.cmp(&b.name)));
        units
    }

    fn ensure_absent(&self, name: &str) -> Result<(), UnitError> {
        if self.units.contains_key(name) {
            return Err(UnitError::DuplicateUnit {
                system: self.system.clone(),
                unit: name.to_string(),
            });
        }
        Ok(())
    }

    /// Add a basic unit, which becomes its own root with a fresh slot.
    pub fn add_basic(&mut self, name: &str) -> Result<(), UnitError> {
        self.ensure_absent(name)?;
        let index = self.slots;
        self.units.insert(
            name.to_string(),
            BaseUnit {
                name: name.to_string(),
                root: name.to_string(),
                factor: Rational::one(),
                index,
            },
        );
        self.slots += 1;
        debug!(system = %self.system, unit = name, index, "added basic unit");
        Ok(())
    }

    /// Add a conversion: `factor` of `from` make one `to`.
    ///
    /// `to` inherits the root and slot of `from`; its factor composes with
    /// the factor of `from`, so chains of conversions stay relative to the root.
    pub fn add_conversion(&mut self, from: &str, to: &str, factor: f64) -> Result<(), UnitError> {
        let source = self.lookup(from)?;
        let (root, base_factor, index) = (source.root.clone(), source.factor.clone(), source.index);
        self.ensure_absent(to)?;

        let exact = Rational::from_f64(factor)
            .ok()
            .filter(|f| !f.is_zero())
            .ok_or_else(|| UnitError::InvalidFactor {
                system: self.system.clone(),
                unit: to.to_string(),
                factor,
            })?;
        let composed = base_factor.mul(&exact);

        debug!(system = %self.system, unit = to, root = %root, factor = %composed, "added conversion");
        self.units.insert(
            to.to_string(),
            BaseUnit {
                name: to.to_string(),
                root,
                factor: composed,
                index,
            },
        );
        Ok(())
    }

    /// Disjoint union of two registries.
    ///
    /// Units of `a` keep their slots; units of `b` are shifted past them.
    /// Any name defined by both fails with `DuplicateUnit`.
    pub fn merged(system: &str, a: &Registry, b: &Registry) -> Result<Registry, UnitError> {
        let mut units = a.units.clone();
        for unit in b.units() {
            if units.contains_key(&unit.name) {
                return Err(UnitError::DuplicateUnit {
                    system: system.to_string(),
                    unit: unit.name.clone(),
                });
            }
            units.insert(
                unit.name.clone(),
                BaseUnit {
                    index: unit.index + a.slots,
                    ..unit.clone()
                },
            );
        }
        Ok(Registry {
            system: system.to_string(),
            units,
            slots: a.slots + b.slots,
        })
    }
}
