//! Unit systems and their two-phase construction
//!
//! Unit systems must be constructed in a particular order: add all basic
//! units and conversions ([`UnitsBuilder`]), then add all types
//! ([`TypesBuilder`]), then use ([`System`]). Each phase consumes the previous
//! one, so a registry can never change after the first type is declared.
//! A built `System` is immutable and can be shared across threads freely.

use std::any::TypeId;
use std::collections::HashMap;
use tracing::debug;
use unitsafe_core::UnitError;
use crate::measure::short_type_name;
use crate::{BaseUnit, Dimension, Measure, Registry};

/// Phase 1: basic units and conversions
#[derive(Debug, Clone)]
pub struct UnitsBuilder {
    registry: Registry,
}

impl UnitsBuilder {
    /// Start a unit system named `name`. The name is used in error messages.
    pub fn new(name: &str) -> Self {
        UnitsBuilder { registry: Registry::new(name) }
    }

    /// Add a basic unit.
    ///
    /// Example: `add_basic("meter")`
    pub fn add_basic(&mut self, name: &str) -> Result<(), UnitError> {
        self.registry.add_basic(name)
    }

    /// Add a conversion between units: `from * factor = to`.
    ///
    /// Example: `add_conversion("meter", "kilometer", 1000.0)`
    pub fn add_conversion(&mut self, from: &str, to: &str, factor: f64) -> Result<(), UnitError> {
        self.registry.add_conversion(from, to, factor)
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Freeze the registry and move on to declaring types
    pub fn types(self) -> TypesBuilder {
        debug!(
            system = %self.registry.system(),
            units = self.registry.len(),
            slots = self.registry.slots(),
            "registry frozen"
        );
        TypesBuilder {
            registry: self.registry,
            types: HashMap::new(),
        }
    }
}

/// A measure type together with its unit
#[derive(Debug, Clone)]
pub(crate) struct TypeEntry {
    pub(crate) type_name: &'static str,
    pub(crate) dimension: Dimension,
}

/// Phase 2: associate measure types with units
#[derive(Debug, Clone)]
pub struct TypesBuilder {
    registry: Registry,
    types: HashMap<TypeId, TypeEntry>,
}

impl TypesBuilder {
    /// Associate `T` with a dimensional unit built from numerator and
    /// denominator unit names.
    ///
    /// Examples:
    /// - meters: `add_type::<Meter>(&["m"], &[])`
    /// - miles per gallon: `add_type::<Mpg>(&["mile"], &["gallon"])`
    /// - acceleration: `add_type::<MetersPerSecondSquared>(&["m"], &["s", "s"])`
    ///
    /// Fails if `T` already has a unit, if any name is unknown, or if the
    /// unit can be simplified (e.g. "meters per foot").
    pub fn add_type<T: Measure>(&mut self, num: &[&str], den: &[&str]) -> Result<(), UnitError> {
        let type_name = short_type_name::<T>();
        if self.types.contains_key(&TypeId::of::<T>()) {
            return Err(UnitError::DuplicateType {
                system: self.registry.system().to_string(),
                type_name: type_name.to_string(),
            });
        }

        let dimension = Dimension::resolve(&self.registry, num, den)?;
        debug!(system = %self.registry.system(), type_name, unit = %dimension, "added type");
        self.types.insert(TypeId::of::<T>(), TypeEntry { type_name, dimension });
        Ok(())
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Finish construction
    pub fn build(self) -> System {
        debug!(system = %self.registry.system(), types = self.types.len(), "unit system built");
        System {
            registry: self.registry,
            types: self.types,
        }
    }
}

/// A frozen unit system
///
/// Only read operations are available, so concurrent use needs no locking.
#[derive(Debug, Clone)]
pub struct System {
    pub(crate) registry: Registry,
    pub(crate) types: HashMap<TypeId, TypeEntry>,
}

impl System {
    /// Start building a unit system
    pub fn builder(name: &str) -> UnitsBuilder {
        UnitsBuilder::new(name)
    }

    pub fn name(&self) -> &str {
        self.registry.system()
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Get a registered unit name
    pub fn unit(&self, name: &str) -> Option<&BaseUnit> {
        self.registry.get(name)
    }

    /// The unit associated with `T`
    pub fn dimension_of<T: Measure>(&self) -> Option<&Dimension> {
        self.types.get(&TypeId::of::<T>()).map(|e| &e.dimension)
    }

    /// Number of measure types
    pub fn type_count(&self) -> usize {
        self.types.len()
    }

    pub(crate) fn entry(&self, id: TypeId, type_name: &str) -> Result<&TypeEntry, UnitError> {
        self.types.get(&id).ok_or_else(|| UnitError::UnknownType {
            system: self.name().to_string(),
            type_name: type_name.to_string(),
        })
    }

    pub(crate) fn entry_of<T: Measure>(&self) -> Result<&TypeEntry, UnitError> {
        self.entry(TypeId::of::<T>(), short_type_name::<T>())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    crate::measure! {
        struct Meter;
        struct MetersPerSecond;
        struct Unregistered;
    }

    fn system() -> System {
        let mut units = System::builder("test");
        units.add_basic("m").unwrap();
        units.add_basic("s").unwrap();
        let mut types = units.types();
        types.add_type::<Meter>(&["m"], &[]).unwrap();
        types.add_type::<MetersPerSecond>(&["m"], &["s"]).unwrap();
        types.build()
    }

    #[test]
    fn test_build() {
        let s = system();
        assert_eq!(s.name(), "test");
        assert_eq!(s.type_count(), 2);
        assert_eq!(s.dimension_of::<MetersPerSecond>().unwrap().exponents(), [1, -1]);
        assert!(s.dimension_of::<Unregistered>().is_none());
        assert!(s.unit("m").unwrap().is_basic());
    }

    #[test]
    fn test_duplicate_type() {
        let mut units = UnitsBuilder::new("test");
        units.add_basic("m").unwrap();
        let mut types = units.types();
        types.add_type::<Meter>(&["m"], &[]).unwrap();
        let err = types.add_type::<Meter>(&["m"], &[]).unwrap_err();
        assert_eq!(
            err,
            UnitError::DuplicateType { system: "test".to_string(), type_name: "Meter".to_string() }
        );
    }

    #[test]
    fn test_failed_type_is_not_recorded() {
        let mut units = UnitsBuilder::new("test");
        units.add_basic("m").unwrap();
        let mut types = units.types();
        assert!(matches!(types.add_type::<Meter>(&["m"], &["m"]), Err(UnitError::SimplifiableUnit { .. })));
        assert!(types.add_type::<Meter>(&["m"], &[]).is_ok());
    }

    #[test]
    fn test_unknown_type_lookup() {
        let s = system();
        let err = s.entry_of::<Unregistered>().unwrap_err();
        assert_eq!(err.to_string(), "test has no unit associated with type Unregistered");
    }

    #[test]
    fn test_system_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<System>();
    }
}
