//! Merging independent unit systems

use std::collections::HashMap;
use tracing::debug;
use unitsafe_core::UnitError;
use crate::system::TypeEntry;
use crate::{Registry, System};

impl System {
    /// Disjoint union of two unit systems, named `"{a}+{b}"`.
    ///
    /// The base units of `b` are appended after those of `a`, and every unit
    /// record is widened to cover both. There is no precedence: a unit name
    /// defined by both systems fails with `DuplicateUnit` even if the two
    /// definitions agree, and a type known to both fails with `DuplicateType`.
    pub fn merge(a: &System, b: &System) -> Result<System, UnitError> {
        let name = format!("{}+{}", a.name(), b.name());
        let registry = Registry::merged(&name, &a.registry, &b.registry)?;
        let (a_slots, b_slots) = (a.registry.slots(), b.registry.slots());

        let mut types = HashMap::with_capacity(a.types.len() + b.types.len());
        for (id, entry) in &a.types {
            types.insert(
                *id,
                TypeEntry {
                    type_name: entry.type_name,
                    dimension: entry.dimension.padded(0, b_slots),
                },
            );
        }
        for (id, entry) in &b.types {
            if types.contains_key(id) {
                return Err(UnitError::DuplicateType {
                    system: name,
                    type_name: entry.type_name.to_string(),
                });
            }
            types.insert(
                *id,
                TypeEntry {
                    type_name: entry.type_name,
                    dimension: entry.dimension.padded(a_slots, 0),
                },
            );
        }

        debug!(system = %name, units = registry.len(), types = types.len(), "merged unit systems");
        Ok(System { registry, types })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    crate::measure! {
        struct Meter;
        struct Kilometer;
        struct Kilogram;
        struct Tonne;
    }

    fn length() -> System {
        let mut units = System::builder("length");
        units.add_basic("m").unwrap();
        units.add_conversion("m", "km", 1000.0).unwrap();
        let mut types = units.types();
        types.add_type::<Meter>(&["m"], &[]).unwrap();
        types.add_type::<Kilometer>(&["km"], &[]).unwrap();
        types.build()
    }

    fn mass() -> System {
        let mut units = System::builder("mass");
        units.add_basic("kg").unwrap();
        units.add_conversion("kg", "t", 1000.0).unwrap();
        let mut types = units.types();
        types.add_type::<Kilogram>(&["kg"], &[]).unwrap();
        types.add_type::<Tonne>(&["t"], &[]).unwrap();
        types.build()
    }

    #[test]
    fn test_merge_widens_records() {
        let merged = System::merge(&length(), &mass()).unwrap();
        assert_eq!(merged.name(), "length+mass");
        assert_eq!(merged.registry().slots(), 2);
        assert_eq!(merged.type_count(), 4);
        assert_eq!(merged.dimension_of::<Meter>().unwrap().exponents(), [1, 0]);
        assert_eq!(merged.dimension_of::<Tonne>().unwrap().exponents(), [0, 1]);
        assert_eq!(merged.unit("t").unwrap().index, 1);
    }

    #[test]
    fn test_merged_system_converts_and_combines() {
        let merged = System::merge(&length(), &mass()).unwrap();
        let kg: Kilogram = merged.convert(&Tonne(2.0)).unwrap();
        assert_eq!(kg, Kilogram(2000.0));
        let m: Meter = merged.convert(&Kilometer(1.5)).unwrap();
        assert_eq!(m, Meter(1500.0));
        assert!(matches!(merged.convert::<Meter>(&Kilogram(1.0)), Err(UnitError::IncompatibleUnits { .. })));

        let m: Meter = merged.combine(&[&Kilometer(2.0)]).unwrap();
        assert_eq!(m, Meter(2000.0));
        assert!(matches!(
            merged.combine::<Meter>(&[&Kilometer(2.0), &Tonne(1.0)]),
            Err(UnitError::ImpossibleConversion { .. })
        ));
    }

    #[test]
    fn test_merge_name_collision() {
        let err = System::merge(&length(), &length()).unwrap_err();
        assert!(matches!(err, UnitError::DuplicateUnit { ref system, .. } if system == "length+length"));
    }

    #[test]
    fn test_merge_type_collision() {
        let mut units = System::builder("other");
        units.add_basic("ft").unwrap();
        let mut types = units.types();
        types.add_type::<Meter>(&["ft"], &[]).unwrap();
        let other = types.build();

        let err = System::merge(&length(), &other).unwrap_err();
        assert_eq!(
            err,
            UnitError::DuplicateType { system: "length+other".to_string(), type_name: "Meter".to_string() }
        );
    }
}
