//! unitsafe Units - Unit-safe calculations
//!
//! Declare base units and conversions, associate `f64` newtypes with
//! compound units built from them, then convert or combine values of those
//! types only when the result is dimensionally sound.
//!
//! Construction is two-phase and enforced by the builder types:
//! - `UnitsBuilder`: basic units (m, s) and conversions (km = 1000 m)
//! - `TypesBuilder`: measure types and their units (m/s, m²/s)
//! - `System`: frozen, read-only, safe to share across threads
//!
//! ```
//! use unitsafe_units::{measure, System};
//!
//! measure! {
//!     pub struct Meter;
//!     pub struct Kilometer;
//!     pub struct MetersPerSecond;
//!     pub struct MetersSquaredPerSecond;
//! }
//!
//! let mut units = System::builder("si");
//! units.add_basic("m")?;
//! units.add_basic("s")?;
//! units.add_conversion("m", "km", 1000.0)?;
//!
//! let mut types = units.types();
//! types.add_type::<Meter>(&["m"], &[])?;
//! types.add_type::<Kilometer>(&["km"], &[])?;
//! types.add_type::<MetersPerSecond>(&["m"], &["s"])?;
//! types.add_type::<MetersSquaredPerSecond>(&["m", "m"], &["s"])?;
//! let si = types.build();
//!
//! let km: Kilometer = si.convert(&Meter(5000.0))?;
//! assert_eq!(km, Kilometer(5.0));
//!
//! let flux: MetersSquaredPerSecond = si.combine(&[&Meter(10.0), &MetersPerSecond(25.0)])?;
//! assert_eq!(flux, MetersSquaredPerSecond(250.0));
//! # Ok::<(), unitsafe_units::UnitError>(())
//! ```

mod measure;
mod registry;
mod dimension;
mod system;
mod convert;
mod solve;
mod combine;
mod merge;
mod config;

pub use measure::{Measure, AnyMeasure};
pub use registry::{Registry, BaseUnit};
pub use dimension::Dimension;
pub use system::{System, UnitsBuilder, TypesBuilder};
pub use solve::MAX_ARGUMENTS;
pub use config::{RegistryConfig, ConversionDef};
pub use unitsafe_core::{Rational, UnitError};
