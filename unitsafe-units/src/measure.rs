//! Unit-tagged value types
//!
//! A measure is a newtype over `f64` whose Rust type identity stands for one
//! dimensional unit in a [`System`](crate::System). The association itself is
//! made at runtime with `TypesBuilder::add_type`, keyed by `TypeId`.

use std::any::TypeId;

/// A scalar value whose type identifies its unit
pub trait Measure: Copy + 'static {
    /// Wrap a raw value
    fn new(value: f64) -> Self;

    /// Unwrap the raw value
    fn value(self) -> f64;
}

/// Object-safe view of a [`Measure`], used for heterogeneous argument lists
pub trait AnyMeasure {
    /// Type identity used to look up the unit
    fn measure_type(&self) -> TypeId;

    /// Type name for error messages
    fn measure_name(&self) -> &'static str;

    /// The raw value
    fn raw_value(&self) -> f64;
}

impl<T: Measure> AnyMeasure for T {
    fn measure_type(&self) -> TypeId {
        TypeId::of::<T>()
    }

    fn measure_name(&self) -> &'static str {
        short_type_name::<T>()
    }

    fn raw_value(&self) -> f64 {
        self.value()
    }
}

/// Type name without its outer module path.
///
/// Only the path before any generic arguments is stripped, so
/// `a::Wrap<b::Inner>` becomes `Wrap<b::Inner>`.
pub(crate) fn short_type_name<T: ?Sized>() -> &'static str {
    let full = std::any::type_name::<T>();
    let head = full.find('<').map_or(full, |open| &full[..open]);
    match head.rfind("::") {
        Some(sep) => &full[sep + 2..],
        None => full,
    }
}

/// Declare one or more measure newtypes over `f64`.
///
/// ```
/// unitsafe_units::measure! {
///     /// Distance in meters
///     pub struct Meter;
///     pub struct Second;
/// }
/// let d = Meter(5.0);
/// assert_eq!(d.0, 5.0);
/// ```
#[macro_export]
macro_rules! measure {
    ($($(#[$meta:meta])* $vis:vis struct $name:ident;)+) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
            $vis struct $name(pub f64);

            impl $crate::Measure for $name {
                fn new(value: f64) -> Self {
                    $name(value)
                }

                fn value(self) -> f64 {
                    self.0
                }
            }

            impl ::std::fmt::Display for $name {
                fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                    ::std::fmt::Display::fmt(&self.0, f)
                }
            }
        )+
    };
}
