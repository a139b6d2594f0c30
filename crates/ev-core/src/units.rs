// ev-core/src/units.rs

use uom::si::f64::{Area as UomArea, Length as UomLength};

use crate::Real;

// Public canonical unit types (SI, f64)
pub type Area = UomArea;
pub type Length = UomLength;

/// Area-specific thermal resistance in IP units (h·ft²·°F/Btu).
///
/// Kept as a plain float: uom has no quantity for it, and every building
/// description in this domain states R-values in IP.
pub type RValue = Real;

/// Thermal conductivity in IP "per inch" units (Btu·in/(h·ft²·°F)).
pub type ConductivityIn = Real;

#[inline]
pub fn inch(v: f64) -> Length {
    use uom::si::length::inch;
    Length::new::<inch>(v)
}

#[inline]
pub fn ft(v: f64) -> Length {
    use uom::si::length::foot;
    Length::new::<foot>(v)
}

#[inline]
pub fn sqft(v: f64) -> Area {
    use uom::si::area::square_foot;
    Area::new::<square_foot>(v)
}

#[inline]
pub fn to_inch(l: Length) -> f64 {
    l.get::<uom::si::length::inch>()
}

#[inline]
pub fn to_ft(l: Length) -> f64 {
    l.get::<uom::si::length::foot>()
}

#[inline]
pub fn to_sqft(a: Area) -> f64 {
    a.get::<uom::si::area::square_foot>()
}
