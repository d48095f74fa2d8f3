//! Length units.
//!
//! The canonical scaling unit for this dimension is [`Meter`] (`Meter::RATIO == 1.0`). Metric units are decimal
//! multiples of the metre; the international inch, foot, yard and mile use their exact definitions in metres.
//!
//! ```rust
//! use qkind_core::length::{Feet, Meter};
//!
//! let f = Feet::new(1000.0);
//! assert!((f.to::<Meter>().value() - 304.8).abs() < 1e-9);
//! ```

use crate::typenum::{P1, Z0};
use crate::{Dim, Quantity, Unit};
use qkind_derive::Unit;

/// Dimension of length.
pub type Length = Dim<P1, Z0, Z0, Z0, Z0, Z0, Z0>;

/// Marker trait for any [`Unit`] whose dimension is [`Length`].
pub trait LengthUnit: Unit<Dim = Length> {}
impl<T: Unit<Dim = Length>> LengthUnit for T {}

/// Metre (SI base unit).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "m", dimension = Length, ratio = 1.0)]
pub struct Meter;
/// A quantity measured in metres.
pub type Meters = Quantity<Meter>;
/// One metre.
pub const M: Meters = Meters::new(1.0);

/// Kilometre (`1000 m`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "km", dimension = Length, ratio = 1_000.0)]
pub struct Kilometer;
/// A quantity measured in kilometres.
pub type Kilometers = Quantity<Kilometer>;
/// One kilometre.
pub const KM: Kilometers = Kilometers::new(1.0);

/// Centimetre (`1e-2 m`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "cm", dimension = Length, ratio = 1e-2)]
pub struct Centimeter;
/// A quantity measured in centimetres.
pub type Centimeters = Quantity<Centimeter>;
/// One centimetre.
pub const CM: Centimeters = Centimeters::new(1.0);

/// Millimetre (`1e-3 m`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "mm", dimension = Length, ratio = 1e-3)]
pub struct Millimeter;
/// A quantity measured in millimetres.
pub type Millimeters = Quantity<Millimeter>;
/// One millimetre.
pub const MM: Millimeters = Millimeters::new(1.0);

/// Micrometre (`1e-6 m`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "µm", dimension = Length, ratio = 1e-6)]
pub struct Micrometer;
/// A quantity measured in micrometres.
pub type Micrometers = Quantity<Micrometer>;

/// Nanometre (`1e-9 m`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "nm", dimension = Length, ratio = 1e-9)]
pub struct Nanometer;
/// A quantity measured in nanometres.
pub type Nanometers = Quantity<Nanometer>;

/// Inch (`0.0254 m` exactly).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "in", dimension = Length, ratio = 0.025_4)]
pub struct Inch;
/// A quantity measured in inches.
pub type Inches = Quantity<Inch>;

/// Foot (`0.3048 m` exactly).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "ft", dimension = Length, ratio = 0.304_8)]
pub struct Foot;
/// A quantity measured in feet.
pub type Feet = Quantity<Foot>;

/// Yard (`0.9144 m` exactly).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "yd", dimension = Length, ratio = 0.914_4)]
pub struct Yard;
/// A quantity measured in yards.
pub type Yards = Quantity<Yard>;

/// International mile (`1609.344 m` exactly).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "mi", dimension = Length, ratio = 1_609.344)]
pub struct Mile;
/// A quantity measured in miles.
pub type Miles = Quantity<Mile>;

crate::impl_unit_conversions!(Meter, Kilometer, Centimeter, Millimeter, Micrometer, Nanometer, Inch, Foot, Yard, Mile);
