//! Area units (`Length²`).
//!
//! The canonical scaling unit is [`SquareMeter`]. Products of two lengths carry a [`Prod`](crate::Prod) unit with
//! the same dimension, so they convert into any unit here with [`Quantity::to`]:
//!
//! ```rust
//! use qkind_core::area::SquareMeter;
//! use qkind_core::length::{Kilometers, Meters};
//!
//! let field = Meters::new(200.0) * Kilometers::new(0.5);
//! assert!((field.to::<SquareMeter>().value() - 100_000.0).abs() < 1e-6);
//! ```

use crate::units::length::Length;
use crate::{MulDim, Quantity, Unit};
use qkind_derive::Unit;

/// Dimension of area.
pub type Area = MulDim<Length, Length>;

/// Marker trait for any [`Unit`] whose dimension is [`Area`].
pub trait AreaUnit: Unit<Dim = Area> {}
impl<T: Unit<Dim = Area>> AreaUnit for T {}

/// Square millimetre (`1e-6 m²`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "mm²", dimension = Area, ratio = 1e-6)]
pub struct SquareMillimeter;
/// A quantity measured in square millimetres.
pub type SquareMillimeters = Quantity<SquareMillimeter>;

/// Square centimetre (`1e-4 m²`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "cm²", dimension = Area, ratio = 1e-4)]
pub struct SquareCentimeter;
/// A quantity measured in square centimetres.
pub type SquareCentimeters = Quantity<SquareCentimeter>;

/// Square metre.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "m²", dimension = Area, ratio = 1.0)]
pub struct SquareMeter;
/// A quantity measured in square metres.
pub type SquareMeters = Quantity<SquareMeter>;

/// Hectare (`1e4 m²`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "ha", dimension = Area, ratio = 1e4)]
pub struct Hectare;
/// A quantity measured in hectares.
pub type Hectares = Quantity<Hectare>;

/// Square kilometre (`1e6 m²`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "km²", dimension = Area, ratio = 1e6)]
pub struct SquareKilometer;
/// A quantity measured in square kilometres.
pub type SquareKilometers = Quantity<SquareKilometer>;

crate::impl_unit_conversions!(SquareMillimeter, SquareCentimeter, SquareMeter, Hectare, SquareKilometer);
