//! Velocity unit aliases (`Length / Time`).
//!
//! No standalone velocity units are introduced: every velocity is a [`Per`] of a length unit and a time unit, and
//! converts through the ratios of both.
//!
//! ```rust
//! use qkind_core::length::{Kilometer, Kilometers, Meter};
//! use qkind_core::time::{Hour, Hours, Second};
//! use qkind_core::velocity::Velocity;
//!
//! let v: Velocity<Kilometer, Hour> = Kilometers::new(36.0) / Hours::new(1.0);
//! let mps: Velocity<Meter, Second> = v.to();
//! assert!((mps.value() - 10.0).abs() < 1e-12);
//! ```

use crate::units::length::Length;
use crate::units::time::Time;
use crate::{DivDim, Per, Quantity, Unit};

/// Dimension of velocity (`Length / Time`).
pub type VelocityDim = DivDim<Length, Time>;

/// Marker trait for any unit whose dimension is [`VelocityDim`].
pub trait VelocityUnit: Unit<Dim = VelocityDim> {}
impl<T: Unit<Dim = VelocityDim>> VelocityUnit for T {}

/// A velocity quantity parameterized by length and time units.
pub type Velocity<N, D, R = f64> = Quantity<Per<N, D>, R>;
