//! Core type system for kind-tagged physical quantities.
//!
//! `qkind-core` separates two questions that plain unit libraries conflate:
//!
//! - *What dimension is this?* A [`Quantity<U, R>`] carries a unit `U` (and through it a dimension) and a value of
//!   representation `R`. Dimensions are typenum exponent arrays, so products and quotients are computed by the type
//!   checker.
//! - *What does it mean?* A [`QuantityKind<K, U, R>`] additionally carries a kind `K`: a radius and a width are both
//!   lengths, but they are different kinds and do not mix without an explicit [`QuantityKind::common`].
//!
//! Kinds form families. A base kind (say `Period`, over time) may declare derived kinds with other dimensions (say
//! `Rate`, over inverse time). When an operation changes a kind-quantity's dimension, the result is tagged with the
//! family member of matching dimension, or left as a plain [`Quantity`] if there is none.
//!
//! Most users should depend on `qkind` (the facade crate) rather than on this crate directly.
//!
//! # Quick start
//!
//! ```rust
//! use qkind_core::length::{Length, Meter, Meters};
//! use qkind_core::{Dimensionless, DivDim, Per, Quantity, QuantityKind, Unitless};
//! use qkind_derive::Kind;
//!
//! #[derive(Kind)]
//! #[kind(crate = "qkind_core", dimension = Length, derived(Curvature))]
//! pub enum Radius {}
//!
//! #[derive(Kind)]
//! #[kind(crate = "qkind_core", base = Radius, dimension = DivDim<Dimensionless, Length>)]
//! pub enum Curvature {}
//!
//! let r = QuantityKind::<Radius, Meter>::new(Meters::new(4.0));
//! let bigger: QuantityKind<Radius, Meter> = r * 2.0;
//! let k: QuantityKind<Curvature, Per<Unitless, Meter>> = 1.0 / r;
//! assert_eq!(bigger.value(), 8.0);
//! assert_eq!(k.value(), 0.25);
//!
//! // Leaving the kind system is explicit.
//! let plain: Quantity<Meter> = r.common();
//! assert_eq!(plain.value(), 4.0);
//! ```
//!
//! # `no_std`
//!
//! Disable default features to build `qkind-core` without `std`:
//!
//! ```toml
//! [dependencies]
//! qkind-core = { version = "0.1.0", default-features = false }
//! ```
//!
//! When `std` is disabled, the rounding used by integer unit conversion is provided via `libm`.
//!
//! # Feature flags
//!
//! - `std` (default): enables `std` support.
//! - `serde`: `Serialize`/`Deserialize` for [`Quantity`] and [`QuantityKind`] as the raw value, plus the
//!   `serde_with_unit` and `serde_with_kind` helper modules that keep unit and kind tags. Implies `std`.
//!
//! # Panics and errors
//!
//! Arithmetic has no runtime error channel: every precondition is a trait bound, and an operator either type-checks
//! or does not exist. The values follow the semantics of `R` (IEEE-754 for floats, the usual overflow behaviour for
//! integers). The only fallible operations read unit and kind tags from outside data and report [`TagError`].
//!
//! # SemVer and stability
//!
//! This crate is currently `0.x`. Expect breaking changes between minor versions until `1.0`.

#![deny(missing_docs)]
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(not(feature = "std"))]
extern crate libm;

// ─────────────────────────────────────────────────────────────────────────────
// Core modules
// ─────────────────────────────────────────────────────────────────────────────

mod bridge;
mod dimension;
pub mod downcast;
mod error;
mod kind;
mod macros;
mod numbers;
mod quantity;
mod quantity_kind;
mod unit;

// ─────────────────────────────────────────────────────────────────────────────
// Public re-exports of core types
// ─────────────────────────────────────────────────────────────────────────────

pub use typenum;

pub use dimension::{Dim, DimDiv, DimMul, Dimension, Dimensionless, DivDim, MulDim, SameDim};
pub use downcast::{downcasted, DowncastKind, Downcasted, Unkinded};
pub use error::{TagError, TagResult};
pub use kind::{BaseKind, Cons, EquivalentTo, Kind, KindList, NegatableKind, Nil, SteppableKind};
pub use numbers::{CompoundModuloWith, ExactRescale, ModuloWith, Negative, NumberLine, Representation, SetWithInverse};
pub use quantity::{AnyQuantity, ConvertInto, Quantity};
pub use quantity_kind::{QuantityKind, Rekinded};
pub use unit::{Per, Prod, Simplify, Unit, Unitless};

#[cfg(feature = "serde")]
pub use quantity::serde_with_unit;
#[cfg(feature = "serde")]
pub use quantity_kind::serde_with_kind;

// ─────────────────────────────────────────────────────────────────────────────
// Predefined unit modules (grouped by dimension)
// ─────────────────────────────────────────────────────────────────────────────

/// Predefined unit modules (grouped by dimension).
///
/// These are defined in `qkind-core` so they can implement formatting and conversion traits without running into
/// Rust's orphan rules.
pub mod units;

pub use units::area;
pub use units::frequency;
pub use units::length;
pub use units::mass;
pub use units::time;
pub use units::unitless;
pub use units::velocity;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::length::{Length, Meter};
    use core::mem::size_of;
    use qkind_derive::Kind;

    #[derive(Kind)]
    #[kind(crate = "crate", dimension = Length)]
    enum Radius {}

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn tags_are_zero_cost() {
        assert_eq!(size_of::<Quantity<Meter>>(), size_of::<f64>());
        assert_eq!(size_of::<QuantityKind<Radius, Meter>>(), size_of::<f64>());
        assert_eq!(size_of::<QuantityKind<Radius, Meter, u8>>(), size_of::<u8>());
    }

    #[test]
    fn kind_quantities_are_send_and_sync() {
        assert_send_sync::<QuantityKind<Radius, Meter>>();
        assert_send_sync::<QuantityKind<Radius, Meter, i64>>();
    }
}
