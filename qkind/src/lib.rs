//! Kind-tagged physical quantities.
//!
//! `qkind` is the user-facing crate in this workspace. It re-exports the full API from `qkind-core`, the `Kind` and
//! `Unit` derives, and the predefined units (lengths, times, masses, areas, velocities, frequencies).
//!
//! A `Quantity<U>` prevents mixing dimensions: metres never add to seconds. A `QuantityKind<K, U>` goes one step
//! further and prevents mixing *meanings* of one dimension: a radius never adds to a width, although both are
//! metres.
//!
//! # What this crate solves
//!
//! - Compile-time separation of kinds that share a dimension.
//! - Kind-aware arithmetic: scaling keeps the kind, and dimension-changing operations land on the kind the family
//!   declares for the new dimension (or on a plain quantity when it declares none).
//! - Operators that exist exactly when the representation supports them (`%` on integers and floats, negation on
//!   signed types, stepping on anything with a one).
//!
//! # Quick start
//!
//! ```rust
//! use qkind::{Kind, Length, Meter, Meters, Per, Quantity, QuantityKind, Unitless};
//!
//! #[derive(Kind)]
//! #[kind(dimension = Length)]
//! pub enum Radius {}
//!
//! let r = QuantityKind::<Radius, Meter>::new(Meters::new(5.0));
//!
//! let doubled: QuantityKind<Radius, Meter> = r * 2.0;
//! assert_eq!(doubled.value(), 10.0);
//!
//! let inverse: Quantity<Per<Unitless, Meter>> = 1.0 / r;
//! assert_eq!(inverse.value(), 0.2);
//! ```
//!
//! Kind families route dimension changes:
//!
//! ```rust
//! use qkind::{Dimensionless, DivDim, Kind, Per, QuantityKind, Second, Seconds, Time, Unitless};
//!
//! #[derive(Kind)]
//! #[kind(dimension = Time, derived(Rate))]
//! pub enum Period {}
//!
//! #[derive(Kind)]
//! #[kind(base = Period, dimension = DivDim<Dimensionless, Time>)]
//! pub enum Rate {}
//!
//! let p = QuantityKind::<Period, Second>::new(Seconds::new(0.25));
//! let f: QuantityKind<Rate, Per<Unitless, Second>> = 1.0 / p;
//! assert_eq!(f.value(), 4.0);
//! ```
//!
//! # Incorrect usage (type errors)
//!
//! Different kinds of one dimension do not add:
//!
//! ```compile_fail
//! use qkind::{Kind, Length, Meter, Meters, QuantityKind};
//!
//! #[derive(Kind)]
//! #[kind(dimension = Length)]
//! pub enum Radius {}
//!
//! #[derive(Kind)]
//! #[kind(dimension = Length)]
//! pub enum Width {}
//!
//! let r = QuantityKind::<Radius, Meter>::new(Meters::new(1.0));
//! let w = QuantityKind::<Width, Meter>::new(Meters::new(1.0));
//! let _ = r + w;
//! ```
//!
//! nor compare:
//!
//! ```compile_fail
//! use qkind::{Kind, Length, Meter, Meters, QuantityKind};
//!
//! #[derive(Kind)]
//! #[kind(dimension = Length)]
//! pub enum Radius {}
//!
//! #[derive(Kind)]
//! #[kind(dimension = Length)]
//! pub enum Width {}
//!
//! let r = QuantityKind::<Radius, Meter>::new(Meters::new(1.0));
//! let w = QuantityKind::<Width, Meter>::new(Meters::new(1.0));
//! let _ = r == w;
//! ```
//!
//! A compound remainder takes a scalar or an equivalent kind-quantity, never a plain quantity:
//!
//! ```compile_fail
//! use qkind::{Kind, Length, Meter, Meters, QuantityKind};
//!
//! #[derive(Kind)]
//! #[kind(dimension = Length)]
//! pub enum Radius {}
//!
//! let mut r = QuantityKind::<Radius, Meter>::new(Meters::new(7.0));
//! r %= Meters::new(2.0);
//! ```
//!
//! Kinds declared `no_negation` cannot be negated:
//!
//! ```compile_fail
//! use qkind::{Kind, Length, Meter, Meters, QuantityKind};
//!
//! #[derive(Kind)]
//! #[kind(dimension = Length, no_negation)]
//! pub enum Distance {}
//!
//! let d = QuantityKind::<Distance, Meter>::new(Meters::new(7.0));
//! let _ = -d;
//! ```
//!
//! and unsigned representations cannot be negated either:
//!
//! ```compile_fail
//! use qkind::{Kind, Length, Meter, Quantity, QuantityKind};
//!
//! #[derive(Kind)]
//! #[kind(dimension = Length)]
//! pub enum Radius {}
//!
//! let r = QuantityKind::<Radius, Meter, u32>::new(Quantity::<Meter, u32>::new(7));
//! let _ = -r;
//! ```
//!
//! Kinds declared `no_step` cannot be incremented:
//!
//! ```compile_fail
//! use qkind::{Kind, Quantity, QuantityKind, Second, Time};
//!
//! #[derive(Kind)]
//! #[kind(dimension = Time, no_step)]
//! pub enum Instant {}
//!
//! let mut t = QuantityKind::<Instant, Second, i64>::new(Quantity::<Second, i64>::new(3));
//! t.increment();
//! ```
//!
//! A bare number only becomes a kind-quantity when the kind is dimensionless:
//!
//! ```compile_fail
//! use qkind::{Kind, Length, Meter, QuantityKind};
//!
//! #[derive(Kind)]
//! #[kind(dimension = Length)]
//! pub enum Radius {}
//!
//! let _ = QuantityKind::<Radius, Meter>::from_value(5.0);
//! ```
//!
//! Converting between equivalent kinds never rounds, so an integer kind-quantity cannot change unit implicitly:
//!
//! ```compile_fail
//! use qkind::{Kilometer, Kind, Length, Meter, Quantity, QuantityKind};
//!
//! #[derive(Kind)]
//! #[kind(dimension = Length)]
//! pub enum Radius {}
//!
//! let m = QuantityKind::<Radius, Meter, i32>::new(Quantity::<Meter, i32>::new(2400));
//! let _ = QuantityKind::<Radius, Kilometer, i32>::from_equivalent(m);
//! ```
//!
//! and an integer remainder by a scaled dimensionless quantity (which could round to zero) is rejected:
//!
//! ```compile_fail
//! use qkind::unitless::Percent;
//! use qkind::{Kind, Length, Meter, Quantity, QuantityKind};
//!
//! #[derive(Kind)]
//! #[kind(dimension = Length)]
//! pub enum Radius {}
//!
//! let r = QuantityKind::<Radius, Meter, i32>::new(Quantity::<Meter, i32>::new(7));
//! let _ = r % Quantity::<Percent, i32>::new(40);
//! ```
//!
//! A kind's dimension must match the unit it is paired with:
//!
//! ```compile_fail
//! use qkind::{Kind, Length, QuantityKind, Second, Seconds};
//!
//! #[derive(Kind)]
//! #[kind(dimension = Length)]
//! pub enum Radius {}
//!
//! let _ = QuantityKind::<Radius, Second>::new(Seconds::new(5.0));
//! ```
//!
//! A derived kind must name the base that lists it:
//!
//! ```compile_fail
//! use qkind::{Dimensionless, DivDim, Kind, Length};
//!
//! #[derive(Kind)]
//! #[kind(dimension = Length, derived(Curvature))]
//! pub enum Radius {}
//!
//! #[derive(Kind)]
//! #[kind(dimension = Length)]
//! pub enum Width {}
//!
//! #[derive(Kind)]
//! #[kind(base = Width, dimension = DivDim<Dimensionless, Length>)]
//! pub enum Curvature {}
//!
//! fn family<K: qkind::BaseKind>() {}
//! family::<Radius>();
//! ```
//!
//! # Modules
//!
//! Units are grouped by dimension under modules, also re-exported at the crate root:
//!
//! - `qkind::length` (metres, kilometres, feet, miles, …)
//! - `qkind::time` (seconds, hours, days, …; interoperates with `core::time::Duration`)
//! - `qkind::mass` (grams, kilograms, pounds, …)
//! - `qkind::area` (square metres, hectares, …)
//! - `qkind::velocity` (`Length / Time` aliases)
//! - `qkind::frequency` (hertz, rpm, `1 / Time` aliases)
//! - `qkind::unitless` (percent, per mille, ppm)
//!
//! # Feature flags
//!
//! - `std` (default): enables `std` support in `qkind-core`.
//! - `serde`: raw-value serialization for `Quantity` and `QuantityKind`, plus `serde_with_unit` and
//!   `serde_with_kind` for tagged forms.
//!
//! Disable default features for `no_std`:
//!
//! ```toml
//! [dependencies]
//! qkind = { version = "0.1.0", default-features = false }
//! ```
//!
//! # Panics and errors
//!
//! Operators never fail at runtime; a misuse is a type error. Reading tagged data (`from_tagged`, the serde helpers)
//! reports a `TagError` when a unit or kind tag disagrees with the target type.
//!
//! # SemVer and stability
//!
//! This workspace is currently `0.x`. Expect breaking changes between minor versions until `1.0`.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub use qkind_core::*;

/// Derive macros.
///
/// `Kind` declares a kind marker type; by default it expands in terms of `::qkind`. `Unit` expands in terms of
/// `crate::Unit` and `crate::Quantity`, so it is intended for use inside `qkind-core` (or crates exposing the same
/// crate-root API).
pub use qkind_derive::{Kind, Unit};

pub use qkind_core::units::area::*;
pub use qkind_core::units::frequency::*;
pub use qkind_core::units::length::*;
pub use qkind_core::units::mass::*;
pub use qkind_core::units::time::*;
pub use qkind_core::units::unitless::*;
pub use qkind_core::units::velocity::*;
