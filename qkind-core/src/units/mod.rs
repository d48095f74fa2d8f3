//! Predefined unit modules grouped by dimension.
//!
//! The units live in `qkind-core` so that the derived `Display` impls and the `From` conversions between units do
//! not run into Rust's orphan rules.
//!
//! ## Modules
//!
//! - [`length`]: length units (metre is the canonical scaling unit).
//! - [`time`]: time units (second is canonical), plus conversion from [`core::time::Duration`].
//! - [`mass`]: mass units (gram is canonical).
//! - [`area`]: area units (square metre is canonical); products of lengths convert into them.
//! - [`velocity`]: velocity aliases (`Length / Time`) built from [`length`] and [`time`].
//! - [`frequency`]: frequency units (`1 / Time`, hertz is canonical).
//! - [`unitless`]: dimensionless scales such as percent.

pub mod area;
pub mod frequency;
pub mod length;
pub mod mass;
pub mod time;
pub mod unitless;
pub mod velocity;
