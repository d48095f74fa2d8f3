//! Mass units.
//!
//! The canonical scaling unit for this dimension is [`Gram`] (`Gram::RATIO == 1.0`), so that the SI prefixes stay
//! plain powers of ten. Avoirdupois units use their exact international definitions.
//!
//! ```rust
//! use qkind_core::mass::{Kilograms, Pound};
//!
//! let kg = Kilograms::new(0.453_592_37);
//! assert!((kg.to::<Pound>().value() - 1.0).abs() < 1e-12);
//! ```

use crate::typenum::{P1, Z0};
use crate::{Dim, Quantity, Unit};
use qkind_derive::Unit;

/// Dimension of mass.
pub type Mass = Dim<Z0, P1, Z0, Z0, Z0, Z0, Z0>;

/// Marker trait for any [`Unit`] whose dimension is [`Mass`].
pub trait MassUnit: Unit<Dim = Mass> {}
impl<T: Unit<Dim = Mass>> MassUnit for T {}

/// Milligram (`1e-3 g`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "mg", dimension = Mass, ratio = 1e-3)]
pub struct Milligram;
/// A quantity measured in milligrams.
pub type Milligrams = Quantity<Milligram>;

/// Gram.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "g", dimension = Mass, ratio = 1.0)]
pub struct Gram;
/// A quantity measured in grams.
pub type Grams = Quantity<Gram>;
/// One gram.
pub const G: Grams = Grams::new(1.0);

/// Kilogram (`1000 g`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "kg", dimension = Mass, ratio = 1e3)]
pub struct Kilogram;
/// A quantity measured in kilograms.
pub type Kilograms = Quantity<Kilogram>;
/// One kilogram.
pub const KG: Kilograms = Kilograms::new(1.0);

/// Tonne (`1e6 g`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "t", dimension = Mass, ratio = 1e6)]
pub struct Tonne;
/// A quantity measured in tonnes.
pub type Tonnes = Quantity<Tonne>;

/// Avoirdupois pound (`453.59237 g` exactly).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "lb", dimension = Mass, ratio = 453.592_37)]
pub struct Pound;
/// A quantity measured in pounds.
pub type Pounds = Quantity<Pound>;

/// Avoirdupois ounce (`1/16 lb`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "oz", dimension = Mass, ratio = 453.592_37 / 16.0)]
pub struct Ounce;
/// A quantity measured in ounces.
pub type Ounces = Quantity<Ounce>;

crate::impl_unit_conversions!(Milligram, Gram, Kilogram, Tonne, Pound, Ounce);

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    #[test]
    fn kilogram_to_gram() {
        assert_abs_diff_eq!(KG.to::<Gram>().value(), 1_000.0, epsilon = 1e-12);
    }

    #[test]
    fn tonne_to_kilogram() {
        let kg: Kilograms = Tonnes::new(2.5).into();
        assert_abs_diff_eq!(kg.value(), 2_500.0, epsilon = 1e-9);
    }

    #[test]
    fn pound_to_ounce() {
        assert_abs_diff_eq!(Pounds::new(1.0).to::<Ounce>().value(), 16.0, epsilon = 1e-12);
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Kilograms::new(72.5)), "72.5 kg");
    }

    proptest! {
        #[test]
        fn prop_roundtrip_kg_lb(v in -1e6..1e6f64) {
            let back = Kilograms::new(v).to::<Pound>().to::<Kilogram>();
            prop_assert!((back.value() - v).abs() <= 1e-9 * v.abs().max(1.0));
        }
    }
}
