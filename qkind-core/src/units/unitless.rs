//! Dimensionless scales.
//!
//! [`Unitless`] is the plain number; the units here are fixed fractions of it. [`Quantity::number`] expresses any of
//! them as a pure number, which is how a kind-quantity takes a remainder by a dimensionless quantity.
//!
//! ```rust
//! use qkind_core::unitless::{Percent, Percents};
//! use qkind_core::{Quantity, Unitless};
//!
//! let p = Percents::new(12.5);
//! assert_eq!(p.number(), 0.125);
//! let n: Quantity<Unitless> = p.into();
//! assert_eq!(n.value(), 0.125);
//! let back: Percents = n.to::<Percent>();
//! assert_eq!(back.value(), 12.5);
//! ```

use crate::{Dimensionless, Quantity, Unitless};
use qkind_derive::Unit;

/// Percent (`1e-2`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "%", dimension = Dimensionless, ratio = 1e-2)]
pub struct Percent;
/// A quantity measured in percent.
pub type Percents = Quantity<Percent>;

/// Per mille (`1e-3`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "‰", dimension = Dimensionless, ratio = 1e-3)]
pub struct Permille;
/// A quantity measured in per mille.
pub type Permilles = Quantity<Permille>;

/// Parts per million (`1e-6`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "ppm", dimension = Dimensionless, ratio = 1e-6)]
pub struct PartsPerMillion;
/// A quantity measured in parts per million.
pub type PartsPerMillions = Quantity<PartsPerMillion>;

crate::impl_unit_conversions!(Unitless, Percent, Permille, PartsPerMillion);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::length::Meters;
    use crate::Unit;
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    #[test]
    fn unitless_from_scalar() {
        let u: Quantity<Unitless> = 1.234_56.into();
        assert_abs_diff_eq!(u.value(), 1.234_56, epsilon = 1e-12);
        assert_eq!(Unitless::RATIO, 1.0);
        assert_eq!(Unitless::SYMBOL, "");
    }

    #[test]
    fn percent_and_permille() {
        let p: Percents = Permilles::new(25.0).into();
        assert_abs_diff_eq!(p.value(), 2.5, epsilon = 1e-12);
        assert_abs_diff_eq!(PartsPerMillions::new(500.0).number(), 5e-4, epsilon = 1e-15);
    }

    #[test]
    fn same_unit_ratio_in_percent() {
        let ratio = Meters::new(1.0) / Meters::new(4.0);
        assert_abs_diff_eq!(ratio.to::<Percent>().value(), 25.0, epsilon = 1e-12);
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Percents::new(50.0)), "50 %");
        assert_eq!(format!("{}", Quantity::<Unitless>::new(42.0)), "42");
    }

    proptest! {
        #[test]
        fn prop_percent_number(v in -1e6..1e6f64) {
            prop_assert!((Percents::new(v).number() - v / 100.0).abs() <= 1e-12 * v.abs().max(1.0));
        }
    }
}
