//! Frequency units (`1 / Time`).
//!
//! The canonical scaling unit is [`Hertz`]. Inverses of time quantities (`1.0 / Seconds`) carry the unit
//! `Per<Unitless, Second>`, which has the same dimension and converts into any unit here:
//!
//! ```rust
//! use qkind_core::frequency::Hertz;
//! use qkind_core::time::Milliseconds;
//!
//! let f = (1.0 / Milliseconds::new(4.0)).to::<Hertz>();
//! assert!((f.value() - 250.0).abs() < 1e-9);
//! ```

use crate::units::time::Time;
use crate::{Dimensionless, DivDim, Per, Quantity, Unit, Unitless};
use qkind_derive::Unit;

/// Dimension of frequency (`1 / Time`).
pub type FrequencyDim = DivDim<Dimensionless, Time>;

/// Marker trait for any unit whose dimension is [`FrequencyDim`].
pub trait FrequencyUnit: Unit<Dim = FrequencyDim> {}
impl<T: Unit<Dim = FrequencyDim>> FrequencyUnit for T {}

/// Events per time unit `D`, as produced by dividing a scalar by a time quantity.
pub type Rate<D, R = f64> = Quantity<Per<Unitless, D>, R>;

/// Hertz (`1 / s`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "Hz", dimension = FrequencyDim, ratio = 1.0)]
pub struct Hertz;
/// A quantity measured in hertz.
pub type Hertzs = Quantity<Hertz>;

/// Kilohertz (`1e3 Hz`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "kHz", dimension = FrequencyDim, ratio = 1e3)]
pub struct Kilohertz;
/// A quantity measured in kilohertz.
pub type Kilohertzs = Quantity<Kilohertz>;

/// Megahertz (`1e6 Hz`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "MHz", dimension = FrequencyDim, ratio = 1e6)]
pub struct Megahertz;
/// A quantity measured in megahertz.
pub type Megahertzs = Quantity<Megahertz>;

/// Revolutions per minute (`1/60 Hz`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "rpm", dimension = FrequencyDim, ratio = 1.0 / 60.0)]
pub struct RevolutionPerMinute;
/// A quantity measured in revolutions per minute.
pub type RevolutionsPerMinute = Quantity<RevolutionPerMinute>;

crate::impl_unit_conversions!(Hertz, Kilohertz, Megahertz, RevolutionPerMinute);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::{Minute, Second, Seconds};
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    #[test]
    fn kilohertz_to_hertz() {
        let hz: Hertzs = Kilohertzs::new(2.5).into();
        assert_abs_diff_eq!(hz.value(), 2_500.0, epsilon = 1e-9);
    }

    #[test]
    fn rpm_to_hertz() {
        assert_abs_diff_eq!(RevolutionsPerMinute::new(120.0).to::<Hertz>().value(), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn rate_converts_to_frequency_units() {
        let r: Rate<Minute> = Rate::new(30.0);
        assert_abs_diff_eq!(r.to::<Hertz>().value(), 0.5, epsilon = 1e-12);
        let back: Rate<Second> = Hertzs::new(4.0).to();
        assert_abs_diff_eq!(back.value(), 4.0, epsilon = 1e-12);
    }

    #[test]
    fn frequency_times_time_is_dimensionless() {
        let cycles = (Hertzs::new(50.0) * Seconds::new(2.0)).to::<Unitless>();
        assert_abs_diff_eq!(cycles.value(), 100.0, epsilon = 1e-12);
    }

    proptest! {
        #[test]
        fn prop_inverse_period(p in 1e-6..1e6f64) {
            let f = (1.0 / Seconds::new(p)).to::<Hertz>();
            prop_assert!((f.value() * p - 1.0).abs() < 1e-12);
        }
    }
}
