//! Numeric representations and the capabilities quantity operators are gated on.
//!
//! [`Representation`] is the contract every quantity value type satisfies. The remaining traits name one capability
//! each and are implemented automatically for any representation that has it, so an operator on
//! [`Quantity`](crate::Quantity) or [`QuantityKind`](crate::QuantityKind) exists exactly when the numbers underneath
//! support it.

use crate::unit::Unit;
use core::fmt::Debug;
use core::ops::{AddAssign, Div, MulAssign, Neg, Rem, RemAssign, SubAssign};
use num_traits::{One, Zero};

/// The value type stored inside a quantity.
///
/// Implemented for every primitive integer and float. Quantities themselves never implement it, which keeps scalar
/// operands and quantity operands apart in operator impls.
pub trait Representation: Copy + PartialEq + PartialOrd + Debug + 'static {
    /// Multiplies the value by a unit ratio.
    ///
    /// Integers round to the nearest value. A factor of exactly `1.0` returns `self` untouched.
    fn scale(self, factor: f64) -> Self;
}

#[inline]
fn round(x: f64) -> f64 {
    #[cfg(feature = "std")]
    {
        x.round()
    }
    #[cfg(not(feature = "std"))]
    {
        libm::round(x)
    }
}

macro_rules! impl_float_representation {
    ($($t:ty),* $(,)?) => {$(
        impl Representation for $t {
            #[inline]
            fn scale(self, factor: f64) -> Self {
                if factor == 1.0 {
                    self
                } else {
                    (self as f64 * factor) as $t
                }
            }
        }

        impl<Src: Unit, Dst: Unit<Dim = Src::Dim>> ExactRescale<Src, Dst> for $t {}
    )*};
}

macro_rules! impl_integer_representation {
    ($($t:ty),* $(,)?) => {$(
        impl Representation for $t {
            #[inline]
            fn scale(self, factor: f64) -> Self {
                if factor == 1.0 {
                    self
                } else {
                    round(self as f64 * factor) as $t
                }
            }
        }

        impl<U: Unit> ExactRescale<U, U> for $t {}
    )*};
}

/// Representations that re-express a value given in unit `Src` in unit `Dst` without rounding.
///
/// Floats rescale between any two units of one dimension. Integers only between a unit and itself, because any other
/// ratio may round. Implicit conversions ([`ConvertInto`](crate::ConvertInto)) and mixed-unit operators on
/// [`Quantity`](crate::Quantity) require it; [`Quantity::to`](crate::Quantity::to) stays available for explicit,
/// possibly rounding conversions.
pub trait ExactRescale<Src: Unit, Dst: Unit>: Representation {}

impl_float_representation!(f32, f64);
impl_integer_representation!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// Representations that can step by one in both directions.
pub trait NumberLine: Representation {
    /// Adds one in place.
    fn step_up(&mut self);
    /// Subtracts one in place.
    fn step_down(&mut self);
}

impl<T> NumberLine for T
where
    T: Representation + One + AddAssign + SubAssign,
{
    #[inline]
    fn step_up(&mut self) {
        *self += T::one();
    }

    #[inline]
    fn step_down(&mut self) {
        *self -= T::one();
    }
}

/// Representations with a zero and a negation (signed integers and floats).
pub trait Negative: Representation + Zero + Neg<Output = Self> {}

impl<T> Negative for T where T: Representation + Zero + Neg<Output = T> {}

/// Representations supporting `self % rhs`.
pub trait ModuloWith<Rhs = Self>: Representation + Rem<Rhs, Output = Self> {}

impl<T, Rhs> ModuloWith<Rhs> for T where T: Representation + Rem<Rhs, Output = T> {}

/// Representations supporting `self %= rhs`.
pub trait CompoundModuloWith<Rhs = Self>: ModuloWith<Rhs> + RemAssign<Rhs> {}

impl<T, Rhs> CompoundModuloWith<Rhs> for T where T: ModuloWith<Rhs> + RemAssign<Rhs> {}

/// Representations closed under `one / x` and `x *= y`.
pub trait SetWithInverse: Representation + One + MulAssign + Div<Output = Self> {}

impl<T> SetWithInverse for T where T: Representation + One + MulAssign + Div<Output = T> {}
