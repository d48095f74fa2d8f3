//! Macros for defining conversions between units.

/// Generates `From` implementations between every pair of the listed units, for any representation.
///
/// Each unit must share a dimension with the others. The generated conversions go through
/// [`Quantity::to`](crate::Quantity::to), so integer representations round.
///
/// ```rust
/// use qkind_core::length::{Kilometers, Meters};
///
/// let m: Meters = Kilometers::new(2.0).into();
/// assert_eq!(m.value(), 2000.0);
/// ```
#[macro_export]
macro_rules! impl_unit_conversions {
    ($unit:ty) => {};

    ($first:ty, $($rest:ty),+ $(,)?) => {
        $(
            impl<R: $crate::Representation> From<$crate::Quantity<$first, R>> for $crate::Quantity<$rest, R> {
                #[inline]
                fn from(value: $crate::Quantity<$first, R>) -> Self {
                    value.to::<$rest>()
                }
            }

            impl<R: $crate::Representation> From<$crate::Quantity<$rest, R>> for $crate::Quantity<$first, R> {
                #[inline]
                fn from(value: $crate::Quantity<$rest, R>) -> Self {
                    value.to::<$first>()
                }
            }
        )+

        $crate::impl_unit_conversions!($($rest),+);
    };
}
