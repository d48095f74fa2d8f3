//! Binary operators between kind-quantities, quantities and scalars.
//!
//! | left          | op          | right                  | result                                   |
//! |---------------|-------------|------------------------|------------------------------------------|
//! | `QK<K>`       | `+ - %`     | `QK<K2>`, `K2 ≡ K`     | `QK<K>`                                  |
//! | `QK<K>`       | `* / %`     | scalar                 | `QK<K>`                                  |
//! | scalar        | `*`         | `QK<K>`                | `QK<K>`                                  |
//! | scalar        | `/`         | `QK<K>`                | downcast of the inverse                  |
//! | `QK<K>`       | `* /`       | `Quantity`             | downcast of the product / quotient       |
//! | `Quantity`    | `* /`       | `QK<K>`                | downcast of the product / quotient       |
//! | `QK<K>`       | `%`         | dimensionless quantity | `QK<K>`, modulo the quantity's number    |
//!
//! "Downcast" means the result is tagged with the kind of matching dimension in `K`'s family, or left as a plain
//! [`Quantity`] when the family has none (see [`crate::downcast`]).

use crate::dimension::Dimensionless;
use crate::downcast::{downcasted, make_quantity_kind, DimOf, Downcast, Downcasted};
use crate::kind::{EquivalentTo, Kind};
use crate::numbers::{ExactRescale, Representation};
use crate::quantity::{AnyQuantity, Quantity};
use crate::quantity_kind::{QuantityKind, Rekinded};
use crate::unit::{Unit, Unitless};
use core::ops::{Add, Div, Mul, Rem, Sub};

type SumOf<A, B> = <A as Add<B>>::Output;
type DiffOf<A, B> = <A as Sub<B>>::Output;
type ProdOf<A, B> = <A as Mul<B>>::Output;
type QuotOf<A, B> = <A as Div<B>>::Output;
type RemOf<A, B> = <A as Rem<B>>::Output;

// ─────────────────────────────────────────────────────────────────────────────
// Kind ⊕ kind (equivalent kinds only)
// ─────────────────────────────────────────────────────────────────────────────

macro_rules! impl_equivalent_op {
    ($Trait:ident, $method:ident, $Out:ident, $op:tt) => {
        impl<K, U, R, K2, U2, R2> $Trait<QuantityKind<K2, U2, R2>> for QuantityKind<K, U, R>
        where
            K: Kind,
            U: Unit,
            R: Representation,
            K2: EquivalentTo<K>,
            U2: Unit,
            R2: Representation,
            Quantity<U, R>: $Trait<Quantity<U2, R2>>,
            $Out<Quantity<U, R>, Quantity<U2, R2>>: AnyQuantity,
        {
            type Output = Rekinded<K, $Out<Quantity<U, R>, Quantity<U2, R2>>>;
            #[inline]
            fn $method(self, rhs: QuantityKind<K2, U2, R2>) -> Self::Output {
                make_quantity_kind::<K, _>(self.common() $op rhs.common())
            }
        }
    };
}

impl_equivalent_op!(Add, add, SumOf, +);
impl_equivalent_op!(Sub, sub, DiffOf, -);
impl_equivalent_op!(Rem, rem, RemOf, %);

// ─────────────────────────────────────────────────────────────────────────────
// Kind ⊕ scalar
// ─────────────────────────────────────────────────────────────────────────────

macro_rules! impl_scalar_rhs {
    ($Trait:ident, $method:ident, $Out:ident, $op:tt) => {
        impl<K, U, R, S> $Trait<S> for QuantityKind<K, U, R>
        where
            K: Kind,
            U: Unit,
            R: Representation,
            S: Representation,
            Quantity<U, R>: $Trait<S>,
            $Out<Quantity<U, R>, S>: AnyQuantity,
        {
            type Output = Rekinded<K, $Out<Quantity<U, R>, S>>;
            #[inline]
            fn $method(self, rhs: S) -> Self::Output {
                make_quantity_kind::<K, _>(self.common() $op rhs)
            }
        }
    };
}

impl_scalar_rhs!(Mul, mul, ProdOf, *);
impl_scalar_rhs!(Div, div, QuotOf, /);
impl_scalar_rhs!(Rem, rem, RemOf, %);

/// Scalar on the left; the orphan rule wants one impl per primitive.
macro_rules! impl_scalar_lhs {
    ($($t:ty),* $(,)?) => {$(
        impl<K: Kind, U: Unit> Mul<QuantityKind<K, U, $t>> for $t
        where
            $t: Mul<Quantity<U, $t>>,
            ProdOf<$t, Quantity<U, $t>>: AnyQuantity,
        {
            type Output = Rekinded<K, ProdOf<$t, Quantity<U, $t>>>;
            #[inline]
            fn mul(self, rhs: QuantityKind<K, U, $t>) -> Self::Output {
                make_quantity_kind::<K, _>(self * rhs.common())
            }
        }

        impl<K: Kind, U: Unit> Div<QuantityKind<K, U, $t>> for $t
        where
            $t: Div<Quantity<U, $t>>,
            QuotOf<$t, Quantity<U, $t>>: AnyQuantity,
            K::Base: Downcast<DimOf<QuotOf<$t, Quantity<U, $t>>>>,
        {
            type Output = Downcasted<K, QuotOf<$t, Quantity<U, $t>>>;
            #[inline]
            fn div(self, rhs: QuantityKind<K, U, $t>) -> Self::Output {
                downcasted::<K, _>(self / rhs.common())
            }
        }
    )*};
}

impl_scalar_lhs!(f32, f64, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

// ─────────────────────────────────────────────────────────────────────────────
// Kind ⊗ quantity (dimension changes, result is downcast)
// ─────────────────────────────────────────────────────────────────────────────

macro_rules! impl_quantity_op {
    ($Trait:ident, $method:ident, $Out:ident, $op:tt) => {
        impl<K, U, R, U2, R2> $Trait<Quantity<U2, R2>> for QuantityKind<K, U, R>
        where
            K: Kind,
            U: Unit,
            R: Representation,
            U2: Unit,
            R2: Representation,
            Quantity<U, R>: $Trait<Quantity<U2, R2>>,
            $Out<Quantity<U, R>, Quantity<U2, R2>>: AnyQuantity,
            K::Base: Downcast<DimOf<$Out<Quantity<U, R>, Quantity<U2, R2>>>>,
        {
            type Output = Downcasted<K, $Out<Quantity<U, R>, Quantity<U2, R2>>>;
            #[inline]
            fn $method(self, rhs: Quantity<U2, R2>) -> Self::Output {
                downcasted::<K, _>(self.common() $op rhs)
            }
        }

        impl<K, U, R, U2, R2> $Trait<QuantityKind<K, U, R>> for Quantity<U2, R2>
        where
            K: Kind,
            U: Unit,
            R: Representation,
            U2: Unit,
            R2: Representation,
            Quantity<U2, R2>: $Trait<Quantity<U, R>>,
            $Out<Quantity<U2, R2>, Quantity<U, R>>: AnyQuantity,
            K::Base: Downcast<DimOf<$Out<Quantity<U2, R2>, Quantity<U, R>>>>,
        {
            type Output = Downcasted<K, $Out<Quantity<U2, R2>, Quantity<U, R>>>;
            #[inline]
            fn $method(self, rhs: QuantityKind<K, U, R>) -> Self::Output {
                downcasted::<K, _>(self $op rhs.common())
            }
        }
    };
}

impl_quantity_op!(Mul, mul, ProdOf, *);
impl_quantity_op!(Div, div, QuotOf, /);

/// `qk % d` for a dimensionless `d`, taken modulo `d` as a pure number.
///
/// The divisor is rescaled to [`Unitless`] first, so integer divisors must already be unitless: a rounded
/// `Percent` divisor could become zero.
///
/// ```compile_fail
/// use qkind_core::length::{Length, Meter};
/// use qkind_core::unitless::Percent;
/// use qkind_core::{Quantity, QuantityKind};
/// use qkind_derive::Kind;
///
/// #[derive(Kind)]
/// #[kind(crate = "qkind_core", dimension = Length)]
/// pub enum Radius {}
///
/// let r = QuantityKind::<Radius, Meter, i32>::new(Quantity::<Meter, i32>::new(7));
/// let _ = r % Quantity::<Percent, i32>::new(40);
/// ```
impl<K, U, R, D, R2> Rem<Quantity<D, R2>> for QuantityKind<K, U, R>
where
    K: Kind,
    U: Unit,
    R: Representation,
    D: Unit<Dim = Dimensionless>,
    R2: ExactRescale<D, Unitless>,
    Quantity<U, R>: Rem<R2>,
    RemOf<Quantity<U, R>, R2>: AnyQuantity,
{
    type Output = Rekinded<K, RemOf<Quantity<U, R>, R2>>;
    #[inline]
    fn rem(self, rhs: Quantity<D, R2>) -> Self::Output {
        make_quantity_kind::<K, _>(self.common() % rhs.number())
    }
}

#[cfg(test)]
mod tests {
    use crate::length::{Kilometer, Kilometers, Length, Meter, Meters};
    use crate::time::{Second, Seconds, Time};
    use crate::unitless::Percents;
    use crate::{DivDim, Dimensionless, MulDim, Per, Prod, Quantity, QuantityKind, Unitless};
    use approx::assert_relative_eq;
    use proptest::prelude::*;
    use qkind_derive::Kind;

    #[derive(Kind)]
    #[kind(crate = "crate", dimension = Length, derived(Curvature, Sweep))]
    enum Radius {}

    #[derive(Kind)]
    #[kind(crate = "crate", base = Radius, dimension = DivDim<Dimensionless, Length>)]
    enum Curvature {}

    #[derive(Kind)]
    #[kind(crate = "crate", base = Radius, dimension = MulDim<Length, Length>)]
    enum Sweep {}

    #[derive(Kind)]
    #[kind(crate = "crate", dimension = Time, derived(Rate))]
    enum Period {}

    #[derive(Kind)]
    #[kind(crate = "crate", base = Period, dimension = DivDim<Dimensionless, Time>)]
    enum Rate {}

    type Radii = QuantityKind<Radius, Meter>;

    fn radius(v: f64) -> Radii {
        Radii::new(Meters::new(v))
    }

    #[test]
    fn same_kind_sum_and_difference() {
        let a = radius(3.0);
        let b = radius(2.0);
        let s: Radii = a + b;
        let d: Radii = a - b;
        assert_relative_eq!(s.value(), 5.0);
        assert_relative_eq!(d.value(), 1.0);
        assert_relative_eq!((a % b).value(), 1.0);
    }

    #[test]
    fn derived_kinds_add_within_their_kind() {
        let a: QuantityKind<Curvature, Per<Unitless, Meter>> = 1.0 / radius(2.0);
        let b: QuantityKind<Curvature, Per<Unitless, Meter>> = 1.0 / radius(4.0);
        let sum: QuantityKind<Curvature, Per<Unitless, Meter>> = a + b;
        assert_relative_eq!(sum.value(), 0.75);
        assert_eq!(sum.kind_name(), "curvature");
    }

    #[test]
    fn scalar_operands_keep_kind() {
        let r = radius(5.0);
        let m: Radii = r * 2.0;
        let m2: Radii = 2.0 * r;
        let d: Radii = r / 2.0;
        let rem: Radii = r % 3.0;
        assert_relative_eq!(m.value(), 10.0);
        assert_relative_eq!(m2.value(), 10.0);
        assert_relative_eq!(d.value(), 2.5);
        assert_relative_eq!(rem.value(), 2.0);
    }

    #[test]
    fn scalar_over_kind_downcasts() {
        let c: QuantityKind<Curvature, Per<Unitless, Meter>> = 1.0 / radius(4.0);
        assert_relative_eq!(c.value(), 0.25);
        assert_eq!(c.kind_name(), "curvature");
    }

    #[test]
    fn quantity_operands_downcast() {
        let s: QuantityKind<Sweep, Prod<Meter, Meter>> = radius(2.0) * Meters::new(3.0);
        assert_relative_eq!(s.value(), 6.0);
        let s2: QuantityKind<Sweep, Prod<Meter, Meter>> = Meters::new(3.0) * radius(2.0);
        assert_relative_eq!(s2.value(), 6.0);

        let ratio: Quantity<Per<Meter, Meter>> = radius(6.0) / Meters::new(3.0);
        assert_relative_eq!(ratio.value(), 2.0);

        let c: QuantityKind<Curvature, Per<Unitless, Meter>> = Quantity::<Unitless>::new(1.0) / radius(5.0);
        assert_relative_eq!(c.value(), 0.2);
    }

    #[test]
    fn unknown_dimension_falls_back_to_quantity() {
        let v: Quantity<Per<Meter, Second>> = radius(10.0) / Seconds::new(4.0);
        assert_relative_eq!(v.value(), 2.5);
    }

    #[test]
    fn period_and_rate_roundtrip() {
        let p = QuantityKind::<Period, Second>::new(Seconds::new(0.5));
        let f: QuantityKind<Rate, Per<Unitless, Second>> = 1.0 / p;
        assert_relative_eq!(f.value(), 2.0);
        let back: QuantityKind<Period, Per<Unitless, Per<Unitless, Second>>> = 1.0 / f;
        assert_relative_eq!(back.value(), 0.5);
        let plain: Quantity<Per<Meter, Second>> = Meters::new(1.0) / p;
        assert_relative_eq!(plain.value(), 2.0);
    }

    #[test]
    fn remainder_by_dimensionless_quantity() {
        let r = radius(10.0);
        let rem: Radii = r % Percents::new(400.0);
        assert_relative_eq!(rem.value(), 2.0);

        let n = QuantityKind::<Radius, Meter, i32>::new(Quantity::<Meter, i32>::new(7));
        let rem = n % Quantity::<Unitless, i32>::new(4);
        assert_eq!(rem.value(), 3);
    }

    #[test]
    fn mixed_units_combine_in_left_unit() {
        let km = QuantityKind::<Radius, Kilometer>::new(Kilometers::new(1.5));
        let sum: Radii = radius(500.0) + km;
        assert_relative_eq!(sum.value(), 2000.0);
        let diff: QuantityKind<Radius, Kilometer> = km - radius(500.0);
        assert_relative_eq!(diff.value(), 1.0);
        assert!(radius(1500.0) == km);
        assert!(radius(1000.0) < km);
    }

    #[test]
    fn integer_kind_quantities() {
        let a = QuantityKind::<Radius, Meter, i32>::new(Quantity::<Meter, i32>::new(17));
        let b = QuantityKind::<Radius, Meter, i32>::new(Quantity::<Meter, i32>::new(5));
        assert_eq!((a + b).value(), 22);
        assert_eq!((a - b).value(), 12);
        assert_eq!((a % b).value(), 2);
        assert_eq!((a * 3).value(), 51);
        assert_eq!((3 * a).value(), 51);
        assert_eq!((a / 4).value(), 4);
        assert_eq!((a % 6).value(), 5);
    }

    #[test]
    fn converting_into_kind_unit() {
        let km = QuantityKind::<Radius, Kilometer>::new(Kilometers::new(1.5));
        let m: Radii = km.into_equivalent();
        assert_relative_eq!((m + radius(500.0)).value(), 2000.0);
    }

    proptest! {
        #[test]
        fn prop_scalar_mul_commutes(v in -1e6..1e6f64, s in -1e3..1e3f64) {
            prop_assert_eq!((radius(v) * s).value(), (s * radius(v)).value());
        }

        #[test]
        fn prop_inverse_downcasts_to_curvature(v in 1e-3..1e6f64) {
            let c: QuantityKind<Curvature, Per<Unitless, Meter>> = 1.0 / radius(v);
            prop_assert!((c.value() * v - 1.0).abs() < 1e-12);
        }

        #[test]
        fn prop_sum_matches_common(a in -1e9..1e9f64, b in -1e9..1e9f64) {
            prop_assert_eq!((radius(a) + radius(b)).common(), Meters::new(a) + Meters::new(b));
        }
    }
}
