//! Resolution of the kind that results from a dimension-changing operation.
//!
//! `DowncastKind<B, D>` walks the family of base kind `B` and yields the first member whose dimension equals `D`.
//! When no member matches, it yields [`Unkinded`], and wrapping a quantity with `Unkinded` gives back the plain
//! [`Quantity`]. Everything here is resolved by the type checker.
//!
//! ```rust
//! use qkind_core::downcast::{DowncastKind, Unkinded};
//! use qkind_core::length::Length;
//! use qkind_core::time::Time;
//! use qkind_core::{DivDim, Dimensionless};
//! use qkind_derive::Kind;
//! use core::marker::PhantomData;
//!
//! #[derive(Kind)]
//! #[kind(crate = "qkind_core", dimension = Length, derived(Curvature))]
//! pub enum Radius {}
//!
//! #[derive(Kind)]
//! #[kind(crate = "qkind_core", base = Radius, dimension = DivDim<Dimensionless, Length>)]
//! pub enum Curvature {}
//!
//! let _: PhantomData<DowncastKind<Radius, Length>> = PhantomData::<Radius>;
//! let _: PhantomData<DowncastKind<Radius, DivDim<Dimensionless, Length>>> = PhantomData::<Curvature>;
//! let _: PhantomData<DowncastKind<Radius, Time>> = PhantomData::<Unkinded>;
//! ```

use crate::dimension::{Dimension, SameDim};
use crate::kind::{BaseKind, Cons, Kind, KindList, Nil};
use crate::numbers::Representation;
use crate::quantity::{AnyQuantity, Quantity};
use crate::quantity_kind::QuantityKind;
use crate::unit::Unit;
use typenum::{B0, B1};

mod private {
    /// Unnameable outside this crate, so only the crate can call [`super::KindSlot::wrap`].
    pub struct Token;
}

/// Lookup result meaning "no kind in the family has this dimension".
pub enum Unkinded {}

/// Outcome of a kind lookup: either a [`Kind`] or [`Unkinded`].
pub trait KindSlot: 'static {
    /// What a quantity becomes once tagged with this slot.
    type Wrap<U: Unit, R: Representation>;

    #[doc(hidden)]
    fn wrap<U: Unit, R: Representation>(q: Quantity<U, R>, token: private::Token) -> Self::Wrap<U, R>;
}

impl<K: Kind> KindSlot for K {
    type Wrap<U: Unit, R: Representation> = QuantityKind<K, U, R>;

    #[inline]
    fn wrap<U: Unit, R: Representation>(q: Quantity<U, R>, _: private::Token) -> QuantityKind<K, U, R> {
        QuantityKind::from_parts(q)
    }
}

impl KindSlot for Unkinded {
    type Wrap<U: Unit, R: Representation> = Quantity<U, R>;

    #[inline]
    fn wrap<U: Unit, R: Representation>(q: Quantity<U, R>, _: private::Token) -> Quantity<U, R> {
        q
    }
}

/// Type-level `if`: `B1` picks `T`, `B0` picks `F`.
pub trait Select<T: KindSlot, F: KindSlot> {
    /// The chosen slot.
    type Output: KindSlot;
}

impl<T: KindSlot, F: KindSlot> Select<T, F> for B1 {
    type Output = T;
}

impl<T: KindSlot, F: KindSlot> Select<T, F> for B0 {
    type Output = F;
}

/// First member of a kind list whose dimension is `D`.
pub trait Lookup<D: Dimension>: KindList {
    /// The matching kind, or [`Unkinded`].
    type Slot: KindSlot;
}

impl<D: Dimension> Lookup<D> for Nil {
    type Slot = Unkinded;
}

impl<D, K, Rest> Lookup<D> for Cons<K, Rest>
where
    D: SameDim<K::Dim>,
    K: Kind,
    Rest: Lookup<D>,
    <D as SameDim<K::Dim>>::Output: Select<K, Rest::Slot>,
{
    type Slot = <<D as SameDim<K::Dim>>::Output as Select<K, Rest::Slot>>::Output;
}

/// Base kinds that can resolve a kind for dimension `D`.
pub trait Downcast<D: Dimension>: BaseKind {
    /// The kind of dimension `D` in this family, or [`Unkinded`].
    type Slot: KindSlot;
}

impl<B, D> Downcast<D> for B
where
    B: BaseKind,
    D: Dimension,
    B::Family: Lookup<D>,
{
    type Slot = <B::Family as Lookup<D>>::Slot;
}

/// The kind of dimension `D` in the family of base kind `B`, or [`Unkinded`].
pub type DowncastKind<B, D> = <B as Downcast<D>>::Slot;

/// Dimension of a quantity type.
pub type DimOf<Q> = <<Q as AnyQuantity>::Unit as Unit>::Dim;

/// Result of tagging quantity `Q` with the kind its dimension resolves to in the family of `K`.
pub type Downcasted<K, Q> = <DowncastKind<<K as Kind>::Base, DimOf<Q>> as KindSlot>::Wrap<
    <Q as AnyQuantity>::Unit,
    <Q as AnyQuantity>::Rep,
>;

/// Re-tags `q` with the kind found for its dimension in the family of `K`'s base kind, or leaves it un-kinded.
#[inline]
pub fn downcasted<K, Q>(q: Q) -> Downcasted<K, Q>
where
    K: Kind,
    Q: AnyQuantity,
    K::Base: Downcast<DimOf<Q>>,
{
    <DowncastKind<K::Base, DimOf<Q>> as KindSlot>::wrap(q.into_quantity(), private::Token)
}

/// Re-tags a quantity produced by a dimension-preserving operation with kind `K`.
#[inline]
pub(crate) fn make_quantity_kind<K, Q>(q: Q) -> QuantityKind<K, Q::Unit, Q::Rep>
where
    K: Kind,
    Q: AnyQuantity,
{
    QuantityKind::from_parts(q.into_quantity())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::length::{Length, Meter, Meters};
    use crate::time::{Second, Time};
    use crate::{DivDim, Dimensionless, MulDim, Per, Prod};
    use approx::assert_relative_eq;
    use core::any::TypeId;
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

    fn is<A: 'static, B: 'static>() -> bool {
        TypeId::of::<A>() == TypeId::of::<B>()
    }

    #[test]
    fn lookup_finds_base_and_derived() {
        assert!(is::<DowncastKind<Radius, Length>, Radius>());
        assert!(is::<DowncastKind<Radius, DivDim<Dimensionless, Length>>, Curvature>());
        assert!(is::<DowncastKind<Radius, MulDim<Length, Length>>, Sweep>());
    }

    #[test]
    fn lookup_falls_back_to_unkinded() {
        assert!(is::<DowncastKind<Radius, Time>, Unkinded>());
        assert!(is::<DowncastKind<Radius, Dimensionless>, Unkinded>());
    }

    #[test]
    fn downcasted_wraps_matching_kind() {
        let inv = 1.0 / Meters::new(4.0);
        let c: QuantityKind<Curvature, Per<crate::Unitless, Meter>> = downcasted::<Radius, _>(inv);
        assert_relative_eq!(c.value(), 0.25);

        let area = Meters::new(2.0) * Meters::new(3.0);
        let s: QuantityKind<Sweep, Prod<Meter, Meter>> = downcasted::<Curvature, _>(area);
        assert_relative_eq!(s.value(), 6.0);
    }

    #[test]
    fn downcasted_leaves_unknown_dimensions_plain() {
        let v = Meters::new(6.0) / crate::time::Seconds::new(2.0);
        let plain: Quantity<Per<Meter, Second>> = downcasted::<Radius, _>(v);
        assert_relative_eq!(plain.value(), 3.0);
    }
}
