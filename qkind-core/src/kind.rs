//! Kinds: named meanings for quantities of one dimension.
//!
//! A *base kind* (say `Radius`, over length) owns a *family*: itself plus any number of *derived kinds* with other
//! dimensions (say `Curvature`, over inverse length). When arithmetic on a kind-quantity changes its dimension, the
//! result is looked up in the family of the operand's base kind; see [`crate::downcast`].
//!
//! Kinds are zero-sized marker types, normally declared with `#[derive(Kind)]`:
//!
//! ```rust
//! use qkind_core::length::Length;
//! use qkind_core::Kind;
//! use qkind_derive::Kind;
//!
//! #[derive(Kind)]
//! #[kind(crate = "qkind_core", dimension = Length)]
//! pub enum Width {}
//!
//! assert_eq!(<Width as Kind>::NAME, "width");
//! ```

use crate::dimension::Dimension;
use core::marker::PhantomData;

/// A kind of quantity.
///
/// `Dim` is the dimension every quantity of this kind carries. `Base` is the base kind whose family this kind belongs
/// to; a base kind is its own base.
pub trait Kind: 'static {
    /// Dimension of quantities of this kind.
    type Dim: Dimension;
    /// Root of this kind's family.
    type Base: BaseKind;
    /// Human-readable name, used in diagnostics and tagged serialization.
    const NAME: &'static str;
}

/// A kind that roots a family.
pub trait BaseKind: Kind<Base = Self> {
    /// `Cons<Self, Cons<Derived, .., Nil>>`: the kinds reachable by downcasting from this base.
    type Family: KindList;
}

/// Kinds whose quantities may be negated.
///
/// The derive implements it unless `#[kind(no_negation)]` is given.
pub trait NegatableKind: Kind {}

/// Kinds whose quantities may be stepped with `increment` / `decrement`.
///
/// The derive implements it unless `#[kind(no_step)]` is given.
pub trait SteppableKind: Kind {}

/// `Self` and `K` share a base kind.
///
/// Arithmetic and comparison between kind-quantities is only defined for equivalent kinds.
pub trait EquivalentTo<K: Kind>: Kind {}

impl<K1, K2> EquivalentTo<K2> for K1
where
    K2: Kind,
    K1: Kind<Base = K2::Base>,
{
}

/// A type-level list of kinds.
pub trait KindList: 'static {}

/// The empty kind list.
pub enum Nil {}

/// A kind list with head `K`.
pub struct Cons<K, Rest>(PhantomData<fn() -> (K, Rest)>);

impl KindList for Nil {}
impl<K: Kind, Rest: KindList> KindList for Cons<K, Rest> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::length::Length;
    use crate::time::Time;
    use crate::{DivDim, Dimensionless};

    enum Radius {}
    enum Curvature {}
    enum Elapsed {}

    impl Kind for Radius {
        type Dim = Length;
        type Base = Radius;
        const NAME: &'static str = "radius";
    }
    impl BaseKind for Radius {
        type Family = Cons<Radius, Cons<Curvature, Nil>>;
    }

    impl Kind for Curvature {
        type Dim = DivDim<Dimensionless, Length>;
        type Base = Radius;
        const NAME: &'static str = "curvature";
    }

    impl Kind for Elapsed {
        type Dim = Time;
        type Base = Elapsed;
        const NAME: &'static str = "elapsed";
    }
    impl BaseKind for Elapsed {
        type Family = Cons<Elapsed, Nil>;
    }

    fn equivalent<A: EquivalentTo<B>, B: Kind>() {}

    #[test]
    fn family_members_are_equivalent() {
        equivalent::<Radius, Radius>();
        equivalent::<Curvature, Radius>();
        equivalent::<Radius, Curvature>();
        equivalent::<Elapsed, Elapsed>();
    }

    #[test]
    fn names() {
        assert_eq!(Radius::NAME, "radius");
        assert_eq!(<<Curvature as Kind>::Base as Kind>::NAME, "radius");
    }
}
