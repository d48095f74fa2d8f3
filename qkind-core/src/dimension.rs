//! Dimension types and traits.
//!
//! A dimension is a fixed-length array of integer exponents over the seven base quantities of the ISQ, encoded with
//! `typenum` so that products and quotients are computed by the type checker:
//!
//! | position | base quantity             |
//! |----------|---------------------------|
//! | 0        | length                    |
//! | 1        | mass                      |
//! | 2        | time                      |
//! | 3        | electric current          |
//! | 4        | thermodynamic temperature |
//! | 5        | amount of substance       |
//! | 6        | luminous intensity        |
//!
//! Two dimensions are the same type exactly when every exponent matches, which is what lets the kind lookup in
//! [`crate::downcast`] compare a computed dimension against a declared one.

use core::ops::{Add, BitAnd, Sub};
use typenum::marker_traits::{Bit, Integer};
use typenum::operator_aliases::{And, Diff, Eq as IsEq, Sum};
use typenum::type_operators::IsEqual;
use typenum::{ATerm, TArr, B1, Z0};

/// Marker trait for dimensions.
///
/// Implemented for typenum exponent arrays; use the [`Dim`] alias to spell one.
pub trait Dimension: 'static {}

impl Dimension for ATerm {}
impl<V: Integer + 'static, A: Dimension> Dimension for TArr<V, A> {}

/// A dimension given by its seven base exponents.
///
/// ```rust
/// use core::marker::PhantomData;
/// use qkind_core::{Dim, MulDim};
/// use qkind_core::typenum::{P1, P2, Z0};
///
/// type Length = Dim<P1, Z0, Z0, Z0, Z0, Z0, Z0>;
/// type Area = Dim<P2, Z0, Z0, Z0, Z0, Z0, Z0>;
///
/// let _: PhantomData<MulDim<Length, Length>> = PhantomData::<Area>;
/// ```
pub type Dim<L, M, T, I, O, N, J> = TArr<L, TArr<M, TArr<T, TArr<I, TArr<O, TArr<N, TArr<J, ATerm>>>>>>>;

/// Dimension of pure numbers (every exponent zero).
pub type Dimensionless = Dim<Z0, Z0, Z0, Z0, Z0, Z0, Z0>;

/// Product of two dimensions.
pub trait DimMul<Rhs: Dimension>: Dimension {
    /// Exponent-wise sum.
    type Output: Dimension;
}

impl<A, B> DimMul<B> for A
where
    A: Dimension + Add<B>,
    B: Dimension,
    Sum<A, B>: Dimension,
{
    type Output = Sum<A, B>;
}

/// Quotient of two dimensions.
pub trait DimDiv<Rhs: Dimension>: Dimension {
    /// Exponent-wise difference.
    type Output: Dimension;
}

impl<A, B> DimDiv<B> for A
where
    A: Dimension + Sub<B>,
    B: Dimension,
    Diff<A, B>: Dimension,
{
    type Output = Diff<A, B>;
}

/// Dimension of `A * B`.
pub type MulDim<A, B> = <A as DimMul<B>>::Output;

/// Dimension of `A / B`.
pub type DivDim<N, D> = <N as DimDiv<D>>::Output;

/// Type-level equality of two dimensions.
///
/// `Output` is [`typenum::B1`] when both dimensions carry the same exponents and [`typenum::B0`] otherwise. An
/// associated-type equality bound would simply fail to hold on a mismatch; this always resolves, so it can select a
/// fallback.
pub trait SameDim<Rhs: Dimension>: Dimension {
    /// `B1` for equal dimensions, `B0` otherwise.
    type Output: Bit;
}

impl SameDim<ATerm> for ATerm {
    type Output = B1;
}

impl<V, A, Vr, Ar> SameDim<TArr<Vr, Ar>> for TArr<V, A>
where
    V: Integer + IsEqual<Vr> + 'static,
    Vr: Integer + 'static,
    A: SameDim<Ar>,
    Ar: Dimension,
    IsEq<V, Vr>: BitAnd<<A as SameDim<Ar>>::Output>,
    And<IsEq<V, Vr>, <A as SameDim<Ar>>::Output>: Bit,
{
    type Output = And<IsEq<V, Vr>, <A as SameDim<Ar>>::Output>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use typenum::{Bit, N1, P1, P2, B0};

    type Length = Dim<P1, Z0, Z0, Z0, Z0, Z0, Z0>;
    type Time = Dim<Z0, Z0, P1, Z0, Z0, Z0, Z0>;
    type Area = Dim<P2, Z0, Z0, Z0, Z0, Z0, Z0>;
    type Velocity = Dim<P1, Z0, N1, Z0, Z0, Z0, Z0>;

    fn same_type<A: 'static, B: 'static>() -> bool {
        core::any::TypeId::of::<A>() == core::any::TypeId::of::<B>()
    }

    #[test]
    fn product_adds_exponents() {
        assert!(same_type::<MulDim<Length, Length>, Area>());
    }

    #[test]
    fn quotient_subtracts_exponents() {
        assert!(same_type::<DivDim<Length, Time>, Velocity>());
        assert!(same_type::<DivDim<Length, Length>, Dimensionless>());
    }

    #[test]
    fn inverse_then_product_is_identity() {
        type Inverse = DivDim<Dimensionless, Length>;
        assert!(same_type::<MulDim<Inverse, Length>, Dimensionless>());
    }

    #[test]
    fn same_dim_bits() {
        assert!(<Length as SameDim<Length>>::Output::to_bool());
        assert!(<DivDim<Area, Length> as SameDim<Length>>::Output::to_bool());
        assert!(!<Length as SameDim<Time>>::Output::to_bool());
        assert!(!<Velocity as SameDim<Length>>::Output::to_bool());
        assert!(same_type::<<Dimensionless as SameDim<Length>>::Output, B0>());
    }
}
