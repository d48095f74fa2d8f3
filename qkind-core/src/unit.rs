//! Unit types and traits.

use crate::dimension::{DimDiv, DimMul, Dimension, Dimensionless, DivDim, MulDim};
use crate::numbers::Representation;
use crate::Quantity;
use core::fmt::{Debug, Display, Formatter, Result};
use core::marker::PhantomData;

/// Trait implemented by every **unit** type.
///
/// * `RATIO` is the conversion factor from this unit to the *canonical scaling unit* of the same dimension.
///   Example: if metres are canonical (`Meter::RATIO == 1.0`), then kilometres use `Kilometer::RATIO == 1000.0`
///   because `1 km = 1000 m`.
///
/// * `SYMBOL` is the printable string (e.g. `"m"` or `"km"`).
///
/// * `Dim` ties the unit to its underlying [`Dimension`].
///
/// # Invariants
///
/// - Implementations should be zero-sized marker types (this crate's built-in units are unit structs with no fields).
/// - `RATIO` should be finite and non-zero.
pub trait Unit: Copy + PartialEq + Debug + 'static {
    /// Unit-to-canonical conversion factor.
    const RATIO: f64;

    /// Dimension to which this unit belongs.
    type Dim: Dimension;

    /// Printable symbol, shown by [`core::fmt::Display`].
    const SYMBOL: &'static str;
}

/// Unit representing the division of two other units.
///
/// `Per<N, D>` corresponds to `N / D`. Its dimension is the exponent-wise difference of the operands' dimensions, so
/// `Per<Meter, Meter>` is dimensionless and converts to [`Unitless`] with [`Quantity::to`].
///
/// A `const` symbol cannot be assembled from the operands' symbols, so `SYMBOL` is empty. `Display` still prints
/// `N/D`, but tag checks ([`Quantity::from_tagged`], the serde helpers) only see the empty tag and cannot tell one
/// composite unit from another.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Per<N: Unit, D: Unit>(PhantomData<(N, D)>);

impl<N: Unit, D: Unit> Unit for Per<N, D>
where
    N::Dim: DimDiv<D::Dim>,
{
    const RATIO: f64 = N::RATIO / D::RATIO;
    type Dim = DivDim<N::Dim, D::Dim>;
    const SYMBOL: &'static str = "";
}

impl<N: Unit, D: Unit, R> Display for Quantity<Per<N, D>, R>
where
    N::Dim: DimDiv<D::Dim>,
    R: Representation + Display,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        if N::SYMBOL.is_empty() {
            write!(f, "{} 1/{}", self.value(), D::SYMBOL)
        } else {
            write!(f, "{} {}/{}", self.value(), N::SYMBOL, D::SYMBOL)
        }
    }
}

/// Unit representing the product of two other units.
///
/// `Prod<A, B>` corresponds to `A · B`; its ratio is the product of the operand ratios. Like [`Per`], it has an
/// empty `SYMBOL`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Prod<A: Unit, B: Unit>(PhantomData<(A, B)>);

impl<A: Unit, B: Unit> Unit for Prod<A, B>
where
    A::Dim: DimMul<B::Dim>,
{
    const RATIO: f64 = A::RATIO * B::RATIO;
    type Dim = MulDim<A::Dim, B::Dim>;
    const SYMBOL: &'static str = "";
}

impl<A: Unit, B: Unit, R> Display for Quantity<Prod<A, B>, R>
where
    A::Dim: DimMul<B::Dim>,
    R: Representation + Display,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{} {}·{}", self.value(), A::SYMBOL, B::SYMBOL)
    }
}

/// Zero-sized marker type for dimensionless quantities.
///
/// `Unitless` represents a dimensionless unit with a conversion ratio of 1.0
/// and an empty symbol. It is used to model the result of simplifying same-unit
/// ratios (e.g., `Meters / Meters`) into a plain "number-like" `Quantity<Unitless>`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Unitless;

impl Unit for Unitless {
    const RATIO: f64 = 1.0;
    type Dim = Dimensionless;
    const SYMBOL: &'static str = "";
}

impl<R: Representation + Display> Display for Quantity<Unitless, R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.value())
    }
}

/// Trait for simplifying composite unit types.
///
/// This allows reducing unit expressions to simpler forms,
/// such as `Per<U, U>` to `Unitless` or `Per<N, Per<N, D>>` to `D`.
pub trait Simplify {
    /// The simplified unit type.
    type Out: Unit;
    /// The representation carried through.
    type Rep: Representation;
    /// Convert this quantity to its simplified unit.
    fn simplify(self) -> Quantity<Self::Out, Self::Rep>;
}

impl<U: Unit, R: Representation> Simplify for Quantity<Per<U, U>, R>
where
    U::Dim: DimDiv<U::Dim>,
{
    type Out = Unitless;
    type Rep = R;
    /// ```rust
    /// use qkind_core::length::Meters;
    /// use qkind_core::{Quantity, Simplify, Unitless};
    ///
    /// let ratio = Meters::new(1.0) / Meters::new(2.0);
    /// let unitless: Quantity<Unitless> = ratio.simplify();
    /// assert!((unitless.value() - 0.5).abs() < 1e-12);
    /// ```
    fn simplify(self) -> Quantity<Unitless, R> {
        Quantity::new(self.value())
    }
}

impl<N: Unit, D: Unit, R: Representation> Simplify for Quantity<Per<N, Per<N, D>>, R>
where
    N::Dim: DimDiv<D::Dim>,
    N::Dim: DimDiv<DivDim<N::Dim, D::Dim>>,
{
    type Out = D;
    type Rep = R;
    fn simplify(self) -> Quantity<D, R> {
        Quantity::new(self.value())
    }
}

impl<U: Unit, R: Representation> Simplify for Quantity<Prod<U, Unitless>, R>
where
    U::Dim: DimMul<Dimensionless>,
{
    type Out = U;
    type Rep = R;
    /// ```rust
    /// use qkind_core::time::Second;
    /// use qkind_core::{Quantity, Simplify, Unitless};
    ///
    /// let t = Quantity::<Second, i64>::new(9);
    /// let same: Quantity<Second, i64> = (t * Quantity::<Unitless, i64>::one()).simplify();
    /// assert_eq!(same, t);
    /// ```
    fn simplify(self) -> Quantity<U, R> {
        Quantity::new(self.value())
    }
}
