//! Quantity type and its implementations.

use crate::dimension::{DimDiv, DimMul, Dimensionless};
use crate::error::{TagError, TagResult};
use crate::numbers::{CompoundModuloWith, ExactRescale, ModuloWith, Negative, NumberLine, Representation, SetWithInverse};
use crate::unit::{Per, Prod, Unit, Unitless};
use core::cmp::Ordering;
use core::hash::{Hash, Hasher};
use core::marker::PhantomData;
use core::ops::*;
use num_traits::{Bounded, One, Signed, Zero};

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A quantity with a specific unit.
///
/// `Quantity<U, R>` wraps a value of representation `R` (default `f64`) together with phantom type information about
/// its unit `U`. This enables compile-time dimensional analysis while maintaining zero runtime cost.
///
/// Every operator is only implemented when the representation supports it: `-q` needs a signed `R`, `q % s` needs
/// `R: Rem`, and so on.
///
/// # Examples
///
/// ```rust
/// use qkind_core::{Dim, Quantity, Unit};
/// use qkind_core::typenum::{P1, Z0};
///
/// type Length = Dim<P1, Z0, Z0, Z0, Z0, Z0, Z0>;
///
/// #[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
/// pub enum Meter {}
/// impl Unit for Meter {
///     const RATIO: f64 = 1.0;
///     type Dim = Length;
///     const SYMBOL: &'static str = "m";
/// }
///
/// let x = Quantity::<Meter>::new(5.0);
/// let y = Quantity::<Meter>::new(3.0);
/// let sum = x + y;
/// assert_eq!(sum.value(), 8.0);
///
/// let n = Quantity::<Meter, i32>::new(7);
/// assert_eq!((n % 4).value(), 3);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Quantity<U: Unit, R: Representation = f64>(R, PhantomData<U>);

impl<U: Unit> Quantity<U, f64> {
    /// A constant representing NaN for this quantity type.
    ///
    /// ```rust
    /// use qkind_core::length::Meters;
    /// assert!(Meters::NAN.value().is_nan());
    /// ```
    pub const NAN: Self = Self::new(f64::NAN);
}

impl<U: Unit, R: Representation> Quantity<U, R> {
    /// Creates a new quantity with the given value.
    ///
    /// ```rust
    /// use qkind_core::length::Meters;
    /// let d = Meters::new(3.0);
    /// assert_eq!(d.value(), 3.0);
    /// ```
    #[inline]
    pub const fn new(value: R) -> Self {
        Self(value, PhantomData)
    }

    /// Returns the raw numeric value.
    ///
    /// ```rust
    /// use qkind_core::time::Seconds;
    /// let t = Seconds::new(2.5);
    /// assert_eq!(t.value(), 2.5);
    /// ```
    #[inline]
    pub fn value(self) -> R {
        self.0
    }

    /// Converts this quantity to another unit of the same dimension.
    ///
    /// ```rust
    /// use qkind_core::length::{Kilometers, Meter};
    ///
    /// let km = Kilometers::new(1.0);
    /// assert_eq!(km.to::<Meter>().value(), 1000.0);
    /// ```
    #[inline]
    pub fn to<T: Unit<Dim = U::Dim>>(self) -> Quantity<T, R> {
        Quantity::new(self.0.scale(U::RATIO / T::RATIO))
    }

    /// Changes the representation without loss (`R2: From<R>`).
    ///
    /// ```rust
    /// use qkind_core::length::Meter;
    /// use qkind_core::Quantity;
    ///
    /// let n = Quantity::<Meter, i32>::new(3);
    /// let x: Quantity<Meter, f64> = n.cast();
    /// assert_eq!(x.value(), 3.0);
    /// ```
    #[inline]
    pub fn cast<R2: Representation + From<R>>(self) -> Quantity<U, R2> {
        Quantity::new(R2::from(self.0))
    }

    /// Builds a quantity from a value that arrives with a textual unit tag.
    ///
    /// The tag must match `U::SYMBOL`; no conversion is attempted. Composite units ([`Per`], [`Prod`]) have an
    /// empty symbol and accept only the empty tag.
    ///
    /// ```rust
    /// use qkind_core::length::Meters;
    ///
    /// assert!(Meters::from_tagged(2.0, "m").is_ok());
    /// assert!(Meters::from_tagged(2.0, "km").is_err());
    /// ```
    pub fn from_tagged(value: R, unit: &str) -> TagResult<'_, Self> {
        if unit == U::SYMBOL {
            Ok(Self::new(value))
        } else {
            Err(TagError::UnitMismatch {
                expected: U::SYMBOL,
                found: unit,
            })
        }
    }

    /// Returns the absolute value.
    ///
    /// ```rust
    /// use qkind_core::length::Meters;
    /// let a = Meters::new(-10.0);
    /// assert_eq!(a.abs().value(), 10.0);
    /// ```
    #[inline]
    pub fn abs(self) -> Self
    where
        R: Signed,
    {
        Self::new(Signed::abs(&self.0))
    }

    /// `1 / self`, in the inverse unit.
    #[inline]
    pub fn inverse(self) -> Quantity<Per<Unitless, U>, R>
    where
        R: SetWithInverse,
        Dimensionless: DimDiv<U::Dim>,
    {
        Quantity::new(R::one() / self.0)
    }

    /// Quantity whose value is the representation's zero.
    #[inline]
    pub fn zero() -> Self
    where
        R: Zero,
    {
        Self::new(R::zero())
    }

    /// Quantity whose value is the representation's one.
    #[inline]
    pub fn one() -> Self
    where
        R: One,
    {
        Self::new(R::one())
    }

    /// Smallest representable quantity.
    #[inline]
    pub fn min() -> Self
    where
        R: Bounded,
    {
        Self::new(R::min_value())
    }

    /// Largest representable quantity.
    #[inline]
    pub fn max() -> Self
    where
        R: Bounded,
    {
        Self::new(R::max_value())
    }

    /// Adds one unit in place and returns the updated quantity.
    ///
    /// ```rust
    /// use qkind_core::time::Second;
    /// use qkind_core::Quantity;
    ///
    /// let mut ticks = Quantity::<Second, u32>::new(9);
    /// ticks.increment();
    /// assert_eq!(ticks.value(), 10);
    /// ```
    #[inline]
    pub fn increment(&mut self) -> &mut Self
    where
        R: NumberLine,
    {
        self.0.step_up();
        self
    }

    /// Subtracts one unit in place and returns the updated quantity.
    #[inline]
    pub fn decrement(&mut self) -> &mut Self
    where
        R: NumberLine,
    {
        self.0.step_down();
        self
    }

    /// Adds one unit in place and returns the previous quantity.
    #[inline]
    pub fn post_increment(&mut self) -> Self
    where
        R: NumberLine,
    {
        let old = *self;
        self.0.step_up();
        old
    }

    /// Subtracts one unit in place and returns the previous quantity.
    #[inline]
    pub fn post_decrement(&mut self) -> Self
    where
        R: NumberLine,
    {
        let old = *self;
        self.0.step_down();
        old
    }
}

impl<U: Unit<Dim = Dimensionless>, R: Representation> Quantity<U, R> {
    /// The value expressed as a pure number (scaled by the unit ratio).
    ///
    /// ```rust
    /// use qkind_core::unitless::Percents;
    /// assert_eq!(Percents::new(50.0).number(), 0.5);
    /// ```
    #[inline]
    pub fn number(self) -> R {
        self.0.scale(U::RATIO)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Type-level views used by the kind bridge
// ─────────────────────────────────────────────────────────────────────────────

/// Destructures a quantity type into its unit and representation.
///
/// Operator impls name their outputs through projections like `<Quantity<U, R> as Mul<Q>>::Output`; this trait
/// recovers the unit and representation of such a projection.
pub trait AnyQuantity: Copy {
    /// The quantity's unit.
    type Unit: Unit;
    /// The quantity's representation.
    type Rep: Representation;
    /// Identity conversion to the concrete quantity type.
    fn into_quantity(self) -> Quantity<Self::Unit, Self::Rep>;
}

impl<U: Unit, R: Representation> AnyQuantity for Quantity<U, R> {
    type Unit = U;
    type Rep = R;
    #[inline]
    fn into_quantity(self) -> Self {
        self
    }
}

/// Conversion between quantities of the same dimension that never loses value.
///
/// The representation only widens (`R2: From<R>`), and the unit only changes when the target representation
/// rescales exactly (see [`ExactRescale`]): floats convert between any units, integers keep their unit.
///
/// ```rust
/// use qkind_core::length::{Kilometer, Meter};
/// use qkind_core::{ConvertInto, Quantity};
///
/// let km = Quantity::<Kilometer, f32>::new(1.5);
/// let m: Quantity<Meter, f64> = km.convert_into();
/// assert_eq!(m.value(), 1500.0);
/// ```
///
/// Integer unit changes may round, so they go through [`Quantity::to`] instead:
///
/// ```compile_fail
/// use qkind_core::length::{Kilometer, Meter};
/// use qkind_core::{ConvertInto, Quantity};
///
/// let m = Quantity::<Meter, i32>::new(2400);
/// let km: Quantity<Kilometer, i32> = m.convert_into();
/// ```
pub trait ConvertInto<T> {
    /// Performs the conversion.
    fn convert_into(self) -> T;
}

impl<U, R, T, R2> ConvertInto<Quantity<T, R2>> for Quantity<U, R>
where
    U: Unit,
    R: Representation,
    T: Unit<Dim = U::Dim>,
    R2: ExactRescale<U, T> + From<R>,
{
    #[inline]
    fn convert_into(self) -> Quantity<T, R2> {
        self.cast::<R2>().to::<T>()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Operator implementations
// ─────────────────────────────────────────────────────────────────────────────

/// Sum in the left operand's unit. Mixed units need a representation that rescales exactly.
impl<U, U2, R> Add<Quantity<U2, R>> for Quantity<U, R>
where
    U: Unit,
    U2: Unit<Dim = U::Dim>,
    R: ExactRescale<U2, U> + Add<Output = R>,
{
    type Output = Self;
    #[inline]
    fn add(self, rhs: Quantity<U2, R>) -> Self {
        Self::new(self.0 + rhs.to::<U>().0)
    }
}

impl<U, U2, R> AddAssign<Quantity<U2, R>> for Quantity<U, R>
where
    U: Unit,
    U2: Unit<Dim = U::Dim>,
    R: ExactRescale<U2, U> + AddAssign,
{
    #[inline]
    fn add_assign(&mut self, rhs: Quantity<U2, R>) {
        self.0 += rhs.to::<U>().0;
    }
}

impl<U, U2, R> Sub<Quantity<U2, R>> for Quantity<U, R>
where
    U: Unit,
    U2: Unit<Dim = U::Dim>,
    R: ExactRescale<U2, U> + Sub<Output = R>,
{
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Quantity<U2, R>) -> Self {
        Self::new(self.0 - rhs.to::<U>().0)
    }
}

impl<U, U2, R> SubAssign<Quantity<U2, R>> for Quantity<U, R>
where
    U: Unit,
    U2: Unit<Dim = U::Dim>,
    R: ExactRescale<U2, U> + SubAssign,
{
    #[inline]
    fn sub_assign(&mut self, rhs: Quantity<U2, R>) {
        self.0 -= rhs.to::<U>().0;
    }
}

impl<U: Unit, R: Representation + Mul<Output = R>> Mul<R> for Quantity<U, R> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: R) -> Self {
        Self::new(self.0 * rhs)
    }
}

impl<U: Unit, R: Representation + MulAssign> MulAssign<R> for Quantity<U, R> {
    #[inline]
    fn mul_assign(&mut self, rhs: R) {
        self.0 *= rhs;
    }
}

impl<U: Unit, R: Representation + Div<Output = R>> Div<R> for Quantity<U, R> {
    type Output = Self;
    #[inline]
    fn div(self, rhs: R) -> Self {
        Self::new(self.0 / rhs)
    }
}

impl<U: Unit, R: Representation + DivAssign> DivAssign<R> for Quantity<U, R> {
    #[inline]
    fn div_assign(&mut self, rhs: R) {
        self.0 /= rhs;
    }
}

impl<U: Unit, R: ModuloWith> Rem<R> for Quantity<U, R> {
    type Output = Self;
    #[inline]
    fn rem(self, rhs: R) -> Self {
        Self::new(self.0 % rhs)
    }
}

impl<U: Unit, R: CompoundModuloWith> RemAssign<R> for Quantity<U, R> {
    #[inline]
    fn rem_assign(&mut self, rhs: R) {
        self.0 %= rhs;
    }
}

impl<U, U2, R> Rem<Quantity<U2, R>> for Quantity<U, R>
where
    U: Unit,
    U2: Unit<Dim = U::Dim>,
    R: ExactRescale<U2, U> + ModuloWith,
{
    type Output = Self;
    #[inline]
    fn rem(self, rhs: Quantity<U2, R>) -> Self {
        Self::new(self.0 % rhs.to::<U>().0)
    }
}

impl<U, U2, R> RemAssign<Quantity<U2, R>> for Quantity<U, R>
where
    U: Unit,
    U2: Unit<Dim = U::Dim>,
    R: ExactRescale<U2, U> + CompoundModuloWith,
{
    #[inline]
    fn rem_assign(&mut self, rhs: Quantity<U2, R>) {
        self.0 %= rhs.to::<U>().0;
    }
}

impl<U: Unit, R: Negative> Neg for Quantity<U, R> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.0)
    }
}

impl<A, B, R> Mul<Quantity<B, R>> for Quantity<A, R>
where
    A: Unit,
    B: Unit,
    A::Dim: DimMul<B::Dim>,
    R: Representation + Mul<Output = R>,
{
    type Output = Quantity<Prod<A, B>, R>;
    #[inline]
    fn mul(self, rhs: Quantity<B, R>) -> Self::Output {
        Quantity::new(self.0 * rhs.0)
    }
}

impl<N, D, R> Div<Quantity<D, R>> for Quantity<N, R>
where
    N: Unit,
    D: Unit,
    N::Dim: DimDiv<D::Dim>,
    R: Representation + Div<Output = R>,
{
    type Output = Quantity<Per<N, D>, R>;
    #[inline]
    fn div(self, rhs: Quantity<D, R>) -> Self::Output {
        Quantity::new(self.0 / rhs.0)
    }
}

/// Compares in the left operand's unit. Mixed units need a representation that rescales exactly.
impl<U, U2, R> PartialEq<Quantity<U2, R>> for Quantity<U, R>
where
    U: Unit,
    U2: Unit<Dim = U::Dim>,
    R: ExactRescale<U2, U>,
{
    #[inline]
    fn eq(&self, other: &Quantity<U2, R>) -> bool {
        self.0 == other.to::<U>().0
    }
}

impl<U, U2, R> PartialOrd<Quantity<U2, R>> for Quantity<U, R>
where
    U: Unit,
    U2: Unit<Dim = U::Dim>,
    R: ExactRescale<U2, U>,
{
    #[inline]
    fn partial_cmp(&self, other: &Quantity<U2, R>) -> Option<Ordering> {
        self.0.partial_cmp(&other.to::<U>().0)
    }
}

impl<U: Unit, R: Representation> PartialEq<R> for Quantity<U, R> {
    #[inline]
    fn eq(&self, other: &R) -> bool {
        self.0 == *other
    }
}

impl<U: Unit, R: Representation + Eq> Eq for Quantity<U, R> where Self: PartialEq {}

impl<U: Unit, R: Representation + Ord> Ord for Quantity<U, R>
where
    Self: PartialOrd,
{
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl<U: Unit, R: Representation + Hash> Hash for Quantity<U, R> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl<U: Unit, R: Representation + Default> Default for Quantity<U, R> {
    #[inline]
    fn default() -> Self {
        Self::new(R::default())
    }
}

impl<R: Representation> From<R> for Quantity<Unitless, R> {
    #[inline]
    fn from(value: R) -> Self {
        Self::new(value)
    }
}

/// Left-hand scalar operators, which the orphan rule only allows per concrete representation.
macro_rules! impl_scalar_lhs {
    ($($t:ty),* $(,)?) => {$(
        impl<U: Unit> Mul<Quantity<U, $t>> for $t {
            type Output = Quantity<U, $t>;
            #[inline]
            fn mul(self, rhs: Quantity<U, $t>) -> Self::Output {
                rhs * self
            }
        }

        impl<U: Unit> Div<Quantity<U, $t>> for $t
        where
            Dimensionless: DimDiv<U::Dim>,
        {
            type Output = Quantity<Per<Unitless, U>, $t>;
            #[inline]
            fn div(self, rhs: Quantity<U, $t>) -> Self::Output {
                Quantity::new(self / rhs.0)
            }
        }
    )*};
}

impl_scalar_lhs!(f32, f64, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

// ─────────────────────────────────────────────────────────────────────────────
// Serde support
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl<U: Unit, R: Representation + Serialize> Serialize for Quantity<U, R> {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, U: Unit, R: Representation + Deserialize<'de>> Deserialize<'de> for Quantity<U, R> {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = R::deserialize(deserializer)?;
        Ok(Quantity::new(value))
    }
}

/// Serde helper module for serializing quantities with unit information.
///
/// Use this with the `#[serde(with = "...")]` attribute to preserve unit symbols
/// in serialized data.
///
/// # Examples
///
/// ```rust
/// use qkind_core::length::Meters;
/// use serde::{Serialize, Deserialize};
///
/// #[derive(Serialize, Deserialize)]
/// struct Config {
///     #[serde(with = "qkind_core::serde_with_unit")]
///     max_distance: Meters,  // Serializes as {"value": 100.0, "unit": "m"}
///
///     min_distance: Meters,  // Serializes as 50.0 (default, compact)
/// }
/// ```
#[cfg(feature = "serde")]
pub mod serde_with_unit {
    use super::*;
    use serde::de::{self, Deserializer, MapAccess, Visitor};
    use serde::ser::{SerializeStruct, Serializer};

    /// Serializes a `Quantity<U, R>` as a struct with `value` and `unit` fields.
    ///
    /// # Example JSON Output
    /// ```json
    /// {"value": 42.5, "unit": "m"}
    /// ```
    pub fn serialize<U, R, S>(quantity: &Quantity<U, R>, serializer: S) -> Result<S::Ok, S::Error>
    where
        U: Unit,
        R: Representation + Serialize,
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Quantity", 2)?;
        state.serialize_field("value", &quantity.value())?;
        state.serialize_field("unit", U::SYMBOL)?;
        state.end()
    }

    /// Deserializes a `Quantity<U, R>` from a struct with `value` and optionally `unit` fields.
    ///
    /// A present `unit` must match `U::SYMBOL`. An absent one is accepted for backwards compatibility and logged.
    pub fn deserialize<'de, U, R, D>(deserializer: D) -> Result<Quantity<U, R>, D::Error>
    where
        U: Unit,
        R: Representation + Deserialize<'de>,
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(field_identifier, rename_all = "lowercase")]
        enum Field {
            Value,
            Unit,
        }

        struct QuantityVisitor<U, R>(PhantomData<(U, R)>);

        impl<'de, U: Unit, R: Representation + Deserialize<'de>> Visitor<'de> for QuantityVisitor<U, R> {
            type Value = Quantity<U, R>;

            fn expecting(&self, formatter: &mut core::fmt::Formatter) -> core::fmt::Result {
                formatter.write_str("struct Quantity with value and unit fields")
            }

            fn visit_map<V>(self, mut map: V) -> Result<Quantity<U, R>, V::Error>
            where
                V: MapAccess<'de>,
            {
                let mut value: Option<R> = None;
                let mut unit: Option<String> = None;

                while let Some(key) = map.next_key()? {
                    match key {
                        Field::Value => {
                            if value.is_some() {
                                return Err(de::Error::duplicate_field("value"));
                            }
                            value = Some(map.next_value()?);
                        }
                        Field::Unit => {
                            if unit.is_some() {
                                return Err(de::Error::duplicate_field("unit"));
                            }
                            unit = Some(map.next_value()?);
                        }
                    }
                }

                let value = value.ok_or_else(|| de::Error::missing_field("value"))?;

                match unit {
                    Some(unit) => Quantity::from_tagged(value, &unit).map_err(de::Error::custom),
                    None => {
                        log::warn!("quantity without unit tag, assuming '{}'", U::SYMBOL);
                        Ok(Quantity::new(value))
                    }
                }
            }
        }

        deserializer.deserialize_struct("Quantity", &["value", "unit"], QuantityVisitor(PhantomData))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::length::{Kilometer, Kilometers, Meter, Meters};
    use crate::time::{Second, Seconds};
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn integer_arithmetic() {
        let a = Quantity::<Meter, i32>::new(7);
        let b = Quantity::<Meter, i32>::new(3);
        assert_eq!((a + b).value(), 10);
        assert_eq!((a - b).value(), 4);
        assert_eq!((a * 2).value(), 14);
        assert_eq!((a / 2).value(), 3);
        assert_eq!((a % b).value(), 1);
        assert_eq!((a % 5).value(), 2);
        assert_eq!((-a).value(), -7);
        assert!(a > b);
        assert_eq!(core::cmp::max(a, b), a);
    }

    #[test]
    fn compound_assignment() {
        let mut q = Meters::new(10.0);
        q += Meters::new(2.0);
        q -= Meters::new(4.0);
        q *= 3.0;
        q /= 4.0;
        assert_relative_eq!(q.value(), 6.0);
        q %= 4.0;
        assert_relative_eq!(q.value(), 2.0);
        q %= Meters::new(1.5);
        assert_relative_eq!(q.value(), 0.5);
    }

    #[test]
    fn factories() {
        assert_eq!(Quantity::<Meter, i16>::zero().value(), 0);
        assert_eq!(Quantity::<Meter, i16>::one().value(), 1);
        assert_eq!(Quantity::<Meter, i16>::min().value(), i16::MIN);
        assert_eq!(Quantity::<Meter, u8>::max().value(), u8::MAX);
        assert_eq!(Meters::zero().value(), 0.0);
        assert_eq!(Meters::max().value(), f64::MAX);
    }

    #[test]
    fn stepping() {
        let mut q = Quantity::<Second, i64>::new(5);
        assert_eq!(q.post_increment().value(), 5);
        assert_eq!(q.value(), 6);
        assert_eq!(q.decrement().decrement().value(), 4);
        assert_eq!(q.post_decrement().value(), 4);
        assert_eq!(q.value(), 3);
    }

    #[test]
    fn unit_conversion() {
        let km = Kilometers::new(1.25);
        assert_relative_eq!(km.to::<Meter>().value(), 1250.0);
        let m = Quantity::<Meter, i32>::new(2500);
        assert_eq!(m.to::<Kilometer>().value(), 3);
    }

    #[test]
    fn lossless_cast() {
        let q = Quantity::<Second, u8>::new(200);
        let wide: Quantity<Second, u32> = q.cast();
        assert_eq!(wide.value(), 200);
        let converted: Quantity<Meter, f64> = Quantity::<Kilometer, f32>::new(2.0).convert_into();
        assert_relative_eq!(converted.value(), 2000.0);
    }

    #[test]
    fn products_and_quotients() {
        let area = Meters::new(3.0) * Meters::new(4.0);
        assert_relative_eq!(area.value(), 12.0);
        let v = Meters::new(10.0) / Seconds::new(4.0);
        assert_relative_eq!(v.value(), 2.5);
        let back: Meters = (v * Seconds::new(4.0)).to();
        assert_relative_eq!(back.value(), 10.0);
        let inv = 2.0 / Seconds::new(4.0);
        assert_relative_eq!(inv.value(), 0.5);
        assert_relative_eq!(Seconds::new(4.0).inverse().value(), 0.25);
    }

    #[test]
    fn tagged_construction() {
        assert_eq!(Meters::from_tagged(1.0, "m"), Ok(Meters::new(1.0)));
        assert_eq!(
            Meters::from_tagged(1.0, "s"),
            Err(TagError::UnitMismatch {
                expected: "m",
                found: "s"
            })
        );
    }

    #[test]
    fn dimensionless_number() {
        let q: Quantity<Unitless> = 0.25.into();
        assert_relative_eq!(q.number(), 0.25);
    }

    proptest! {
        #[test]
        fn prop_add_commutes(a in -1e9..1e9f64, b in -1e9..1e9f64) {
            prop_assert_eq!(Meters::new(a) + Meters::new(b), Meters::new(b) + Meters::new(a));
        }

        #[test]
        fn prop_integer_rem_matches_primitive(a in any::<i32>(), b in 1..1000i32) {
            prop_assert_eq!((Quantity::<Meter, i32>::new(a) % b).value(), a % b);
        }
    }

    #[cfg(feature = "serde")]
    mod serde_tests {
        use super::*;
        use serde::{Deserialize, Serialize};

        #[derive(Serialize, Deserialize, Debug, PartialEq)]
        struct Leg {
            #[serde(with = "crate::serde_with_unit")]
            length: Meters,
            steps: Quantity<Meter, u32>,
        }

        #[test]
        fn roundtrip_with_unit() {
            let leg = Leg {
                length: Meters::new(12.5),
                steps: Quantity::new(4),
            };
            let json = serde_json::to_string(&leg).unwrap();
            assert_eq!(json, r#"{"length":{"value":12.5,"unit":"m"},"steps":4}"#);
            let back: Leg = serde_json::from_str(&json).unwrap();
            assert_eq!(back, leg);
        }

        #[test]
        fn wrong_unit_is_rejected() {
            let err = serde_json::from_str::<Leg>(r#"{"length":{"value":1.0,"unit":"km"},"steps":0}"#).unwrap_err();
            assert!(err.to_string().contains("unit mismatch: expected 'm', found 'km'"));
        }

        #[test]
        fn missing_unit_is_accepted() {
            let leg: Leg = serde_json::from_str(r#"{"length":{"value":3.0},"steps":1}"#).unwrap();
            assert_eq!(leg.length, Meters::new(3.0));
        }
    }
}
