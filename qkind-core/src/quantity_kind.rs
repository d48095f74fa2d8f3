//! Kind-tagged quantities.
//!
//! [`QuantityKind<K, U, R>`] is a [`Quantity<U, R>`] that additionally carries a kind `K`. Every operator first
//! takes the wrapped quantity out with [`QuantityKind::common`], applies the quantity-level operator, and then tags
//! the result again: with `K` itself when the dimension is unchanged, or with the kind the dimension resolves to in
//! `K`'s family (see [`crate::downcast`]) when it changed. An operator is available exactly when the quantity-level
//! operator is.
//!
//! Binary operators between kind-quantities, quantities and scalars live in `bridge.rs`; this module holds the
//! type, its construction, unary and compound operators, factories and comparisons.

use crate::dimension::Dimensionless;
use crate::downcast::make_quantity_kind;
use crate::error::{TagError, TagResult};
use crate::kind::{EquivalentTo, Kind, NegatableKind, SteppableKind};
use crate::numbers::{NumberLine, Representation};
use crate::quantity::{AnyQuantity, ConvertInto, Quantity};
use crate::unit::Unit;
use core::cmp::Ordering;
use core::fmt::{Debug, Display, Formatter, Result};
use core::hash::{Hash, Hasher};
use core::marker::PhantomData;
use core::ops::*;
use num_traits::{Bounded, One, Zero};

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A quantity tagged with a kind.
///
/// Two lengths can mean different things: a radius and a width are both metres, but adding one to the other is
/// usually a bug. `QuantityKind<Radius, Meter>` and `QuantityKind<Width, Meter>` keep them apart at compile time,
/// while arithmetic that stays within one kind family behaves like the underlying quantity.
///
/// The wrapper is `Copy`, holds nothing but the quantity, and has the same layout cost.
///
/// ```rust
/// use qkind_core::length::{Length, Meter, Meters};
/// use qkind_core::{Quantity, QuantityKind, Per, Unitless};
/// use qkind_derive::Kind;
///
/// #[derive(Kind)]
/// #[kind(crate = "qkind_core", dimension = Length)]
/// pub enum Radius {}
///
/// type Radii = QuantityKind<Radius, Meter>;
///
/// let r = Radii::new(Meters::new(5.0));
/// let doubled: Radii = r * 2.0;
/// assert_eq!(doubled.value(), 10.0);
///
/// // No kind is declared for inverse length in Radius' family, so the result is a plain quantity.
/// let inv: Quantity<Per<Unitless, Meter>> = 1.0 / r;
/// assert_eq!(inv.value(), 0.2);
/// ```
pub struct QuantityKind<K: Kind, U: Unit, R: Representation = f64> {
    q: Quantity<U, R>,
    kind: PhantomData<fn() -> K>,
}

/// A kind-quantity of kind `K` with the unit and representation of quantity type `Q`.
pub type Rekinded<K, Q> = QuantityKind<K, <Q as AnyQuantity>::Unit, <Q as AnyQuantity>::Rep>;

impl<K: Kind, U: Unit, R: Representation> QuantityKind<K, U, R> {
    /// Tags `q` with `K` without checking dimensions; callers guarantee `U::Dim == K::Dim`.
    #[inline]
    pub(crate) fn from_parts(q: Quantity<U, R>) -> Self {
        Self { q, kind: PhantomData }
    }

    /// The wrapped quantity.
    ///
    /// This is the way out of the kind system: arithmetic between unrelated kinds goes through `common()`.
    #[inline]
    pub fn common(self) -> Quantity<U, R> {
        self.q
    }

    /// The raw numeric value.
    #[inline]
    pub fn value(self) -> R {
        self.q.value()
    }

    /// Name of the kind, as declared on `K`.
    #[inline]
    pub fn kind_name(self) -> &'static str {
        K::NAME
    }

    /// Same kind, another unit of the same dimension.
    ///
    /// ```rust
    /// use qkind_core::length::{Kilometer, Length, Meter, Meters};
    /// use qkind_core::QuantityKind;
    /// use qkind_derive::Kind;
    ///
    /// #[derive(Kind)]
    /// #[kind(crate = "qkind_core", dimension = Length)]
    /// pub enum Depth {}
    ///
    /// let d = QuantityKind::<Depth, Meter>::new(Meters::new(2500.0));
    /// assert_eq!(d.to::<Kilometer>().value(), 2.5);
    /// ```
    #[inline]
    pub fn to<U2: Unit<Dim = U::Dim>>(self) -> QuantityKind<K, U2, R> {
        QuantityKind::from_parts(self.q.to::<U2>())
    }

    /// Same kind and unit, lossless change of representation.
    #[inline]
    pub fn cast<R2: Representation + From<R>>(self) -> QuantityKind<K, U, R2> {
        QuantityKind::from_parts(self.q.cast::<R2>())
    }

    /// Converts into an equivalent kind-quantity. Counterpart of [`QuantityKind::from_equivalent`].
    #[inline]
    pub fn into_equivalent<K2, U2, R2>(self) -> QuantityKind<K2, U2, R2>
    where
        K: EquivalentTo<K2>,
        K2: Kind,
        U2: Unit<Dim = K2::Dim>,
        R2: Representation,
        Quantity<U, R>: ConvertInto<Quantity<U2, R2>>,
    {
        QuantityKind::from_equivalent(self)
    }

    /// Adds one unit in place and returns the updated kind-quantity.
    #[inline]
    pub fn increment(&mut self) -> &mut Self
    where
        K: SteppableKind,
        R: NumberLine,
    {
        self.q.increment();
        self
    }

    /// Subtracts one unit in place and returns the updated kind-quantity.
    #[inline]
    pub fn decrement(&mut self) -> &mut Self
    where
        K: SteppableKind,
        R: NumberLine,
    {
        self.q.decrement();
        self
    }

    /// Adds one unit in place and returns the previous value.
    #[inline]
    pub fn post_increment(&mut self) -> Self
    where
        K: SteppableKind,
        R: NumberLine,
    {
        Self::from_parts(self.q.post_increment())
    }

    /// Subtracts one unit in place and returns the previous value.
    #[inline]
    pub fn post_decrement(&mut self) -> Self
    where
        K: SteppableKind,
        R: NumberLine,
    {
        Self::from_parts(self.q.post_decrement())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Construction (dimension of U must be the kind's)
// ─────────────────────────────────────────────────────────────────────────────

impl<K: Kind, U: Unit<Dim = K::Dim>, R: Representation> QuantityKind<K, U, R> {
    /// Tags a quantity, or anything convertible into one, with kind `K`.
    ///
    /// ```rust
    /// use qkind_core::time::{Second, Time};
    /// use qkind_core::QuantityKind;
    /// use qkind_derive::Kind;
    /// use core::time::Duration;
    ///
    /// #[derive(Kind)]
    /// #[kind(crate = "qkind_core", dimension = Time)]
    /// pub enum Timeout {}
    ///
    /// let t = QuantityKind::<Timeout, Second>::new(Duration::from_millis(1500));
    /// assert_eq!(t.value(), 1.5);
    /// ```
    #[inline]
    pub fn new(q: impl Into<Quantity<U, R>>) -> Self {
        Self::from_parts(q.into())
    }

    /// Builds a dimensionless kind-quantity from a bare number.
    ///
    /// Only available when the kind is dimensionless and `V` converts into `R` without loss.
    ///
    /// ```rust
    /// use qkind_core::{Dimensionless, QuantityKind, Unitless};
    /// use qkind_derive::Kind;
    ///
    /// #[derive(Kind)]
    /// #[kind(crate = "qkind_core", dimension = Dimensionless)]
    /// pub enum Gain {}
    ///
    /// let g = QuantityKind::<Gain, Unitless, f64>::from_value(3_i32);
    /// assert_eq!(g.value(), 3.0);
    /// ```
    ///
    /// ```compile_fail
    /// use qkind_core::length::{Length, Meter};
    /// use qkind_core::QuantityKind;
    /// use qkind_derive::Kind;
    ///
    /// #[derive(Kind)]
    /// #[kind(crate = "qkind_core", dimension = Length)]
    /// pub enum Radius {}
    ///
    /// let r = QuantityKind::<Radius, Meter>::from_value(5.0);
    /// ```
    #[inline]
    pub fn from_value<V>(value: V) -> Self
    where
        K: Kind<Dim = Dimensionless>,
        R: From<V>,
    {
        Self::from_parts(Quantity::new(R::from(value)))
    }

    /// Converts from a kind-quantity of an equivalent kind, converting unit and representation as needed.
    ///
    /// Only conversions that keep the value exist (see [`ConvertInto`]). Integer kind-quantities keep their unit;
    /// changing it may round and goes through [`QuantityKind::to`]:
    ///
    /// ```compile_fail
    /// use qkind_core::length::{Kilometer, Length, Meter};
    /// use qkind_core::{Quantity, QuantityKind};
    /// use qkind_derive::Kind;
    ///
    /// #[derive(Kind)]
    /// #[kind(crate = "qkind_core", dimension = Length)]
    /// pub enum Radius {}
    ///
    /// let m = QuantityKind::<Radius, Meter, i32>::new(Quantity::<Meter, i32>::new(2400));
    /// let km = QuantityKind::<Radius, Kilometer, i32>::from_equivalent(m);
    /// ```
    #[inline]
    pub fn from_equivalent<K2, U2, R2>(other: QuantityKind<K2, U2, R2>) -> Self
    where
        K2: EquivalentTo<K>,
        U2: Unit,
        R2: Representation,
        Quantity<U2, R2>: ConvertInto<Quantity<U, R>>,
    {
        Self::from_parts(other.q.convert_into())
    }

    /// Builds a kind-quantity from a value whose unit and kind arrive as text.
    ///
    /// Both tags must match `U::SYMBOL` and `K::NAME` exactly.
    pub fn from_tagged<'a>(value: R, unit: &'a str, kind: &'a str) -> TagResult<'a, Self> {
        let q = Quantity::from_tagged(value, unit)?;
        if kind != K::NAME {
            return Err(TagError::KindMismatch {
                expected: K::NAME,
                found: kind,
            });
        }
        Ok(Self::from_parts(q))
    }

    /// Kind-quantity whose value is the representation's zero.
    #[inline]
    pub fn zero() -> Self
    where
        R: Zero,
    {
        Self::from_parts(Quantity::zero())
    }

    /// Kind-quantity whose value is the representation's one.
    #[inline]
    pub fn one() -> Self
    where
        R: One,
    {
        Self::from_parts(Quantity::one())
    }

    /// Smallest representable kind-quantity.
    #[inline]
    pub fn min() -> Self
    where
        R: Bounded,
    {
        Self::from_parts(Quantity::min())
    }

    /// Largest representable kind-quantity.
    #[inline]
    pub fn max() -> Self
    where
        R: Bounded,
    {
        Self::from_parts(Quantity::max())
    }
}

impl<K: Kind, U: Unit<Dim = K::Dim>, R: Representation + Default> Default for QuantityKind<K, U, R> {
    #[inline]
    fn default() -> Self {
        Self::from_parts(Quantity::default())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Value-type plumbing
// ─────────────────────────────────────────────────────────────────────────────

impl<K: Kind, U: Unit, R: Representation> Clone for QuantityKind<K, U, R> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<K: Kind, U: Unit, R: Representation> Copy for QuantityKind<K, U, R> {}

impl<K: Kind, U: Unit, R: Representation> Debug for QuantityKind<K, U, R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.debug_struct("QuantityKind")
            .field("kind", &K::NAME)
            .field("value", &self.q.value())
            .field("unit", &U::SYMBOL)
            .finish()
    }
}

impl<K: Kind, U: Unit, R: Representation> Display for QuantityKind<K, U, R>
where
    Quantity<U, R>: Display,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        Display::fmt(&self.q, f)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Unary and compound operators
// ─────────────────────────────────────────────────────────────────────────────

impl<K, U, R> Neg for QuantityKind<K, U, R>
where
    K: NegatableKind,
    U: Unit,
    R: Representation,
    Quantity<U, R>: Neg,
    <Quantity<U, R> as Neg>::Output: AnyQuantity,
{
    type Output = Rekinded<K, <Quantity<U, R> as Neg>::Output>;
    #[inline]
    fn neg(self) -> Self::Output {
        make_quantity_kind::<K, _>(-self.q)
    }
}

impl<K, U, R, K2, U2, R2> AddAssign<QuantityKind<K2, U2, R2>> for QuantityKind<K, U, R>
where
    K: Kind,
    U: Unit,
    R: Representation,
    K2: EquivalentTo<K>,
    U2: Unit,
    R2: Representation,
    Quantity<U, R>: AddAssign<Quantity<U2, R2>>,
{
    #[inline]
    fn add_assign(&mut self, rhs: QuantityKind<K2, U2, R2>) {
        self.q += rhs.q;
    }
}

impl<K, U, R, K2, U2, R2> SubAssign<QuantityKind<K2, U2, R2>> for QuantityKind<K, U, R>
where
    K: Kind,
    U: Unit,
    R: Representation,
    K2: EquivalentTo<K>,
    U2: Unit,
    R2: Representation,
    Quantity<U, R>: SubAssign<Quantity<U2, R2>>,
{
    #[inline]
    fn sub_assign(&mut self, rhs: QuantityKind<K2, U2, R2>) {
        self.q -= rhs.q;
    }
}

impl<K, U, R, K2, U2, R2> RemAssign<QuantityKind<K2, U2, R2>> for QuantityKind<K, U, R>
where
    K: Kind,
    U: Unit,
    R: Representation,
    K2: EquivalentTo<K>,
    U2: Unit,
    R2: Representation,
    Quantity<U, R>: RemAssign<Quantity<U2, R2>>,
{
    #[inline]
    fn rem_assign(&mut self, rhs: QuantityKind<K2, U2, R2>) {
        self.q %= rhs.q;
    }
}

impl<K, U, R, S> MulAssign<S> for QuantityKind<K, U, R>
where
    K: Kind,
    U: Unit,
    R: Representation,
    S: Representation,
    Quantity<U, R>: MulAssign<S>,
{
    #[inline]
    fn mul_assign(&mut self, rhs: S) {
        self.q *= rhs;
    }
}

impl<K, U, R, S> DivAssign<S> for QuantityKind<K, U, R>
where
    K: Kind,
    U: Unit,
    R: Representation,
    S: Representation,
    Quantity<U, R>: DivAssign<S>,
{
    #[inline]
    fn div_assign(&mut self, rhs: S) {
        self.q /= rhs;
    }
}

impl<K, U, R, S> RemAssign<S> for QuantityKind<K, U, R>
where
    K: Kind,
    U: Unit,
    R: Representation,
    S: Representation,
    Quantity<U, R>: RemAssign<S>,
{
    #[inline]
    fn rem_assign(&mut self, rhs: S) {
        self.q %= rhs;
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Comparison (equivalent kinds only)
// ─────────────────────────────────────────────────────────────────────────────

impl<K, U, R, K2, U2, R2> PartialEq<QuantityKind<K2, U2, R2>> for QuantityKind<K, U, R>
where
    K: Kind,
    U: Unit,
    R: Representation,
    K2: EquivalentTo<K>,
    U2: Unit,
    R2: Representation,
    Quantity<U, R>: PartialEq<Quantity<U2, R2>>,
{
    #[inline]
    fn eq(&self, other: &QuantityKind<K2, U2, R2>) -> bool {
        self.q == other.q
    }
}

impl<K, U, R, K2, U2, R2> PartialOrd<QuantityKind<K2, U2, R2>> for QuantityKind<K, U, R>
where
    K: Kind,
    U: Unit,
    R: Representation,
    K2: EquivalentTo<K>,
    U2: Unit,
    R2: Representation,
    Quantity<U, R>: PartialOrd<Quantity<U2, R2>>,
{
    #[inline]
    fn partial_cmp(&self, other: &QuantityKind<K2, U2, R2>) -> Option<Ordering> {
        self.q.partial_cmp(&other.q)
    }
}

impl<K: Kind, U: Unit, R: Representation> Eq for QuantityKind<K, U, R> where Quantity<U, R>: Eq {}

impl<K: Kind, U: Unit, R: Representation> Ord for QuantityKind<K, U, R>
where
    Quantity<U, R>: Ord,
{
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.q.cmp(&other.q)
    }
}

impl<K: Kind, U: Unit, R: Representation> Hash for QuantityKind<K, U, R>
where
    Quantity<U, R>: Hash,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.q.hash(state);
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Serde support
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl<K: Kind, U: Unit, R: Representation + Serialize> Serialize for QuantityKind<K, U, R> {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.q.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, K, U, R> Deserialize<'de> for QuantityKind<K, U, R>
where
    K: Kind,
    U: Unit<Dim = K::Dim>,
    R: Representation + Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Quantity::deserialize(deserializer).map(Self::from_parts)
    }
}

/// Serde helper module that keeps unit and kind tags next to the value.
///
/// ```rust
/// use qkind_core::length::{Length, Meter, Meters};
/// use qkind_core::QuantityKind;
/// use qkind_derive::Kind;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Kind)]
/// #[kind(crate = "qkind_core", dimension = Length)]
/// pub enum Radius {}
///
/// #[derive(Serialize, Deserialize)]
/// struct Wheel {
///     #[serde(with = "qkind_core::serde_with_kind")]
///     radius: QuantityKind<Radius, Meter>, // {"value": 0.3, "unit": "m", "kind": "radius"}
/// }
/// ```
#[cfg(feature = "serde")]
pub mod serde_with_kind {
    use super::*;
    use serde::de::{self, MapAccess, Visitor};
    use serde::ser::SerializeStruct;

    /// Serializes a kind-quantity as a struct with `value`, `unit` and `kind` fields.
    pub fn serialize<K, U, R, S>(qk: &QuantityKind<K, U, R>, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        K: Kind,
        U: Unit,
        R: Representation + Serialize,
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("QuantityKind", 3)?;
        state.serialize_field("value", &qk.value())?;
        state.serialize_field("unit", U::SYMBOL)?;
        state.serialize_field("kind", K::NAME)?;
        state.end()
    }

    /// Deserializes a kind-quantity from `value` plus optional `unit` and `kind` tags.
    ///
    /// Present tags must match the target type. Missing tags are accepted and logged.
    pub fn deserialize<'de, K, U, R, D>(deserializer: D) -> core::result::Result<QuantityKind<K, U, R>, D::Error>
    where
        K: Kind,
        U: Unit<Dim = K::Dim>,
        R: Representation + Deserialize<'de>,
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(field_identifier, rename_all = "lowercase")]
        enum Field {
            Value,
            Unit,
            Kind,
        }

        struct KindVisitor<K, U, R>(PhantomData<(fn() -> K, U, R)>);

        impl<'de, K, U, R> Visitor<'de> for KindVisitor<K, U, R>
        where
            K: Kind,
            U: Unit<Dim = K::Dim>,
            R: Representation + Deserialize<'de>,
        {
            type Value = QuantityKind<K, U, R>;

            fn expecting(&self, formatter: &mut core::fmt::Formatter) -> core::fmt::Result {
                formatter.write_str("struct QuantityKind with value, unit and kind fields")
            }

            fn visit_map<V>(self, mut map: V) -> core::result::Result<Self::Value, V::Error>
            where
                V: MapAccess<'de>,
            {
                let mut value: Option<R> = None;
                let mut unit: Option<String> = None;
                let mut kind: Option<String> = None;

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
                        Field::Kind => {
                            if kind.is_some() {
                                return Err(de::Error::duplicate_field("kind"));
                            }
                            kind = Some(map.next_value()?);
                        }
                    }
                }

                let value = value.ok_or_else(|| de::Error::missing_field("value"))?;
                if unit.is_none() || kind.is_none() {
                    log::warn!(
                        "kind-quantity without full tags, assuming '{}' in '{}'",
                        K::NAME,
                        U::SYMBOL
                    );
                }

                QuantityKind::from_tagged(
                    value,
                    unit.as_deref().unwrap_or(U::SYMBOL),
                    kind.as_deref().unwrap_or(K::NAME),
                )
                .map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_struct(
            "QuantityKind",
            &["value", "unit", "kind"],
            KindVisitor(PhantomData),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::length::{Kilometer, Length, Meter, Meters};
    use crate::time::{Second, Seconds, Time};
    use crate::unitless::Percent;
    use crate::Unitless;
    use approx::assert_relative_eq;
    use proptest::prelude::*;
    use qkind_derive::Kind;

    #[derive(Kind)]
    #[kind(crate = "crate", dimension = Length)]
    enum Radius {}

    #[derive(Kind)]
    #[kind(crate = "crate", dimension = Length, no_negation)]
    enum Distance {}

    #[derive(Kind)]
    #[kind(crate = "crate", dimension = Time, name = "tick")]
    enum Tick {}

    #[derive(Kind)]
    #[kind(crate = "crate", dimension = Dimensionless)]
    enum Ratio {}

    type Radii = QuantityKind<Radius, Meter>;
    type Ticks = QuantityKind<Tick, Second, i32>;

    fn radius(v: f64) -> Radii {
        Radii::new(Meters::new(v))
    }

    fn ticks(v: i32) -> Ticks {
        Ticks::new(Quantity::<Second, i32>::new(v))
    }

    #[test]
    fn common_returns_wrapped_quantity() {
        let r = radius(5.0);
        assert_eq!(r.common(), Meters::new(5.0));
        assert_relative_eq!(r.value(), 5.0);
        assert_eq!(r.kind_name(), "radius");
    }

    #[test]
    fn default_is_representation_default() {
        assert_eq!(Radii::default().value(), 0.0);
        assert_eq!(Ticks::default().value(), 0);
    }

    #[test]
    fn factories_follow_representation() {
        assert_eq!(Ticks::zero().value(), 0);
        assert_eq!(Ticks::one().value(), 1);
        assert_eq!(Ticks::min().value(), i32::MIN);
        assert_eq!(Ticks::max().value(), i32::MAX);
        assert_eq!(Radii::zero(), radius(0.0));
    }

    #[test]
    fn from_value_for_dimensionless_kind() {
        let r = QuantityKind::<Ratio, Unitless, i64>::from_value(7_u8);
        assert_eq!(r.value(), 7);
    }

    #[test]
    fn equivalent_conversion_changes_unit() {
        let km: QuantityKind<Radius, Kilometer> = radius(1500.0).into_equivalent();
        assert_relative_eq!(km.value(), 1.5);
        let back = Radii::from_equivalent(km);
        assert_relative_eq!(back.value(), 1500.0);
        assert_relative_eq!(radius(250.0).to::<Kilometer>().value(), 0.25);
    }

    #[test]
    fn equivalent_conversion_keeps_integer_values() {
        let wide = QuantityKind::<Tick, Second, i64>::from_equivalent(ticks(2400));
        assert_eq!(wide.value(), 2400);
        let float: QuantityKind<Tick, crate::time::Millisecond> = ticks(3).into_equivalent();
        assert_relative_eq!(float.value(), 3000.0);
    }

    #[test]
    fn mixed_unit_comparison() {
        let km = QuantityKind::<Radius, Kilometer>::new(crate::length::Kilometers::new(2.5));
        assert!(radius(2500.0) == km);
        assert!(km > radius(2000.0));
        let mut r = radius(500.0);
        r += km;
        assert_relative_eq!(r.value(), 3000.0);
    }

    #[test]
    fn multiplying_by_one_is_identity() {
        type Ratios = QuantityKind<Ratio, Unitless>;
        let g = Ratios::new(Quantity::<Unitless>::new(2.5));
        let same = g * Ratios::one().common();
        assert_eq!(same.kind_name(), "ratio");
        assert!(same == g);

        let r = radius(4.0);
        let kept = r * 1.0;
        assert_eq!(kept, r);
    }

    #[test]
    fn negation_keeps_kind() {
        let n: Radii = -radius(2.0);
        assert_relative_eq!(n.value(), -2.0);
        let t: Ticks = -ticks(3);
        assert_eq!(t.value(), -3);
    }

    #[test]
    fn stepping_keeps_kind() {
        let mut t = ticks(1);
        t.increment().increment();
        assert_eq!(t.value(), 3);
        let before = t.post_decrement();
        assert_eq!(before.value(), 3);
        assert_eq!(t.value(), 2);
        assert_eq!(t.post_increment().value(), 2);
        t.decrement();
        assert_eq!(t.value(), 2);
    }

    #[test]
    fn compound_operators() {
        let mut r = radius(10.0);
        r += radius(5.0);
        assert_relative_eq!(r.value(), 15.0);
        r -= radius(3.0);
        assert_relative_eq!(r.value(), 12.0);
        r *= 2.0;
        assert_relative_eq!(r.value(), 24.0);
        r /= 4.0;
        assert_relative_eq!(r.value(), 6.0);
        r %= 4.0;
        assert_relative_eq!(r.value(), 2.0);
        r %= radius(1.5);
        assert_relative_eq!(r.value(), 0.5);

        let mut t = ticks(17);
        t %= 5;
        assert_eq!(t.value(), 2);
    }

    #[test]
    fn comparisons() {
        assert!(radius(1.0) < radius(2.0));
        assert!(radius(3.0) >= radius(3.0));
        assert_ne!(radius(1.0), radius(1.5));
        let a = ticks(4);
        let b = ticks(9);
        assert_eq!(a.cmp(&b), Ordering::Less);
        assert_eq!(core::cmp::max(a, b), b);
    }

    #[test]
    fn tagged_construction() {
        assert_eq!(Radii::from_tagged(1.0, "m", "radius"), Ok(radius(1.0)));
        assert_eq!(
            Radii::from_tagged(1.0, "s", "radius"),
            Err(TagError::UnitMismatch {
                expected: "m",
                found: "s"
            })
        );
        assert_eq!(
            Radii::from_tagged(1.0, "m", "width"),
            Err(TagError::KindMismatch {
                expected: "radius",
                found: "width"
            })
        );
    }

    #[test]
    fn formatting() {
        assert_eq!(format!("{}", radius(2.5)), "2.5 m");
        let dbg = format!("{:?}", ticks(4));
        assert_eq!(dbg, r#"QuantityKind { kind: "tick", value: 4, unit: "s" }"#);
    }

    #[test]
    fn unrelated_quantity_through_common() {
        let d = QuantityKind::<Distance, Meter>::new(Meters::new(3.0));
        let r = Radii::new(d.common());
        assert_relative_eq!((r + radius(1.0)).value(), 4.0);
        let span = Seconds::new(2.0);
        assert_relative_eq!((d.common() / span).value(), 1.5);
    }

    #[test]
    fn percent_remainder() {
        let r = radius(7.0);
        let rem: Radii = r % crate::Quantity::<Percent>::new(300.0);
        assert_relative_eq!(rem.value(), 1.0);
    }

    proptest! {
        #[test]
        fn prop_scalar_ops_keep_kind(v in -1e6..1e6f64, s in 1e-3..1e3f64) {
            let r = radius(v);
            let m: Radii = r * s;
            let d: Radii = r / s;
            prop_assert!((m.value() - v * s).abs() <= 1e-9 * (v * s).abs().max(1.0));
            prop_assert!((d.value() - v / s).abs() <= 1e-9 * (v / s).abs().max(1.0));
        }

        #[test]
        fn prop_add_zero_is_identity(v in -1e9..1e9f64) {
            prop_assert_eq!(radius(v) + Radii::zero(), radius(v));
        }

        #[test]
        fn prop_integer_step_roundtrip(v in -1000..1000i32) {
            let mut t = ticks(v);
            t.increment();
            t.decrement();
            prop_assert_eq!(t.value(), v);
        }
    }

    #[cfg(feature = "serde")]
    mod serde_tests {
        use super::*;
        use serde::{Deserialize, Serialize};

        #[derive(Serialize, Deserialize, Debug, PartialEq)]
        struct Wheel {
            #[serde(with = "crate::serde_with_kind")]
            radius: Radii,
            spokes: Ticks,
        }

        #[test]
        fn compact_and_tagged() {
            let wheel = Wheel {
                radius: radius(0.35),
                spokes: ticks(32),
            };
            let json = serde_json::to_string(&wheel).unwrap();
            assert_eq!(json, r#"{"radius":{"value":0.35,"unit":"m","kind":"radius"},"spokes":32}"#);
            let back: Wheel = serde_json::from_str(&json).unwrap();
            assert_eq!(back, wheel);
        }

        #[test]
        fn kind_mismatch_is_rejected() {
            let err = serde_json::from_str::<Wheel>(r#"{"radius":{"value":1.0,"unit":"m","kind":"width"},"spokes":1}"#)
                .unwrap_err();
            assert!(err.to_string().contains("kind mismatch: expected 'radius', found 'width'"));
        }

        #[test]
        fn missing_tags_are_accepted() {
            let wheel: Wheel = serde_json::from_str(r#"{"radius":{"value":2.0},"spokes":3}"#).unwrap();
            assert_eq!(wheel.radius, radius(2.0));
        }
    }
}
