//! Time units.
//!
//! The canonical scaling unit for this dimension is [`Second`] (`Second::RATIO == 1.0`). Civil units use the
//! conventional mapping `1 day = 86_400 s` (leap seconds ignored).
//!
//! Quantities in seconds interoperate with [`core::time::Duration`]:
//!
//! ```rust
//! use core::time::Duration;
//! use qkind_core::time::{Minute, Seconds};
//!
//! let s: Seconds = Duration::from_millis(90_000).into();
//! assert_eq!(s.to::<Minute>().value(), 1.5);
//!
//! let back = Duration::try_from(s).unwrap();
//! assert_eq!(back.as_secs(), 90);
//! ```

use crate::typenum::{P1, Z0};
use crate::{Dim, Quantity, Unit};
use core::time::{Duration, TryFromFloatSecsError};
use qkind_derive::Unit;

/// Dimension of time.
pub type Time = Dim<Z0, Z0, P1, Z0, Z0, Z0, Z0>;

/// Marker trait for any [`Unit`] whose dimension is [`Time`].
pub trait TimeUnit: Unit<Dim = Time> {}
impl<T: Unit<Dim = Time>> TimeUnit for T {}

/// Seconds per mean solar day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Nanosecond (`1e-9 s`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "ns", dimension = Time, ratio = 1e-9)]
pub struct Nanosecond;
/// A quantity measured in nanoseconds.
pub type Nanoseconds = Quantity<Nanosecond>;

/// Microsecond (`1e-6 s`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "µs", dimension = Time, ratio = 1e-6)]
pub struct Microsecond;
/// A quantity measured in microseconds.
pub type Microseconds = Quantity<Microsecond>;

/// Millisecond (`1e-3 s`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "ms", dimension = Time, ratio = 1e-3)]
pub struct Millisecond;
/// A quantity measured in milliseconds.
pub type Milliseconds = Quantity<Millisecond>;

/// Second (SI base unit).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "s", dimension = Time, ratio = 1.0)]
pub struct Second;
/// A quantity measured in seconds.
pub type Seconds = Quantity<Second>;
/// One second.
pub const SEC: Seconds = Seconds::new(1.0);

/// Minute (`60 s`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "min", dimension = Time, ratio = 60.0)]
pub struct Minute;
/// A quantity measured in minutes.
pub type Minutes = Quantity<Minute>;
/// One minute.
pub const MIN: Minutes = Minutes::new(1.0);

/// Hour (`3600 s`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "h", dimension = Time, ratio = 3_600.0)]
pub struct Hour;
/// A quantity measured in hours.
pub type Hours = Quantity<Hour>;
/// One hour.
pub const HOUR: Hours = Hours::new(1.0);

/// Day (`86 400 s`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "d", dimension = Time, ratio = SECONDS_PER_DAY)]
pub struct Day;
/// A quantity measured in days.
pub type Days = Quantity<Day>;
/// One day.
pub const DAY: Days = Days::new(1.0);

/// Week (`7 d`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "wk", dimension = Time, ratio = 7.0 * SECONDS_PER_DAY)]
pub struct Week;
/// A quantity measured in weeks.
pub type Weeks = Quantity<Week>;

crate::impl_unit_conversions!(Nanosecond, Microsecond, Millisecond, Second, Minute, Hour, Day, Week);

impl From<Duration> for Seconds {
    #[inline]
    fn from(d: Duration) -> Self {
        Self::new(d.as_secs_f64())
    }
}

impl<U: TimeUnit> TryFrom<Quantity<U>> for Duration {
    type Error = TryFromFloatSecsError;

    /// Fails for negative, non-finite or overflowing values.
    fn try_from(q: Quantity<U>) -> Result<Self, Self::Error> {
        Duration::try_from_secs_f64(q.to::<Second>().value())
    }
}
