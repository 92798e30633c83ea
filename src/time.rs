//! # Epochs and sidereal time
//!
//! Elapsed-time computations against the two reference epochs used by the models, and the
//! Greenwich / local sidereal time needed to go from equatorial to horizontal coordinates.
//!
//! ## Reference epochs
//!
//! | Epoch | Instant (UTC) | Used by |
//! |---|---|---|
//! | [`Epoch::J2000`] | 2000-01-01 12:00 | obliquity of the ecliptic, sidereal time |
//! | [`Epoch::J2010`] | 2009-12-31 00:00 (epoch 2010.0) | Sun, Moon and planet models |
//!
//! Instants are [`chrono::DateTime`] values in any time zone. Durations are counted in whole
//! milliseconds of civil (leap-second free) time, then converted to fractional days or
//! Julian centuries.

use std::sync::LazyLock;

use chrono::{DateTime, NaiveTime, TimeZone, Utc};

use crate::constants::{
    Days, JulianCenturies, Radian, DAYS_PER_JULIAN_CENTURY, MILLIS_PER_DAY, MILLIS_PER_HOUR,
};
use crate::coordinates::GeographicCoordinates;
use crate::math::angle;
use crate::math::interval::RightOpenInterval;
use crate::math::polynomial::Polynomial;

/// Greenwich sidereal time at 0h UT, in hours, as a function of Julian centuries since J2000
static GST0_HOURS: LazyLock<Polynomial> =
    LazyLock::new(|| Polynomial::with_coefficients(vec![0.000025862, 2400.051336, 6.697374558]));

/// Ratio of the sidereal day to the solar day
const SIDEREAL_RATE: f64 = 1.002737909;

/// Reference epoch for elapsed-time computations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Epoch {
    J2000,
    J2010,
}

impl Epoch {
    fn unix_millis(&self) -> i64 {
        match self {
            Epoch::J2000 => 946_728_000_000,
            Epoch::J2010 => 1_262_217_600_000,
        }
    }

    /// The epoch as a UTC instant.
    pub fn instant(&self) -> DateTime<Utc> {
        Utc.timestamp_nanos(self.unix_millis() * 1_000_000)
    }

    /// Number of days from the epoch to `when`, negative if `when` is earlier.
    ///
    /// The interval is measured in whole milliseconds, then divided by 86 400 000.
    pub fn days_until<Tz: TimeZone>(&self, when: &DateTime<Tz>) -> Days {
        (when.timestamp_millis() - self.unix_millis()) as f64 / MILLIS_PER_DAY
    }

    /// Number of Julian centuries (36 525 days) from the epoch to `when`.
    pub fn julian_centuries_until<Tz: TimeZone>(&self, when: &DateTime<Tz>) -> JulianCenturies {
        self.days_until(when) / DAYS_PER_JULIAN_CENTURY
    }
}

/// Compute the Greenwich sidereal time at `when`, in radians within `[0, 2π)`.
///
/// Arguments
/// ---------
/// * `when`: the instant, in any time zone
///
/// Details
/// -------
/// 1. Re-express `when` in UTC and take the midnight starting that day.
/// 2. Evaluate `S₀ = 0.000025862·T² + 2400.051336·T + 6.697374558` hours, where `T` counts
///    Julian centuries from J2000 to that midnight.
/// 3. Add `S₁ = 1.002737909·t` where `t` is the number of hours elapsed since midnight.
/// 4. Reduce `S₀ + S₁` into `[0, 24)` hours and convert to radians.
pub fn greenwich_sidereal_time<Tz: TimeZone>(when: &DateTime<Tz>) -> Radian {
    let when_utc = when.with_timezone(&Utc);
    let day_start = when_utc.date_naive().and_time(NaiveTime::MIN).and_utc();

    let t = Epoch::J2000.julian_centuries_until(&day_start);
    let hours = (when_utc - day_start).num_milliseconds() as f64 / MILLIS_PER_HOUR;

    let s0 = GST0_HOURS.at(t);
    let s1 = SIDEREAL_RATE * hours;

    angle::of_hr(RightOpenInterval::DAY_HOURS.reduce(s0 + s1))
}

/// Compute the local sidereal time at `when` for an observer at `place`, in radians.
///
/// This is the Greenwich sidereal time plus the (east-positive) longitude of the observer.
/// The sum is not reduced: it may fall slightly outside `[0, 2π)`, which the hour-angle
/// computation downstream tolerates.
pub fn local_sidereal_time<Tz: TimeZone>(
    when: &DateTime<Tz>,
    place: &GeographicCoordinates,
) -> Radian {
    greenwich_sidereal_time(when) + place.lon()
}
