use std::f64::consts::FRAC_PI_2;

use crate::constants::{Degree, Radian};
use crate::math::angle;
use crate::math::interval::{Interval, RightOpenInterval};
use crate::nightsky_errors::NightSkyError;

/// Longitude/latitude pair shared by every celestial coordinate system.
///
/// This type only stores the two angles; the named wrappers (equatorial, ecliptic,
/// horizontal, geographic) decide which ranges are legal when they build one.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SphericalCoordinates {
    lon: Radian,
    lat: Radian,
}

impl SphericalCoordinates {
    /// Store `(lon, lat)` after checking `lon ∈ [0, 2π)` and `lat ∈ [-π/2, π/2]`.
    pub(crate) fn checked(
        kind: &'static str,
        lon: Radian,
        lat: Radian,
    ) -> Result<Self, NightSkyError> {
        if RightOpenInterval::TURN.contains(lon) && (-FRAC_PI_2..=FRAC_PI_2).contains(&lat) {
            Ok(SphericalCoordinates { lon, lat })
        } else {
            Err(NightSkyError::InvalidCoordinates { kind, lon, lat })
        }
    }

    /// Store `(lon, lat)` produced by a computation that already normalized both angles.
    pub(crate) fn from_normalized(lon: Radian, lat: Radian) -> Self {
        debug_assert!(
            RightOpenInterval::TURN.contains(lon) && (-FRAC_PI_2..=FRAC_PI_2).contains(&lat),
            "unnormalized coordinates ({lon}, {lat})"
        );
        SphericalCoordinates { lon, lat }
    }

    /// Store `(lon, lat)` as is; the caller has validated its own ranges.
    pub(crate) fn unchecked(lon: Radian, lat: Radian) -> Self {
        SphericalCoordinates { lon, lat }
    }

    pub(crate) fn lon(&self) -> Radian {
        self.lon
    }

    pub(crate) fn lon_deg(&self) -> Degree {
        angle::to_deg(self.lon)
    }

    pub(crate) fn lat(&self) -> Radian {
        self.lat
    }

    pub(crate) fn lat_deg(&self) -> Degree {
        angle::to_deg(self.lat)
    }
}

/// Clamp the argument of `asin` onto `[-1, 1]` to absorb rounding drift.
pub(crate) fn safe_asin(x: f64) -> Radian {
    x.clamp(-1.0, 1.0).asin()
}
