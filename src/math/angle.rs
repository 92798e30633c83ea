//! # Angle helpers
//!
//! Angles are plain `f64` values in **radians**; this module gathers the unit conversions
//! and the normalization onto `[0, 2π)`.
//!
//! | Function | Input unit | Output unit |
//! |---|---|---|
//! | [`of_deg`] / [`to_deg`] | degrees / radians | radians / degrees |
//! | [`of_hr`] / [`to_hr`] | hours / radians | radians / hours |
//! | [`of_arcsec`] | arcseconds | radians |
//! | [`of_dms`] | degrees, minutes, seconds | radians |
//!
//! All conversions are pure; only [`of_dms`] checks its domain.

use crate::constants::{ArcSec, Degree, Hour, Radian, RADEG, RADH, RADSEC};
use crate::math::interval::RightOpenInterval;
use crate::nightsky_errors::NightSkyError;

/// Reduce any angle into `[0, 2π)`.
///
/// Correct for negative inputs (floored modulo, not the `%` remainder).
pub fn normalize_positive(rad: Radian) -> Radian {
    RightOpenInterval::TURN.reduce(rad)
}

/// Arcseconds → radians
pub fn of_arcsec(sec: ArcSec) -> Radian {
    sec * RADSEC
}

/// Convert a sexagesimal angle `deg° min' sec"` into radians.
///
/// Arguments
/// ---------
/// * `deg`: whole degrees
/// * `min`: whole arcminutes, in `[0, 60)`
/// * `sec`: arcseconds, in `[0, 60)`
///
/// Errors
/// ------
/// * [`NightSkyError::InvalidSexagesimal`] if `min` or `sec` is out of `[0, 60)`.
pub fn of_dms(deg: u32, min: u32, sec: f64) -> Result<Radian, NightSkyError> {
    if min >= 60 || !(0.0..60.0).contains(&sec) {
        return Err(NightSkyError::InvalidSexagesimal {
            minutes: min,
            seconds: sec,
        });
    }
    Ok(of_deg(deg as f64 + min as f64 / 60.0 + sec / 3600.0))
}

/// Degrees → radians
pub fn of_deg(deg: Degree) -> Radian {
    deg * RADEG
}

/// Radians → degrees
pub fn to_deg(rad: Radian) -> Degree {
    rad / RADEG
}

/// Hours → radians
pub fn of_hr(hr: Hour) -> Radian {
    hr * RADH
}

/// Radians → hours
pub fn to_hr(rad: Radian) -> Hour {
    rad / RADH
}
