use chrono::{DateTime, TimeZone};

use crate::constants::Radian;
use crate::coordinates::{
    safe_asin, EquatorialCoordinates, GeographicCoordinates, HorizontalCoordinates,
};
use crate::math::angle;
use crate::time::local_sidereal_time;

/// Conversion from equatorial to horizontal coordinates for an observer at a fixed place and
/// instant.
///
/// The local sidereal time and the trigonometric functions of the observer's latitude are
/// computed once at construction.
#[derive(Debug, Clone, Copy)]
pub struct EquatorialToHorizontalConversion {
    local_sidereal_time: Radian,
    sin_lat: f64,
    cos_lat: f64,
}

impl EquatorialToHorizontalConversion {
    pub fn new<Tz: TimeZone>(when: &DateTime<Tz>, place: &GeographicCoordinates) -> Self {
        Self::with_sidereal_time(local_sidereal_time(when, place), place.lat())
    }

    pub(crate) fn with_sidereal_time(local_sidereal_time: Radian, lat: Radian) -> Self {
        let (sin_lat, cos_lat) = lat.sin_cos();
        EquatorialToHorizontalConversion {
            local_sidereal_time,
            sin_lat,
            cos_lat,
        }
    }

    pub fn local_sidereal_time(&self) -> Radian {
        self.local_sidereal_time
    }

    /// Convert equatorial `(α, δ)` to horizontal `(A, h)`.
    ///
    /// With the hour angle `H = LST − α` and the observer latitude `φ`:
    ///
    /// ```text
    /// sin h = sin δ·sin φ + cos δ·cos φ·cos H
    /// A     = atan2(−cos δ·cos φ·sin H, sin δ − sin φ·sin h)   normalized into [0, 2π)
    /// ```
    pub fn apply(&self, equatorial: &EquatorialCoordinates) -> HorizontalCoordinates {
        let hour_angle = self.local_sidereal_time - equatorial.ra();
        let (sin_dec, cos_dec) = equatorial.dec().sin_cos();
        let (sin_ha, cos_ha) = hour_angle.sin_cos();

        let sin_alt = sin_dec * self.sin_lat + cos_dec * self.cos_lat * cos_ha;
        let az = angle::normalize_positive(
            (-cos_dec * self.cos_lat * sin_ha).atan2(sin_dec - self.sin_lat * sin_alt),
        );

        HorizontalCoordinates::from_normalized(az, safe_asin(sin_alt))
    }
}

#[cfg(test)]
mod equatorial_to_horizontal_test {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::Utc;

    #[test]
    fn test_apply_hour_angle() {
        // H = 5h51m44s, δ = 23°13′10″, φ = 52°
        let hour_angle = angle::of_hr(5.0 + 51.0 / 60.0 + 44.0 / 3600.0);
        let conversion =
            EquatorialToHorizontalConversion::with_sidereal_time(hour_angle, angle::of_deg(52.0));
        let equatorial =
            EquatorialCoordinates::of(0.0, angle::of_dms(23, 13, 10.0).unwrap()).unwrap();

        let horizontal = conversion.apply(&equatorial);
        assert_relative_eq!(horizontal.az_deg(), 283.27102726727486, epsilon = 1e-9);
        assert_relative_eq!(horizontal.alt_deg(), 19.33434522438047, epsilon = 1e-9);
    }

    #[test]
    fn test_pole_stays_at_latitude() {
        let when = Utc.with_ymd_and_hms(2020, 3, 20, 22, 0, 0).unwrap();
        let place = GeographicCoordinates::of_deg(6.57, 46.52).unwrap();
        let conversion = EquatorialToHorizontalConversion::new(&when, &place);

        let pole = EquatorialCoordinates::of(1.0, std::f64::consts::FRAC_PI_2).unwrap();
        let horizontal = conversion.apply(&pole);
        assert_relative_eq!(horizontal.alt_deg(), 46.52, epsilon = 1e-9);
    }

    #[test]
    fn test_local_meridian() {
        let when = Utc.with_ymd_and_hms(2020, 3, 20, 22, 0, 0).unwrap();
        let place = GeographicCoordinates::of_deg(6.57, 46.52).unwrap();
        let conversion = EquatorialToHorizontalConversion::new(&when, &place);

        // A star on the equator culminating now stands due south at 90° − φ.
        let ra = angle::normalize_positive(conversion.local_sidereal_time());
        let star = EquatorialCoordinates::of(ra, 0.0).unwrap();
        let horizontal = conversion.apply(&star);
        assert_relative_eq!(horizontal.az_deg(), 180.0, epsilon = 1e-9);
        assert_relative_eq!(horizontal.alt_deg(), 90.0 - 46.52, epsilon = 1e-9);
    }
}
