use std::fmt;

use crate::constants::{Degree, Hour, Radian};
use crate::coordinates::spherical::SphericalCoordinates;
use crate::math::angle;
use crate::nightsky_errors::NightSkyError;

/// Equatorial coordinates: right ascension in `[0, 2π)` and declination in `[-π/2, π/2]`,
/// both in radians.
#[derive(Debug, Clone, Copy)]
pub struct EquatorialCoordinates(SphericalCoordinates);

impl EquatorialCoordinates {
    /// Build equatorial coordinates from a right ascension and a declination in radians.
    ///
    /// Errors
    /// ------
    /// * [`NightSkyError::InvalidCoordinates`] if `ra ∉ [0, 2π)` or `dec ∉ [-π/2, π/2]`.
    pub fn of(ra: Radian, dec: Radian) -> Result<Self, NightSkyError> {
        SphericalCoordinates::checked("equatorial", ra, dec).map(EquatorialCoordinates)
    }

    pub(crate) fn from_normalized(ra: Radian, dec: Radian) -> Self {
        EquatorialCoordinates(SphericalCoordinates::from_normalized(ra, dec))
    }

    pub fn ra(&self) -> Radian {
        self.0.lon()
    }

    pub fn ra_deg(&self) -> Degree {
        self.0.lon_deg()
    }

    pub fn ra_hr(&self) -> Hour {
        angle::to_hr(self.0.lon())
    }

    pub fn dec(&self) -> Radian {
        self.0.lat()
    }

    pub fn dec_deg(&self) -> Degree {
        self.0.lat_deg()
    }
}

impl fmt::Display for EquatorialCoordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(ra={:.4}h, dec={:.4}°)", self.ra_hr(), self.dec_deg())
    }
}

#[cfg(test)]
mod equatorial_test {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_accessors() {
        let c = EquatorialCoordinates::of(PI, -PI / 4.0).unwrap();
        assert_relative_eq!(c.ra_hr(), 12.0);
        assert_relative_eq!(c.ra_deg(), 180.0);
        assert_relative_eq!(c.dec_deg(), -45.0);
        assert_eq!(c.to_string(), "(ra=12.0000h, dec=-45.0000°)");
    }

    #[test]
    fn test_invalid() {
        assert!(EquatorialCoordinates::of(2.0 * PI, 0.0).is_err());
        assert!(EquatorialCoordinates::of(0.0, 1.6).is_err());
        assert!(EquatorialCoordinates::of(f64::NAN, 0.0).is_err());
    }
}
