use std::fmt;

use crate::constants::{Degree, Radian};
use crate::coordinates::spherical::SphericalCoordinates;
use crate::math::angle;
use crate::nightsky_errors::NightSkyError;

/// Geographic position of an observer on Earth.
///
/// Longitude is east-positive in `[-180°, 180°)`, latitude in `[-90°, 90°]`. Both are kept
/// in radians internally (`[-π, π)` and `[-π/2, π/2]`).
#[derive(Debug, Clone, Copy)]
pub struct GeographicCoordinates(SphericalCoordinates);

impl GeographicCoordinates {
    /// Build a geographic position from a longitude and a latitude in degrees.
    ///
    /// Errors
    /// ------
    /// * [`NightSkyError::InvalidCoordinates`] if either angle is out of its range.
    pub fn of_deg(lon_deg: Degree, lat_deg: Degree) -> Result<Self, NightSkyError> {
        if !Self::is_valid_lon_deg(lon_deg) || !Self::is_valid_lat_deg(lat_deg) {
            return Err(NightSkyError::InvalidCoordinates {
                kind: "geographic",
                lon: lon_deg,
                lat: lat_deg,
            });
        }
        Ok(GeographicCoordinates(SphericalCoordinates::unchecked(
            angle::of_deg(lon_deg),
            angle::of_deg(lat_deg),
        )))
    }

    pub fn is_valid_lon_deg(lon_deg: Degree) -> bool {
        (-180.0..180.0).contains(&lon_deg)
    }

    pub fn is_valid_lat_deg(lat_deg: Degree) -> bool {
        (-90.0..=90.0).contains(&lat_deg)
    }

    pub fn lon(&self) -> Radian {
        self.0.lon()
    }

    pub fn lon_deg(&self) -> Degree {
        self.0.lon_deg()
    }

    pub fn lat(&self) -> Radian {
        self.0.lat()
    }

    pub fn lat_deg(&self) -> Degree {
        self.0.lat_deg()
    }
}

impl fmt::Display for GeographicCoordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(lon={:.4}°, lat={:.4}°)", self.lon_deg(), self.lat_deg())
    }
}
