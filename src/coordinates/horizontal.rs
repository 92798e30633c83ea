use std::f64::consts::FRAC_PI_2;
use std::fmt;

use crate::constants::{Degree, Radian};
use crate::coordinates::spherical::SphericalCoordinates;
use crate::math::angle;
use crate::nightsky_errors::NightSkyError;

/// Horizontal (local) coordinates of the observer: azimuth in `[0, 2π)` measured from north
/// towards east, altitude in `[-π/2, π/2]` above the horizon.
#[derive(Debug, Clone, Copy)]
pub struct HorizontalCoordinates(SphericalCoordinates);

impl HorizontalCoordinates {
    /// Errors
    /// ------
    /// * [`NightSkyError::InvalidCoordinates`] if `az ∉ [0, 2π)` or `alt ∉ [-π/2, π/2]`.
    pub fn of(az: Radian, alt: Radian) -> Result<Self, NightSkyError> {
        SphericalCoordinates::checked("horizontal", az, alt).map(HorizontalCoordinates)
    }

    /// Same as [`HorizontalCoordinates::of`] with angles in degrees
    /// (`az_deg ∈ [0, 360)`, `alt_deg ∈ [-90, 90]`).
    pub fn of_deg(az_deg: Degree, alt_deg: Degree) -> Result<Self, NightSkyError> {
        if !(0.0..360.0).contains(&az_deg) || !(-90.0..=90.0).contains(&alt_deg) {
            return Err(NightSkyError::InvalidCoordinates {
                kind: "horizontal",
                lon: az_deg,
                lat: alt_deg,
            });
        }
        Self::of(
            angle::normalize_positive(angle::of_deg(az_deg)),
            angle::of_deg(alt_deg).clamp(-FRAC_PI_2, FRAC_PI_2),
        )
    }

    pub(crate) fn from_normalized(az: Radian, alt: Radian) -> Self {
        HorizontalCoordinates(SphericalCoordinates::from_normalized(az, alt))
    }

    pub fn az(&self) -> Radian {
        self.0.lon()
    }

    pub fn az_deg(&self) -> Degree {
        self.0.lon_deg()
    }

    pub fn alt(&self) -> Radian {
        self.0.lat()
    }

    pub fn alt_deg(&self) -> Degree {
        self.0.lat_deg()
    }

    /// Name the compass octant the azimuth falls into, built from the four cardinal
    /// letters supplied by the caller (e.g. `"N"`, `"E"`, `"S"`, `"O"` for French).
    ///
    /// Each octant spans 45° centered on its direction: `[337.5°, 22.5°)` is north,
    /// `[22.5°, 67.5°)` north-east, and so on clockwise.
    pub fn az_octant_name(&self, n: &str, e: &str, s: &str, w: &str) -> String {
        let octant = ((self.az_deg() + 22.5) / 45.0).floor() as usize % 8;
        match octant {
            0 => n.to_string(),
            1 => format!("{n}{e}"),
            2 => e.to_string(),
            3 => format!("{s}{e}"),
            4 => s.to_string(),
            5 => format!("{s}{w}"),
            6 => w.to_string(),
            _ => format!("{n}{w}"),
        }
    }

    /// Great-circle angular distance between `self` and `that`, in radians.
    ///
    /// Evaluated with the haversine form of
    /// `acos(sin φ₁ sin φ₂ + cos φ₁ cos φ₂ cos(λ₁ − λ₂))`, which is exact at zero distance.
    pub fn angular_distance_to(&self, that: &HorizontalCoordinates) -> Radian {
        let half_dlat = ((self.alt() - that.alt()) / 2.0).sin();
        let half_dlon = ((self.az() - that.az()) / 2.0).sin();
        let h = half_dlat * half_dlat
            + self.alt().cos() * that.alt().cos() * half_dlon * half_dlon;
        2.0 * h.sqrt().min(1.0).asin()
    }
}

impl fmt::Display for HorizontalCoordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(az={:.4}°, alt={:.4}°)", self.az_deg(), self.alt_deg())
    }
}

#[cfg(test)]
mod horizontal_test {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_of_deg() {
        let h = HorizontalCoordinates::of_deg(350.0, 7.2).unwrap();
        assert_relative_eq!(h.az_deg(), 350.0, epsilon = 1e-12);
        assert_relative_eq!(h.alt_deg(), 7.2, epsilon = 1e-12);
        assert_eq!(h.to_string(), "(az=350.0000°, alt=7.2000°)");

        assert!(HorizontalCoordinates::of_deg(360.0, 0.0).is_err());
        assert!(HorizontalCoordinates::of_deg(0.0, 90.5).is_err());
        assert!(HorizontalCoordinates::of_deg(0.0, 90.0).is_ok());
    }

    #[test]
    fn test_octant_names() {
        let name = |az| {
            HorizontalCoordinates::of_deg(az, 0.0)
                .unwrap()
                .az_octant_name("N", "E", "S", "O")
        };
        assert_eq!(name(0.0), "N");
        assert_eq!(name(350.0), "N");
        assert_eq!(name(30.0), "NE");
        assert_eq!(name(90.0), "E");
        assert_eq!(name(135.0), "SE");
        assert_eq!(name(180.0), "S");
        assert_eq!(name(225.0), "SO");
        assert_eq!(name(270.0), "O");
        assert_eq!(name(335.0), "NO");
    }

    #[test]
    fn test_angular_distance() {
        let epfl = HorizontalCoordinates::of_deg(6.5682, 46.5183).unwrap();
        let zurich = HorizontalCoordinates::of_deg(8.5476, 47.3763).unwrap();
        let moscow = HorizontalCoordinates::of_deg(37.6173, 55.7558).unwrap();
        assert_relative_eq!(epfl.angular_distance_to(&zurich), 0.0279, epsilon = 1e-4);
        assert_relative_eq!(
            epfl.angular_distance_to(&moscow),
            0.3721368153534738,
            epsilon = 1e-12
        );

        assert_eq!(epfl.angular_distance_to(&epfl), 0.0);
        assert_relative_eq!(
            epfl.angular_distance_to(&moscow),
            moscow.angular_distance_to(&epfl),
            epsilon = 1e-15
        );
    }
}
