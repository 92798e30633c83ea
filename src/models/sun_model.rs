use crate::celestial::Sun;
use crate::constants::{Days, Radian, RADEG};
use crate::conversions::EclipticToEquatorialConversion;
use crate::coordinates::EclipticCoordinates;
use crate::math::angle;
use crate::models::orbit::OrbitalElements;
use crate::models::CelestialObjectModel;
use crate::nightsky_errors::NightSkyError;

/// Earth's orbit, as seen the other way round: the Sun's apparent yearly path.
const SUN_ORBIT: OrbitalElements = OrbitalElements {
    revolution_period: 1.0,
    lon_at_epoch: 279.557208 * RADEG,
    lon_perigee: 283.112438 * RADEG,
    eccentricity: 0.016705,
    semi_major_axis: 1.0,
    inclination: 0.0,
    lon_ascending_node: 0.0,
};

/// Angular diameter of the Sun at 1 AU
const ANGULAR_SIZE_1AU: Radian = 0.533128 * RADEG;

/// Geocentric ecliptic longitude and mean anomaly of the Sun, both in radians.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SolarPosition {
    pub lon: Radian,
    pub mean_anomaly: Radian,
    pub true_anomaly: Radian,
}

impl SolarPosition {
    pub(crate) fn at(days: Days) -> Self {
        let mean_anomaly = SUN_ORBIT.mean_anomaly(days);
        let true_anomaly = SUN_ORBIT.true_anomaly(mean_anomaly);
        SolarPosition {
            lon: angle::normalize_positive(true_anomaly + SUN_ORBIT.lon_perigee),
            mean_anomaly,
            true_anomaly,
        }
    }
}

/// Position model of the Sun.
#[derive(Debug, Clone, Copy, Default)]
pub struct SunModel;

impl CelestialObjectModel for SunModel {
    type Object = Sun;

    /// The Sun moves on the ecliptic (β = 0). Its apparent diameter varies with the
    /// Earth–Sun distance:
    ///
    /// ```text
    /// θ = θ₀·(1 + e·cos v) / (1 − e²)
    /// ```
    fn at(
        &self,
        days_since_j2010: Days,
        conversion: &EclipticToEquatorialConversion,
    ) -> Result<Sun, NightSkyError> {
        let position = SolarPosition::at(days_since_j2010);
        let e = SUN_ORBIT.eccentricity;
        let angular_size =
            ANGULAR_SIZE_1AU * (1.0 + e * position.true_anomaly.cos()) / (1.0 - e * e);

        let ecliptic = EclipticCoordinates::from_normalized(position.lon, 0.0);
        Sun::new(
            ecliptic,
            conversion.apply(&ecliptic),
            angular_size as f32,
            position.mean_anomaly as f32,
        )
    }
}
