use crate::celestial::Moon;
use crate::constants::{Days, Radian, RADEG};
use crate::conversions::EclipticToEquatorialConversion;
use crate::coordinates::{safe_asin, EclipticCoordinates};
use crate::math::angle;
use crate::models::sun_model::SolarPosition;
use crate::models::CelestialObjectModel;
use crate::nightsky_errors::NightSkyError;

/// Mean longitude at J2010
const MEAN_LON_AT_EPOCH: Radian = 91.929336 * RADEG;
/// Mean longitude of the perigee at J2010
const PERIGEE_LON_AT_EPOCH: Radian = 130.143076 * RADEG;
/// Longitude of the ascending node at J2010
const NODE_LON_AT_EPOCH: Radian = 291.682547 * RADEG;
const INCLINATION: Radian = 5.145396 * RADEG;
const ECCENTRICITY: f64 = 0.0549;
/// Angular diameter at the semi-major axis distance
const ANGULAR_SIZE_MEAN: Radian = 0.5181 * RADEG;

/// Daily motions, in radians per day
const MEAN_LON_RATE: Radian = 13.1763966 * RADEG;
const PERIGEE_RATE: Radian = 0.1114041 * RADEG;
const NODE_RATE: Radian = 0.0529539 * RADEG;

const MOON_MAGNITUDE: f32 = 0.0;

/// Position model of the Moon.
///
/// The Moon follows a Keplerian ellipse around the Earth whose mean anomaly and longitude
/// are corrected for the main solar perturbations:
///
/// | Term | Amplitude | Argument |
/// |---|---|---|
/// | evection `Ev` | 1.2739° | `2(l − λ☉) − M` |
/// | annual equation `Ae` | 0.1858° | `M☉` |
/// | third correction `A₃` | 0.37° | `M☉` |
/// | equation of center `Ec` | 6.2886° | `M'` |
/// | fourth correction `A₄` | 0.214° | `2M'` |
/// | variation `V` | 0.6583° | `2(l' − λ☉)` |
#[derive(Debug, Clone, Copy, Default)]
pub struct MoonModel;

impl CelestialObjectModel for MoonModel {
    type Object = Moon;

    fn at(
        &self,
        days_since_j2010: Days,
        conversion: &EclipticToEquatorialConversion,
    ) -> Result<Moon, NightSkyError> {
        let d = days_since_j2010;
        let sun = SolarPosition::at(d);
        let sin_sun_anomaly = sun.mean_anomaly.sin();

        // Mean orbital longitude and mean anomaly
        let mean_lon = MEAN_LON_RATE * d + MEAN_LON_AT_EPOCH;
        let mean_anomaly = mean_lon - PERIGEE_RATE * d - PERIGEE_LON_AT_EPOCH;

        // Corrected anomaly
        let evection = 1.2739 * RADEG * (2.0 * (mean_lon - sun.lon) - mean_anomaly).sin();
        let annual_equation = 0.1858 * RADEG * sin_sun_anomaly;
        let a3 = 0.37 * RADEG * sin_sun_anomaly;
        let corrected_anomaly = mean_anomaly + evection - annual_equation - a3;

        // Corrected longitude, then true longitude
        let center_equation = 6.2886 * RADEG * corrected_anomaly.sin();
        let a4 = 0.214 * RADEG * (2.0 * corrected_anomaly).sin();
        let corrected_lon = mean_lon + evection + center_equation - annual_equation + a4;
        let variation = 0.6583 * RADEG * (2.0 * (corrected_lon - sun.lon)).sin();
        let true_lon = corrected_lon + variation;

        // Ascending node, then ecliptic position
        let node_lon = NODE_LON_AT_EPOCH - NODE_RATE * d - 0.16 * RADEG * sin_sun_anomaly;
        let (sin_dl, cos_dl) = (true_lon - node_lon).sin_cos();
        let ecliptic = EclipticCoordinates::from_normalized(
            angle::normalize_positive((sin_dl * INCLINATION.cos()).atan2(cos_dl) + node_lon),
            safe_asin(sin_dl * INCLINATION.sin()),
        );

        let phase = (1.0 - (true_lon - sun.lon).cos()) / 2.0;

        let e = ECCENTRICITY;
        let distance = (1.0 - e * e) / (1.0 + e * (corrected_anomaly + center_equation).cos());
        let angular_size = ANGULAR_SIZE_MEAN / distance;

        Moon::new(
            conversion.apply(&ecliptic),
            angular_size as f32,
            MOON_MAGNITUDE,
            phase as f32,
        )
    }
}

#[cfg(test)]
mod moon_model_test {
    use super::*;
    use crate::celestial::Celestial;
    use crate::time::Epoch;
    use approx::assert_relative_eq;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_moon_2003_09_01() {
        let when = Utc.with_ymd_and_hms(2003, 9, 1, 0, 0, 0).unwrap();
        let days = Epoch::J2010.days_until(&when);
        assert_eq!(days, -2313.0);

        let moon = MoonModel.at(days, &EclipticToEquatorialConversion::new(&when)).unwrap();
        assert_eq!(moon.name(), "Moon");
        assert_relative_eq!(moon.equatorial_pos().ra_hr(), 14.211456462003504, epsilon = 1e-10);
        assert_relative_eq!(moon.equatorial_pos().dec(), -0.20114171387374752, epsilon = 1e-10);
        assert_relative_eq!(moon.angular_size(), 0.009543821_f32, max_relative = 1e-6);
        assert_relative_eq!(moon.phase(), 0.22500609_f32, max_relative = 1e-6);
        assert_eq!(moon.info(), "Moon (22.5%)");
    }

    #[test]
    fn test_moon_1979_09_01() {
        let when = Utc.with_ymd_and_hms(1979, 9, 1, 0, 0, 0).unwrap();
        let days = Epoch::J2010.days_until(&when);

        let moon = MoonModel.at(days, &EclipticToEquatorialConversion::new(&when)).unwrap();
        assert_relative_eq!(moon.angular_size(), 0.009225909_f32, max_relative = 1e-6);
        assert_relative_eq!(moon.phase(), 0.6325421_f32, max_relative = 1e-6);
    }
}
