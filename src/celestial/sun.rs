use crate::celestial::body::{Celestial, CelestialBody};
use crate::coordinates::{EclipticCoordinates, EquatorialCoordinates};
use crate::nightsky_errors::NightSkyError;

const SUN_NAME: &str = "Sun";
const SUN_MAGNITUDE: f32 = -26.7;

/// The Sun at a given instant.
///
/// Besides the common attributes it keeps its ecliptic position and its mean anomaly, both
/// needed by the Moon model to apply the solar perturbations.
#[derive(Debug, Clone)]
pub struct Sun {
    body: CelestialBody,
    ecliptic_pos: EclipticCoordinates,
    mean_anomaly: f32,
}

impl Sun {
    pub fn new(
        ecliptic_pos: EclipticCoordinates,
        equatorial_pos: EquatorialCoordinates,
        angular_size: f32,
        mean_anomaly: f32,
    ) -> Result<Self, NightSkyError> {
        Ok(Sun {
            body: CelestialBody::new(SUN_NAME, equatorial_pos, angular_size, SUN_MAGNITUDE)?,
            ecliptic_pos,
            mean_anomaly,
        })
    }

    pub fn ecliptic_pos(&self) -> &EclipticCoordinates {
        &self.ecliptic_pos
    }

    /// Mean anomaly in radians. Not reduced into `[0, 2π)`.
    pub fn mean_anomaly(&self) -> f32 {
        self.mean_anomaly
    }
}

impl Celestial for Sun {
    fn body(&self) -> &CelestialBody {
        &self.body
    }
}
