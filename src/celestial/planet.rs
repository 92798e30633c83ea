use crate::celestial::body::{Celestial, CelestialBody};
use crate::coordinates::EquatorialCoordinates;
use crate::nightsky_errors::NightSkyError;

/// A planet of the solar system, as seen from Earth at a given instant.
#[derive(Debug, Clone)]
pub struct Planet {
    body: CelestialBody,
}

impl Planet {
    pub fn new(
        name: impl Into<String>,
        equatorial_pos: EquatorialCoordinates,
        angular_size: f32,
        magnitude: f32,
    ) -> Result<Self, NightSkyError> {
        Ok(Planet {
            body: CelestialBody::new(name, equatorial_pos, angular_size, magnitude)?,
        })
    }
}

impl Celestial for Planet {
    fn body(&self) -> &CelestialBody {
        &self.body
    }
}
