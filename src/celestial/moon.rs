use crate::celestial::body::{Celestial, CelestialBody};
use crate::coordinates::EquatorialCoordinates;
use crate::nightsky_errors::NightSkyError;

const MOON_NAME: &str = "Moon";

/// The Moon at a given instant, with its illuminated fraction.
#[derive(Debug, Clone)]
pub struct Moon {
    body: CelestialBody,
    phase: f32,
}

impl Moon {
    /// Errors
    /// ------
    /// * [`NightSkyError::InvalidPhase`] if `phase ∉ [0, 1]`.
    /// * [`NightSkyError::NegativeAngularSize`] if `angular_size < 0`.
    pub fn new(
        equatorial_pos: EquatorialCoordinates,
        angular_size: f32,
        magnitude: f32,
        phase: f32,
    ) -> Result<Self, NightSkyError> {
        if !(0.0..=1.0).contains(&phase) {
            return Err(NightSkyError::InvalidPhase(phase));
        }
        Ok(Moon {
            body: CelestialBody::new(MOON_NAME, equatorial_pos, angular_size, magnitude)?,
            phase,
        })
    }

    /// Illuminated fraction of the disc, in `[0, 1]`
    pub fn phase(&self) -> f32 {
        self.phase
    }
}

impl Celestial for Moon {
    fn body(&self) -> &CelestialBody {
        &self.body
    }

    /// Name followed by the illuminated percentage, e.g. `Moon (37.5%)`.
    fn info(&self) -> String {
        format!("{} ({:.1}%)", self.name(), self.phase * 100.0)
    }
}
