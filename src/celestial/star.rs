use std::hash::{Hash, Hasher};

use ordered_float::OrderedFloat;

use crate::celestial::body::{Celestial, CelestialBody};
use crate::coordinates::EquatorialCoordinates;
use crate::nightsky_errors::NightSkyError;

/// A catalogued star.
///
/// Stars are point sources: their angular size is always zero.
///
/// Equality and hashing are by value over every attribute, so that an asterism built from
/// a separate copy of a star still finds it in the catalogue. Floating-point attributes are
/// compared bitwise through [`OrderedFloat`].
#[derive(Debug, Clone)]
pub struct Star {
    body: CelestialBody,
    hipparcos_id: u32,
    color_index: f32,
}

impl Star {
    /// Build a star.
    ///
    /// Arguments
    /// ---------
    /// * `hipparcos_id`: Hipparcos catalogue number (0 when unknown).
    /// * `name`: display name.
    /// * `equatorial_pos`: J2000 equatorial position.
    /// * `magnitude`: apparent visual magnitude.
    /// * `color_index`: B−V color index, in `[-0.5, 5.5]`.
    ///
    /// Errors
    /// ------
    /// * [`NightSkyError::InvalidColorIndex`] if the color index is out of range.
    pub fn new(
        hipparcos_id: u32,
        name: impl Into<String>,
        equatorial_pos: EquatorialCoordinates,
        magnitude: f32,
        color_index: f32,
    ) -> Result<Self, NightSkyError> {
        if !(-0.5..=5.5).contains(&color_index) {
            return Err(NightSkyError::InvalidColorIndex(color_index));
        }
        Ok(Star {
            body: CelestialBody::new(name, equatorial_pos, 0.0, magnitude)?,
            hipparcos_id,
            color_index,
        })
    }

    pub fn hipparcos_id(&self) -> u32 {
        self.hipparcos_id
    }

    pub fn color_index(&self) -> f32 {
        self.color_index
    }

    /// Approximate color temperature in kelvin, from the B−V index `c` (Ballesteros, 2012):
    ///
    /// ```text
    /// T = 4600·(1 / (0.92·c + 1.7) + 1 / (0.92·c + 0.62))
    /// ```
    pub fn color_temperature(&self) -> u32 {
        let c = self.color_index as f64;
        (4600.0 * (1.0 / (0.92 * c + 1.7) + 1.0 / (0.92 * c + 0.62))) as u32
    }

    fn key(&self) -> (u32, &str, [OrderedFloat<f64>; 2], [OrderedFloat<f32>; 2]) {
        let pos = self.body.equatorial_pos();
        (
            self.hipparcos_id,
            self.body.name(),
            [OrderedFloat(pos.ra()), OrderedFloat(pos.dec())],
            [
                OrderedFloat(self.body.magnitude()),
                OrderedFloat(self.color_index),
            ],
        )
    }
}

impl Celestial for Star {
    fn body(&self) -> &CelestialBody {
        &self.body
    }
}

impl PartialEq for Star {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Star {}

impl Hash for Star {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}
