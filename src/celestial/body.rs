use crate::coordinates::EquatorialCoordinates;
use crate::nightsky_errors::NightSkyError;

/// Attributes shared by every celestial object.
#[derive(Debug, Clone)]
pub struct CelestialBody {
    name: String,
    equatorial_pos: EquatorialCoordinates,
    angular_size: f32,
    magnitude: f32,
}

impl CelestialBody {
    /// Errors
    /// ------
    /// * [`NightSkyError::NegativeAngularSize`] if `angular_size` is negative or NaN.
    pub(crate) fn new(
        name: impl Into<String>,
        equatorial_pos: EquatorialCoordinates,
        angular_size: f32,
        magnitude: f32,
    ) -> Result<Self, NightSkyError> {
        if angular_size.is_nan() || angular_size < 0.0 {
            return Err(NightSkyError::NegativeAngularSize(angular_size));
        }
        Ok(CelestialBody {
            name: name.into(),
            equatorial_pos,
            angular_size,
            magnitude,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn equatorial_pos(&self) -> &EquatorialCoordinates {
        &self.equatorial_pos
    }

    /// Apparent diameter, in radians
    pub fn angular_size(&self) -> f32 {
        self.angular_size
    }

    /// Apparent magnitude; lower is brighter
    pub fn magnitude(&self) -> f32 {
        self.magnitude
    }
}

/// Read access to the attributes every celestial object carries.
///
/// Implementors only provide [`Celestial::body`]; the other accessors delegate to it.
pub trait Celestial {
    fn body(&self) -> &CelestialBody;

    fn name(&self) -> &str {
        self.body().name()
    }

    fn equatorial_pos(&self) -> &EquatorialCoordinates {
        self.body().equatorial_pos()
    }

    fn angular_size(&self) -> f32 {
        self.body().angular_size()
    }

    fn magnitude(&self) -> f32 {
        self.body().magnitude()
    }

    /// Short human-readable description, displayed next to the object.
    fn info(&self) -> String {
        self.name().to_string()
    }
}
