use chrono::{DateTime, TimeZone};

use crate::constants::Radian;
use crate::coordinates::{safe_asin, EclipticCoordinates, EquatorialCoordinates};
use crate::earth_orientation::mean_obliquity;
use crate::math::angle;
use crate::time::Epoch;

/// Rotation from ecliptic to equatorial coordinates at a given instant.
///
/// The obliquity of the ecliptic ε is evaluated once at construction and only its sine and
/// cosine are kept.
#[derive(Debug, Clone, Copy)]
pub struct EclipticToEquatorialConversion {
    obliquity: Radian,
    cos_obliquity: f64,
    sin_obliquity: f64,
}

impl EclipticToEquatorialConversion {
    pub fn new<Tz: TimeZone>(when: &DateTime<Tz>) -> Self {
        let obliquity = mean_obliquity(Epoch::J2000.julian_centuries_until(when));
        EclipticToEquatorialConversion {
            obliquity,
            cos_obliquity: obliquity.cos(),
            sin_obliquity: obliquity.sin(),
        }
    }

    /// Obliquity of the ecliptic used by this conversion, in radians
    pub fn obliquity(&self) -> Radian {
        self.obliquity
    }

    /// Convert ecliptic `(λ, β)` into equatorial `(α, δ)`:
    ///
    /// ```text
    /// α = atan2(sin λ·cos ε − tan β·sin ε, cos λ)   normalized into [0, 2π)
    /// δ = asin(sin β·cos ε + cos β·sin ε·sin λ)
    /// ```
    pub fn apply(&self, ecliptic: &EclipticCoordinates) -> EquatorialCoordinates {
        let (sin_lon, cos_lon) = ecliptic.lon().sin_cos();
        let (sin_lat, cos_lat) = ecliptic.lat().sin_cos();

        let ra = angle::normalize_positive(
            (sin_lon * self.cos_obliquity - ecliptic.lat().tan() * self.sin_obliquity)
                .atan2(cos_lon),
        );
        let dec = safe_asin(sin_lat * self.cos_obliquity + cos_lat * self.sin_obliquity * sin_lon);

        EquatorialCoordinates::from_normalized(ra, dec)
    }
}
