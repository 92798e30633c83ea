use std::f64::consts::PI;
use std::fmt;

use crate::celestial::Planet;
use crate::constants::{Days, Radian, RADEG, RADSEC};
use crate::conversions::EclipticToEquatorialConversion;
use crate::coordinates::EclipticCoordinates;
use crate::math::angle;
use crate::models::orbit::OrbitalElements;
use crate::models::CelestialObjectModel;
use crate::nightsky_errors::NightSkyError;

/// Orbital elements of a planet at J2010, in the units of the usual tables (angles in
/// degrees, apparent size at 1 AU in arcseconds), plus its magnitude at 1 AU.
#[derive(Debug, Clone, Copy)]
struct PlanetElements {
    revolution_period: f64,
    lon_at_epoch: f64,
    lon_perigee: f64,
    eccentricity: f64,
    semi_major_axis: f64,
    inclination: f64,
    lon_ascending_node: f64,
    angular_size_1au: f64,
    magnitude_1au: f64,
}

impl PlanetElements {
    fn orbit(&self) -> OrbitalElements {
        OrbitalElements {
            revolution_period: self.revolution_period,
            lon_at_epoch: self.lon_at_epoch * RADEG,
            lon_perigee: self.lon_perigee * RADEG,
            eccentricity: self.eccentricity,
            semi_major_axis: self.semi_major_axis,
            inclination: self.inclination * RADEG,
            lon_ascending_node: self.lon_ascending_node * RADEG,
        }
    }

    fn angular_size_1au(&self) -> Radian {
        self.angular_size_1au * RADSEC
    }
}

macro_rules! planet_elements {
    ($tp:expr, $eps:expr, $peri:expr, $e:expr, $a:expr, $i:expr, $node:expr, $size:expr, $mag:expr) => {
        PlanetElements {
            revolution_period: $tp,
            lon_at_epoch: $eps,
            lon_perigee: $peri,
            eccentricity: $e,
            semi_major_axis: $a,
            inclination: $i,
            lon_ascending_node: $node,
            angular_size_1au: $size,
            magnitude_1au: $mag,
        }
    };
}

#[rustfmt::skip]
mod table {
    use super::PlanetElements;
    //                                                   Tp          ε           ϖ           e         a         i         Ω          θ₀      V₀
    pub(super) const MERCURY: PlanetElements = planet_elements!(0.240852,   75.5671,    77.612,     0.205628, 0.387099, 7.0051,   48.449,    6.74,   -0.42);
    pub(super) const VENUS: PlanetElements =   planet_elements!(0.615207,   272.30044,  131.54,     0.006773, 0.723329, 3.3947,   76.769,    16.92,  -4.40);
    pub(super) const EARTH: PlanetElements =   planet_elements!(0.999996,   99.556772,  103.2055,   0.016671, 0.999985, 0.0,      0.0,       0.0,    0.0);
    pub(super) const MARS: PlanetElements =    planet_elements!(1.880765,   109.09646,  336.217,    0.093348, 1.523689, 1.8497,   49.632,    9.36,   -1.52);
    pub(super) const JUPITER: PlanetElements = planet_elements!(11.857911,  337.917132, 14.6633,    0.048907, 5.20278,  1.3035,   100.595,   196.74, -9.40);
    pub(super) const SATURN: PlanetElements =  planet_elements!(29.310579,  172.398316, 89.567,     0.053853, 9.51134,  2.4873,   113.752,   165.60, -8.88);
    pub(super) const URANUS: PlanetElements =  planet_elements!(84.039492,  356.135400, 172.884833, 0.046321, 19.21814, 0.773059, 73.926961, 65.80,  -7.19);
    pub(super) const NEPTUNE: PlanetElements = planet_elements!(165.84539,  326.895127, 23.07,      0.010483, 30.1985,  1.7673,   131.879,   62.20,  -6.87);
}

use table::{EARTH, JUPITER, MARS, MERCURY, NEPTUNE, SATURN, URANUS, VENUS};

/// Position model of the eight planets.
///
/// Each planet follows its Keplerian ellipse around the Sun; its geocentric position is
/// obtained by subtracting the heliocentric position of the Earth, with a different
/// formula for inner (`a < 1 AU`) and outer planets.
///
/// Evaluating [`PlanetModel::Earth`] fails with [`NightSkyError::EarthNotObservable`]: the
/// Earth is only used as the observation point of the other planets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlanetModel {
    Mercury,
    Venus,
    Earth,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
}

impl PlanetModel {
    /// All planets, in order of distance to the Sun.
    pub const ALL: [PlanetModel; 8] = [
        PlanetModel::Mercury,
        PlanetModel::Venus,
        PlanetModel::Earth,
        PlanetModel::Mars,
        PlanetModel::Jupiter,
        PlanetModel::Saturn,
        PlanetModel::Uranus,
        PlanetModel::Neptune,
    ];

    /// All planets but the Earth, in order of distance to the Sun.
    pub fn extraterrestrial() -> impl Iterator<Item = PlanetModel> {
        Self::ALL
            .into_iter()
            .filter(|planet| *planet != PlanetModel::Earth)
    }

    pub fn name(&self) -> &'static str {
        match self {
            PlanetModel::Mercury => "Mercury",
            PlanetModel::Venus => "Venus",
            PlanetModel::Earth => "Earth",
            PlanetModel::Mars => "Mars",
            PlanetModel::Jupiter => "Jupiter",
            PlanetModel::Saturn => "Saturn",
            PlanetModel::Uranus => "Uranus",
            PlanetModel::Neptune => "Neptune",
        }
    }

    fn elements(&self) -> &'static PlanetElements {
        match self {
            PlanetModel::Mercury => &MERCURY,
            PlanetModel::Venus => &VENUS,
            PlanetModel::Earth => &EARTH,
            PlanetModel::Mars => &MARS,
            PlanetModel::Jupiter => &JUPITER,
            PlanetModel::Saturn => &SATURN,
            PlanetModel::Uranus => &URANUS,
            PlanetModel::Neptune => &NEPTUNE,
        }
    }

    /// Orbital elements of the planet at J2010.
    pub fn orbit(&self) -> OrbitalElements {
        self.elements().orbit()
    }
}

impl fmt::Display for PlanetModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl CelestialObjectModel for PlanetModel {
    type Object = Planet;

    /// Compute the planet as seen from the Earth.
    ///
    /// Details
    /// -------
    /// With `(l, r, ψ, l', r')` the heliocentric position of the planet and `(L, R)` the one
    /// of the Earth:
    ///
    /// ```text
    /// inner: λ = π + L + atan2(r'·sin(L − l'), R − r'·cos(L − l'))
    /// outer: λ = l' + atan2(R·sin(l' − L), r' − R·cos(l' − L))
    ///        β = atan(r'·tan ψ·sin(λ − l') / (R·sin(l' − L)))
    ///        ρ = √(R² + r² − 2·R·r·cos(l − L)·cos ψ)
    ///        θ = θ₀ / ρ
    ///        F = (1 + cos(λ − l)) / 2
    ///        m = V₀ + 5·log₁₀(r·ρ / √F)
    /// ```
    fn at(
        &self,
        days_since_j2010: Days,
        conversion: &EclipticToEquatorialConversion,
    ) -> Result<Planet, NightSkyError> {
        if *self == PlanetModel::Earth {
            return Err(NightSkyError::EarthNotObservable);
        }
        let elements = self.elements();
        let planet = elements.orbit().heliocentric_position(days_since_j2010);
        let earth = EARTH.orbit().heliocentric_position(days_since_j2010);

        let (l, r, psi) = (planet.lon, planet.radius, planet.lat);
        let (lp, rp) = (planet.projected_lon, planet.projected_radius);
        let (big_l, big_r) = (earth.lon, earth.radius);

        let lon = if elements.semi_major_axis < 1.0 {
            PI + big_l + (rp * (big_l - lp).sin()).atan2(big_r - rp * (big_l - lp).cos())
        } else {
            lp + (big_r * (lp - big_l).sin()).atan2(rp - big_r * (lp - big_l).cos())
        };
        let lat = (rp * psi.tan() * (lon - lp).sin() / (big_r * (lp - big_l).sin())).atan();

        let distance =
            (big_r * big_r + r * r - 2.0 * big_r * r * (l - big_l).cos() * psi.cos()).sqrt();
        let angular_size = elements.angular_size_1au() / distance;

        let phase = (1.0 + (lon - l).cos()) / 2.0;
        let magnitude = elements.magnitude_1au + 5.0 * (r * distance / phase.sqrt()).log10();

        let ecliptic = EclipticCoordinates::from_normalized(angle::normalize_positive(lon), lat);
        Planet::new(
            self.name(),
            conversion.apply(&ecliptic),
            angular_size as f32,
            magnitude as f32,
        )
    }
}
