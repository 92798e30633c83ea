use crate::constants::{Days, Radian, DPI, TROPICAL_YEAR};

/// Mean elements of a circular-ish heliocentric orbit, referred to the J2010 epoch.
///
/// Units:
/// * `revolution_period`: tropical years
/// * `lon_at_epoch`: radians, mean longitude at J2010
/// * `lon_perigee`: radians, longitude of the perihelion
/// * `eccentricity`: unitless
/// * `semi_major_axis`: AU
/// * `inclination`: radians, on the ecliptic
/// * `lon_ascending_node`: radians
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitalElements {
    pub revolution_period: f64,
    pub lon_at_epoch: Radian,
    pub lon_perigee: Radian,
    pub eccentricity: f64,
    pub semi_major_axis: f64,
    pub inclination: Radian,
    pub lon_ascending_node: Radian,
}

/// Heliocentric position of a body on its orbit.
///
/// `lon` and `radius` are measured in the orbital plane; `projected_lon` and
/// `projected_radius` are their projection onto the ecliptic, `lat` the heliocentric
/// ecliptic latitude ψ.
#[derive(Debug, Clone, Copy)]
pub struct HeliocentricPosition {
    pub lon: Radian,
    pub radius: f64,
    pub lat: Radian,
    pub projected_lon: Radian,
    pub projected_radius: f64,
}

impl OrbitalElements {
    /// Mean anomaly `M` after `days` days since J2010, in radians. Not reduced into a turn.
    ///
    /// ```text
    /// M = (2π / 365.242191)·D / Tp + ε − ϖ
    /// ```
    pub fn mean_anomaly(&self, days: Days) -> Radian {
        (DPI / TROPICAL_YEAR) * days / self.revolution_period + self.lon_at_epoch
            - self.lon_perigee
    }

    /// True anomaly from the mean anomaly, with the first-order equation of center
    /// `v = M + 2e·sin M`.
    pub fn true_anomaly(&self, mean_anomaly: Radian) -> Radian {
        mean_anomaly + 2.0 * self.eccentricity * mean_anomaly.sin()
    }

    /// Distance to the Sun, in AU, at true anomaly `v`.
    pub fn radius(&self, true_anomaly: Radian) -> f64 {
        let e = self.eccentricity;
        self.semi_major_axis * (1.0 - e * e) / (1.0 + e * true_anomaly.cos())
    }

    /// Compute the heliocentric position after `days` days since J2010.
    ///
    /// Formula
    /// -------
    /// ```text
    /// l  = v + ϖ
    /// ψ  = asin(sin(l − Ω)·sin i)
    /// r' = r·cos ψ
    /// l' = atan2(sin(l − Ω)·cos i, cos(l − Ω)) + Ω
    /// ```
    pub fn heliocentric_position(&self, days: Days) -> HeliocentricPosition {
        let v = self.true_anomaly(self.mean_anomaly(days));
        let radius = self.radius(v);
        let lon = v + self.lon_perigee;

        let (sin_dl, cos_dl) = (lon - self.lon_ascending_node).sin_cos();
        let lat = (sin_dl * self.inclination.sin()).asin();
        HeliocentricPosition {
            lon,
            radius,
            lat,
            projected_lon: (sin_dl * self.inclination.cos()).atan2(cos_dl)
                + self.lon_ascending_node,
            projected_radius: radius * lat.cos(),
        }
    }
}
