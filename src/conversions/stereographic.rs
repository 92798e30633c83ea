use std::f64::consts::PI;
use std::fmt;

use crate::constants::Radian;
use crate::coordinates::{safe_asin, HorizontalCoordinates, PlanarCoordinates};
use crate::math::angle;

/// Stereographic projection of the celestial sphere onto the plane tangent at `center`.
///
/// The center of the projection maps to the origin of the plane, the zenith direction of
/// the center points towards positive `y`. Circles on the sphere map to circles (or lines)
/// on the plane, which is what the drawing layer relies on to trace the horizon and
/// parallels.
///
/// The point diametrically opposite to the center has no image.
#[derive(Debug, Clone, Copy)]
pub struct StereographicProjection {
    center: HorizontalCoordinates,
    center_az: Radian,
    sin_center_alt: f64,
    cos_center_alt: f64,
}

impl StereographicProjection {
    pub fn new(center: &HorizontalCoordinates) -> Self {
        let (sin_center_alt, cos_center_alt) = center.alt().sin_cos();
        StereographicProjection {
            center: *center,
            center_az: center.az(),
            sin_center_alt,
            cos_center_alt,
        }
    }

    pub fn center(&self) -> &HorizontalCoordinates {
        &self.center
    }

    /// Project a point of the sphere onto the plane.
    ///
    /// Formula
    /// -------
    /// With `(λ, φ)` the point, `(λc, φc)` the center and `Δλ = λ − λc`:
    ///
    /// ```text
    /// d = 1 / (1 + sin φ·sin φc + cos φ·cos φc·cos Δλ)
    /// x = d·cos φ·sin Δλ
    /// y = d·(sin φ·cos φc − cos φ·sin φc·cos Δλ)
    /// ```
    pub fn apply(&self, point: &HorizontalCoordinates) -> PlanarCoordinates {
        let (sin_alt, cos_alt) = point.alt().sin_cos();
        let (sin_dlon, cos_dlon) = (point.az() - self.center_az).sin_cos();

        let d = 1.0
            / (1.0 + sin_alt * self.sin_center_alt + cos_alt * self.cos_center_alt * cos_dlon);
        PlanarCoordinates::of(
            d * cos_alt * sin_dlon,
            d * (sin_alt * self.cos_center_alt - cos_alt * self.sin_center_alt * cos_dlon),
        )
    }

    /// Map a point of the plane back onto the sphere. The origin maps to the center.
    ///
    /// Points infinitely far from the origin map to the antipode of the center. Large finite
    /// points are handled without squaring their norm, so the result never overflows.
    pub fn inverse_apply(&self, point: &PlanarCoordinates) -> HorizontalCoordinates {
        let rho = point.norm();
        if rho == 0.0 {
            return self.center;
        }
        if !rho.is_finite() {
            return self.antipode();
        }
        // sin c = 2ρ / (ρ² + 1) and cos c = (1 − ρ²) / (ρ² + 1), divided through by ρ
        // outside the unit disc
        let (sin_c, cos_c) = if rho <= 1.0 {
            let rho2 = rho * rho;
            (2.0 * rho / (rho2 + 1.0), (1.0 - rho2) / (rho2 + 1.0))
        } else {
            let inv = 1.0 / rho;
            let sum = rho + inv;
            (2.0 / sum, (inv - rho) / sum)
        };

        let az = angle::normalize_positive(
            (point.x() * sin_c).atan2(
                rho * self.cos_center_alt * cos_c - point.y() * self.sin_center_alt * sin_c,
            ) + self.center_az,
        );
        let alt = safe_asin(
            cos_c * self.sin_center_alt + point.y() / rho * sin_c * self.cos_center_alt,
        );
        HorizontalCoordinates::from_normalized(az, alt)
    }

    fn antipode(&self) -> HorizontalCoordinates {
        HorizontalCoordinates::from_normalized(
            angle::normalize_positive(self.center_az + PI),
            -self.center.alt(),
        )
    }

    /// Center of the circle onto which the parallel (circle of constant altitude) through
    /// `point` is projected. It always lies on the `y` axis.
    pub fn circle_center_for_parallel(&self, point: &HorizontalCoordinates) -> PlanarCoordinates {
        PlanarCoordinates::of(
            0.0,
            self.cos_center_alt / (point.alt().sin() + self.sin_center_alt),
        )
    }

    /// Radius of the circle onto which the parallel through `point` is projected.
    ///
    /// The value is infinite when the parallel goes through the antipode of the center,
    /// in which case it projects to a straight line.
    pub fn circle_radius_for_parallel(&self, point: &HorizontalCoordinates) -> f64 {
        point.alt().cos() / (point.alt().sin() + self.sin_center_alt)
    }

    /// Diameter on the plane of a small disc of angular diameter `rad` centered on the
    /// projection center: `2·tan(rad / 4)`.
    pub fn apply_to_angle(&self, rad: Radian) -> f64 {
        2.0 * (rad / 4.0).tan()
    }
}

impl fmt::Display for StereographicProjection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StereographicProjection centered at {}", self.center)
    }
}

#[cfg(test)]
mod stereographic_test {
    use super::*;
    use approx::assert_relative_eq;
    use itertools::iproduct;

    fn deg(az: f64, alt: f64) -> HorizontalCoordinates {
        HorizontalCoordinates::of_deg(az, alt).unwrap()
    }

    #[test]
    fn test_center_maps_to_origin() {
        let projection = StereographicProjection::new(&deg(45.0, 45.0));
        let origin = projection.apply(&deg(45.0, 45.0));
        assert_relative_eq!(origin.x(), 0.0, epsilon = 1e-15);
        assert_relative_eq!(origin.y(), 0.0, epsilon = 1e-15);

        let back = projection.inverse_apply(&PlanarCoordinates::of(0.0, 0.0));
        assert_eq!(back.az(), projection.center().az());
        assert_eq!(back.alt(), projection.center().alt());
    }

    #[test]
    fn test_apply() {
        let projection = StereographicProjection::new(&deg(45.0, 45.0));
        let p = projection.apply(&deg(45.0, 30.0));
        assert_relative_eq!(p.x(), 0.0, epsilon = 1e-15);
        assert_relative_eq!(p.y(), -0.13165249758739583, epsilon = 1e-12);

        let projection = StereographicProjection::new(&deg(180.0, 15.0));
        let p = projection.apply(&deg(200.0, 20.0));
        assert_relative_eq!(p.x(), 0.16554272741854062, epsilon = 1e-12);
        assert_relative_eq!(p.y(), 0.052446801930709594, epsilon = 1e-12);
    }

    #[test]
    fn test_inverse_round_trip() {
        let projection = StereographicProjection::new(&deg(120.0, 25.0));
        let azimuths = (0..36).map(|i| i as f64 * 10.0);
        for (az, alt) in iproduct!(azimuths, [-60.0, -10.0, 0.0, 33.0, 80.0]) {
            let point = deg(az, alt);
            let back = projection.inverse_apply(&projection.apply(&point));
            assert!(
                point.angular_distance_to(&back) < 1e-9,
                "round trip failed for {point}: got {back}"
            );
        }
    }

    #[test]
    fn test_inverse_far_from_origin() {
        let projection = StereographicProjection::new(&deg(120.0, 25.0));
        let antipode = deg(300.0, -25.0);

        for point in [
            PlanarCoordinates::of(1e200, 0.0),
            PlanarCoordinates::of(-3e160, 4e160),
            PlanarCoordinates::of(0.0, -1e300),
            PlanarCoordinates::of(1e308, 1e308),
        ] {
            let back = projection.inverse_apply(&point);
            assert!(back.az().is_finite() && back.alt().is_finite());
            assert!(
                back.angular_distance_to(&antipode) < 1e-9,
                "{point} mapped to {back}"
            );
        }

        for point in [
            PlanarCoordinates::of(f64::INFINITY, 0.0),
            PlanarCoordinates::of(1.0, f64::NEG_INFINITY),
        ] {
            let back = projection.inverse_apply(&point);
            assert_relative_eq!(back.az_deg(), 300.0, epsilon = 1e-9);
            assert_relative_eq!(back.alt_deg(), -25.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_inverse_across_unit_circle() {
        let projection = StereographicProjection::new(&deg(10.0, 60.0));
        for rho in [1e-3, 0.999999, 1.0, 1.000001, 12.5, 1e153, 1e155] {
            let point = PlanarCoordinates::of(rho * 0.6, rho * 0.8);
            let back = projection.inverse_apply(&point);
            if rho < 1e6 {
                let again = projection.apply(&back);
                assert_relative_eq!(again.x(), point.x(), max_relative = 1e-9);
                assert_relative_eq!(again.y(), point.y(), max_relative = 1e-9);
            } else {
                assert!(back.angular_distance_to(&deg(190.0, -60.0)) < 1e-9);
            }
        }
    }

    #[test]
    fn test_circle_for_parallel() {
        let projection = StereographicProjection::new(&deg(45.0, 45.0));
        let parallel = deg(0.0, 27.0);
        let center = projection.circle_center_for_parallel(&parallel);
        assert_eq!(center.x(), 0.0);
        assert_relative_eq!(center.y(), 0.6089987400733187, epsilon = 1e-12);
        assert_relative_eq!(
            projection.circle_radius_for_parallel(&parallel),
            0.767383180397855,
            epsilon = 1e-12
        );

        // Every projected point of the parallel lies on that circle.
        let radius = projection.circle_radius_for_parallel(&parallel);
        for az in [0.0, 45.0, 100.0, 200.0, 300.0] {
            let p = projection.apply(&deg(az, 27.0));
            assert_relative_eq!(p.distance_to(&center), radius, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_apply_to_angle() {
        let projection = StereographicProjection::new(&deg(0.0, 0.0));
        assert_relative_eq!(
            projection.apply_to_angle(angle::of_deg(0.5)),
            0.00436333005262522,
            epsilon = 1e-15
        );
    }

    #[test]
    fn test_display() {
        let projection = StereographicProjection::new(&deg(180.0, 15.0));
        assert_eq!(
            projection.to_string(),
            "StereographicProjection centered at (az=180.0000°, alt=15.0000°)"
        );
    }
}
