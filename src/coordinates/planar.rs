use std::fmt;

use nalgebra::Point2;

/// Point of the projection plane, with no range constraint.
#[derive(Debug, Clone, Copy)]
pub struct PlanarCoordinates(Point2<f64>);

impl PlanarCoordinates {
    pub fn of(x: f64, y: f64) -> Self {
        PlanarCoordinates(Point2::new(x, y))
    }

    pub fn x(&self) -> f64 {
        self.0.x
    }

    pub fn y(&self) -> f64 {
        self.0.y
    }

    /// Distance of the point to the origin of the plane, finite for any finite point
    pub fn norm(&self) -> f64 {
        self.0.x.hypot(self.0.y)
    }

    /// Euclidean distance between two points of the plane
    pub fn distance_to(&self, that: &PlanarCoordinates) -> f64 {
        nalgebra::distance(&self.0, &that.0)
    }

    pub fn point(&self) -> &Point2<f64> {
        &self.0
    }
}

impl From<Point2<f64>> for PlanarCoordinates {
    fn from(p: Point2<f64>) -> Self {
        PlanarCoordinates(p)
    }
}

impl fmt::Display for PlanarCoordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(x={:.4}, y={:.4})", self.x(), self.y())
    }
}
