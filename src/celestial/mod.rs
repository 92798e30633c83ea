//! # Celestial objects
//!
//! Immutable records describing what is seen in the sky: the common attributes live in
//! [`CelestialBody`], each kind of object adds its own.
//!
//! | Kind | Extra attributes | Lifetime |
//! |---|---|---|
//! | [`Star`] | Hipparcos id, color index | the catalogue |
//! | [`Planet`] | none | one observed sky |
//! | [`Sun`] | ecliptic position, mean anomaly | one observed sky |
//! | [`Moon`] | phase | one observed sky |
//!
//! [`CelestialObject`] is the closed union of the four kinds, returned by the nearest-object
//! query of [`crate::observed_sky::ObservedSky`]. Stars are shared through [`Arc`] so that
//! catalogue, asterisms and query results all point to the same record.

use std::sync::Arc;

pub mod asterism;
pub mod body;
pub mod moon;
pub mod planet;
pub mod star;
pub mod sun;

pub use asterism::Asterism;
pub use body::{Celestial, CelestialBody};
pub use moon::Moon;
pub use planet::Planet;
pub use star::Star;
pub use sun::Sun;

/// Any object of the sky.
#[derive(Debug, Clone)]
pub enum CelestialObject {
    Star(Arc<Star>),
    Planet(Planet),
    Sun(Sun),
    Moon(Moon),
}

impl Celestial for CelestialObject {
    fn body(&self) -> &CelestialBody {
        match self {
            CelestialObject::Star(star) => star.body(),
            CelestialObject::Planet(planet) => planet.body(),
            CelestialObject::Sun(sun) => sun.body(),
            CelestialObject::Moon(moon) => moon.body(),
        }
    }

    fn info(&self) -> String {
        match self {
            CelestialObject::Star(star) => star.info(),
            CelestialObject::Planet(planet) => planet.info(),
            CelestialObject::Sun(sun) => sun.info(),
            CelestialObject::Moon(moon) => moon.info(),
        }
    }
}

impl From<Arc<Star>> for CelestialObject {
    fn from(star: Arc<Star>) -> Self {
        CelestialObject::Star(star)
    }
}

impl From<Planet> for CelestialObject {
    fn from(planet: Planet) -> Self {
        CelestialObject::Planet(planet)
    }
}

impl From<Sun> for CelestialObject {
    fn from(sun: Sun) -> Self {
        CelestialObject::Sun(sun)
    }
}

impl From<Moon> for CelestialObject {
    fn from(moon: Moon) -> Self {
        CelestialObject::Moon(moon)
    }
}
