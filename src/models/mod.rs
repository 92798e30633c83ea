//! # Orbital position models
//!
//! Closed-form, low-precision models placing the Sun, the Moon and the planets in the sky
//! at a given instant. Every model is a stateless value implementing
//! [`CelestialObjectModel`]:
//!
//! | Model | Produces | Method |
//! |---|---|---|
//! | [`SunModel`] | [`Sun`](crate::celestial::Sun) | Earth's Keplerian ellipse, seen from the Earth |
//! | [`MoonModel`] | [`Moon`](crate::celestial::Moon) | lunar ellipse with solar perturbations |
//! | [`PlanetModel`] | [`Planet`](crate::celestial::Planet) | heliocentric ellipse projected through the Earth's position |
//!
//! All of them share the one-body ellipse of [`orbit::OrbitalElements`]: mean anomaly, then
//! true anomaly through the first-order equation of center `v = M + 2e·sin M`, then
//! heliocentric distance and longitude.
//!
//! ## Time
//!
//! Models take the number of days elapsed since [`Epoch::J2010`](crate::time::Epoch::J2010)
//! and an [`EclipticToEquatorialConversion`] built for the same instant:
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use nightsky::celestial::Celestial;
//! use nightsky::conversions::EclipticToEquatorialConversion;
//! use nightsky::models::{CelestialObjectModel, PlanetModel};
//! use nightsky::time::Epoch;
//!
//! let when = Utc.with_ymd_and_hms(2003, 11, 22, 0, 0, 0).unwrap();
//! let conversion = EclipticToEquatorialConversion::new(&when);
//! let jupiter = PlanetModel::Jupiter.at(Epoch::J2010.days_until(&when), &conversion)?;
//! assert_eq!(jupiter.name(), "Jupiter");
//! # Ok::<(), nightsky::nightsky_errors::NightSkyError>(())
//! ```
//!
//! Accuracy is in the order of the arcminute over a few decades around 2010, which is
//! enough for drawing the sky but not for astrometry.

use crate::constants::Days;
use crate::conversions::EclipticToEquatorialConversion;
use crate::nightsky_errors::NightSkyError;

pub mod moon_model;
pub mod orbit;
pub mod planet_model;
pub mod sun_model;

pub use moon_model::MoonModel;
pub use planet_model::PlanetModel;
pub use sun_model::SunModel;

/// A model computing the state of a celestial object at a given instant.
pub trait CelestialObjectModel {
    type Object;

    /// Compute the object `days_since_j2010` days after J2010.
    ///
    /// Arguments
    /// ---------
    /// * `days_since_j2010`: elapsed days since [`Epoch::J2010`](crate::time::Epoch::J2010),
    ///   negative before.
    /// * `conversion`: ecliptic to equatorial conversion for the same instant.
    fn at(
        &self,
        days_since_j2010: Days,
        conversion: &EclipticToEquatorialConversion,
    ) -> Result<Self::Object, NightSkyError>;
}
