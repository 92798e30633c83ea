//! # Observed sky
//!
//! A snapshot of the sky seen by an observer at a given instant, projected on the plane of a
//! [`StereographicProjection`].
//!
//! ## Pipeline
//!
//! ```text
//!  models (Sun, Moon, planets) ─┐
//!                               ├─▶ equatorial ──▶ horizontal ──▶ planar
//!  catalogue stars ─────────────┘
//! ```
//!
//! Every position is computed once, in [`ObservedSky::new`]. The snapshot is never updated:
//! observing another instant or place means building a new one.
//!
//! ## Nearest object
//!
//! [`ObservedSky::object_near`] scans all objects linearly, in this order: Sun, Moon,
//! planets from Mercury to Neptune, then stars in catalogue order. The first object at the
//! smallest distance wins.

use std::iter;
use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use ordered_float::OrderedFloat;

use crate::catalogue::StarCatalogue;
use crate::celestial::{Asterism, Celestial, CelestialObject, Moon, Planet, Star, Sun};
use crate::constants::Days;
use crate::conversions::{
    EclipticToEquatorialConversion, EquatorialToHorizontalConversion, StereographicProjection,
};
use crate::coordinates::{EquatorialCoordinates, GeographicCoordinates, PlanarCoordinates};
use crate::models::{CelestialObjectModel, MoonModel, PlanetModel, SunModel};
use crate::nightsky_errors::NightSkyError;
use crate::time::Epoch;

/// Index of an object tracked by the snapshot
#[derive(Debug, Clone, Copy)]
enum Tracked {
    Sun,
    Moon,
    Planet(usize),
    Star(usize),
}

/// Projected positions of the Sun, the Moon, the planets and the catalogue stars for one
/// observer, instant and projection.
#[derive(Debug, Clone)]
pub struct ObservedSky<'c> {
    catalogue: &'c StarCatalogue,
    days_since_j2010: Days,
    sun: Sun,
    sun_position: PlanarCoordinates,
    moon: Moon,
    moon_position: PlanarCoordinates,
    planets: Vec<Planet>,
    planet_positions: Vec<PlanarCoordinates>,
    star_positions: Vec<PlanarCoordinates>,
}

impl<'c> ObservedSky<'c> {
    /// Compute the sky seen from `place` at `when`.
    ///
    /// Arguments
    /// ---------
    /// * `when`: the instant of observation, in any time zone.
    /// * `place`: geographic position of the observer.
    /// * `projection`: projection of the horizontal coordinates onto the plane.
    /// * `catalogue`: the stars to place.
    ///
    /// Errors
    /// ------
    /// Only if a model produces an invalid object, which does not happen for instants
    /// representable by [`DateTime`].
    pub fn new<Tz: TimeZone>(
        when: &DateTime<Tz>,
        place: &GeographicCoordinates,
        projection: &StereographicProjection,
        catalogue: &'c StarCatalogue,
    ) -> Result<Self, NightSkyError> {
        let days_since_j2010 = Epoch::J2010.days_until(when);
        let ecliptic_to_equatorial = EclipticToEquatorialConversion::new(when);
        let equatorial_to_horizontal = EquatorialToHorizontalConversion::new(when, place);
        let project = |equatorial: &EquatorialCoordinates| {
            projection.apply(&equatorial_to_horizontal.apply(equatorial))
        };

        let sun = SunModel.at(days_since_j2010, &ecliptic_to_equatorial)?;
        let moon = MoonModel.at(days_since_j2010, &ecliptic_to_equatorial)?;
        let planets = PlanetModel::extraterrestrial()
            .map(|planet| planet.at(days_since_j2010, &ecliptic_to_equatorial))
            .collect::<Result<Vec<_>, _>>()?;

        let sun_position = project(sun.equatorial_pos());
        let moon_position = project(moon.equatorial_pos());
        let planet_positions = planets
            .iter()
            .map(|planet| project(planet.equatorial_pos()))
            .collect();
        let star_positions = catalogue
            .stars()
            .iter()
            .map(|star| project(star.equatorial_pos()))
            .collect();

        log::debug!(
            "observed sky at {} from {place}: {} planets, {} stars",
            when.with_timezone(&Utc),
            planets.len(),
            catalogue.stars().len()
        );

        Ok(ObservedSky {
            catalogue,
            days_since_j2010,
            sun,
            sun_position,
            moon,
            moon_position,
            planets,
            planet_positions,
            star_positions,
        })
    }

    /// Days elapsed between J2010 and the instant of observation
    pub fn days_since_j2010(&self) -> Days {
        self.days_since_j2010
    }

    pub fn sun(&self) -> &Sun {
        &self.sun
    }

    pub fn sun_position(&self) -> &PlanarCoordinates {
        &self.sun_position
    }

    pub fn moon(&self) -> &Moon {
        &self.moon
    }

    pub fn moon_position(&self) -> &PlanarCoordinates {
        &self.moon_position
    }

    /// Planets from Mercury to Neptune, without the Earth
    pub fn planets(&self) -> &[Planet] {
        &self.planets
    }

    /// Positions of [`ObservedSky::planets`], index for index
    pub fn planet_positions(&self) -> &[PlanarCoordinates] {
        &self.planet_positions
    }

    pub fn stars(&self) -> &[Arc<Star>] {
        self.catalogue.stars()
    }

    /// Positions of [`ObservedSky::stars`], index for index
    pub fn star_positions(&self) -> &[PlanarCoordinates] {
        &self.star_positions
    }

    pub fn asterisms(&self) -> &[Asterism] {
        self.catalogue.asterisms()
    }

    /// See [`StarCatalogue::asterism_indices`].
    pub fn asterism_indices(&self, asterism: &Asterism) -> Result<&[usize], NightSkyError> {
        self.catalogue.asterism_indices(asterism)
    }

    fn tracked(&self) -> impl Iterator<Item = (Tracked, &PlanarCoordinates)> {
        iter::once((Tracked::Sun, &self.sun_position))
            .chain(iter::once((Tracked::Moon, &self.moon_position)))
            .chain(
                self.planet_positions
                    .iter()
                    .enumerate()
                    .map(|(i, p)| (Tracked::Planet(i), p)),
            )
            .chain(
                self.star_positions
                    .iter()
                    .enumerate()
                    .map(|(i, p)| (Tracked::Star(i), p)),
            )
    }

    fn object(&self, tracked: Tracked) -> CelestialObject {
        match tracked {
            Tracked::Sun => self.sun.clone().into(),
            Tracked::Moon => self.moon.clone().into(),
            Tracked::Planet(i) => self.planets[i].clone().into(),
            Tracked::Star(i) => Arc::clone(&self.catalogue.stars()[i]).into(),
        }
    }

    /// Find the object closest to `point` on the projection plane, if its distance to
    /// `point` is at most `max_distance`.
    ///
    /// Returns `None` when `max_distance` is not strictly positive.
    pub fn object_near(
        &self,
        point: &PlanarCoordinates,
        max_distance: f64,
    ) -> Option<CelestialObject> {
        if max_distance.is_nan() || max_distance <= 0.0 {
            return None;
        }
        self.tracked()
            .map(|(tracked, position)| (tracked, position.distance_to(point)))
            .filter(|(_, distance)| *distance <= max_distance)
            .min_by_key(|(_, distance)| OrderedFloat(*distance))
            .map(|(tracked, _)| self.object(tracked))
    }
}

#[cfg(test)]
mod observed_sky_test {
    use super::*;
    use crate::catalogue::StarCatalogueBuilder;
    use crate::coordinates::HorizontalCoordinates;
    use approx::assert_relative_eq;

    fn catalogue() -> StarCatalogue {
        let mut builder = StarCatalogueBuilder::new();
        for (i, (ra, dec)) in [(1.0, 0.2), (2.5, -0.4), (4.0, 0.9), (5.5, 0.0)]
            .into_iter()
            .enumerate()
        {
            let pos = EquatorialCoordinates::of(ra, dec).unwrap();
            builder.add_star(Star::new(i as u32 + 1, format!("s{i}"), pos, 2.0, 0.3).unwrap());
        }
        builder.build().unwrap()
    }

    fn sky(catalogue: &StarCatalogue) -> ObservedSky<'_> {
        let when = Utc.with_ymd_and_hms(2020, 3, 20, 21, 0, 0).unwrap();
        let place = GeographicCoordinates::of_deg(6.57, 46.52).unwrap();
        let projection =
            StereographicProjection::new(&HorizontalCoordinates::of_deg(180.0, 15.0).unwrap());
        ObservedSky::new(&when, &place, &projection, catalogue).unwrap()
    }

    #[test]
    fn test_contents() {
        let catalogue = catalogue();
        let sky = sky(&catalogue);
        assert_eq!(sky.planets().len(), 7);
        assert_eq!(sky.planet_positions().len(), 7);
        assert!(sky.planets().iter().all(|p| p.name() != "Earth"));
        assert_eq!(sky.stars().len(), 4);
        assert_eq!(sky.star_positions().len(), 4);
        assert_eq!(sky.sun().name(), "Sun");
        assert_eq!(sky.moon().name(), "Moon");
        assert!(sky.asterisms().is_empty());
    }

    #[test]
    fn test_object_near_no_radius() {
        let catalogue = catalogue();
        let sky = sky(&catalogue);
        let on_star = sky.star_positions()[0];
        assert!(sky.object_near(&on_star, 0.0).is_none());
        assert!(sky.object_near(&on_star, -1.0).is_none());
        assert!(sky.object_near(&on_star, f64::NAN).is_none());
    }

    #[test]
    fn test_object_near_exact_position() {
        let catalogue = catalogue();
        let sky = sky(&catalogue);

        for (i, position) in sky.star_positions().iter().enumerate() {
            match sky.object_near(position, 1e-9) {
                Some(CelestialObject::Star(star)) => {
                    assert!(Arc::ptr_eq(&star, &sky.stars()[i]))
                }
                other => panic!("expected star {i}, got {other:?}"),
            }
        }
        assert!(matches!(
            sky.object_near(sky.sun_position(), 1e-9),
            Some(CelestialObject::Sun(_))
        ));
        assert!(matches!(
            sky.object_near(sky.moon_position(), 1e-9),
            Some(CelestialObject::Moon(_))
        ));
        match sky.object_near(&sky.planet_positions()[4], 1e-9) {
            Some(CelestialObject::Planet(planet)) => assert_eq!(planet.name(), "Saturn"),
            other => panic!("expected Saturn, got {other:?}"),
        }
    }

    #[test]
    fn test_object_near_tie_keeps_first_star() {
        let mut builder = StarCatalogueBuilder::new();
        let other = EquatorialCoordinates::of(1.0, 0.2).unwrap();
        let shared = EquatorialCoordinates::of(3.0, 0.5).unwrap();
        builder
            .add_star(Star::new(1, "a", other, 2.0, 0.3).unwrap())
            .add_star(Star::new(20, "twin", shared, 2.0, 0.3).unwrap())
            .add_star(Star::new(10, "twin", shared, 2.0, 0.3).unwrap());
        let catalogue = builder.build().unwrap();
        let sky = sky(&catalogue);

        let position = sky.star_positions()[1];
        assert_eq!(position.x(), sky.star_positions()[2].x());
        assert_eq!(position.y(), sky.star_positions()[2].y());

        for max_distance in [1e-9, 1.0, f64::INFINITY] {
            match sky.object_near(&position, max_distance) {
                Some(CelestialObject::Star(star)) => {
                    assert_eq!(star.hipparcos_id(), 20);
                    assert!(Arc::ptr_eq(&star, &sky.stars()[1]));
                }
                other => panic!("expected the first twin, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_object_near_is_nearest() {
        let catalogue = catalogue();
        let sky = sky(&catalogue);
        let query = PlanarCoordinates::of(0.1, -0.2);

        let all: Vec<f64> = sky.tracked().map(|(_, p)| p.distance_to(&query)).collect();
        let nearest = all.iter().copied().fold(f64::INFINITY, f64::min);

        let found = sky.object_near(&query, f64::INFINITY).unwrap();
        let found_position = sky
            .tracked()
            .find(|(t, _)| sky.object(*t).name() == found.name())
            .map(|(_, p)| *p)
            .unwrap();
        assert_relative_eq!(found_position.distance_to(&query), nearest);

        assert!(sky.object_near(&query, nearest * 0.999).is_none());
        assert!(sky.object_near(&query, nearest).is_some());
    }
}
