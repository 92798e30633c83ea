//! # Star catalogue
//!
//! Immutable collection of [`Star`]s and [`Asterism`]s, built in two phases:
//!
//! 1. a mutable [`StarCatalogueBuilder`] accumulates stars and asterisms, either one by one
//!    or through a [`CatalogueLoader`] reading an external source;
//! 2. [`StarCatalogueBuilder::build`] (or [`StarCatalogue::new`]) checks that every star of
//!    every asterism belongs to the star list and freezes the result.
//!
//! ## Loaders
//!
//! | Loader | Source |
//! |---|---|
//! | [`HygDatabaseLoader`] | HYG database CSV, one star per row |
//! | [`AsterismLoader`] | one asterism per line, comma-separated Hipparcos ids |
//!
//! Both fail fast: the first malformed row aborts the load, and nothing read from that
//! source reaches the builder.
//!
//! ## Example
//!
//! ```rust
//! use nightsky::catalogue::{AsterismLoader, HygDatabaseLoader, StarCatalogueBuilder};
//!
//! let stars = "\
//! id,hip,hd,hr,gl,bf,proper,ra,dec,dist,pmra,pmdec,rv,mag,absmag,spect,ci,x,y,z,vx,vy,vz,rarad,decrad,pmrarad,pmdecrad,bayer,flam,con,comp,comp_primary,base,lum,var,var_min,var_max
//! 1,24436,,,,,Rigel,,,,,,,0.18,,,-0.03,,,,,,,1.372430,-0.143143,,,Bet,,Ori,,,,,,,
//! 2,27989,,,,,Betelgeuse,,,,,,,0.45,,,1.5,,,,,,,1.549729,0.129276,,,Alp,,Ori,,,,,,,
//! ";
//! let mut builder = StarCatalogueBuilder::new();
//! builder.load_from(stars.as_bytes(), &HygDatabaseLoader)?;
//! builder.load_from("24436,27989\n".as_bytes(), &AsterismLoader)?;
//!
//! let catalogue = builder.build()?;
//! assert_eq!(catalogue.stars().len(), 2);
//! assert_eq!(catalogue.asterism_indices(&catalogue.asterisms()[0])?, &[0, 1]);
//! # Ok::<(), nightsky::nightsky_errors::NightSkyError>(())
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use ahash::RandomState;

use crate::celestial::{Asterism, Celestial, Star};
use crate::nightsky_errors::NightSkyError;

pub mod asterism_loader;
pub mod builder;
pub mod hyg_loader;

pub use asterism_loader::AsterismLoader;
pub use builder::{CatalogueLoader, StarCatalogueBuilder};
pub use hyg_loader::HygDatabaseLoader;

/// Immutable catalogue of stars and asterisms.
#[derive(Debug, Clone)]
pub struct StarCatalogue {
    stars: Vec<Arc<Star>>,
    asterisms: Vec<Asterism>,
    asterism_indices: HashMap<Asterism, Vec<usize>, RandomState>,
}

impl StarCatalogue {
    /// Build a catalogue from its stars and asterisms.
    ///
    /// Stars of the asterisms are looked up by value in `stars`; when a star appears several
    /// times in the list, its first position is used.
    ///
    /// Errors
    /// ------
    /// * [`NightSkyError::StarNotInCatalogue`] if an asterism contains a star absent from
    ///   `stars`.
    pub fn new(stars: Vec<Arc<Star>>, asterisms: Vec<Asterism>) -> Result<Self, NightSkyError> {
        let mut star_index: HashMap<&Star, usize, RandomState> =
            HashMap::with_capacity_and_hasher(stars.len(), RandomState::new());
        for (i, star) in stars.iter().enumerate() {
            star_index.entry(star.as_ref()).or_insert(i);
        }

        let mut asterism_indices =
            HashMap::with_capacity_and_hasher(asterisms.len(), RandomState::new());
        for asterism in &asterisms {
            let indices = asterism
                .stars()
                .iter()
                .map(|star| {
                    star_index
                        .get(star.as_ref())
                        .copied()
                        .ok_or_else(|| NightSkyError::StarNotInCatalogue(star.name().to_string()))
                })
                .collect::<Result<Vec<_>, _>>()?;
            asterism_indices.insert(asterism.clone(), indices);
        }

        log::info!(
            "star catalogue built with {} stars and {} asterisms",
            stars.len(),
            asterisms.len()
        );
        Ok(StarCatalogue {
            stars,
            asterisms,
            asterism_indices,
        })
    }

    pub fn builder() -> StarCatalogueBuilder {
        StarCatalogueBuilder::new()
    }

    /// Stars, in catalogue order
    pub fn stars(&self) -> &[Arc<Star>] {
        &self.stars
    }

    /// Asterisms, in catalogue order
    pub fn asterisms(&self) -> &[Asterism] {
        &self.asterisms
    }

    /// Positions in [`StarCatalogue::stars`] of the stars of `asterism`, in the order of
    /// the asterism.
    ///
    /// Errors
    /// ------
    /// * [`NightSkyError::AsterismNotInCatalogue`] if `asterism` is not part of the catalogue.
    pub fn asterism_indices(&self, asterism: &Asterism) -> Result<&[usize], NightSkyError> {
        self.asterism_indices
            .get(asterism)
            .map(Vec::as_slice)
            .ok_or(NightSkyError::AsterismNotInCatalogue)
    }
}
