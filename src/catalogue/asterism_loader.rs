use std::collections::HashMap;
use std::io::{BufRead, BufReader, Read};
use std::sync::Arc;

use ahash::RandomState;

use crate::catalogue::builder::{CatalogueLoader, StarCatalogueBuilder};
use crate::celestial::{Asterism, Star};
use crate::nightsky_errors::NightSkyError;

/// Loader for asterism lists: one asterism per line, given as comma-separated Hipparcos
/// ids. Blank lines are ignored.
///
/// Ids are resolved against the stars already present in the builder, so the star
/// catalogue must be loaded first. When several stars share an id, the first one wins.
#[derive(Debug, Clone, Copy, Default)]
pub struct AsterismLoader;

impl CatalogueLoader for AsterismLoader {
    fn load<R: Read>(
        &self,
        input: R,
        builder: &mut StarCatalogueBuilder,
    ) -> Result<(), NightSkyError> {
        let mut by_id: HashMap<u32, Arc<Star>, RandomState> =
            HashMap::with_capacity_and_hasher(builder.stars().len(), RandomState::new());
        for star in builder.stars() {
            by_id
                .entry(star.hipparcos_id())
                .or_insert_with(|| Arc::clone(star));
        }

        let mut asterisms = Vec::new();
        for (line_index, line) in BufReader::new(input).lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let stars = line
                .split(',')
                .map(|field| {
                    let field = field.trim();
                    let id: u32 = field.parse().map_err(|_| NightSkyError::CatalogueParse {
                        line: line_index as u64 + 1,
                        field: "hip",
                        value: field.to_string(),
                    })?;
                    by_id
                        .get(&id)
                        .cloned()
                        .ok_or(NightSkyError::UnknownCatalogueId(id))
                })
                .collect::<Result<Vec<_>, _>>()?;
            asterisms.push(Asterism::new(stars)?);
        }

        log::debug!("asterism list: {} asterisms loaded", asterisms.len());
        for asterism in asterisms {
            builder.add_asterism(asterism);
        }
        Ok(())
    }
}
