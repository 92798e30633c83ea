use std::io::Read;
use std::sync::Arc;

use crate::catalogue::StarCatalogue;
use crate::celestial::{Asterism, Star};
use crate::nightsky_errors::NightSkyError;

/// A source of stars or asterisms for a [`StarCatalogueBuilder`].
pub trait CatalogueLoader {
    /// Read `input` entirely and add its content to `builder`.
    ///
    /// Loading is all or nothing: on error the builder is left exactly as it was.
    fn load<R: Read>(
        &self,
        input: R,
        builder: &mut StarCatalogueBuilder,
    ) -> Result<(), NightSkyError>;
}

/// Mutable accumulator of stars and asterisms, frozen into a [`StarCatalogue`] by
/// [`StarCatalogueBuilder::build`]. Entries are never removed.
#[derive(Debug, Clone, Default)]
pub struct StarCatalogueBuilder {
    stars: Vec<Arc<Star>>,
    asterisms: Vec<Asterism>,
}

impl StarCatalogueBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_star(&mut self, star: impl Into<Arc<Star>>) -> &mut Self {
        self.stars.push(star.into());
        self
    }

    /// Stars added so far, in insertion order
    pub fn stars(&self) -> &[Arc<Star>] {
        &self.stars
    }

    pub fn add_asterism(&mut self, asterism: Asterism) -> &mut Self {
        self.asterisms.push(asterism);
        self
    }

    /// Asterisms added so far, in insertion order
    pub fn asterisms(&self) -> &[Asterism] {
        &self.asterisms
    }

    /// Add the content of `input`, as read by `loader`.
    pub fn load_from<R: Read, L: CatalogueLoader>(
        &mut self,
        input: R,
        loader: &L,
    ) -> Result<&mut Self, NightSkyError> {
        loader.load(input, self)?;
        Ok(self)
    }

    /// Freeze the accumulated content.
    ///
    /// Errors
    /// ------
    /// See [`StarCatalogue::new`].
    pub fn build(self) -> Result<StarCatalogue, NightSkyError> {
        StarCatalogue::new(self.stars, self.asterisms)
    }
}

#[cfg(test)]
mod builder_test {
    use super::*;
    use crate::coordinates::EquatorialCoordinates;

    #[test]
    fn test_snapshots_and_build() {
        let pos = EquatorialCoordinates::of(0.5, 0.5).unwrap();
        let vega = Arc::new(Star::new(91262, "Vega", pos, 0.03, 0.0).unwrap());
        let deneb = Star::new(102098, "Deneb", pos, 1.25, 0.09).unwrap();

        let mut builder = StarCatalogueBuilder::new();
        builder.add_star(vega.clone()).add_star(deneb);
        assert_eq!(builder.stars().len(), 2);
        assert!(builder.asterisms().is_empty());

        builder.add_asterism(Asterism::new(vec![vega]).unwrap());
        assert_eq!(builder.asterisms().len(), 1);

        let catalogue = builder.build().unwrap();
        assert_eq!(catalogue.stars()[1].hipparcos_id(), 102098);
        assert_eq!(
            catalogue
                .asterism_indices(&catalogue.asterisms()[0])
                .unwrap(),
            &[0]
        );
    }

    #[test]
    fn test_build_checks_references() {
        let pos = EquatorialCoordinates::of(0.5, 0.5).unwrap();
        let outsider = Arc::new(Star::new(1, "outsider", pos, 3.0, 0.0).unwrap());

        let mut builder = StarCatalogueBuilder::new();
        builder.add_asterism(Asterism::new(vec![outsider]).unwrap());
        assert_eq!(
            builder.build().unwrap_err(),
            NightSkyError::StarNotInCatalogue("outsider".into())
        );
    }
}
