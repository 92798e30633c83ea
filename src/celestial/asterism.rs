use std::sync::Arc;

use crate::celestial::star::Star;
use crate::nightsky_errors::NightSkyError;

/// An ordered, non-empty group of stars drawn as connected segments.
///
/// Stars are shared with the catalogue that owns them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Asterism {
    stars: Vec<Arc<Star>>,
}

impl Asterism {
    /// Errors
    /// ------
    /// * [`NightSkyError::EmptyAsterism`] if `stars` is empty.
    pub fn new(stars: Vec<Arc<Star>>) -> Result<Self, NightSkyError> {
        if stars.is_empty() {
            return Err(NightSkyError::EmptyAsterism);
        }
        Ok(Asterism { stars })
    }

    pub fn stars(&self) -> &[Arc<Star>] {
        &self.stars
    }
}
