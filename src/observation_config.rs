//! # Observation parameters
//!
//! [`ObservationConfig`] gathers what the user of a sky chart chooses: where the observer
//! stands and where they look. It is plain data, (de)serializable with `serde`, so that a
//! front-end can keep it in any format it likes (JSON, TOML, …). Missing fields take their
//! default value.
//!
//! | Field | Unit | Default |
//! |---|---|---|
//! | `observer_lon_deg` | degrees east, `[-180, 180)` | 6.57 |
//! | `observer_lat_deg` | degrees north, `[-90, 90]` | 46.52 |
//! | `center_az_deg` | degrees from north, `[0, 360)` | 180 (south) |
//! | `center_alt_deg` | degrees above the horizon, `[-90, 90]` | 15 |
//!
//! Values are only checked when they are turned into coordinates.

use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Serialize};

use crate::catalogue::StarCatalogue;
use crate::constants::Degree;
use crate::conversions::StereographicProjection;
use crate::coordinates::{GeographicCoordinates, HorizontalCoordinates};
use crate::nightsky_errors::NightSkyError;
use crate::observed_sky::ObservedSky;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObservationConfig {
    pub observer_lon_deg: Degree,
    pub observer_lat_deg: Degree,
    pub center_az_deg: Degree,
    pub center_alt_deg: Degree,
}

impl Default for ObservationConfig {
    fn default() -> Self {
        ObservationConfig {
            observer_lon_deg: 6.57,
            observer_lat_deg: 46.52,
            center_az_deg: 180.0,
            center_alt_deg: 15.0,
        }
    }
}

impl ObservationConfig {
    /// Errors
    /// ------
    /// * [`NightSkyError::InvalidCoordinates`] if the observer position is out of range.
    pub fn observer_location(&self) -> Result<GeographicCoordinates, NightSkyError> {
        GeographicCoordinates::of_deg(self.observer_lon_deg, self.observer_lat_deg)
    }

    /// Direction the observer looks at.
    ///
    /// Errors
    /// ------
    /// * [`NightSkyError::InvalidCoordinates`] if the direction is out of range.
    pub fn view_center(&self) -> Result<HorizontalCoordinates, NightSkyError> {
        HorizontalCoordinates::of_deg(self.center_az_deg, self.center_alt_deg)
    }

    /// Stereographic projection centered on [`ObservationConfig::view_center`].
    pub fn projection(&self) -> Result<StereographicProjection, NightSkyError> {
        Ok(StereographicProjection::new(&self.view_center()?))
    }

    /// Compute the sky seen at `when` with these parameters.
    pub fn observe<'c, Tz: TimeZone>(
        &self,
        when: &DateTime<Tz>,
        catalogue: &'c StarCatalogue,
    ) -> Result<ObservedSky<'c>, NightSkyError> {
        ObservedSky::new(
            when,
            &self.observer_location()?,
            &self.projection()?,
            catalogue,
        )
    }
}
