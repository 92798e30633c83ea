//! # Coordinate systems
//!
//! Immutable coordinate value types used across the crate.
//!
//! | Type | Longitude-like | Latitude-like |
//! |---|---|---|
//! | [`EquatorialCoordinates`] | right ascension `[0, 2π)` | declination `[-π/2, π/2]` |
//! | [`EclipticCoordinates`] | ecliptic longitude `[0, 2π)` | ecliptic latitude `[-π/2, π/2]` |
//! | [`HorizontalCoordinates`] | azimuth `[0, 2π)` | altitude `[-π/2, π/2]` |
//! | [`GeographicCoordinates`] | longitude `[-180°, 180°)` | latitude `[-90°, 90°]` |
//! | [`PlanarCoordinates`] | `x`, unbounded | `y`, unbounded |
//!
//! The four spherical systems share one internal longitude/latitude pair; each wrapper only
//! differs by the legality check performed when it is built, and by the names of its
//! accessors. Ranges are enforced at construction and the values never change afterwards.
//!
//! ## Equality
//!
//! None of these types implement `PartialEq` or `Hash`: they carry floating-point values and
//! must not be compared exactly or used as map keys. Tests compare their components with
//! tolerances instead.

mod spherical;

pub mod ecliptic;
pub mod equatorial;
pub mod geographic;
pub mod horizontal;
pub mod planar;

pub(crate) use spherical::safe_asin;

pub use ecliptic::EclipticCoordinates;
pub use equatorial::EquatorialCoordinates;
pub use geographic::GeographicCoordinates;
pub use horizontal::HorizontalCoordinates;
pub use planar::PlanarCoordinates;
