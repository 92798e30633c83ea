//! # Coordinate conversions
//!
//! Transformations between the coordinate systems of [`crate::coordinates`]:
//!
//! ```text
//!   ecliptic ──(obliquity ε at t)──▶ equatorial ──(LST, φ)──▶ horizontal ──(center)──▶ planar
//! ```
//!
//! Each conversion is a small immutable value built once for a given instant, place or
//! projection center. Every quantity that only depends on those parameters (sine and cosine
//! of the obliquity, local sidereal time, trigonometry of the center) is computed in the
//! constructor, so that `apply` can be called on thousands of stars cheaply.
//!
//! Conversions never fail: their outputs are normalized by construction.

pub mod ecliptic_to_equatorial;
pub mod equatorial_to_horizontal;
pub mod stereographic;

pub use ecliptic_to_equatorial::EclipticToEquatorialConversion;
pub use equatorial_to_horizontal::EquatorialToHorizontalConversion;
pub use stereographic::StereographicProjection;
