//! # Constants and type definitions for nightsky
//!
//! This module centralizes the **conversion factors** and **unit type aliases** used
//! throughout the crate.
//!
//! ## Overview
//!
//! - Unit conversions (degrees ↔ radians, hours ↔ radians, arcseconds → radians)
//! - Time constants (milliseconds per day, days per Julian century, tropical year)
//! - Type aliases documenting the unit carried by a plain `f64`
//!
//! Angles are always handled in **radians** internally; the aliases below only make the
//! unit of a public argument or return value explicit.

// -------------------------------------------------------------------------------------------------
// Angular constants and unit conversions
// -------------------------------------------------------------------------------------------------

/// 2π, one full turn in radians
pub const DPI: f64 = std::f64::consts::TAU;

/// Degrees → radians
pub const RADEG: f64 = std::f64::consts::PI / 180.0;

/// Arcseconds → radians
pub const RADSEC: f64 = std::f64::consts::PI / 648000.0;

/// Hours → radians
pub const RADH: f64 = DPI / 24.0;

/// Number of hours in a day
pub const HOURS_PER_DAY: f64 = 24.0;

// -------------------------------------------------------------------------------------------------
// Time constants
// -------------------------------------------------------------------------------------------------

/// Number of milliseconds in a day
pub const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Number of milliseconds in an hour
pub const MILLIS_PER_HOUR: f64 = 3_600_000.0;

/// Number of days in a Julian century
pub const DAYS_PER_JULIAN_CENTURY: f64 = 36_525.0;

/// Length of the tropical year, in days
pub const TROPICAL_YEAR: f64 = 365.242191;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in radians
pub type Radian = f64;
/// Angle in degrees
pub type Degree = f64;
/// Angle in hours (1h = 15°)
pub type Hour = f64;
/// Angle in arcseconds
pub type ArcSec = f64;
/// Elapsed time in days
pub type Days = f64;
/// Elapsed time in Julian centuries
pub type JulianCenturies = f64;
