//! # Bounded intervals
//!
//! Two immutable interval flavours share the [`Interval`] trait:
//!
//! - [`ClosedInterval`] `[low, high]`, which can **clip** a value onto its bounds,
//! - [`RightOpenInterval`] `[low, high)`, which can **reduce** any value into itself with a
//!   true (floored) modulo. Reduction is what normalizes angles into `[0, 2π)` and sidereal
//!   hours into `[0, 24)`.
//!
//! Both constructors reject `low >= high` (and NaN bounds) with
//! [`NightSkyError::InvalidInterval`].

use std::fmt;

use crate::constants::{DPI, HOURS_PER_DAY};
use crate::nightsky_errors::NightSkyError;

/// Behaviour shared by every bounded interval.
pub trait Interval {
    /// Lower bound of the interval
    fn low(&self) -> f64;

    /// Upper bound of the interval
    fn high(&self) -> f64;

    /// `true` if `v` belongs to the interval
    fn contains(&self, v: f64) -> bool;

    /// Width of the interval (`high - low`)
    fn size(&self) -> f64 {
        self.high() - self.low()
    }
}

fn check_bounds(low: f64, high: f64) -> Result<(), NightSkyError> {
    if low.is_nan() || high.is_nan() || low >= high {
        return Err(NightSkyError::InvalidInterval { low, high });
    }
    Ok(())
}

/// Closed interval `[low, high]`.
#[derive(Debug, Clone, Copy)]
pub struct ClosedInterval {
    low: f64,
    high: f64,
}

impl ClosedInterval {
    /// Build the closed interval `[low, high]`.
    ///
    /// Errors
    /// ------
    /// * [`NightSkyError::InvalidInterval`] if `low >= high`.
    pub fn of(low: f64, high: f64) -> Result<Self, NightSkyError> {
        check_bounds(low, high)?;
        Ok(ClosedInterval { low, high })
    }

    /// Build the closed interval `[-size/2, size/2]` centered on zero.
    pub fn symmetric(size: f64) -> Result<Self, NightSkyError> {
        Self::of(-size / 2.0, size / 2.0)
    }

    /// Saturate `v` to the nearest bound when it lies outside the interval.
    pub fn clip(&self, v: f64) -> f64 {
        if v < self.low {
            self.low
        } else if v > self.high {
            self.high
        } else {
            v
        }
    }
}

impl Interval for ClosedInterval {
    fn low(&self) -> f64 {
        self.low
    }

    fn high(&self) -> f64 {
        self.high
    }

    fn contains(&self, v: f64) -> bool {
        self.low <= v && v <= self.high
    }
}

impl fmt::Display for ClosedInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{}]", self.low, self.high)
    }
}

/// Right-open interval `[low, high)`.
#[derive(Debug, Clone, Copy)]
pub struct RightOpenInterval {
    low: f64,
    high: f64,
}

impl RightOpenInterval {
    /// One full turn, `[0, 2π)`
    pub const TURN: RightOpenInterval = RightOpenInterval {
        low: 0.0,
        high: DPI,
    };

    /// Hours of a day, `[0, 24)`
    pub const DAY_HOURS: RightOpenInterval = RightOpenInterval {
        low: 0.0,
        high: HOURS_PER_DAY,
    };

    /// Build the right-open interval `[low, high)`.
    ///
    /// Errors
    /// ------
    /// * [`NightSkyError::InvalidInterval`] if `low >= high`.
    pub fn of(low: f64, high: f64) -> Result<Self, NightSkyError> {
        check_bounds(low, high)?;
        Ok(RightOpenInterval { low, high })
    }

    /// Build the right-open interval `[-size/2, size/2)` centered on zero.
    pub fn symmetric(size: f64) -> Result<Self, NightSkyError> {
        Self::of(-size / 2.0, size / 2.0)
    }

    /// Map `v` into the interval with a floored modulo:
    /// `low + ((v - low) mod (high - low))`.
    ///
    /// Unlike the `%` operator the result is correct for values below `low`, and the result
    /// is guaranteed to stay strictly below `high` even when rounding would land on it.
    pub fn reduce(&self, v: f64) -> f64 {
        let size = self.size();
        let r = (v - self.low).rem_euclid(size);
        let reduced = self.low + if r >= size { 0.0 } else { r };
        if reduced >= self.high {
            self.low
        } else {
            reduced
        }
    }
}

impl Interval for RightOpenInterval {
    fn low(&self) -> f64 {
        self.low
    }

    fn high(&self) -> f64 {
        self.high
    }

    fn contains(&self, v: f64) -> bool {
        self.low <= v && v < self.high
    }
}

impl fmt::Display for RightOpenInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{}[", self.low, self.high)
    }
}
