//! # Math kernel
//!
//! Small numeric building blocks shared by the coordinate systems, the time model and the
//! orbital models:
//!
//! - [`angle`] – unit conversions and normalization of angles (radians),
//! - [`interval`] – closed / right-open intervals with clipping and modular reduction,
//! - [`polynomial`] – Horner evaluation of fixed polynomials (sidereal time, obliquity).

pub mod angle;
pub mod interval;
pub mod polynomial;
