pub mod catalogue;
pub mod celestial;
pub mod constants;
pub mod conversions;
pub mod coordinates;
pub mod earth_orientation;
pub mod math;
pub mod models;
pub mod nightsky_errors;
pub mod observation_config;
pub mod observed_sky;
pub mod time;
