#![allow(dead_code)]

use std::fs::File;

use approx::assert_relative_eq;
use nightsky::catalogue::{AsterismLoader, HygDatabaseLoader, StarCatalogue, StarCatalogueBuilder};
use nightsky::coordinates::{HorizontalCoordinates, PlanarCoordinates};

pub const HYG_EXTRACT: &str = "tests/data/hyg_extract.csv";
pub const ASTERISMS: &str = "tests/data/asterisms.txt";

/// Catalogue built from the test extract of the HYG database and its asterisms.
pub fn load_catalogue() -> StarCatalogue {
    let mut builder = StarCatalogueBuilder::new();
    builder
        .load_from(File::open(HYG_EXTRACT).unwrap(), &HygDatabaseLoader)
        .unwrap()
        .load_from(File::open(ASTERISMS).unwrap(), &AsterismLoader)
        .unwrap();
    builder.build().unwrap()
}

pub fn assert_planar_close(actual: &PlanarCoordinates, expected: &PlanarCoordinates, epsilon: f64) {
    assert_relative_eq!(actual.x(), expected.x(), epsilon = epsilon);
    assert_relative_eq!(actual.y(), expected.y(), epsilon = epsilon);
}

pub fn assert_horizontal_close(
    actual: &HorizontalCoordinates,
    expected: &HorizontalCoordinates,
    epsilon: f64,
) {
    assert!(
        actual.angular_distance_to(expected) < epsilon,
        "{actual} is not within {epsilon} rad of {expected}"
    );
}
