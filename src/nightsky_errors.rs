use thiserror::Error;

#[derive(Error, Debug)]
pub enum NightSkyError {
    #[error("Invalid {kind} coordinates: longitude {lon}, latitude {lat}")]
    InvalidCoordinates {
        kind: &'static str,
        lon: f64,
        lat: f64,
    },

    #[error("Invalid interval bounds: low {low} must be strictly smaller than high {high}")]
    InvalidInterval { low: f64, high: f64 },

    #[error("Degenerate polynomial: the leading coefficient is zero or not finite")]
    DegeneratePolynomial,

    #[error("Invalid sexagesimal angle: {minutes} min {seconds} s (both must lie in [0, 60))")]
    InvalidSexagesimal { minutes: u32, seconds: f64 },

    #[error("Angular size must be non-negative, got {0}")]
    NegativeAngularSize(f32),

    #[error("Color index must lie in [-0.5, 5.5], got {0}")]
    InvalidColorIndex(f32),

    #[error("Moon phase must lie in [0, 1], got {0}")]
    InvalidPhase(f32),

    #[error("Earth cannot be observed from itself")]
    EarthNotObservable,

    #[error("An asterism must contain at least one star")]
    EmptyAsterism,

    #[error("Asterism references a star absent from the catalogue: {0}")]
    StarNotInCatalogue(String),

    #[error("Asterism is not part of this catalogue")]
    AsterismNotInCatalogue,

    #[error("Unknown catalogue identifier in asterism source: {0}")]
    UnknownCatalogueId(u32),

    #[error("Malformed {field} on line {line}: {value:?}")]
    CatalogueParse {
        line: u64,
        field: &'static str,
        value: String,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Unable to perform file operation: {0}")]
    Io(#[from] std::io::Error),
}

impl PartialEq for NightSkyError {
    fn eq(&self, other: &Self) -> bool {
        use NightSkyError::*;
        match (self, other) {
            (
                InvalidCoordinates {
                    kind: k1,
                    lon: lon1,
                    lat: lat1,
                },
                InvalidCoordinates {
                    kind: k2,
                    lon: lon2,
                    lat: lat2,
                },
            ) => k1 == k2 && lon1 == lon2 && lat1 == lat2,
            (InvalidInterval { low: l1, high: h1 }, InvalidInterval { low: l2, high: h2 }) => {
                l1 == l2 && h1 == h2
            }
            (
                InvalidSexagesimal {
                    minutes: m1,
                    seconds: s1,
                },
                InvalidSexagesimal {
                    minutes: m2,
                    seconds: s2,
                },
            ) => m1 == m2 && s1 == s2,
            (NegativeAngularSize(a), NegativeAngularSize(b)) => a == b,
            (InvalidColorIndex(a), InvalidColorIndex(b)) => a == b,
            (InvalidPhase(a), InvalidPhase(b)) => a == b,
            (StarNotInCatalogue(a), StarNotInCatalogue(b)) => a == b,
            (UnknownCatalogueId(a), UnknownCatalogueId(b)) => a == b,
            (
                CatalogueParse {
                    line: l1,
                    field: f1,
                    value: v1,
                },
                CatalogueParse {
                    line: l2,
                    field: f2,
                    value: v2,
                },
            ) => l1 == l2 && f1 == f2 && v1 == v2,

            // Foreign payloads are not comparable: same variant means equal
            (Csv(_), Csv(_)) => true,
            (Io(_), Io(_)) => true,

            (DegeneratePolynomial, DegeneratePolynomial) => true,
            (EarthNotObservable, EarthNotObservable) => true,
            (EmptyAsterism, EmptyAsterism) => true,
            (AsterismNotInCatalogue, AsterismNotInCatalogue) => true,

            _ => false,
        }
    }
}
