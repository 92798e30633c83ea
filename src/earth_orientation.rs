use std::sync::LazyLock;

use crate::constants::{JulianCenturies, Radian, RADEG, RADSEC};
use crate::math::polynomial::Polynomial;

/// Mean obliquity at J2000: 23° 26′ 21.45″
const OBLIQUITY_J2000: Radian = (23.0 + 26.0 / 60.0 + 21.45 / 3600.0) * RADEG;

static OBLIQUITY: LazyLock<Polynomial> = LazyLock::new(|| {
    Polynomial::with_coefficients(vec![
        0.00181 * RADSEC,
        -0.0006 * RADSEC,
        -46.815 * RADSEC,
        OBLIQUITY_J2000,
    ])
});

/// Compute the mean obliquity of the ecliptic ε, in radians.
///
/// Arguments
/// ---------
/// * `t`: Julian centuries elapsed since J2000.
///
/// Formula
/// -------
/// The obliquity is a cubic polynomial in `T`, evaluated with Horner's method:
///
/// ```text
/// ε(T) = 0.00181″·T³ − 0.0006″·T² − 46.815″·T + 23°26′21.45″
/// ```
pub fn mean_obliquity(t: JulianCenturies) -> Radian {
    OBLIQUITY.at(t)
}

#[cfg(test)]
mod earth_orientation_test {
    use super::*;
    use crate::math::angle;
    use approx::assert_relative_eq;

    #[test]
    fn test_obliquity_at_j2000() {
        assert_relative_eq!(
            mean_obliquity(0.0),
            angle::of_dms(23, 26, 21.45).unwrap(),
            epsilon = 1e-15
        );
    }

    #[test]
    fn test_obliquity_2009() {
        // 2009-07-06: T = 0.095099247
        assert_relative_eq!(
            angle::to_deg(mean_obliquity(0.095099247)),
            23.438054979133913,
            epsilon = 1e-9
        );
    }
}
