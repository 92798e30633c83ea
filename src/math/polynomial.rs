use std::fmt;

use itertools::Itertools;

use crate::nightsky_errors::NightSkyError;

/// Polynomial with real coefficients, stored from the highest degree down to the constant
/// term.
#[derive(Debug, Clone)]
pub struct Polynomial {
    coefficients: Vec<f64>,
}

impl Polynomial {
    /// Build `cₙ·xⁿ + … + c₁·x + c₀` from `cₙ` followed by `[cₙ₋₁, …, c₀]`.
    ///
    /// Errors
    /// ------
    /// * [`NightSkyError::DegeneratePolynomial`] if the leading coefficient `cₙ` is zero,
    ///   infinite or NaN.
    pub fn of(coefficient_n: f64, coefficients: &[f64]) -> Result<Self, NightSkyError> {
        if !coefficient_n.is_finite() || coefficient_n == 0.0 {
            return Err(NightSkyError::DegeneratePolynomial);
        }
        let mut all = Vec::with_capacity(coefficients.len() + 1);
        all.push(coefficient_n);
        all.extend_from_slice(coefficients);
        Ok(Polynomial { coefficients: all })
    }

    /// Build a polynomial from literal coefficients known to have a non-zero leading term.
    pub(crate) fn with_coefficients(coefficients: Vec<f64>) -> Self {
        debug_assert!(coefficients.first().is_some_and(|c| c.is_finite() && *c != 0.0));
        Polynomial { coefficients }
    }

    pub fn degree(&self) -> usize {
        self.coefficients.len() - 1
    }

    /// Evaluate the polynomial at `x` with Horner's scheme.
    pub fn at(&self, x: f64) -> f64 {
        self.coefficients.iter().fold(0.0, |acc, c| acc * x + c)
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let degree = self.degree();
        let terms = self
            .coefficients
            .iter()
            .enumerate()
            .filter(|(_, c)| **c != 0.0)
            .map(|(i, c)| {
                let power = degree - i;
                let sign = if *c < 0.0 {
                    "-"
                } else if i == 0 {
                    ""
                } else {
                    "+"
                };
                let magnitude = c.abs();
                let coefficient = if magnitude == 1.0 && power > 0 {
                    String::new()
                } else {
                    format!("{magnitude:?}")
                };
                let variable = match power {
                    0 => String::new(),
                    1 => "x".to_string(),
                    p => format!("x^{p}"),
                };
                format!("{sign}{coefficient}{variable}")
            })
            .join("");
        write!(f, "{terms}")
    }
}
