//! Faddeeva's scaled complex complementary error function, `w(z) = exp(-z^2) erfc(-iz)`.
//!
//! The function is approximated by a polynomial of degree N - 1 (N = 1000) in the conformally
//! mapped variable `Z = (L + iz) / (L - iz)`, with `L = sqrt(N / sqrt(2))`:
//!
//! `w(z) = 2 p(Z) / (L - iz)^2 + (1 / sqrt(pi)) / (L - iz)`
//!
//! The coefficients of `p` are empirically fitted data and are used exactly as given. The real
//! part of `w` along a shifted real line is what the [Voigt profile](crate::shapes::voigt) needs.
//! Accuracy is around 1e-6 (relative) or better in the region relevant for line shapes.

mod coefficients;

use coefficients::{COEFFICIENTS_DESCENDING, COEFFICIENT_COUNT};
use num_complex::Complex64;
use std::f64::consts::FRAC_2_SQRT_PI;
use std::sync::LazyLock;

/// 1 / sqrt(pi)
const FRAC_1_SQRT_PI: f64 = FRAC_2_SQRT_PI / 2.0;

/// The approximant, built once on first use and shared by all evaluations afterwards.
static APPROXIMANT: LazyLock<Approximant> = LazyLock::new(Approximant::build);

/// Polynomial approximant of w(z).
#[derive(Debug)]
pub(crate) struct Approximant {
    /// Coefficients, index 0 is the constant term.
    pub(crate) coefficients: Box<[f64]>,
    /// The scale of the conformal map, `L = sqrt(N / sqrt(2))`.
    pub(crate) scale: f64,
}

impl Approximant {
    fn build() -> Self {
        // stored highest degree first
        let coefficients = COEFFICIENTS_DESCENDING
            .iter()
            .rev()
            .copied()
            .collect::<Box<[f64]>>();
        let scale = f64::sqrt(COEFFICIENT_COUNT as f64 / std::f64::consts::SQRT_2);

        tracing::debug!(
            terms = coefficients.len(),
            scale,
            "built the Faddeeva approximant"
        );

        Self {
            coefficients,
            scale,
        }
    }

    /// The shared, lazily built instance.
    pub(crate) fn get() -> &'static Self {
        &APPROXIMANT
    }

    fn evaluate(&self, z: Complex64) -> Complex64 {
        let iz = Complex64::i() * z;
        let denominator = self.scale - iz;
        let mapped = (self.scale + iz) / denominator;

        // Horner's scheme, starting with the highest degree
        let p = self
            .coefficients
            .iter()
            .rev()
            .fold(Complex64::new(0.0, 0.0), |acc, &a| acc * mapped + a);

        2.0 * p / (denominator * denominator) + FRAC_1_SQRT_PI / denominator
    }
}

/// Computes `w(z) = exp(-z^2) erfc(-iz)`, Faddeeva's scaled complex error function.
///
/// The first call builds the approximant; every later call only evaluates it.
pub fn faddeeva(z: Complex64) -> Complex64 {
    Approximant::get().evaluate(z)
}

/// Real part of [faddeeva] at `z = x + iy`.
pub fn faddeeva_re(x: f64, y: f64) -> f64 {
    faddeeva(Complex64::new(x, y)).re
}

/// Imaginary part of [faddeeva] at `z = x + iy`.
pub fn faddeeva_im(x: f64, y: f64) -> f64 {
    faddeeva(Complex64::new(x, y)).im
}
