//! Gaussian line shape.
//!
//! The line is normalized: its area over the whole real axis is the given intensity. The width is
//! given as full width at half maximum and converted into the standard deviation
//! `sigma = width / (2 * sqrt(2 * ln(2)))`.

use crate::internals::{check_finite, check_width, FWHM_PER_SIGMA, SQRT_2PI};
use crate::Error;

/// A gaussian peak.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Gaussian {
    center: f64,
    intensity: f64,
    width: f64,
    sigma: f64,
}

impl Gaussian {
    /// Creates a gaussian line with the given center, area (`intensity`) and FWHM (`width`).
    ///
    /// Returns [Error::InvalidParameter] if the width is not > 0 or any value is not finite.
    pub fn new(center: f64, intensity: f64, width: f64) -> Result<Self, Error> {
        let center = check_finite("center", center)?;
        let intensity = check_finite("intensity", intensity)?;
        let width = check_width(width)?;

        Ok(Self {
            center,
            intensity,
            width,
            sigma: width / FWHM_PER_SIGMA,
        })
    }

    pub fn center(&self) -> f64 {
        self.center
    }

    pub fn intensity(&self) -> f64 {
        self.intensity
    }

    /// Full width at half maximum.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Standard deviation, derived from the width.
    pub fn sigma(&self) -> f64 {
        self.sigma
    }

    /// The value of the line at position x:
    /// `intensity / (sigma * sqrt(2 pi)) * exp(-(x - center)^2 / (2 sigma^2))`.
    #[inline]
    pub fn evaluate(&self, x: f64) -> f64 {
        let offset = x - self.center;
        let amplitude = self.intensity / (self.sigma * SQRT_2PI);

        amplitude * f64::exp(-(offset * offset) / (2.0 * self.sigma * self.sigma))
    }
}
