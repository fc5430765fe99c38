//! Lorentzian (Cauchy) line shape, `(intensity / pi) * gamma / ((x - center)^2 + gamma^2)` with
//! the half width `gamma = width / 2`.

use crate::internals::{check_finite, check_width};
use crate::Error;
use std::f64::consts::FRAC_1_PI;

/// A lorentzian peak.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Lorentzian {
    center: f64,
    intensity: f64,
    gamma: f64,
}

impl Lorentzian {
    /// Creates a lorentzian line with the given center, area (`intensity`) and FWHM (`width`).
    ///
    /// Returns [Error::InvalidParameter] if the width is not > 0 or any value is not finite.
    pub fn new(center: f64, intensity: f64, width: f64) -> Result<Self, Error> {
        let center = check_finite("center", center)?;
        let intensity = check_finite("intensity", intensity)?;
        let width = check_width(width)?;

        Ok(Self {
            center,
            intensity,
            gamma: width / 2.0,
        })
    }

    pub fn center(&self) -> f64 {
        self.center
    }

    pub fn intensity(&self) -> f64 {
        self.intensity
    }

    pub fn width(&self) -> f64 {
        self.gamma * 2.0
    }

    /// Half width at half maximum.
    pub fn gamma(&self) -> f64 {
        self.gamma
    }

    #[inline]
    pub fn evaluate(&self, x: f64) -> f64 {
        let offset = x - self.center;

        self.intensity * FRAC_1_PI * self.gamma / (offset * offset + self.gamma * self.gamma)
    }
}
