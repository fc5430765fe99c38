//! Voigt line shape: the convolution of a gaussian and a lorentzian.
//!
//! The line is described by its full width at half maximum and a ratio `q` in the open interval
//! (0, 1): the lorentzian fraction of the line. `q` close to 0 gives an (almost) pure gaussian,
//! `q` close to 1 an (almost) pure lorentzian.
//!
//! Width and ratio are decoded into the lorentzian half width `gamma` and the gaussian standard
//! deviation `sigma` with a closed form pseudo-Voigt decomposition (see [decode_voigt_width]),
//! which is accurate to about 1.2%. The line is then evaluated with the
//! [Faddeeva function](crate::faddeeva), see
//! <https://en.wikipedia.org/wiki/Voigt_profile#The_uncentered_Voigt_profile>:
//!
//! `V(x) = intensity * Re(w((x - center + i gamma) / (sqrt(2) sigma))) / (sigma sqrt(2 pi))`

use crate::faddeeva::faddeeva;
use crate::internals::{check_f64, check_finite, check_width, FWHM_PER_SIGMA, SQRT_2PI};
use crate::Error;
use num_complex::Complex64;
use std::f64::consts::SQRT_2;

/// The lorentzian and gaussian parts of a Voigt line.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct VoigtWidths {
    /// Half width at half maximum of the lorentzian part.
    pub gamma: f64,
    /// Standard deviation of the gaussian part.
    pub sigma: f64,
}

/// Decodes the full width at half maximum `width` (k) and the lorentzian fraction `ratio` (q) into
/// gamma and sigma:
///
/// ```text
/// f_L = (-k q^2 + (1-q)^2 sqrt(k^2 q^2 (4 - 8q + 5q^2) / (1-q)^4)) / (2 (1-q)^2)
/// f_G = ( k q^2 - (1-q)^2 sqrt(k^2 q^2 (4 - 8q + 5q^2) / (1-q)^4)) / (2 (q-1) q)
/// gamma = f_L / 2
/// sigma = f_G / (2 sqrt(2 ln 2))
/// ```
///
/// With `s = sqrt(4 - 8q + 5q^2)` the root is `k q s / (1-q)^2`, and since `s^2 - q^2 = 4 (1-q)^2`
/// both widths reduce to
///
/// ```text
/// f_L = 2 k q / (s + q)
/// f_G = 2 k (1-q) / (s + q)
/// ```
///
/// This form is evaluated. It stays accurate for ratios arbitrarily close to 0 or 1. The
/// decomposition itself is accurate to within around 1.2%.
///
/// The ratio must lie strictly between 0 and 1. Otherwise [Error::InvalidParameter] is returned,
/// as it is for a width that is not > 0, or if the decoded sigma is not > 0 (a ratio so close to 1
/// that no gaussian part is left).
pub fn decode_voigt_width(ratio: f64, width: f64) -> Result<VoigtWidths, Error> {
    let width = check_width(width)?;
    check_ratio(ratio)?;

    let (q, k) = (ratio, width);
    let s = f64::sqrt(4.0 - 8.0 * q + 5.0 * (q * q));
    check_f64(s)?;

    let f_l = 2.0 * k * q / (s + q);
    let f_g = 2.0 * k * (1.0 - q) / (s + q);

    let gamma = f_l / 2.0;
    let sigma = f_g / FWHM_PER_SIGMA;
    check_f64(gamma)?;
    check_f64(sigma)?;

    if gamma < 0.0 || sigma <= 0.0 {
        return Err(Error::InvalidParameter(format!(
            "Voigt ratio {ratio} with width {width} leaves no valid gaussian or lorentzian part \
             (gamma: {gamma}, sigma: {sigma})"
        )));
    }

    Ok(VoigtWidths { gamma, sigma })
}

/// Checks 0 < ratio < 1
fn check_ratio(ratio: f64) -> Result<(), Error> {
    if ratio > 0.0 && ratio < 1.0 {
        Ok(())
    } else {
        Err(Error::InvalidParameter(format!(
            "Voigt ratio must be in the open interval (0, 1). Is: {ratio}"
        )))
    }
}

/// A Voigt peak.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Voigt {
    center: f64,
    intensity: f64,
    ratio: f64,
    width: f64,
    widths: VoigtWidths,
    // sigma * sqrt(2 pi)
    denominator: f64,
}

impl Voigt {
    /// Creates a Voigt line with the given center, area (`intensity`), lorentzian fraction
    /// (`ratio`) and FWHM (`width`). For the constraints, see [decode_voigt_width].
    pub fn new(center: f64, intensity: f64, ratio: f64, width: f64) -> Result<Self, Error> {
        let center = check_finite("center", center)?;
        let intensity = check_finite("intensity", intensity)?;
        let widths = decode_voigt_width(ratio, width)?;

        let denominator = widths.sigma * SQRT_2PI;
        check_f64(denominator)?;

        Ok(Self {
            center,
            intensity,
            ratio,
            width,
            widths,
            denominator,
        })
    }

    pub fn center(&self) -> f64 {
        self.center
    }

    pub fn intensity(&self) -> f64 {
        self.intensity
    }

    pub fn ratio(&self) -> f64 {
        self.ratio
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    /// The decoded gamma and sigma.
    pub fn widths(&self) -> VoigtWidths {
        self.widths
    }

    pub fn evaluate(&self, x: f64) -> f64 {
        let VoigtWidths { gamma, sigma } = self.widths;
        let z = Complex64::new(x - self.center, gamma) / (SQRT_2 * sigma);

        self.intensity * faddeeva(z).re / self.denominator
    }
}
