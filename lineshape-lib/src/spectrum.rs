//! Spectra built from a list of peaks.
//!
//! A computed IR, Raman, VCD, UV-vis or NMR spectrum is a list of stick peaks (position and
//! intensity). Broadening every stick with the same line shape and summing the lines gives the
//! plotted spectrum. Each kind of spectrum has its own typical peak width, see
//! [SpectrumKind::default_peak_width].

use crate::axis::Axis;
use crate::internals::check_finite;
use crate::sampling::Samples;
use crate::shapes::LineShape;
use crate::{Error, LineShapeKind};
use lineshape_lib_derive::use_thread_pool;
use rayon::prelude::*;
use strum::{Display, EnumIter, EnumString};

/// A stick peak of a spectrum.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Peak {
    /// Position, e.g. a frequency or a chemical shift.
    pub center: f64,
    /// Area under the broadened line.
    pub intensity: f64,
    /// Full width at half maximum for this peak. If `None` (or not > 0), the width of the
    /// [Spectrum] is used.
    pub width: Option<f64>,
}

impl Peak {
    pub fn new(center: f64, intensity: f64) -> Self {
        Self {
            center,
            intensity,
            width: None,
        }
    }

    pub fn with_width(self, width: f64) -> Self {
        Self {
            width: Some(width),
            ..self
        }
    }
}

/// The kinds of spectra with their conventional peak widths.
#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq, EnumIter, EnumString, Display)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum SpectrumKind {
    /// Infrared, positions in cm^-1.
    Ir,
    /// Raman, positions in cm^-1.
    Raman,
    /// Vibrational circular dichroism, positions in cm^-1.
    Vcd,
    /// UV-vis absorption.
    UvVis,
    /// Proton NMR, positions in ppm.
    HNmr,
    /// Carbon-13 NMR, positions in ppm.
    CNmr,
}

impl SpectrumKind {
    /// The peak width (FWHM) used if none is given.
    pub fn default_peak_width(&self) -> f64 {
        match self {
            SpectrumKind::Ir | SpectrumKind::Raman | SpectrumKind::Vcd => 40.0,
            SpectrumKind::UvVis => 20.0,
            SpectrumKind::HNmr | SpectrumKind::CNmr => 0.001,
        }
    }

    /// The requested width if it is > 0, otherwise [Self::default_peak_width].
    pub fn peak_width_or_default(&self, width: f64) -> f64 {
        if width > 0.0 {
            width
        } else {
            self.default_peak_width()
        }
    }

    pub fn is_nmr(&self) -> bool {
        matches!(self, SpectrumKind::HNmr | SpectrumKind::CNmr)
    }
}

/// Converts absolute NMR shieldings into shifts relative to TMS: `tms_shift - isotropic`.
///
/// Only applied if `tms_shift > 0`, so 0 means "no reference available".
pub fn tms_shift_peaks(peaks: &mut [Peak], tms_shift: f64) {
    if tms_shift > 0.0 {
        peaks
            .iter_mut()
            .for_each(|peak| peak.center = tms_shift - peak.center);
    }
}

/// A spectrum: the sum of one line per peak.
#[derive(Clone, Debug, PartialEq)]
pub struct Spectrum {
    lines: Vec<LineShape>,
}

impl Spectrum {
    /// Broadens every peak with a line of the given kind. Peaks without their own width use
    /// `default_width`. `ratio` is only used for Voigt lines.
    ///
    /// Returns the error of the first peak that does not form a valid line.
    pub fn new(
        peaks: &[Peak],
        kind: LineShapeKind,
        ratio: f64,
        default_width: f64,
    ) -> Result<Self, Error> {
        let lines = peaks
            .iter()
            .map(|peak| {
                let width = peak
                    .width
                    .filter(|&width| width > 0.0)
                    .unwrap_or(default_width);
                LineShape::new(kind, peak.center, peak.intensity, width, ratio)
            })
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(lines = lines.len(), %kind, "built spectrum");

        Ok(Self { lines })
    }

    pub fn lines(&self) -> &[LineShape] {
        &self.lines
    }

    /// The value of the spectrum at position x.
    pub fn evaluate(&self, x: f64) -> f64 {
        self.lines.iter().map(|line| line.evaluate(x)).sum()
    }

    /// Samples the spectrum on every point of the axis.
    pub fn sample(&self, axis: &Axis) -> Samples {
        sample_spectrum(self, axis)
    }

    /// An axis from the lowest to the highest peak, extended by `padding_widths` times the
    /// largest line width on both sides.
    ///
    /// Returns [Error::InvalidAxis] for a spectrum without lines, or for an invalid step.
    pub fn axis_for(&self, step: f64, padding_widths: f64) -> Result<Axis, Error> {
        let padding_widths = check_finite("padding_widths", padding_widths)?;

        let Some((min, max, width)) = self.lines.iter().fold(None, |acc, line| {
            let (center, width) = (line.center(), line.width());
            Some(match acc {
                None => (center, center, width),
                Some((min, max, max_width)) => {
                    (f64::min(min, center), f64::max(max, center), f64::max(max_width, width))
                }
            })
        }) else {
            return Err(Error::InvalidAxis(
                "a spectrum without peaks has no extent".to_owned(),
            ));
        };

        let padding = padding_widths.abs() * width;
        // include the upper end
        Axis::new(min - padding, max + padding + step.abs(), step.abs())
    }
}

#[use_thread_pool]
fn sample_spectrum(spectrum: &Spectrum, axis: &Axis) -> Samples {
    let x = axis.points().collect::<Vec<_>>();
    let y = x
        .par_iter()
        .map(|&x| spectrum.evaluate(x))
        .collect::<Vec<_>>();

    tracing::trace!(lines = spectrum.lines.len(), points = x.len(), "sampled spectrum");

    Samples::from_parts(x, y, axis.step())
}
