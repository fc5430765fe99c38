//! The command line arguments, config file and output of this program.

use clap::ValueEnum;
use lineshape_lib::spectrum::SpectrumKind;
use lineshape_lib::LineShapeKind;
use serde::{Deserialize, Serialize};

pub mod cmd_args;
pub mod csv;
pub mod logging;
pub mod toml_config;
pub mod valid_arg;

/// The line shapes that can be specified. Used both for command line arguments and TOML.
#[derive(Copy, Clone, Debug, PartialEq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ArgShape {
    /// Gaussian line
    Gaussian,
    /// Lorentzian line
    Lorentzian,
    /// Voigt line, see '--ratio'
    Voigt,
}

// this implementation is only there to break if a shape is added into lineshape_lib.
impl From<LineShapeKind> for ArgShape {
    fn from(value: LineShapeKind) -> Self {
        match value {
            LineShapeKind::Gaussian => ArgShape::Gaussian,
            LineShapeKind::Lorentzian => ArgShape::Lorentzian,
            LineShapeKind::Voigt => ArgShape::Voigt,
        }
    }
}

impl From<ArgShape> for LineShapeKind {
    fn from(value: ArgShape) -> Self {
        match value {
            ArgShape::Gaussian => LineShapeKind::Gaussian,
            ArgShape::Lorentzian => LineShapeKind::Lorentzian,
            ArgShape::Voigt => LineShapeKind::Voigt,
        }
    }
}

/// The kinds of spectra that can be specified. Used both for command line arguments and TOML.
#[derive(Copy, Clone, Debug, PartialEq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ArgSpectrum {
    /// Infrared spectrum, default peak width 40
    Ir,
    /// Raman spectrum, default peak width 40
    Raman,
    /// Vibrational circular dichroism spectrum, default peak width 40
    Vcd,
    /// UV-vis spectrum, default peak width 20
    UvVis,
    /// Proton NMR spectrum, default peak width 0.001
    HNmr,
    /// Carbon-13 NMR spectrum, default peak width 0.001
    CNmr,
}

impl From<SpectrumKind> for ArgSpectrum {
    fn from(value: SpectrumKind) -> Self {
        match value {
            SpectrumKind::Ir => ArgSpectrum::Ir,
            SpectrumKind::Raman => ArgSpectrum::Raman,
            SpectrumKind::Vcd => ArgSpectrum::Vcd,
            SpectrumKind::UvVis => ArgSpectrum::UvVis,
            SpectrumKind::HNmr => ArgSpectrum::HNmr,
            SpectrumKind::CNmr => ArgSpectrum::CNmr,
        }
    }
}

impl From<ArgSpectrum> for SpectrumKind {
    fn from(value: ArgSpectrum) -> Self {
        match value {
            ArgSpectrum::Ir => SpectrumKind::Ir,
            ArgSpectrum::Raman => SpectrumKind::Raman,
            ArgSpectrum::Vcd => SpectrumKind::Vcd,
            ArgSpectrum::UvVis => SpectrumKind::UvVis,
            ArgSpectrum::HNmr => SpectrumKind::HNmr,
            ArgSpectrum::CNmr => SpectrumKind::CNmr,
        }
    }
}
