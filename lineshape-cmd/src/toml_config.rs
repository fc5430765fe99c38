//! TOML configuration file.

use crate::{ArgShape, ArgSpectrum};
use serde::{Deserialize, Serialize};
use std::num::NonZero;
use std::path::PathBuf;

/// Struct for the TOML configuration file, the constraints of CmdArgs are not validated here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct TomlConfig {
    pub threads: Option<NonZero<usize>>,
    pub spectrum: Option<ArgSpectrum>,
    // not really optional, must be supplemented from cmd args if missing.
    pub input: TomlInput,
    pub shape: Option<TomlShape>,
    pub axis: Option<TomlAxis>,
    pub output: Option<TomlOutput>,
}

/// Input: a peak file or a single peak, TMS reference for NMR
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct TomlInput {
    pub peaks_file: Option<PathBuf>,
    pub center: Option<f64>,
    pub intensity: Option<f64>,
    pub tms_shift: Option<f64>,
}

/// The line shape of all peaks
#[derive(Debug, Copy, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct TomlShape {
    pub kind: Option<ArgShape>,
    pub width: Option<f64>,
    pub ratio: Option<f64>,
}

/// The sampled axis
#[derive(Debug, Copy, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct TomlAxis {
    pub start: Option<f64>,
    pub stop: Option<f64>,
    pub step: Option<f64>,
}

/// Output: CSV file path and console output
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct TomlOutput {
    pub path: Option<PathBuf>,
    pub no_console: bool,
}
