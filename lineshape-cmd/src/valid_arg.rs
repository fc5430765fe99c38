//! Struct and conversion method for a validated arg.

use crate::cmd_args::RegularArgs;
use crate::toml_config::{TomlAxis, TomlConfig, TomlInput, TomlOutput, TomlShape};
use lineshape_lib::spectrum::{Peak, SpectrumKind};
use lineshape_lib::{Axis, LineShapeKind, DEFAULT_RATIO, DEFAULT_STEP, DEFAULT_WIDTH};
use std::num::NonZero;
use std::path::PathBuf;

/// Padding of an automatic axis on both sides, in line widths.
pub const AUTOMATIC_AXIS_PADDING: f64 = 5.0;

/// Where the peaks come from.
#[derive(Clone, Debug, PartialEq)]
pub enum PeakSource {
    /// A CSV peak file.
    File(PathBuf),
    /// A single peak given directly.
    Single(Peak),
}

/// The sampled axis: given explicitly, or chosen to cover all peaks.
#[derive(Clone, Debug, PartialEq)]
pub enum AxisChoice {
    Fixed(Axis),
    Automatic { step: f64 },
}

/// A validated config with a valid state that can be used to compute a spectrum.
#[derive(Clone, Debug)]
pub struct ValidatedConfig {
    /// See [PeakSource]
    pub peaks: PeakSource,
    /// The line shape of all peaks.
    pub shape: LineShapeKind,
    /// The width of peaks without their own width, always > 0.
    pub width: f64,
    /// Lorentzian fraction of Voigt lines. Not validated here, checked when the lines are built.
    pub ratio: f64,
    /// The kind of spectrum, if given.
    pub spectrum: Option<SpectrumKind>,
    /// TMS reference shift, applied if the spectrum is a proton NMR spectrum.
    pub tms_shift: Option<f64>,
    /// See [AxisChoice]
    pub axis: AxisChoice,
    /// Maximum count of sampling threads, if restricted.
    pub threads: Option<NonZero<usize>>,
    /// An optional path to save the samples to.
    pub output_path: Option<PathBuf>,
    /// Write the full console summary, else only one line.
    pub console_output: bool,
}

impl ValidatedConfig {
    /// Creates a valid config from the command line arguments.
    ///
    /// Only to be used if no config file was specified.
    pub fn try_from_cmd_args(args: RegularArgs) -> Result<Self, &'static str> {
        let RegularArgs {
            peaks_file,
            center,
            intensity,
            shape,
            width,
            ratio,
            start,
            stop,
            step,
            spectrum,
            tms_shift,
            threads,
            output_path,
            no_console,
        } = args;

        let peaks = handle_peaks(peaks_file, center, intensity)?;
        let spectrum = spectrum.map(SpectrumKind::from);
        let width = handle_width(width, spectrum)?;
        let axis = handle_axis(start, stop, step, width)?;

        Ok(Self {
            peaks,
            shape: shape.map(From::from).unwrap_or(LineShapeKind::Gaussian),
            width,
            ratio: ratio.unwrap_or(DEFAULT_RATIO),
            spectrum,
            tms_shift,
            axis,
            threads,
            output_path,
            console_output: !no_console,
        })
    }

    /// Creates a valid config from the specified toml configuration, uses overrides from the
    /// command line.
    pub fn try_from_toml(toml: TomlConfig, args: RegularArgs) -> Result<Self, &'static str> {
        let TomlConfig {
            threads,
            spectrum,
            input:
                TomlInput {
                    peaks_file,
                    center,
                    intensity,
                    tms_shift,
                },
            shape,
            axis,
            output,
        } = toml;

        let TomlShape {
            kind,
            width,
            ratio,
        } = shape.unwrap_or_default();

        let TomlAxis { start, stop, step } = axis.unwrap_or_default();

        let TomlOutput {
            path: output_path,
            no_console,
        } = output.unwrap_or_default();

        let RegularArgs {
            peaks_file: args_peaks_file,
            center: args_center,
            intensity: args_intensity,
            shape: args_shape,
            width: args_width,
            ratio: args_ratio,
            start: args_start,
            stop: args_stop,
            step: args_step,
            spectrum: args_spectrum,
            tms_shift: args_tms_shift,
            threads: args_threads,
            output_path: args_output_path,
            no_console: args_no_console,
        } = args;

        // a peak source on the command line replaces the one of the config file as a whole
        let peaks = if args_peaks_file.is_some() || args_center.is_some() {
            handle_peaks(args_peaks_file, args_center, args_intensity)?
        } else {
            handle_peaks(peaks_file, center, intensity)?
        };

        // so does an axis range
        let (start, stop) = if args_start.is_some() || args_stop.is_some() {
            (args_start, args_stop)
        } else {
            (start, stop)
        };

        // cmd args overwrite everywhere else
        let spectrum = args_spectrum.or(spectrum).map(SpectrumKind::from);
        let width = handle_width(args_width.or(width), spectrum)?;
        let axis = handle_axis(start, stop, args_step.or(step), width)?;

        Ok(Self {
            peaks,
            shape: args_shape
                .or(kind)
                .map(From::from)
                .unwrap_or(LineShapeKind::Gaussian),
            width,
            ratio: args_ratio.or(ratio).unwrap_or(DEFAULT_RATIO),
            spectrum,
            tms_shift: args_tms_shift.or(tms_shift),
            axis,
            threads: args_threads.or(threads),
            output_path: args_output_path.or(output_path),
            console_output: !(args_no_console || no_console),
        })
    }
}

/// Exactly one of peak file and single peak, a single peak needs center and intensity
fn handle_peaks(
    peaks_file: Option<PathBuf>,
    center: Option<f64>,
    intensity: Option<f64>,
) -> Result<PeakSource, &'static str> {
    match (peaks_file, center, intensity) {
        (Some(_), Some(_), _) => Err("Either a peak file or a single peak can be given, not both."),
        (Some(path), None, _) => Ok(PeakSource::File(path)),
        (None, Some(center), Some(intensity)) => Ok(PeakSource::Single(Peak::new(center, intensity))),
        (None, Some(_), None) => Err("A single peak needs both center and intensity."),
        (None, None, _) => Err("Neither a peak file nor a single peak was specified!"),
    }
}

/// A width that is unset or not > 0 is replaced by the spectrum default, or [DEFAULT_WIDTH]
fn handle_width(width: Option<f64>, spectrum: Option<SpectrumKind>) -> Result<f64, &'static str> {
    let width = match (width, spectrum) {
        (Some(width), Some(spectrum)) => spectrum.peak_width_or_default(width),
        (None, Some(spectrum)) => spectrum.default_peak_width(),
        (Some(width), None) if width > 0.0 => width,
        (_, None) => DEFAULT_WIDTH,
    };

    if width.is_finite() {
        Ok(width)
    } else {
        Err("The peak width must be a finite number.")
    }
}

/// Start and stop together give a fixed axis, neither of them an automatic axis.
///
/// The step of an automatic axis defaults to [DEFAULT_STEP], but at most a tenth of the width,
/// so narrow (e.g. NMR) peaks are still resolved.
fn handle_axis(
    start: Option<f64>,
    stop: Option<f64>,
    step: Option<f64>,
    width: f64,
) -> Result<AxisChoice, &'static str> {
    match (start, stop) {
        (Some(start), Some(stop)) => {
            let step = step.unwrap_or(DEFAULT_STEP);
            Axis::new(start, stop, step)
                .map(AxisChoice::Fixed)
                .map_err(|_| "Start, stop and step do not form a valid axis.")
        }
        (None, None) => {
            let step = step.unwrap_or(f64::min(DEFAULT_STEP, width / 10.0));
            if step.is_finite() && step != 0.0 {
                Ok(AxisChoice::Automatic { step })
            } else {
                Err("The step must be a finite number other than 0.")
            }
        }
        _ => Err("Start and stop of the axis must be given together."),
    }
}
