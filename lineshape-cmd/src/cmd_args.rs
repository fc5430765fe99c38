//! Everything necessary for command line arguments.

use crate::{ArgShape, ArgSpectrum};
use clap::{ArgAction, Args, Parser};
use std::num::NonZero;
use std::path::PathBuf;

/// The command line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct CmdArgs {
    // If peaks are given on the command line, a config file is not needed, but allowed.
    /// Path to an optional configuration file. Required if neither a peak file nor a single peak
    /// is specified.
    ///
    /// The configuration written in the config file can be supplemented by command line switches.
    #[arg(short, long, required_unless_present_any = ["peaks_file", "center"])]
    pub config_file: Option<PathBuf>,
    #[command(flatten)]
    pub regular_args: RegularArgs,
    #[command(flatten)]
    pub logging: LoggingArgs,
}

/// The "regular" command line arguments (everything except for config file and logging)
#[derive(Debug, Clone, Default, Args)]
#[group(required = false, multiple = true)]
pub struct RegularArgs {
    /// Path to a peak file: CSV with ';' delimiter and the header "center;intensity", with an
    /// optional third column "width".
    #[arg(short, long = "peaks", conflicts_with = "center")]
    pub peaks_file: Option<PathBuf>,
    /// Center of a single peak, instead of a peak file.
    #[arg(long, requires = "intensity", allow_negative_numbers = true)]
    pub center: Option<f64>,
    /// Area under the single peak given with '--center'.
    #[arg(long, allow_negative_numbers = true)]
    pub intensity: Option<f64>,
    /// The line shape used for every peak. Default: gaussian.
    #[arg(short, long)]
    pub shape: Option<ArgShape>,
    /// The full width at half maximum of peaks without their own width.
    ///
    /// If unset (or not > 0), the default width of the spectrum kind is used, or 10 if no
    /// spectrum kind is set.
    #[arg(short, long, allow_negative_numbers = true)]
    pub width: Option<f64>,
    /// The lorentzian fraction of Voigt lines, strictly between 0 and 1. Default: 0.5.
    #[arg(short, long)]
    pub ratio: Option<f64>,
    /// The first sampled point. Requires '--stop'.
    ///
    /// If neither start nor stop is set, the axis is chosen to cover all peaks.
    #[arg(long, requires = "stop", allow_negative_numbers = true)]
    pub start: Option<f64>,
    /// The end of the sampled axis (exclusive). Requires '--start'.
    #[arg(long, requires = "start", allow_negative_numbers = true)]
    pub stop: Option<f64>,
    /// The distance between two sampled points, may be negative to sample from high to low.
    /// Default: 1.
    #[arg(long, allow_negative_numbers = true)]
    pub step: Option<f64>,
    /// The kind of spectrum the peaks belong to. Selects the default peak width.
    #[arg(long)]
    pub spectrum: Option<ArgSpectrum>,
    /// The chemical shift of TMS, for proton NMR spectra. If > 0, peak centers are converted into
    /// shifts relative to TMS: "tms-shift - center".
    #[arg(long)]
    pub tms_shift: Option<f64>,
    /// The maximum count of threads used for sampling. Default: one per logical CPU.
    #[arg(short = 'j', long)]
    pub threads: Option<NonZero<usize>>,
    /// Optional path to save the samples to.
    ///
    /// If given, the samples will be saved in CSV format with ';' delimiter and the columns "x;y".
    #[arg(short, long = "output")]
    pub output_path: Option<PathBuf>,
    /// Reduce the console output to a one line summary.
    #[arg(long)]
    pub no_console: bool,
}

/// Logging options.
#[derive(Debug, Clone, Default, Args)]
pub struct LoggingArgs {
    /// More log output, can be repeated: -v info, -vv debug, -vvv trace. Default: warnings only.
    #[arg(short, long, action = ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,
    /// No log output at all.
    #[arg(short, long)]
    pub quiet: bool,
    /// Additionally write the log to this file.
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
