use anyhow::Context;
use clap::Parser;
use lineshape_cmd::cmd_args::{CmdArgs, LoggingArgs};
use lineshape_cmd::csv::{read_peaks, CsvFile};
use lineshape_cmd::logging::setup_logging;
use lineshape_cmd::toml_config::TomlConfig;
use lineshape_cmd::valid_arg::{AxisChoice, PeakSource, ValidatedConfig, AUTOMATIC_AXIS_PADDING};
use lineshape_lib::spectrum::{tms_shift_peaks, Spectrum, SpectrumKind};
use lineshape_lib::{set_max_threads, Samples};
use std::fs;
use std::time::Instant;

/// Main function.
///
/// On success: prints a summary of the sampled spectrum to stdout, exit code SUCCESS.
/// On error: prints the error to stderr, exit code FAILURE.
///
/// This program takes some arguments and an optional config file, use `--help`.
fn main() -> anyhow::Result<()> {
    let CmdArgs {
        config_file,
        regular_args,
        logging: LoggingArgs {
            verbose,
            quiet,
            log_file,
        },
    } = CmdArgs::parse();

    setup_logging(verbose, quiet, log_file.as_deref())?;

    // parse configuration
    let config = if let Some(config_file) = config_file {
        let toml = fs::read_to_string(&config_file)
            .with_context(|| format!("Failed to read config file \"{}\"", config_file.display()))?;

        let toml_config: TomlConfig =
            toml::from_str(&toml).context("Failed to parse the config file")?;
        ValidatedConfig::try_from_toml(toml_config, regular_args)
    } else {
        ValidatedConfig::try_from_cmd_args(regular_args)
    }
    .map_err(|err| anyhow::anyhow!(err))?;

    tracing::debug!(?config, "validated configuration");

    if let Some(threads) = config.threads {
        set_max_threads(threads.get()).context("Failed to restrict the sampling threads")?;
    }

    let mut peaks = match &config.peaks {
        PeakSource::File(path) => {
            if config.console_output {
                println!("Reading peak file: \"{}\"", path.display());
            }
            read_peaks(path)
                .with_context(|| format!("Failed to read peak file \"{}\"", path.display()))?
        }
        PeakSource::Single(peak) => vec![*peak],
    };

    if let Some(tms_shift) = config.tms_shift {
        if config.spectrum == Some(SpectrumKind::HNmr) {
            tms_shift_peaks(&mut peaks, tms_shift);
        } else {
            tracing::warn!(tms_shift, "TMS shift is ignored, the spectrum is not a proton NMR spectrum");
        }
    }

    let spectrum = Spectrum::new(&peaks, config.shape, config.ratio, config.width)
        .context("Invalid peak or line shape")?;

    let axis = match config.axis {
        AxisChoice::Fixed(axis) => axis,
        AxisChoice::Automatic { step } => spectrum
            .axis_for(step, AUTOMATIC_AXIS_PADDING)
            .context("Failed to choose an axis covering all peaks")?,
    };

    let start = Instant::now();
    let samples = spectrum.sample(&axis);
    tracing::info!(
        points = samples.len(),
        time_ms = start.elapsed().as_secs_f64() * 1000.0,
        "sampled spectrum"
    );

    print_summary(&samples, peaks.len(), config.console_output);

    if let Some(path) = &config.output_path {
        let mut csv = CsvFile::new(path)
            .with_context(|| format!("Failed to create output file \"{}\"", path.display()))?;
        csv.write_samples(&samples)
            .with_context(|| format!("Failed to write output file \"{}\"", path.display()))?;

        if config.console_output {
            println!("Saved samples to \"{}\"", path.display());
        }
    }

    Ok(())
}

/// Prints count of points, maximum and area, one line only if the console output is reduced.
fn print_summary(samples: &Samples, peak_count: usize, console_output: bool) {
    let area = samples.area();

    if !console_output {
        println!("points: {}, area: {area}", samples.len());
        return;
    }

    println!();
    println!("Peaks:  {peak_count}");
    println!("Points: {}", samples.len());
    if let (Some(first), Some(last)) = (samples.x().first(), samples.x().last()) {
        println!("Range:  {first} to {last} (step {})", samples.step());
    }
    match samples.max_point() {
        Some((x, y)) => println!("Maximum: {y} at {x}"),
        None => println!("Maximum: -"),
    }
    println!("Area:   {area}");
}
