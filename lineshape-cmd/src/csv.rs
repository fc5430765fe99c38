//! Reading peak lists and saving samples as CSV.

use core::error::Error;
use csv::{ReaderBuilder, Trim, WriterBuilder};
use lineshape_lib::spectrum::Peak;
use lineshape_lib::Samples;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::fs::File;
use std::path::Path;

/// Error type for [CsvFile] and [read_peaks]
#[derive(Debug)]
pub enum CsvFileError {
    Io(std::io::Error),
    Csv(csv::Error),
}

impl Display for CsvFileError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            CsvFileError::Io(e) => write!(f, "IO error: {e}"),
            CsvFileError::Csv(e) => write!(f, "CSV error: {e}"),
        }
    }
}

impl Error for CsvFileError {}

impl From<std::io::Error> for CsvFileError {
    fn from(value: std::io::Error) -> Self {
        CsvFileError::Io(value)
    }
}

impl From<csv::Error> for CsvFileError {
    fn from(value: csv::Error) -> Self {
        CsvFileError::Csv(value)
    }
}

/// One row of a peak file: "center;intensity" with an optional "width" column.
#[derive(Debug, Deserialize)]
struct PeakRecord {
    center: f64,
    intensity: f64,
    #[serde(default)]
    width: Option<f64>,
}

impl From<PeakRecord> for Peak {
    fn from(value: PeakRecord) -> Self {
        Peak {
            center: value.center,
            intensity: value.intensity,
            width: value.width,
        }
    }
}

/// Reads all peaks of the given peak file.
pub fn read_peaks<P: AsRef<Path>>(path: P) -> Result<Vec<Peak>, CsvFileError> {
    let mut reader = ReaderBuilder::new()
        .delimiter(b';')
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_path(path)?;

    let peaks = reader
        .deserialize::<PeakRecord>()
        .map(|record| record.map(Peak::from))
        .collect::<Result<Vec<_>, _>>()?;

    tracing::debug!(peaks = peaks.len(), "read peak file");

    Ok(peaks)
}

/// This struct represents a CSV file to write the samples to.
#[derive(Debug)]
pub struct CsvFile(csv::Writer<File>);

impl CsvFile {
    /// Create a new CSV File writer writing to the specified path.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, CsvFileError> {
        let mut builder = WriterBuilder::new();

        builder.delimiter(b';').has_headers(true);

        // target specific: on windows, lines should end with CRLF, on all other platforms, the default
        // LF is enough.
        #[cfg(target_family = "windows")]
        {
            use csv::Terminator;

            builder.terminator(Terminator::CRLF);
        }

        Ok(Self(builder.from_path(path)?))
    }

    /// Append all sampled points to the CSV file.
    pub fn write_samples(&mut self, samples: &Samples) -> Result<(), CsvFileError> {
        // CSV format: x; y
        #[derive(Serialize)]
        struct CsvFormat {
            x: f64,
            y: f64,
        }

        for (x, y) in samples.iter() {
            self.0.serialize(CsvFormat { x, y })?;
        }

        self.0.flush()?;
        Ok(())
    }
}
