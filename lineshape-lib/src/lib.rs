#![doc = include_str!("../README.md")]

use lineshape_lib_derive::register_thread_pool;
use rayon::{ThreadPool, ThreadPoolBuilder};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{LazyLock, OnceLock};
use strum::{Display, EnumIter, EnumString};
use thiserror::Error;

// internal usage only
pub(crate) mod internals;

// public exports
pub mod axis;
pub mod faddeeva;
pub mod sampling;
pub mod shapes;
pub mod spectrum;

pub use axis::Axis;
pub use sampling::{gauss_line, lorentz_line, sample, voigt_line, Samples};
pub use shapes::LineShape;
pub use strum::IntoEnumIterator;

/// Default full width at half maximum of a line, if the caller does not choose one.
pub const DEFAULT_WIDTH: f64 = 10.0;
/// Default Lorentzian fraction of a Voigt line.
pub const DEFAULT_RATIO: f64 = 0.5;
/// Default first point of a sampled axis.
pub const DEFAULT_START: f64 = 0.0;
/// Default (exclusive) end of a sampled axis.
pub const DEFAULT_STOP: f64 = 4000.0;
/// Default distance between two sampled points.
pub const DEFAULT_STEP: f64 = 1.0;

/// List of all line shapes, used e.g. for selecting a shape by name.
#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq, EnumIter, EnumString, Display)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[repr(u8)]
pub enum LineShapeKind {
    /// See [shapes::gaussian].
    Gaussian = 0,
    /// See [shapes::lorentzian].
    Lorentzian = 1,
    /// See [shapes::voigt].
    Voigt = 2,
}

/// The error type for all line shape operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A peak parameter is out of its domain. The String names the parameter and its value.
    #[error("Invalid Parameter: {0}")]
    InvalidParameter(String),
    /// The axis can not be enumerated.
    #[error("Invalid axis: {0}")]
    InvalidAxis(String),
    #[error("Result is not a number.")]
    NaN,
    #[error("Result is infinite.")]
    Infinite,
    #[error("Thread pool: {0}")]
    ThreadPool(String),
}

// set by set_max_threads, read once when the pool is built
static MAX_THREADS: OnceLock<usize> = OnceLock::new();
// true as soon as SAMPLING_POOL was forced
static POOL_BUILT: AtomicBool = AtomicBool::new(false);

fn build_sampling_pool() -> ThreadPool {
    POOL_BUILT.store(true, Ordering::SeqCst);
    let threads = MAX_THREADS.get().copied().unwrap_or_else(num_cpus::get);
    tracing::debug!(threads, "building the sampling thread pool");

    ThreadPoolBuilder::new()
        .num_threads(threads)
        .thread_name(|idx| format!("lineshape-sampling-{idx}"))
        .build()
        // the builder only fails if the OS refuses to spawn threads - nothing to recover from
        .unwrap_or_else(|e| panic!("Unable to build the sampling thread pool: {e}"))
}

register_thread_pool! {
    static SAMPLING_POOL = LazyLock::new(build_sampling_pool);
}

/// Sets the maximum of threads used when sampling line shapes. This function can only be called
/// ONCE and only BEFORE anything was sampled. If not used, one thread per logical CPU is used.
///
/// If called multiple times, after the first sampling, or with 0, an error is returned.
///
/// The library uses its own [rayon](https://docs.rs/rayon/latest/rayon/index.html) pool, so
/// this does not interfere with the global rayon pool of the calling code.
pub fn set_max_threads(max_threads: usize) -> Result<(), Error> {
    if max_threads == 0 {
        return Err(Error::ThreadPool("at least one thread is needed".to_owned()));
    }

    if POOL_BUILT.load(Ordering::SeqCst) {
        return Err(Error::ThreadPool(
            "the thread pool is already in use".to_owned(),
        ));
    }

    MAX_THREADS.set(max_threads).map_err(|already| {
        Error::ThreadPool(format!("the thread count was already set to {already}"))
    })?;

    tracing::debug!(max_threads, "configured sampling thread count");
    Ok(())
}
