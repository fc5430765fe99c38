//! The sampling driver: evaluates a line shape at every point of an [Axis].
//!
//! The evaluation is done in parallel on the library's thread pool (see
//! [set_max_threads](crate::set_max_threads)). The output keeps the order of the axis:
//! `y[i]` is the line evaluated at `x[i]`.

use crate::axis::Axis;
use crate::shapes::gaussian::Gaussian;
use crate::shapes::lorentzian::Lorentzian;
use crate::shapes::voigt::Voigt;
use crate::shapes::LineShape;
use crate::Error;
use lineshape_lib_derive::use_thread_pool;
use rayon::prelude::*;

/// Sampled line: x-values and y-values of equal length, aligned by position.
#[derive(Clone, Debug, PartialEq)]
pub struct Samples {
    x: Vec<f64>,
    y: Vec<f64>,
    step: f64,
}

impl Samples {
    /// Pairs the given values. Both lists must have the same length.
    pub(crate) fn from_parts(x: Vec<f64>, y: Vec<f64>, step: f64) -> Self {
        debug_assert_eq!(x.len(), y.len());
        Self { x, y, step }
    }

    pub fn x(&self) -> &[f64] {
        &self.x
    }

    pub fn y(&self) -> &[f64] {
        &self.y
    }

    /// The distance between two neighbouring x-values.
    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Iterates over `(x, y)` pairs.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (f64, f64)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }

    /// The point with the largest y-value (the first one, if there are several).
    /// `None` if there are no samples.
    pub fn max_point(&self) -> Option<(f64, f64)> {
        self.iter()
            .reduce(|max, point| if point.1 > max.1 { point } else { max })
    }

    /// The area under the samples, with the rectangle rule: `sum(y) * |step|`.
    ///
    /// For a window that covers (nearly) the whole line, this is close to its intensity. Summed
    /// in axis order on the calling thread, so the result is the same on every call.
    pub fn area(&self) -> f64 {
        self.y.iter().sum::<f64>() * self.step.abs()
    }

    /// Splits into the x-values and the y-values.
    pub fn into_parts(self) -> (Vec<f64>, Vec<f64>) {
        (self.x, self.y)
    }
}

/// Samples the given line shape on every point of the axis.
///
/// An empty axis gives empty samples.
#[use_thread_pool]
pub fn sample(shape: &LineShape, axis: &Axis) -> Samples {
    let x = axis.points().collect::<Vec<_>>();
    let y = x
        .par_iter()
        .map(|&x| shape.evaluate(x))
        .collect::<Vec<_>>();

    tracing::trace!(kind = %shape.kind(), points = x.len(), "sampled line");

    Samples::from_parts(x, y, axis.step())
}

/// Calculates a gaussian line with the given center, area (`intensity`) and full width at half
/// maximum (`width`), sampled from `start` (inclusive) to `stop` (exclusive) every `step`.
///
/// Errors: see [Gaussian::new] and [Axis::new].
pub fn gauss_line(
    center: f64,
    intensity: f64,
    width: f64,
    start: f64,
    stop: f64,
    step: f64,
) -> Result<Samples, Error> {
    let shape = Gaussian::new(center, intensity, width)?.into();
    let axis = Axis::new(start, stop, step)?;

    Ok(sample(&shape, &axis))
}

/// Calculates a lorentzian line with the given center, area (`intensity`) and full width at half
/// maximum (`width`), sampled from `start` (inclusive) to `stop` (exclusive) every `step`.
///
/// Errors: see [Lorentzian::new] and [Axis::new].
pub fn lorentz_line(
    center: f64,
    intensity: f64,
    width: f64,
    start: f64,
    stop: f64,
    step: f64,
) -> Result<Samples, Error> {
    let shape = Lorentzian::new(center, intensity, width)?.into();
    let axis = Axis::new(start, stop, step)?;

    Ok(sample(&shape, &axis))
}

/// Calculates a Voigt line with the given center, area (`intensity`), full width at half
/// maximum (`width`) and lorentzian fraction (`ratio`), sampled from `start` (inclusive) to
/// `stop` (exclusive) every `step`.
///
/// Errors: see [Voigt::new] and [Axis::new].
pub fn voigt_line(
    center: f64,
    intensity: f64,
    width: f64,
    ratio: f64,
    start: f64,
    stop: f64,
    step: f64,
) -> Result<Samples, Error> {
    let shape = Voigt::new(center, intensity, ratio, width)?.into();
    let axis = Axis::new(start, stop, step)?;

    Ok(sample(&shape, &axis))
}
