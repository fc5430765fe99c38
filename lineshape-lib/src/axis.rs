//! The sampled x-axis.
//!
//! An axis is given by `start`, `stop` and `step` and contains the points
//! `start, start + step, start + 2 * step, ...` that are strictly before `stop` (strictly less for
//! a positive step, strictly greater for a negative step). The i-th point is always computed as
//! `start + i * step`, so rounding errors do not accumulate along the axis.
//!
//! If the direction of `step` does not lead from `start` towards `stop`, the axis is empty.

use crate::{Error, DEFAULT_START, DEFAULT_STEP, DEFAULT_STOP};
use rayon::prelude::*;

/// Upper bound of points per axis. Sampling stores x and y, 16 bytes per point: 2 GiB at most.
pub const MAX_POINTS: usize = 1 << 27;

/// A validated axis specification.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Axis {
    start: f64,
    stop: f64,
    step: f64,
    len: usize,
}

impl Axis {
    /// Creates a new axis.
    ///
    /// Returns [Error::InvalidAxis] if `step` is zero, any value is not finite, or the axis has
    /// more than [MAX_POINTS] points.
    pub fn new(start: f64, stop: f64, step: f64) -> Result<Self, Error> {
        if !(start.is_finite() && stop.is_finite() && step.is_finite()) {
            return Err(Error::InvalidAxis(format!(
                "start, stop and step must be finite. Are: {start}, {stop}, {step}"
            )));
        }

        if step == 0.0 {
            return Err(Error::InvalidAxis("step must not be 0".to_owned()));
        }

        let len = count_points(start, stop, step)?;

        Ok(Self {
            start,
            stop,
            step,
            len,
        })
    }

    pub fn start(&self) -> f64 {
        self.start
    }

    /// The exclusive end of the axis.
    pub fn stop(&self) -> f64 {
        self.stop
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    /// The count of points on this axis.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The point with the given index. Indices past [Self::len] are extrapolated.
    #[inline]
    pub fn point(&self, idx: usize) -> f64 {
        self.start + (idx as f64) * self.step
    }

    /// All points, in order.
    pub fn points(&self) -> impl ExactSizeIterator<Item = f64> + DoubleEndedIterator {
        let axis = *self;
        (0..self.len).map(move |idx| axis.point(idx))
    }

    /// All points, as a parallel iterator.
    pub fn par_points(&self) -> impl IndexedParallelIterator<Item = f64> {
        let axis = *self;
        (0..self.len).into_par_iter().map(move |idx| axis.point(idx))
    }
}

impl Default for Axis {
    fn default() -> Self {
        Self {
            start: DEFAULT_START,
            stop: DEFAULT_STOP,
            step: DEFAULT_STEP,
            len: (DEFAULT_STOP - DEFAULT_START) as usize,
        }
    }
}

/// `ceil((stop - start) / step)`, corrected so that the last point is strictly before stop.
fn count_points(start: f64, stop: f64, step: f64) -> Result<usize, Error> {
    let count = f64::ceil((stop - start) / step);

    // wrong direction or empty range
    if count.is_nan() || count <= 0.0 {
        return Ok(0);
    }

    if count > MAX_POINTS as f64 {
        return Err(Error::InvalidAxis(format!(
            "too many points between {start} and {stop} with step {step}"
        )));
    }

    let before_stop = |idx: usize| {
        let x = start + (idx as f64) * step;
        if step > 0.0 {
            x < stop
        } else {
            x > stop
        }
    };

    // the division may round up across an integer
    let mut count = count as usize;
    while count > 0 && !before_stop(count - 1) {
        count -= 1;
    }

    Ok(count)
}
