//! Internal functions that are used by the shapes - can be changed anytime

use crate::Error;

/// 2 * sqrt(2 * ln(2)): the ratio of the full width at half maximum to sigma of a gaussian.
pub(crate) const FWHM_PER_SIGMA: f64 = 2.354_820_045_030_949_3;

/// sqrt(2 * pi)
pub(crate) const SQRT_2PI: f64 = 2.506_628_274_631_000_7;

/// Checks that a computed value is a usable number.
pub(crate) fn check_f64(value: f64) -> Result<(), Error> {
    if value.is_nan() {
        Err(Error::NaN)
    } else if value.is_infinite() {
        Err(Error::Infinite)
    } else {
        Ok(())
    }
}

/// Checks that a caller supplied parameter is finite. `name` is used in the error message.
pub(crate) fn check_finite(name: &str, value: f64) -> Result<f64, Error> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(Error::InvalidParameter(format!(
            "{name} must be a finite number. Is: {value}"
        )))
    }
}

/// Checks that a full width at half maximum is finite and strictly positive.
pub(crate) fn check_width(width: f64) -> Result<f64, Error> {
    check_finite("width", width)?;

    if width <= 0.0 {
        return Err(Error::InvalidParameter(format!(
            "width (FWHM) must be > 0. Is: {width}"
        )));
    }

    Ok(width)
}
