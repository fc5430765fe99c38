//! All line shape implementations.
//!
//! Every shape is a small value type holding its parameters; [LineShape] combines them so the
//! [sampling driver](crate::sampling) can treat all of them the same.

pub mod gaussian;
pub mod lorentzian;
pub mod voigt;

use crate::{Error, LineShapeKind};
use gaussian::Gaussian;
use lorentzian::Lorentzian;
use voigt::Voigt;

/// One of the supported line shapes, with its parameters.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum LineShape {
    Gaussian(Gaussian),
    Lorentzian(Lorentzian),
    Voigt(Voigt),
}

impl LineShape {
    /// Creates a line of the given kind. `ratio` is only used for [LineShapeKind::Voigt].
    pub fn new(
        kind: LineShapeKind,
        center: f64,
        intensity: f64,
        width: f64,
        ratio: f64,
    ) -> Result<Self, Error> {
        Ok(match kind {
            LineShapeKind::Gaussian => Self::Gaussian(Gaussian::new(center, intensity, width)?),
            LineShapeKind::Lorentzian => {
                Self::Lorentzian(Lorentzian::new(center, intensity, width)?)
            }
            LineShapeKind::Voigt => Self::Voigt(Voigt::new(center, intensity, ratio, width)?),
        })
    }

    /// The value of the line at position x.
    #[inline]
    pub fn evaluate(&self, x: f64) -> f64 {
        match self {
            LineShape::Gaussian(shape) => shape.evaluate(x),
            LineShape::Lorentzian(shape) => shape.evaluate(x),
            LineShape::Voigt(shape) => shape.evaluate(x),
        }
    }

    pub fn kind(&self) -> LineShapeKind {
        match self {
            LineShape::Gaussian(_) => LineShapeKind::Gaussian,
            LineShape::Lorentzian(_) => LineShapeKind::Lorentzian,
            LineShape::Voigt(_) => LineShapeKind::Voigt,
        }
    }

    pub fn center(&self) -> f64 {
        match self {
            LineShape::Gaussian(shape) => shape.center(),
            LineShape::Lorentzian(shape) => shape.center(),
            LineShape::Voigt(shape) => shape.center(),
        }
    }

    /// The area under the line.
    pub fn intensity(&self) -> f64 {
        match self {
            LineShape::Gaussian(shape) => shape.intensity(),
            LineShape::Lorentzian(shape) => shape.intensity(),
            LineShape::Voigt(shape) => shape.intensity(),
        }
    }

    /// Full width at half maximum, as given on creation.
    pub fn width(&self) -> f64 {
        match self {
            LineShape::Gaussian(shape) => shape.width(),
            LineShape::Lorentzian(shape) => shape.width(),
            LineShape::Voigt(shape) => shape.width(),
        }
    }
}

impl From<Gaussian> for LineShape {
    fn from(value: Gaussian) -> Self {
        LineShape::Gaussian(value)
    }
}

impl From<Lorentzian> for LineShape {
    fn from(value: Lorentzian) -> Self {
        LineShape::Lorentzian(value)
    }
}

impl From<Voigt> for LineShape {
    fn from(value: Voigt) -> Self {
        LineShape::Voigt(value)
    }
}
