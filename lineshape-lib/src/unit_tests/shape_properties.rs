//! Properties every line shape has to fulfill: normalization, symmetry, peak location, width.

use super::{assert_abs_eq, assert_rel_eq, measure_fwhm};
use crate::shapes::gaussian::Gaussian;
use crate::shapes::lorentzian::Lorentzian;
use crate::shapes::voigt::{decode_voigt_width, Voigt, VoigtWidths};
use crate::shapes::LineShape;
use crate::{Axis, Error, IntoEnumIterator, LineShapeKind};
use statrs::distribution::{Continuous, Normal};
use std::f64::consts::PI;

const CENTER: f64 = 1000.0;
const INTENSITY: f64 = 5.0;
const WIDTH: f64 = 10.0;

fn all_shapes() -> Vec<LineShape> {
    LineShapeKind::iter()
        .map(|kind| LineShape::new(kind, CENTER, INTENSITY, WIDTH, 0.5).unwrap())
        .collect()
}

/// Rectangle rule over the given axis.
fn integrate(line: &LineShape, axis: &Axis) -> f64 {
    axis.points().map(|x| line.evaluate(x)).sum::<f64>() * axis.step()
}

#[test]
fn gaussian_matches_normal_distribution() {
    let gaussian = Gaussian::new(CENTER, INTENSITY, WIDTH).unwrap();
    let normal = Normal::new(CENTER, gaussian.sigma()).unwrap();

    assert_rel_eq!(gaussian.sigma(), WIDTH / 2.354_820_045_030_949, 1e-12);
    for x in [980.0, 995.5, 1000.0, 1003.25, 1017.0] {
        assert_rel_eq!(gaussian.evaluate(x), INTENSITY * normal.pdf(x), 1e-12);
    }
}

#[test]
fn gaussian_normalization() {
    let line = Gaussian::new(CENTER, INTENSITY, WIDTH).unwrap().into();
    let axis = Axis::new(CENTER - 1000.0 * WIDTH, CENTER + 1000.0 * WIDTH, 0.5).unwrap();

    assert_rel_eq!(integrate(&line, &axis), INTENSITY, 1e-6);
}

#[test]
fn lorentzian_normalization() {
    let line = Lorentzian::new(CENTER, INTENSITY, WIDTH).unwrap().into();
    let axis = Axis::new(CENTER - 1000.0 * WIDTH, CENTER + 1000.0 * WIDTH, 0.5).unwrap();

    // the tails of a lorentzian are long: the window holds ~99.97% of the area
    assert_rel_eq!(integrate(&line, &axis), INTENSITY, 1e-2);
}

#[test]
fn voigt_normalization() {
    let axis = Axis::new(CENTER - 200.0 * WIDTH, CENTER + 200.0 * WIDTH, 1.0).unwrap();

    for ratio in [0.2, 0.5, 0.8] {
        let line = Voigt::new(CENTER, INTENSITY, ratio, WIDTH).unwrap().into();
        assert_rel_eq!(integrate(&line, &axis), INTENSITY, 1e-2);
    }
}

#[test]
fn negative_intensity_flips_the_line() {
    for kind in LineShapeKind::iter() {
        let up = LineShape::new(kind, CENTER, INTENSITY, WIDTH, 0.5).unwrap();
        let down = LineShape::new(kind, CENTER, -INTENSITY, WIDTH, 0.5).unwrap();

        for x in [990.0, 1000.0, 1004.0] {
            assert_eq!(down.evaluate(x), -up.evaluate(x));
        }
    }
}

#[test]
fn symmetric_around_center() {
    for line in all_shapes() {
        for d in [0.5, 1.0, 3.0, 7.25, 20.0, 150.0] {
            assert_rel_eq!(line.evaluate(CENTER + d), line.evaluate(CENTER - d), 1e-9);
        }
    }
}

#[test]
fn maximum_at_center() {
    let axis = Axis::new(CENTER - 50.0, CENTER + 50.0, 0.25).unwrap();

    for line in all_shapes() {
        let peak = line.evaluate(CENTER);
        for x in axis.points() {
            assert!(
                line.evaluate(x) <= peak,
                "{} at {x} is above its value at the center",
                line.kind()
            );
        }
    }
}

#[test]
fn peak_heights() {
    // height = intensity / (sigma sqrt(2 pi))
    let gaussian = Gaussian::new(CENTER, INTENSITY, WIDTH).unwrap();
    assert_rel_eq!(gaussian.evaluate(CENTER), 0.469_718_639_349_825_7, 1e-12);

    // height = intensity / (pi gamma)
    let lorentzian = Lorentzian::new(CENTER, INTENSITY, WIDTH).unwrap();
    assert_rel_eq!(lorentzian.evaluate(CENTER), INTENSITY / (PI * WIDTH / 2.0), 1e-12);

    let voigt = Voigt::new(CENTER, INTENSITY, 0.5, WIDTH).unwrap();
    assert_rel_eq!(voigt.evaluate(CENTER), 0.363_338_382_273_394_5, 1e-6);
}

#[test]
fn full_width_at_half_maximum() {
    for line in all_shapes() {
        let tolerance = match line.kind() {
            LineShapeKind::Voigt => 1.5e-2,
            _ => 1e-9,
        };

        assert_rel_eq!(measure_fwhm(&line), WIDTH, tolerance);
    }
}

/// The decoded Voigt widths still give the requested FWHM, within the decoder's accuracy.
#[test]
fn voigt_width_over_ratios() {
    for ratio in [0.05, 0.1, 0.3, 0.5, 0.7, 0.9, 0.95] {
        let line = Voigt::new(0.0, 1.0, ratio, WIDTH).unwrap().into();
        assert_rel_eq!(measure_fwhm(&line), WIDTH, 1.5e-2);
    }
}

#[test]
fn voigt_decoder_ends() {
    // nearly gaussian: no lorentzian width left
    let VoigtWidths { gamma, sigma } = decode_voigt_width(0.001, WIDTH).unwrap();
    assert_abs_eq!(gamma, 0.0, 1e-2);
    assert_rel_eq!(sigma, WIDTH / 2.354_820_045_030_949, 1e-3);

    // nearly lorentzian: no gaussian width left
    let VoigtWidths { gamma, sigma } = decode_voigt_width(0.999, WIDTH).unwrap();
    assert_rel_eq!(gamma, WIDTH / 2.0, 1e-5);
    assert_abs_eq!(sigma, 0.0, 1e-2);

    // the midpoint
    let VoigtWidths { gamma, sigma } = decode_voigt_width(0.5, WIDTH).unwrap();
    assert_rel_eq!(gamma, 3.090_169_943_749_474_5, 1e-12);
    assert_rel_eq!(sigma, 2.624_548_699_821_23, 1e-12);
}

/// Ratios at the very ends of (0, 1) still decode into usable widths and finite lines.
#[test]
fn voigt_decoder_extreme_ratios() {
    let lorentzian_gamma = WIDTH / 2.0;
    let gaussian_sigma = WIDTH / 2.354_820_045_030_949;

    for ratio in [1e-300, 1e-170, 1e-17] {
        let VoigtWidths { gamma, sigma } = decode_voigt_width(ratio, WIDTH).unwrap();
        assert!(gamma >= 0.0 && gamma < 1e-15, "gamma {gamma} for ratio {ratio}");
        assert_rel_eq!(sigma, gaussian_sigma, 1e-12);
    }

    for ratio in [0.99999999, 1.0 - 1e-12, 1.0 - 2.0 * f64::EPSILON, 1.0 - f64::EPSILON] {
        let VoigtWidths { gamma, sigma } = decode_voigt_width(ratio, WIDTH).unwrap();
        assert_rel_eq!(gamma, lorentzian_gamma, 1e-6);
        assert!(sigma > 0.0 && sigma < 1e-6, "sigma {sigma} for ratio {ratio}");
    }

    // the lines are finite everywhere, and close to their limits
    let gaussian = Gaussian::new(CENTER, INTENSITY, WIDTH).unwrap();
    let lorentzian = Lorentzian::new(CENTER, INTENSITY, WIDTH).unwrap();
    let near_gaussian = Voigt::new(CENTER, INTENSITY, 1e-170, WIDTH).unwrap();
    let near_lorentzian = Voigt::new(CENTER, INTENSITY, 0.99999999, WIDTH).unwrap();
    let at_lorentzian = Voigt::new(CENTER, INTENSITY, 1.0 - f64::EPSILON, WIDTH).unwrap();

    for x in [CENTER - 20.0, CENTER - 3.0, CENTER, CENTER + 0.5, CENTER + 7.0] {
        assert_abs_eq!(near_gaussian.evaluate(x), gaussian.evaluate(x), 1e-8);
        assert_abs_eq!(
            near_lorentzian.evaluate(x),
            lorentzian.evaluate(x),
            1e-6 * lorentzian.evaluate(CENTER)
        );
        assert!(at_lorentzian.evaluate(x).is_finite());
        assert_rel_eq!(at_lorentzian.evaluate(x), lorentzian.evaluate(x), 1e-6);
    }
}

/// A ratio near 0 gives a gaussian, a ratio near 1 a lorentzian.
#[test]
fn voigt_limits() {
    let gaussian = Gaussian::new(CENTER, INTENSITY, WIDTH).unwrap();
    let lorentzian = Lorentzian::new(CENTER, INTENSITY, WIDTH).unwrap();
    let near_gaussian = Voigt::new(CENTER, INTENSITY, 0.001, WIDTH).unwrap();
    let near_lorentzian = Voigt::new(CENTER, INTENSITY, 0.999, WIDTH).unwrap();

    let axis = Axis::new(CENTER - 10.0, CENTER + 10.0, 0.5).unwrap();
    let gaussian_height = gaussian.evaluate(CENTER);
    let lorentzian_height = lorentzian.evaluate(CENTER);

    for x in axis.points() {
        assert_abs_eq!(
            near_gaussian.evaluate(x),
            gaussian.evaluate(x),
            1.2e-2 * gaussian_height
        );
        assert_abs_eq!(
            near_lorentzian.evaluate(x),
            lorentzian.evaluate(x),
            1.2e-2 * lorentzian_height
        );
    }
}

#[test]
fn invalid_widths() {
    for width in [0.0, -1.0, f64::NAN, f64::INFINITY] {
        for kind in LineShapeKind::iter() {
            let result = LineShape::new(kind, CENTER, INTENSITY, width, 0.5);
            assert!(
                matches!(result, Err(Error::InvalidParameter(_))),
                "{kind} accepted width {width}"
            );
        }
    }
}

#[test]
fn invalid_ratios() {
    for ratio in [0.0, 1.0, -0.5, 1.5, f64::NAN] {
        assert!(matches!(
            Voigt::new(CENTER, INTENSITY, ratio, WIDTH),
            Err(Error::InvalidParameter(_))
        ));
        assert!(decode_voigt_width(ratio, WIDTH).is_err());
    }

    // the ratio is ignored by the other shapes
    assert!(LineShape::new(LineShapeKind::Gaussian, CENTER, INTENSITY, WIDTH, 0.0).is_ok());
    assert!(LineShape::new(LineShapeKind::Lorentzian, CENTER, INTENSITY, WIDTH, 1.0).is_ok());
}

#[test]
fn invalid_center_and_intensity() {
    assert!(Gaussian::new(f64::NAN, INTENSITY, WIDTH).is_err());
    assert!(Lorentzian::new(CENTER, f64::INFINITY, WIDTH).is_err());
    assert!(Voigt::new(f64::NEG_INFINITY, INTENSITY, 0.5, WIDTH).is_err());
}

#[test]
fn kind_names() {
    assert_eq!(LineShapeKind::Voigt.to_string(), "voigt");
    assert_eq!("Gaussian".parse::<LineShapeKind>(), Ok(LineShapeKind::Gaussian));
    assert_eq!("lorentzian".parse::<LineShapeKind>(), Ok(LineShapeKind::Lorentzian));
    assert!("cauchy".parse::<LineShapeKind>().is_err());

    for line in all_shapes() {
        assert_eq!(line.center(), CENTER);
        assert_eq!(line.intensity(), INTENSITY);
        assert_rel_eq!(line.width(), WIDTH, 1e-15);
    }
}
