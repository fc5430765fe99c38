//! Axis enumeration and the sampling driver.

use super::{assert_abs_eq, assert_rel_eq};
use crate::shapes::lorentzian::Lorentzian;
use crate::axis::MAX_POINTS;
use crate::{
    gauss_line, lorentz_line, sample, set_max_threads, voigt_line, Axis, Error, LineShape,
    LineShapeKind,
};
use std::f64::consts::FRAC_1_PI;

fn points(start: f64, stop: f64, step: f64) -> Vec<f64> {
    Axis::new(start, stop, step).unwrap().points().collect()
}

#[test]
fn axis_cardinality() {
    assert_eq!(
        points(0.0, 10.0, 1.0),
        [0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]
    );
    assert_eq!(points(0.0, 10.0, 3.0), [0.0, 3.0, 6.0, 9.0]);
    assert!(points(5.0, 5.0, 1.0).is_empty());
}

#[test]
fn axis_with_negative_step() {
    assert_eq!(points(10.0, 0.0, -2.5), [10.0, 7.5, 5.0, 2.5]);
}

#[test]
fn axis_in_wrong_direction_is_empty() {
    let axis = Axis::new(10.0, 0.0, 1.0).unwrap();
    assert!(axis.is_empty());
    assert_eq!(axis.len(), 0);

    assert!(Axis::new(0.0, 10.0, -1.0).unwrap().is_empty());
}

/// The points are start + i * step, and all of them are strictly before stop.
#[test]
fn axis_with_fractional_step() {
    let axis = Axis::new(0.0, 1.0, 0.1).unwrap();
    assert_eq!(axis.len(), 10);
    assert_eq!(axis.point(7), 7.0 * 0.1);

    // (1.3 - 1.0) / 0.1 rounds up to 4 points, but the 4th would be 1.3000000000000003
    let axis = Axis::new(1.0, 1.3, 0.1).unwrap();
    assert_eq!(axis.len(), 3);
    assert!(axis.points().all(|x| x < 1.3));
}

#[test]
fn axis_len_matches_points() {
    for (start, stop, step) in [(0.0, 4000.0, 1.0), (-3.0, 7.5, 0.7), (2.0, -2.0, -0.3)] {
        let axis = Axis::new(start, stop, step).unwrap();
        assert_eq!(axis.points().len(), axis.len());
        assert_eq!(axis.points().count(), axis.len());
    }
}

#[test]
fn invalid_axis() {
    assert!(matches!(Axis::new(0.0, 10.0, 0.0), Err(Error::InvalidAxis(_))));
    assert!(matches!(Axis::new(0.0, 10.0, -0.0), Err(Error::InvalidAxis(_))));
    assert!(matches!(Axis::new(f64::NAN, 10.0, 1.0), Err(Error::InvalidAxis(_))));
    assert!(matches!(Axis::new(0.0, f64::INFINITY, 1.0), Err(Error::InvalidAxis(_))));
    assert!(matches!(Axis::new(0.0, 1e300, 1e-300), Err(Error::InvalidAxis(_))));
}

/// The point count is bounded by what can be held in memory when sampled.
#[test]
fn axis_point_limit() {
    assert!(matches!(Axis::new(0.0, 1e17, 1.0), Err(Error::InvalidAxis(_))));
    assert!(matches!(
        Axis::new(0.0, (MAX_POINTS + 1) as f64, 1.0),
        Err(Error::InvalidAxis(_))
    ));

    let axis = Axis::new(0.0, MAX_POINTS as f64, 1.0).unwrap();
    assert_eq!(axis.len(), MAX_POINTS);
    assert_eq!(axis.points().next_back(), Some((MAX_POINTS - 1) as f64));
}

#[test]
fn default_axis() {
    let axis = Axis::default();

    assert_eq!(axis, Axis::new(0.0, 4000.0, 1.0).unwrap());
    assert_eq!(axis.len(), 4000);
}

#[test]
fn lorentz_line_example() {
    let samples = lorentz_line(1000.0, 5.0, 10.0, 990.0, 1010.0, 1.0).unwrap();

    assert_eq!(samples.len(), 20);
    assert_eq!(samples.x().first(), Some(&990.0));
    assert_eq!(samples.x().last(), Some(&1009.0));

    let (x_max, y_max) = samples.max_point().unwrap();
    assert_eq!(x_max, 1000.0);
    // (5 / pi) / 5
    assert_rel_eq!(y_max, FRAC_1_PI, 1e-12);
    assert_abs_eq!(y_max, 0.318, 1e-3);

    // rising before the center, falling after it
    let y = samples.y();
    assert!(y[..=10].windows(2).all(|pair| pair[0] < pair[1]));
    assert!(y[10..].windows(2).all(|pair| pair[0] > pair[1]));
}

/// y[i] is the shape evaluated at x[i], for all shapes.
#[test]
fn samples_are_aligned() {
    let axis = Axis::new(950.0, 1050.0, 0.75).unwrap();

    for kind in [
        LineShapeKind::Gaussian,
        LineShapeKind::Lorentzian,
        LineShapeKind::Voigt,
    ] {
        let shape = LineShape::new(kind, 1000.0, 2.0, 8.0, 0.4).unwrap();
        let samples = sample(&shape, &axis);

        assert_eq!(samples.len(), axis.len());
        assert_eq!(samples.x().len(), samples.y().len());
        for (idx, (x, y)) in samples.iter().enumerate() {
            assert_eq!(x, axis.point(idx));
            assert_eq!(y, shape.evaluate(x));
        }
    }
}

#[test]
fn empty_axis_gives_empty_samples() {
    let samples = gauss_line(0.0, 1.0, 1.0, 5.0, 5.0, 1.0).unwrap();

    assert!(samples.is_empty());
    assert_eq!(samples.max_point(), None);
    assert_eq!(samples.area(), 0.0);
}

#[test]
fn line_functions_validate() {
    assert!(matches!(
        gauss_line(0.0, 1.0, 0.0, 0.0, 10.0, 1.0),
        Err(Error::InvalidParameter(_))
    ));
    assert!(matches!(
        lorentz_line(0.0, 1.0, 1.0, 0.0, 10.0, 0.0),
        Err(Error::InvalidAxis(_))
    ));
    assert!(matches!(
        voigt_line(0.0, 1.0, 1.0, 1.0, 0.0, 10.0, 1.0),
        Err(Error::InvalidParameter(_))
    ));
}

#[test]
fn area_of_samples() {
    let samples = gauss_line(100.0, 3.0, 4.0, 50.0, 150.0, 0.25).unwrap();
    assert_rel_eq!(samples.area(), 3.0, 1e-9);
    assert_eq!(samples.step(), 0.25);

    // a reversed axis has the same area
    let samples = voigt_line(100.0, 3.0, 4.0, 0.3, 300.0, -100.0, -0.5).unwrap();
    assert_rel_eq!(samples.area(), 3.0, 2e-2);
}

/// The area is the plain sum in axis order, identical on every call.
#[test]
fn area_is_reproducible() {
    let samples = voigt_line(0.0, 1.0, 3.0, 0.6, -500.0, 500.0, 0.01).unwrap();
    let in_order = samples.y().iter().fold(0.0, |sum, y| sum + y) * 0.01;

    for _ in 0..5 {
        assert_eq!(samples.area().to_bits(), in_order.to_bits());
    }
}

#[test]
fn into_parts() {
    let shape = Lorentzian::new(0.0, 1.0, 2.0).unwrap().into();
    let axis = Axis::new(-2.0, 2.0, 1.0).unwrap();

    let (x, y) = sample(&shape, &axis).into_parts();
    assert_eq!(x, [-2.0, -1.0, 0.0, 1.0]);
    assert_eq!(y[1], y[3]);
    assert_rel_eq!(y[2], FRAC_1_PI, 1e-12);
}

#[test]
fn thread_count_can_not_change_after_use() {
    assert!(matches!(set_max_threads(0), Err(Error::ThreadPool(_))));

    // force the pool
    let _ = lorentz_line(0.0, 1.0, 1.0, -1.0, 1.0, 0.5).unwrap();
    assert!(matches!(set_max_threads(2), Err(Error::ThreadPool(_))));
}
