//! Values of the Faddeeva approximation, compared to closed forms and published values.

use super::{assert_abs_eq, assert_rel_eq};
use crate::faddeeva::{faddeeva, faddeeva_im, faddeeva_re, Approximant};
use num_complex::Complex64;
use statrs::function::erf::erfc;

/// The approximant is built from the reversed table and the scale sqrt(1000 / sqrt(2)).
#[test]
fn approximant_table() {
    let approximant = Approximant::get();

    assert_eq!(approximant.coefficients.len(), 1000);
    // constant term first, highest degree last
    assert_eq!(approximant.coefficients[0], 1.49814637e01);
    assert_eq!(approximant.coefficients[999], 5.11748989e-16);
    assert_rel_eq!(approximant.scale, 26.591479484724942, 1e-15);

    // same instance every time
    assert!(std::ptr::eq(approximant, Approximant::get()));
}

/// w(0) = exp(0) * erfc(0) = 1
#[test]
fn value_at_origin() {
    let w = faddeeva(Complex64::new(0.0, 0.0));

    assert_abs_eq!(w.re, 1.0, 1e-9);
    assert_abs_eq!(w.im, 0.0, 1e-12);
}

/// On the positive imaginary axis, w(iy) = exp(y^2) erfc(y), a real number.
#[test]
fn imaginary_axis() {
    for y in [0.1, 0.5, 1.0, 2.0, 5.0, 10.0] {
        let expected = f64::exp(y * y) * erfc(y);

        assert_rel_eq!(faddeeva_re(0.0, y), expected, 1e-7);
        assert_abs_eq!(faddeeva_im(0.0, y), 0.0, 1e-9);
    }
}

/// On the real axis, Re(w(x)) = exp(-x^2).
#[test]
fn real_axis() {
    for x in [0.25, 0.5, 1.0, 1.5, 2.0, 3.0] {
        assert_abs_eq!(faddeeva_re(x, 0.0), f64::exp(-x * x), 1e-8);
    }
}

/// Published values, e.g. from the Faddeeva package of S. G. Johnson.
#[test]
fn reference_values() {
    let w = faddeeva(Complex64::new(1.0, 1.0));
    assert_abs_eq!(w.re, 0.304_744_205_256_912_6, 1e-8);
    assert_abs_eq!(w.im, 0.208_218_938_202_831_6, 1e-8);

    // Im(w(x)) = 2 / sqrt(pi) * dawson(x)
    let w = faddeeva(Complex64::new(3.0, 0.0));
    assert_abs_eq!(w.im, 0.201_157_317_0, 1e-8);

    let w = faddeeva(Complex64::new(0.5, 0.0));
    assert_abs_eq!(w.im, 0.478_925_172_8, 1e-8);
}

/// w(-conj(z)) = conj(w(z))
#[test]
fn reflection_symmetry() {
    for (x, y) in [(0.3, 0.7), (2.0, 0.1), (5.0, 3.0), (12.0, 0.5)] {
        let w = faddeeva(Complex64::new(x, y));
        let reflected = faddeeva(Complex64::new(-x, y));

        assert_rel_eq!(reflected.re, w.re, 1e-12);
        assert_rel_eq!(reflected.im, -w.im, 1e-12);
    }
}

/// Repeated calls give bit-identical results.
#[test]
fn reproducible() {
    let z = Complex64::new(1.234, 0.567);
    let first = faddeeva(z);

    for _ in 0..10 {
        let again = faddeeva(z);
        assert_eq!(again.re.to_bits(), first.re.to_bits());
        assert_eq!(again.im.to_bits(), first.im.to_bits());
    }
}

/// Concurrent first use builds the approximant once and gives the same values everywhere.
#[test]
fn concurrent_use() {
    let z = Complex64::new(0.75, 1.25);
    let expected = faddeeva(z);

    let results = std::thread::scope(|scope| {
        let handles = (0..8)
            .map(|_| scope.spawn(move || faddeeva(z)))
            .collect::<Vec<_>>();

        handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect::<Vec<_>>()
    });

    for w in results {
        assert_eq!(w, expected);
    }
}
