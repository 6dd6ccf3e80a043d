use alloc::vec;

use crate::excitation::period_samples;
use crate::math::{round_ties_even, sin, sinh};
use crate::poly_real::{TransferFunction, add, add_fractions, multiply, trim};
use crate::{BasicFilter, Error, Resonator};

#[test]
fn round_ties_even_works() {
    assert_eq!(round_ties_even(2.5), 2.0);
    assert_eq!(round_ties_even(3.5), 4.0);
    assert_eq!(round_ties_even(4.5), 4.0);
    assert_eq!(round_ties_even(4.4999), 4.0);
    assert_eq!(round_ties_even(5.0), 5.0);
}

#[test]
fn sin_is_sine() {
    assert_eq!(sin(0.0), 0.0);
    assert!((sin(core::f64::consts::FRAC_PI_2) - 1.0).abs() < 1E-15);
}

#[test]
fn period_samples_rounds_ties_to_even() {
    assert_eq!(period_samples(2.0, 10.0), Ok(5));
    assert_eq!(period_samples(4.0, 10.0), Ok(2));
    assert_eq!(period_samples(2.0, 7.0), Ok(4));
    assert_eq!(period_samples(2.0, 9.0), Ok(4));
    assert_eq!(period_samples(247.0, 44100.0), Ok(179));
}

#[test]
fn period_samples_rejects_pitch_at_or_above_nyquist() {
    assert_eq!(
        period_samples(5.0, 10.0),
        Err(Error::InvalidPitch {
            f0: 5.0,
            nyquist: 5.0
        })
    );
    assert!(matches!(
        period_samples(0.0, 10.0),
        Err(Error::InvalidPitch { .. })
    ));
    assert!(matches!(
        period_samples(f64::NAN, 10.0),
        Err(Error::InvalidPitch { .. })
    ));
    assert!(matches!(
        period_samples(2.0, 0.0),
        Err(Error::InvalidSampleRate(_))
    ));
    assert!(matches!(
        period_samples(2.0, f64::INFINITY),
        Err(Error::InvalidSampleRate(_))
    ));
}

#[test]
fn multiply_works() {
    assert_eq!(multiply(&[1.0, 1.0], &[1.0, -1.0], None), Ok(vec![1.0, 0.0, -1.0]));
    assert_eq!(multiply(&[2.0], &[1.0, 3.0], None), Ok(vec![2.0, 6.0]));
    assert_eq!(multiply(&[0.0], &[1.0, 3.0], None), Ok(vec![0.0]));
    assert_eq!(multiply(&[], &[1.0], None), Err(Error::EmptyPolynomial));
}

#[test]
fn add_pads_the_shorter_polynomial() {
    assert_eq!(add(&[1.0], &[1.0, 2.0, 3.0], None), Ok(vec![2.0, 2.0, 3.0]));
    assert_eq!(add(&[1.0, 2.0], &[1.0, -2.0], None), Ok(vec![2.0]));
    assert_eq!(add(&[1.0], &[], None), Err(Error::EmptyPolynomial));
}

#[test]
fn trim_drops_top_order_zeros() {
    assert_eq!(trim(&[1.0, 2.0, 0.0, 0.0], None), Ok(vec![1.0, 2.0]));
    assert_eq!(trim(&[1.0, 1E-12], Some(1E-10)), Ok(vec![1.0]));
    assert_eq!(trim(&[0.0, 0.0], None), Ok(vec![0.0]));
    assert_eq!(trim(&[], None), Err(Error::EmptyPolynomial));
}

#[test]
fn add_fractions_works() {
    let half = TransferFunction {
        numerator: vec![1.0],
        denominator: vec![2.0],
    };
    let sum = add_fractions(&half, &half, None).unwrap();
    assert_eq!(sum.numerator, vec![2.0]);
    assert_eq!(sum.denominator, vec![2.0]);

    let third = TransferFunction {
        numerator: vec![1.0],
        denominator: vec![3.0],
    };
    let sum = add_fractions(&half, &third, None).unwrap();
    assert_eq!(sum.numerator, vec![5.0]);
    assert_eq!(sum.denominator, vec![6.0]);

    let sum = add_fractions(&TransferFunction::zero(), &third, None).unwrap();
    assert_eq!(sum, third);
}

#[test]
fn resonator_outputs_zero_for_the_first_two_samples() {
    let mut resonator = Resonator::new(8000.0).unwrap();
    resonator.set(500.0, 0.5).unwrap();
    assert_eq!(resonator.step(1.0), 0.0);
    assert_eq!(resonator.step(1.0), 0.0);
    assert_ne!(resonator.step(0.0), 0.0);
    resonator.reset();
    assert_eq!(resonator.step(1.0), 0.0);
    assert_eq!(resonator.step(0.0), 0.0);
}

#[test]
fn resonator_set_rejects_degenerate_frequencies() {
    let mut resonator = Resonator::new(8000.0).unwrap();
    assert_eq!(
        resonator.set(0.0, 0.5),
        Err(Error::InvalidFormantFrequency {
            freq: 0.0,
            nyquist: 4000.0
        })
    );
    assert_eq!(
        resonator.set(4000.0, 0.5),
        Err(Error::InvalidFormantFrequency {
            freq: 4000.0,
            nyquist: 4000.0
        })
    );
    assert_eq!(resonator.set(500.0, 0.0), Err(Error::InvalidBandwidth(0.0)));
    assert!(matches!(
        resonator.set(500.0, f64::NAN),
        Err(Error::InvalidBandwidth(_))
    ));
    assert!(matches!(
        Resonator::new(-1.0),
        Err(Error::InvalidSampleRate(_))
    ));
}

#[test]
fn resonator_transfer_function_coefficients() {
    let mut resonator = Resonator::new(8000.0).unwrap();
    resonator.set(2000.0, 0.5).unwrap();
    let trans = resonator.get_transfer_function_coefficients();
    // w = PI / 2, so 2cos(w) is (almost) zero
    assert_eq!(trans.denominator.len(), 3);
    assert!(trans.denominator[1].abs() < 1E-15);
    assert_eq!(trans.denominator[2], 1.0);
    let alpha = sinh(core::f64::consts::LN_2 / 2.0 * 0.5 * core::f64::consts::FRAC_PI_2);
    assert!((trans.numerator[2] - alpha * alpha).abs() < 1E-15);
}

#[cfg(feature = "wav")]
#[test]
fn adjust_signal_gain_works() {
    use crate::wav::{adjust_signal_gain, compute_rms};

    let mut buf = vec![1.0, -1.0, 1.0, -1.0];
    assert_eq!(compute_rms(&buf), 1.0);
    adjust_signal_gain(&mut buf, 0.5);
    assert_eq!(buf, vec![0.5, -0.5, 0.5, -0.5]);

    let mut silent = vec![0.0; 4];
    adjust_signal_gain(&mut silent, 0.5);
    assert_eq!(silent, vec![0.0; 4]);

    let mut broken = vec![1.0, f64::INFINITY];
    adjust_signal_gain(&mut broken, 0.5);
    assert_eq!(broken, vec![1.0, f64::INFINITY]);

    let mut empty: Vec<f64> = Vec::new();
    adjust_signal_gain(&mut empty, 0.5);
    assert!(empty.is_empty());
}
