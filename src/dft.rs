//! Discrete Fourier transform by explicit matrix.

use alloc::vec::Vec;
use core::f64::consts::PI;
use num_complex::Complex;

use crate::math::{cos, sin};

/// Creates the `n` by `n` DFT transform matrix.
///
/// ```text
///    W[k][m] = cos(2 * PI * k * m / n) - j * sin(2 * PI * k * m / n)
/// ```
/// An `n` of 0 gives an empty matrix.
#[must_use]
pub fn dft_matrix(n: usize) -> Vec<Vec<Complex<f64>>> {
    let size = n as f64;
    (0..n)
        .map(|k| {
            (0..n)
                .map(|m| {
                    let angle = 2.0 * PI * k as f64 * m as f64 / size;
                    Complex::new(cos(angle), -sin(angle))
                })
                .collect()
        })
        .collect()
}

/// Transforms a real signal by multiplying it with [`dft_matrix`].
///
/// This is `O(n^2)`; it is meant for inspecting short signals.
#[must_use]
pub fn dft(x: &[f64]) -> Vec<Complex<f64>> {
    dft_matrix(x.len())
        .iter()
        .map(|row| {
            row.iter()
                .zip(x)
                .fold(Complex::new(0.0, 0.0), |acc, (w, &sample)| acc + *w * sample)
        })
        .collect()
}
