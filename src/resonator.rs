use alloc::{vec, vec::Vec};
use core::f64::consts::{LN_2, PI};
use log::trace;

use crate::error::check_sample_rate;
use crate::math::{cos, sin, sinh};
use crate::{BasicFilter, Error, Result, TransferFunction};

/// A formant resonator.
/// This is a second order IIR filter with a pole pair at angle `±w` and a zero pair whose
/// radius is set by the bandwidth.
///
/// # Formulas:
/// ## Variables:
/// ```text
///    x = input samples
///    y = output samples
///    f = resonator frequency in Hz
///    bw = bandwidth of the resonator
///    w = 2 * PI * f / sampleRate
///    alpha = sin(w) * sinh(ln(2) / 2 * bw * w / sin(w))
/// ```
/// ## Filter function:
/// ```text
///    y[0] = y[1] = 0
///    y[n] = 2cos(w) * y[n-1] - y[n-2] + x[n] - 2cos(w) * alpha * x[n-1] + alpha^2 * x[n-2]
/// ```
/// ## Transfer function (of the recurrence, ignoring the first two samples):
/// ```text
///    H(z) = (1 - 2cos(w) * alpha * z^-1 + alpha^2 * z^-2) / (1 - 2cos(w) * z^-1 + z^-2)
/// ```
///
/// The output is neither clamped nor checked.
/// Large bandwidths give a large `alpha`, and the output grows with `alpha^2`
/// up to infinity; keeping the parameters physically plausible is up to the caller.
#[derive(Debug, Clone)]
pub struct Resonator {
    sample_rate: f64,
    /// 2cos(w)
    b: f64,
    alpha: f64,
    /// x[n-1], last input value
    x1: f64,
    /// x[n-2], second-last input value
    x2: f64,
    /// y[n-1], last output value
    y1: f64,
    /// y[n-2], second-last output value
    y2: f64,
    /// Number of leading samples still forced to 0.
    warmup: u8,
}

impl Resonator {
    /// ### params
    /// ```text
    /// sample_rate = Sample rate in Hz.
    /// ```
    /// The resonator starts out with `w = 0` and `alpha = 0`; call [`Resonator::set`] before
    /// using it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSampleRate`] if the sample rate is not a positive, finite number.
    pub fn new(sample_rate: f64) -> Result<Self> {
        check_sample_rate(sample_rate)?;
        Ok(Resonator {
            sample_rate,
            b: 2.0,
            alpha: 0.0,
            x1: 0.0,
            x2: 0.0,
            y1: 0.0,
            y2: 0.0,
            warmup: 2,
        })
    }

    /// Adjusts the filter parameters without resetting the inner state.
    /// ### params
    /// ```text
    /// f = Frequency of resonator in Hz, strictly between 0 and the Nyquist frequency.
    /// bw = Bandwidth of resonator.
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidFormantFrequency`] when `f` is outside `(0, sample_rate / 2)`,
    /// where `sin(w)` would be zero, and [`Error::InvalidBandwidth`] for a non-positive or
    /// non-finite `bw`.
    pub fn set(&mut self, f: f64, bw: f64) -> Result<()> {
        let nyquist = self.sample_rate / 2.0;
        if f <= 0.0 || f >= nyquist || !f.is_finite() {
            return Err(Error::InvalidFormantFrequency { freq: f, nyquist });
        }
        if bw <= 0.0 || !bw.is_finite() {
            return Err(Error::InvalidBandwidth(bw));
        }
        let w = 2.0 * PI * f / self.sample_rate;
        self.alpha = sin(w) * sinh((LN_2 / 2.0) * bw * w / sin(w));
        self.b = 2.0 * cos(w);
        trace!("resonator at {f} Hz: 2cos(w) = {}, alpha = {}", self.b, self.alpha);
        Ok(())
    }
}

impl BasicFilter for Resonator {
    fn get_transfer_function_coefficients(&self) -> TransferFunction {
        TransferFunction {
            numerator: vec![1.0, -self.b * self.alpha, self.alpha * self.alpha],
            denominator: vec![1.0, -self.b, 1.0],
        }
    }

    /// Performs a filter step.
    /// ### params
    /// ```text
    ///    x = Input signal value.
    /// ```
    /// ### returns
    ///    Output signal value. The first two outputs after construction or a reset are 0.
    fn step(&mut self, x: f64) -> f64 {
        let y = if self.warmup > 0 {
            self.warmup -= 1;
            0.0
        } else {
            self.b * self.y1 - self.y2 + x - self.b * self.alpha * self.x1
                + self.alpha * self.alpha * self.x2
        };
        self.x2 = self.x1;
        self.x1 = x;
        self.y2 = self.y1;
        self.y1 = y;
        y
    }

    fn reset(&mut self) {
        self.x1 = 0.0;
        self.x2 = 0.0;
        self.y1 = 0.0;
        self.y2 = 0.0;
        self.warmup = 2;
    }
}

/// Generates the output of a resonator driven by `x`.
///
/// ### params
/// ```text
///    x = The excitation signal.
///    f = Resonant frequency in Hz.
///    bw = Resonant bandwidth.
///    sample_rate = Sample rate in Hz.
/// ```
/// ### returns
///    The resonant output, always as long as `x`.
///
/// # Errors
///
/// See [`Resonator::new`] and [`Resonator::set`].
pub fn resonator(x: &[f64], f: f64, bw: f64, sample_rate: f64) -> Result<Vec<f64>> {
    let mut resonator = Resonator::new(sample_rate)?;
    resonator.set(f, bw)?;
    Ok(x.iter().map(|&sample| resonator.step(sample)).collect())
}
