//! Errors for the synthesis functions.

use thiserror::Error;

/// Result type for synthesis operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors that can occur during synthesis.
///
/// Every variant describes a parameter that was rejected before any sample was computed.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum Error {
    /// The requested signal has no samples.
    #[error("duration must be at least one sample")]
    EmptyDuration,

    /// Sample rate is zero, negative or not finite.
    #[error("invalid sample rate: {0} Hz")]
    InvalidSampleRate(f64),

    /// Pitch frequency is not strictly between 0 and the Nyquist frequency.
    #[error("invalid pitch frequency: {f0} Hz (must be above 0 and below {nyquist} Hz)")]
    InvalidPitch {
        /// The rejected pitch frequency.
        f0: f64,
        /// Half the sample rate.
        nyquist: f64,
    },

    /// The pitch period rounds to zero samples.
    #[error("pitch period of {0} samples rounds to zero")]
    DegeneratePeriod(f64),

    /// Resonant frequency is not strictly between 0 and the Nyquist frequency.
    #[error("invalid formant frequency: {freq} Hz (must be above 0 and below {nyquist} Hz)")]
    InvalidFormantFrequency {
        /// The rejected formant frequency.
        freq: f64,
        /// Half the sample rate.
        nyquist: f64,
    },

    /// Bandwidth is zero, negative or not finite.
    #[error("invalid formant bandwidth: {0}")]
    InvalidBandwidth(f64),

    /// A polynomial with no coefficients was passed to the transfer function arithmetic.
    #[error("polynomial has no coefficients")]
    EmptyPolynomial,
}

/// Checks that `sample_rate` is a positive, finite number and returns its Nyquist frequency.
pub(crate) fn check_sample_rate(sample_rate: f64) -> Result<f64> {
    if sample_rate <= 0.0 || !sample_rate.is_finite() {
        return Err(Error::InvalidSampleRate(sample_rate));
    }
    Ok(sample_rate / 2.0)
}
