//! Voiced excitation: a train of glottal impulses at the pitch frequency.

use alloc::{vec, vec::Vec};
use log::trace;

use crate::error::check_sample_rate;
use crate::math::round_ties_even;
use crate::{Error, Result};

/// Checks the pitch against the sample rate and returns the pitch period in whole samples.
///
/// The period is `sample_rate / f0` rounded to the nearest integer, ties go to the even neighbour
/// (`2.5 -> 2`, `3.5 -> 4`).
// the quotient is checked to be positive and finite before the cast.
#[allow(clippy::cast_sign_loss)]
pub(crate) fn period_samples(f0: f64, sample_rate: f64) -> Result<usize> {
    let nyquist = check_sample_rate(sample_rate)?;
    if f0 <= 0.0 || f0 >= nyquist || !f0.is_finite() {
        return Err(Error::InvalidPitch { f0, nyquist });
    }
    let period = round_ties_even(sample_rate / f0);
    if period < 1.0 {
        return Err(Error::DegeneratePeriod(sample_rate / f0));
    }
    Ok(period as usize)
}

/// Creates a voiced speech excitation.
///
/// ### params
/// ```text
///    duration = Length of the excitation, in samples.
///    f0 = Pitch frequency in Hz.
///    sample_rate = Sample rate in Hz.
/// ```
/// ### returns
///    A signal of `duration` samples which is `-1` at every integer multiple of the pitch period,
///    and `0` everywhere else. Sample 0 is always a pulse.
///
/// # Errors
///
/// Returns [`Error::EmptyDuration`] for a zero duration, [`Error::InvalidSampleRate`] or
/// [`Error::InvalidPitch`] when `f0` is not strictly between 0 and the Nyquist frequency.
pub fn voiced_excitation(duration: usize, f0: f64, sample_rate: f64) -> Result<Vec<f64>> {
    if duration == 0 {
        return Err(Error::EmptyDuration);
    }
    let period = period_samples(f0, sample_rate)?;
    trace!("pitch period of {period} samples for f0 {f0} Hz");
    let mut excitation = vec![0.0; duration];
    for pulse in excitation.iter_mut().step_by(period) {
        *pulse = -1.0;
    }
    Ok(excitation)
}
