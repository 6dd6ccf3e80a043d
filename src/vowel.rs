//! Vowel synthesis: one excitation, four parallel formant resonators, summed.

use alloc::{vec, vec::Vec};
use log::debug;

use crate::poly_real::{self, TransferFunction};
use crate::{BasicFilter, Resonator, Result, voiced_excitation};

/// Number of formants that make up a vowel.
pub const FORMANT_COUNT: usize = 4;

/// Tolerance for trimming transfer function coefficients.
const EPS: f64 = 1E-10;

/// Resonant frequency and bandwidth of one formant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Formant {
    /// Resonant frequency in Hz.
    pub freq: f64,
    /// Resonance bandwidth.
    pub bw: f64,
}

impl Formant {
    #[must_use]
    pub const fn new(freq: f64, bw: f64) -> Self {
        Formant { freq, bw }
    }
}

/// Parameters for a single synthesized vowel.
#[derive(Debug, Clone, PartialEq)]
pub struct VowelParms {
    /// Length of the vowel, in samples.
    pub duration: usize,
    /// Pitch frequency in Hz.
    pub f0: f64,
    /// Formants F1 to F4.
    pub formants: [Formant; FORMANT_COUNT],
    /// Sample rate in Hz.
    pub sample_rate: f64,
}

/// Builds one configured resonator per formant, so every parameter is checked before any
/// sample is computed.
fn formant_resonators(parms: &VowelParms) -> Result<Vec<Resonator>> {
    parms
        .formants
        .iter()
        .map(|formant| -> Result<Resonator> {
            let mut resonator = Resonator::new(parms.sample_rate)?;
            resonator.set(formant.freq, formant.bw)?;
            Ok(resonator)
        })
        .collect()
}

/// Synthesizes a vowel.
///
/// The excitation is computed once and fed to four independent resonators, one per formant.
/// The returned signal is the raw sum of the four resonator outputs; it is not normalized and can
/// exceed the `[-1, 1]` range.
///
/// # Errors
///
/// Returns the domain error of the first invalid parameter, see [`voiced_excitation`] and
/// [`Resonator::set`].
pub fn synthesize_vowel(parms: &VowelParms) -> Result<Vec<f64>> {
    let resonators = formant_resonators(parms)?;
    let excitation = voiced_excitation(parms.duration, parms.f0, parms.sample_rate)?;
    debug!(
        "synthesizing {} samples at f0 {} Hz, sample rate {} Hz",
        parms.duration, parms.f0, parms.sample_rate
    );
    let mut speech = vec![0.0; excitation.len()];
    for mut resonator in resonators {
        for (s, &x) in speech.iter_mut().zip(&excitation) {
            *s += resonator.step(x);
        }
    }
    Ok(speech)
}

/// Returns the polynomial coefficients of the vowel's transfer function in the z-plane:
/// the sum of the transfer functions of its four formant resonators.
///
/// # Errors
///
/// Any invalid formant or sample rate will return the matching domain error.
pub fn get_vowel_transfer_function_coefficients(parms: &VowelParms) -> Result<TransferFunction> {
    formant_resonators(parms)?
        .iter()
        .try_fold(TransferFunction::zero(), |acc, resonator| {
            poly_real::add_fractions(
                &acc,
                &resonator.get_transfer_function_coefficients(),
                Some(EPS),
            )
        })
}
