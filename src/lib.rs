//! Formant vowel synthesis in Rust.
//!
//! A vowel is built from three pieces:
//! a glottal impulse train ([`voiced_excitation`]),
//! one second-order digital resonator per formant ([`resonator`]),
//! and the sum of four such resonators driven by the same excitation ([`synthesize_vowel`]).
//!
//! *NOTE*: This is _not_ a text-to-speech engine.
//! Every function is a pure computation over the parameters you pass in.
//!
//! ## `no_std`
//!
//! The synthesis core is `no_std` compatible, `alloc` is required.
//! Pick the math backend with either the `std` (default) or the `libm` feature.
//! WAV export (`wav`) and the `vowel` binary (`cli`) need `std`.

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(
    clippy::all,
    clippy::cargo,
    clippy::pedantic,
    unsafe_code,
    rustdoc::all
)]
// fine for us since loss of precision/sign is not that imporatnt, as long as it's the same every time.
#![allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]

#[cfg(all(feature = "std", feature = "libm"))]
compile_error!("Features \"std\" and \"libm\" are mutually exclusive.");

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("Must specify a math feature: either \"std\" or \"libm\".");

extern crate alloc;

mod error;
pub use error::{Error, Result};
mod traits;
pub use traits::BasicFilter;
mod math;
mod poly_real;
pub use poly_real::TransferFunction;
mod excitation;
pub use excitation::voiced_excitation;
mod resonator;
pub use resonator::{Resonator, resonator};
mod vowel;
pub use vowel::{
    FORMANT_COUNT, Formant, VowelParms, get_vowel_transfer_function_coefficients, synthesize_vowel,
};
mod dft;
pub use dft::{dft, dft_matrix};
#[cfg(feature = "wav")]
pub mod wav;

#[cfg(test)]
mod lib_tests;
