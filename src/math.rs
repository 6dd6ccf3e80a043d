//! Core math functions for the synthesis.
//! If the `libm` feature is enabled, this just exports the required functions.
//! If the `std` feature is enabled, this converts the syntax from the std variety: `f.sin()` into
//! the `libm` equiv. `sin(f)`.

#[cfg(feature = "libm")]
pub(crate) use libm::{cos, sin, sinh};

/// Rounds to the nearest integer, ties go to the even neighbour.
///
/// `libm::rint` follows the default floating-point rounding mode, which is round-half-to-even.
#[cfg(feature = "libm")]
pub(crate) fn round_ties_even(f: f64) -> f64 {
    libm::rint(f)
}

#[cfg(feature = "std")]
pub(crate) fn cos(f: f64) -> f64 {
    f.cos()
}
#[cfg(feature = "std")]
pub(crate) fn sin(f: f64) -> f64 {
    f.sin()
}
#[cfg(feature = "std")]
pub(crate) fn sinh(f: f64) -> f64 {
    f.sinh()
}
/// Rounds to the nearest integer, ties go to the even neighbour.
#[cfg(feature = "std")]
pub(crate) fn round_ties_even(f: f64) -> f64 {
    f.round_ties_even()
}
