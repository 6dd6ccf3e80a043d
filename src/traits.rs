use crate::TransferFunction;

/// A sample-by-sample linear filter.
pub trait BasicFilter {
    /// Returns the polynomial coefficients of the filter transfer function in the z-plane.
    /// Both polynomials are ordered in ascending powers of `z^-1`.
    fn get_transfer_function_coefficients(&self) -> TransferFunction;
    /// Perform one step of a filter.
    fn step(&mut self, x: f64) -> f64;
    /// Clears the filter history, so the next sample is treated as sample 0.
    fn reset(&mut self);
}
