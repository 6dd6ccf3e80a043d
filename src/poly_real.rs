//! Real polynomial arithmetic for transfer functions.
//! Polynomials are stored as coefficient slices in ascending powers.

use alloc::{vec, vec::Vec};
use core::cmp::{max, min};

use crate::{Error, Result};

/// A rational transfer function in the z-plane.
///
/// Both polynomials are ordered in ascending powers of `z^-1`.
#[derive(Debug, Clone, PartialEq)]
pub struct TransferFunction {
    pub numerator: Vec<f64>,
    pub denominator: Vec<f64>,
}

impl TransferFunction {
    /// The transfer function `0 / 1`, the neutral element when adding fractions.
    #[must_use]
    pub fn zero() -> Self {
        TransferFunction {
            numerator: vec![0.0],
            denominator: vec![1.0],
        }
    }

    /// Evaluates the transfer function at a (real) value of `z^-1`.
    #[must_use]
    pub fn evaluate(&self, z_inv: f64) -> f64 {
        evaluate(&self.numerator, z_inv) / evaluate(&self.denominator, z_inv)
    }
}

/// Horner evaluation of a polynomial.
fn evaluate(a: &[f64], x: f64) -> f64 {
    a.iter().rev().fold(0.0, |acc, c| acc * x + c)
}

/// Returns `true` if two polynomials are equal.
fn compare_equal(a1: &[f64], a2: &[f64], eps: Option<f64>) -> bool {
    let eps = eps.unwrap_or(0.0);
    let n = max(a1.len(), a2.len());
    (0..n).all(|i| {
        let v1 = a1.get(i).copied().unwrap_or(0.0);
        let v2 = a2.get(i).copied().unwrap_or(0.0);
        (v1 - v2).abs() <= eps
    })
}

/// Adds two real polynomials.
pub(crate) fn add(a1: &[f64], a2: &[f64], eps: Option<f64>) -> Result<Vec<f64>> {
    if a1.is_empty() || a2.is_empty() {
        return Err(Error::EmptyPolynomial);
    }
    let n3 = max(a1.len(), a2.len());
    let a3: Vec<f64> = (0..n3)
        .map(|i| a1.get(i).copied().unwrap_or(0.0) + a2.get(i).copied().unwrap_or(0.0))
        .collect();
    trim(&a3, eps)
}

/// Multiplies two real polynomials.
pub(crate) fn multiply(a1: &[f64], a2: &[f64], eps: Option<f64>) -> Result<Vec<f64>> {
    if a1.is_empty() || a2.is_empty() {
        return Err(Error::EmptyPolynomial);
    }
    let n1 = a1.len() - 1;
    let n2 = a2.len() - 1;
    let n3 = n1 + n2;
    let mut a3 = vec![0.0; n3 + 1];
    for (i, c) in a3.iter_mut().enumerate() {
        let p1 = i.saturating_sub(n2);
        let p2 = min(n1, i);
        *c = (p1..=p2).map(|j| a1[j] * a2[i - j]).sum();
    }
    trim(&a3, eps)
}

/// Trims top order zero coefficients.
pub(crate) fn trim(a: &[f64], eps: Option<f64>) -> Result<Vec<f64>> {
    let eps = eps.unwrap_or(0.0);
    if a.is_empty() {
        return Err(Error::EmptyPolynomial);
    }
    match a.iter().rposition(|c| c.abs() > eps) {
        Some(last) => Ok(a[..=last].to_vec()),
        None => Ok(vec![0.0]),
    }
}

/// Adds two rational fractions.
///
/// Equal denominators only add the numerators, otherwise both fractions are brought onto the
/// product of the denominators.
pub(crate) fn add_fractions(
    f1: &TransferFunction,
    f2: &TransferFunction,
    eps: Option<f64>,
) -> Result<TransferFunction> {
    if compare_equal(&f1.denominator, &f2.denominator, eps) {
        return Ok(TransferFunction {
            numerator: add(&f1.numerator, &f2.numerator, eps)?,
            denominator: f1.denominator.clone(),
        });
    }
    let numerator = add(
        &multiply(&f1.numerator, &f2.denominator, eps)?,
        &multiply(&f2.numerator, &f1.denominator, eps)?,
        eps,
    )?;
    let denominator = multiply(&f1.denominator, &f2.denominator, eps)?;
    Ok(TransferFunction {
        numerator,
        denominator,
    })
}
