//! N-dimensional vectors stored as `f64` slices.
//!
//! Element-wise operations require both operands to have the same length;
//! a mismatch is reported as [`VectorError::LengthMismatch`] rather than
//! truncating or padding.

use std::fmt;

/// Errors from element-wise vector operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VectorError {
    /// The two operands have different lengths.
    LengthMismatch { left: usize, right: usize },
}

impl fmt::Display for VectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch { left, right } => {
                write!(f, "vector length mismatch: {left} vs {right}")
            }
        }
    }
}

impl std::error::Error for VectorError {}

fn zip_with(a: &[f64], b: &[f64], op: impl Fn(f64, f64) -> f64) -> Result<Vec<f64>, VectorError> {
    if a.len() != b.len() {
        return Err(VectorError::LengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    Ok(a.iter().zip(b).map(|(&x, &y)| op(x, y)).collect())
}

/// Euclidean norm.
pub fn length(v: &[f64]) -> f64 {
    v.iter().map(|x| x * x).sum::<f64>().sqrt()
}

/// Element-wise `a + b`.
pub fn add(a: &[f64], b: &[f64]) -> Result<Vec<f64>, VectorError> {
    zip_with(a, b, |x, y| x + y)
}

/// Element-wise `a - b`.
pub fn sub(a: &[f64], b: &[f64]) -> Result<Vec<f64>, VectorError> {
    zip_with(a, b, |x, y| x - y)
}

/// Multiply every component by `k`.
pub fn scale(v: &[f64], k: f64) -> Vec<f64> {
    v.iter().map(|x| x * k).collect()
}

/// Euclidean distance between `a` and `b`.
pub fn distance(a: &[f64], b: &[f64]) -> Result<f64, VectorError> {
    Ok(length(&sub(b, a)?))
}
