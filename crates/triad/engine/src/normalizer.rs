//! Standardize → clip → scale.

use triad_types::{CanonicalVector, Trigram};

/// Relative spread at or below this is treated as flat.
///
/// Compared against `std / max |v|`, so the cut-off scales with the input.
pub const STD_TOLERANCE: f64 = 1e-12;

/// Turns a canonical vector into a non-negative distribution summing to 1.
#[derive(Clone, Copy, Debug, Default)]
pub struct VectorNormalizer;

impl VectorNormalizer {
    pub fn new() -> Self {
        Self
    }

    /// Full normalization; never yields NaN or negatives.
    pub fn normalize(&self, vector: &CanonicalVector) -> CanonicalVector {
        Self::scale(&Self::clip(&Self::standardize(vector)))
    }

    /// Z-scores with the population standard deviation; all zero when the values are flat.
    pub fn standardize(vector: &CanonicalVector) -> CanonicalVector {
        let n = Trigram::COUNT as f64;
        let mean = vector.sum() / n;
        let variance = vector.values().iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
        let std = variance.sqrt();
        let magnitude = vector.values().iter().fold(0.0_f64, |m, v| m.max(v.abs()));
        if std.is_nan() || std <= STD_TOLERANCE * magnitude {
            return CanonicalVector::zeros();
        }
        CanonicalVector::from_values(vector.values().map(|v| (v - mean) / std))
    }

    /// Negatives (and NaN) become zero.
    pub fn clip(vector: &CanonicalVector) -> CanonicalVector {
        CanonicalVector::from_values(vector.values().map(|v| if v > 0.0 { v } else { 0.0 }))
    }

    /// Divide by the sum; uniform 1/8 when nothing is left.
    pub fn scale(vector: &CanonicalVector) -> CanonicalVector {
        let sum = vector.sum();
        if !sum.is_finite() || sum <= 0.0 {
            return CanonicalVector::uniform();
        }
        CanonicalVector::from_values(vector.values().map(|v| v / sum))
    }
}
