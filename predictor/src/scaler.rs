use ndarray::{Array1, ArrayView1, Zip};
use serde::Deserialize;

use crate::PredictError;

/// A fitted normalization of raw feature vectors.
pub trait Transform: Send + Sync {
    /// Maps a raw feature vector into the space the model was trained on.
    ///
    /// # Errors
    /// Returns `PredictError::ShapeMismatch` if `x` has the wrong width.
    fn transform(&self, x: ArrayView1<f64>) -> Result<Array1<f64>, PredictError>;
}

/// The scaler artifacts this crate understands.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Scaler {
    /// `(x - mean) / scale`
    Standard { mean: Vec<f64>, scale: Vec<f64> },
    /// `x * scale + min`
    MinMax { min: Vec<f64>, scale: Vec<f64> },
    Identity,
}

impl Scaler {
    /// Returns the amount of features the scaler was fitted on, if fixed.
    pub fn n_features(&self) -> Option<usize> {
        match self {
            Scaler::Standard { mean, .. } => Some(mean.len()),
            Scaler::MinMax { min, .. } => Some(min.len()),
            Scaler::Identity => None,
        }
    }

    /// Checks the fitted parameters are usable.
    ///
    /// # Errors
    /// Returns a human-readable reason when the parameter arrays disagree in
    /// length or hold non-finite values.
    pub fn check(&self) -> Result<(), String> {
        let (name, offset, scale) = match self {
            Scaler::Standard { mean, scale } => ("mean", mean, scale),
            Scaler::MinMax { min, scale } => ("min", min, scale),
            Scaler::Identity => return Ok(()),
        };

        if offset.len() != scale.len() {
            return Err(format!(
                "{name} has {} entries but scale has {}",
                offset.len(),
                scale.len()
            ));
        }

        if offset.iter().chain(scale).any(|v| !v.is_finite()) {
            return Err("scaler parameters must be finite".into());
        }

        Ok(())
    }

    fn expect_width(&self, x: ArrayView1<f64>) -> Result<(), PredictError> {
        let widths = match self {
            Scaler::Standard { mean, scale } => [mean.len(), scale.len()],
            Scaler::MinMax { min, scale } => [min.len(), scale.len()],
            Scaler::Identity => return Ok(()),
        };

        match widths.into_iter().find(|&w| w != x.len()) {
            Some(expected) => Err(PredictError::ShapeMismatch {
                what: "scaler",
                got: x.len(),
                expected,
            }),
            None => Ok(()),
        }
    }
}

impl Transform for Scaler {
    fn transform(&self, x: ArrayView1<f64>) -> Result<Array1<f64>, PredictError> {
        self.expect_width(x)?;

        let out = match self {
            Scaler::Standard { mean, scale } => {
                let mut out = x.to_owned();
                Zip::from(&mut out)
                    .and(mean.as_slice())
                    .and(scale.as_slice())
                    .for_each(|v, &m, &s| {
                        // A constant feature was fitted with zero spread.
                        let s = if s == 0.0 { 1.0 } else { s };
                        *v = (*v - m) / s;
                    });
                out
            }
            Scaler::MinMax { min, scale } => {
                let mut out = x.to_owned();
                Zip::from(&mut out)
                    .and(min.as_slice())
                    .and(scale.as_slice())
                    .for_each(|v, &lo, &s| *v = *v * s + lo);
                out
            }
            Scaler::Identity => x.to_owned(),
        };

        Ok(out)
    }
}
