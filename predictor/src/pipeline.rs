use log::{debug, info, warn};
use ndarray::Axis;

use crate::{
    encode::encode,
    input::RawInput,
    regressor::{predict_rows, Regressor},
    scaler::Transform,
    schema::FeatureSchema,
    PredictError, SubmitError,
};

/// An estimated annual salary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SalaryEstimate {
    annual: f64,
}

impl SalaryEstimate {
    pub fn new(annual: f64) -> Self {
        Self { annual }
    }

    pub fn annual(&self) -> f64 {
        self.annual
    }

    pub fn monthly(&self) -> f64 {
        self.annual / 12.0
    }
}

/// Encodes, scales and scores an already validated record.
///
/// # Errors
/// Returns `PredictError` if the artifacts disagree on the feature width or
/// the model output is not finite.
pub fn predict<R, T>(
    model: &R,
    scaler: &T,
    schema: &FeatureSchema,
    input: &RawInput,
) -> Result<SalaryEstimate, PredictError>
where
    R: Regressor + ?Sized,
    T: Transform + ?Sized,
{
    let x = encode(input, schema);
    let scaled = scaler.transform(x.view())?;

    let rows = scaled.view().insert_axis(Axis(0));
    let annual = predict_rows(model, rows)?
        .first()
        .copied()
        .ok_or(PredictError::ShapeMismatch {
            what: "prediction",
            got: 0,
            expected: 1,
        })?;

    Ok(SalaryEstimate::new(annual))
}

/// Runs one submission end to end: validation first, then [`predict`].
///
/// # Errors
/// Returns `SubmitError::Rejected` without predicting when the record fails
/// validation, and `SubmitError::Failed` when prediction fails.
pub fn submit<R, T>(
    model: &R,
    scaler: &T,
    schema: &FeatureSchema,
    input: &RawInput,
) -> Result<SalaryEstimate, SubmitError>
where
    R: Regressor + ?Sized,
    T: Transform + ?Sized,
{
    if let Err(e) = input.validate() {
        info!("submission rejected: {e}");
        return Err(e.into());
    }

    match predict(model, scaler, schema, input) {
        Ok(estimate) => {
            debug!("predicted annual salary {:.2}", estimate.annual());
            Ok(estimate)
        }
        Err(e) => {
            warn!("prediction failed: {e}");
            Err(e.into())
        }
    }
}

/// Formats an amount as US dollars with thousands separators, e.g.
/// `$85,000.00`.
pub fn format_usd(amount: f64) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if amount < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{sign}${grouped}.{cents}")
}
