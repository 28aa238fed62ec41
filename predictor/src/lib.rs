//! Salary estimation from a pre-trained regression model.
//!
//! The crate loads three artifacts produced by an external training run (a
//! regressor, a fitted scaler and the ordered feature-column list), and turns
//! one form submission into an annual salary estimate:
//!
//! validate -> encode -> scale -> predict

pub mod artifacts;
pub mod encode;
mod error;
pub mod input;
pub mod pipeline;
pub mod regressor;
pub mod scaler;
pub mod schema;

pub use artifacts::{ArtifactBundle, ArtifactCache, ArtifactPaths};
pub use encode::encode;
pub use error::{ArtifactError, PredictError, SubmitError, ValidationError};
pub use input::{check_inputs, Education, Gender, RawInput};
pub use pipeline::{format_usd, SalaryEstimate};
pub use regressor::{Model, Regressor, Tree};
pub use scaler::{Scaler, Transform};
pub use schema::{CategoricalField, Column, FeatureSchema, NumericField};
