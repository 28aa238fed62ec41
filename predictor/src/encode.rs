use log::{debug, warn};
use ndarray::Array1;

use crate::{
    input::{Education, Gender, RawInput},
    schema::{CategoricalField, Column, FeatureSchema, NumericField},
};

/// Expands `input` into the feature vector the model was trained on.
///
/// Numeric columns take the record's value, an indicator column is `1.0`
/// exactly when the record selects its category, and every other column is
/// `0.0`. The result always has `schema.len()` entries in trained order.
///
/// A selected category with no indicator column contributes nothing, which
/// makes it indistinguishable from the dropped reference category. This is
/// logged, not corrected.
pub fn encode(input: &RawInput, schema: &FeatureSchema) -> Array1<f64> {
    for field in CategoricalField::ALL {
        let Some(category) = category_of(input, field) else {
            continue;
        };
        if schema.knows(field, category) {
            continue;
        }

        if is_reference(schema, field, category) {
            debug!(
                field = field.name(), category = category;
                "reference category, all indicators zero"
            );
        } else {
            warn!(
                field = field.name(), category = category;
                "no indicator column for category, it is either the reference category or unseen in training"
            );
        }
    }

    schema
        .columns()
        .iter()
        .map(|column| match column {
            Column::Numeric(NumericField::Age) => f64::from(input.age),
            Column::Numeric(NumericField::YearsOfExperience) => f64::from(input.experience),
            Column::Indicator { field, category } => {
                if category_of(input, *field) == Some(category.as_str()) {
                    1.0
                } else {
                    0.0
                }
            }
            Column::Unrecognized(_) => 0.0,
        })
        .collect()
}

/// The record's value for a categorical field.
fn category_of(input: &RawInput, field: CategoricalField) -> Option<&str> {
    match field {
        CategoricalField::Gender => Some(input.gender.label()),
        CategoricalField::EducationLevel => Some(input.education.label()),
        CategoricalField::JobTitle => input.job_title.as_deref(),
    }
}

/// Whether `category` is the one choice of a closed field that training
/// dropped. Job titles are open, so they never qualify.
fn is_reference(schema: &FeatureSchema, field: CategoricalField, category: &str) -> bool {
    let choices: Vec<&str> = match field {
        CategoricalField::Gender => Gender::ALL.iter().map(|g| g.label()).collect(),
        CategoricalField::EducationLevel => Education::ALL.iter().map(|e| e.label()).collect(),
        CategoricalField::JobTitle => return false,
    };

    let missing: Vec<&str> = choices
        .into_iter()
        .filter(|c| !schema.knows(field, c))
        .collect();
    missing == [category]
}
