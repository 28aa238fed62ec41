use std::collections::BTreeSet;

use predictor::{
    check_inputs, encode, input::AGE_RANGE, input::EXPERIENCE_RANGE, Column, Education,
    FeatureSchema, Gender, RawInput,
};
use proptest::prelude::*;

fn gender() -> impl Strategy<Value = Gender> {
    prop::sample::select(Gender::ALL.to_vec())
}

fn education() -> impl Strategy<Value = Education> {
    prop::sample::select(Education::ALL.to_vec())
}

const TITLES: &[&str] = &[
    "Software Engineer",
    "Data Scientist",
    "Product Manager",
    "Astronaut",
];

fn column_name() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Age".to_string()),
        Just("Years of Experience".to_string()),
        Just("Gender_Male".to_string()),
        Just("Gender_Female".to_string()),
        Just("Education Level_PhD".to_string()),
        Just("Education Level_Master's".to_string()),
        prop::sample::select(TITLES.to_vec()).prop_map(|t| format!("Job Title_{t}")),
        "[A-Za-z ]{1,12}",
    ]
}

fn record() -> impl Strategy<Value = RawInput> {
    (
        AGE_RANGE,
        EXPERIENCE_RANGE,
        gender(),
        education(),
        prop::option::of(prop::sample::select(TITLES.to_vec())),
    )
        .prop_map(|(age, experience, gender, education, title)| RawInput {
            age,
            experience,
            gender,
            education,
            job_title: title.map(str::to_string),
        })
}

proptest! {
    #[test]
    fn validation_accepts_exactly_plausible_experience(
        age in AGE_RANGE,
        experience in EXPERIENCE_RANGE,
    ) {
        let plausible = i64::from(experience) <= i64::from(age) - 16;
        prop_assert_eq!(check_inputs(age, experience).is_ok(), plausible);
    }

    #[test]
    fn job_titles_are_the_stripped_prefixed_columns(
        names in prop::collection::vec(column_name(), 0..24),
    ) {
        let schema = FeatureSchema::new(names.clone());

        let offered: BTreeSet<&str> = schema.job_titles().into_iter().collect();
        let expected: BTreeSet<&str> = names
            .iter()
            .filter_map(|n| n.strip_prefix("Job Title_"))
            .collect();

        prop_assert_eq!(offered, expected);
        prop_assert_eq!(schema.job_titles().len(), schema.job_titles().iter().collect::<BTreeSet<_>>().len());
    }

    #[test]
    fn encoding_is_total_and_zero_outside_the_record(
        names in prop::collection::vec(column_name(), 0..24),
        input in record(),
    ) {
        let schema = FeatureSchema::new(names);
        let x = encode(&input, &schema);

        prop_assert_eq!(x.len(), schema.len());

        for (value, column) in x.iter().zip(schema.columns()) {
            match column {
                Column::Numeric(_) => {}
                Column::Indicator { .. } => prop_assert!(*value == 0.0 || *value == 1.0),
                Column::Unrecognized(_) => prop_assert_eq!(*value, 0.0),
            }
        }

        // At most one indicator per field fires (columns may repeat).
        let fired: BTreeSet<String> = x
            .iter()
            .zip(schema.columns())
            .filter(|(v, _)| **v == 1.0)
            .filter_map(|(_, c)| match c {
                Column::Indicator { field, category } => Some(format!("{field}/{category}")),
                _ => None,
            })
            .collect();
        let fields: BTreeSet<&str> = fired.iter().filter_map(|f| f.split('/').next()).collect();
        prop_assert_eq!(fired.len(), fields.len());
    }

    #[test]
    fn encoding_is_deterministic(
        names in prop::collection::vec(column_name(), 0..24),
        input in record(),
    ) {
        let schema = FeatureSchema::new(names);
        prop_assert_eq!(encode(&input, &schema), encode(&input, &schema));
    }
}
