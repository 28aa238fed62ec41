//! Typed view of the trained feature-column list.
//!
//! The column names follow the one-hot convention `<field>_<value>` for
//! categorical fields and the bare field name for numeric ones. They are
//! parsed once at load time so the request path never touches raw strings.

use std::fmt;

/// Numeric fields copied into the feature vector unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericField {
    Age,
    YearsOfExperience,
}

impl NumericField {
    pub const ALL: [NumericField; 2] = [NumericField::Age, NumericField::YearsOfExperience];

    pub fn name(self) -> &'static str {
        match self {
            NumericField::Age => "Age",
            NumericField::YearsOfExperience => "Years of Experience",
        }
    }
}

/// Categorical fields expanded into indicator columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CategoricalField {
    Gender,
    EducationLevel,
    JobTitle,
}

impl CategoricalField {
    pub const ALL: [CategoricalField; 3] = [
        CategoricalField::Gender,
        CategoricalField::EducationLevel,
        CategoricalField::JobTitle,
    ];

    pub fn name(self) -> &'static str {
        match self {
            CategoricalField::Gender => "Gender",
            CategoricalField::EducationLevel => "Education Level",
            CategoricalField::JobTitle => "Job Title",
        }
    }
}

impl fmt::Display for CategoricalField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What a single trained column means.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Column {
    Numeric(NumericField),
    Indicator {
        field: CategoricalField,
        category: String,
    },
    /// A column no input can produce; always encoded as zero.
    Unrecognized(String),
}

impl Column {
    /// Classifies a trained column name.
    pub fn parse(name: &str) -> Self {
        if let Some(field) = NumericField::ALL.into_iter().find(|f| f.name() == name) {
            return Column::Numeric(field);
        }

        for field in CategoricalField::ALL {
            let category = name
                .strip_prefix(field.name())
                .and_then(|rest| rest.strip_prefix('_'));

            if let Some(category) = category {
                return Column::Indicator {
                    field,
                    category: category.to_string(),
                };
            }
        }

        Column::Unrecognized(name.to_string())
    }
}

/// The ordered list of columns the model was trained on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureSchema {
    columns: Vec<Column>,
}

impl FeatureSchema {
    /// Parses every column name, keeping the trained order.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let columns = names
            .into_iter()
            .map(|n| {
                let name: String = n.into();
                Column::parse(&name)
            })
            .collect();
        Self { columns }
    }

    /// Returns the amount of expected features.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Distinct categories of `field` that have an indicator column, in
    /// column order.
    pub fn categories(&self, field: CategoricalField) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();

        for column in &self.columns {
            if let Column::Indicator { field: f, category } = column {
                if *f == field && !seen.contains(&category.as_str()) {
                    seen.push(category.as_str());
                }
            }
        }

        seen
    }

    /// Whether `category` of `field` has an indicator column.
    pub fn knows(&self, field: CategoricalField, category: &str) -> bool {
        self.columns.iter().any(|column| match column {
            Column::Indicator { field: f, category: c } => *f == field && c == category,
            _ => false,
        })
    }

    /// The job titles offered by the form.
    pub fn job_titles(&self) -> Vec<&str> {
        self.categories(CategoricalField::JobTitle)
    }

    /// `Software Engineer` when offered, else the first job title.
    pub fn default_job_title(&self) -> Option<&str> {
        let titles = self.job_titles();
        titles
            .iter()
            .copied()
            .find(|t| *t == PREFERRED_JOB_TITLE)
            .or_else(|| titles.first().copied())
    }
}

const PREFERRED_JOB_TITLE: &str = "Software Engineer";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_column_kind() {
        assert_eq!(Column::parse("Age"), Column::Numeric(NumericField::Age));
        assert_eq!(
            Column::parse("Years of Experience"),
            Column::Numeric(NumericField::YearsOfExperience)
        );
        assert_eq!(
            Column::parse("Education Level_Master's"),
            Column::Indicator {
                field: CategoricalField::EducationLevel,
                category: "Master's".into()
            }
        );
        assert_eq!(
            Column::parse("Salary"),
            Column::Unrecognized("Salary".into())
        );
    }

    #[test]
    fn category_keeps_inner_underscores() {
        assert_eq!(
            Column::parse("Job Title_Data_Engineer"),
            Column::Indicator {
                field: CategoricalField::JobTitle,
                category: "Data_Engineer".into()
            }
        );
    }

    #[test]
    fn prefix_without_separator_is_not_an_indicator() {
        assert_eq!(
            Column::parse("Job Titles"),
            Column::Unrecognized("Job Titles".into())
        );
    }

    #[test]
    fn job_titles_come_from_prefixed_columns_only() {
        let schema = FeatureSchema::new([
            "Age",
            "Job Title_Software Engineer",
            "Gender_Male",
            "Job Title_Data Scientist",
        ]);
        assert_eq!(schema.job_titles(), ["Software Engineer", "Data Scientist"]);
    }

    #[test]
    fn duplicate_columns_yield_distinct_titles() {
        let schema = FeatureSchema::new(["Job Title_Analyst", "Job Title_Analyst"]);
        assert_eq!(schema.job_titles(), ["Analyst"]);
        assert_eq!(schema.len(), 2);
    }

    #[test]
    fn default_job_title_prefers_software_engineer() {
        let schema = FeatureSchema::new(["Job Title_Analyst", "Job Title_Software Engineer"]);
        assert_eq!(schema.default_job_title(), Some("Software Engineer"));

        let schema = FeatureSchema::new(["Job Title_Analyst", "Job Title_Designer"]);
        assert_eq!(schema.default_job_title(), Some("Analyst"));

        let schema = FeatureSchema::new(["Age"]);
        assert_eq!(schema.default_job_title(), None);
    }
}
