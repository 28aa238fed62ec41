use std::{fmt, ops::RangeInclusive};

use crate::ValidationError;

/// Ages the form accepts.
pub const AGE_RANGE: RangeInclusive<u32> = 18..=60;

/// Years of experience the form accepts.
pub const EXPERIENCE_RANGE: RangeInclusive<u32> = 0..=30;

pub const DEFAULT_AGE: u32 = 25;
pub const DEFAULT_EXPERIENCE: u32 = 1;

/// Age at which working years start counting.
const WORKING_AGE: i64 = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    /// The category label used in the trained column names.
    pub fn label(self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Education {
    HighSchool,
    Bachelors,
    Masters,
    Phd,
    NotSpecified,
}

impl Education {
    pub const ALL: [Education; 5] = [
        Education::HighSchool,
        Education::Bachelors,
        Education::Masters,
        Education::Phd,
        Education::NotSpecified,
    ];

    /// The category label used in the trained column names.
    pub fn label(self) -> &'static str {
        match self {
            Education::HighSchool => "High School",
            Education::Bachelors => "Bachelor's",
            Education::Masters => "Master's",
            Education::Phd => "PhD",
            Education::NotSpecified => "Not Specified",
        }
    }
}

impl fmt::Display for Education {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One form submission, created fresh each time and never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawInput {
    pub age: u32,
    pub experience: u32,
    pub gender: Gender,
    pub education: Education,
    /// `None` only when the trained columns carry no job titles at all.
    pub job_title: Option<String>,
}

impl RawInput {
    /// Applies [`check_inputs`] to this record.
    ///
    /// # Errors
    /// Returns `ValidationError::ExperienceTooHigh` if the record is implausible.
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_inputs(self.age, self.experience)
    }
}

/// Rejects more years of experience than years since turning 16.
///
/// # Errors
/// Returns `ValidationError::ExperienceTooHigh` when `experience > age - 16`.
pub fn check_inputs(age: u32, experience: u32) -> Result<(), ValidationError> {
    if i64::from(experience) > i64::from(age) - WORKING_AGE {
        return Err(ValidationError::ExperienceTooHigh { age, experience });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundary_is_inclusive() {
        assert!(check_inputs(25, 9).is_ok());
        assert_eq!(
            check_inputs(25, 10),
            Err(ValidationError::ExperienceTooHigh {
                age: 25,
                experience: 10
            })
        );
    }

    #[test]
    fn young_ages_reject_any_large_experience() {
        assert!(check_inputs(18, 2).is_ok());
        assert!(check_inputs(18, 3).is_err());
        assert!(check_inputs(20, 10).is_err());
    }

    #[test]
    fn ages_below_working_age_do_not_underflow() {
        assert!(check_inputs(10, 0).is_err());
        assert!(check_inputs(16, 0).is_ok());
    }

    #[test]
    fn labels_match_training_categories() {
        let labels: Vec<_> = Education::ALL.iter().map(|e| e.label()).collect();
        assert_eq!(
            labels,
            ["High School", "Bachelor's", "Master's", "PhD", "Not Specified"]
        );
        assert_eq!(Gender::Female.to_string(), "Female");
    }

    #[test]
    fn rejection_message_is_user_facing() {
        let err = check_inputs(20, 10).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Experience years seem too high for the given age!"
        );
    }
}
