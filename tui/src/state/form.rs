use predictor::{
    input::{AGE_RANGE, DEFAULT_AGE, DEFAULT_EXPERIENCE, EXPERIENCE_RANGE},
    ArtifactBundle, Education, FeatureSchema, Gender, RawInput, SalaryEstimate, SubmitError,
};

/// Slider step for page up / page down.
pub const PAGE_STEP: i32 = 5;

/// The focusable controls, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Age,
    Experience,
    Gender,
    Education,
    JobTitle,
    Predict,
}

impl Field {
    pub const ALL: [Field; 6] = [
        Field::Age,
        Field::Experience,
        Field::Gender,
        Field::Education,
        Field::JobTitle,
        Field::Predict,
    ];

    fn index(self) -> usize {
        Self::ALL.iter().position(|f| *f == self).unwrap_or(0)
    }
}

/// Where a submission stands.
#[derive(Debug, Clone, PartialEq)]
pub enum Phase {
    Idle,
    Validating,
    Predicting,
    ShowingResult(SalaryEstimate),
    ShowingError(SubmitError),
}

/// Current values of every control plus the last submission's outcome.
#[derive(Debug, Clone)]
pub struct FormState {
    age: u32,
    experience: u32,
    gender: usize,
    education: usize,
    job_titles: Vec<String>,
    job_title: usize,
    focus: Field,
    phase: Phase,
}

impl FormState {
    /// Creates the form with default values and the job titles `schema`
    /// was trained on.
    pub fn new(schema: &FeatureSchema) -> Self {
        let job_titles: Vec<String> = schema.job_titles().into_iter().map(String::from).collect();
        let job_title = schema
            .default_job_title()
            .and_then(|d| job_titles.iter().position(|t| t == d))
            .unwrap_or(0);

        Self {
            age: DEFAULT_AGE,
            experience: DEFAULT_EXPERIENCE,
            gender: 0,
            education: 0,
            job_titles,
            job_title,
            focus: Field::Age,
            phase: Phase::Idle,
        }
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn experience(&self) -> u32 {
        self.experience
    }

    pub fn gender(&self) -> Gender {
        Gender::ALL[self.gender]
    }

    pub fn education(&self) -> Education {
        Education::ALL[self.education]
    }

    pub fn job_title(&self) -> Option<&str> {
        self.job_titles.get(self.job_title).map(String::as_str)
    }

    pub fn focus(&self) -> Field {
        self.focus
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn focus_next(&mut self) {
        let i = (self.focus.index() + 1) % Field::ALL.len();
        self.focus = Field::ALL[i];
    }

    pub fn focus_prev(&mut self) {
        let n = Field::ALL.len();
        let i = (self.focus.index() + n - 1) % n;
        self.focus = Field::ALL[i];
    }

    /// Moves the focused control by `delta`: sliders clamp to their range,
    /// selectors wrap around. Any change discards the previous outcome.
    pub fn adjust(&mut self, delta: i32) {
        let before = (self.age, self.experience, self.gender, self.education, self.job_title);

        match self.focus {
            Field::Age => self.age = step(self.age, delta, *AGE_RANGE.start(), *AGE_RANGE.end()),
            Field::Experience => {
                self.experience = step(
                    self.experience,
                    delta,
                    *EXPERIENCE_RANGE.start(),
                    *EXPERIENCE_RANGE.end(),
                )
            }
            Field::Gender => self.gender = cycle(self.gender, delta, Gender::ALL.len()),
            Field::Education => self.education = cycle(self.education, delta, Education::ALL.len()),
            Field::JobTitle => self.job_title = cycle(self.job_title, delta, self.job_titles.len()),
            Field::Predict => {}
        }

        if before != (self.age, self.experience, self.gender, self.education, self.job_title) {
            self.phase = Phase::Idle;
        }
    }

    /// The record the current control values describe.
    pub fn input(&self) -> RawInput {
        RawInput {
            age: self.age,
            experience: self.experience,
            gender: self.gender(),
            education: self.education(),
            job_title: self.job_title().map(String::from),
        }
    }

    /// Validates the current values.
    ///
    /// # Returns
    /// `true` when the form moved on to `Phase::Predicting` and
    /// [`FormState::predict`] should follow.
    pub fn begin_submit(&mut self) -> bool {
        self.phase = Phase::Validating;

        match self.input().validate() {
            Ok(()) => {
                self.phase = Phase::Predicting;
                true
            }
            Err(e) => {
                log::info!("submission rejected: {e}");
                self.phase = Phase::ShowingError(e.into());
                false
            }
        }
    }

    /// Runs the pipeline for the current values and records the outcome.
    ///
    /// Does nothing unless [`FormState::begin_submit`] accepted the values.
    pub fn predict(&mut self, bundle: &ArtifactBundle) {
        if self.phase != Phase::Predicting {
            return;
        }

        self.phase = match bundle.submit(&self.input()) {
            Ok(estimate) => Phase::ShowingResult(estimate),
            Err(e) => Phase::ShowingError(e),
        };
    }
}

fn step(value: u32, delta: i32, lo: u32, hi: u32) -> u32 {
    (i64::from(value) + i64::from(delta)).clamp(i64::from(lo), i64::from(hi)) as u32
}

fn cycle(index: usize, delta: i32, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let len = len as i64;
    (index as i64 + i64::from(delta)).rem_euclid(len) as usize
}

#[cfg(test)]
mod tests {
    use predictor::{Model, Scaler, ValidationError};

    use super::*;

    fn schema() -> FeatureSchema {
        FeatureSchema::new([
            "Age",
            "Years of Experience",
            "Job Title_Analyst",
            "Job Title_Software Engineer",
        ])
    }

    fn bundle() -> ArtifactBundle {
        ArtifactBundle::new(
            Model::Linear {
                coefficients: vec![1000.0, 2000.0, 0.0, 5000.0],
                intercept: 10_000.0,
            },
            Scaler::Identity,
            schema(),
        )
        .unwrap()
    }

    #[test]
    fn starts_with_defaults_and_preferred_title() {
        let form = FormState::new(&schema());
        assert_eq!(form.age(), 25);
        assert_eq!(form.experience(), 1);
        assert_eq!(form.gender(), Gender::Male);
        assert_eq!(form.education(), Education::HighSchool);
        assert_eq!(form.job_title(), Some("Software Engineer"));
        assert_eq!(form.phase(), &Phase::Idle);
    }

    #[test]
    fn focus_wraps_both_ways() {
        let mut form = FormState::new(&schema());
        form.focus_prev();
        assert_eq!(form.focus(), Field::Predict);
        form.focus_next();
        assert_eq!(form.focus(), Field::Age);
    }

    #[test]
    fn sliders_clamp_to_their_ranges() {
        let mut form = FormState::new(&schema());
        form.adjust(-100);
        assert_eq!(form.age(), 18);
        form.adjust(100);
        assert_eq!(form.age(), 60);

        form.focus_next();
        form.adjust(-PAGE_STEP);
        assert_eq!(form.experience(), 0);
        form.adjust(99);
        assert_eq!(form.experience(), 30);
    }

    #[test]
    fn selectors_wrap() {
        let mut form = FormState::new(&schema());
        form.focus_next();
        form.focus_next();
        form.adjust(-1);
        assert_eq!(form.gender(), Gender::Female);
        form.adjust(1);
        assert_eq!(form.gender(), Gender::Male);

        form.focus_next();
        form.adjust(-1);
        assert_eq!(form.education(), Education::NotSpecified);
    }

    #[test]
    fn no_job_titles_means_no_selection() {
        let mut form = FormState::new(&FeatureSchema::new(["Age"]));
        for _ in 0..4 {
            form.focus_next();
        }
        form.adjust(1);
        assert_eq!(form.job_title(), None);
        assert_eq!(form.input().job_title, None);
    }

    #[test]
    fn rejected_submission_never_predicts() {
        let mut form = FormState::new(&schema());
        form.adjust(-7); // age 18
        form.focus_next();
        form.adjust(5); // experience 6

        assert!(!form.begin_submit());
        assert_eq!(
            form.phase(),
            &Phase::ShowingError(SubmitError::Rejected(ValidationError::ExperienceTooHigh {
                age: 18,
                experience: 6
            }))
        );

        form.predict(&bundle());
        assert!(matches!(form.phase(), Phase::ShowingError(_)));
    }

    #[test]
    fn accepted_submission_shows_estimate_until_inputs_change() {
        let mut form = FormState::new(&schema());
        assert!(form.begin_submit());
        assert_eq!(form.phase(), &Phase::Predicting);

        form.predict(&bundle());
        // 25 * 1000 + 1 * 2000 + 5000 + 10000
        assert_eq!(
            form.phase(),
            &Phase::ShowingResult(SalaryEstimate::new(42_000.0))
        );

        form.adjust(1);
        assert_eq!(form.phase(), &Phase::Idle);
    }

    #[test]
    fn adjusting_the_button_keeps_the_result() {
        let mut form = FormState::new(&schema());
        form.begin_submit();
        form.predict(&bundle());

        form.focus_prev();
        form.adjust(1);
        assert!(matches!(form.phase(), Phase::ShowingResult(_)));
    }
}
