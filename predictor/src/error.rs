use std::{error::Error, fmt, io, path::PathBuf};

/// Failures while reading the model artifacts from disk.
///
/// Any of these is terminal for the session: the remedy is to place valid
/// artifact files where the loader expects them.
#[derive(Debug)]
pub enum ArtifactError {
    /// The file could not be read.
    Io { path: PathBuf, source: io::Error },

    /// The file was read but is not valid JSON for its artifact kind.
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// The file parsed but its contents are structurally unusable.
    Invalid { path: PathBuf, reason: String },
}

impl fmt::Display for ArtifactError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "cannot read '{}': {source}", path.display()),
            Self::Parse { path, source } => {
                write!(f, "cannot parse '{}': {source}", path.display())
            }
            Self::Invalid { path, reason } => {
                write!(f, "corrupt artifact '{}': {reason}", path.display())
            }
        }
    }
}

impl Error for ArtifactError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
            Self::Invalid { .. } => None,
        }
    }
}

/// The single business rule of the form was violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// More years of experience than years since turning 16.
    ExperienceTooHigh { age: u32, experience: u32 },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExperienceTooHigh { .. } => {
                write!(f, "Experience years seem too high for the given age!")
            }
        }
    }
}

impl Error for ValidationError {}

/// Errors raised while encoding, scaling or scoring a validated record.
#[derive(Debug, Clone, PartialEq)]
pub enum PredictError {
    /// A shape invariant was violated (e.g. scaler width vs. feature count).
    ShapeMismatch {
        /// Which artifact disagreed with the feature vector.
        what: &'static str,
        /// Observed value.
        got: usize,
        /// Expected value.
        expected: usize,
    },

    /// A tree node referenced a feature outside the input vector.
    FeatureOutOfRange { feature: usize, len: usize },

    /// A tree walk left the node arrays or never reached a leaf.
    MalformedTree { node: usize },

    /// A stage produced NaN or infinity.
    NonFinite { what: &'static str },
}

impl fmt::Display for PredictError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ShapeMismatch {
                what,
                got,
                expected,
            } => write!(
                f,
                "shape mismatch for {what}: got {got} features, expected {expected}"
            ),
            Self::FeatureOutOfRange { feature, len } => write!(
                f,
                "tree split on feature {feature} but the input has {len} features"
            ),
            Self::MalformedTree { node } => {
                write!(f, "tree walk broke at node {node} without reaching a leaf")
            }
            Self::NonFinite { what } => write!(f, "{what} produced a non-finite value"),
        }
    }
}

impl Error for PredictError {}

/// Any reason a submission did not produce an estimate.
///
/// Both variants are recoverable: the user may adjust the inputs and submit
/// again.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitError {
    Rejected(ValidationError),
    Failed(PredictError),
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rejected(e) => write!(f, "{e}"),
            Self::Failed(e) => write!(f, "Something went wrong during prediction. ({e})"),
        }
    }
}

impl Error for SubmitError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Rejected(e) => Some(e),
            Self::Failed(e) => Some(e),
        }
    }
}

impl From<ValidationError> for SubmitError {
    fn from(value: ValidationError) -> Self {
        Self::Rejected(value)
    }
}

impl From<PredictError> for SubmitError {
    fn from(value: PredictError) -> Self {
        Self::Failed(value)
    }
}
