use ndarray::{ArrayView1, Axis};
use serde::Deserialize;

use crate::PredictError;

/// A trained function from a scaled feature vector to one continuous value.
///
/// Implementations are pure: predicting never mutates the model, so the same
/// input always yields the same output.
pub trait Regressor: Send + Sync {
    /// Returns the number of features the model expects, if fixed.
    fn n_features(&self) -> Option<usize>;

    /// Computes the model output for a single scaled row.
    ///
    /// # Errors
    /// Returns `PredictError` if `x` does not fit the model.
    fn predict(&self, x: ArrayView1<f64>) -> Result<f64, PredictError>;
}

/// Leaf marker in the array-of-nodes tree layout.
const LEAF: i64 = -1;

/// A regression tree stored as parallel node arrays.
///
/// Node `i` is a leaf when `children_left[i] == -1`; otherwise the walk goes
/// to `children_left[i]` when `x[feature[i]] <= threshold[i]` and to
/// `children_right[i]` otherwise.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Tree {
    pub children_left: Vec<i64>,
    pub children_right: Vec<i64>,
    pub feature: Vec<i64>,
    pub threshold: Vec<f64>,
    pub value: Vec<f64>,
}

impl Tree {
    fn node_count(&self) -> usize {
        self.value.len()
    }

    /// Checks the node arrays describe a walkable tree.
    ///
    /// # Errors
    /// Returns a human-readable reason on the first structural defect.
    pub fn check(&self) -> Result<(), String> {
        let n = self.node_count();
        if n == 0 {
            return Err("tree has no nodes".into());
        }

        let lens = [
            ("children_left", self.children_left.len()),
            ("children_right", self.children_right.len()),
            ("feature", self.feature.len()),
            ("threshold", self.threshold.len()),
        ];
        if let Some((name, len)) = lens.into_iter().find(|&(_, len)| len != n) {
            return Err(format!("{name} has {len} entries, expected {n}"));
        }

        for i in 0..n {
            let (left, right) = (self.children_left[i], self.children_right[i]);
            if left == LEAF {
                if !self.value[i].is_finite() {
                    return Err(format!("leaf {i} holds a non-finite value"));
                }
                continue;
            }

            // Children always come after their parent, which rules out cycles.
            for child in [left, right] {
                if child <= i as i64 || child >= n as i64 {
                    return Err(format!("node {i} has invalid child {child}"));
                }
            }
            if self.feature[i] < 0 {
                return Err(format!("node {i} splits on negative feature"));
            }
            if self.threshold[i].is_nan() {
                return Err(format!("node {i} has a NaN threshold"));
            }
        }

        Ok(())
    }

    /// Walks the tree from the root to a leaf.
    ///
    /// The walk visits at most `node_count()` nodes, so a tree that skipped
    /// [`Tree::check`] fails instead of looping.
    ///
    /// # Errors
    /// Returns `PredictError::FeatureOutOfRange` if a split reads past `x`,
    /// and `PredictError::MalformedTree` if the walk leaves the node arrays
    /// or never reaches a leaf.
    pub fn predict(&self, x: ArrayView1<f64>) -> Result<f64, PredictError> {
        let mut node = 0;

        for _ in 0..self.node_count() {
            let malformed = PredictError::MalformedTree { node };
            let left = *self.children_left.get(node).ok_or(malformed.clone())?;
            if left == LEAF {
                return self.value.get(node).copied().ok_or(malformed);
            }

            let feature = self
                .feature
                .get(node)
                .and_then(|&f| usize::try_from(f).ok())
                .ok_or(malformed.clone())?;
            let value = *x.get(feature).ok_or(PredictError::FeatureOutOfRange {
                feature,
                len: x.len(),
            })?;
            let threshold = *self.threshold.get(node).ok_or(malformed.clone())?;

            let child = if value <= threshold {
                left
            } else {
                *self.children_right.get(node).ok_or(malformed.clone())?
            };
            node = usize::try_from(child).map_err(|_| malformed)?;
        }

        Err(PredictError::MalformedTree { node })
    }
}

/// The model artifacts this crate understands.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Model {
    /// `coefficients . x + intercept`
    Linear {
        coefficients: Vec<f64>,
        intercept: f64,
    },
    DecisionTree {
        tree: Tree,
    },
    /// Mean of the trees' outputs.
    RandomForest {
        trees: Vec<Tree>,
    },
    /// `init + learning_rate * sum(trees)`
    GradientBoosting {
        init: f64,
        learning_rate: f64,
        trees: Vec<Tree>,
    },
}

impl Model {
    /// A short name for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Model::Linear { .. } => "linear",
            Model::DecisionTree { .. } => "decision_tree",
            Model::RandomForest { .. } => "random_forest",
            Model::GradientBoosting { .. } => "gradient_boosting",
        }
    }

    /// Checks the model parameters are usable.
    ///
    /// # Errors
    /// Returns a human-readable reason on the first defect found.
    pub fn check(&self) -> Result<(), String> {
        match self {
            Model::Linear {
                coefficients,
                intercept,
            } => {
                if coefficients.iter().any(|c| !c.is_finite()) || !intercept.is_finite() {
                    return Err("linear model parameters must be finite".into());
                }
                Ok(())
            }
            Model::DecisionTree { tree } => tree.check(),
            Model::RandomForest { trees } => check_trees(trees),
            Model::GradientBoosting {
                init,
                learning_rate,
                trees,
            } => {
                if !init.is_finite() || !learning_rate.is_finite() {
                    return Err("boosting init and learning_rate must be finite".into());
                }
                check_trees(trees)
            }
        }
    }
}

fn check_trees(trees: &[Tree]) -> Result<(), String> {
    if trees.is_empty() {
        return Err("ensemble has no trees".into());
    }
    trees
        .iter()
        .enumerate()
        .try_for_each(|(i, t)| t.check().map_err(|e| format!("tree {i}: {e}")))
}

fn sum_trees(trees: &[Tree], x: ArrayView1<f64>) -> Result<f64, PredictError> {
    trees.iter().map(|t| t.predict(x)).sum()
}

impl Regressor for Model {
    fn n_features(&self) -> Option<usize> {
        match self {
            Model::Linear { coefficients, .. } => Some(coefficients.len()),
            _ => None,
        }
    }

    fn predict(&self, x: ArrayView1<f64>) -> Result<f64, PredictError> {
        if let Some(expected) = self.n_features() {
            if expected != x.len() {
                return Err(PredictError::ShapeMismatch {
                    what: "model",
                    got: x.len(),
                    expected,
                });
            }
        }

        let y = match self {
            Model::Linear {
                coefficients,
                intercept,
            } => {
                let w = ArrayView1::from(coefficients.as_slice());
                w.dot(&x) + intercept
            }
            Model::DecisionTree { tree } => tree.predict(x)?,
            Model::RandomForest { trees } => sum_trees(trees, x)? / trees.len() as f64,
            Model::GradientBoosting {
                init,
                learning_rate,
                trees,
            } => init + learning_rate * sum_trees(trees, x)?,
        };

        if !y.is_finite() {
            return Err(PredictError::NonFinite { what: "model" });
        }

        Ok(y)
    }
}

/// Scores every row of `rows`, mirroring batch prediction.
///
/// # Errors
/// Returns the first row's error.
pub fn predict_rows<R: Regressor + ?Sized>(
    model: &R,
    rows: ndarray::ArrayView2<f64>,
) -> Result<Vec<f64>, PredictError> {
    rows.axis_iter(Axis(0)).map(|row| model.predict(row)).collect()
}
