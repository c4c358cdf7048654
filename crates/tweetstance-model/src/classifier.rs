use serde::{Deserialize, Serialize};

use crate::vectorizer::FeatureVector;

/// A pre-fit classifier artifact.
///
/// Three families cover the five bundled models: multinomial naive Bayes,
/// linear decision functions (logistic regression and linear SVC), and
/// kernel SVMs (polynomial and RBF). Every family scores one class per row
/// and predicts by argmax, so adding a family means adding a variant here
/// and nowhere else.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Classifier {
    MultinomialNb(MultinomialNb),
    Linear(LinearModel),
    KernelSvm(KernelSvm),
}

/// Multinomial naive Bayes: log priors plus per-class feature log
/// likelihoods.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MultinomialNb {
    pub classes: Vec<i8>,
    pub class_log_prior: Vec<f32>,
    pub feature_log_prob: Vec<Vec<f32>>,
}

/// One-vs-rest linear decision functions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearModel {
    pub classes: Vec<i8>,
    pub coef: Vec<Vec<f32>>,
    pub intercept: Vec<f32>,
}

/// One-vs-rest kernel SVM over a shared support-vector set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KernelSvm {
    pub classes: Vec<i8>,
    pub kernel: Kernel,
    pub support_vectors: Vec<Vec<f32>>,
    pub dual_coef: Vec<Vec<f32>>,
    pub intercept: Vec<f32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Kernel {
    Poly { gamma: f32, coef0: f32, degree: i32 },
    Rbf { gamma: f32 },
}

impl Kernel {
    fn apply(self, support_vector: &[f32], features: &FeatureVector) -> f32 {
        match self {
            Kernel::Poly {
                gamma,
                coef0,
                degree,
            } => (gamma * features.dot(support_vector) + coef0).powi(degree),
            Kernel::Rbf { gamma } => {
                // ||x - sv||^2 = ||x||^2 - 2 x.sv + ||sv||^2
                let sv_norm_sq: f32 = support_vector.iter().map(|v| v * v).sum();
                let dist_sq =
                    features.norm_sq() - 2.0 * features.dot(support_vector) + sv_norm_sq;
                (-gamma * dist_sq.max(0.0)).exp()
            }
        }
    }
}

impl Classifier {
    /// Class codes in artifact order.
    #[must_use]
    pub fn classes(&self) -> &[i8] {
        match self {
            Classifier::MultinomialNb(nb) => &nb.classes,
            Classifier::Linear(model) => &model.classes,
            Classifier::KernelSvm(model) => &model.classes,
        }
    }

    /// Human-readable family name, for diagnostics.
    #[must_use]
    pub fn family(&self) -> &'static str {
        match self {
            Classifier::MultinomialNb(_) => "multinomial_nb",
            Classifier::Linear(_) => "linear",
            Classifier::KernelSvm(_) => "kernel_svm",
        }
    }

    /// Feature width the decision functions expect.
    #[must_use]
    pub fn n_features(&self) -> usize {
        match self {
            Classifier::MultinomialNb(nb) => nb.feature_log_prob.first().map_or(0, Vec::len),
            Classifier::Linear(model) => model.coef.first().map_or(0, Vec::len),
            Classifier::KernelSvm(model) => model.support_vectors.first().map_or(0, Vec::len),
        }
    }

    /// Per-class decision scores, in `classes` order.
    #[must_use]
    pub fn decision_scores(&self, features: &FeatureVector) -> Vec<f32> {
        match self {
            Classifier::MultinomialNb(nb) => nb
                .class_log_prior
                .iter()
                .zip(&nb.feature_log_prob)
                .map(|(prior, row)| prior + features.dot(row))
                .collect(),
            Classifier::Linear(model) => model
                .coef
                .iter()
                .zip(&model.intercept)
                .map(|(row, intercept)| features.dot(row) + intercept)
                .collect(),
            Classifier::KernelSvm(model) => {
                let kernel_row: Vec<f32> = model
                    .support_vectors
                    .iter()
                    .map(|sv| model.kernel.apply(sv, features))
                    .collect();
                model
                    .dual_coef
                    .iter()
                    .zip(&model.intercept)
                    .map(|(alphas, intercept)| {
                        let score: f32 =
                            alphas.iter().zip(&kernel_row).map(|(a, k)| a * k).sum();
                        score + intercept
                    })
                    .collect()
            }
        }
    }

    /// Predict the sentiment code for one feature vector.
    ///
    /// Ties resolve to the earliest class in the artifact's `classes` order.
    ///
    /// # Panics
    ///
    /// Panics if the artifact declares no classes; the loader rejects such
    /// artifacts before they reach here.
    #[must_use]
    pub fn predict(&self, features: &FeatureVector) -> i8 {
        let scores = self.decision_scores(features);
        let mut best = 0;
        for (i, score) in scores.iter().enumerate().skip(1) {
            if *score > scores[best] {
                best = i;
            }
        }
        self.classes()[best]
    }

    /// Structural checks applied after deserializing the artifact.
    pub(crate) fn validate(&self) -> Result<(), String> {
        let classes = self.classes();
        if classes.is_empty() {
            return Err("classes list is empty".to_string());
        }
        for (i, code) in classes.iter().enumerate() {
            if classes[..i].contains(code) {
                return Err(format!("duplicate class code {code}"));
            }
        }

        match self {
            Classifier::MultinomialNb(nb) => {
                if nb.class_log_prior.len() != classes.len()
                    || nb.feature_log_prob.len() != classes.len()
                {
                    return Err("per-class tables do not match the classes list".to_string());
                }
                ensure_rectangular(&nb.feature_log_prob, "feature_log_prob")?;
            }
            Classifier::Linear(model) => {
                if model.coef.len() != classes.len() || model.intercept.len() != classes.len() {
                    return Err("per-class tables do not match the classes list".to_string());
                }
                ensure_rectangular(&model.coef, "coef")?;
            }
            Classifier::KernelSvm(model) => {
                if model.dual_coef.len() != classes.len()
                    || model.intercept.len() != classes.len()
                {
                    return Err("per-class tables do not match the classes list".to_string());
                }
                if model.support_vectors.is_empty() {
                    return Err("support_vectors is empty".to_string());
                }
                ensure_rectangular(&model.support_vectors, "support_vectors")?;
                for (i, alphas) in model.dual_coef.iter().enumerate() {
                    if alphas.len() != model.support_vectors.len() {
                        return Err(format!(
                            "dual_coef row {i} has {} entries for {} support vectors",
                            alphas.len(),
                            model.support_vectors.len()
                        ));
                    }
                }
                if let Kernel::Poly { degree, .. } = model.kernel {
                    if !(1..=10).contains(&degree) {
                        return Err(format!("unsupported polynomial degree {degree}"));
                    }
                }
            }
        }
        Ok(())
    }
}

fn ensure_rectangular(rows: &[Vec<f32>], name: &str) -> Result<(), String> {
    let Some(first) = rows.first() else {
        return Ok(());
    };
    if first.is_empty() {
        return Err(format!("{name} rows are empty"));
    }
    for (i, row) in rows.iter().enumerate().skip(1) {
        if row.len() != first.len() {
            return Err(format!(
                "{name} row {i} has width {}, row 0 has width {}",
                row.len(),
                first.len()
            ));
        }
    }
    Ok(())
}
