use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::ModelError;

/// The closed set of models the demo offers.
///
/// Labels and artifact stems are kept exactly as the bundle shipped them,
/// misspellings included, so saved links and retrained drop-in artifacts
/// keep working. Dispatch is this table and nothing else: free-form model
/// names are rejected, never mapped to a fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModelChoice {
    NaiveBayes,
    LogisticRegression,
    SvcLinear,
    SvcPoly,
    SvcRbf,
}

impl ModelChoice {
    /// Every supported model, in menu order.
    pub const ALL: [ModelChoice; 5] = [
        ModelChoice::NaiveBayes,
        ModelChoice::LogisticRegression,
        ModelChoice::SvcLinear,
        ModelChoice::SvcPoly,
        ModelChoice::SvcRbf,
    ];

    /// Label shown in the model chooser, verbatim from the bundle.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            ModelChoice::NaiveBayes => "Naive-Baise",
            ModelChoice::LogisticRegression => "Logistics Regression",
            ModelChoice::SvcLinear => "SVC-Linear",
            ModelChoice::SvcPoly => "SVC-Poly",
            ModelChoice::SvcRbf => "SVC-Gemma",
        }
    }

    /// File name of this model's artifact inside the resources directory.
    #[must_use]
    pub fn artifact_file(self) -> &'static str {
        match self {
            ModelChoice::NaiveBayes => "nb.json",
            ModelChoice::LogisticRegression => "model_logistic.json",
            ModelChoice::SvcLinear => "model_svc.json",
            ModelChoice::SvcPoly => "svc_poly.json",
            ModelChoice::SvcRbf => "svc_gemma.json",
        }
    }

    /// Full artifact path under `resources_dir`.
    #[must_use]
    pub fn artifact_path(self, resources_dir: &Path) -> PathBuf {
        resources_dir.join(self.artifact_file())
    }
}

impl FromStr for ModelChoice {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|choice| choice.label() == s)
            .ok_or_else(|| ModelError::UnknownModel(s.to_string()))
    }
}

impl std::fmt::Display for ModelChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn every_label_parses_back_to_its_choice() {
        for choice in ModelChoice::ALL {
            assert_eq!(choice.label().parse::<ModelChoice>().unwrap(), choice);
        }
    }

    #[test]
    fn labels_match_the_bundle_verbatim() {
        let labels: Vec<_> = ModelChoice::ALL.iter().map(|c| c.label()).collect();
        assert_eq!(
            labels,
            vec![
                "Naive-Baise",
                "Logistics Regression",
                "SVC-Linear",
                "SVC-Poly",
                "SVC-Gemma",
            ]
        );
    }

    #[test]
    fn unknown_names_are_rejected_not_defaulted() {
        for name in ["Naive Bayes", "naive-baise", "", "SVC-Sigmoid"] {
            let err = name.parse::<ModelChoice>().unwrap_err();
            assert!(matches!(err, ModelError::UnknownModel(_)), "got: {err}");
        }
    }

    #[test]
    fn each_choice_has_a_distinct_artifact() {
        let files: HashSet<_> = ModelChoice::ALL.iter().map(|c| c.artifact_file()).collect();
        assert_eq!(files.len(), ModelChoice::ALL.len());
    }

    #[test]
    fn artifact_paths_live_under_the_resources_dir() {
        let path = ModelChoice::NaiveBayes.artifact_path(Path::new("/srv/resources"));
        assert_eq!(path, PathBuf::from("/srv/resources/nb.json"));
    }
}
