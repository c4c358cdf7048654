use std::path::{Path, PathBuf};

use tweetstance_core::Sentiment;

use crate::classifier::Classifier;
use crate::error::ModelError;
use crate::loader;
use crate::registry::ModelChoice;
use crate::vectorizer::TfidfVectorizer;

/// File name of the shared vectorizer artifact inside the resources
/// directory.
pub const VECTORIZER_FILE: &str = "vectorizer.json";

/// Handle to the artifact bundle.
///
/// Opening the store reads the shared vectorizer exactly once; it is never
/// reloaded for the lifetime of the store. Classifier artifacts are read
/// from disk on every call, so retrained files dropped into the resources
/// directory take effect on the next request.
#[derive(Debug, Clone)]
pub struct ArtifactStore {
    resources_dir: PathBuf,
    vectorizer: TfidfVectorizer,
}

/// Outcome of one classification request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Prediction {
    pub model: ModelChoice,
    pub sentiment: Sentiment,
}

impl ArtifactStore {
    /// Open the store rooted at `resources_dir`, loading the shared
    /// vectorizer.
    ///
    /// # Errors
    ///
    /// Returns `ModelError` if the vectorizer artifact is missing or
    /// malformed. Classifier artifacts are not touched here; a broken one
    /// only fails the requests that pick it.
    pub fn open(resources_dir: impl Into<PathBuf>) -> Result<Self, ModelError> {
        let resources_dir = resources_dir.into();
        let vectorizer = loader::load_vectorizer(&resources_dir.join(VECTORIZER_FILE))?;
        Ok(Self {
            resources_dir,
            vectorizer,
        })
    }

    /// The shared, read-only vectorizer.
    #[must_use]
    pub fn vectorizer(&self) -> &TfidfVectorizer {
        &self.vectorizer
    }

    /// Directory the store reads classifier artifacts from.
    #[must_use]
    pub fn resources_dir(&self) -> &Path {
        &self.resources_dir
    }

    /// Load the classifier artifact for `choice` from disk.
    ///
    /// # Errors
    ///
    /// Returns `ModelError` if the artifact is missing, unreadable, or
    /// structurally invalid.
    pub fn load_classifier(&self, choice: ModelChoice) -> Result<Classifier, ModelError> {
        loader::load_classifier(&choice.artifact_path(&self.resources_dir))
    }

    /// Classify free text with the chosen model.
    ///
    /// Loads the classifier, checks its feature width against the
    /// vectorizer, transforms the text, and maps the predicted code to a
    /// sentiment label.
    ///
    /// # Errors
    ///
    /// Returns `ModelError` if the classifier artifact cannot be loaded, was
    /// trained against a different feature width, or predicts a code outside
    /// the label table.
    pub fn classify(&self, choice: ModelChoice, text: &str) -> Result<Prediction, ModelError> {
        let classifier = self.load_classifier(choice)?;

        let expected = classifier.n_features();
        let found = self.vectorizer.width();
        if expected != found {
            return Err(ModelError::DimensionMismatch {
                path: choice.artifact_file().to_string(),
                expected,
                found,
            });
        }

        let features = self.vectorizer.transform(text);
        let code = classifier.predict(&features);
        let sentiment = Sentiment::from_code(code).map_err(|_| ModelError::UnmappedLabel {
            path: choice.artifact_file().to_string(),
            code,
        })?;

        Ok(Prediction {
            model: choice,
            sentiment,
        })
    }
}
