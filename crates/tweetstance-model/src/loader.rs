//! Deserialize persisted artifacts into typed, validated handles.

use std::path::Path;

use serde::de::DeserializeOwned;

use crate::classifier::Classifier;
use crate::error::ModelError;
use crate::vectorizer::TfidfVectorizer;

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, ModelError> {
    let content = std::fs::read_to_string(path).map_err(|e| ModelError::io(path, e))?;
    serde_json::from_str(&content).map_err(|e| ModelError::parse(path, e))
}

/// Load and validate the shared vectorizer artifact.
///
/// # Errors
///
/// Returns `ModelError` if the file is unreadable, is not valid JSON, or
/// fails structural validation.
pub fn load_vectorizer(path: &Path) -> Result<TfidfVectorizer, ModelError> {
    let vectorizer: TfidfVectorizer = read_json(path)?;
    vectorizer
        .validate()
        .map_err(|reason| ModelError::invalid(path, reason))?;
    Ok(vectorizer)
}

/// Load and validate one classifier artifact.
///
/// # Errors
///
/// Returns `ModelError` if the file is unreadable, is not valid JSON, or
/// fails structural validation.
pub fn load_classifier(path: &Path) -> Result<Classifier, ModelError> {
    let classifier: Classifier = read_json(path)?;
    classifier
        .validate()
        .map_err(|reason| ModelError::invalid(path, reason))?;
    Ok(classifier)
}
