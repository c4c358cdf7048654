//! Pre-trained model bundle for climate-sentiment classification.
//!
//! The bundle is one shared TF-IDF vectorizer plus five independently
//! trained classifiers, each persisted as a JSON artifact. [`ArtifactStore`]
//! loads the vectorizer once at startup and re-reads classifier artifacts
//! per request, so a swapped classifier file takes effect without a restart.

pub mod classifier;
pub mod error;
pub mod registry;
pub mod store;
pub mod vectorizer;

mod loader;

pub use classifier::Classifier;
pub use error::ModelError;
pub use loader::{load_classifier, load_vectorizer};
pub use registry::ModelChoice;
pub use store::{ArtifactStore, Prediction, VECTORIZER_FILE};
pub use vectorizer::TfidfVectorizer;
