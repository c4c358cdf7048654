use std::path::PathBuf;

use tweetstance_core::AppConfig;
use tweetstance_dataset::{TweetDataset, DATASET_FILE};
use tweetstance_model::ArtifactStore;

/// Everything the pages need, loaded once at startup.
///
/// The context never changes after `initialise`: the vectorizer and the
/// dataset are read here and never reloaded. Classifier artifacts stay on
/// disk and are read per request by the store. Handlers share one context
/// behind an `Arc`.
#[derive(Debug)]
pub struct AppContext {
    pub config: AppConfig,
    pub store: ArtifactStore,
    pub dataset: TweetDataset,
}

impl AppContext {
    /// Load the startup artifacts from the configured resources directory.
    ///
    /// # Errors
    ///
    /// Fails when the vectorizer or the dataset is missing or malformed;
    /// the server refuses to start rather than serve broken pages. A broken
    /// classifier artifact is not checked here and only fails the requests
    /// that pick it.
    pub fn initialise(config: AppConfig) -> anyhow::Result<Self> {
        let store = ArtifactStore::open(&config.resources_dir)?;
        let dataset = TweetDataset::load(&config.resources_dir.join(DATASET_FILE))?;
        Ok(Self {
            config,
            store,
            dataset,
        })
    }

    /// Directory the portrait images are served from.
    #[must_use]
    pub fn images_dir(&self) -> PathBuf {
        self.config.resources_dir.join("img")
    }
}
