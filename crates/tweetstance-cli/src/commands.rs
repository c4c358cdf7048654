//! Command handlers for the tweetstance CLI.

use std::str::FromStr;

use tweetstance_core::AppConfig;
use tweetstance_dataset::{charts, TweetDataset, DATASET_FILE};
use tweetstance_model::{ArtifactStore, ModelChoice, VECTORIZER_FILE};

const TOP_WORDS: usize = 15;

/// Classify `text` with the model labeled `model` and print the verdict.
pub(crate) fn run_classify(config: &AppConfig, model: &str, text: &str) -> anyhow::Result<()> {
    let choice = ModelChoice::from_str(model)?;
    let store = ArtifactStore::open(&config.resources_dir)?;
    let prediction = store.classify(choice, text)?;

    println!("model:     {}", prediction.model);
    println!("sentiment: {}", prediction.sentiment);
    println!("           {}", prediction.sentiment.description());
    Ok(())
}

/// List the bundled model choices and the artifact file each one reads.
pub(crate) fn run_models() {
    for choice in ModelChoice::ALL {
        println!("{:<22} {}", choice.label(), choice.artifact_file());
    }
}

/// Print label counts, shares, and the most frequent message words.
pub(crate) fn run_summary(config: &AppConfig) -> anyhow::Result<()> {
    let dataset = TweetDataset::load(&config.resources_dir.join(DATASET_FILE))?;
    println!("{} records", dataset.len());
    println!();

    let counts = charts::label_counts(&dataset);
    let shares = charts::label_shares(&dataset);
    for (count, share) in counts.iter().zip(&shares) {
        println!(
            "{:<8} {:>5}  {:>5.1}%",
            count.sentiment.name(),
            count.count,
            share.percent
        );
    }

    println!();
    println!("top words:");
    for word in charts::word_frequencies(&dataset, TOP_WORDS) {
        println!("{:<16} {:>4}", word.word, word.count);
    }
    Ok(())
}

/// Verify every artifact the app needs: the shared vectorizer, all five
/// classifiers, and the dataset. Reports each one, then fails if any were
/// broken.
pub(crate) fn run_check(config: &AppConfig) -> anyhow::Result<()> {
    let mut failures = 0_usize;

    match ArtifactStore::open(&config.resources_dir) {
        Ok(store) => {
            println!(
                "{VECTORIZER_FILE:<22} ok ({} features)",
                store.vectorizer().width()
            );
            for choice in ModelChoice::ALL {
                match store.load_classifier(choice) {
                    Ok(classifier) => {
                        let verdict = if classifier.n_features() == store.vectorizer().width() {
                            "ok"
                        } else {
                            failures += 1;
                            "feature width mismatch"
                        };
                        println!(
                            "{:<22} {verdict} ({}, {} classes)",
                            choice.artifact_file(),
                            classifier.family(),
                            classifier.classes().len()
                        );
                    }
                    Err(e) => {
                        failures += 1;
                        println!("{:<22} failed: {e}", choice.artifact_file());
                    }
                }
            }
        }
        Err(e) => {
            failures += 1;
            println!("{VECTORIZER_FILE:<22} failed: {e}");
        }
    }

    match TweetDataset::load(&config.resources_dir.join(DATASET_FILE)) {
        Ok(dataset) => println!("{DATASET_FILE:<22} ok ({} records)", dataset.len()),
        Err(e) => {
            failures += 1;
            println!("{DATASET_FILE:<22} failed: {e}");
        }
    }

    if failures > 0 {
        anyhow::bail!("{failures} artifact(s) failed to load");
    }
    println!("all artifacts ok");
    Ok(())
}
