//! The labeled tweet dataset behind the exploration page.
//!
//! Loads the static CSV shipped in the resources directory into memory once
//! and derives the aggregates the charts need: label counts, label shares,
//! and stopword-filtered word frequencies.

pub mod charts;
pub mod error;

mod dataset;

pub use dataset::{TweetDataset, TweetRecord, DATASET_FILE};
pub use error::DatasetError;
