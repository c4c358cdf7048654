use std::path::Path;

use serde::Deserialize;
use tweetstance_core::Sentiment;

use crate::error::DatasetError;

/// File name of the dataset inside the resources directory.
pub const DATASET_FILE: &str = "train.csv";

/// One labeled tweet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TweetRecord {
    pub sentiment: Sentiment,
    pub message: String,
    pub tweet_id: u64,
}

/// Row shape of the CSV file. Column names match the file header.
#[derive(Debug, Deserialize)]
struct RawRecord {
    sentiment: i8,
    message: String,
    tweetid: u64,
}

/// The full dataset, loaded once at startup and shared read-only.
#[derive(Debug, Clone)]
pub struct TweetDataset {
    records: Vec<TweetRecord>,
}

impl TweetDataset {
    /// Load the dataset from a CSV file with `sentiment,message,tweetid`
    /// columns.
    ///
    /// # Errors
    ///
    /// Returns `DatasetError` if the file cannot be read, a row fails to
    /// deserialize, or a sentiment code maps to no label.
    pub fn load(path: &Path) -> Result<Self, DatasetError> {
        let mut reader = csv::Reader::from_path(path).map_err(|source| DatasetError::Read {
            path: path.display().to_string(),
            source,
        })?;

        let mut records = Vec::new();
        for (index, row) in reader.deserialize::<RawRecord>().enumerate() {
            let raw = row.map_err(|source| DatasetError::Read {
                path: path.display().to_string(),
                source,
            })?;
            let sentiment =
                Sentiment::from_code(raw.sentiment).map_err(|_| DatasetError::UnknownLabel {
                    path: path.display().to_string(),
                    record: index + 1,
                    code: raw.sentiment,
                })?;
            records.push(TweetRecord {
                sentiment,
                message: raw.message,
                tweet_id: raw.tweetid,
            });
        }
        Ok(Self { records })
    }

    /// Build a dataset from already-parsed records.
    #[must_use]
    pub fn from_records(records: Vec<TweetRecord>) -> Self {
        Self { records }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records, in file order.
    #[must_use]
    pub fn records(&self) -> &[TweetRecord] {
        &self.records
    }

    /// The first `n` records, or every record when the dataset is shorter.
    #[must_use]
    pub fn head(&self, n: usize) -> &[TweetRecord] {
        &self.records[..n.min(self.records.len())]
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    const SAMPLE: &str = "\
sentiment,message,tweetid
1,\"Climate change is real, act now\",1001
-1,Global warming is a hoax,1002
2,Scientists publish new climate report,1003
";

    fn write_csv(content: &str) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DATASET_FILE);
        fs::write(&path, content).unwrap();
        (dir, path)
    }

    #[test]
    fn loads_rows_in_file_order() {
        let (_dir, path) = write_csv(SAMPLE);
        let dataset = TweetDataset::load(&path).unwrap();
        assert_eq!(dataset.len(), 3);
        assert_eq!(dataset.records()[0].sentiment, Sentiment::Pro);
        assert_eq!(
            dataset.records()[0].message,
            "Climate change is real, act now"
        );
        assert_eq!(dataset.records()[2].tweet_id, 1003);
    }

    #[test]
    fn head_clamps_to_the_dataset_length() {
        let (_dir, path) = write_csv(SAMPLE);
        let dataset = TweetDataset::load(&path).unwrap();
        assert_eq!(dataset.head(2).len(), 2);
        assert_eq!(dataset.head(2)[1].sentiment, Sentiment::Anti);
        assert_eq!(dataset.head(10).len(), 3);
        assert!(dataset.head(0).is_empty());
    }

    #[test]
    fn unknown_sentiment_codes_fail_with_the_record_number() {
        let (_dir, path) = write_csv("sentiment,message,tweetid\n5,nonsense,42\n");
        let err = TweetDataset::load(&path).unwrap_err();
        assert!(
            matches!(err, DatasetError::UnknownLabel { record: 1, code: 5, .. }),
            "got: {err}"
        );
    }

    #[test]
    fn missing_file_reports_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let err = TweetDataset::load(&dir.path().join("nope.csv")).unwrap_err();
        assert!(err.to_string().contains("nope.csv"));
    }

    #[test]
    fn malformed_rows_are_read_errors() {
        let (_dir, path) = write_csv("sentiment,message,tweetid\nnot-a-number,hello,1\n");
        let err = TweetDataset::load(&path).unwrap_err();
        assert!(matches!(err, DatasetError::Read { .. }), "got: {err}");
    }
}
