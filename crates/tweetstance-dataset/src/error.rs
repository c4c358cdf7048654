use thiserror::Error;

/// Errors raised while loading the tweet dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read dataset {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: csv::Error,
    },

    #[error("dataset {path}, record {record}: unknown sentiment code {code}")]
    UnknownLabel {
        path: String,
        record: usize,
        code: i8,
    },
}
