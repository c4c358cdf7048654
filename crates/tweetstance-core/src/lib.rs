//! Shared domain types and configuration for tweetstance.
//!
//! Holds the sentiment label table used by every other crate and the
//! environment-driven application configuration.

mod app_config;
mod config;
mod label;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use label::Sentiment;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown sentiment code: {0}")]
    UnknownSentimentCode(i8),
}
