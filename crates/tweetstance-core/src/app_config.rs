use std::net::SocketAddr;
use std::path::PathBuf;

/// Runtime configuration for the tweetstance binaries.
///
/// Everything has a default; the app is runnable with no environment set up
/// beyond a populated resources directory. Which files live inside
/// `resources_dir` is owned by the crates that read them.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub log_level: String,
    pub resources_dir: PathBuf,
}
