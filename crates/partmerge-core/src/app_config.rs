use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Runtime settings for the CLI and any embedding service.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    /// `tracing` filter directive, e.g. `"info"` or `"partmerge_catalog=debug"`.
    pub log_level: String,
    /// Local path of the ITL CSV feed (placed there by the FTP sync job).
    pub feed_path: PathBuf,
    /// Maximum number of rows the `search` command prints.
    pub search_limit: usize,
}
