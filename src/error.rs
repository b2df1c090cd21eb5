use thiserror::Error;

/// Errors raised while loading configuration or ingesting remote pages.
/// The buffer operations themselves never fail.
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("config error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

pub type Result<T, E = FeedError> = std::result::Result<T, E>;
