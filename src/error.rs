use thiserror::Error;

pub type Result<T> = std::result::Result<T, EmbedError>;

#[derive(Debug, Error)]
pub enum EmbedError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config file: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("invalid height attribute {value:?}: expected a positive integer")]
    InvalidHeight { value: String },

    #[error("invalid provider pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    #[error("warm-up request failed: {0}")]
    Http(#[from] reqwest::Error),
}
