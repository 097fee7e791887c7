use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfabError {
    #[error("channel '{0}' not found")]
    ChannelNotFound(String),

    #[error("unknown locale '{0}'")]
    UnknownLocale(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml_ng::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, ConfabError>;
