use thiserror::Error;

pub type Result<T> = std::result::Result<T, KataError>;

#[derive(Error, Debug)]
pub enum KataError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("API error: {0}")]
    Api(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<reqwest::Error> for KataError {
    fn from(error: reqwest::Error) -> Self {
        KataError::Http(error.to_string())
    }
}

impl From<serde_json::Error> for KataError {
    fn from(error: serde_json::Error) -> Self {
        KataError::Parse(error.to_string())
    }
}
