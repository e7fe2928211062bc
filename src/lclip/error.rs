use thiserror::Error;

#[derive(Error, Debug)]
pub enum LclipError {
    #[error("Could not determine the home directory")]
    HomeDir,

    #[error("Label not found: {0}")]
    LabelNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),
}

pub type Result<T> = std::result::Result<T, LclipError>;
