use crate::input::InputError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PhonebookError {
    #[error("Record not found: {}", .0.display())]
    RecordNotFound(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),

    #[error(transparent)]
    Input(#[from] InputError),
}

pub type Result<T> = std::result::Result<T, PhonebookError>;
