/// Error types for OPC package operations
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OpcError {
    #[error("Invalid part name: {0}")]
    InvalidPartName(String),

    #[error("XML generation error: {0}")]
    Xml(String),

    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<std::fmt::Error> for OpcError {
    fn from(err: std::fmt::Error) -> Self {
        OpcError::Xml(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, OpcError>;
