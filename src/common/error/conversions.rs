//! Error conversion implementations.
//!
//! This module contains From trait implementations to convert from subsystem
//! error types to the unified Error type.

use super::types::Error;
use crate::ooxml::opc::error::OpcError;
use crate::wizard::{GenerationError, WizardError};

impl From<OpcError> for Error {
    fn from(err: OpcError) -> Self {
        match err {
            OpcError::Io(e) => Error::Io(e),
            OpcError::Zip(e) => Error::ZipError(e.to_string()),
            OpcError::Xml(s) => Error::XmlError(s),
            OpcError::InvalidPartName(s) => Error::Other(format!("invalid part name: {s}")),
        }
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<std::fmt::Error> for Error {
    fn from(err: std::fmt::Error) -> Self {
        Error::XmlError(err.to_string())
    }
}

impl From<WizardError> for Error {
    fn from(err: WizardError) -> Self {
        Error::Wizard(err.to_string())
    }
}

impl From<GenerationError> for Error {
    fn from(err: GenerationError) -> Self {
        Error::Generation(err.to_string())
    }
}
