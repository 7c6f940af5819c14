//! Request building and decoding errors

use thiserror::Error;

use crate::error::OptionError;

/// Errors raised while building or decoding a dispatch request
#[derive(Error, Debug)]
pub enum RequestError {
    /// Operation name is neither `forecast` nor `cross_validation`
    #[error("Unknown operation '{0}': expected 'forecast' or 'cross_validation'")]
    UnknownOperation(String),

    /// A required request field was never set
    #[error("Missing request field '{0}'")]
    MissingField(&'static str),

    /// An option could not be stored as given
    #[error(transparent)]
    InvalidOption(#[from] OptionError),

    /// The request payload is not valid JSON for the expected shape
    #[error("Failed to decode request: {0}")]
    Decode(#[from] serde_json::Error),
}
