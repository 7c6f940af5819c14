//! Error module containing error types and result aliases

mod option_error;
mod request_error;

pub use option_error::OptionError;
pub use request_error::RequestError;

/// Result type for request building and decoding
pub type Result<T> = std::result::Result<T, RequestError>;
