//! Option lookup errors

use thiserror::Error;

/// Errors raised when a collaborator reads a named option
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OptionError {
    /// A required option was not supplied
    #[error("Missing option '{name}'")]
    Missing { name: String },

    /// The option value could not be read as the requested type
    #[error("Invalid option '{name}': {reason}")]
    InvalidValue { name: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_display() {
        let error = OptionError::Missing {
            name: "h".to_string(),
        };
        assert_eq!(error.to_string(), "Missing option 'h'");
    }

    #[test]
    fn test_invalid_value_display() {
        let error = OptionError::InvalidValue {
            name: "n_windows".to_string(),
            reason: "expected usize".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid option 'n_windows': expected usize"
        );
    }

    #[test]
    fn test_invalid_value_fields() {
        let error = OptionError::InvalidValue {
            name: "step_size".to_string(),
            reason: "negative".to_string(),
        };
        if let OptionError::InvalidValue { name, reason } = error {
            assert_eq!(name, "step_size");
            assert_eq!(reason, "negative");
        } else {
            panic!("Expected InvalidValue variant");
        }
    }

    #[test]
    fn test_error_is_clone_and_eq() {
        let error = OptionError::Missing {
            name: "level".to_string(),
        };
        assert_eq!(error.clone(), error);
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<OptionError>();
    }
}
