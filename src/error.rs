//! Error types and handling for the travel recommendation service

use thiserror::Error;

/// Main error type for the travel recommendation service
#[derive(Error, Debug)]
pub enum TravelRecError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Catalog could not be retrieved (network error or non-success status)
    #[error("Fetch error: {message}")]
    Fetch { message: String },

    /// Catalog document could not be decoded
    #[error("Parse error: {message}")]
    Parse { message: String },

    /// Input validation errors
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// Cache operation errors
    #[error("Cache error: {message}")]
    Cache { message: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl TravelRecError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new fetch error
    pub fn fetch<S: Into<String>>(message: S) -> Self {
        Self::Fetch {
            message: message.into(),
        }
    }

    /// Create a new parse error
    pub fn parse<S: Into<String>>(message: S) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new cache error
    pub fn cache<S: Into<String>>(message: S) -> Self {
        Self::Cache {
            message: message.into(),
        }
    }

    /// The search term was blank after trimming
    #[must_use]
    pub fn empty_query() -> Self {
        Self::validation("Please enter a search term")
    }

    /// True for errors caused by what the user typed rather than by the system
    #[must_use]
    pub fn is_user_error(&self) -> bool {
        matches!(self, TravelRecError::Validation { .. })
    }

    /// True when the catalog could not be loaded
    #[must_use]
    pub fn is_load_failure(&self) -> bool {
        matches!(
            self,
            TravelRecError::Fetch { .. } | TravelRecError::Parse { .. }
        )
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            TravelRecError::Config { .. } => {
                "Configuration error. Please check your config file.".to_string()
            }
            TravelRecError::Fetch { .. } | TravelRecError::Parse { .. } => {
                "Unable to load travel recommendations. Please try again.".to_string()
            }
            TravelRecError::Validation { message } => message.clone(),
            TravelRecError::Cache { .. } => {
                "Cache operation failed. You may need to clear your cache.".to_string()
            }
            TravelRecError::Io { .. } => {
                "File operation failed. Please check file permissions.".to_string()
            }
        }
    }
}

impl From<serde_json::Error> for TravelRecError {
    fn from(err: serde_json::Error) -> Self {
        TravelRecError::parse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let config_err = TravelRecError::config("bad port");
        assert!(matches!(config_err, TravelRecError::Config { .. }));

        let fetch_err = TravelRecError::fetch("connection refused");
        assert!(matches!(fetch_err, TravelRecError::Fetch { .. }));

        let validation_err = TravelRecError::validation("blank");
        assert!(matches!(validation_err, TravelRecError::Validation { .. }));
    }

    #[test]
    fn test_user_messages() {
        assert_eq!(
            TravelRecError::empty_query().user_message(),
            "Please enter a search term"
        );

        let fetch_err = TravelRecError::fetch("status 500");
        assert!(fetch_err.user_message().contains("Unable to load"));

        let parse_err = TravelRecError::parse("expected value");
        assert!(parse_err.user_message().contains("Unable to load"));
    }

    #[test]
    fn test_classification_helpers() {
        assert!(TravelRecError::empty_query().is_user_error());
        assert!(!TravelRecError::empty_query().is_load_failure());
        assert!(TravelRecError::fetch("x").is_load_failure());
        assert!(!TravelRecError::cache("x").is_load_failure());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: TravelRecError = io_err.into();
        assert!(matches!(err, TravelRecError::Io { .. }));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: TravelRecError = json_err.into();
        assert!(matches!(err, TravelRecError::Parse { .. }));
    }
}
