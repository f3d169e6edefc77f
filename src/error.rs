//! Error type shared by the projection, scheme and export layers

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DprError {
    #[error("Invalid input: {field} = {value} is outside [{min}, {max}]")]
    InvalidInput {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("Unknown stage: {0} (expected all, idea, growth or export)")]
    UnknownStage(String),

    #[error("Unknown language: {0} (expected en or te)")]
    UnknownLanguage(String),

    #[error("Unknown export format: {0} (expected csv or json)")]
    UnknownFormat(String),

    #[error("Unknown scenario preset: {0} (expected pessimistic, base or optimistic)")]
    UnknownPreset(String),

    #[error("Invalid configuration: {key}: {reason}")]
    InvalidConfig { key: String, reason: String },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl DprError {
    /// Whether the error was caused by the caller's input rather than the environment
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            DprError::InvalidInput { .. }
                | DprError::UnknownStage(_)
                | DprError::UnknownLanguage(_)
                | DprError::UnknownFormat(_)
                | DprError::UnknownPreset(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, DprError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_message() {
        let err = DprError::InvalidInput {
            field: "loanTenureYears",
            value: 11.0,
            min: 2.0,
            max: 10.0,
        };
        assert_eq!(
            err.to_string(),
            "Invalid input: loanTenureYears = 11 is outside [2, 10]"
        );
        assert!(err.is_client_error());
    }

    #[test]
    fn test_io_is_not_client_error() {
        let err = DprError::from(std::io::Error::new(std::io::ErrorKind::Other, "disk full"));
        assert!(!err.is_client_error());
    }
}
