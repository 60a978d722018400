use thiserror::Error;

#[derive(Error, Debug)]
pub enum MatchError {
    #[error("API request failed: {0}")]
    Api(#[from] reqwest::Error),

    #[error("CSV processing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Provider for {source_name} returned HTTP {status}")]
    Provider { source_name: String, status: u16 },

    #[error("Invalid {collection} record at index {index}: {reason}")]
    InvalidRecord {
        collection: String,
        index: usize,
        reason: String,
    },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration error in {field}: {message}")]
    ConfigValidation { field: String, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Data,
    Storage,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    /// Process exit code for a run that failed with this severity.
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl MatchError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            MatchError::Api(_) | MatchError::Provider { .. } => ErrorCategory::Network,
            MatchError::Csv(_) | MatchError::Serialization(_) | MatchError::InvalidRecord { .. } => {
                ErrorCategory::Data
            }
            MatchError::Io(_) => ErrorCategory::Storage,
            MatchError::InvalidConfigValue { .. } | MatchError::ConfigValidation { .. } => {
                ErrorCategory::Configuration
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // Remote hiccups are usually worth a retry.
            MatchError::Api(_) => ErrorSeverity::Medium,
            MatchError::Provider { status, .. } if *status >= 500 => ErrorSeverity::Medium,
            MatchError::Provider { .. } => ErrorSeverity::High,
            MatchError::Csv(_) | MatchError::Serialization(_) | MatchError::InvalidRecord { .. } => {
                ErrorSeverity::High
            }
            MatchError::Io(_) => ErrorSeverity::Critical,
            MatchError::InvalidConfigValue { .. } | MatchError::ConfigValidation { .. } => {
                ErrorSeverity::High
            }
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            MatchError::Api(_) => {
                "Check network connectivity and that the job/member endpoints are reachable"
                    .to_string()
            }
            MatchError::Provider { source_name, status } if *status >= 500 => format!(
                "The {} service is failing ({}); try again later",
                source_name, status
            ),
            MatchError::Provider { source_name, .. } => {
                format!("Verify the {} URL is correct", source_name)
            }
            MatchError::Serialization(_) | MatchError::Csv(_) => {
                "Make sure the input is a JSON array of records with the expected fields"
                    .to_string()
            }
            MatchError::InvalidRecord { collection, .. } => format!(
                "Fix the {} data or run without --strict to match it as-is",
                collection
            ),
            MatchError::Io(_) => "Check that the file exists and is readable/writable".to_string(),
            MatchError::InvalidConfigValue { field, .. } | MatchError::ConfigValidation { field, .. } => {
                format!("Correct the {} setting", field)
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Network => format!("Could not fetch input data: {}", self),
            ErrorCategory::Data => format!("Input data is malformed: {}", self),
            ErrorCategory::Storage => format!("File access failed: {}", self),
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, MatchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_severity_depends_on_status() {
        let server_side = MatchError::Provider {
            source_name: "jobs".to_string(),
            status: 502,
        };
        let client_side = MatchError::Provider {
            source_name: "jobs".to_string(),
            status: 404,
        };

        assert_eq!(server_side.severity(), ErrorSeverity::Medium);
        assert_eq!(client_side.severity(), ErrorSeverity::High);
        assert_eq!(server_side.category(), ErrorCategory::Network);
        assert_eq!(server_side.severity().exit_code(), 2);
    }

    #[test]
    fn test_user_friendly_message_mentions_cause() {
        let err = MatchError::InvalidRecord {
            collection: "members".to_string(),
            index: 3,
            reason: "name is empty".to_string(),
        };

        let message = err.user_friendly_message();
        assert!(message.starts_with("Input data is malformed"));
        assert!(message.contains("index 3"));
        assert!(err.recovery_suggestion().contains("--strict"));
    }
}
