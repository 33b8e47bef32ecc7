//! Error types for pooling test generation

use std::path::PathBuf;

use thiserror::Error;

use crate::params::ParameterCase;

/// Result type for generator operations
pub type Result<T> = std::result::Result<T, GenError>;

/// Errors that abort a generation run
///
/// Every variant is fatal. A partially generated fixture set is worse than
/// no fixture set, so nothing is skipped and nothing is retried across cases.
#[derive(Debug, Error)]
pub enum GenError {
    /// A case reached the oracle that the enumeration should have excluded,
    /// or the oracle rejected the configuration outright
    #[error("Invalid configuration for {case}: {reason}")]
    Configuration {
        /// Offending parameter case
        case: ParameterCase,
        /// What was wrong with it
        reason: String,
    },

    /// No input magnitude within the retry cap kept the oracle output safe to serialize
    #[error(
        "Magnitude search exhausted for {case}: {attempts} attempts, last max_input_val {last_max_input_val}"
    )]
    MagnitudeSearchExhausted {
        /// Offending parameter case
        case: ParameterCase,
        /// Number of oracle invocations made
        attempts: u32,
        /// Last trial magnitude that was rejected
        last_max_input_val: f64,
    },

    /// Output directory could not be created or a file could not be written
    #[error("Filesystem error at {}: {source}", .path.display())]
    Filesystem {
        /// Path being created or written
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Report serialization failed
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl GenError {
    /// The parameter case this error is attributed to, if any
    #[must_use]
    pub fn case(&self) -> Option<&ParameterCase> {
        match self {
            Self::Configuration { case, .. } | Self::MagnitudeSearchExhausted { case, .. } => {
                Some(case)
            }
            Self::Filesystem { .. } | Self::Json(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{InputShape, Padding, PoolingOp, TestCaseGroup};

    fn sample_case() -> ParameterCase {
        ParameterCase {
            group: TestCaseGroup::new(PoolingOp::Average, 3, 2),
            shape: InputShape::new(1, 5, 6, 1),
            padding: Padding::Same,
        }
    }

    #[test]
    fn test_configuration_error_names_case() {
        let err = GenError::Configuration {
            case: sample_case(),
            reason: "excluded".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid configuration for avg window=3 stride=2 shape=1x5x6x1 padding=SAME: excluded"
        );
    }

    #[test]
    fn test_magnitude_error_names_case() {
        let err = GenError::MagnitudeSearchExhausted {
            case: sample_case(),
            attempts: 9,
            last_max_input_val: 131072.0,
        };
        let msg = err.to_string();
        assert!(msg.contains("avg window=3 stride=2"));
        assert!(msg.contains("9 attempts"));
        assert!(msg.contains("131072"));
    }

    #[test]
    fn test_filesystem_error_names_path() {
        let err = GenError::Filesystem {
            path: PathBuf::from("/nonexistent/pooling"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/nonexistent/pooling"));
        assert!(msg.contains("denied"));
        assert!(err.case().is_none());
    }

    #[test]
    fn test_case_accessor() {
        let err = GenError::Configuration {
            case: sample_case(),
            reason: String::new(),
        };
        assert_eq!(err.case(), Some(&sample_case()));
    }
}
