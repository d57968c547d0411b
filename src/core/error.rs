//! Error types for goal creation, persistence and parsing

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result alias used throughout the goal engine
pub type Result<T> = std::result::Result<T, GoalError>;

/// Failures surfaced by the goal engine
#[derive(Error, Debug)]
pub enum GoalError {
    /// Goal parameters rejected at creation time
    #[error("Invalid goal: {0}")]
    InvalidGoal(String),

    /// A named goal file could not be opened, read or written
    #[error("Failed to access goal file {}: {source}", path.display())]
    File {
        /// File being accessed
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: io::Error,
    },

    /// Stream-level I/O failure while reading or writing records
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A field held a value that could not be parsed
    #[error("Line {line}: {message}")]
    Parse {
        /// 1-based line number of the offending field
        line: usize,
        /// What was wrong with it
        message: String,
    },

    /// A record started with a type tag no goal variant recognises
    #[error("Line {line}: unknown goal type '{tag}'")]
    UnknownGoalType {
        /// 1-based line number of the tag
        line: usize,
        /// The tag as read
        tag: String,
    },

    /// Input ended in the middle of a record
    #[error("{tag} record starting at line {line} ends before field '{field}'")]
    Truncated {
        /// Type tag of the incomplete record
        tag: String,
        /// 1-based line number of the tag
        line: usize,
        /// First field that was missing
        field: &'static str,
    },
}

impl GoalError {
    /// Build a parse error for the given line
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }

    /// Returns true for errors caused by malformed file content rather than I/O
    #[must_use]
    pub const fn is_parse_error(&self) -> bool {
        matches!(
            self,
            Self::Parse { .. } | Self::UnknownGoalType { .. } | Self::Truncated { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display() {
        let err = GoalError::parse(3, "expected an integer, found 'ten'");
        assert_eq!(err.to_string(), "Line 3: expected an integer, found 'ten'");
        assert!(err.is_parse_error());
    }

    #[test]
    fn test_file_error_is_not_parse_error() {
        let err = GoalError::File {
            path: PathBuf::from("missing.txt"),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };
        assert!(!err.is_parse_error());
        assert!(err.to_string().contains("missing.txt"));
    }

    #[test]
    fn test_truncated_display() {
        let err = GoalError::Truncated {
            tag: "ChecklistGoal".to_string(),
            line: 2,
            field: "BonusPoints",
        };
        assert_eq!(
            err.to_string(),
            "ChecklistGoal record starting at line 2 ends before field 'BonusPoints'"
        );
    }
}
