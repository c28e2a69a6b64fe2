use std::fmt;

/// Error type for rejected queries
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// The normalized letter pool does not have the configured length
    InvalidPoolLength { expected: usize, actual: usize },
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPoolLength { expected, actual } => {
                write!(f, "Please enter exactly {expected} letters (got {actual})")
            }
        }
    }
}

impl std::error::Error for QueryError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_reports_both_lengths() {
        let err = QueryError::InvalidPoolLength {
            expected: 10,
            actual: 7,
        };
        assert_eq!(err.to_string(), "Please enter exactly 10 letters (got 7)");
    }
}
