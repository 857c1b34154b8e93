use thiserror::Error;

#[derive(Debug, Error)]
pub enum NavCurveError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Geometry error: {0}")]
    Geometry(String),

    #[error("Invalid operation: {0}")]
    InvalidOperation(String),
}

impl NavCurveError {
    /// Shorthand for the zero-count precondition shared by every sampling routine.
    pub fn zero_count(name: &str) -> Self {
        Self::InvalidArgument(format!("{name} must be at least 1"))
    }
}

pub type Result<T> = std::result::Result<T, NavCurveError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_count_message() {
        let err = NavCurveError::zero_count("steps");
        assert_eq!(err.to_string(), "Invalid argument: steps must be at least 1");
    }
}
