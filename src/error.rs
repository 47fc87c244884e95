use thiserror::Error;

/// Input validation failure: an adjacency matrix that is not square.
///
/// Returned by the search entry point instead of a partial result; an empty
/// result list is never used to signal malformed input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShapeError {
    #[error("host adjacency matrix is not square")]
    NonSquareHost,
    #[error("pattern adjacency matrix is not square")]
    NonSquarePattern,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            ShapeError::NonSquareHost.to_string(),
            "host adjacency matrix is not square"
        );
        assert_eq!(
            ShapeError::NonSquarePattern.to_string(),
            "pattern adjacency matrix is not square"
        );
    }
}
