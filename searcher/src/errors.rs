use thiserror::Error;

/// Error produced when a search cannot deliver a path.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("No search result found after exploring {explored} states")]
    NoResultFound { explored: usize },

    #[error("Step cost must be positive, entering {0} costs nothing")]
    NonPositiveCost(String),

    #[error("Path cost overflows entering {0}")]
    CostOverflow(String),

    #[error("Unknown search algorithm: {0}")]
    UnknownAlgorithm(String),
}

/// Result when a search method might fail.
pub type Result<T> = std::result::Result<T, SearchError>;
