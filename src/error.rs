use thiserror::Error;

/// Error types for the kmeans2d library
#[derive(Error, Debug, Clone, PartialEq)]
pub enum KMeansError {
    /// Clustering is undefined for the given points and k
    /// (empty input, k = 0, k larger than the number of points, or a non-finite coordinate)
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Array input does not have exactly two columns
    #[error("Dimension mismatch: {0}")]
    InvalidDimensions(String),

    /// Model has not been fitted yet
    #[error("Model has not been fitted. Call train() or fit() first.")]
    NotFitted,
}
