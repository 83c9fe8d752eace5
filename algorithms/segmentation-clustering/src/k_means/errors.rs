use thiserror::Error;

/// An error when fitting with an invalid hyperparameter
#[derive(Error, Debug)]
pub enum KMeansParamsError {
    #[error("n_clusters cannot be 0")]
    NClusters,
    #[error("tolerance must be a non-negative number")]
    Tolerance,
    #[error("max_n_iterations cannot be 0")]
    MaxIterations,
    #[error("reseed bounds must form a non-empty range")]
    ReseedBounds,
}

/// An error when modeling a KMeans algorithm
#[derive(Error, Debug)]
pub enum KMeansError {
    /// When any of the hyperparameters are set the wrong value
    #[error("Invalid hyperparameter: {0}")]
    InvalidParams(#[from] KMeansParamsError),
    /// When there is no observation to cluster
    #[error("Fitting failed: the dataset has no observations")]
    EmptyDataset,
    /// When precomputed centroids do not have shape `(n_clusters, n_features)`
    #[error("Precomputed centroids have shape {found:?}, expected {expected:?}")]
    InvalidInitShape {
        expected: (usize, usize),
        found: (usize, usize),
    },
    /// When a customer-level result is built from a model that is not two-dimensional
    #[error("Expected observations with 2 features (income, spending), found {0}")]
    FeatureCount(usize),
    #[error(transparent)]
    SegmentationError(#[from] segmentation::error::Error),
}
