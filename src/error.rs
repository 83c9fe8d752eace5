//! Error types in segmentation
//!

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone)]
pub enum Error {
    #[error("expected {expected} entries, found {found}")]
    MismatchedLength { expected: usize, found: usize },
    #[error("membership {membership} is out of range for {n_clusters} clusters")]
    UnknownCluster { membership: usize, n_clusters: usize },
}
