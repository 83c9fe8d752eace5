//! `segmentation` groups retail customers by how much they earn and how much they spend.
//!
//! This crate holds the vocabulary shared by the rest of the workspace:
//!
//! * the [`Customer`] record and its projection onto the (income, spending) plane,
//!   [`Point`], which doubles as the shape of a cluster [`Centroid`];
//! * the [`Float`] bound used by the generic algorithm code;
//! * hyperparameter validation through [`ParamGuard`] and the [`Fit`](traits::Fit) /
//!   [`Predict`](traits::Predict) traits implemented by the clustering models;
//! * clustering [`metrics`], most notably the within-cluster sum of squares.
//!
//! The synthetic population lives in `segmentation-datasets` and the k-means engine in
//! `segmentation-clustering`. A typical session generates a population once, then re-runs
//! k-means every time the number of clusters changes and discards the previous result.
//!
//! ```
//! use segmentation::{records, Customer, Gender};
//!
//! let customers = vec![
//!     Customer::new(1, Gender::Female, 31, 87., 92.),
//!     Customer::new(2, Gender::Male, 54, 99., 14.),
//! ];
//! let observations = records(&customers);
//! assert_eq!(observations.dim(), (2, 2));
//! ```

pub mod benchmarks;
pub mod dataset;
pub mod distance;
pub mod error;
mod metrics_clustering;
mod param_guard;
pub mod prelude;
pub mod traits;

pub use dataset::{records, Centroid, Customer, Float, Gender, Point};
pub use param_guard::ParamGuard;

/// Common metrics functions for clustering
pub mod metrics {
    pub use crate::metrics_clustering::{cluster_sizes, wcss};
}
