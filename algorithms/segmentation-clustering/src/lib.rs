//! `segmentation-clustering` groups customers by income and spending behaviour.
//!
//! ## The big picture
//!
//! `segmentation-clustering` is a crate in the `segmentation` workspace. It turns a
//! population of [`Customer`](segmentation::Customer)s into a fixed number of segments with
//! the [K-Means](KMeans) algorithm, seeded with k-means++, and scores every partition with the
//! within-cluster sum of squares.
//!
//! ## Current state
//!
//! The crate provides:
//! * [K-Means](KMeans) on any `(n_observations, n_features)` matrix, configured through
//!   [`KMeansParams`];
//! * [`run_kmeans`] and [`compute_elbow`], the customer-level entry points consumed by a
//!   presentation layer, returning a [`ClusterResult`] and a list of [`ElbowPoint`]s;
//! * [`ClusterProfile`]s summarising who ended up in which cluster.
//!
//! Every run is synchronous and owns its state; callers that need a responsive interface
//! can move a run onto a worker thread.
#[allow(clippy::new_ret_no_self)]
mod k_means;

pub use k_means::*;
