use crate::KMeansParamsError;

use super::init::KMeansInit;
use rand::Rng;
use segmentation::{Float, ParamGuard};
#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

/// What the update step does with a cluster that lost all of its members.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EmptyClusterPolicy {
    /// Move the centroid to a uniformly random position inside the
    /// [reseed bounds](KMeansParams::reseed_bounds). The centroid loses any relation to the
    /// previous iterations, but it gets a fresh chance to attract members.
    Reseed,
    /// Keep the centroid where it was in the previous iteration.
    Retain,
}

#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Clone, Debug, PartialEq)]
/// The set of hyperparameters that can be specified for the execution of
/// the [K-means algorithm](crate::KMeans).
pub struct KMeansValidParams<F: Float, R: Rng> {
    /// The training is considered complete if every centroid moved by an
    /// euclidean distance lower or equal than `tolerance` during the last
    /// training iteration.
    tolerance: F,
    /// We exit the training loop when the number of training iterations
    /// reaches `max_n_iterations` even if the `tolerance` convergence
    /// condition has not been met.
    max_n_iterations: u64,
    /// The number of clusters we will be looking for in the training dataset.
    n_clusters: usize,
    /// The initialization strategy used to initialize the centroids.
    init: KMeansInit<F>,
    /// Update rule for clusters without members.
    empty_cluster_policy: EmptyClusterPolicy,
    /// Half-open range `[low, high)` every coordinate of a reseeded centroid is drawn from.
    reseed_bounds: (F, F),
    /// The random number generator
    rng: R,
}

#[derive(Clone, Debug, PartialEq)]
/// An helper struct used to construct a set of [valid hyperparameters](KMeansValidParams) for
/// the [K-means algorithm](crate::KMeans) (using the builder pattern).
pub struct KMeansParams<F: Float, R: Rng>(KMeansValidParams<F, R>);

impl<F: Float, R: Rng> KMeansParams<F, R> {
    /// `new` lets us configure our training algorithm parameters:
    /// * we will be looking for `n_clusters` in the training dataset;
    /// * the training is considered complete if every centroid moved by an
    ///   euclidean distance lower or equal than `tolerance` during the last
    ///   training iteration;
    /// * we exit the training loop when the number of training iterations
    ///   reaches `max_n_iterations` even if the `tolerance` convergence
    ///   condition has not been met. This is a normal outcome, not an error.
    ///
    /// Defaults are provided if optional parameters are not specified:
    /// * `tolerance = 0.1`
    /// * `max_n_iterations = 100`
    /// * `init = KMeansPlusPlus`
    /// * `empty_cluster_policy = Reseed`
    /// * `reseed_bounds = (0, 100)`
    pub fn new(n_clusters: usize, rng: R) -> Self {
        Self(KMeansValidParams {
            tolerance: F::cast(0.1),
            max_n_iterations: 100,
            n_clusters,
            init: KMeansInit::KMeansPlusPlus,
            empty_cluster_policy: EmptyClusterPolicy::Reseed,
            reseed_bounds: (F::zero(), F::cast(100)),
            rng,
        })
    }

    /// Change the value of `tolerance`
    pub fn tolerance(mut self, tolerance: F) -> Self {
        self.0.tolerance = tolerance;
        self
    }

    /// Change the value of `max_n_iterations`
    pub fn max_n_iterations(mut self, max_n_iterations: u64) -> Self {
        self.0.max_n_iterations = max_n_iterations;
        self
    }

    /// Change the value of `init`
    pub fn init_method(mut self, init: KMeansInit<F>) -> Self {
        self.0.init = init;
        self
    }

    /// Change the update rule for empty clusters
    pub fn empty_cluster_policy(mut self, policy: EmptyClusterPolicy) -> Self {
        self.0.empty_cluster_policy = policy;
        self
    }

    /// Change the range reseeded centroids are drawn from
    pub fn reseed_bounds(mut self, low: F, high: F) -> Self {
        self.0.reseed_bounds = (low, high);
        self
    }
}

impl<F: Float, R: Rng> ParamGuard for KMeansParams<F, R> {
    type Checked = KMeansValidParams<F, R>;
    type Error = KMeansParamsError;

    fn check_ref(&self) -> Result<&Self::Checked, Self::Error> {
        let (low, high) = self.0.reseed_bounds;
        if self.0.n_clusters == 0 {
            Err(KMeansParamsError::NClusters)
        } else if self.0.tolerance.is_nan() || self.0.tolerance < F::zero() {
            Err(KMeansParamsError::Tolerance)
        } else if self.0.max_n_iterations == 0 {
            Err(KMeansParamsError::MaxIterations)
        } else if !(low.is_finite() && high.is_finite() && low < high) {
            Err(KMeansParamsError::ReseedBounds)
        } else {
            Ok(&self.0)
        }
    }

    fn check(self) -> Result<Self::Checked, Self::Error> {
        self.check_ref()?;
        Ok(self.0)
    }
}

impl<F: Float, R: Rng> KMeansValidParams<F, R> {
    /// The training is considered complete if every centroid moved by an
    /// euclidean distance lower or equal than `tolerance`.
    pub fn tolerance(&self) -> F {
        self.tolerance
    }

    /// We exit the training loop when the number of training iterations
    /// reaches `max_n_iterations` even if the `tolerance` convergence
    /// condition has not been met.
    pub fn max_n_iterations(&self) -> u64 {
        self.max_n_iterations
    }

    /// The number of clusters we will be looking for in the training dataset.
    pub fn n_clusters(&self) -> usize {
        self.n_clusters
    }

    /// Cluster initialization strategy
    pub fn init_method(&self) -> &KMeansInit<F> {
        &self.init
    }

    /// Update rule for clusters without members
    pub fn empty_cluster_policy(&self) -> EmptyClusterPolicy {
        self.empty_cluster_policy
    }

    /// Range reseeded centroids are drawn from
    pub fn reseed_bounds(&self) -> (F, F) {
        self.reseed_bounds
    }

    /// Returns the random generator
    pub fn rng(&self) -> &R {
        &self.rng
    }

    /// Same parameters looking for a different number of clusters. `n_clusters` must not be 0.
    pub(crate) fn with_n_clusters(&self, n_clusters: usize) -> Self
    where
        R: Clone,
    {
        debug_assert!(n_clusters > 0);
        let mut params = self.clone();
        params.n_clusters = n_clusters;
        params
    }
}
