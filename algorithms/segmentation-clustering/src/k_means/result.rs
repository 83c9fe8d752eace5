use crate::{KMeans, KMeansError};
use rand::Rng;
use segmentation::traits::Fit;
use segmentation::{records, Centroid, Customer};

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

/// Outcome of one k-means run over a customer population.
///
/// Centroids are indexed by cluster label and `assignments[i]` is the label of the `i`-th
/// customer of the input. A new run produces a new result; results are never updated in place.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Clone, Debug, PartialEq)]
pub struct ClusterResult {
    centroids: Vec<Centroid>,
    assignments: Vec<usize>,
    iterations: u64,
    wcss: f64,
    converged: bool,
}

impl ClusterResult {
    /// Centroid of every cluster, the index being the cluster label
    pub fn centroids(&self) -> &[Centroid] {
        &self.centroids
    }

    /// Cluster label of every customer, in input order
    pub fn assignments(&self) -> &[usize] {
        &self.assignments
    }

    /// Number of iterations executed before the run stopped
    pub fn iterations(&self) -> u64 {
        self.iterations
    }

    /// Within-cluster sum of squares of the final partition
    pub fn wcss(&self) -> f64 {
        self.wcss
    }

    /// Whether the run stopped because the centroids settled rather than because of the
    /// iteration cap
    pub fn converged(&self) -> bool {
        self.converged
    }

    pub fn n_clusters(&self) -> usize {
        self.centroids.len()
    }

    pub fn n_customers(&self) -> usize {
        self.assignments.len()
    }
}

impl KMeans<f64> {
    /// Convert a model fitted on (income, spending) observations into the customer-level
    /// result.
    pub fn into_cluster_result(self) -> Result<ClusterResult, KMeansError> {
        let n_features = self.centroids().ncols();
        if n_features != 2 {
            return Err(KMeansError::FeatureCount(n_features));
        }
        let centroids = self
            .centroids()
            .rows()
            .into_iter()
            .map(|row| Centroid::new(row[0], row[1]))
            .collect();

        Ok(ClusterResult {
            centroids,
            assignments: self.memberships().to_vec(),
            iterations: self.n_iterations(),
            wcss: self.wcss(),
            converged: self.converged(),
        })
    }
}

/// Cluster `customers` into `n_clusters` groups on their (income, spending) position.
///
/// Runs k-means seeded with k-means++ and stops once every centroid moves by at most 0.1, or
/// after `max_n_iterations` iterations. The run is reproducible for a given `rng` state.
///
/// ```
/// use rand::SeedableRng;
/// use rand_xoshiro::Xoshiro256Plus;
/// use segmentation_clustering::run_kmeans;
/// use segmentation_datasets::generate;
///
/// let mut rng = Xoshiro256Plus::seed_from_u64(42);
/// let customers = generate::customers(200, &mut rng);
///
/// let result = run_kmeans(&customers, 5, 100, rng).unwrap();
/// assert_eq!(result.centroids().len(), 5);
/// assert_eq!(result.assignments().len(), customers.len());
/// ```
pub fn run_kmeans<R: Rng + Clone>(
    customers: &[Customer],
    n_clusters: usize,
    max_n_iterations: u64,
    rng: R,
) -> Result<ClusterResult, KMeansError> {
    let observations = records(customers);
    KMeans::params_with_rng(n_clusters, rng)
        .max_n_iterations(max_n_iterations)
        .fit(&observations)?
        .into_cluster_result()
}
