use super::algorithm::update_min_dists;
use ndarray::{s, Array1, Array2, ArrayView2, Axis};
use rand::seq::index;
use rand::Rng;
use segmentation::Float;
#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
/// Specifies centroid initialization algorithm for KMeans.
pub enum KMeansInit<F: Float> {
    /// Pick random points as centroids.
    Random,
    /// Precomputed list of centroids, represented as an array of (n_centroids, n_features).
    Precomputed(Array2<F>),
    /// K-means++ algorithm. Using this over random initialization causes K-means to converge
    /// faster for almost all cases, since K-means++ produces better centroids.
    KMeansPlusPlus,
}

impl<F: Float> KMeansInit<F> {
    /// Runs the chosen initialization routine
    pub(crate) fn run<R: Rng>(
        &self,
        n_clusters: usize,
        observations: ArrayView2<F>,
        rng: &mut R,
    ) -> Array2<F> {
        match self {
            Self::Random => random_init(n_clusters, observations, rng),
            Self::KMeansPlusPlus => k_means_plusplus(n_clusters, observations, rng),
            Self::Precomputed(centroids) => centroids.clone(),
        }
    }
}

/// Pick random points from the input matrix as centroids. Points are distinct as long as there
/// are at least `n_clusters` of them.
fn random_init<F: Float>(
    n_clusters: usize,
    observations: ArrayView2<F>,
    rng: &mut impl Rng,
) -> Array2<F> {
    let n_samples = observations.nrows();
    let indices = if n_clusters <= n_samples {
        index::sample(rng, n_samples, n_clusters).into_vec()
    } else {
        (0..n_clusters).map(|_| rng.gen_range(0..n_samples)).collect()
    };
    observations.select(Axis(0), &indices)
}

/// Selects centroids using the KMeans++ initialization algorithm. The weights determine the
/// likeliness of an input point to be selected as a centroid relative to other points. The
/// higher the weight, the more likely the point will be selected as a centroid.
fn k_means_plusplus<F: Float>(
    n_clusters: usize,
    observations: ArrayView2<F>,
    rng: &mut impl Rng,
) -> Array2<F> {
    let (n_samples, n_features) = observations.dim();
    let mut centroids = Array2::zeros((n_clusters, n_features));
    let first = rng.gen_range(0..n_samples);
    centroids.row_mut(0).assign(&observations.row(first));

    let mut dists = Array1::zeros(n_samples);
    for c_cnt in 1..n_clusters {
        update_min_dists(
            &centroids.slice(s![0..c_cnt, ..]),
            &observations,
            &mut dists,
        );
        let centroid_idx = weighted_index(&dists, rng);
        centroids
            .row_mut(c_cnt)
            .assign(&observations.row(centroid_idx));
    }
    centroids
}

/// Scans the cumulative sum of `weights` against a uniform draw scaled by their total and
/// returns the first index reaching it. When every weight is zero the first index is picked.
fn weighted_index<F: Float>(weights: &Array1<F>, rng: &mut impl Rng) -> usize {
    let target = F::cast(rng.gen::<f64>()) * weights.sum();
    let mut cumulative = F::zero();
    for (idx, weight) in weights.iter().enumerate() {
        cumulative += *weight;
        if cumulative >= target {
            return idx;
        }
    }
    // rounding can leave the running sum a hair below the target
    weights.len() - 1
}
