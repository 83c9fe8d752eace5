use crate::{KMeans, KMeansError, KMeansValidParams};
use ndarray::{ArrayBase, Data, Ix2};
use rand::Rng;
use segmentation::traits::Fit;
use segmentation::{records, Customer, Float, ParamGuard};

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

/// Largest cluster count explored by [`compute_elbow`] when none is given
pub const DEFAULT_MAX_K: usize = 10;

/// Within-cluster sum of squares reached with `k` clusters
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ElbowPoint<F = f64> {
    pub k: usize,
    pub wcss: F,
}

impl<F: Float, R: Rng + Clone> KMeansValidParams<F, R> {
    /// Elbow method: fit a separate model for every cluster count in `1..=max_k` and report
    /// the WCSS of each, in ascending `k`.
    ///
    /// Every run starts from the same random generator state and the runs share nothing else,
    /// so the sweep is as reproducible as a single fit. The configured number of clusters is
    /// ignored.
    pub fn elbow<DA: Data<Elem = F>>(
        &self,
        observations: &ArrayBase<DA, Ix2>,
        max_k: usize,
    ) -> Result<Vec<ElbowPoint<F>>, KMeansError> {
        (1..=max_k)
            .map(|k| {
                let model = self.with_n_clusters(k).fit(observations)?;
                Ok(ElbowPoint {
                    k,
                    wcss: model.wcss(),
                })
            })
            .collect()
    }
}

/// Elbow sweep over a customer population with the default k-means settings.
///
/// Plotting the returned WCSS against `k` typically shows a sharp drop followed by a flat
/// tail; the bend (the "elbow") is a reasonable number of segments.
pub fn compute_elbow<R: Rng + Clone>(
    customers: &[Customer],
    max_k: usize,
    rng: R,
) -> Result<Vec<ElbowPoint>, KMeansError> {
    let observations = records(customers);
    KMeans::params_with_rng(1, rng)
        .check()?
        .elbow(&observations, max_k)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::array;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256Plus;
    use segmentation_datasets::generate;

    #[test]
    fn autotraits() {
        fn has_autotraits<T: Send + Sync + Sized + Unpin>() {}
        has_autotraits::<ElbowPoint>();
    }

    #[test]
    fn one_point_per_k_in_ascending_order() {
        let mut rng = Xoshiro256Plus::seed_from_u64(42);
        let customers = generate::customers(100, &mut rng);
        let points = compute_elbow(&customers, DEFAULT_MAX_K, rng).unwrap();
        assert_eq!(points.len(), DEFAULT_MAX_K);
        for (expected_k, point) in (1..).zip(&points) {
            assert_eq!(point.k, expected_k);
            assert!(point.wcss >= 0.);
        }
    }

    #[test]
    fn first_point_is_the_total_variance() {
        let observations = array![[0., 0.], [2., 0.], [0., 2.], [2., 2.]];
        let points = KMeans::params(1)
            .check()
            .unwrap()
            .elbow(&observations, 1)
            .unwrap();
        assert_eq!(points.len(), 1);
        assert_abs_diff_eq!(points[0].wcss, 8.);
    }

    #[test]
    fn empty_sweep() {
        let observations = array![[0., 0.]];
        let points = KMeans::params(1)
            .check()
            .unwrap()
            .elbow(&observations, 0)
            .unwrap();
        assert!(points.is_empty());
    }

    #[test]
    fn sweep_is_reproducible() {
        let mut rng = Xoshiro256Plus::seed_from_u64(5);
        let customers = generate::customers(80, &mut rng);
        let first = compute_elbow(&customers, 6, rng.clone()).unwrap();
        let second = compute_elbow(&customers, 6, rng).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn sweep_stops_at_the_first_failure() {
        let observations = ndarray::Array2::<f64>::zeros((0, 2));
        let res = KMeans::params(1).check().unwrap().elbow(&observations, 3);
        assert!(matches!(res, Err(KMeansError::EmptyDataset)));
    }
}
