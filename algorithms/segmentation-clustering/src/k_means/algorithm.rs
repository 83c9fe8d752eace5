use crate::k_means::{EmptyClusterPolicy, KMeansParams, KMeansValidParams};
use crate::{k_means::errors::KMeansError, KMeansInit};
use ndarray::{Array1, Array2, ArrayBase, Axis, Data, DataMut, Ix1, Ix2, Zip};
use rand::{Rng, SeedableRng};
use rand_isaac::Isaac64Rng;
use segmentation::distance::{euclidean, sq_euclidean};
use segmentation::metrics::{cluster_sizes, wcss};
use segmentation::traits::{Fit, PredictInplace};
use segmentation::{Customer, Float};
use tracing::{debug, trace, warn};

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Clone, Debug, PartialEq)]
/// K-means clustering aims to partition a set of unlabeled observations into clusters,
/// where each observation belongs to the cluster with the nearest mean.
///
/// The mean of the points within a cluster is called *centroid*.
///
/// Given the set of centroids, you can assign an observation to a cluster
/// choosing the nearest centroid.
///
/// More details on the algorithm can be found in the next section or
/// [here](https://en.wikipedia.org/wiki/K-means_clustering).
///
/// ## Standard algorithm
///
/// K-means is an iterative algorithm: it progressively refines the choice of centroids.
///
/// It's guaranteed to converge, even though it might not find the optimal set of centroids
/// (unfortunately it can get stuck in a local minimum, finding the optimal minimum if NP-hard!).
///
/// There are three steps in the standard algorithm:
/// - initialisation step: select initial centroids using one of our provided algorithms,
///   k-means++ by default.
/// - assignment step: assign each observation to the nearest cluster
///                    (minimum distance between the observation and the cluster's centroid,
///                    ties going to the lowest cluster index);
/// - update step: recompute the centroid of each cluster as the mean of its members. A cluster
///                left without members follows the configured [`EmptyClusterPolicy`].
///
/// The initialisation step is a one-off, done at the very beginning.
/// Assignment and update are repeated in a loop until convergence is reached (every centroid
/// moved by at most `tolerance`) or `max_n_iterations` iterations have run. Hitting the
/// iteration cap is a regular outcome, reported through [`converged`](KMeans::converged).
///
/// The quality of the final partition is measured with the within-cluster sum of squares
/// ([`wcss`](KMeans::wcss)), computed once the loop is over.
///
/// ## Tutorial
///
/// ```
/// use segmentation::traits::{Fit, Predict};
/// use segmentation_clustering::KMeans;
/// use ndarray::array;
/// use rand::SeedableRng;
/// use rand_xoshiro::Xoshiro256Plus;
///
/// // Our random number generator, seeded for reproducibility
/// let rng = Xoshiro256Plus::seed_from_u64(42);
///
/// // (annual income, spending score) of six customers
/// let observations = array![
///     [15., 39.], [16., 81.], [17., 40.],
///     [87., 13.], [88., 86.], [86., 15.],
/// ];
///
/// let model = KMeans::params_with_rng(3, rng)
///     .tolerance(1e-2)
///     .fit(&observations)
///     .expect("KMeans fitted");
///
/// assert_eq!(model.memberships().len(), 6);
/// assert!(model.n_iterations() >= 1 && model.n_iterations() <= 100);
///
/// // Once we found our set of centroids, we can also assign new points to the nearest cluster
/// let new_observation = array![[87., 14.]];
/// let clusters: ndarray::Array1<usize> = model.predict(&new_observation);
/// assert_eq!(clusters[0], model.memberships()[3]);
/// ```
pub struct KMeans<F: Float> {
    centroids: Array2<F>,
    memberships: Array1<usize>,
    cluster_count: Array1<usize>,
    n_iterations: u64,
    converged: bool,
    wcss: F,
}

impl<F: Float> KMeans<F> {
    pub fn params(nclusters: usize) -> KMeansParams<F, Isaac64Rng> {
        KMeansParams::new(nclusters, Isaac64Rng::seed_from_u64(42))
    }

    pub fn params_with_rng<R: Rng>(nclusters: usize, rng: R) -> KMeansParams<F, R> {
        KMeansParams::new(nclusters, rng)
    }

    /// Return the set of centroids as a 2-dimensional matrix with shape
    /// `(n_centroids, n_features)`.
    pub fn centroids(&self) -> &Array2<F> {
        &self.centroids
    }

    /// Return the cluster index of every training observation, in input order
    pub fn memberships(&self) -> &Array1<usize> {
        &self.memberships
    }

    /// Return the number of training points belonging to each cluster
    pub fn cluster_count(&self) -> &Array1<usize> {
        &self.cluster_count
    }

    /// Number of assignment/update iterations executed, at least one
    pub fn n_iterations(&self) -> u64 {
        self.n_iterations
    }

    /// Whether the centroids settled before the iteration cap was reached
    pub fn converged(&self) -> bool {
        self.converged
    }

    /// Within-cluster sum of squares of the training observations
    pub fn wcss(&self) -> F {
        self.wcss
    }

    pub fn n_clusters(&self) -> usize {
        self.centroids.nrows()
    }
}

impl<F: Float, R: Rng + Clone, DA: Data<Elem = F>> Fit<ArrayBase<DA, Ix2>, KMeansError>
    for KMeansValidParams<F, R>
{
    type Object = KMeans<F>;

    /// Given an input matrix `observations`, with shape `(n_observations, n_features)`,
    /// `fit` identifies `n_clusters` centroids based on the training data distribution.
    ///
    /// The random generator of the hyperparameters is cloned, so fitting twice with the same
    /// parameters on the same observations gives the same model.
    fn fit(&self, observations: &ArrayBase<DA, Ix2>) -> Result<Self::Object, KMeansError> {
        let (n_samples, n_features) = observations.dim();
        if n_samples == 0 {
            return Err(KMeansError::EmptyDataset);
        }
        if let KMeansInit::Precomputed(centroids) = self.init_method() {
            let expected = (self.n_clusters(), n_features);
            if centroids.dim() != expected {
                return Err(KMeansError::InvalidInitShape {
                    expected,
                    found: centroids.dim(),
                });
            }
        }

        let mut rng = self.rng().clone();
        debug!(
            n_clusters = self.n_clusters(),
            n_samples, "starting k-means clustering"
        );

        let mut centroids = self
            .init_method()
            .run(self.n_clusters(), observations.view(), &mut rng);
        let mut memberships = Array1::zeros(n_samples);
        let mut n_iterations = 0;
        let mut converged = false;

        while n_iterations < self.max_n_iterations() {
            n_iterations += 1;
            update_cluster_memberships(&centroids, observations, &mut memberships);
            let new_centroids = compute_centroids(
                &centroids,
                observations,
                &memberships,
                self.empty_cluster_policy(),
                self.reseed_bounds(),
                &mut rng,
            );
            converged = has_converged(&centroids, &new_centroids, self.tolerance());
            centroids = new_centroids;
            trace!(n_iterations, converged, "k-means iteration done");
            if converged {
                break;
            }
        }

        if converged {
            debug!(n_iterations, "k-means converged");
        } else {
            debug!(n_iterations, "k-means reached the iteration cap");
        }

        let wcss = wcss(observations, &centroids, &memberships)?;
        let cluster_count = cluster_sizes(&memberships, self.n_clusters())?;
        debug!(wcss = %wcss, "final within-cluster sum of squares");

        Ok(KMeans {
            centroids,
            memberships,
            cluster_count,
            n_iterations,
            converged,
            wcss,
        })
    }
}

impl<F: Float, DA: Data<Elem = F>> PredictInplace<ArrayBase<DA, Ix2>, Array1<usize>>
    for KMeans<F>
{
    /// Given an input matrix `observations`, with shape `(n_observations, n_features)`,
    /// `predict` returns, for each observation, the index of the closest cluster/centroid.
    ///
    /// You can retrieve the centroid associated to an index using the
    /// [`centroids` method](#method.centroids).
    fn predict_inplace(&self, observations: &ArrayBase<DA, Ix2>, memberships: &mut Array1<usize>) {
        assert_eq!(
            observations.nrows(),
            memberships.len(),
            "The number of data points must match the number of memberships."
        );

        update_cluster_memberships(&self.centroids, observations, memberships);
    }

    fn default_target(&self, x: &ArrayBase<DA, Ix2>) -> Array1<usize> {
        Array1::zeros(x.nrows())
    }
}

impl KMeans<f64> {
    /// Given one customer, return the index of the cluster closest to its
    /// (income, spending) position.
    ///
    /// Fails with [`KMeansError::FeatureCount`] if the model was not fitted on two features.
    pub fn predict_customer(&self, customer: &Customer) -> Result<usize, KMeansError> {
        let n_features = self.centroids.ncols();
        if n_features != 2 {
            return Err(KMeansError::FeatureCount(n_features));
        }
        let observation = ndarray::array![customer.annual_income(), customer.spending_score()];
        Ok(closest_centroid(&self.centroids, &observation).0)
    }
}

/// K-means is an iterative algorithm.
/// We will perform the assignment and update steps until we are satisfied
/// (according to our convergence criteria).
///
/// `compute_centroids` returns a 2-dimensional array,
/// where the i-th row corresponds to the i-th cluster. A populated cluster moves to the mean of
/// its members; an empty one is handled according to `policy`, so the number of rows never
/// changes.
pub(crate) fn compute_centroids<F: Float>(
    old_centroids: &Array2<F>,
    // (n_observations, n_features)
    observations: &ArrayBase<impl Data<Elem = F>, Ix2>,
    // (n_observations,)
    cluster_memberships: &ArrayBase<impl Data<Elem = usize>, Ix1>,
    policy: EmptyClusterPolicy,
    (low, high): (F, F),
    rng: &mut impl Rng,
) -> Array2<F> {
    let n_clusters = old_centroids.nrows();
    let mut counts: Array1<usize> = Array1::zeros(n_clusters);
    let mut centroids = Array2::zeros(old_centroids.dim());

    Zip::from(observations.rows())
        .and(cluster_memberships)
        .for_each(|observation, &cluster_membership| {
            let mut centroid = centroids.row_mut(cluster_membership);
            centroid += &observation;
            counts[cluster_membership] += 1;
        });

    for (cluster, (mut centroid, &count)) in centroids
        .axis_iter_mut(Axis(0))
        .zip(counts.iter())
        .enumerate()
    {
        if count > 0 {
            centroid /= F::cast(count);
            continue;
        }
        match policy {
            EmptyClusterPolicy::Reseed => {
                centroid.mapv_inplace(|_| rng.gen_range(low..high));
                warn!(cluster, "reseeded empty cluster at a random position");
            }
            EmptyClusterPolicy::Retain => centroid.assign(&old_centroids.row(cluster)),
        }
    }
    centroids
}

/// Returns `true` when every centroid moved by an euclidean distance lower or equal than
/// `tolerance`. Centroid sets of different shapes never count as converged.
pub fn has_converged<F: Float>(
    old_centroids: &ArrayBase<impl Data<Elem = F>, Ix2>,
    new_centroids: &ArrayBase<impl Data<Elem = F>, Ix2>,
    tolerance: F,
) -> bool {
    old_centroids.dim() == new_centroids.dim()
        && old_centroids
            .rows()
            .into_iter()
            .zip(new_centroids.rows())
            .all(|(old, new)| euclidean(&old, &new) <= tolerance)
}

// Update `cluster_memberships` with the index of the cluster each observation belongs to.
pub(crate) fn update_cluster_memberships<F: Float>(
    centroids: &ArrayBase<impl Data<Elem = F>, Ix2>,
    observations: &ArrayBase<impl Data<Elem = F>, Ix2>,
    cluster_memberships: &mut ArrayBase<impl DataMut<Elem = usize>, Ix1>,
) {
    Zip::from(observations.axis_iter(Axis(0)))
        .and(cluster_memberships)
        .for_each(|observation, cluster_membership| {
            *cluster_membership = closest_centroid(centroids, &observation).0
        });
}

// Updates `dists` with the squared distance of each observation from its closest centroid.
pub(crate) fn update_min_dists<F: Float>(
    centroids: &ArrayBase<impl Data<Elem = F>, Ix2>,
    observations: &ArrayBase<impl Data<Elem = F>, Ix2>,
    dists: &mut ArrayBase<impl DataMut<Elem = F>, Ix1>,
) {
    Zip::from(observations.axis_iter(Axis(0)))
        .and(dists)
        .for_each(|observation, dist| *dist = closest_centroid(centroids, &observation).1);
}

/// Given a matrix of centroids with shape (n_centroids, n_features) and an observation,
/// return the index of the closest centroid (the index of the corresponding row in `centroids`)
/// along with the squared distance to it. Ties go to the lowest index.
pub(crate) fn closest_centroid<F: Float>(
    // (n_centroids, n_features)
    centroids: &ArrayBase<impl Data<Elem = F>, Ix2>,
    // (n_features)
    observation: &ArrayBase<impl Data<Elem = F>, Ix1>,
) -> (usize, F) {
    let first_centroid = centroids.row(0);
    let (mut closest_index, mut minimum_distance) = (0, sq_euclidean(&first_centroid, observation));

    for (centroid_index, centroid) in centroids.rows().into_iter().enumerate().skip(1) {
        let distance = sq_euclidean(&centroid, observation);
        if distance < minimum_distance {
            closest_index = centroid_index;
            minimum_distance = distance;
        }
    }
    (closest_index, minimum_distance)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::{array, concatenate, Array};
    use ndarray_rand::rand_distr::Uniform;
    use ndarray_rand::RandomExt;
    use rand_xoshiro::Xoshiro256Plus;
    use segmentation::traits::Predict;
    use segmentation::ParamGuard;

    macro_rules! calc_memberships {
        ($centroids:expr, $obs:expr) => {{
            let mut memberships = Array1::zeros($obs.nrows());
            update_cluster_memberships(&$centroids, &$obs, &mut memberships);
            memberships
        }};
    }

    #[test]
    fn autotraits() {
        fn has_autotraits<T: Send + Sync + Sized + Unpin>() {}
        has_autotraits::<KMeans<f64>>();
        has_autotraits::<KMeansError>();
    }

    #[test]
    fn test_min_dists() {
        let centroids = array![[0.0, 1.0], [40.0, 10.0]];
        let observations = array![[3.0, 4.0], [1.0, 3.0], [25.0, 15.0]];
        let mut dists = Array1::zeros(observations.nrows());

        update_min_dists(&centroids, &observations, &mut dists);
        assert_abs_diff_eq!(dists, array![18.0, 5.0, 250.0]);
    }

    #[test]
    fn compute_centroids_works() {
        let cluster_size = 100;
        let n_features = 2;
        let mut rng = Xoshiro256Plus::seed_from_u64(42);

        // Let's setup a synthetic set of observations, composed of two clusters with known means
        let cluster_1: Array2<f64> =
            Array::random_using((cluster_size, n_features), Uniform::new(-100., 100.), &mut rng);
        let memberships_1 = Array1::zeros(cluster_size);
        let expected_centroid_1 = cluster_1.sum_axis(Axis(0)) / cluster_size as f64;

        let cluster_2: Array2<f64> =
            Array::random_using((cluster_size, n_features), Uniform::new(-100., 100.), &mut rng);
        let memberships_2 = Array1::ones(cluster_size);
        let expected_centroid_2 = cluster_2.sum_axis(Axis(0)) / cluster_size as f64;

        let observations = concatenate(Axis(0), &[cluster_1.view(), cluster_2.view()]).unwrap();
        let memberships =
            concatenate(Axis(0), &[memberships_1.view(), memberships_2.view()]).unwrap();

        let old_centroids = Array2::zeros((2, n_features));
        let centroids = compute_centroids(
            &old_centroids,
            &observations,
            &memberships,
            EmptyClusterPolicy::Reseed,
            (0., 100.),
            &mut rng,
        );
        assert_abs_diff_eq!(
            centroids.index_axis(Axis(0), 0),
            expected_centroid_1,
            epsilon = 1e-5
        );
        assert_abs_diff_eq!(
            centroids.index_axis(Axis(0), 1),
            expected_centroid_2,
            epsilon = 1e-5
        );

        assert_eq!(centroids.len_of(Axis(0)), 2);
    }

    #[test]
    fn test_empty_cluster_is_reseeded() {
        let mut rng = Xoshiro256Plus::seed_from_u64(42);
        let observations = array![[1.0, 2.0], [3.0, 4.0]];
        // cluster 1 never shows up
        let memberships = array![0, 2];
        let old_centroids = Array2::from_elem((3, 2), -50.);
        let centroids = compute_centroids(
            &old_centroids,
            &observations,
            &memberships,
            EmptyClusterPolicy::Reseed,
            (0., 100.),
            &mut rng,
        );
        assert_eq!(centroids.dim(), (3, 2));
        assert_abs_diff_eq!(centroids.row(0), array![1.0, 2.0]);
        assert_abs_diff_eq!(centroids.row(2), array![3.0, 4.0]);
        for &v in centroids.row(1) {
            assert!((0. ..100.).contains(&v));
        }
    }

    #[test]
    fn test_empty_cluster_is_retained() {
        let mut rng = Xoshiro256Plus::seed_from_u64(42);
        let observations = array![[1.0, 2.0], [3.0, 4.0]];
        let memberships = array![0, 0];
        let old_centroids = array![[0., 0.], [-7., 9.]];
        let centroids = compute_centroids(
            &old_centroids,
            &observations,
            &memberships,
            EmptyClusterPolicy::Retain,
            (0., 100.),
            &mut rng,
        );
        assert_abs_diff_eq!(centroids, array![[2., 3.], [-7., 9.]]);
    }

    #[test]
    fn convergence_check() {
        let centroids = array![[10., 10.], [50., 80.]];
        assert!(has_converged(&centroids, &centroids, 0.));

        let moved = array![[10.06, 10.08], [50., 80.]];
        // moved by 0.1, up to rounding
        assert!(has_converged(&centroids, &moved, 0.1 + 1e-12));
        // a move of exactly the tolerance still counts as converged
        assert!(has_converged(&array![[0., 0.]], &array![[0.1, 0.]], 0.1));
        assert!(!has_converged(&centroids, &moved, 0.09));

        // a single centroid over the tolerance is enough to keep going
        let one_jump = array![[10., 10.], [50., 81.]];
        assert!(!has_converged(&centroids, &one_jump, 0.1));

        assert!(!has_converged(&centroids, &array![[10., 10.]], 0.1));
    }

    #[test]
    // An observation is closest to itself.
    fn nothing_is_closer_than_self() {
        let n_centroids = 20;
        let n_features = 5;
        let mut rng = Xoshiro256Plus::seed_from_u64(42);
        let centroids: Array2<f64> = Array::random_using(
            (n_centroids, n_features),
            Uniform::new(-100., 100.),
            &mut rng,
        );

        let expected_memberships = (0..n_centroids).collect::<Array1<_>>();
        assert_eq!(calc_memberships!(centroids, centroids), expected_memberships);
    }

    #[test]
    fn oracle_test_for_closest_centroid() {
        let centroids = array![[0., 0.], [1., 2.], [20., 0.], [0., 20.],];
        let observations = array![[1., 0.6], [20., 2.], [20., 0.], [7., 20.],];
        let memberships = array![0usize, 2, 2, 3];

        assert_eq!(calc_memberships!(centroids, observations), memberships);
    }

    #[test]
    fn ties_go_to_the_lowest_index() {
        let centroids = array![[0., 0.], [2., 0.], [0., 0.]];
        let observation = array![1., 0.];
        assert_eq!(closest_centroid(&centroids, &observation).0, 0);
        let observation = array![0., 0.];
        assert_eq!(closest_centroid(&centroids, &observation).0, 0);
    }

    #[test]
    fn single_point_cluster() {
        let observations = array![[0., 0.], [0., 0.], [0., 0.], [0., 0.]];
        let model = KMeans::params_with_rng(1, Xoshiro256Plus::seed_from_u64(3))
            .fit(&observations)
            .unwrap();
        assert_eq!(model.n_iterations(), 1);
        assert!(model.converged());
        assert_abs_diff_eq!(model.centroids(), &array![[0., 0.]]);
        assert_abs_diff_eq!(model.wcss(), 0.);
        assert_eq!(model.memberships(), &array![0usize, 0, 0, 0]);
        assert_eq!(model.cluster_count(), &array![4usize]);
    }

    #[test]
    fn one_cluster_per_point() {
        let observations = array![[15., 39.], [16., 81.], [70., 6.], [88., 77.], [55., 50.]];
        let model = KMeans::params_with_rng(5, Xoshiro256Plus::seed_from_u64(8))
            .fit(&observations)
            .unwrap();
        assert_abs_diff_eq!(model.wcss(), 0.);
        assert_eq!(model.cluster_count(), &Array1::<usize>::ones(5));
    }

    #[test]
    fn precomputed_start_is_honoured() {
        let observations = array![[0., 0.], [1., 1.], [10., 10.], [11., 11.]];
        let model = KMeans::params(2)
            .init_method(KMeansInit::Precomputed(array![[0., 0.], [10., 10.]]))
            .fit(&observations)
            .unwrap();
        assert_abs_diff_eq!(model.centroids(), &array![[0.5, 0.5], [10.5, 10.5]]);
        assert_eq!(model.memberships(), &array![0usize, 0, 1, 1]);
        // the second iteration finds the centroids in place
        assert_eq!(model.n_iterations(), 2);
        assert_abs_diff_eq!(model.wcss(), 2.);
    }

    #[test]
    fn precomputed_shape_is_checked() {
        let observations = array![[0., 0.], [1., 1.]];
        let res = KMeans::params(2)
            .init_method(KMeansInit::Precomputed(array![[0., 0.]]))
            .fit(&observations);
        assert!(matches!(
            res,
            Err(KMeansError::InvalidInitShape {
                expected: (2, 2),
                found: (1, 2)
            })
        ));
    }

    #[test]
    fn empty_dataset_is_rejected() {
        let observations = Array2::<f64>::zeros((0, 2));
        let res = KMeans::params(2).fit(&observations);
        assert!(matches!(res, Err(KMeansError::EmptyDataset)));
    }

    #[test]
    fn invalid_params_are_rejected_on_fit() {
        let observations = array![[0., 0.], [1., 1.]];
        let res = KMeans::params(0).fit(&observations);
        assert!(matches!(res, Err(KMeansError::InvalidParams(_))));
    }

    #[test]
    fn iteration_cap_is_a_normal_outcome() {
        let mut rng = Xoshiro256Plus::seed_from_u64(42);
        let observations: Array2<f64> =
            Array::random_using((200, 2), Uniform::new(0., 100.), &mut rng);
        let model = KMeans::params_with_rng(6, rng)
            .tolerance(0.)
            .max_n_iterations(1)
            .fit(&observations)
            .unwrap();
        assert_eq!(model.n_iterations(), 1);
        assert!(!model.converged());
        assert_eq!(model.memberships().len(), 200);
    }

    #[test]
    fn same_rng_same_model() {
        let mut rng = Xoshiro256Plus::seed_from_u64(42);
        let observations: Array2<f64> =
            Array::random_using((150, 2), Uniform::new(0., 100.), &mut rng);
        let params = KMeans::params_with_rng(4, rng).check().unwrap();
        let first = params.fit(&observations).unwrap();
        let second = params.fit(&observations).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn memberships_and_iterations_stay_in_bounds() {
        let mut rng = Xoshiro256Plus::seed_from_u64(7);
        let observations: Array2<f64> =
            Array::random_using((120, 2), Uniform::new(0., 100.), &mut rng);
        for k in 1..=8 {
            let model = KMeans::params_with_rng(k, rng.clone())
                .max_n_iterations(20)
                .fit(&observations)
                .unwrap();
            assert_eq!(model.memberships().len(), 120);
            assert!(model.memberships().iter().all(|&m| m < k));
            assert_eq!(model.centroids().nrows(), k);
            assert!(model.n_iterations() >= 1 && model.n_iterations() <= 20);
            assert!(model.wcss() >= 0.);
        }
    }

    #[test]
    fn predict_matches_training_memberships() {
        let mut rng = Xoshiro256Plus::seed_from_u64(42);
        let observations: Array2<f64> =
            Array::random_using((100, 2), Uniform::new(0., 100.), &mut rng);
        let model = KMeans::params_with_rng(3, rng)
            .tolerance(1e-6)
            .fit(&observations)
            .unwrap();
        if model.converged() {
            let predicted: Array1<usize> = model.predict(&observations);
            assert_eq!(&predicted, model.memberships());
        }

        let customer = Customer::new(1, segmentation::Gender::Male, 30, 50., 50.);
        let cluster = model.predict_customer(&customer).unwrap();
        let expected = closest_centroid(model.centroids(), &array![50., 50.]).0;
        assert_eq!(cluster, expected);
    }

    #[test]
    fn customer_prediction_needs_a_two_feature_model() {
        let observations = array![[1., 2., 3.], [4., 5., 6.]];
        let model = KMeans::params(1).fit(&observations).unwrap();
        let customer = Customer::new(1, segmentation::Gender::Male, 30, 50., 50.);
        assert!(matches!(
            model.predict_customer(&customer),
            Err(KMeansError::FeatureCount(3))
        ));
    }
}
