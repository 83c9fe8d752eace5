//! Common metrics for clustering
use crate::distance::sq_euclidean;
use crate::error::{Error, Result};
use crate::Float;
use ndarray::{Array1, ArrayBase, Data, Ix1, Ix2, Zip};

/// Within-cluster sum of squares.
///
/// Given observations with shape `(n_observations, n_features)`, centroids with shape
/// `(n_clusters, n_features)` and the cluster index of every observation, sums the squared
/// euclidean distance between each observation and the centroid it is assigned to.
///
/// The value is never negative and lower is better. It shrinks as the number of clusters grows,
/// which is why it is compared across cluster counts (elbow method) rather than read in
/// isolation.
pub fn wcss<F: Float>(
    observations: &ArrayBase<impl Data<Elem = F>, Ix2>,
    centroids: &ArrayBase<impl Data<Elem = F>, Ix2>,
    memberships: &ArrayBase<impl Data<Elem = usize>, Ix1>,
) -> Result<F> {
    if observations.nrows() != memberships.len() {
        return Err(Error::MismatchedLength {
            expected: observations.nrows(),
            found: memberships.len(),
        });
    }
    let n_clusters = centroids.nrows();
    if let Some(&membership) = memberships.iter().find(|&&m| m >= n_clusters) {
        return Err(Error::UnknownCluster {
            membership,
            n_clusters,
        });
    }

    let mut sum = F::zero();
    Zip::from(observations.rows())
        .and(memberships)
        .for_each(|observation, &membership| {
            sum += sq_euclidean(&observation, &centroids.row(membership));
        });
    Ok(sum)
}

/// Number of observations assigned to each of the `n_clusters` clusters.
///
/// Memberships outside `0..n_clusters` are reported as an error.
pub fn cluster_sizes(
    memberships: &ArrayBase<impl Data<Elem = usize>, Ix1>,
    n_clusters: usize,
) -> Result<Array1<usize>> {
    let mut sizes = Array1::zeros(n_clusters);
    for &membership in memberships {
        match sizes.get_mut(membership) {
            Some(size) => *size += 1,
            None => {
                return Err(Error::UnknownCluster {
                    membership,
                    n_clusters,
                })
            }
        }
    }
    Ok(sizes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::{array, Array2};

    #[test]
    fn wcss_sums_squared_distances() {
        let observations = array![[0., 0.], [2., 0.], [10., 10.], [10., 14.]];
        let centroids = array![[1., 0.], [10., 12.]];
        let memberships = array![0, 0, 1, 1];
        let score = wcss(&observations, &centroids, &memberships).unwrap();
        assert_abs_diff_eq!(score, 1. + 1. + 4. + 4.);
    }

    #[test]
    fn wcss_is_zero_when_points_are_centroids() {
        let observations = array![[3., 4.], [50., 60.], [7., 1.]];
        let memberships = array![0, 1, 2];
        let score = wcss(&observations, &observations, &memberships).unwrap();
        assert_abs_diff_eq!(score, 0.);
    }

    #[test]
    fn wcss_of_nothing() {
        let observations = Array2::<f64>::zeros((0, 2));
        let centroids = array![[1., 1.]];
        let memberships = Array1::<usize>::zeros(0);
        assert_abs_diff_eq!(wcss(&observations, &centroids, &memberships).unwrap(), 0.);
    }

    #[test]
    fn wcss_rejects_bad_memberships() {
        let observations = array![[0., 0.], [1., 1.]];
        let centroids = array![[0., 0.]];

        let res = wcss(&observations, &centroids, &array![0]);
        assert!(matches!(
            res,
            Err(Error::MismatchedLength {
                expected: 2,
                found: 1
            })
        ));

        let res = wcss(&observations, &centroids, &array![0, 1]);
        assert!(matches!(
            res,
            Err(Error::UnknownCluster {
                membership: 1,
                n_clusters: 1
            })
        ));
    }

    #[test]
    fn sizes_count_every_cluster() {
        let sizes = cluster_sizes(&array![2, 0, 2, 2], 4).unwrap();
        assert_eq!(sizes, array![1usize, 0, 3, 0]);
        assert!(cluster_sizes(&array![4], 4).is_err());
    }
}
