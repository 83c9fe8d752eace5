//! Euclidean distance over observation rows
//!
//! Both functions panic if the two rows differ in length.
use ndarray::{ArrayBase, Data, Ix1, Zip};

use crate::Float;

/// Squared euclidean distance. Keeps the ordering of [`euclidean`] without the square root, so
/// it is the one used when only comparisons matter.
pub fn sq_euclidean<F: Float>(
    a: &ArrayBase<impl Data<Elem = F>, Ix1>,
    b: &ArrayBase<impl Data<Elem = F>, Ix1>,
) -> F {
    Zip::from(a)
        .and(b)
        .fold(F::zero(), |acc, &a, &b| acc + (a - b) * (a - b))
}

/// Euclidean distance
pub fn euclidean<F: Float>(
    a: &ArrayBase<impl Data<Elem = F>, Ix1>,
    b: &ArrayBase<impl Data<Elem = F>, Ix1>,
) -> F {
    sq_euclidean(a, b).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    #[test]
    fn three_four_five() {
        let a = array![1., 1.];
        let b = array![4., 5.];
        assert_abs_diff_eq!(sq_euclidean(&a, &b), 25.);
        assert_abs_diff_eq!(euclidean(&a, &b), 5.);
        assert_abs_diff_eq!(euclidean(&b, &a), 5.);
    }

    #[test]
    fn zero_for_identical_rows() {
        let a = array![42.5f32, 17.];
        assert_abs_diff_eq!(euclidean(&a, &a.view()), 0.);
    }
}
