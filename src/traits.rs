//! Provide traits for the different model states
//!
//! Models start out as a set of (possibly unchecked) hyperparameters. Fitting them on a set of
//! records produces a fitted model, which can then assign new records to what it learned.

use std::error::Error;

/// Fittable algorithms
///
/// A fittable algorithm takes a set of records and creates an object whose state depends on
/// them. Fitting is fallible: invalid hyperparameters or unusable records are reported through
/// `E`.
pub trait Fit<R, E: Error + From<crate::error::Error>> {
    type Object;

    fn fit(&self, records: &R) -> Result<Self::Object, E>;
}

/// Predict with the model, writing into a caller-provided target
///
/// Implementors only write the prediction step; [`Predict`] is derived from it.
pub trait PredictInplace<R, T> {
    /// Predict something in place
    fn predict_inplace(&self, x: &R, y: &mut T);

    /// Create targets that `predict_inplace` works with
    fn default_target(&self, x: &R) -> T;
}

/// Predict with the model
///
/// Implemented for every [`PredictInplace`] model on references to its records.
pub trait Predict<R, T> {
    fn predict(&self, x: R) -> T;
}

impl<'a, R: 'a, T, O: PredictInplace<R, T>> Predict<&'a R, T> for O {
    fn predict(&self, records: &'a R) -> T {
        let mut targets = self.default_target(records);
        self.predict_inplace(records, &mut targets);
        targets
    }
}
