use crate::datasets::DatasetBase;
use ndarray::Data;

/// Fit trait
///
/// The fittable trait allows an estimator to be fitted to a dataset (paired
/// features and targets). More formally, the model estimates the slope and
/// intercept that minimize an empirical risk (loss function).
pub trait Fit<S: Data, E: std::error::Error> {
    type Object;

    fn fit(&self, dataset: &DatasetBase<S>) -> Result<Self::Object, E>;
}
