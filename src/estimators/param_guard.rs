use super::traits::Fit;
use crate::datasets::DatasetBase;
use ndarray::Data;
use std::error::Error;

/// Hyperparameters that must be validated before fitting
///
/// Builders such as [`LinearRegressionParams`](super::hyperparams::LinearRegressionParams)
/// only hand out their checked counterpart once every value is in range. The
/// blanket [`Fit`] impl below lets callers fit directly from the unchecked
/// builder, the check running first.
pub trait ParamGuard {
    /// The checked hyperparameters
    type Checked;
    /// Error type resulting from failed hyperparameter checking
    type Error: Error;

    /// Borrows the checked hyperparameters, or reports the first invalid value
    fn check_ref(&self) -> Result<&Self::Checked, Self::Error>;

    /// Consumes the builder into the checked hyperparameters. Must validate
    /// exactly like [`ParamGuard::check_ref`].
    fn check(self) -> Result<Self::Checked, Self::Error>;

    /// Panics on invalid hyperparameters; meant for tests and demos
    fn check_unwrap(self) -> Self::Checked
    where
        Self: Sized,
    {
        self.check().unwrap()
    }
}

/// Checks the hyperparameters, then fits with the checked set. A checking error
/// is converted into the error type of the underlying `Fit`.
impl<S: Data, E, P: ParamGuard> Fit<S, E> for P
where
    P::Checked: Fit<S, E>,
    E: Error + From<P::Error>,
{
    type Object = <<P as ParamGuard>::Checked as Fit<S, E>>::Object;

    fn fit(&self, dataset: &DatasetBase<S>) -> Result<Self::Object, E> {
        let checked = self.check_ref()?;
        checked.fit(dataset)
    }
}
