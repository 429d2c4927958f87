use ndarray::{ArrayBase, ArrayView1, Data, Ix1};

use super::{DatasetBase, DatasetView};
use crate::error::{GdError, Result};
use crate::Float;

/// Checks that features and targets can form a training set: they must be
/// non-empty and of equal length.
pub(crate) fn check_shapes(n_features: usize, n_targets: usize) -> Result<()> {
    if n_features != n_targets {
        Err(GdError::ShapeMismatch {
            features: n_features,
            targets: n_targets,
        })
    } else if n_features == 0 {
        Err(GdError::EmptyDataset)
    } else {
        Ok(())
    }
}

/// This implementation block provides methods to create datasets and to get
/// features and targets from them.
impl<F: Float, S: Data<Elem = F>> DatasetBase<S> {
    /// This method instantiates a new dataset from a feature array and a
    /// target array, failing if they are empty or of different lengths.
    pub fn new(features: ArrayBase<S, Ix1>, targets: ArrayBase<S, Ix1>) -> Result<Self> {
        check_shapes(features.len(), targets.len())?;
        Ok(DatasetBase { features, targets })
    }

    /// This method is a getter for the features.
    pub fn features(&self) -> ArrayView1<F> {
        self.features.view()
    }

    /// This method is a getter for the targets.
    pub fn targets(&self) -> ArrayView1<F> {
        self.targets.view()
    }

    /// Number of (feature, target) pairs, always at least one.
    pub fn n_samples(&self) -> usize {
        self.features.len()
    }

    /// Borrows the dataset without copying the underlying arrays.
    pub fn view(&self) -> DatasetView<'_, F> {
        DatasetBase {
            features: self.features.view(),
            targets: self.targets.view(),
        }
    }

    /// Iterates over the (feature, target) pairs in order.
    pub fn samples(&self) -> impl Iterator<Item = (F, F)> + '_ {
        self.features
            .iter()
            .zip(self.targets.iter())
            .map(|(&x, &y)| (x, y))
    }
}

/// This implementation block provides a method for the creation of datasets
/// from a (features, targets) tuple.
impl<F: Float, S: Data<Elem = F>> TryFrom<(ArrayBase<S, Ix1>, ArrayBase<S, Ix1>)>
    for DatasetBase<S>
{
    type Error = GdError;

    fn try_from(data: (ArrayBase<S, Ix1>, ArrayBase<S, Ix1>)) -> Result<Self> {
        DatasetBase::new(data.0, data.1)
    }
}
