use std::fmt;

use ndarray::{ArrayBase, Data, Ix1, OwnedRepr, RawDataClone, ViewRepr};

mod impl_datasets;

pub(crate) use impl_datasets::check_shapes;


/// A training set made of paired features and targets
///
/// Both sequences are one-dimensional and correspond by index: the i-th
/// target is the ground truth for the i-th feature. A [`DatasetBase`] can only
/// be built through [`DatasetBase::new`] (or `TryFrom`), which guarantees that
/// it holds at least one sample and that features and targets have the same
/// length. Datafits and solvers rely on this invariant and never re-check it.
pub struct DatasetBase<S>
where
    S: Data,
{
    features: ArrayBase<S, Ix1>,
    targets: ArrayBase<S, Ix1>,
}

/// A dataset owning its features and targets
pub type Dataset<F> = DatasetBase<OwnedRepr<F>>;

/// A dataset borrowing its features and targets
pub type DatasetView<'a, F> = DatasetBase<ViewRepr<&'a F>>;

impl<S> Clone for DatasetBase<S>
where
    S: Data + RawDataClone,
{
    fn clone(&self) -> Self {
        DatasetBase {
            features: self.features.clone(),
            targets: self.targets.clone(),
        }
    }
}

impl<S, S2> PartialEq<DatasetBase<S2>> for DatasetBase<S>
where
    S: Data,
    S2: Data<Elem = S::Elem>,
    S::Elem: PartialEq,
{
    fn eq(&self, other: &DatasetBase<S2>) -> bool {
        self.features == other.features && self.targets == other.targets
    }
}

impl<S> fmt::Debug for DatasetBase<S>
where
    S: Data,
    S::Elem: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatasetBase")
            .field("features", &self.features)
            .field("targets", &self.targets)
            .finish()
    }
}
