use std::marker::PhantomData;

use ndarray::{Array1, ArrayView1, Data};

use super::Float;
use crate::datasets::{check_shapes, DatasetBase};
use crate::error::Result;

#[cfg(test)]
mod tests;

/// This trait is the loss strategy injected into the gradient descent
/// routine. It provides [`Datafit::value`] and [`Datafit::gradient`] for a
/// linear model `f(x) = w * x + b`, so that the solver never needs to know how
/// the loss is computed.
///
/// Both methods receive an already validated [`DatasetBase`], hence they
/// cannot fail.
pub trait Datafit<F: Float> {
    /// This method is called when evaluating the objective value at `(w, b)`.
    fn value<S: Data<Elem = F>>(&self, dataset: &DatasetBase<S>, w: F, b: F) -> F;

    /// This method computes the gradient of the datafit with respect to
    /// `(w, b)`, returned as `(dw, db)`.
    fn gradient<S: Data<Elem = F>>(&self, dataset: &DatasetBase<S>, w: F, b: F) -> (F, F);
}

/// Quadratic datafit
///
/// The halved mean squared error used in least-squares regression:
/// ```ignore
/// 1 / (2 * n_samples) * ||w * x + b - y||^2_2
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Quadratic;

impl Quadratic {
    pub fn new() -> Self {
        Quadratic
    }
}

impl<F: Float> Datafit<F> for Quadratic {
    /// This method computes the value of the datafit given the model fit.
    fn value<S: Data<Elem = F>>(&self, dataset: &DatasetBase<S>, w: F, b: F) -> F {
        quadratic_value(dataset.features(), dataset.targets(), w, b)
    }

    /// This method computes the gradient of the datafit at `(w, b)`.
    fn gradient<S: Data<Elem = F>>(&self, dataset: &DatasetBase<S>, w: F, b: F) -> (F, F) {
        quadratic_gradient(dataset.features(), dataset.targets(), w, b)
    }
}

/// Datafit built from a pair of plain functions
///
/// Each function receives `(features, targets, w, b)`. The first returns the
/// objective value and the second the gradient `(dw, db)`. This lets callers
/// plug in an alternative loss without implementing [`Datafit`] themselves.
pub struct FnDatafit<F, C, G> {
    cost: C,
    gradient: G,
    _float: PhantomData<F>,
}

impl<F, C, G> FnDatafit<F, C, G>
where
    F: Float,
    C: Fn(ArrayView1<F>, ArrayView1<F>, F, F) -> F,
    G: Fn(ArrayView1<F>, ArrayView1<F>, F, F) -> (F, F),
{
    pub fn new(cost: C, gradient: G) -> Self {
        FnDatafit {
            cost,
            gradient,
            _float: PhantomData,
        }
    }
}

impl<F, C, G> Datafit<F> for FnDatafit<F, C, G>
where
    F: Float,
    C: Fn(ArrayView1<F>, ArrayView1<F>, F, F) -> F,
    G: Fn(ArrayView1<F>, ArrayView1<F>, F, F) -> (F, F),
{
    fn value<S: Data<Elem = F>>(&self, dataset: &DatasetBase<S>, w: F, b: F) -> F {
        (self.cost)(dataset.features(), dataset.targets(), w, b)
    }

    fn gradient<S: Data<Elem = F>>(&self, dataset: &DatasetBase<S>, w: F, b: F) -> (F, F) {
        (self.gradient)(dataset.features(), dataset.targets(), w, b)
    }
}

/// This function computes the halved mean squared error of the linear model
/// `(w, b)` on raw feature and target arrays.
///
/// It fails if the arrays are empty or of different lengths.
pub fn compute_cost<F: Float>(x: ArrayView1<F>, y: ArrayView1<F>, w: F, b: F) -> Result<F> {
    check_shapes(x.len(), y.len())?;
    Ok(quadratic_value(x, y, w, b))
}

/// This function computes the gradient `(dw, db)` of the halved mean squared
/// error with respect to the parameters of the linear model `(w, b)`.
///
/// It fails if the arrays are empty or of different lengths.
pub fn compute_gradient<F: Float>(
    x: ArrayView1<F>,
    y: ArrayView1<F>,
    w: F,
    b: F,
) -> Result<(F, F)> {
    check_shapes(x.len(), y.len())?;
    Ok(quadratic_gradient(x, y, w, b))
}

/// Residuals `w * x_i + b - y_i` of the linear model.
fn residuals<F: Float>(x: ArrayView1<F>, y: ArrayView1<F>, w: F, b: F) -> Array1<F> {
    x.mapv(|xi| w * xi + b) - &y
}

// Callers guarantee n_samples > 0 and matching lengths.
fn quadratic_value<F: Float>(x: ArrayView1<F>, y: ArrayView1<F>, w: F, b: F) -> F {
    let n_samples = x.len();
    let r = residuals(x, y, w, b);
    r.dot(&r) / F::cast(2 * n_samples)
}

fn quadratic_gradient<F: Float>(x: ArrayView1<F>, y: ArrayView1<F>, w: F, b: F) -> (F, F) {
    let n_samples = F::cast(x.len());
    let r = residuals(x, y, w, b);
    let dw = r.dot(&x) / n_samples;
    let db = r.sum() / n_samples;
    (dw, db)
}
