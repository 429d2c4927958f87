use log::debug;
use ndarray::{Array1, ArrayBase, Data, Ix1};

use super::hyperparams::{LinearRegressionParams, LinearRegressionValidParams};
use super::traits::Fit;

use crate::datafits::{Datafit, Quadratic};
use crate::datasets::DatasetBase;
use crate::error::{GdError, Result};
use crate::solver::{GDSolver, Params, Solver};
use crate::Float;

/// The linear regression estimator
///
/// Fits `f(x) = w * x + b` to a univariate dataset by running batch gradient
/// descent on the quadratic datafit. Besides the fitted parameters, it keeps
/// the cost and parameter histories of the optimization for later inspection
/// (e.g. plotting the learning curve).
#[derive(Debug, Clone, PartialEq)]
pub struct LinearRegression<F> {
    params: Params<F>,
    cost_history: Vec<F>,
    param_history: Vec<Params<F>>,
}

impl<F: Float> LinearRegression<F> {
    /// This method instantiates a linear regression estimator with default
    /// parameters for the gradient descent solver.
    pub fn params() -> LinearRegressionParams<F> {
        LinearRegressionParams::new()
    }

    /// Fitted slope `w`.
    pub fn coefficient(&self) -> F {
        self.params.w
    }

    /// Fitted intercept `b`.
    pub fn intercept(&self) -> F {
        self.params.b
    }

    pub fn fitted_params(&self) -> Params<F> {
        self.params
    }

    pub fn cost_history(&self) -> &[F] {
        &self.cost_history
    }

    pub fn param_history(&self) -> &[Params<F>] {
        &self.param_history
    }

    /// Predicts `w * x + b` for every feature.
    pub fn predict<S: Data<Elem = F>>(&self, features: &ArrayBase<S, Ix1>) -> Array1<F> {
        let Params { w, b } = self.params;
        features.mapv(|x| w * x + b)
    }

    /// Evaluates the quadratic cost of the fitted parameters on a dataset.
    pub fn cost<S: Data<Elem = F>>(&self, dataset: &DatasetBase<S>) -> F {
        Quadratic.value(dataset, self.params.w, self.params.b)
    }
}

/// This implements the gradient descent optimization procedure for the
/// quadratic datafit.
impl<F: Float, S: Data<Elem = F>> Fit<S, GdError> for LinearRegressionValidParams<F> {
    /// If successful, the output of the gradient descent solver is an instance
    /// of [`LinearRegression`] containing the fitted parameters.
    type Object = LinearRegression<F>;

    fn fit(&self, dataset: &DatasetBase<S>) -> Result<Self::Object> {
        let solver = Solver::new()
            .learning_rate(self.learning_rate())
            .n_iterations(self.n_iterations())
            .history_mode(self.history_mode())
            .verbose(self.verbose());

        let res = solver.solve(dataset, &Quadratic, self.init());
        debug!(
            "fitted linear regression: w = {}, b = {}",
            res.params.w, res.params.b
        );

        Ok(LinearRegression {
            params: res.params,
            cost_history: res.cost_history,
            param_history: res.param_history,
        })
    }
}
