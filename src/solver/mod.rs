use std::fmt;

use log::{debug, info};
use ndarray::Data;

use crate::datafits::Datafit;
use crate::datasets::DatasetBase;
use crate::helpers::helpers::progress_interval;
use crate::Float;

mod impl_solver;


/// Parameters `(w, b)` of the linear model `f(x) = w * x + b`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Params<F> {
    /// Slope
    pub w: F,
    /// Intercept
    pub b: F,
}

impl<F: Float> Params<F> {
    pub fn new(w: F, b: F) -> Self {
        Params { w, b }
    }
}

/// Controls how the cost and parameter histories are recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryMode {
    /// Every iteration records the cost and the parameters after the update.
    /// Both histories have one entry per iteration.
    Uniform,
    /// Reproduces the historical recording scheme. Every iteration but the last
    /// records the cost after the update. The last iteration records the cost
    /// at the *initial* parameters instead, and the updated parameters are
    /// pushed to the parameter history on that iteration only.
    Legacy,
}

impl Default for HistoryMode {
    fn default() -> Self {
        HistoryMode::Uniform
    }
}

/// A progress observation, emitted every `ceil(n_iterations / 10)` iterations
/// starting at iteration 0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Progress<F> {
    pub iteration: usize,
    /// Latest entry of the cost history
    pub cost: F,
    /// Gradient `(dw, db)` used for this iteration's update
    pub gradient: (F, F),
    /// Parameters after this iteration's update
    pub params: Params<F>,
}

impl<F: Float> fmt::Display for Progress<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Iteration {:4}: Cost {:10.8} dj_dw {:.3e}, dj_db {:.3e} w {:.3e}, b {:.3e}",
            self.iteration,
            self.cost,
            self.gradient.0,
            self.gradient.1,
            self.params.w,
            self.params.b
        )
    }
}

/// Output of the gradient descent routine.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientDescentResult<F> {
    /// Parameters after the last update
    pub params: Params<F>,
    /// One cost per iteration
    pub cost_history: Vec<F>,
    /// Parameter snapshots, see [`HistoryMode`] for their number
    pub param_history: Vec<Params<F>>,
}

/// The gradient descent solver
///
/// Holds the optimization settings; the loss is supplied at solve time through
/// a [`Datafit`].
#[derive(Debug, Clone, PartialEq)]
pub struct Solver<F> {
    learning_rate: F,
    n_iterations: usize,
    history_mode: HistoryMode,
    verbose: bool,
}

/// This trait runs an optimization procedure for a datafit on a dataset,
/// starting from some initial parameters.
pub trait GDSolver<F: Float, DF: Datafit<F>> {
    fn solve<S: Data<Elem = F>>(
        &self,
        dataset: &DatasetBase<S>,
        datafit: &DF,
        init: Params<F>,
    ) -> GradientDescentResult<F>;

    /// Same as [`GDSolver::solve`], with `observer` called on every progress
    /// observation.
    fn solve_with_observer<S, O>(
        &self,
        dataset: &DatasetBase<S>,
        datafit: &DF,
        init: Params<F>,
        observer: O,
    ) -> GradientDescentResult<F>
    where
        S: Data<Elem = F>,
        O: FnMut(&Progress<F>);
}

/// This function runs `n_iterations` steps of batch gradient descent on
/// `datafit`, starting from `(w_init, b_init)`:
///
/// ```ignore
/// w <- w - learning_rate * dw
/// b <- b - learning_rate * db
/// ```
///
/// There is no stopping criterion. With `n_iterations == 0` the initial
/// parameters are returned with empty histories. The learning rate is not
/// checked here; use the estimator API for validated hyperparameters.
#[allow(clippy::too_many_arguments)]
pub fn gradient_descent<F, S, DF, O>(
    dataset: &DatasetBase<S>,
    datafit: &DF,
    w_init: F,
    b_init: F,
    learning_rate: F,
    n_iterations: usize,
    history_mode: HistoryMode,
    verbose: bool,
    mut observer: O,
) -> GradientDescentResult<F>
where
    F: Float,
    S: Data<Elem = F>,
    DF: Datafit<F>,
    O: FnMut(&Progress<F>),
{
    debug!(
        "gradient descent: {} samples, {} iterations, learning rate {}, {:?} history",
        dataset.n_samples(),
        n_iterations,
        learning_rate,
        history_mode
    );

    let mut w = w_init;
    let mut b = b_init;

    let mut cost_history = Vec::with_capacity(n_iterations);
    let mut param_history = match history_mode {
        HistoryMode::Uniform => Vec::with_capacity(n_iterations),
        HistoryMode::Legacy => Vec::with_capacity(1),
    };
    let interval = progress_interval(n_iterations);

    for i in 0..n_iterations {
        let (dw, db) = datafit.gradient(dataset, w, b);

        w -= learning_rate * dw;
        b -= learning_rate * db;

        let is_last = i + 1 == n_iterations;
        let cost = match history_mode {
            HistoryMode::Uniform => {
                param_history.push(Params { w, b });
                datafit.value(dataset, w, b)
            }
            HistoryMode::Legacy if is_last => {
                param_history.push(Params { w, b });
                datafit.value(dataset, w_init, b_init)
            }
            HistoryMode::Legacy => datafit.value(dataset, w, b),
        };
        cost_history.push(cost);

        if i % interval == 0 {
            let progress = Progress {
                iteration: i,
                cost,
                gradient: (dw, db),
                params: Params { w, b },
            };
            if verbose {
                info!("{}", progress);
            }
            observer(&progress);
        }
    }

    debug!("gradient descent done: w = {}, b = {}", w, b);

    GradientDescentResult {
        params: Params { w, b },
        cost_history,
        param_history,
    }
}
