use ndarray::Data;

use super::{gradient_descent, GDSolver, GradientDescentResult, HistoryMode, Params, Progress, Solver};

use crate::datafits::Datafit;
use crate::datasets::DatasetBase;
use crate::Float;

impl<F: Float> Default for Solver<F> {
    fn default() -> Self {
        Solver {
            learning_rate: F::cast(1e-2),
            n_iterations: 10000,
            history_mode: HistoryMode::Uniform,
            verbose: false,
        }
    }
}

impl<F: Float> Solver<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn learning_rate(mut self, learning_rate: F) -> Self {
        self.learning_rate = learning_rate;
        self
    }

    pub fn n_iterations(mut self, n_iterations: usize) -> Self {
        self.n_iterations = n_iterations;
        self
    }

    pub fn history_mode(mut self, history_mode: HistoryMode) -> Self {
        self.history_mode = history_mode;
        self
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}

impl<F, DF> GDSolver<F, DF> for Solver<F>
where
    F: Float,
    DF: Datafit<F>,
{
    fn solve<S: Data<Elem = F>>(
        &self,
        dataset: &DatasetBase<S>,
        datafit: &DF,
        init: Params<F>,
    ) -> GradientDescentResult<F> {
        self.solve_with_observer(dataset, datafit, init, |_| {})
    }

    fn solve_with_observer<S, O>(
        &self,
        dataset: &DatasetBase<S>,
        datafit: &DF,
        init: Params<F>,
        observer: O,
    ) -> GradientDescentResult<F>
    where
        S: Data<Elem = F>,
        O: FnMut(&Progress<F>),
    {
        gradient_descent(
            dataset,
            datafit,
            init.w,
            init.b,
            self.learning_rate,
            self.n_iterations,
            self.history_mode,
            self.verbose,
            observer,
        )
    }
}
