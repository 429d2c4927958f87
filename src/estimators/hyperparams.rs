use super::param_guard::ParamGuard;
use crate::error::{GdError, Result};
use crate::solver::{HistoryMode, Params};
use crate::Float;

/// A verified hyperparameter set ready for the fitting of a linear regression
/// model by gradient descent
#[derive(Debug, Clone, PartialEq)]
pub struct LinearRegressionValidParams<F> {
    learning_rate: F,
    n_iterations: usize,
    init: Params<F>,
    history_mode: HistoryMode,
    verbose: bool,
}

impl<F: Float> LinearRegressionValidParams<F> {
    pub fn learning_rate(&self) -> F {
        self.learning_rate
    }

    pub fn n_iterations(&self) -> usize {
        self.n_iterations
    }

    pub fn init(&self) -> Params<F> {
        self.init
    }

    pub fn history_mode(&self) -> HistoryMode {
        self.history_mode
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }
}

/// A hyper-parameter set during construction
///
/// Configures and minimizes the following objective function:
/// ```ignore
/// 1 / (2 * n_samples) * ||w * x + b - y||^2_2
/// ```
/// with a fixed number of batch gradient descent steps.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearRegressionParams<F>(LinearRegressionValidParams<F>);

impl<F: Float> Default for LinearRegressionParams<F> {
    fn default() -> Self {
        Self::new()
    }
}

/// Configure and fit a linear regression model
impl<F: Float> LinearRegressionParams<F> {
    /// Create default linear regression hyper parameters
    pub fn new() -> LinearRegressionParams<F> {
        Self(LinearRegressionValidParams {
            learning_rate: F::cast(1e-2),
            n_iterations: 10000,
            init: Params::default(),
            history_mode: HistoryMode::Uniform,
            verbose: false,
        })
    }

    /// Set the step size of every gradient descent update. Must be strictly
    /// positive.
    /// Defaults to `1e-2` if not set.
    pub fn learning_rate(mut self, learning_rate: F) -> Self {
        self.0.learning_rate = learning_rate;
        self
    }

    /// Set the number of gradient descent steps. There is no early stopping,
    /// exactly this many steps are run.
    /// Defaults to `10000` if not set.
    pub fn n_iterations(mut self, n_iterations: usize) -> Self {
        self.0.n_iterations = n_iterations;
        self
    }

    /// Set the starting slope and intercept.
    ///
    /// Defaults to `(0, 0)` if not set.
    pub fn init(mut self, w: F, b: F) -> Self {
        self.0.init = Params::new(w, b);
        self
    }

    /// Set how the cost and parameter histories are recorded.
    ///
    /// Defaults to [`HistoryMode::Uniform`] if not set.
    pub fn history_mode(mut self, history_mode: HistoryMode) -> Self {
        self.0.history_mode = history_mode;
        self
    }

    /// Logs progress observations at the `info` level.
    ///
    /// Defaults to `false` if not set.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.0.verbose = verbose;
        self
    }
}

impl<F: Float> ParamGuard for LinearRegressionParams<F> {
    type Checked = LinearRegressionValidParams<F>;
    type Error = GdError;

    /// Validate the hyper parameters
    fn check_ref(&self) -> Result<&Self::Checked> {
        let learning_rate = self.0.learning_rate;
        if !learning_rate.is_finite() || learning_rate <= F::zero() {
            Err(GdError::InvalidLearningRate(
                learning_rate.to_f32().unwrap_or(f32::NAN),
            ))
        } else if self.0.n_iterations == 0 {
            Err(GdError::InvalidIterations(self.0.n_iterations))
        } else {
            Ok(&self.0)
        }
    }

    fn check(self) -> Result<Self::Checked> {
        self.check_ref()?;
        Ok(self.0)
    }
}
