use thiserror::Error;

/// Simplified `Result` using [`GdError`](crate::error::GdError) as error type
pub type Result<T> = std::result::Result<T, GdError>;

/// Error variants from dataset construction, hyperparameter checking or model
/// estimation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GdError {
    /// The input has not enough samples
    #[error("dataset must contain at least one sample")]
    EmptyDataset,
    /// Features and targets do not pair up by index
    #[error("features have {features} samples but targets have {targets}")]
    ShapeMismatch { features: usize, targets: usize },
    #[error("invalid learning rate {0}")]
    InvalidLearningRate(f32),
    #[error("invalid number of iterations {0}")]
    InvalidIterations(usize),
}
