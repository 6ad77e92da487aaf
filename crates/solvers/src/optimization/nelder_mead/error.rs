use std::error::Error as StdError;

use thiserror::Error;

use crate::optimization::EvalError;

/// Errors that can occur during a Nelder-Mead search.
#[derive(Debug, Error)]
pub enum Error {
    #[error("the search space must have at least one dimension")]
    ZeroDimensions,

    #[error("no successful evaluations")]
    NoSuccessfulEvaluation,

    #[error("model error: {0}")]
    Model(#[source] Box<dyn StdError + Send + Sync>),

    #[error("problem error: {0}")]
    Problem(#[source] Box<dyn StdError + Send + Sync>),
}

impl<ME, PE> From<EvalError<ME, PE>> for Error
where
    ME: StdError + Send + Sync + 'static,
    PE: StdError + Send + Sync + 'static,
{
    fn from(err: EvalError<ME, PE>) -> Self {
        match err {
            EvalError::Model(e) => Self::Model(Box::new(e)),
            EvalError::Problem(e) => Self::Problem(Box::new(e)),
        }
    }
}
