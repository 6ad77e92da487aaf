use thiserror::Error;

use amoeba_core::{Model, OptimizationProblem, Snapshot};

/// The result of evaluating an optimization problem at a given `x`.
#[derive(Debug, Clone)]
pub struct Evaluation<I, O, const N: usize> {
    pub x: [f64; N],

    pub objective: f64,

    pub snapshot: Snapshot<I, O>,
}

/// Errors that can occur when evaluating an optimization problem.
#[derive(Debug, Error)]
pub enum EvalError<ME, PE> {
    /// The model call failed.
    #[error("model call failed")]
    Model(#[source] ME),

    /// Failed to construct input or compute the objective.
    #[error("problem error")]
    Problem(#[source] PE),
}

/// Type alias for the result of [`evaluate`].
pub type EvaluateResult<M, P, const N: usize> = Result<
    Evaluation<<M as Model>::Input, <M as Model>::Output, N>,
    EvalError<<M as Model>::Error, <P as OptimizationProblem<N>>::Error>,
>;

/// Evaluates the model in the context of an optimization problem.
///
/// Maps `x` to a model input, calls the model, then computes the objective
/// from the input and output. The point is taken by value and returned
/// untouched in the [`Evaluation`], so repeated calls on the same `x` see
/// identical variables.
///
/// # Errors
///
/// Returns an error if input mapping, model call, or objective computation fails.
pub fn evaluate<M, P, const N: usize>(
    model: &M,
    problem: &P,
    x: [f64; N],
) -> EvaluateResult<M, P, N>
where
    M: Model,
    P: OptimizationProblem<N, Input = M::Input, Output = M::Output>,
{
    let input = problem.input(&x).map_err(EvalError::Problem)?;
    let output = model.call(&input).map_err(EvalError::Model)?;
    let objective = problem
        .objective(&input, &output)
        .map_err(EvalError::Problem)?;

    Ok(Evaluation {
        x,
        objective,
        snapshot: Snapshot::new(input, output),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::convert::Infallible;

    use approx::assert_relative_eq;

    /// Sum of squares over two variables.
    struct SumOfSquares;

    impl Model for SumOfSquares {
        type Input = [f64; 2];
        type Output = f64;
        type Error = Infallible;

        fn call(&self, input: &[f64; 2]) -> Result<f64, Self::Error> {
            Ok(input.iter().map(|v| v * v).sum())
        }
    }

    #[derive(Debug, Error)]
    #[error("negative variables are not allowed")]
    struct NegativeInput;

    /// Rejects negative variables, otherwise uses the model output directly.
    struct NonNegative;

    impl OptimizationProblem<2> for NonNegative {
        type Input = [f64; 2];
        type Output = f64;
        type Error = NegativeInput;

        fn input(&self, x: &[f64; 2]) -> Result<[f64; 2], Self::Error> {
            if x.iter().any(|v| *v < 0.0) {
                Err(NegativeInput)
            } else {
                Ok(*x)
            }
        }

        fn objective(&self, _input: &[f64; 2], output: &f64) -> Result<f64, Self::Error> {
            Ok(*output)
        }
    }

    #[test]
    fn evaluation_captures_point_objective_and_snapshot() {
        let eval = evaluate(&SumOfSquares, &NonNegative, [1.0, 2.0]).unwrap();

        assert_eq!(eval.x, [1.0, 2.0]);
        assert_relative_eq!(eval.objective, 5.0);
        assert_eq!(eval.snapshot.input, [1.0, 2.0]);
        assert_relative_eq!(eval.snapshot.output, 5.0);
    }

    #[test]
    fn repeated_evaluation_is_identical() {
        let x = [0.25, 3.5];
        let first = evaluate(&SumOfSquares, &NonNegative, x).unwrap();
        let second = evaluate(&SumOfSquares, &NonNegative, x).unwrap();

        assert_eq!(first.x, second.x);
        assert_eq!(first.objective, second.objective);
    }

    #[test]
    fn problem_failure_is_reported_as_problem_error() {
        let result = evaluate(&SumOfSquares, &NonNegative, [-1.0, 2.0]);

        assert!(matches!(result, Err(EvalError::Problem(NegativeInput))));
    }
}
