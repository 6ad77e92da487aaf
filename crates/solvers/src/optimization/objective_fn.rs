use std::convert::Infallible;

use amoeba_core::{Model, OptimizationProblem};

/// Adapter that lets a plain function act as both model and problem.
///
/// The wrapped function maps a point directly to its objective. As a
/// [`Model`] it takes the point as input and returns the objective as output;
/// as an [`OptimizationProblem`] it passes `x` through and reads the objective
/// straight from the model output.
///
/// # Example
///
/// ```
/// use amoeba_solvers::optimization::{ObjectiveFn, nelder_mead};
///
/// let paraboloid = ObjectiveFn::new(|x: &[f64; 2]| (x[0] - 1.0).powi(2) + x[1].powi(2));
/// let solution = nelder_mead::minimize_unobserved(
///     &paraboloid,
///     &paraboloid,
///     [0.0, 0.0],
///     &nelder_mead::Config::default(),
/// )
/// .unwrap();
///
/// assert!(solution.objective < 1e-3);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ObjectiveFn<F, const N: usize> {
    function: F,
}

impl<F, const N: usize> ObjectiveFn<F, N>
where
    F: Fn(&[f64; N]) -> f64,
{
    /// Wraps a function that scores a point.
    pub const fn new(function: F) -> Self {
        Self { function }
    }
}

impl<F, const N: usize> From<F> for ObjectiveFn<F, N>
where
    F: Fn(&[f64; N]) -> f64,
{
    fn from(function: F) -> Self {
        Self::new(function)
    }
}

impl<F, const N: usize> Model for ObjectiveFn<F, N>
where
    F: Fn(&[f64; N]) -> f64,
{
    type Input = [f64; N];
    type Output = f64;
    type Error = Infallible;

    fn call(&self, input: &[f64; N]) -> Result<f64, Self::Error> {
        Ok((self.function)(input))
    }
}

impl<F, const N: usize> OptimizationProblem<N> for ObjectiveFn<F, N>
where
    F: Fn(&[f64; N]) -> f64,
{
    type Input = [f64; N];
    type Output = f64;
    type Error = Infallible;

    fn input(&self, x: &[f64; N]) -> Result<[f64; N], Self::Error> {
        Ok(*x)
    }

    fn objective(&self, _input: &[f64; N], output: &f64) -> Result<f64, Self::Error> {
        Ok(*output)
    }
}
