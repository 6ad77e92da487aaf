//! Minimize a three-variable wave surface with Nelder-Mead.
//!
//! Progress is logged per iteration through `tracing`. With the `plot`
//! feature, the `plot` mode also opens a window showing how the best and worst
//! vertices of the simplex converge.
//!
//! # Usage
//!
//! ```text
//! cargo run --example nelder_mead
//! RUST_LOG=debug cargo run --example nelder_mead
//! cargo run --example nelder_mead --features plot -- plot
//! ```

use std::{convert::Infallible, error::Error};

use amoeba_core::{Model, OptimizationProblem};
use amoeba_observers::LogObserver;
use amoeba_solvers::optimization::nelder_mead::{self, Config, Solution};

/// f(x) = sin(x₀)·cos(x₁) / (|x₂| + 1).
///
/// Its minimum value of -1 is reached at x₀ = -π/2, x₁ = 0, x₂ = 0 (and at
/// the periodic copies of that point).
struct Wave;

impl Model for Wave {
    type Input = [f64; 3];
    type Output = f64;
    type Error = Infallible;

    fn call(&self, [x0, x1, x2]: &[f64; 3]) -> Result<f64, Infallible> {
        Ok(x0.sin() * x1.cos() / (x2.abs() + 1.0))
    }
}

/// Uses the point as the model input and the model output as the objective.
struct DirectObjective;

impl OptimizationProblem<3> for DirectObjective {
    type Input = [f64; 3];
    type Output = f64;
    type Error = Infallible;

    fn input(&self, x: &[f64; 3]) -> Result<[f64; 3], Infallible> {
        Ok(*x)
    }

    fn objective(&self, _input: &[f64; 3], output: &f64) -> Result<f64, Infallible> {
        Ok(*output)
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt::init();

    let mode = std::env::args().nth(1);
    let solution = match mode.as_deref() {
        None => nelder_mead::minimize(
            &Wave,
            &DirectObjective,
            [0.0; 3],
            &Config::default(),
            LogObserver,
        )?,
        Some("plot") => plot()?,
        Some(other) => {
            eprintln!("Unknown mode: {other}");
            eprintln!("Usage: nelder_mead [plot]");
            std::process::exit(1);
        }
    };

    report(&solution);
    Ok(())
}

fn report(solution: &Solution<[f64; 3], f64, 3>) {
    println!("status:      {:?}", solution.status);
    println!("x:           {:?}", solution.x);
    println!("objective:   {:.6}", solution.objective);
    println!("iterations:  {}", solution.iters);
    println!("evaluations: {}", solution.evals);
}

/// Logs and plots the best and worst objective at each iteration.
#[cfg(feature = "plot")]
fn plot() -> Result<Solution<[f64; 3], f64, 3>, Box<dyn Error>> {
    use amoeba_core::Observer;
    use amoeba_observers::{PlotObserver, ShowConfig};
    use nelder_mead::{Action, Event};

    let mut obs = PlotObserver::convergence();
    let mut log = LogObserver;

    let solution = nelder_mead::minimize(
        &Wave,
        &DirectObjective,
        [0.0; 3],
        &Config::default(),
        |event: &Event<'_, Wave, DirectObjective, 3>| -> Option<Action> {
            let _: Option<Action> = log.observe(event);
            obs.observe(event)
        },
    )?;

    obs.show(
        ShowConfig::new()
            .title("Nelder-Mead: sin(x₀)·cos(x₁)/(|x₂|+1)  →  minimum -1")
            .legend(),
    )?;

    Ok(solution)
}

#[cfg(not(feature = "plot"))]
fn plot() -> Result<Solution<[f64; 3], f64, 3>, Box<dyn Error>> {
    Err("the plot mode requires `--features plot`".into())
}
