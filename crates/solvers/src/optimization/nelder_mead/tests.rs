use std::convert::Infallible;

use approx::assert_relative_eq;
use thiserror::Error;

use amoeba_core::{Model, OptimizationProblem};

use crate::optimization::ObjectiveFn;

use super::{
    Action, Config, Error, Event, Phase, Status, maximize_unobserved, minimize, minimize_fn,
    minimize_unobserved,
};

/// Shifted paraboloid: f(x, y) = (x - 3)² + (y + 2)².
struct Paraboloid;

impl Model for Paraboloid {
    type Input = [f64; 2];
    type Output = f64;
    type Error = Infallible;

    fn call(&self, [x, y]: &[f64; 2]) -> Result<f64, Self::Error> {
        Ok((x - 3.0).powi(2) + (y + 2.0).powi(2))
    }
}

/// Objective: pass the point through and use the model output directly.
struct ObjectiveOutput;

impl OptimizationProblem<2> for ObjectiveOutput {
    type Input = [f64; 2];
    type Output = f64;
    type Error = Infallible;

    fn input(&self, x: &[f64; 2]) -> Result<Self::Input, Self::Error> {
        Ok(*x)
    }

    fn objective(&self, _input: &[f64; 2], output: &f64) -> Result<f64, Self::Error> {
        Ok(*output)
    }
}

#[test]
fn minimizes_shifted_paraboloid() {
    let solution =
        minimize_unobserved(&Paraboloid, &ObjectiveOutput, [0.0, 0.0], &Config::default())
            .expect("should converge");

    assert_eq!(solution.status, Status::Stalled);
    assert_relative_eq!(solution.x[0], 3.0, epsilon = 0.01);
    assert_relative_eq!(solution.x[1], -2.0, epsilon = 0.01);
    assert!(solution.objective < 1e-4);
    assert_eq!(solution.snapshot.input, solution.x);
    assert_eq!(solution.snapshot.output, solution.objective);
}

#[test]
fn minimizes_one_dimensional_quadratic() {
    let config = Config::default().with_step(0.5).unwrap();

    let solution = minimize_fn(|x: &[f64; 1]| (x[0] - 5.0).powi(2), [0.0], &config)
        .expect("should converge");

    assert_eq!(solution.status, Status::Stalled);
    assert_relative_eq!(solution.x[0], 5.0, epsilon = 0.01);
}

#[test]
fn minimizes_rosenbrock_with_tight_settings() {
    let config = Config::default()
        .with_improvement_threshold(1e-10)
        .unwrap()
        .with_max_stalled_iters(50);

    let solution = minimize_fn(
        |x: &[f64; 2]| 100.0 * (x[1] - x[0].powi(2)).powi(2) + (1.0 - x[0]).powi(2),
        [-1.2, 1.0],
        &config,
    )
    .expect("should converge");

    assert_relative_eq!(solution.x[0], 1.0, epsilon = 1e-4);
    assert_relative_eq!(solution.x[1], 1.0, epsilon = 1e-4);
}

#[test]
fn maximize_reports_objective_in_caller_sign() {
    // Concave hill with its peak f(1, 2) = 4.
    let hill = ObjectiveFn::new(|x: &[f64; 2]| 4.0 - (x[0] - 1.0).powi(2) - (x[1] - 2.0).powi(2));

    let solution = maximize_unobserved(&hill, &hill, [0.0, 0.0], &Config::default())
        .expect("should converge");

    assert_eq!(solution.status, Status::Stalled);
    assert_relative_eq!(solution.x[0], 1.0, epsilon = 0.01);
    assert_relative_eq!(solution.x[1], 2.0, epsilon = 0.01);
    assert_relative_eq!(solution.objective, 4.0, epsilon = 1e-5);
}

#[test]
fn flat_objective_stalls_after_configured_iterations() {
    // Every ranking sees no improvement over the start score, so the stall
    // counter reaches 5 on the fifth ranking, after four completed iterations.
    // Each iteration reflects, contracts, then shrinks all three vertices.
    let config = Config::default().with_max_stalled_iters(5);

    let solution = minimize_fn(|_: &[f64; 2]| 1.0, [0.0, 0.0], &config).expect("should stall");

    assert_eq!(solution.status, Status::Stalled);
    assert_eq!(solution.iters, 4);
    assert_eq!(solution.evals, 3 + 4 * 5);
    assert_eq!(solution.objective, 1.0);
}

#[test]
fn iteration_cap_stops_after_one_step() {
    let config = Config::default().with_max_iters(1);

    let solution = minimize_unobserved(&Paraboloid, &ObjectiveOutput, [0.0, 0.0], &config)
        .expect("should stop at cap");

    assert_eq!(solution.status, Status::MaxIters);
    assert_eq!(solution.iters, 1);
    // Three initial vertices, then one reflection and one expansion.
    assert_eq!(solution.evals, 5);
}

#[test]
fn already_optimal_start_stalls_in_place() {
    let solution = minimize_fn(
        |x: &[f64; 2]| x[0].powi(2) + x[1].powi(2),
        [0.0, 0.0],
        &Config::default(),
    )
    .expect("should stall");

    assert_eq!(solution.status, Status::Stalled);
    assert!(solution.iters <= 10);
    assert_eq!(solution.x, [0.0, 0.0]);
    assert_eq!(solution.objective, 0.0);
}

#[test]
fn result_is_no_worse_than_any_initial_vertex() {
    let mut initial = Vec::new();
    let observer = |event: &Event<'_, _, _, 2>| {
        if let Event::Evaluated {
            phase: Phase::Init,
            objective,
            ..
        } = event
        {
            initial.push(*objective);
        }
        None
    };

    let solution = minimize(
        &Paraboloid,
        &ObjectiveOutput,
        [0.0, 0.0],
        &Config::default(),
        observer,
    )
    .expect("should converge");

    assert_eq!(initial.len(), 3);
    assert!(initial.iter().all(|&f| solution.objective <= f));
}

#[test]
fn events_match_reported_counts() {
    let mut ranked = 0;
    let mut evaluations = 0;
    let mut last_iter = None;
    let observer = |event: &Event<'_, _, _, 2>| {
        match event {
            Event::Ranked { iter, simplex, .. } => {
                ranked += 1;
                last_iter = Some(*iter);
                assert_eq!(simplex.vertices().len(), 3);
                assert!(simplex.best().objective <= simplex.worst().objective);
            }
            Event::Evaluated { .. } | Event::ModelFailed { .. } | Event::ProblemFailed { .. } => {
                evaluations += 1;
            }
        }
        None
    };

    let solution = minimize(
        &Paraboloid,
        &ObjectiveOutput,
        [0.0, 0.0],
        &Config::default(),
        observer,
    )
    .expect("should converge");

    // One ranking per completed iteration, plus the terminating one.
    assert_eq!(ranked, solution.iters + 1);
    assert_eq!(last_iter, Some(solution.iters));
    assert_eq!(evaluations, solution.evals);
}

#[test]
fn observer_can_stop_on_ranking() {
    let observer = |event: &Event<'_, _, _, 2>| match event {
        Event::Ranked { iter: 3, .. } => Some(Action::StopEarly),
        _ => None,
    };

    let solution = minimize(
        &Paraboloid,
        &ObjectiveOutput,
        [0.0, 0.0],
        &Config::default(),
        observer,
    )
    .expect("should stop cleanly");

    assert_eq!(solution.status, Status::StoppedByObserver);
    assert_eq!(solution.iters, 3);
    // Three initial vertices, then two evaluations per iteration.
    assert_eq!(solution.evals, 9);
}

#[test]
fn observer_can_stop_during_transformation() {
    let observer = |event: &Event<'_, _, _, 2>| match event.phase() {
        Some(Phase::Reflect) => Some(Action::StopEarly),
        _ => None,
    };

    let solution = minimize(
        &Paraboloid,
        &ObjectiveOutput,
        [0.0, 0.0],
        &Config::default(),
        observer,
    )
    .expect("should stop cleanly");

    // The initial simplex is kept; its best vertex offsets x by the step.
    assert_eq!(solution.status, Status::StoppedByObserver);
    assert_eq!(solution.iters, 0);
    assert_eq!(solution.evals, 4);
    assert_eq!(solution.x, [0.1, 0.0]);
}

#[test]
fn assume_worse_steers_search_away_from_region() {
    // The true minimum is at x = 3. Points with x > 2 are reported as worse
    // than any real evaluation, so the search settles on the boundary.
    let observer = |event: &Event<'_, _, _, 2>| match event.x() {
        Some(x) if x[0] > 2.0 => Some(Action::AssumeWorse),
        _ => None,
    };

    let solution = minimize(
        &Paraboloid,
        &ObjectiveOutput,
        [0.0, 0.0],
        &Config::default(),
        observer,
    )
    .expect("should complete");

    assert!(solution.x[0] <= 2.0, "steered search crossed x = 2: {:?}", solution.x);
    assert_relative_eq!(solution.x[0], 2.0, epsilon = 0.01);
    assert_relative_eq!(solution.x[1], -2.0, epsilon = 0.01);
}

// --- Evaluation failures ---

/// Paraboloid centered at (-1, 0) whose model fails for negative x.
struct GuardedModel;

#[derive(Debug, Clone, Error)]
#[error("model undefined at x={0}")]
struct NegativeInput(f64);

impl Model for GuardedModel {
    type Input = [f64; 2];
    type Output = f64;
    type Error = NegativeInput;

    fn call(&self, [x, y]: &[f64; 2]) -> Result<f64, Self::Error> {
        if *x < 0.0 {
            Err(NegativeInput(*x))
        } else {
            Ok((x + 1.0).powi(2) + y.powi(2))
        }
    }
}

#[test]
fn model_failure_without_action_errors() {
    let result =
        minimize_unobserved(&GuardedModel, &ObjectiveOutput, [0.5, 0.5], &Config::default());

    assert!(matches!(result, Err(Error::Model(_))));
}

#[test]
fn model_failure_recovers_with_assume_worse() {
    let mut failures = 0;
    let observer = |event: &Event<'_, _, _, 2>| {
        if matches!(event, Event::ModelFailed { .. }) {
            failures += 1;
            Some(Action::AssumeWorse)
        } else {
            None
        }
    };

    let solution = minimize(
        &GuardedModel,
        &ObjectiveOutput,
        [0.5, 0.5],
        &Config::default(),
        observer,
    )
    .expect("should recover");

    assert!(failures > 0);
    assert!(solution.x[0] >= 0.0);
    assert_relative_eq!(solution.x[0], 0.0, epsilon = 0.01);
    assert_relative_eq!(solution.objective, 1.0, epsilon = 1e-3);
}

#[test]
fn model_failure_can_stop_early() {
    let observer = |event: &Event<'_, _, _, 2>| {
        matches!(event, Event::ModelFailed { .. }).then_some(Action::StopEarly)
    };

    let solution = minimize(
        &GuardedModel,
        &ObjectiveOutput,
        [0.5, 0.5],
        &Config::default(),
        observer,
    )
    .expect("should stop cleanly");

    assert_eq!(solution.status, Status::StoppedByObserver);
    assert!(solution.x[0] >= 0.0);
}

/// Problem that rejects points outside the unit box.
struct UnitBox;

#[derive(Debug, Clone, Error)]
#[error("point outside the unit box")]
struct OutsideBox;

impl OptimizationProblem<2> for UnitBox {
    type Input = [f64; 2];
    type Output = f64;
    type Error = OutsideBox;

    fn input(&self, x: &[f64; 2]) -> Result<Self::Input, Self::Error> {
        if x.iter().all(|v| v.abs() <= 1.0) {
            Ok(*x)
        } else {
            Err(OutsideBox)
        }
    }

    fn objective(&self, _input: &[f64; 2], output: &f64) -> Result<f64, Self::Error> {
        Ok(*output)
    }
}

#[test]
fn problem_failure_without_action_errors() {
    let result = minimize_unobserved(&Paraboloid, &UnitBox, [0.0, 0.0], &Config::default());

    assert!(matches!(result, Err(Error::Problem(_))));
}

#[test]
fn problem_failure_recovers_with_assume_worse() {
    let observer = |event: &Event<'_, _, _, 2>| {
        matches!(event, Event::ProblemFailed { .. }).then_some(Action::AssumeWorse)
    };

    let solution = minimize(
        &Paraboloid,
        &UnitBox,
        [0.0, 0.0],
        &Config::default(),
        observer,
    )
    .expect("should recover");

    assert!(solution.x.iter().all(|v| v.abs() <= 1.0));
    // Closest point of the box to (3, -2).
    assert_relative_eq!(solution.x[0], 1.0, epsilon = 0.01);
    assert_relative_eq!(solution.x[1], -1.0, epsilon = 0.01);
}

#[test]
fn zero_dimensions_is_rejected() {
    let result = minimize_fn(|_: &[f64; 0]| 0.0, [], &Config::default());

    assert!(matches!(result, Err(Error::ZeroDimensions)));
}
