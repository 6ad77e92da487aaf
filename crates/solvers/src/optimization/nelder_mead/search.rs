use amoeba_core::{Model, Observer, OptimizationProblem};

use super::{
    Action, Config, Error, Event, Phase, Solution, Status,
    eval_context::EvalContext,
    goal::Goal,
    init::{InitResult, init},
    state::State,
};

/// Core Nelder-Mead implementation shared by minimization and maximization.
///
/// Each iteration ranks the simplex, reports it, checks the iteration cap and
/// stagnation, then attempts one transformation.
pub(super) fn search<M, P, Obs, const N: usize>(
    model: &M,
    problem: &P,
    x0: [f64; N],
    config: &Config,
    mut observer: Obs,
    goal: Goal,
) -> Result<Solution<M::Input, M::Output, N>, Error>
where
    M: Model,
    P: OptimizationProblem<N, Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M, P, N>, Action>,
{
    if N == 0 {
        return Err(Error::ZeroDimensions);
    }

    let mut ctx = EvalContext::new(model, problem, &mut observer, goal);

    let mut state = match init(&mut ctx, x0, config.step())? {
        InitResult::Continue(state) => state,
        InitResult::StopEarly(solution) => return Ok(solution),
    };

    loop {
        state.rank(config.improvement_threshold());

        let action = ctx.ranked(state.iters(), state.stalled_iters(), state.simplex());
        if action == Some(Action::StopEarly) {
            return state.into_solution(Status::StoppedByObserver, ctx.evals());
        }

        if state.at_iteration_cap(config.max_iters()) {
            return state.into_solution(Status::MaxIters, ctx.evals());
        }

        if state.is_stalled(config.max_stalled_iters()) {
            return state.into_solution(Status::Stalled, ctx.evals());
        }

        match transform(&mut ctx, &mut state, config)? {
            Outcome::Continue => state.complete_iter(),
            Outcome::StopEarly => {
                return state.into_solution(Status::StoppedByObserver, ctx.evals());
            }
        }
    }
}

// ============================================================================
// Transformation step
// ============================================================================

enum Outcome {
    Continue,
    StopEarly,
}

/// Attempts reflection, expansion, contraction, then shrink, in that order.
///
/// Expects a ranked simplex. Leaves the simplex untouched if the observer
/// stops the search partway through.
fn transform<M, P, Obs, const N: usize>(
    ctx: &mut EvalContext<'_, M, P, Obs>,
    state: &mut State<M::Input, M::Output, N>,
    config: &Config,
) -> Result<Outcome, Error>
where
    M: Model,
    P: OptimizationProblem<N, Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M, P, N>, Action>,
{
    let simplex = state.simplex();
    let best = simplex.best().score();
    let second_worst = simplex.second_worst().score();
    let worst = simplex.worst().score();
    let centroid = simplex.centroid();

    let reflect_x = simplex.along_worst(&centroid, config.alpha());
    let Some(reflection) = ctx.vertex(Phase::Reflect, reflect_x)?.scored() else {
        return Ok(Outcome::StopEarly);
    };

    if best <= reflection.score() && reflection.score() < second_worst {
        state.simplex_mut().replace_worst(reflection);
        return Ok(Outcome::Continue);
    }

    if reflection.score() < best {
        let expand_x = state.simplex().along_worst(&centroid, config.gamma());
        let Some(expansion) = ctx.vertex(Phase::Expand, expand_x)?.scored() else {
            return Ok(Outcome::StopEarly);
        };

        let keep = if expansion.score() < reflection.score() {
            expansion
        } else {
            reflection
        };
        state.simplex_mut().replace_worst(keep);
        return Ok(Outcome::Continue);
    }

    let contract_x = state.simplex().along_worst(&centroid, config.rho());
    let Some(contraction) = ctx.vertex(Phase::Contract, contract_x)?.scored() else {
        return Ok(Outcome::StopEarly);
    };

    if contraction.score() < worst {
        state.simplex_mut().replace_worst(contraction);
        return Ok(Outcome::Continue);
    }

    let targets = state.simplex().shrink_targets(config.sigma());
    let mut shrunk = Vec::with_capacity(targets.len());
    for x in targets {
        let Some(vertex) = ctx.vertex(Phase::Shrink, x)?.scored() else {
            return Ok(Outcome::StopEarly);
        };
        shrunk.push(vertex);
    }
    state.simplex_mut().replace_all(shrunk);

    Ok(Outcome::Continue)
}
