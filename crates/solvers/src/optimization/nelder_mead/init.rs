use amoeba_core::{Model, Observer, OptimizationProblem};

use super::{
    Action, Error, Event, Phase, Simplex, Solution, Status, Vertex,
    eval_context::{EvalContext, Probe},
    state::State,
};

pub(super) enum InitResult<I, O, const N: usize> {
    Continue(State<I, O, N>),
    StopEarly(Solution<I, O, N>),
}

/// Builds and scores the initial simplex.
///
/// Vertex 0 is the start point; vertex `i + 1` offsets axis `i` by `step`.
/// The start point's score seeds the stagnation tracker.
///
/// If the observer stops the search here, the best vertex scored so far is
/// reported with zero iterations.
pub(super) fn init<M, P, Obs, const N: usize>(
    ctx: &mut EvalContext<'_, M, P, Obs>,
    x0: [f64; N],
    step: f64,
) -> Result<InitResult<M::Input, M::Output, N>, Error>
where
    M: Model,
    P: OptimizationProblem<N, Input = M::Input, Output = M::Output>,
    Obs: for<'evt> Observer<Event<'evt, M, P, N>, Action>,
{
    let mut vertices = Vec::with_capacity(N + 1);

    for x in initial_points(x0, step) {
        match ctx.vertex(Phase::Init, x)? {
            Probe::Scored(vertex) => vertices.push(vertex),
            Probe::StopEarly => {
                let solution = stop_during_init(vertices, ctx.evals())?;
                return Ok(InitResult::StopEarly(solution));
            }
        }
    }

    let start_score = vertices[0].score();
    let state = State::new(Simplex::new(vertices), start_score);
    Ok(InitResult::Continue(state))
}

/// The start point followed by one offset copy per axis.
fn initial_points<const N: usize>(x0: [f64; N], step: f64) -> impl Iterator<Item = [f64; N]> {
    let offsets = (0..N).map(move |axis| {
        let mut x = x0;
        x[axis] += step;
        x
    });
    std::iter::once(x0).chain(offsets)
}

fn stop_during_init<I, O, const N: usize>(
    vertices: Vec<Vertex<I, O, N>>,
    evals: usize,
) -> Result<Solution<I, O, N>, Error> {
    let best = vertices
        .into_iter()
        .min_by(|a, b| a.score().total_cmp(&b.score()))
        .ok_or(Error::NoSuccessfulEvaluation)?;
    Solution::from_vertex(best, Status::StoppedByObserver, 0, evals)
}
