/// Actions an observer can take during a Nelder-Mead search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver early and return the best vertex of the current simplex.
    StopEarly,

    /// Treat the evaluated point as scoring worse than every real evaluation.
    ///
    /// The vertex takes an infinite score, so the simplex moves away from it,
    /// and it can never be reported as the solution.
    ///
    /// Use this for:
    /// - Recovering from model or problem errors when the failed region is
    ///   known to be uninteresting and the search should continue.
    /// - Steering the search away from a region even when evaluation succeeded.
    ///
    /// Only evaluation events respond to this action; it is ignored on
    /// [`Event::Ranked`](super::Event::Ranked).
    AssumeWorse,
}
