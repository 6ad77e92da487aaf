use super::{Error, Simplex, Solution, Status, progress::Progress};

/// Per-run search context: the simplex plus convergence bookkeeping.
pub(super) struct State<I, O, const N: usize> {
    simplex: Simplex<I, O, N>,
    progress: Progress,
    iters: usize,
}

impl<I, O, const N: usize> State<I, O, N> {
    pub(super) fn new(simplex: Simplex<I, O, N>, start_score: f64) -> Self {
        Self {
            simplex,
            progress: Progress::new(start_score),
            iters: 0,
        }
    }

    pub(super) fn simplex(&self) -> &Simplex<I, O, N> {
        &self.simplex
    }

    pub(super) fn simplex_mut(&mut self) -> &mut Simplex<I, O, N> {
        &mut self.simplex
    }

    pub(super) fn iters(&self) -> usize {
        self.iters
    }

    pub(super) fn stalled_iters(&self) -> usize {
        self.progress.stalled_iters()
    }

    /// Ranks the simplex and records its best score.
    pub(super) fn rank(&mut self, improvement_threshold: f64) {
        self.simplex.rank();
        self.progress.record(self.simplex.best().score(), improvement_threshold);
    }

    /// Returns true if the configured iteration cap has been reached.
    pub(super) fn at_iteration_cap(&self, max_iters: Option<usize>) -> bool {
        max_iters.is_some_and(|max| self.iters >= max)
    }

    pub(super) fn is_stalled(&self, max_stalled_iters: usize) -> bool {
        self.progress.is_stalled(max_stalled_iters)
    }

    pub(super) fn complete_iter(&mut self) {
        self.iters += 1;
    }

    /// Reports the best vertex of the simplex.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoSuccessfulEvaluation`] if every vertex was assumed worse.
    pub(super) fn into_solution(
        self,
        status: Status,
        evals: usize,
    ) -> Result<Solution<I, O, N>, Error> {
        Solution::from_vertex(self.simplex.into_best(), status, self.iters, evals)
    }
}
