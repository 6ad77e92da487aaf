/// Direction of the search.
///
/// The simplex always ranks by ascending score. Maximization negates the
/// objective to get a score, so reported objectives stay in the caller's sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Goal {
    Minimize,
    Maximize,
}

impl Goal {
    /// Converts an objective into a ranking score.
    ///
    /// NaN objectives rank as worst.
    pub(super) fn score(self, objective: f64) -> f64 {
        let score = match self {
            Self::Minimize => objective,
            Self::Maximize => -objective,
        };
        if score.is_nan() { f64::INFINITY } else { score }
    }

    /// The objective that ranks below every real evaluation.
    pub(super) fn worst_objective(self) -> f64 {
        match self {
            Self::Minimize => f64::INFINITY,
            Self::Maximize => f64::NEG_INFINITY,
        }
    }
}
