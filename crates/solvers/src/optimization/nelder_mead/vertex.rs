use amoeba_core::Snapshot;

use crate::optimization::Evaluation;

use super::goal::Goal;

/// One scored point of the simplex.
///
/// The objective is computed once, when the vertex is created, and never
/// recomputed. Vertices are replaced rather than mutated.
#[derive(Debug, Clone)]
pub struct Vertex<I, O, const N: usize> {
    /// The point in the search space.
    pub x: [f64; N],

    /// The objective value at `x`, in the caller's sign.
    pub objective: f64,

    /// Model input and output at `x`.
    ///
    /// `None` when an observer asked to [assume the point is
    /// worse](super::Action::AssumeWorse) than any real evaluation.
    pub snapshot: Option<Snapshot<I, O>>,

    score: f64,
}

impl<I, O, const N: usize> Vertex<I, O, N> {
    pub(super) fn evaluated(eval: Evaluation<I, O, N>, goal: Goal) -> Self {
        Self {
            x: eval.x,
            objective: eval.objective,
            snapshot: Some(eval.snapshot),
            score: goal.score(eval.objective),
        }
    }

    pub(super) fn assumed_worse(x: [f64; N], goal: Goal) -> Self {
        Self {
            x,
            objective: goal.worst_objective(),
            snapshot: None,
            score: f64::INFINITY,
        }
    }

    /// Ranking score: lower is better regardless of search direction.
    pub(super) fn score(&self) -> f64 {
        self.score
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval(x: [f64; 2], objective: f64) -> Evaluation<(), (), 2> {
        Evaluation {
            x,
            objective,
            snapshot: Snapshot::new((), ()),
        }
    }

    #[test]
    fn evaluated_vertex_keeps_caller_sign() {
        let vertex = Vertex::evaluated(eval([1.0, 2.0], 3.0), Goal::Maximize);

        assert_eq!(vertex.x, [1.0, 2.0]);
        assert_eq!(vertex.objective, 3.0);
        assert_eq!(vertex.score(), -3.0);
        assert!(vertex.snapshot.is_some());
    }

    #[test]
    fn assumed_worse_vertex_has_no_snapshot() {
        let vertex: Vertex<(), (), 2> = Vertex::assumed_worse([0.0, 0.0], Goal::Minimize);

        assert_eq!(vertex.score(), f64::INFINITY);
        assert!(vertex.snapshot.is_none());
    }
}
