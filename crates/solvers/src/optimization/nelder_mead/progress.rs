/// Tracks the best score seen across ranking passes.
///
/// Only a strict improvement larger than the threshold resets the stall
/// counter. The comparison is against the single best score, so one unusually
/// good vertex resets the counter even if the rest of the simplex has stalled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Progress {
    previous_best: f64,
    stalled_iters: usize,
}

impl Progress {
    /// Starts tracking from the score of the start point.
    pub(super) fn new(start_score: f64) -> Self {
        Self {
            previous_best: start_score,
            stalled_iters: 0,
        }
    }

    /// Records the best score of a ranking pass.
    pub(super) fn record(&mut self, best: f64, threshold: f64) {
        if best < self.previous_best - threshold {
            self.previous_best = best;
            self.stalled_iters = 0;
        } else {
            self.stalled_iters += 1;
        }
    }

    /// Returns true once the stall counter reaches `limit`.
    pub(super) fn is_stalled(&self, limit: usize) -> bool {
        self.stalled_iters >= limit
    }

    pub(super) fn stalled_iters(&self) -> usize {
        self.stalled_iters
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn improvement_resets_counter() {
        let mut progress = Progress::new(10.0);
        progress.record(10.0, 1e-5);
        progress.record(10.0, 1e-5);
        assert_eq!(progress.stalled_iters(), 2);

        progress.record(9.0, 1e-5);
        assert_eq!(progress.stalled_iters(), 0);
    }

    #[test]
    fn improvement_must_exceed_threshold() {
        let mut progress = Progress::new(1.0);
        progress.record(0.95, 0.1);
        assert_eq!(progress.stalled_iters(), 1);

        // Previous best is unchanged, so the same small gain keeps stalling.
        progress.record(0.95, 0.1);
        assert_eq!(progress.stalled_iters(), 2);

        progress.record(0.85, 0.1);
        assert_eq!(progress.stalled_iters(), 0);
    }

    #[test]
    fn single_outlier_resets_counter() {
        let mut progress = Progress::new(5.0);
        for _ in 0..3 {
            progress.record(5.0, 0.0);
        }
        progress.record(-100.0, 0.0);
        assert_eq!(progress.stalled_iters(), 0);
    }

    #[test]
    fn stalled_at_limit() {
        let mut progress = Progress::new(0.0);
        for _ in 0..4 {
            progress.record(0.0, 1e-5);
        }
        assert!(!progress.is_stalled(5));

        progress.record(0.0, 1e-5);
        assert!(progress.is_stalled(5));
    }

    #[test]
    fn infinite_start_accepts_any_finite_best() {
        let mut progress = Progress::new(f64::INFINITY);
        progress.record(1e300, 1e-5);
        assert_eq!(progress.stalled_iters(), 0);
    }
}
