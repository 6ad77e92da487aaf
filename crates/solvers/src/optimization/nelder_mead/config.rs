use thiserror::Error;

/// Configuration for the Nelder-Mead solver.
///
/// Start from [`Config::default`] and adjust with the `with_*` methods.
/// Coefficients and tolerances are validated as they are set, so a `Config`
/// value is always usable.
///
/// ```
/// use amoeba_solvers::optimization::nelder_mead::Config;
///
/// let config = Config::default()
///     .with_step(0.5)?
///     .with_max_iters(200)
///     .with_max_stalled_iters(25);
///
/// assert_eq!(config.max_iters(), Some(200));
/// # Ok::<(), amoeba_solvers::optimization::nelder_mead::ConfigError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    step: f64,
    improvement_threshold: f64,
    max_stalled_iters: usize,
    max_iters: usize,
    alpha: f64,
    gamma: f64,
    rho: f64,
    sigma: f64,
}

/// Errors that can occur when validating a Nelder-Mead solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("step must be finite and non-zero")]
    Step,

    #[error("improvement_threshold must be finite and non-negative")]
    ImprovementThreshold,

    #[error("alpha (reflection) must be finite and positive")]
    Alpha,

    #[error("gamma (expansion) must be finite and greater than alpha")]
    Gamma,

    #[error("rho (contraction) must be finite and within (-1, 0)")]
    Rho,

    #[error("sigma (shrink) must be finite and within (0, 1)")]
    Sigma,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            step: 0.1,
            improvement_threshold: 1e-5,
            max_stalled_iters: 10,
            max_iters: 0,
            alpha: 1.0,
            gamma: 2.0,
            rho: -0.5,
            sigma: 0.5,
        }
    }
}

impl Config {
    /// Sets the per-axis offset used to build the initial simplex.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Step`] if `step` is zero or non-finite.
    pub fn with_step(mut self, step: f64) -> Result<Self, ConfigError> {
        if !step.is_finite() || step == 0.0 {
            return Err(ConfigError::Step);
        }
        self.step = step;
        Ok(self)
    }

    /// Sets the minimum decrease in best score that counts as an improvement.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ImprovementThreshold`] if the threshold is
    /// negative or non-finite.
    pub fn with_improvement_threshold(mut self, threshold: f64) -> Result<Self, ConfigError> {
        if !threshold.is_finite() || threshold < 0.0 {
            return Err(ConfigError::ImprovementThreshold);
        }
        self.improvement_threshold = threshold;
        Ok(self)
    }

    /// Sets how many consecutive iterations without improvement end the search.
    #[must_use]
    pub fn with_max_stalled_iters(mut self, max_stalled_iters: usize) -> Self {
        self.max_stalled_iters = max_stalled_iters;
        self
    }

    /// Sets the hard iteration cap. Zero removes the cap.
    ///
    /// Without a cap only stagnation (or an observer) can end the search.
    #[must_use]
    pub fn with_max_iters(mut self, max_iters: usize) -> Self {
        self.max_iters = max_iters;
        self
    }

    /// Sets the reflection coefficient.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Alpha`] if `alpha` is not positive and finite,
    /// or [`ConfigError::Gamma`] if the current `gamma` would no longer exceed it.
    pub fn with_alpha(mut self, alpha: f64) -> Result<Self, ConfigError> {
        if !alpha.is_finite() || alpha <= 0.0 {
            return Err(ConfigError::Alpha);
        }
        if self.gamma <= alpha {
            return Err(ConfigError::Gamma);
        }
        self.alpha = alpha;
        Ok(self)
    }

    /// Sets the expansion coefficient.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Gamma`] if `gamma` is non-finite or does not
    /// exceed `alpha`.
    pub fn with_gamma(mut self, gamma: f64) -> Result<Self, ConfigError> {
        if !gamma.is_finite() || gamma <= self.alpha {
            return Err(ConfigError::Gamma);
        }
        self.gamma = gamma;
        Ok(self)
    }

    /// Sets the contraction coefficient.
    ///
    /// The value is negative: contraction moves from the centroid back toward
    /// the worst vertex.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Rho`] if `rho` is outside `(-1, 0)`.
    pub fn with_rho(mut self, rho: f64) -> Result<Self, ConfigError> {
        if !rho.is_finite() || rho <= -1.0 || rho >= 0.0 {
            return Err(ConfigError::Rho);
        }
        self.rho = rho;
        Ok(self)
    }

    /// Sets the shrink coefficient.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Sigma`] if `sigma` is outside `(0, 1)`.
    pub fn with_sigma(mut self, sigma: f64) -> Result<Self, ConfigError> {
        if !sigma.is_finite() || sigma <= 0.0 || sigma >= 1.0 {
            return Err(ConfigError::Sigma);
        }
        self.sigma = sigma;
        Ok(self)
    }

    /// Returns the per-axis offset used to build the initial simplex.
    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Returns the minimum decrease in best score that counts as an improvement.
    #[must_use]
    pub fn improvement_threshold(&self) -> f64 {
        self.improvement_threshold
    }

    /// Returns the stagnation limit.
    #[must_use]
    pub fn max_stalled_iters(&self) -> usize {
        self.max_stalled_iters
    }

    /// Returns the iteration cap, or `None` if the search is uncapped.
    #[must_use]
    pub fn max_iters(&self) -> Option<usize> {
        (self.max_iters > 0).then_some(self.max_iters)
    }

    /// Returns the reflection coefficient.
    #[must_use]
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Returns the expansion coefficient.
    #[must_use]
    pub fn gamma(&self) -> f64 {
        self.gamma
    }

    /// Returns the contraction coefficient.
    #[must_use]
    pub fn rho(&self) -> f64 {
        self.rho
    }

    /// Returns the shrink coefficient.
    #[must_use]
    pub fn sigma(&self) -> f64 {
        self.sigma
    }
}
