//! Hybrid driver configuration.

use crate::sa::SaConfig;

/// Configuration for the hybrid ILS+SA driver.
///
/// # Examples
///
/// ```
/// use tsp_metaheur::hybrid::HybridConfig;
/// use tsp_metaheur::sa::SaConfig;
///
/// let config = HybridConfig::default()
///     .with_iterations(20)
///     .with_sa(SaConfig::default().with_max_iterations(5000))
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HybridConfig {
    /// Outer perturb/re-anneal iterations. Also drives the perturbation
    /// phase schedule (progress = iteration / iterations).
    pub iterations: usize,

    /// Consecutive non-improving outer iterations tolerated before
    /// stopping. Configured independently of `iterations`.
    pub max_no_improvement: usize,

    /// Instance size above which the initial tour is a random permutation
    /// instead of the O(n²) nearest-neighbor construction.
    pub construction_threshold: usize,

    /// Configuration of the inner annealer (both the initial run and the
    /// per-iteration re-anneals).
    pub sa: SaConfig,

    /// Random seed (None draws a fresh seed). Seeds construction,
    /// perturbation, and the inner SA runs.
    pub seed: Option<u64>,
}

impl Default for HybridConfig {
    fn default() -> Self {
        Self {
            iterations: 10,
            max_no_improvement: 10,
            construction_threshold: 2000,
            sa: SaConfig::default(),
            seed: None,
        }
    }
}

impl HybridConfig {
    /// Sets the outer iteration budget.
    pub fn with_iterations(mut self, n: usize) -> Self {
        self.iterations = n;
        self
    }

    /// Sets the stagnation threshold.
    pub fn with_max_no_improvement(mut self, n: usize) -> Self {
        self.max_no_improvement = n;
        self
    }

    /// Sets the random-construction size threshold.
    pub fn with_construction_threshold(mut self, n: usize) -> Self {
        self.construction_threshold = n;
        self
    }

    /// Sets the inner annealer configuration.
    pub fn with_sa(mut self, sa: SaConfig) -> Self {
        self.sa = sa;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration, including the embedded SA config.
    pub fn validate(&self) -> Result<(), String> {
        if self.iterations == 0 {
            return Err("iterations must be at least 1".into());
        }
        self.sa.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = HybridConfig::default();
        assert_eq!(config.iterations, 10);
        assert_eq!(config.max_no_improvement, 10);
        assert_eq!(config.construction_threshold, 2000);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_validate_delegates_to_sa() {
        let config = HybridConfig::default().with_sa(SaConfig::default().with_alpha(0.0));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_iterations() {
        assert!(HybridConfig::default().with_iterations(0).validate().is_err());
    }
}
