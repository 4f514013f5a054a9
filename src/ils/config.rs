//! ILS configuration.

/// Configuration parameters for Iterated Local Search.
///
/// # Examples
///
/// ```
/// use tsp_metaheur::ils::IlsConfig;
///
/// let config = IlsConfig::default()
///     .with_max_iterations(200)
///     .with_max_no_improvement(30);
/// assert_eq!(config.max_iterations, 200);
/// assert_eq!(config.max_no_improvement, 30);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IlsConfig {
    /// Maximum number of perturb/re-optimize iterations.
    pub max_iterations: usize,

    /// Consecutive non-improving iterations tolerated before stopping.
    /// Independent of `max_iterations`.
    pub max_no_improvement: usize,

    /// Perturbation strength divisor: each perturbation applies
    /// `max(1, n / swap_divisor)` random interior exchanges.
    pub swap_divisor: usize,

    /// Instance size above which the delta-evaluated 2-opt local search
    /// replaces the full-neighborhood one. Purely a performance switch;
    /// the local-optimality criterion is the same.
    pub optimized_threshold: usize,

    /// Random seed (None draws a fresh seed).
    pub seed: Option<u64>,
}

impl Default for IlsConfig {
    fn default() -> Self {
        Self {
            max_iterations: 100,
            max_no_improvement: 20,
            swap_divisor: 25,
            optimized_threshold: 500,
            seed: None,
        }
    }
}

impl IlsConfig {
    /// Sets the maximum number of iterations.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Sets the stagnation threshold.
    pub fn with_max_no_improvement(mut self, n: usize) -> Self {
        self.max_no_improvement = n;
        self
    }

    /// Sets the perturbation strength divisor.
    pub fn with_swap_divisor(mut self, d: usize) -> Self {
        self.swap_divisor = d;
        self
    }

    /// Sets the optimized-local-search size threshold.
    pub fn with_optimized_threshold(mut self, n: usize) -> Self {
        self.optimized_threshold = n;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.swap_divisor == 0 {
            return Err("swap_divisor must be at least 1".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = IlsConfig::default();
        assert_eq!(config.max_iterations, 100);
        assert_eq!(config.max_no_improvement, 20);
        assert_eq!(config.swap_divisor, 25);
        assert_eq!(config.optimized_threshold, 500);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_validate_rejects_zero_divisor() {
        assert!(IlsConfig::default().with_swap_divisor(0).validate().is_err());
    }
}
