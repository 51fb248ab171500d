//! ACO configuration.
//!
//! [`AcoConfig`] holds the Ant System hyperparameters.

use crate::error::AcoError;

/// Configuration for the Ant Colony Optimization algorithm.
///
/// # Defaults
///
/// ```
/// use u_aco::aco::AcoConfig;
///
/// let config = AcoConfig::default();
/// assert_eq!(config.num_ants, 10);
/// assert!((config.beta - 2.0).abs() < 1e-12);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_aco::aco::AcoConfig;
///
/// let config = AcoConfig::default()
///     .with_num_ants(5)
///     .with_evaporation(0.1)
///     .with_alpha(1.0)
///     .with_beta(1.0)
///     .with_q(20.0)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AcoConfig {
    /// Number of ants in the colony. Fixed for the whole run.
    pub num_ants: usize,

    /// Multiplier applied to every pheromone cell once per iteration, in (0, 1].
    ///
    /// This is the fraction of trail that *survives* an iteration:
    /// values near 1 retain memory longer, values near 0 forget quickly.
    pub evaporation: f64,

    /// Exponent on the pheromone level. 0 ignores trails entirely.
    pub alpha: f64,

    /// Exponent on the inverse distance. 0 ignores edge costs entirely.
    pub beta: f64,

    /// Deposit scale: an ant deposits `q / tour_length` on each edge it used.
    pub q: f64,

    /// Value every pheromone cell starts with.
    pub initial_pheromone: f64,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for AcoConfig {
    fn default() -> Self {
        Self {
            num_ants: 10,
            evaporation: 0.5,
            alpha: 1.0,
            beta: 2.0,
            q: 100.0,
            initial_pheromone: 1.0,
            seed: None,
        }
    }
}

impl AcoConfig {
    /// Sets the number of ants.
    pub fn with_num_ants(mut self, n: usize) -> Self {
        self.num_ants = n;
        self
    }

    /// Sets the evaporation (retention) factor.
    pub fn with_evaporation(mut self, factor: f64) -> Self {
        self.evaporation = factor;
        self
    }

    /// Sets the pheromone exponent.
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Sets the inverse-distance exponent.
    pub fn with_beta(mut self, beta: f64) -> Self {
        self.beta = beta;
        self
    }

    /// Sets the deposit scale `Q`.
    pub fn with_q(mut self, q: f64) -> Self {
        self.q = q;
        self
    }

    /// Sets the initial pheromone level.
    pub fn with_initial_pheromone(mut self, tau0: f64) -> Self {
        self.initial_pheromone = tau0;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// An evaporation factor of exactly 1 is accepted: trails then only
    /// grow. Zero is rejected since every trail would collapse to the
    /// last iteration's deposits.
    pub fn validate(&self) -> Result<(), AcoError> {
        if self.num_ants == 0 {
            return Err(invalid("num_ants", "must be at least 1".into()));
        }
        if !self.evaporation.is_finite() || self.evaporation <= 0.0 || self.evaporation > 1.0 {
            return Err(invalid(
                "evaporation",
                format!("must be in (0, 1], got {}", self.evaporation),
            ));
        }
        if !self.alpha.is_finite() || self.alpha < 0.0 {
            return Err(invalid(
                "alpha",
                format!("must be finite and non-negative, got {}", self.alpha),
            ));
        }
        if !self.beta.is_finite() || self.beta < 0.0 {
            return Err(invalid(
                "beta",
                format!("must be finite and non-negative, got {}", self.beta),
            ));
        }
        if !self.q.is_finite() || self.q <= 0.0 {
            return Err(invalid(
                "q",
                format!("must be finite and positive, got {}", self.q),
            ));
        }
        if !self.initial_pheromone.is_finite() || self.initial_pheromone <= 0.0 {
            return Err(invalid(
                "initial_pheromone",
                format!("must be finite and positive, got {}", self.initial_pheromone),
            ));
        }
        Ok(())
    }
}

fn invalid(field: &'static str, reason: String) -> AcoError {
    AcoError::InvalidConfig { field, reason }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AcoConfig::default();
        assert_eq!(config.num_ants, 10);
        assert!((config.evaporation - 0.5).abs() < 1e-12);
        assert!((config.initial_pheromone - 1.0).abs() < 1e-12);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_validate_ok() {
        assert!(AcoConfig::default().validate().is_ok());
        assert!(AcoConfig::default().with_evaporation(1.0).validate().is_ok());
        assert!(AcoConfig::default()
            .with_alpha(0.0)
            .with_beta(0.0)
            .validate()
            .is_ok());
    }

    #[test]
    fn test_validate_zero_ants() {
        let err = AcoConfig::default().with_num_ants(0).validate().unwrap_err();
        assert!(matches!(
            err,
            AcoError::InvalidConfig {
                field: "num_ants",
                ..
            }
        ));
    }

    #[test]
    fn test_validate_bad_evaporation() {
        for factor in [0.0, -0.3, 1.5, f64::NAN] {
            let err = AcoConfig::default()
                .with_evaporation(factor)
                .validate()
                .unwrap_err();
            assert!(
                matches!(err, AcoError::InvalidConfig { field: "evaporation", .. }),
                "evaporation {factor} should be rejected"
            );
        }
    }

    #[test]
    fn test_validate_negative_exponents() {
        assert!(AcoConfig::default().with_alpha(-1.0).validate().is_err());
        assert!(AcoConfig::default().with_beta(-0.5).validate().is_err());
        assert!(AcoConfig::default()
            .with_beta(f64::INFINITY)
            .validate()
            .is_err());
    }

    #[test]
    fn test_validate_bad_q() {
        assert!(AcoConfig::default().with_q(0.0).validate().is_err());
        assert!(AcoConfig::default().with_q(-20.0).validate().is_err());
    }

    #[test]
    fn test_validate_bad_initial_pheromone() {
        assert!(AcoConfig::default()
            .with_initial_pheromone(0.0)
            .validate()
            .is_err());
    }
}
