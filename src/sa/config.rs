//! Annealing parameters.

/// Configuration for a simulated-annealing repair run.
///
/// Defaults match the parameters the annealer is tuned for on a 9×9
/// board: a modest starting temperature, slow geometric cooling, and a
/// generous iteration budget.
///
/// # Examples
///
/// ```
/// use sudoku_anneal::sa::AnnealConfig;
///
/// let config = AnnealConfig::default()
///     .with_initial_temperature(10.0)
///     .with_alpha(0.995)
///     .with_max_iterations(200_000)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnnealConfig {
    /// Starting temperature. Higher values accept more worsening swaps
    /// early on.
    pub initial_temperature: f64,

    /// The run stops once temperature drops to or below this.
    pub min_temperature: f64,

    /// Geometric cooling factor in (0, 1): `T <- T * alpha` each
    /// iteration. Higher = slower cooling.
    pub alpha: f64,

    /// Hard iteration budget.
    pub max_iterations: usize,

    /// Random seed for reproducibility. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for AnnealConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 5.0,
            min_temperature: 1e-3,
            alpha: 0.999,
            max_iterations: 1_000_000,
            seed: None,
        }
    }
}

impl AnnealConfig {
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_min_temperature(mut self, t: f64) -> Self {
        self.min_temperature = t;
        self
    }

    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.initial_temperature <= 0.0 {
            return Err("initial_temperature must be positive".into());
        }
        if self.min_temperature <= 0.0 {
            return Err("min_temperature must be positive".into());
        }
        if self.min_temperature >= self.initial_temperature {
            return Err("min_temperature must be less than initial_temperature".into());
        }
        if self.alpha <= 0.0 || self.alpha >= 1.0 {
            return Err(format!("alpha must be in (0, 1), got {}", self.alpha));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AnnealConfig::default();
        assert!((config.initial_temperature - 5.0).abs() < 1e-12);
        assert!((config.min_temperature - 1e-3).abs() < 1e-12);
        assert!((config.alpha - 0.999).abs() < 1e-12);
        assert_eq!(config.max_iterations, 1_000_000);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_validate_ok() {
        assert!(AnnealConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_bad_temperature() {
        let config = AnnealConfig::default().with_initial_temperature(-1.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_min_ge_initial() {
        let config = AnnealConfig::default()
            .with_initial_temperature(0.5)
            .with_min_temperature(1.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_bad_alpha() {
        assert!(AnnealConfig::default().with_alpha(1.0).validate().is_err());
        assert!(AnnealConfig::default().with_alpha(0.0).validate().is_err());
        assert!(AnnealConfig::default().with_alpha(1.5).validate().is_err());
    }
}
