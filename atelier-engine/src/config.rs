//! Simulator configuration
//!
//! Defines the tunable parameters of the day-cycle simulator: tick period,
//! day bound, and the optional fixed seed that makes a run reproducible.

use std::time::Duration;

/// Day-cycle simulator configuration
#[derive(Debug, Clone)]
pub struct SimulatorConfig {
    /// Period between simulated days
    pub tick_interval: Duration,

    /// Day counter bound; reaching it stops the simulation
    pub max_days: u32,

    /// Fixed seed for the random source; `None` seeds from entropy
    pub seed: Option<u64>,
}

impl SimulatorConfig {
    /// Creates a configuration with the given tick period and day bound
    pub fn new(tick_interval: Duration, max_days: u32) -> Self {
        Self {
            tick_interval,
            max_days,
            seed: None,
        }
    }

    /// Creates configuration from environment variables
    ///
    /// Expected environment variables:
    /// - ATELIER_TICK_MS (optional, milliseconds, default: 1000)
    /// - ATELIER_MAX_DAYS (optional, default: 30)
    /// - ATELIER_SEED (optional, u64)
    pub fn from_env() -> Self {
        let tick_interval = std::env::var("ATELIER_TICK_MS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .map(Duration::from_millis)
            .unwrap_or(Duration::from_millis(1000));

        let max_days = std::env::var("ATELIER_MAX_DAYS")
            .ok()
            .and_then(|s| s.parse::<u32>().ok())
            .unwrap_or(30);

        let seed = std::env::var("ATELIER_SEED")
            .ok()
            .and_then(|s| s.parse::<u64>().ok());

        Self {
            tick_interval,
            max_days,
            seed,
        }
    }

    /// Pins the random seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.tick_interval.is_zero() {
            anyhow::bail!("tick_interval must be greater than 0");
        }

        if self.max_days == 0 {
            anyhow::bail!("max_days must be greater than 0");
        }

        Ok(())
    }
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self::new(Duration::from_millis(1000), 30)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SimulatorConfig::default();
        assert_eq!(config.tick_interval, Duration::from_millis(1000));
        assert_eq!(config.max_days, 30);
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let mut config = SimulatorConfig::default();
        assert!(config.validate().is_ok());

        config.tick_interval = Duration::ZERO;
        assert!(config.validate().is_err());

        config.tick_interval = Duration::from_millis(100);
        config.max_days = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_with_seed() {
        let config = SimulatorConfig::default().with_seed(42);
        assert_eq!(config.seed, Some(42));
    }
}
