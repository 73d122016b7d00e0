use serde::{Deserialize, Serialize};

use crate::design::types::{DEFAULT_ALPHA, DEFAULT_DAILY_VOLUME, DEFAULT_POWER};

/// Candidate effect sizes swept when none are given explicitly, in absolute
/// percentage points of the baseline rate.
pub const DEFAULT_MDE_VALUES: [f64; 7] = [0.02, 0.03, 0.04, 0.05, 0.06, 0.08, 0.10];

fn default_mde_values() -> Vec<f64> {
    DEFAULT_MDE_VALUES.to_vec()
}

fn default_alpha() -> f64 {
    DEFAULT_ALPHA
}

fn default_power() -> f64 {
    DEFAULT_POWER
}

fn default_daily_volume() -> i64 {
    DEFAULT_DAILY_VOLUME
}

/// Shared parameters for a sensitivity sweep over candidate effect sizes.
///
/// Each candidate is combined with the shared baseline, alpha, power, and
/// daily volume to form one design per row; the traffic split is left at its
/// even default since the sweep is about effect size, not allocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepConfig {
    pub baseline_rate: f64,
    #[serde(default = "default_mde_values")]
    pub mde_values: Vec<f64>,
    #[serde(default = "default_alpha")]
    pub alpha: f64,
    #[serde(default = "default_power")]
    pub power: f64,
    #[serde(default = "default_daily_volume")]
    pub daily_volume: i64,
}

impl SweepConfig {
    pub fn new(baseline_rate: f64) -> Self {
        SweepConfig {
            baseline_rate,
            mde_values: default_mde_values(),
            alpha: DEFAULT_ALPHA,
            power: DEFAULT_POWER,
            daily_volume: DEFAULT_DAILY_VOLUME,
        }
    }

    pub fn with_mde_values(mut self, mde_values: Vec<f64>) -> Self {
        self.mde_values = mde_values;
        self
    }

    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn with_power(mut self, power: f64) -> Self {
        self.power = power;
        self
    }

    pub fn with_daily_volume(mut self, daily_volume: i64) -> Self {
        self.daily_volume = daily_volume;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_fills_defaults() {
        let config = SweepConfig::new(0.20);
        assert_eq!(config.baseline_rate, 0.20);
        assert_eq!(config.mde_values, DEFAULT_MDE_VALUES.to_vec());
        assert_eq!(config.alpha, 0.05);
        assert_eq!(config.power, 0.80);
        assert_eq!(config.daily_volume, 400);
    }

    #[test]
    fn setters_chain() {
        let config = SweepConfig::new(0.10)
            .with_mde_values(vec![0.01, 0.02])
            .with_alpha(0.01)
            .with_power(0.90)
            .with_daily_volume(1_000);
        assert_eq!(config.mde_values, vec![0.01, 0.02]);
        assert_eq!(config.alpha, 0.01);
        assert_eq!(config.power, 0.90);
        assert_eq!(config.daily_volume, 1_000);
    }

    #[test]
    fn deserializes_with_defaults() {
        let config: SweepConfig = serde_json::from_str(r#"{"baseline_rate": 0.25}"#)
            .expect("failed to deserialize sweep config");
        assert_eq!(config.baseline_rate, 0.25);
        assert_eq!(config.mde_values, DEFAULT_MDE_VALUES.to_vec());
        assert_eq!(config.power, 0.80);
    }
}
