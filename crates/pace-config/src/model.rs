use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Constants that shape the expected-spending curve, the historical blend,
/// and the pace classification.
///
/// The defaults are the production values; every field can be overridden
/// individually from a JSON file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// How much faster spending happens early in a period (payday effect).
    pub front_load_factor: f64,
    /// History shorter than this falls back to the curve alone.
    pub min_historical_periods: usize,
    /// Share of the learned pattern in the blended expectation.
    pub historical_weight: f64,
    /// Per-period weight decay, applied from the most recent period backwards.
    pub recency_decay: f64,
    /// Stand-in for a non-positive expected spend when computing the ratio.
    pub expected_floor: f64,
    /// Stand-in for a non-positive or non-finite total budget.
    pub budget_floor: f64,
    pub thresholds: PaceThresholds,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            front_load_factor: Self::DEFAULT_FRONT_LOAD_FACTOR,
            min_historical_periods: Self::DEFAULT_MIN_HISTORICAL_PERIODS,
            historical_weight: Self::DEFAULT_HISTORICAL_WEIGHT,
            recency_decay: Self::DEFAULT_RECENCY_DECAY,
            expected_floor: 0.01,
            budget_floor: 0.01,
            thresholds: PaceThresholds::default(),
        }
    }
}

impl EngineConfig {
    pub const DEFAULT_FRONT_LOAD_FACTOR: f64 = 1.2;
    pub const DEFAULT_MIN_HISTORICAL_PERIODS: usize = 2;
    pub const DEFAULT_HISTORICAL_WEIGHT: f64 = 0.7;
    pub const DEFAULT_RECENCY_DECAY: f64 = 0.8;

    /// Weight of the front-loaded curve in the blended expectation.
    pub fn curve_weight(&self) -> f64 {
        1.0 - self.historical_weight
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        // The curve is monotonic on [0, 1] only while 1 < a <= 2.
        let factor = self.front_load_factor;
        if factor.is_nan() || factor <= 1.0 || factor > 2.0 {
            return Err(ConfigError::Invalid(format!(
                "front_load_factor must be in (1, 2], got {}",
                self.front_load_factor
            )));
        }
        if !(0.0..=1.0).contains(&self.historical_weight) {
            return Err(ConfigError::Invalid(format!(
                "historical_weight must be in [0, 1], got {}",
                self.historical_weight
            )));
        }
        let decay = self.recency_decay;
        if decay.is_nan() || decay <= 0.0 || decay > 1.0 {
            return Err(ConfigError::Invalid(format!(
                "recency_decay must be in (0, 1], got {}",
                self.recency_decay
            )));
        }
        if !is_positive(self.expected_floor) || !is_positive(self.budget_floor) {
            return Err(ConfigError::Invalid(
                "expected_floor and budget_floor must be positive".into(),
            ));
        }
        if self.min_historical_periods == 0 {
            return Err(ConfigError::Invalid(
                "min_historical_periods must be at least 1".into(),
            ));
        }
        self.thresholds.validate()
    }
}

fn is_positive(value: f64) -> bool {
    !value.is_nan() && value > 0.0
}

/// Upper bounds of each pace band, in ratio units.
///
/// `under` and `good` are exclusive, `on_track` and `warning` inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaceThresholds {
    pub under: f64,
    pub good: f64,
    pub on_track: f64,
    pub warning: f64,
}

impl Default for PaceThresholds {
    fn default() -> Self {
        Self {
            under: 0.85,
            good: 0.95,
            on_track: 1.05,
            warning: 1.15,
        }
    }
}

impl PaceThresholds {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let bounds = [self.under, self.good, self.on_track, self.warning];
        if bounds.iter().any(|value| !value.is_finite()) {
            return Err(ConfigError::Invalid("thresholds must be finite".into()));
        }
        if !bounds.windows(2).all(|pair| pair[0] < pair[1]) {
            return Err(ConfigError::Invalid(format!(
                "thresholds must be strictly ascending, got {:?}",
                bounds
            )));
        }
        Ok(())
    }
}
