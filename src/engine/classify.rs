//! Turns actual versus expected spend into a pace category.

use pace_config::{EngineConfig, PaceThresholds};
use pace_domain::{BarResult, BarStatus};

/// Computes the budget adherence ratio and its category.
///
/// A non-positive expected spend is replaced by `config.expected_floor`.
pub fn classify(actual_spent: f64, expected_spent: f64, config: &EngineConfig) -> BarResult {
    let expected = if expected_spent > 0.0 {
        expected_spent
    } else {
        config.expected_floor
    };
    let bar = actual_spent / expected;
    BarResult::new(bar, status_for_ratio(bar, &config.thresholds))
}

/// First matching band wins; a NaN ratio falls through to `Over`.
pub fn status_for_ratio(bar: f64, thresholds: &PaceThresholds) -> BarStatus {
    if bar < thresholds.under {
        BarStatus::Under
    } else if bar < thresholds.good {
        BarStatus::Good
    } else if bar <= thresholds.on_track {
        BarStatus::OnTrack
    } else if bar <= thresholds.warning {
        BarStatus::Warning
    } else {
        BarStatus::Over
    }
}
