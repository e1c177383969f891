//! Mixes the learned spending pattern with the default curve.

use pace_config::EngineConfig;
use pace_domain::HistoricalSpendingPeriod;

use super::{
    curve::front_loaded_fraction_with, history::historical_fraction_with,
    normalize::NormalizedInputs,
};

/// Expected spend, as an amount, at the normalized point in the period.
///
/// History shorter than `config.min_historical_periods` is ignored and the
/// curve is used alone.
pub fn expected_spending(
    inputs: &NormalizedInputs,
    history: Option<&[HistoricalSpendingPeriod]>,
    config: &EngineConfig,
) -> f64 {
    let t = inputs.time_fraction();
    let front_loaded =
        inputs.total_budget * front_loaded_fraction_with(t, config.front_load_factor);

    match history {
        Some(periods) if periods.len() >= config.min_historical_periods => {
            let learned = inputs.total_budget
                * historical_fraction_with(t, periods, config.recency_decay);
            tracing::trace!(
                t,
                periods = periods.len(),
                learned,
                front_loaded,
                "blending history with curve"
            );
            config.historical_weight * learned + config.curve_weight() * front_loaded
        }
        _ => {
            tracing::trace!(t, front_loaded, "using curve only");
            front_loaded
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs(days_elapsed: i64, total_days: i64, total_budget: f64) -> NormalizedInputs {
        NormalizedInputs {
            days_elapsed,
            total_days,
            total_budget,
        }
    }

    fn linear_period() -> HistoricalSpendingPeriod {
        HistoricalSpendingPeriod::from_pairs(30, 1500.0, &[(0, 0.0), (30, 1500.0)])
    }

    #[test]
    fn curve_only_without_history() {
        let config = EngineConfig::default();
        let expected = expected_spending(&inputs(15, 30, 1500.0), None, &config);
        assert!((expected - 825.0).abs() < 1e-9);
    }

    #[test]
    fn single_period_is_ignored() {
        let config = EngineConfig::default();
        let history = vec![linear_period()];

        assert_eq!(
            expected_spending(&inputs(15, 30, 1500.0), Some(&history), &config),
            expected_spending(&inputs(15, 30, 1500.0), None, &config)
        );
    }

    #[test]
    fn blends_seventy_thirty_with_enough_history() {
        let config = EngineConfig::default();
        let history = vec![linear_period(), linear_period()];

        let expected = expected_spending(&inputs(15, 30, 1500.0), Some(&history), &config);
        let wanted = 0.7 * 750.0 + 0.3 * 825.0;
        assert!((expected - wanted).abs() < 1e-9, "got {expected}");
    }

    #[test]
    fn history_weight_of_zero_reduces_to_curve() {
        let config = EngineConfig {
            historical_weight: 0.0,
            ..EngineConfig::default()
        };
        let history = vec![linear_period(), linear_period()];

        let expected = expected_spending(&inputs(15, 30, 1500.0), Some(&history), &config);
        assert!((expected - 825.0).abs() < 1e-9);
    }
}
