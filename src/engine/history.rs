//! Learns the expected-spending fraction from past periods.

use std::borrow::Cow;

use pace_config::EngineConfig;
use pace_domain::{HistoricalSpendingPeriod, SpendingCheckpoint};

/// Fraction of `period`'s budget spent by time `t`, read off its checkpoints.
///
/// Returns `None` when the period has no checkpoints or no usable budget.
pub fn interpolate(t: f64, period: &HistoricalSpendingPeriod) -> Option<f64> {
    let budget = period.total_budget;
    if period.checkpoints.is_empty() || budget.is_nan() || budget <= 0.0 {
        return None;
    }

    let checkpoints: Cow<'_, [SpendingCheckpoint]> = if period.is_sorted() {
        Cow::Borrowed(period.checkpoints.as_slice())
    } else {
        tracing::trace!(
            count = period.checkpoints.len(),
            "sorting out-of-order checkpoints"
        );
        let mut sorted = period.checkpoints.clone();
        sorted.sort_by_key(|checkpoint| checkpoint.day);
        Cow::Owned(sorted)
    };

    let target_day = t * f64::from(period.total_days);
    let before = checkpoints
        .iter()
        .rev()
        .find(|checkpoint| f64::from(checkpoint.day) <= target_day);
    let after = checkpoints
        .iter()
        .find(|checkpoint| f64::from(checkpoint.day) >= target_day);

    let spent = match (before, after) {
        (Some(before), Some(after)) if before.day != after.day => {
            let span = f64::from(after.day - before.day);
            let progress = (target_day - f64::from(before.day)) / span;
            before.spent + (after.spent - before.spent) * progress
        }
        (Some(before), _) => before.spent,
        (None, Some(after)) => after.spent,
        (None, None) => return None,
    };

    Some(spent / period.total_budget)
}

/// Recency-weighted average of the per-period fractions at `t`, with the
/// default decay.
pub fn historical_fraction(t: f64, periods: &[HistoricalSpendingPeriod]) -> f64 {
    historical_fraction_with(t, periods, EngineConfig::DEFAULT_RECENCY_DECAY)
}

/// The last period in `periods` is the most recent and weighs 1; each step
/// back multiplies the weight by `recency_decay`. Periods without a usable
/// fraction are skipped before weights are assigned. With nothing usable the
/// result is `t` itself.
pub fn historical_fraction_with(
    t: f64,
    periods: &[HistoricalSpendingPeriod],
    recency_decay: f64,
) -> f64 {
    let fractions: Vec<f64> = periods
        .iter()
        .filter_map(|period| interpolate(t, period))
        .collect();

    if fractions.is_empty() {
        tracing::trace!(t, "no usable history, falling back to linear pace");
        return t;
    }

    let newest = fractions.len() - 1;
    let (weighted_sum, weight_total) =
        fractions
            .iter()
            .enumerate()
            .fold((0.0, 0.0), |(sum, total), (idx, fraction)| {
                let weight = recency_decay.powi((newest - idx) as i32);
                (sum + weight * fraction, total + weight)
            });

    weighted_sum / weight_total
}

#[cfg(test)]
mod tests {
    use super::*;

    fn period(pairs: &[(u32, f64)]) -> HistoricalSpendingPeriod {
        HistoricalSpendingPeriod::from_pairs(30, 1500.0, pairs)
    }

    #[test]
    fn exact_checkpoint_hit_needs_no_interpolation() {
        let history = period(&[(10, 700.0), (20, 1100.0), (30, 1450.0)]);
        assert_eq!(interpolate(10.0 / 30.0, &history), Some(700.0 / 1500.0));
    }

    #[test]
    fn interpolates_linearly_between_checkpoints() {
        let history = period(&[(10, 700.0), (20, 1100.0)]);
        let fraction = interpolate(0.5, &history).expect("fraction");
        assert!((fraction - 900.0 / 1500.0).abs() < 1e-12);
    }

    #[test]
    fn holds_edge_checkpoints_outside_their_range() {
        let history = period(&[(10, 700.0), (20, 1100.0)]);

        assert_eq!(interpolate(0.0, &history), Some(700.0 / 1500.0));
        assert_eq!(interpolate(1.0, &history), Some(1100.0 / 1500.0));
    }

    #[test]
    fn empty_or_unbudgeted_periods_contribute_nothing() {
        assert_eq!(interpolate(0.5, &period(&[])), None);
        let unbudgeted = HistoricalSpendingPeriod::from_pairs(30, 0.0, &[(10, 700.0)]);
        assert_eq!(interpolate(0.5, &unbudgeted), None);
        let nan_budget = HistoricalSpendingPeriod::from_pairs(30, f64::NAN, &[(10, 700.0)]);
        assert_eq!(interpolate(0.5, &nan_budget), None);
    }

    #[test]
    fn unsorted_checkpoints_match_sorted_ones() {
        let sorted = period(&[(5, 100.0), (10, 700.0), (20, 1100.0), (30, 1450.0)]);
        let shuffled = period(&[(20, 1100.0), (5, 100.0), (30, 1450.0), (10, 700.0)]);

        for step in 0..=30 {
            let t = step as f64 / 30.0;
            assert_eq!(interpolate(t, &sorted), interpolate(t, &shuffled), "t={t}");
        }
    }

    #[test]
    fn most_recent_period_weighs_most() {
        let older = period(&[(15, 300.0)]);
        let newer = period(&[(15, 900.0)]);

        let fraction = historical_fraction(0.5, &[older, newer]);
        let expected = (0.8 * 0.2 + 1.0 * 0.6) / 1.8;
        assert!((fraction - expected).abs() < 1e-12);
        assert!(fraction > 0.4);
    }

    #[test]
    fn skipped_periods_do_not_consume_weights() {
        let older = period(&[(15, 300.0)]);
        let newer = period(&[(15, 900.0)]);
        let empty = period(&[]);

        let with_gap = historical_fraction(0.5, &[older.clone(), newer.clone(), empty]);
        let without_gap = historical_fraction(0.5, &[older, newer]);
        assert_eq!(with_gap, without_gap);
    }

    #[test]
    fn falls_back_to_linear_without_usable_history() {
        assert_eq!(historical_fraction(0.25, &[period(&[]), period(&[])]), 0.25);
    }
}
