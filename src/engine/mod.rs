//! Budget adherence ratio engine.
//!
//! Pipeline, leaves first: the front-loaded [`curve`], the [`history`]
//! learner, the [`blend`] of both, the [`classify`] step, and the
//! [`BarEngine`] that normalizes inputs and runs them in order.
//!
//! The free functions below use the default constants; build a
//! [`BarEngine`] to run with tuned ones.

pub mod blend;
pub mod calculator;
pub mod classify;
pub mod curve;
pub mod history;
pub mod normalize;

use once_cell::sync::Lazy;
use pace_domain::{BarCalculation, BarResult, HistoricalSpendingPeriod};

pub use calculator::BarEngine;
pub use curve::{front_loaded_fraction, front_loaded_fraction_with};
pub use history::{historical_fraction, historical_fraction_with, interpolate};
pub use normalize::NormalizedInputs;

static DEFAULT_ENGINE: Lazy<BarEngine> = Lazy::new(BarEngine::default);

/// See [`BarEngine::calculate`].
pub fn calculate(
    days_elapsed: i32,
    total_days: i32,
    actual_spent: f64,
    total_budget: f64,
    historical_data: Option<&[HistoricalSpendingPeriod]>,
) -> BarCalculation {
    DEFAULT_ENGINE.calculate(
        days_elapsed,
        total_days,
        actual_spent,
        total_budget,
        historical_data,
    )
}

/// See [`BarEngine::calculate_expected_spending`].
pub fn calculate_expected_spending(
    days_elapsed: i32,
    total_days: i32,
    total_budget: f64,
    historical_data: Option<&[HistoricalSpendingPeriod]>,
) -> f64 {
    DEFAULT_ENGINE.calculate_expected_spending(
        days_elapsed,
        total_days,
        total_budget,
        historical_data,
    )
}

/// See [`BarEngine::calculate_bar`].
pub fn calculate_bar(actual_spent: f64, expected_spent: f64) -> BarResult {
    DEFAULT_ENGINE.calculate_bar(actual_spent, expected_spent)
}
