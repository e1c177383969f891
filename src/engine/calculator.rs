//! Entry point tying the guards, the blend and the classifier together.

use std::path::Path;

use chrono::NaiveDate;
use pace_config::{ConfigManager, EngineConfig};
use pace_domain::{BarCalculation, BarResult, HistoricalSpendingPeriod, PeriodWindow};

use super::{blend, classify, normalize::NormalizedInputs};
use crate::errors::PaceError;

/// Budget adherence engine bound to a set of tuning constants.
///
/// The engine holds no state besides its configuration, so one instance can
/// be shared freely between threads.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BarEngine {
    config: EngineConfig,
}

impl BarEngine {
    pub fn new(config: EngineConfig) -> Result<Self, PaceError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Loads constants from a JSON file; a missing file yields the defaults.
    pub fn from_config_file(path: impl AsRef<Path>) -> Result<Self, PaceError> {
        let config = ConfigManager::new(path.as_ref().to_path_buf()).load()?;
        Self::new(config)
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Full pace calculation for a point in the current period.
    ///
    /// Never fails: unusable figures are normalized before the expected spend
    /// is computed. `remaining` and `days_remaining` are derived from the
    /// caller's figures as supplied, floored at zero.
    pub fn calculate(
        &self,
        days_elapsed: i32,
        total_days: i32,
        actual_spent: f64,
        total_budget: f64,
        historical_data: Option<&[HistoricalSpendingPeriod]>,
    ) -> BarCalculation {
        let inputs = NormalizedInputs::normalize(
            days_elapsed,
            total_days,
            total_budget,
            self.config.budget_floor,
        );
        let expected_spent = blend::expected_spending(&inputs, historical_data, &self.config);
        let result = classify::classify(actual_spent, expected_spent, &self.config);

        let remaining = (total_budget - actual_spent).max(0.0);
        let days_remaining = (i64::from(total_days) - i64::from(days_elapsed)).max(0);
        let days_remaining = u32::try_from(days_remaining).unwrap_or(u32::MAX);

        tracing::debug!(
            bar = result.bar,
            status = %result.status,
            expected_spent,
            actual_spent,
            "calculated budget pace"
        );

        BarCalculation::from_result(
            result,
            expected_spent,
            actual_spent,
            remaining,
            days_remaining,
        )
    }

    /// Expected spend amount at `days_elapsed` into the period.
    pub fn calculate_expected_spending(
        &self,
        days_elapsed: i32,
        total_days: i32,
        total_budget: f64,
        historical_data: Option<&[HistoricalSpendingPeriod]>,
    ) -> f64 {
        let inputs = NormalizedInputs::normalize(
            days_elapsed,
            total_days,
            total_budget,
            self.config.budget_floor,
        );
        blend::expected_spending(&inputs, historical_data, &self.config)
    }

    pub fn calculate_bar(&self, actual_spent: f64, expected_spent: f64) -> BarResult {
        classify::classify(actual_spent, expected_spent, &self.config)
    }

    /// Same as [`BarEngine::calculate`], with day counts taken from a
    /// calendar window and the date to measure at.
    pub fn calculate_for_window(
        &self,
        window: &PeriodWindow,
        reference: NaiveDate,
        actual_spent: f64,
        total_budget: f64,
        historical_data: Option<&[HistoricalSpendingPeriod]>,
    ) -> BarCalculation {
        let total_days = i32::try_from(window.total_days()).unwrap_or(i32::MAX);
        let days_elapsed = i32::try_from(window.days_elapsed(reference)).unwrap_or(i32::MAX);
        self.calculate(
            days_elapsed,
            total_days,
            actual_spent,
            total_budget,
            historical_data,
        )
    }
}
