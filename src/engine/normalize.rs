//! Input guards applied once before any engine computation.

/// Period figures after the never-fail guards have been applied.
///
/// Invariants: `total_days >= 1`, `0 <= days_elapsed <= total_days`,
/// `total_budget > 0` and finite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizedInputs {
    pub days_elapsed: i64,
    pub total_days: i64,
    pub total_budget: f64,
}

impl NormalizedInputs {
    pub fn normalize(
        days_elapsed: i32,
        total_days: i32,
        total_budget: f64,
        budget_floor: f64,
    ) -> Self {
        let raw_days_elapsed = i64::from(days_elapsed);
        let raw_total_days = i64::from(total_days);

        let total_days = if raw_total_days <= 0 {
            tracing::debug!(total_days = raw_total_days, "non-positive total days, using 1");
            1
        } else {
            raw_total_days
        };

        let total_budget = if !total_budget.is_finite() || total_budget <= 0.0 {
            tracing::debug!(
                total_budget,
                floor = budget_floor,
                "unusable total budget, using floor"
            );
            budget_floor
        } else {
            total_budget
        };

        let days_elapsed = if raw_days_elapsed < 0 {
            tracing::debug!(days_elapsed = raw_days_elapsed, "negative elapsed days, using 0");
            0
        } else if raw_days_elapsed > total_days {
            tracing::debug!(
                days_elapsed = raw_days_elapsed,
                total_days,
                "elapsed days beyond period, clamping"
            );
            total_days
        } else {
            raw_days_elapsed
        };

        Self {
            days_elapsed,
            total_days,
            total_budget,
        }
    }

    /// Elapsed share of the period, in `[0, 1]`.
    pub fn time_fraction(&self) -> f64 {
        self.days_elapsed as f64 / self.total_days as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degenerate_inputs_collapse_to_safe_defaults() {
        let inputs = NormalizedInputs::normalize(-5, 0, -1.0, 0.01);

        assert_eq!(
            inputs,
            NormalizedInputs {
                days_elapsed: 0,
                total_days: 1,
                total_budget: 0.01,
            }
        );
        assert_eq!(inputs.time_fraction(), 0.0);
    }

    #[test]
    fn elapsed_days_are_clamped_to_period_length() {
        let inputs = NormalizedInputs::normalize(45, 30, 1500.0, 0.01);

        assert_eq!(inputs.days_elapsed, 30);
        assert_eq!(inputs.time_fraction(), 1.0);
    }

    #[test]
    fn non_finite_budget_uses_floor() {
        assert_eq!(NormalizedInputs::normalize(1, 30, f64::NAN, 0.01).total_budget, 0.01);
        assert_eq!(
            NormalizedInputs::normalize(1, 30, f64::INFINITY, 0.01).total_budget,
            0.01
        );
    }

    #[test]
    fn valid_inputs_pass_through() {
        let inputs = NormalizedInputs::normalize(15, 30, 1500.0, 0.01);

        assert_eq!(inputs.days_elapsed, 15);
        assert_eq!(inputs.total_days, 30);
        assert_eq!(inputs.total_budget, 1500.0);
        assert_eq!(inputs.time_fraction(), 0.5);
    }
}
