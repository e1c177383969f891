//! Strict input checks for callers that must reject bad data instead of
//! letting the engine normalize it.

use pace_domain::HistoricalSpendingPeriod;
use thiserror::Error;

use crate::errors::PaceError;

/// One input the engine would otherwise silently adjust or misread.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputIssue {
    #[error("total days must be positive, got {0}")]
    NonPositiveTotalDays(i32),
    #[error("total budget must be a positive number, got {0}")]
    InvalidTotalBudget(f64),
    #[error("elapsed days cannot be negative, got {0}")]
    NegativeDaysElapsed(i32),
    #[error("elapsed days {days_elapsed} exceed period length {total_days}")]
    DaysElapsedBeyondPeriod { days_elapsed: i32, total_days: i32 },
    #[error("actual spend must be a non-negative number, got {0}")]
    InvalidActualSpent(f64),
    #[error("history period {index} has no days")]
    EmptyHistoryPeriod { index: usize },
    #[error("history period {index} has budget {budget}")]
    InvalidHistoryBudget { index: usize, budget: f64 },
    #[error("history period {index} has checkpoints out of day order")]
    UnsortedCheckpoints { index: usize },
    #[error("history period {index} has a checkpoint with spend {spent}")]
    InvalidCheckpointSpend { index: usize, spent: f64 },
}

/// Lists every problem with the inputs; an empty list means the engine will
/// use them exactly as given.
pub fn validate_inputs(
    days_elapsed: i32,
    total_days: i32,
    actual_spent: f64,
    total_budget: f64,
    historical_data: Option<&[HistoricalSpendingPeriod]>,
) -> Vec<InputIssue> {
    let mut issues = Vec::new();

    if total_days <= 0 {
        issues.push(InputIssue::NonPositiveTotalDays(total_days));
    }
    if !total_budget.is_finite() || total_budget <= 0.0 {
        issues.push(InputIssue::InvalidTotalBudget(total_budget));
    }
    if days_elapsed < 0 {
        issues.push(InputIssue::NegativeDaysElapsed(days_elapsed));
    } else if total_days > 0 && days_elapsed > total_days {
        issues.push(InputIssue::DaysElapsedBeyondPeriod {
            days_elapsed,
            total_days,
        });
    }
    if !actual_spent.is_finite() || actual_spent < 0.0 {
        issues.push(InputIssue::InvalidActualSpent(actual_spent));
    }

    for (index, period) in historical_data.unwrap_or_default().iter().enumerate() {
        issues.extend(period_issues(index, period));
    }

    issues
}

/// Like [`validate_inputs`], folding any issues into one error.
pub fn validate_inputs_strict(
    days_elapsed: i32,
    total_days: i32,
    actual_spent: f64,
    total_budget: f64,
    historical_data: Option<&[HistoricalSpendingPeriod]>,
) -> Result<(), PaceError> {
    let issues = validate_inputs(
        days_elapsed,
        total_days,
        actual_spent,
        total_budget,
        historical_data,
    );
    if issues.is_empty() {
        return Ok(());
    }
    let message = issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ");
    Err(PaceError::InvalidInput(message))
}

fn period_issues(index: usize, period: &HistoricalSpendingPeriod) -> Vec<InputIssue> {
    let mut issues = Vec::new();
    if period.total_days == 0 {
        issues.push(InputIssue::EmptyHistoryPeriod { index });
    }
    if !period.total_budget.is_finite() || period.total_budget <= 0.0 {
        issues.push(InputIssue::InvalidHistoryBudget {
            index,
            budget: period.total_budget,
        });
    }
    if !period.is_sorted() {
        issues.push(InputIssue::UnsortedCheckpoints { index });
    }
    if let Some(bad) = period
        .checkpoints
        .iter()
        .find(|checkpoint| !checkpoint.spent.is_finite() || checkpoint.spent < 0.0)
    {
        issues.push(InputIssue::InvalidCheckpointSpend {
            index,
            spent: bad.spent,
        });
    }
    issues
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_inputs_have_no_issues() {
        let history = vec![HistoricalSpendingPeriod::from_pairs(
            30,
            1500.0,
            &[(10, 700.0), (20, 1100.0)],
        )];
        assert!(validate_inputs(15, 30, 800.0, 1500.0, Some(&history)).is_empty());
        assert!(validate_inputs_strict(15, 30, 800.0, 1500.0, None).is_ok());
    }

    #[test]
    fn reports_every_degenerate_field() {
        let issues = validate_inputs(-5, 0, 10.0, -1.0, None);

        assert_eq!(
            issues,
            vec![
                InputIssue::NonPositiveTotalDays(0),
                InputIssue::InvalidTotalBudget(-1.0),
                InputIssue::NegativeDaysElapsed(-5),
            ]
        );
    }

    #[test]
    fn flags_problem_history_periods_by_index() {
        let history = vec![
            HistoricalSpendingPeriod::from_pairs(30, 1500.0, &[(10, 700.0)]),
            HistoricalSpendingPeriod::from_pairs(0, 0.0, &[(20, 1100.0), (10, -1.0)]),
        ];
        let issues = validate_inputs(15, 30, 800.0, 1500.0, Some(&history));

        assert_eq!(
            issues,
            vec![
                InputIssue::EmptyHistoryPeriod { index: 1 },
                InputIssue::InvalidHistoryBudget {
                    index: 1,
                    budget: 0.0
                },
                InputIssue::UnsortedCheckpoints { index: 1 },
                InputIssue::InvalidCheckpointSpend {
                    index: 1,
                    spent: -1.0
                },
            ]
        );
    }

    #[test]
    fn strict_validation_joins_messages() {
        let err = validate_inputs_strict(40, 30, f64::NAN, 1500.0, None).unwrap_err();
        let message = err.to_string();

        assert!(message.contains("exceed period length 30"), "{message}");
        assert!(message.contains("actual spend"), "{message}");
    }
}
