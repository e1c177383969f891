//! Historical spending snapshots used to learn a user's spending pace.

use serde::{Deserialize, Serialize};

/// Cumulative spend recorded at a day offset within a past period.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpendingCheckpoint {
    pub day: u32,
    pub spent: f64,
}

impl SpendingCheckpoint {
    pub fn new(day: u32, spent: f64) -> Self {
        Self { day, spent }
    }
}

/// One completed budgeting period with its recorded checkpoints.
///
/// Checkpoints are expected in non-decreasing `day` order. The engine copes
/// with unsorted input, but [`HistoricalSpendingPeriod::is_sorted`] lets
/// callers check before handing the period over.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoricalSpendingPeriod {
    pub total_days: u32,
    pub total_budget: f64,
    #[serde(default)]
    pub checkpoints: Vec<SpendingCheckpoint>,
}

impl HistoricalSpendingPeriod {
    pub fn new(total_days: u32, total_budget: f64, checkpoints: Vec<SpendingCheckpoint>) -> Self {
        Self {
            total_days,
            total_budget,
            checkpoints,
        }
    }

    /// Builds a period from `(day, spent)` pairs.
    pub fn from_pairs(total_days: u32, total_budget: f64, pairs: &[(u32, f64)]) -> Self {
        let checkpoints = pairs
            .iter()
            .map(|&(day, spent)| SpendingCheckpoint::new(day, spent))
            .collect();
        Self::new(total_days, total_budget, checkpoints)
    }

    pub fn is_sorted(&self) -> bool {
        self.checkpoints
            .windows(2)
            .all(|pair| pair[0].day <= pair[1].day)
    }

    pub fn is_empty(&self) -> bool {
        self.checkpoints.is_empty()
    }
}
