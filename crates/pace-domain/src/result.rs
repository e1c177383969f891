//! Classification output of the budget pace engine.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Pace category derived from the budget adherence ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BarStatus {
    Under,
    Good,
    OnTrack,
    Warning,
    Over,
}

impl BarStatus {
    pub const ALL: [BarStatus; 5] = [
        BarStatus::Under,
        BarStatus::Good,
        BarStatus::OnTrack,
        BarStatus::Warning,
        BarStatus::Over,
    ];

    /// Human-readable summary shown next to the ratio.
    pub fn message(self) -> &'static str {
        match self {
            BarStatus::Under => "Well under budget!",
            BarStatus::Good => "Slightly under budget",
            BarStatus::OnTrack => "Right on track",
            BarStatus::Warning => "Slightly over budget",
            BarStatus::Over => "Significantly over budget!",
        }
    }

    /// Stable numeric code used across the C ABI.
    pub fn code(self) -> i32 {
        match self {
            BarStatus::Under => 0,
            BarStatus::Good => 1,
            BarStatus::OnTrack => 2,
            BarStatus::Warning => 3,
            BarStatus::Over => 4,
        }
    }

    pub fn from_code(code: i32) -> Option<Self> {
        BarStatus::ALL.into_iter().find(|status| status.code() == code)
    }
}

impl fmt::Display for BarStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            BarStatus::Under => "under",
            BarStatus::Good => "good",
            BarStatus::OnTrack => "onTrack",
            BarStatus::Warning => "warning",
            BarStatus::Over => "over",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarResult {
    pub bar: f64,
    pub status: BarStatus,
    pub message: String,
}

impl BarResult {
    pub fn new(bar: f64, status: BarStatus) -> Self {
        Self {
            bar,
            status,
            message: status.message().to_string(),
        }
    }
}

/// Full engine output: the classification plus the figures behind it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BarCalculation {
    pub bar: f64,
    pub status: BarStatus,
    pub message: String,
    pub expected_spent: f64,
    pub actual_spent: f64,
    pub remaining: f64,
    pub days_remaining: u32,
}

impl BarCalculation {
    pub fn from_result(
        result: BarResult,
        expected_spent: f64,
        actual_spent: f64,
        remaining: f64,
        days_remaining: u32,
    ) -> Self {
        Self {
            bar: result.bar,
            status: result.status,
            message: result.message,
            expected_spent,
            actual_spent,
            remaining,
            days_remaining,
        }
    }

    pub fn as_result(&self) -> BarResult {
        BarResult {
            bar: self.bar,
            status: self.status,
            message: self.message.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_are_stable() {
        for status in BarStatus::ALL {
            assert_eq!(BarStatus::from_code(status.code()), Some(status));
        }
        assert_eq!(BarStatus::from_code(9), None);
    }

    #[test]
    fn status_serializes_in_camel_case() {
        let json = serde_json::to_string(&BarStatus::OnTrack).unwrap();
        assert_eq!(json, "\"onTrack\"");
        assert_eq!(BarStatus::OnTrack.to_string(), "onTrack");
    }

    #[test]
    fn calculation_serializes_camel_case_fields() {
        let calc = BarCalculation::from_result(
            BarResult::new(1.0, BarStatus::OnTrack),
            825.0,
            825.0,
            675.0,
            15,
        );
        let value = serde_json::to_value(&calc).unwrap();

        assert_eq!(value["expectedSpent"], 825.0);
        assert_eq!(value["daysRemaining"], 15);
        assert_eq!(value["message"], "Right on track");
        assert_eq!(calc.as_result(), BarResult::new(1.0, BarStatus::OnTrack));
    }
}
