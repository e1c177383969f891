#![doc(test(attr(deny(warnings))))]

//! Budget Pace estimates how much of a budget should be spent by a given day
//! of the period, compares it with actual spend, and classifies the pace.
//!
//! ```
//! use budget_pace::{calculate, BarStatus};
//!
//! let pace = calculate(15, 30, 800.0, 1500.0, None);
//! assert_eq!(pace.status, BarStatus::OnTrack);
//! ```

pub mod engine;
pub mod errors;
#[cfg(feature = "ffi")]
pub mod ffi;
pub mod utils;
pub mod validation;

pub use engine::{calculate, calculate_bar, calculate_expected_spending, BarEngine};
pub use errors::PaceError;
pub use pace_config::{ConfigManager, EngineConfig, PaceThresholds};
pub use pace_domain::{
    BarCalculation, BarResult, BarStatus, HistoricalSpendingPeriod, PeriodWindow,
    SpendingCheckpoint,
};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!(
            build = %utils::build_info::current().summary(),
            "Budget Pace tracing initialized."
        );
    });
}
