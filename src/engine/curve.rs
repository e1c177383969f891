//! Closed-form default spending curve.

use pace_config::EngineConfig;

/// Expected share of the budget spent at time fraction `t`, using the
/// default front-load factor.
pub fn front_loaded_fraction(t: f64) -> f64 {
    front_loaded_fraction_with(t, EngineConfig::DEFAULT_FRONT_LOAD_FACTOR)
}

/// `a·t − (a−1)·t²`, capped at 1.
///
/// `t` is expected in `[0, 1]`. For `a` in `(1, 2]` the curve starts at 0,
/// ends at exactly 1 and never decreases in between.
pub fn front_loaded_fraction_with(t: f64, front_load_factor: f64) -> f64 {
    let a = front_load_factor;
    (a * t - (a - 1.0) * t * t).min(1.0)
}
