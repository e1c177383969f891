//! pace-config
//!
//! Tunable constants for the budget pace engine.
//! Owns the EngineConfig data structure plus disk persistence helpers.

pub mod error;
pub mod manager;
pub mod model;

pub use error::ConfigError;
pub use manager::ConfigManager;
pub use model::{EngineConfig, PaceThresholds};
