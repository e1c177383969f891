//! pace-domain
//!
//! Value types consumed and produced by the budget pace engine.
//! No I/O, no configuration, no computation beyond trivial accessors.

pub mod error;
pub mod history;
pub mod result;
pub mod window;

pub use error::DomainError;
pub use history::*;
pub use result::*;
pub use window::*;
