pub mod error;
pub mod projection;
pub mod types;

pub use error::EbitScenarioError;
pub use types::*;

/// Standard result type for all scenario-engine operations
pub type EbitScenarioResult<T> = Result<T, EbitScenarioError>;
