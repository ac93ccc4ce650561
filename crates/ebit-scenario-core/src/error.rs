use thiserror::Error;

#[derive(Debug, Error)]
pub enum EbitScenarioError {
    #[error("Invalid input: {field} — {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("No target price supplied for commodity '{commodity}'")]
    MissingTarget { commodity: String },

    #[error("Division by zero in {context}")]
    DivisionByZero { context: String },

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for EbitScenarioError {
    fn from(e: serde_json::Error) -> Self {
        EbitScenarioError::SerializationError(e.to_string())
    }
}
