//! Error types for Krantheon.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum KrantheonError {
    /// A routed parameter could not be interpreted by the response engine.
    #[error("Parameter error: {0}")]
    Parameter(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl KrantheonError {
    pub fn code(&self) -> i32 {
        match self {
            KrantheonError::Parameter(_) => -32602,
            KrantheonError::Json(_) => -32700,
        }
    }
}

pub type Result<T> = std::result::Result<T, KrantheonError>;
