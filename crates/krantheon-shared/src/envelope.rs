//! Request and response envelopes exchanged with krantheond.

use crate::engine::ResultRecord;
use crate::error::KrantheonError;
use crate::fixtures::FixtureRecord;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Session id used when a request omits one
pub const DEFAULT_SESSION_ID: &str = "demo";

fn default_session_id() -> Option<String> {
    Some(DEFAULT_SESSION_ID.to_string())
}

/// POST /api/command body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandRequest {
    pub command: String,
    /// Opaque, echoed back. Missing => "demo"; explicit null stays null.
    #[serde(default = "default_session_id")]
    pub session_id: Option<String>,
}

impl CommandRequest {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            session_id: default_session_id(),
        }
    }

    pub fn with_session(mut self, session_id: impl Into<String>) -> Self {
        self.session_id = Some(session_id.into());
        self
    }
}

/// The object hashed into `audit_hash`. Includes latency, so two identical
/// commands issued at different times may hash differently.
#[derive(Debug, Clone, Serialize)]
pub struct AuditRecord<'a> {
    pub command: &'a str,
    pub confidence: f64,
    pub params: &'a BTreeMap<String, String>,
    pub output: &'a ResultRecord,
    pub session_id: Option<&'a str>,
    pub latency_ms: u64,
}

/// POST /api/command response
#[derive(Debug, Clone, Serialize)]
pub struct CommandResponse {
    pub success: bool,
    pub command: String,
    pub confidence: f64,
    pub params: BTreeMap<String, String>,
    /// Summary of `data`
    pub response: String,
    pub data: ResultRecord,
    /// First 16 hex chars of the audit fingerprint
    pub audit_hash: String,
    pub latency_ms: u64,
    pub session_id: Option<String>,
}

/// GET /api/{agency,athletes,hca,campaigns} response
#[derive(Debug, Clone, Serialize)]
pub struct FixtureResponse {
    pub success: bool,
    pub data: FixtureRecord,
    pub audit_hash: String,
}

/// Body returned when a command cannot be served
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
    pub code: i32,
}

impl From<&KrantheonError> for ErrorResponse {
    fn from(err: &KrantheonError) -> Self {
        Self {
            success: false,
            error: err.to_string(),
            code: err.code(),
        }
    }
}

/// GET / response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: String,
    pub message: String,
}
