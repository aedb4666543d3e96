//! Shared types and the deterministic core for Krantheon components.
//!
//! Router, response engine, fixtures and audit fingerprints. Everything in
//! this crate is a pure function of its inputs.

pub mod command;
pub mod engine;
pub mod envelope;
pub mod error;
pub mod fingerprint;
pub mod fixtures;
pub mod router;
#[cfg(test)]
pub mod router_tests;
pub mod text;

pub use command::{CommandKind, RoutedCommand};
pub use engine::{dispatch, ResultRecord};
pub use envelope::{
    CommandRequest, CommandResponse, ErrorResponse, FixtureResponse, StatusResponse,
    DEFAULT_SESSION_ID,
};
pub use error::{KrantheonError, Result};
pub use fingerprint::{fingerprint, short_hash};
pub use fixtures::{Fixture, FixtureRecord};
pub use router::route;

/// Message returned by the root status endpoint
pub const STATUS_MESSAGE: &str = "Krantheon OS Demo API running.";
