//! Command pipeline: route, dispatch, time, and fingerprint.
//!
//! The routed command and result record are pure functions of the text.
//! The audit hash also covers `latency_ms`, so it can differ between two
//! otherwise identical requests.

use krantheon_shared::envelope::AuditRecord;
use krantheon_shared::{
    dispatch, fingerprint, route, short_hash, CommandRequest, CommandResponse, Fixture,
    FixtureResponse, Result,
};
use std::time::Instant;
use tracing::info;

/// Run one command request end to end
pub fn execute(request: &CommandRequest) -> Result<CommandResponse> {
    let start = Instant::now();
    let routed = route(&request.command);
    let output = dispatch(&routed)?;
    let latency_ms = start.elapsed().as_millis() as u64;

    let audit = AuditRecord {
        command: routed.kind.as_str(),
        confidence: routed.confidence,
        params: &routed.parameters,
        output: &output,
        session_id: request.session_id.as_deref(),
        latency_ms,
    };
    let audit_hash = fingerprint(&audit)?;

    info!(
        "Command: kind={}, confidence={}, latency_ms={}, audit={}",
        routed.kind,
        routed.confidence,
        latency_ms,
        short_hash(&audit_hash)
    );

    Ok(CommandResponse {
        success: true,
        command: routed.kind.as_str().to_string(),
        confidence: routed.confidence,
        response: output.summary().to_string(),
        params: routed.parameters,
        data: output,
        audit_hash: short_hash(&audit_hash).to_string(),
        latency_ms,
        session_id: request.session_id.clone(),
    })
}

/// Wrap a fixture record with its (fully deterministic) fingerprint
pub fn fixture_response(fixture: Fixture) -> Result<FixtureResponse> {
    let data = fixture.record();
    let audit_hash = fingerprint(&data)?;
    Ok(FixtureResponse {
        success: true,
        data,
        audit_hash: short_hash(&audit_hash).to_string(),
    })
}
