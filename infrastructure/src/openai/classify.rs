//! Post-hoc failure classification.
//!
//! The provider does not expose structured error codes at this boundary, so
//! failures are classified by keyword substrings in the failure text.
//! Best-effort: anything unrecognized is [`GatewayError::Unknown`].

use boardroom_application::GatewayError;

/// Classify a failure description into a [`GatewayError`].
pub fn classify_failure(detail: &str) -> GatewayError {
    let lower = detail.to_lowercase();

    if lower.contains("timeout") || lower.contains("timed out") {
        return GatewayError::Timeout;
    }
    if lower.contains("429") || lower.contains("rate limit") {
        return GatewayError::RateLimit(detail.to_string());
    }
    if lower.contains("401")
        || lower.contains("403")
        || lower.contains("api key")
        || lower.contains("unauthorized")
    {
        return GatewayError::InvalidCredential(detail.to_string());
    }
    if lower.contains("connect")
        || lower.contains("network")
        || lower.contains("dns")
        || lower.contains("fetch")
    {
        return GatewayError::Network(detail.to_string());
    }
    if lower.contains("parse") || lower.contains("json") {
        return GatewayError::Parsing(detail.to_string());
    }

    GatewayError::Unknown(detail.to_string())
}

/// Classify a transport-level reqwest error.
pub fn classify_transport(error: reqwest::Error) -> GatewayError {
    if error.is_timeout() {
        return GatewayError::Timeout;
    }
    if error.is_connect() {
        return GatewayError::Network(error.to_string());
    }
    classify_failure(&error.to_string())
}

/// Classify a non-success HTTP status plus its response body.
pub fn classify_status(status: reqwest::StatusCode, body: &str) -> GatewayError {
    match status.as_u16() {
        429 => GatewayError::RateLimit(format!("{status}: {body}")),
        401 | 403 => GatewayError::InvalidCredential(format!("{status}: {body}")),
        _ => classify_failure(&format!("{status}: {body}")),
    }
}
