use thiserror::Error;

/// Failures surfaced by the API layer and the client-side checks that guard it
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// 401 on an authenticated call; the session has been torn down
    #[error("Session expired, please log in again")]
    AuthExpired,

    /// Non-2xx status (other than 401), transport, decode or timeout failure
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Client-side precondition failed; no request was sent
    #[error("{0}")]
    ValidationRejected(String),
}

impl ApiError {
    pub fn timeout(timeout_ms: u32) -> Self {
        ApiError::RequestFailed(format!("timed out after {} ms", timeout_ms))
    }

    pub fn is_auth_expired(&self) -> bool {
        matches!(self, ApiError::AuthExpired)
    }
}

/// Classify the status of an authenticated call.
pub fn check_status(status: u16) -> Result<(), ApiError> {
    match status {
        200..=299 => Ok(()),
        401 => Err(ApiError::AuthExpired),
        other => Err(ApiError::RequestFailed(format!("HTTP {}", other))),
    }
}

/// Classify the status of an unauthenticated call (login, register).
///
/// A 401 here means rejected credentials, not an expired session.
pub fn check_public_status(status: u16) -> Result<(), ApiError> {
    match status {
        200..=299 => Ok(()),
        401 => Err(ApiError::RequestFailed("invalid username or password".to_string())),
        other => Err(ApiError::RequestFailed(format!("HTTP {}", other))),
    }
}
