//! Fail-soft result of a remote request.

/// Outcome of one remote call, produced at the single request-sending
/// chokepoint. Transport errors, timeouts, non-2xx statuses, and unparsable
/// bodies all collapse into [`RequestOutcome::Failed`]; callers pattern-match
/// instead of catching transport-specific error types.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestOutcome {
    /// Parsed JSON response body.
    Success(serde_json::Value),
    /// Human-readable description of what went wrong.
    Failed(String),
}

impl RequestOutcome {
    /// The response body, if the call succeeded.
    pub fn success(&self) -> Option<&serde_json::Value> {
        match self {
            Self::Success(body) => Some(body),
            Self::Failed(_) => None,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}
