use thiserror::Error;

// ─── Analysis errors ─────────────────────────────────────────────────────────

/// Every way a remote analysis or suggestion request can fail to produce a
/// validated record.
///
/// None of these reach callers of `analyze` / `suggest`: each variant maps to
/// either the zero-score record or the deterministic fallback. They exist so
/// the decision is made in one `match` and so logs carry a precise reason.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("reflection text is empty")]
    EmptyInput,

    #[error("remote analysis disabled by circuit breaker")]
    CircuitOpen,

    #[error("{provider} API key not set")]
    MissingCredential { provider: String },

    #[error("{provider} transport failure: {message}")]
    Transport { provider: String, message: String },

    #[error("{provider} API error ({status}): {body}")]
    RemoteRejection {
        provider: String,
        status: u16,
        /// Scrubbed and truncated for logging.
        body: String,
        /// Quota signal found in the full, untruncated body.
        quota_signal: bool,
    },

    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

/// True when a rejection body reports exhausted credits.
pub fn body_signals_quota(body: &str) -> bool {
    body.to_ascii_lowercase().contains("insufficient credits")
}

impl AnalysisError {
    /// Rejection whose quota signal is read from `body` as given.
    pub fn rejection(provider: impl Into<String>, status: u16, body: impl Into<String>) -> Self {
        let body = body.into();
        Self::RemoteRejection {
            provider: provider.into(),
            quota_signal: body_signals_quota(&body),
            status,
            body,
        }
    }

    /// True when the remote side reports exhausted credit or quota.
    ///
    /// Only this signal opens the circuit breaker; every other failure is
    /// treated as transient.
    pub fn is_quota_exhausted(&self) -> bool {
        match self {
            Self::RemoteRejection {
                status,
                quota_signal,
                ..
            } => *status == 402 || *quota_signal,
            _ => false,
        }
    }
}

// ─── Config errors ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load config: {0}")]
    Load(String),

    #[error("validation failed: {0}")]
    Validation(String),
}
