use crate::error::{AnalysisError, body_signals_quota};
use std::borrow::Cow;

const MAX_API_ERROR_CHARS: usize = 200;
const REDACTED: &str = "[REDACTED]";

/// Token prefixes and header/query/json markers whose trailing value is a secret.
const SECRET_MARKERS: [&str; 12] = [
    "sk-or-",
    "sk-",
    "hf_",
    "ghp_",
    "Authorization: Bearer ",
    "authorization: bearer ",
    "Bearer ",
    "api_key=",
    "access_token=",
    "\"api_key\":\"",
    "\"access_token\":\"",
    "\"token\":\"",
];

fn is_secret_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | ':' | '+' | '/' | '=')
}

fn redact_after(text: &mut String, marker: &str) {
    let mut cursor = 0;
    while let Some(rel) = text[cursor..].find(marker) {
        let start = cursor + rel;
        let value_start = start + marker.len();
        let value_len: usize = text[value_start..]
            .chars()
            .take_while(|c| is_secret_char(*c))
            .map(char::len_utf8)
            .sum();

        // Bare marker with nothing after it.
        if value_len == 0 {
            cursor = value_start;
            continue;
        }

        text.replace_range(start..value_start + value_len, REDACTED);
        cursor = start + REDACTED.len();
    }
}

/// Scrub credential-like tokens from remote error text before it is logged.
pub fn scrub_secret_patterns(input: &str) -> Cow<'_, str> {
    if !SECRET_MARKERS.iter().any(|marker| input.contains(marker)) {
        return Cow::Borrowed(input);
    }

    let mut scrubbed = input.to_string();
    for marker in SECRET_MARKERS {
        redact_after(&mut scrubbed, marker);
    }
    Cow::Owned(scrubbed)
}

/// Scrub secrets and truncate to a log-friendly length.
pub fn sanitize_api_error(input: &str) -> String {
    let scrubbed = scrub_secret_patterns(input);
    if scrubbed.chars().count() <= MAX_API_ERROR_CHARS {
        return scrubbed.into_owned();
    }

    let truncated: String = scrubbed.chars().take(MAX_API_ERROR_CHARS).collect();
    format!("{truncated}...")
}

/// Build a [`AnalysisError::RemoteRejection`] from a non-success response.
///
/// The quota signal is read from the full body; only the logged copy is
/// scrubbed and truncated.
pub async fn api_error(provider: &str, response: reqwest::Response) -> AnalysisError {
    let status = response.status().as_u16();
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "<failed to read provider error body>".to_string());

    AnalysisError::RemoteRejection {
        provider: provider.to_string(),
        status,
        quota_signal: body_signals_quota(&body),
        body: sanitize_api_error(&body),
    }
}
