//! Validation of remote completion text.
//!
//! The model is asked for JSON but nothing guarantees it. Each decoder either
//! yields a validated typed record or a [`AnalysisError::MalformedResponse`];
//! the shape of the payload is never trusted implicitly.

use super::fallback::{fallback_insight, fallback_suggestion};
use super::{Category, ReflectionAnalysis, SuggestionResponse, clamp_score};
use crate::error::AnalysisError;
use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

/// Upper bound on suggestions accepted from a single response.
pub const MAX_SUGGESTIONS: usize = 2;

/// Score used by heuristic recovery when the text carries no recognizable score.
const RECOVERED_DEFAULT_SCORE: u8 = 50;

static SCORE_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\d{1,3})(?:\s*/\s*100|\s*percent|%)").expect("static regex")
});

static INSIGHT_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)insight|analysis|observation|reflection|you.*identif").expect("static regex")
});

static SUGGESTION_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)suggestion|recommend|consider|try|could|might|should").expect("static regex")
});

static LABEL_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^:]*:\s*").expect("static regex"));

/// Strip a Markdown code fence (```` ```json ```` or bare ```` ``` ````) if present.
fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };

    // Skip the info string (e.g. "json") on the opening fence line.
    let body = rest.find('\n').map_or("", |newline| &rest[newline + 1..]);
    body.rfind("```").map_or(body, |end| &body[..end]).trim()
}

/// Parse `text` as JSON, falling back to the outermost `open..=close` slice
/// when the model wrapped the payload in prose.
fn parse_json_payload(text: &str, open: char, close: char) -> Option<Value> {
    let candidate = strip_code_fence(text);
    if let Ok(value) = serde_json::from_str(candidate) {
        return Some(value);
    }

    let start = candidate.find(open)?;
    let end = candidate.rfind(close)?;
    if end <= start {
        return None;
    }
    serde_json::from_str(&candidate[start..=end]).ok()
}

/// Leading integer of a string, `parseInt`-style: `"85 out of 100"` is 85.
fn leading_integer(text: &str) -> Option<i64> {
    let text = text.trim_start();
    let (sign, digits) = match text.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, text.strip_prefix('+').unwrap_or(text)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    // Absurdly long digit runs saturate; the result is clamped anyway.
    Some(digits[..end].parse::<i64>().unwrap_or(i64::MAX) * sign)
}

#[allow(clippy::cast_possible_truncation)]
fn score_from_value(value: &Value) -> u8 {
    let raw = match value {
        // `as` saturates, so huge floats clamp cleanly.
        Value::Number(number) => number
            .as_i64()
            .or_else(|| number.as_f64().map(|f| f.trunc() as i64)),
        Value::String(text) => leading_integer(text),
        _ => None,
    };
    raw.map_or(0, clamp_score)
}

fn string_field(object: &serde_json::Map<String, Value>, key: &str) -> String {
    object
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

/// Validate an analysis completion: a JSON object carrying a `score` key.
///
/// A non-numeric score becomes 0; missing or non-string `insights` /
/// `suggestions` become empty.
pub fn decode_analysis(content: &str) -> Result<ReflectionAnalysis, AnalysisError> {
    let value = parse_json_payload(content, '{', '}')
        .ok_or_else(|| AnalysisError::MalformedResponse("analysis is not JSON".into()))?;
    let object = value
        .as_object()
        .ok_or_else(|| AnalysisError::MalformedResponse("analysis is not a JSON object".into()))?;
    let score = object
        .get("score")
        .ok_or_else(|| AnalysisError::MalformedResponse("analysis has no score".into()))?;

    Ok(ReflectionAnalysis {
        score: score_from_value(score),
        insights: string_field(object, "insights"),
        suggestions: string_field(object, "suggestions"),
    })
}

fn first_matching_line(content: &str, pattern: &Regex) -> Option<String> {
    content
        .lines()
        .find(|line| pattern.is_match(line))
        .map(|line| LABEL_PREFIX.replace(line, "").trim().to_string())
        .filter(|line| !line.is_empty())
}

/// Best-effort extraction from free-form completion text.
///
/// Score comes from the first `N/100`, `N percent` or `N%` token (default 50).
/// Insight and suggestion come from the first line mentioning the matching
/// keywords, with any `Label:` prefix removed; a miss falls back to the
/// offline text for `category`.
pub fn recover_analysis(content: &str, category: Category) -> ReflectionAnalysis {
    let score = SCORE_TOKEN
        .captures(content)
        .and_then(|captures| captures.get(1))
        .and_then(|digits| digits.as_str().parse::<i64>().ok())
        .map_or(RECOVERED_DEFAULT_SCORE, clamp_score);

    let insights = first_matching_line(content, &INSIGHT_LINE)
        .unwrap_or_else(|| fallback_insight(category).to_string());
    let suggestions = first_matching_line(content, &SUGGESTION_LINE)
        .unwrap_or_else(|| fallback_suggestion(category).to_string());

    ReflectionAnalysis {
        score,
        insights,
        suggestions,
    }
}

/// Validate a suggestion completion: a JSON array of well-formed suggestion
/// objects. One invalid element rejects the whole array. At most
/// [`MAX_SUGGESTIONS`] are kept.
pub fn decode_suggestions(content: &str) -> Result<Vec<SuggestionResponse>, AnalysisError> {
    let value = parse_json_payload(content, '[', ']')
        .ok_or_else(|| AnalysisError::MalformedResponse("suggestions are not JSON".into()))?;
    if !value.is_array() {
        return Err(AnalysisError::MalformedResponse(
            "suggestions are not a JSON array".into(),
        ));
    }

    let mut suggestions: Vec<SuggestionResponse> = serde_json::from_value(value)
        .map_err(|e| AnalysisError::MalformedResponse(format!("invalid suggestion: {e}")))?;
    suggestions.truncate(MAX_SUGGESTIONS);
    Ok(suggestions)
}
