#![allow(dead_code)]

use serde_json::{Value, json};
use soulmirror::Config;
use soulmirror::config::RemoteConfig;
use tempfile::TempDir;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const ANALYSIS_MAX_TOKENS: u32 = 500;
pub const SUGGESTION_MAX_TOKENS: u32 = 300;

/// Config pointing at `server`, with its state file inside `dir`.
pub fn config_for(server: &MockServer, dir: &TempDir, api_key: Option<&str>) -> Config {
    Config {
        config_path: dir.path().join("config.toml"),
        state_path: dir.path().join("state.json"),
        api_key: api_key.map(str::to_string),
        remote: RemoteConfig {
            base_url: server.uri(),
            model: "test/model".into(),
            analysis_max_tokens: ANALYSIS_MAX_TOKENS,
            suggestion_max_tokens: SUGGESTION_MAX_TOKENS,
            ..RemoteConfig::default()
        },
    }
}

pub fn completion(content: &str) -> Value {
    json!({
        "choices": [{ "message": { "role": "assistant", "content": content } }]
    })
}

/// Mock for analysis requests, told apart by their token limit.
pub fn analysis_mock(response: ResponseTemplate) -> Mock {
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(body_partial_json(json!({ "max_tokens": ANALYSIS_MAX_TOKENS })))
        .respond_with(response)
}

pub fn suggestion_mock(response: ResponseTemplate) -> Mock {
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(body_partial_json(json!({ "max_tokens": SUGGESTION_MAX_TOKENS })))
        .respond_with(response)
}

pub fn any_request(response: ResponseTemplate) -> Mock {
    Mock::given(method("POST")).respond_with(response)
}

pub fn quota_exhausted() -> ResponseTemplate {
    ResponseTemplate::new(402).set_body_json(json!({
        "error": { "code": 402, "message": "Insufficient credits" }
    }))
}
