use crate::error::ConfigError;
use crate::providers::ModelSettings;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

mod env_overrides;
mod loader;
#[cfg(test)]
mod test_env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to config.toml - computed from home, not serialized
    #[serde(skip)]
    pub config_path: PathBuf,
    /// Durable key/value file holding the circuit flag - computed, not serialized
    #[serde(skip)]
    pub state_path: PathBuf,
    /// Remote credential. Never defaulted; without it every request
    /// resolves to the offline voice.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    #[serde(default)]
    pub remote: RemoteConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_temperature")]
    pub temperature: f64,
    #[serde(default = "default_analysis_max_tokens")]
    pub analysis_max_tokens: u32,
    #[serde(default = "default_suggestion_max_tokens")]
    pub suggestion_max_tokens: u32,
    /// Sent as `HTTP-Referer` for OpenRouter app attribution.
    #[serde(default = "default_referer")]
    pub referer: String,
    /// Sent as `X-Title`.
    #[serde(default = "default_title")]
    pub title: String,
}

fn default_base_url() -> String {
    "https://openrouter.ai/api/v1".into()
}

fn default_model() -> String {
    "anthropic/claude-3-opus-20240229".into()
}

fn default_temperature() -> f64 {
    0.7
}

fn default_analysis_max_tokens() -> u32 {
    500
}

fn default_suggestion_max_tokens() -> u32 {
    300
}

fn default_referer() -> String {
    "https://relationship-reflection-tool.vercel.app".into()
}

fn default_title() -> String {
    "Relationship Reflection Tool".into()
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            model: default_model(),
            temperature: default_temperature(),
            analysis_max_tokens: default_analysis_max_tokens(),
            suggestion_max_tokens: default_suggestion_max_tokens(),
            referer: default_referer(),
            title: default_title(),
        }
    }
}

impl RemoteConfig {
    pub fn analysis_settings(&self) -> ModelSettings {
        ModelSettings::new(&self.model, self.temperature, self.analysis_max_tokens)
    }

    pub fn suggestion_settings(&self) -> ModelSettings {
        ModelSettings::new(&self.model, self.temperature, self.suggestion_max_tokens)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            config_path: PathBuf::from("config.toml"),
            state_path: PathBuf::from("state.json"),
            api_key: None,
            remote: RemoteConfig::default(),
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let remote = &self.remote;

        if !(0.0..=2.0).contains(&remote.temperature) {
            return Err(ConfigError::Validation(format!(
                "remote.temperature must be within 0.0..=2.0, got {}",
                remote.temperature
            )));
        }

        if remote.analysis_max_tokens == 0 || remote.suggestion_max_tokens == 0 {
            return Err(ConfigError::Validation(
                "remote token limits must be greater than zero".into(),
            ));
        }

        if remote.model.trim().is_empty() {
            return Err(ConfigError::Validation("remote.model must not be empty".into()));
        }

        url::Url::parse(&remote.base_url).map_err(|e| {
            ConfigError::Validation(format!("remote.base_url is not a valid URL: {e}"))
        })?;

        Ok(())
    }

    /// The credential, with blank values treated as absent.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref().filter(|key| !key.trim().is_empty())
    }
}
