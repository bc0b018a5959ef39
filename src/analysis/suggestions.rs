use super::client::handle_remote_failure;
use super::decode::decode_suggestions;
use super::fallback::{beginning_suggestion, fallback_suggestions};
use super::instructions::{suggestion_prompt, suggestion_system_prompt};
use super::is_blank;
use crate::circuit::CircuitBreaker;
use crate::error::AnalysisError;
use crate::providers::{ModelSettings, Provider};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use strum::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SuggestionKind {
    Insight,
    Growth,
    Action,
    Celebrate,
    Caution,
    Beginning,
}

/// One short piece of guidance: a title of a few words and a message of
/// roughly forty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionResponse {
    #[serde(rename = "type")]
    pub kind: SuggestionKind,
    pub title: String,
    pub message: String,
}

impl SuggestionResponse {
    pub fn new(kind: SuggestionKind, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            message: message.into(),
        }
    }
}

/// Produces up to two suggestions from all three reflections combined.
#[derive(Clone)]
pub struct SuggestionClient {
    provider: Arc<dyn Provider>,
    circuit: CircuitBreaker,
    settings: ModelSettings,
}

impl SuggestionClient {
    pub fn new(
        provider: Arc<dyn Provider>,
        circuit: CircuitBreaker,
        settings: ModelSettings,
    ) -> Self {
        Self {
            provider,
            circuit,
            settings,
        }
    }

    /// Never fails: blank input yields the single "beginning" suggestion and
    /// any remote failure yields the offline set for `overall_score`.
    pub async fn suggest(
        &self,
        misaligned_text: &str,
        emerging_text: &str,
        uncertain_text: &str,
        overall_score: u8,
    ) -> Vec<SuggestionResponse> {
        match self
            .try_suggest(misaligned_text, emerging_text, uncertain_text, overall_score)
            .await
        {
            Ok(suggestions) => suggestions,
            Err(AnalysisError::EmptyInput) => vec![beginning_suggestion()],
            Err(error) => {
                handle_remote_failure(&self.circuit, self.provider.name(), &error, "suggest");
                fallback_suggestions(overall_score)
            }
        }
    }

    async fn try_suggest(
        &self,
        misaligned_text: &str,
        emerging_text: &str,
        uncertain_text: &str,
        overall_score: u8,
    ) -> Result<Vec<SuggestionResponse>, AnalysisError> {
        if [misaligned_text, emerging_text, uncertain_text]
            .iter()
            .all(|text| is_blank(text))
        {
            return Err(AnalysisError::EmptyInput);
        }
        if self.circuit.is_disabled() {
            return Err(AnalysisError::CircuitOpen);
        }

        let content = self
            .provider
            .chat_with_system(
                Some(&suggestion_system_prompt()),
                &suggestion_prompt(misaligned_text, emerging_text, uncertain_text, overall_score),
                &self.settings,
            )
            .await?;

        decode_suggestions(&content)
    }
}
