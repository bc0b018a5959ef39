use super::decode::{decode_analysis, recover_analysis};
use super::fallback::fallback_analysis;
use super::instructions::{analysis_prompt, analysis_system_prompt};
use super::{Category, ReflectionAnalysis, is_blank};
use crate::circuit::CircuitBreaker;
use crate::error::AnalysisError;
use crate::providers::{ModelSettings, Provider};
use std::sync::Arc;

/// Log a failed remote attempt and trip the breaker on quota exhaustion.
///
/// Shared by the analysis and suggestion clients so both apply the same
/// policy: only an explicit quota signal opens the circuit.
pub(super) fn handle_remote_failure(
    circuit: &CircuitBreaker,
    provider: &str,
    error: &AnalysisError,
    operation: &str,
) {
    match error {
        AnalysisError::EmptyInput => {}
        AnalysisError::CircuitOpen => {
            tracing::debug!(
                operation,
                provider,
                "using offline voice; remote disabled by earlier quota failure"
            );
        }
        AnalysisError::MissingCredential { .. } => {
            tracing::info!(operation, provider, "no API key configured; using offline voice");
        }
        AnalysisError::Transport { .. } => {
            tracing::warn!(
                operation,
                provider,
                error = %error,
                "remote request failed; using offline voice"
            );
        }
        AnalysisError::RemoteRejection { status, body, .. } => {
            tracing::warn!(
                operation,
                provider,
                status,
                body = %body,
                "remote request rejected; using offline voice"
            );
            if error.is_quota_exhausted() {
                circuit.disable();
            }
        }
        AnalysisError::MalformedResponse(reason) => {
            tracing::warn!(
                operation,
                provider,
                reason = %reason,
                "unusable remote response; using offline voice"
            );
        }
    }
}

/// Scores one reflection per call.
///
/// Single attempt, then fallback: [`analyze`](Self::analyze) never fails and
/// never retries. Identical concurrent calls each make their own attempt.
#[derive(Clone)]
pub struct AnalysisClient {
    provider: Arc<dyn Provider>,
    circuit: CircuitBreaker,
    settings: ModelSettings,
}

impl AnalysisClient {
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

    pub fn circuit(&self) -> &CircuitBreaker {
        &self.circuit
    }

    /// Blank text yields the zero record with no side effects; every other
    /// failure resolves to the offline analysis for `category`.
    pub async fn analyze(&self, text: &str, category: Category) -> ReflectionAnalysis {
        match self.try_analyze(text, category).await {
            Ok(analysis) => analysis,
            Err(AnalysisError::EmptyInput) => ReflectionAnalysis::empty(),
            Err(error) => {
                handle_remote_failure(&self.circuit, self.provider.name(), &error, "analyze");
                fallback_analysis(category)
            }
        }
    }

    async fn try_analyze(
        &self,
        text: &str,
        category: Category,
    ) -> Result<ReflectionAnalysis, AnalysisError> {
        if is_blank(text) {
            return Err(AnalysisError::EmptyInput);
        }
        if self.circuit.is_disabled() {
            return Err(AnalysisError::CircuitOpen);
        }

        let content = self
            .provider
            .chat_with_system(
                Some(&analysis_system_prompt()),
                &analysis_prompt(text, category),
                &self.settings,
            )
            .await?;

        Ok(decode_analysis(&content).unwrap_or_else(|error| {
            tracing::debug!(
                %category,
                error = %error,
                "recovering analysis from free-form text"
            );
            recover_analysis(&content, category)
        }))
    }
}
