//! End-to-end reflection: three analyses, aggregation, suggestions, narrative.

use crate::analysis::{
    AnalysisClient, Category, ReflectionAnalysis, SuggestionClient, SuggestionResponse,
};
use crate::circuit::{CircuitBreaker, FileStore};
use crate::config::Config;
use crate::prompts::journal_prompts;
use crate::providers::{OpenRouterProvider, Provider};
use crate::scoring::{OverallAnalysis, aggregate};
use crate::summary::{personalized_feedback, share_summary};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// The user's three free-text reflections.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReflectionEntries {
    pub misaligned: String,
    pub emerging: String,
    pub uncertain: String,
}

impl ReflectionEntries {
    pub fn new(
        misaligned: impl Into<String>,
        emerging: impl Into<String>,
        uncertain: impl Into<String>,
    ) -> Self {
        Self {
            misaligned: misaligned.into(),
            emerging: emerging.into(),
            uncertain: uncertain.into(),
        }
    }

    pub fn text(&self, category: Category) -> &str {
        match category {
            Category::Misaligned => &self.misaligned,
            Category::Emerging => &self.emerging,
            Category::Uncertain => &self.uncertain,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReflectionReport {
    pub misaligned: ReflectionAnalysis,
    pub emerging: ReflectionAnalysis,
    pub uncertain: ReflectionAnalysis,
    pub overall: OverallAnalysis,
    pub suggestions: Vec<SuggestionResponse>,
    pub share_summary: String,
    pub journal_prompts: Vec<String>,
    pub personalized_feedback: String,
    /// Remote calls were disabled by the breaker when the run finished.
    pub offline: bool,
}

impl ReflectionReport {
    pub fn analysis(&self, category: Category) -> &ReflectionAnalysis {
        match category {
            Category::Misaligned => &self.misaligned,
            Category::Emerging => &self.emerging,
            Category::Uncertain => &self.uncertain,
        }
    }
}

#[derive(Clone)]
pub struct ReflectionPipeline {
    analysis: AnalysisClient,
    suggestions: SuggestionClient,
}

impl ReflectionPipeline {
    pub fn new(analysis: AnalysisClient, suggestions: SuggestionClient) -> Self {
        Self {
            analysis,
            suggestions,
        }
    }

    /// OpenRouter-backed pipeline whose breaker persists at `config.state_path`.
    pub fn from_config(config: &Config) -> Self {
        let provider: Arc<dyn Provider> = Arc::new(OpenRouterProvider::from_config(config));
        let circuit = CircuitBreaker::new(Arc::new(FileStore::new(config.state_path.clone())));
        Self::with_provider(provider, circuit, config)
    }

    pub fn with_provider(
        provider: Arc<dyn Provider>,
        circuit: CircuitBreaker,
        config: &Config,
    ) -> Self {
        Self::new(
            AnalysisClient::new(
                Arc::clone(&provider),
                circuit.clone(),
                config.remote.analysis_settings(),
            ),
            SuggestionClient::new(provider, circuit, config.remote.suggestion_settings()),
        )
    }

    pub fn analysis(&self) -> &AnalysisClient {
        &self.analysis
    }

    pub fn circuit(&self) -> &CircuitBreaker {
        self.analysis.circuit()
    }

    /// Never fails. The three analyses run concurrently; suggestions wait on
    /// their aggregate.
    pub async fn run(&self, entries: &ReflectionEntries) -> ReflectionReport {
        let (misaligned, emerging, uncertain) = tokio::join!(
            self.analysis.analyze(&entries.misaligned, Category::Misaligned),
            self.analysis.analyze(&entries.emerging, Category::Emerging),
            self.analysis.analyze(&entries.uncertain, Category::Uncertain),
        );

        let overall = aggregate(misaligned.score, emerging.score, uncertain.score);
        tracing::debug!(
            average = overall.average_score,
            stage = %overall.stage,
            "aggregated reflection scores"
        );

        let suggestions = self
            .suggestions
            .suggest(
                &entries.misaligned,
                &entries.emerging,
                &entries.uncertain,
                overall.average_score,
            )
            .await;

        let share_summary = share_summary(
            misaligned.score,
            emerging.score,
            uncertain.score,
            overall.average_score,
        );
        let journal_prompts = journal_prompts(misaligned.score, emerging.score, uncertain.score)
            .into_iter()
            .map(str::to_string)
            .collect();
        let personalized_feedback =
            personalized_feedback(overall.average_score, entries, &suggestions);

        ReflectionReport {
            misaligned,
            emerging,
            uncertain,
            overall,
            suggestions,
            share_summary,
            journal_prompts,
            personalized_feedback,
            offline: self.circuit().is_disabled(),
        }
    }
}
