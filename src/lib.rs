#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::unnecessary_literal_bound,
    clippy::module_name_repetitions,
    clippy::struct_field_names,
    clippy::must_use_candidate,
    clippy::new_without_default,
    clippy::return_self_not_must_use
)]

pub mod analysis;
pub mod circuit;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod prompts;
pub mod providers;
pub mod scoring;
pub mod summary;
pub mod voice;

#[cfg(test)]
pub(crate) mod testing;

pub use analysis::{
    AnalysisClient, Category, ReflectionAnalysis, SuggestionClient, SuggestionKind,
    SuggestionResponse,
};
pub use circuit::{CircuitBreaker, FileStore, KeyValueStore, MemoryStore};
pub use config::Config;
pub use error::{AnalysisError, ConfigError};
pub use pipeline::{ReflectionEntries, ReflectionPipeline, ReflectionReport};
pub use prompts::{journal_prompts, reflection_prompt};
pub use scoring::{OverallAnalysis, Stage, aggregate};
pub use summary::{general_wisdom, personalized_feedback, share_summary, voice_quote};
pub use voice::{Intensity, stylize};
