//! Per-category reflection scoring and the suggestion request that follows it.

pub mod client;
pub mod decode;
pub mod fallback;
pub mod instructions;
pub mod suggestions;

pub use client::AnalysisClient;
pub use suggestions::{SuggestionClient, SuggestionKind, SuggestionResponse};

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// The three reflection dimensions. Closed set.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display,
    EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Category {
    Misaligned,
    Emerging,
    Uncertain,
}

impl Category {
    /// Fixed evaluation order; also the tie-break order wherever categories compete.
    pub const ALL: [Self; 3] = [Self::Misaligned, Self::Emerging, Self::Uncertain];
}

/// Score and narrative for one (text, category) request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReflectionAnalysis {
    pub score: u8,
    pub insights: String,
    pub suggestions: String,
}

impl ReflectionAnalysis {
    /// Record returned for blank input.
    pub fn empty() -> Self {
        Self::default()
    }
}

/// Clamp any raw score into `0..=100`.
pub fn clamp_score(raw: i64) -> u8 {
    // Lossless: the value is already within 0..=100.
    u8::try_from(raw.clamp(0, 100)).unwrap_or(0)
}

pub(crate) fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}
