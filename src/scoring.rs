//! Aggregation of the three category scores into one overall reading.

use serde::{Deserialize, Serialize};
use strum::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
pub enum Stage {
    #[strum(serialize = "Beginning")]
    #[serde(rename = "Beginning")]
    Beginning,
    #[strum(serialize = "Developing Awareness")]
    #[serde(rename = "Developing Awareness")]
    DevelopingAwareness,
    #[strum(serialize = "Advanced Understanding")]
    #[serde(rename = "Advanced Understanding")]
    AdvancedUnderstanding,
    #[strum(serialize = "Deep Insight")]
    #[serde(rename = "Deep Insight")]
    DeepInsight,
}

impl Stage {
    /// Stage for an average score: 80+, 60+, 30+, else beginning.
    pub fn for_average(average_score: u8) -> Self {
        match average_score {
            80.. => Self::DeepInsight,
            60.. => Self::AdvancedUnderstanding,
            30.. => Self::DevelopingAwareness,
            _ => Self::Beginning,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Self::Beginning => "Just getting started! Continue reflecting to deepen your insights.",
            Self::DevelopingAwareness => "Your reflections are growing in depth and clarity.",
            Self::AdvancedUnderstanding => {
                "You're developing valuable insights about your relationship dynamics."
            }
            Self::DeepInsight => "Your reflection shows remarkable depth and self-awareness.",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverallAnalysis {
    pub average_score: u8,
    pub stage: Stage,
    pub message: String,
}

/// Floor of the mean of three scores, with the matching stage and message.
pub fn aggregate(misaligned_score: u8, emerging_score: u8, uncertain_score: u8) -> OverallAnalysis {
    let sum = u16::from(misaligned_score) + u16::from(emerging_score) + u16::from(uncertain_score);
    // Mean of three u8 values always fits in u8.
    let average_score = u8::try_from(sum / 3).unwrap_or(u8::MAX);
    let stage = Stage::for_average(average_score);

    OverallAnalysis {
        average_score,
        stage,
        message: stage.message().to_string(),
    }
}
