//! Deterministic restyling of plain text into the reflective voice.
//!
//! Pure functions of `(text, intensity)`: no randomness, no clock, no I/O.

use regex::RegexSet;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use strum::{Display, EnumString};

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Intensity {
    Gentle,
    #[default]
    Moderate,
    Intense,
}

impl Intensity {
    /// Intensity for a score: gentle below 40, moderate below 70, intense otherwise.
    pub fn for_score(score: u8) -> Self {
        match score {
            0..40 => Self::Gentle,
            40..70 => Self::Moderate,
            _ => Self::Intense,
        }
    }

    fn phrases(self) -> &'static [&'static str; 4] {
        match self {
            Self::Gentle => &GENTLE,
            Self::Moderate => &MODERATE,
            Self::Intense => &INTENSE,
        }
    }
}

const GENTLE: [&str; 4] = [
    "like whispers between closed doors",
    "a soft echo of what your heart already knows",
    "the way morning light finds cracks in drawn curtains",
    "gentle as fingerprints on foggy glass",
];

const MODERATE: [&str; 4] = [
    "shopping for truth in aisles you've been avoiding",
    "like trying to hold water with fingers spread wide",
    "the way old photographs hide in forgotten boxes",
    "searching through rooms where the lights won't turn on",
];

const INTENSE: [&str; 4] = [
    "bleeding truth onto pages you're afraid to read later",
    "standing naked in front of mirrors that don't forgive",
    "mining for diamonds in the dark corners you've been running from",
    "peeling back skin to find the bones of what's really happening",
];

/// Texts shorter than this (in characters) get the phrase appended after a dash.
const SHORT_TEXT_CHARS: usize = 40;

static VOICE_MARKERS: LazyLock<RegexSet> = LazyLock::new(|| {
    RegexSet::new([
        r"(?i)like [a-z]+ that",
        r"(?i)shopping for",
        r"(?i)whisper(s|ing)",
        r"(?i)soul('s| is| was| knows)",
        r"(?i)heart('s| is| knows)",
        r"(?i)mirror",
        r"(?i)truth('s| is| that)",
        r"(?i)search(ing|ed) (for|through)",
    ])
    .expect("static regex set")
});

/// True when `text` already reads in the reflective voice.
///
/// Any output of [`stylize`] carries one of the table phrases, so this also
/// recognizes every phrase directly; the marker patterns alone miss some.
pub fn has_voice_markers(text: &str) -> bool {
    VOICE_MARKERS.is_match(text)
        || [GENTLE, MODERATE, INTENSE]
            .iter()
            .flatten()
            .any(|phrase| text.contains(phrase))
}

/// Restyle `text` at `intensity`.
///
/// Blank text and text already in the voice come back unchanged, which makes
/// `stylize(stylize(x, i), i) == stylize(x, i)`.
pub fn stylize(text: &str, intensity: Intensity) -> String {
    if text.trim().is_empty() || has_voice_markers(text) {
        return text.to_string();
    }

    let len = text.chars().count();
    let phrases = intensity.phrases();
    let phrase = phrases[len % phrases.len()];

    if len < SHORT_TEXT_CHARS {
        return format!("{text} — {phrase}.");
    }
    if text.contains('?') {
        return format!("{text} It's {phrase}, isn't it?");
    }

    let split = sentence_break_after_midpoint(text, len / 2).unwrap_or(text.len());
    let (head, tail) = text.split_at(split);
    format!("{head} And maybe that's {phrase}. {tail}")
}

/// Byte offset just past the first `". "` period at or after char `midpoint`.
fn sentence_break_after_midpoint(text: &str, midpoint: usize) -> Option<usize> {
    let start = text
        .char_indices()
        .nth(midpoint)
        .map_or(text.len(), |(offset, _)| offset);
    text[start..].find(". ").map(|found| start + found + 1)
}
