//! Shareable summary paragraph and offline narrative feedback.

use crate::analysis::{Category, SuggestionResponse};
use crate::pipeline::ReflectionEntries;
use crate::voice::{Intensity, stylize};

/// A category's score must exceed this to be named as the strongest area.
const STRONGEST_AREA_ABOVE: u8 = 50;

/// Trimmed reflections must be longer than this to earn a personalized insight.
const MIN_INSIGHT_CHARS: usize = 10;

/// Reflections shorter than this get the brief insight variant.
const BRIEF_REFLECTION_CHARS: usize = 50;

const FEEDBACK_SEPARATOR: &str = "\n\n---\n\n";

const INVITATION: &str = "Share your reflections in the boxes above to receive personalized therapeutic insights.\n\n\
As you write about what feels misaligned, what's emerging, or what uncertainties you're carrying, this space will transform into a mirror of wisdom - offering you the raw, poetic truths your relationship is asking you to see.";

fn opening_clause(overall_score: u8) -> &'static str {
    match overall_score {
        80.. => "raw truth telling with depth & clarity. ",
        60.. => "honest wandering through what matters. ",
        30.. => "beginning to peel back comfortable masks. ",
        _ => "first steps on a path of braver truth. ",
    }
}

fn strongest_area_clause(category: Category) -> &'static str {
    match category {
        Category::Misaligned => {
            "I see our gaps most clearly — where we've been speaking different languages without translators."
        }
        Category::Emerging => {
            "I feel our growth the strongest — tiny seeds pushing through concrete when no one's watching."
        }
        Category::Uncertain => {
            "I'm facing our question marks — those uncertainties that dress themselves as 'maybe' when they're really truths in waiting."
        }
    }
}

const STILL_SEARCHING: &str =
    "Still searching for the words that feel true enough to build a future on.";

/// Category with the highest score, if that score exceeds 50. Ties go to the
/// earliest category in [`Category::ALL`] order.
fn strongest_area(scores: [u8; 3]) -> Option<Category> {
    let highest = scores.into_iter().max()?;
    if highest <= STRONGEST_AREA_ABOVE {
        return None;
    }
    Category::ALL
        .into_iter()
        .zip(scores)
        .find_map(|(category, score)| (score == highest).then_some(category))
}

/// One-paragraph summary for sharing.
pub fn share_summary(
    misaligned_score: u8,
    emerging_score: u8,
    uncertain_score: u8,
    overall_score: u8,
) -> String {
    let closing = strongest_area([misaligned_score, emerging_score, uncertain_score])
        .map_or(STILL_SEARCHING, strongest_area_clause);
    format!(
        "A soul-mirror reflection on us — {}{closing}",
        opening_clause(overall_score)
    )
}

const BEGINNER_QUOTES: [&str; 4] = [
    "Your relationship is like a garden where you've just turned the soil — full of potential, but requiring patience and daily tending to see what might grow.",
    "Sometimes the bravest thing is just showing up with a pen, staring at blank pages that don't judge how slowly you fill them.",
    "The first step in mapping any journey is admitting you're not sure where you stand. That honesty alone is worth honoring.",
    "Truth doesn't demand perfection, just willingness to stand in rooms where lights aren't fully on yet.",
];

const DEVELOPING_QUOTES: [&str; 4] = [
    "You're learning to speak a language that has no dictionary — where the grammar is written in gestures, in silences, in the spaces between what's said and what's felt.",
    "The middle of anything is messy. But it's where the magic happens, where you stop performing and start unwrapping what's real.",
    "There's courage in naming what hurts without knowing how to fix it. Sometimes naming is the medicine itself.",
    "You're peeling layers from an onion that makes everyone cry. But beneath the tears is flavor that makes everything worth tasting.",
];

const ADVANCED_QUOTES: [&str; 4] = [
    "The maps you're drawing have fewer blank spaces now. You're learning to mark both the dangerous waters and the hidden treasures with equal precision.",
    "Your truths are no longer hiding behind politeness. They're standing in the room with you, wearing your clothes, speaking in your voice.",
    "Growth means holding contradictions — seeing both the beauty and the breaking, the victory and the grief, and making room for all of it.",
    "There's a rhythm to how you dance with darkness now — not with fear, but with familiarity, like greeting an old friend who always has something important to say.",
];

const INSIGHTFUL_QUOTES: [&str; 4] = [
    "Some relationships become masterpieces when we learn to paint with all the colors — not just the bright ones, but the deep blues of sorrow and rich browns of hard-earned wisdom.",
    "You've learned to carry truth like water in cupped hands — carefully, reverently, knowing both its power to sustain and its tendency to slip through cracks.",
    "The softest revolution happens when two people stop performing and start witnessing each other's unfiltered humanity. You're living in that quiet revolution.",
    "True intimacy isn't about perfect understanding, but perfect witnessing — standing beside each other as you both become more fully yourselves.",
];

/// Quote for the overall score band (`<30`, `<60`, `<80`, else), indexed by `score mod 4`.
pub fn voice_quote(overall_score: u8) -> &'static str {
    let quotes = match overall_score {
        0..30 => &BEGINNER_QUOTES,
        30..60 => &DEVELOPING_QUOTES,
        60..80 => &ADVANCED_QUOTES,
        _ => &INSIGHTFUL_QUOTES,
    };
    quotes[usize::from(overall_score) % quotes.len()]
}

pub fn general_wisdom(overall_score: u8) -> &'static str {
    match overall_score {
        0..30 => {
            "Remember: every relationship expert was once a beginner. What matters isn't having all the answers, but staying curious about the questions that matter most."
        }
        30..60 => {
            "You're building emotional muscles you didn't know you had. The work you're doing now—this honest looking—it's creating space for deeper intimacy than you've known before."
        }
        60..80 => {
            "There's a difference between knowing about relationships and knowing your relationship. You're crossing that bridge, moving from theory into the messy, beautiful reality of two people learning to love better."
        }
        _ => {
            "The depth you've reached isn't about perfection—it's about presence. You're learning to hold space for both the light and shadow in your connection, and that's where real love lives."
        }
    }
}

/// `(brief, full)` insight seeds per category.
fn insight_seeds(category: Category) -> (&'static str, &'static str) {
    match category {
        Category::Misaligned => (
            "The disconnection you're feeling is real, and naming it is the first step toward bridging the gap",
            "The patterns you're noticing in your misalignment deserve attention. They're trying to teach you something about what you both need to feel truly connected",
        ),
        Category::Emerging => (
            "Even small growth deserves celebration. You're noticing changes that others might miss",
            "The growth you're witnessing is fragile and precious. Protect it by continuing to name it, to honor it, to give it space to unfold naturally",
        ),
        Category::Uncertain => (
            "Uncertainty isn't the enemy of love—it's often love asking for deeper truth",
            "The questions you're sitting with are important. They're not obstacles to clarity—they're doorways to deeper understanding",
        ),
    }
}

fn category_insight(category: Category, text: &str, overall_score: u8) -> String {
    let (brief, full) = insight_seeds(category);
    let seed = if text.chars().count() < BRIEF_REFLECTION_CHARS {
        brief
    } else {
        full
    };
    stylize(seed, Intensity::for_score(overall_score))
}

fn is_substantial(text: &str) -> bool {
    text.trim().chars().count() > MIN_INSIGHT_CHARS
}

/// Long-form feedback in the reflective voice, built entirely offline.
///
/// Opens with [`voice_quote`], then one stylized insight per substantial
/// reflection, each suggestion restyled, and [`general_wisdom`]. Without any
/// substantial reflection it returns a fixed invitation instead.
pub fn personalized_feedback(
    overall_score: u8,
    entries: &ReflectionEntries,
    suggestions: &[SuggestionResponse],
) -> String {
    let insights: Vec<String> = Category::ALL
        .into_iter()
        .map(|category| (category, entries.text(category)))
        .filter(|(_, text)| is_substantial(text))
        .map(|(category, text)| category_insight(category, text, overall_score))
        .collect();

    if insights.is_empty() {
        return INVITATION.to_string();
    }

    let suggestion_intensity = if overall_score > 60 {
        Intensity::Intense
    } else {
        Intensity::Moderate
    };
    let paragraphs: Vec<String> = insights
        .into_iter()
        .chain(
            suggestions
                .iter()
                .map(|suggestion| stylize(&suggestion.message, suggestion_intensity)),
        )
        .chain(std::iter::once(general_wisdom(overall_score).to_string()))
        .collect();

    format!(
        "{}{FEEDBACK_SEPARATOR}{}",
        voice_quote(overall_score),
        paragraphs.join("\n\n")
    )
}
