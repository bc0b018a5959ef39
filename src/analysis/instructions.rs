//! Prompt text sent to the remote model.

use super::Category;

/// Characters of each reflection included in the combined suggestion prompt.
pub const EXCERPT_CHARS: usize = 200;

const VOICE: &str = "You write in a raw, reflective voice that flows like a voice note from the heart. \
You use soulful metaphors pulled from everyday life (shopping, healing, searching) and speak with emotional intuition. \
Your tone is unfiltered and poetic, not worried about polish, just what feels true. \
Your reflections touch on love, searching, purpose, disappointment, and spiritual truths with a rhythm like spoken word, but still conversational. \
Never try too hard; write like talking to someone you deeply trust.";

pub fn analysis_system_prompt() -> String {
    format!(
        "{VOICE} Respond only with JSON in the format \
{{\"score\": number, \"insights\": \"string\", \"suggestions\": \"string\"}}."
    )
}

pub fn suggestion_system_prompt() -> String {
    format!("{VOICE} Be direct and honest, but express it in this soulful, poetic style.")
}

/// User prompt for scoring one reflection.
pub fn analysis_prompt(text: &str, category: Category) -> String {
    let (focus, score_on, guidance) = match category {
        Category::Misaligned => (
            "MISALIGNMENTS/GAPS",
            "how specific and insightful this reflection is about relationship gaps or friction",
            "how the user could go deeper",
        ),
        Category::Emerging => (
            "POSITIVE GROWTH/CHANGES",
            "how thoughtful and forward-looking this reflection is about relationship growth",
            "how to nurture this growth",
        ),
        Category::Uncertain => (
            "UNCERTAINTIES/DOUBTS",
            "how well the user is engaging with their relationship uncertainty",
            "how to gain clarity",
        ),
    };

    format!(
        "Analyze this relationship reflection about {focus}:\n\n\"{text}\"\n\n\
1. Score (0-100) {score_on}.\n\
2. Provide direct, honest insights in the reflective voice: raw, using everyday metaphors, with a poetic flow like a voice note or journal entry. Be emotionally intuitive about what the user has shared.\n\
3. Suggest, in the same soulful and unfiltered voice, {guidance}, like you're speaking truth to a close friend.\n\n\
Respond in JSON format."
    )
}

/// First [`EXCERPT_CHARS`] characters of `text`.
pub fn excerpt(text: &str) -> String {
    text.chars().take(EXCERPT_CHARS).collect()
}

/// User prompt for the combined suggestion request.
pub fn suggestion_prompt(
    misaligned_text: &str,
    emerging_text: &str,
    uncertain_text: &str,
    overall_score: u8,
) -> String {
    format!(
        "Based on these relationship reflections, provide 1-2 insights or suggestions in the reflective voice: raw, poetic but real.\n\n\
MISALIGNMENTS: \"{}...\"\n\
GROWTH AREAS: \"{}...\"\n\
UNCERTAINTIES: \"{}...\"\n\
OVERALL SCORE: {overall_score}/100\n\n\
Write like you're sending a voice note from the heart: honest, unfiltered, with soulful metaphors from everyday life (shopping, healing, searching).\n\n\
Respond in JSON format as an array of objects: [{{\"type\": \"string\", \"title\": \"string\", \"message\": \"string\"}}]\n\
Types can be: insight, growth, action, celebrate, or caution.\n\
Keep titles under 5 words and messages under 40 words.",
        excerpt(misaligned_text),
        excerpt(emerging_text),
        excerpt(uncertain_text),
    )
}
