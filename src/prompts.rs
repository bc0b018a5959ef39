//! Fixed reflection and journal prompt tables.

use crate::analysis::Category;

const MISALIGNED_PROMPTS: [&str; 4] = [
    "What patterns keep repeating like stubborn stains you can't wash out?",
    "If your relationship friction had a name, what would it whisper at 3am?",
    "Where do your expectations collide like strangers in a narrow hallway?",
    "What truth sits in your throat, collecting dust because speaking it feels too raw?",
];

const EMERGING_PROMPTS: [&str; 4] = [
    "What fragile growth is happening in shadows you haven't fully named?",
    "Which seeds were planted in your hardest conversations that surprise you now?",
    "What quiet victories deserved champagne but only got quiet nods?",
    "When did you last notice something healing without you forcing it to?",
];

const UNCERTAIN_PROMPTS: [&str; 4] = [
    "What questions keep circling back like birds looking for somewhere to land?",
    "Which doubts wear disguises during the day but reveal themselves at night?",
    "What do you pretend not to know because knowing would require action?",
    "Where are you substituting maybes for the certainty your soul already holds?",
];

/// Journal prompts for one category: `(low, high)`.
fn journal_pair(category: Category) -> (&'static str, &'static str) {
    match category {
        Category::Misaligned => (
            "Write about the conversation you've been avoiding — the one that makes your stomach tighten when you imagine having it.",
            "What patterns in your relationship have you named but not yet addressed? What would addressing them actually look like?",
        ),
        Category::Emerging => (
            "What small positive changes have you overlooked because they don't fix everything at once?",
            "How can you protect and nurture the growth you've recognized, especially when old patterns try to pull you backward?",
        ),
        Category::Uncertain => (
            "What certainties are you dressing up as questions because the answers feel too demanding?",
            "How has sitting with uncertainty changed your relationship? What wisdom lives in the spaces between knowing?",
        ),
    }
}

const GENERAL_JOURNAL_PROMPTS: [&str; 2] = [
    "If your relationship could speak directly to you, what would it ask for right now?",
    "What conversation would change everything if you could have it with complete honesty and zero fear?",
];

const LOW_SCORE_BELOW: u8 = 40;
const HIGH_SCORE_FROM: u8 = 70;

/// Reflection prompt for `area`, selected by `|seed| mod 4`.
pub fn reflection_prompt(area: Category, seed: i64) -> &'static str {
    let table = match area {
        Category::Misaligned => &MISALIGNED_PROMPTS,
        Category::Emerging => &EMERGING_PROMPTS,
        Category::Uncertain => &UNCERTAIN_PROMPTS,
    };
    // The remainder is below the table length, so the cast is lossless.
    #[allow(clippy::cast_possible_truncation)]
    let index = (seed.unsigned_abs() % table.len() as u64) as usize;
    table[index]
}

/// Score-driven journal prompts in category order, then the two general prompts.
///
/// A category contributes its low prompt below 40, its high prompt from 70,
/// and nothing in between.
pub fn journal_prompts(
    misaligned_score: u8,
    emerging_score: u8,
    uncertain_score: u8,
) -> Vec<&'static str> {
    let scores = [misaligned_score, emerging_score, uncertain_score];
    let mut prompts: Vec<&'static str> = Category::ALL
        .into_iter()
        .zip(scores)
        .filter_map(|(category, score)| {
            let (low, high) = journal_pair(category);
            if score < LOW_SCORE_BELOW {
                Some(low)
            } else if score >= HIGH_SCORE_FROM {
                Some(high)
            } else {
                None
            }
        })
        .collect();
    prompts.extend(GENERAL_JOURNAL_PROMPTS);
    prompts
}
