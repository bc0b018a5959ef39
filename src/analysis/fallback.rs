//! Offline feedback tables.
//!
//! The only source of narrative when the circuit is open or a remote call
//! fails, so each entry has to stand on its own as complete guidance in the
//! same voice the remote model is asked to write in.

use super::{Category, ReflectionAnalysis, SuggestionKind, SuggestionResponse};

/// Score assigned whenever the offline voice stands in for the remote model.
pub const FALLBACK_SCORE: u8 = 50;

pub fn fallback_insight(category: Category) -> &'static str {
    match category {
        Category::Misaligned => {
            "You're circling the edges of what hurts, like window shopping for truth but never walking through the door. The real patterns are hiding in plain sight."
        }
        Category::Emerging => {
            "These fragile blooms of change—are you watering them daily or just admiring them until they wither? Growth needs more than occasional sunshine."
        }
        Category::Uncertain => {
            "Your uncertainty feels like a familiar coat you wear to keep yourself warm—comfortable, safe, but maybe hiding the skin that needs to breathe truth."
        }
    }
}

pub fn fallback_suggestion(category: Category) -> &'static str {
    match category {
        Category::Misaligned => {
            "When you finally name a storm, it loses some of its power. Touch the specific moments that hurt—they're waiting for you to witness them fully."
        }
        Category::Emerging => {
            "Tend to these seedlings of change like they're the last garden on earth. What happens if you water them with your full attention, not just leftover care?"
        }
        Category::Uncertain => {
            "Uncertainty is sometimes just truth wearing a disguise. What if you sat with it like a friend who hasn't yet shared their secret—patient, present, listening?"
        }
    }
}

pub fn fallback_analysis(category: Category) -> ReflectionAnalysis {
    ReflectionAnalysis {
        score: FALLBACK_SCORE,
        insights: fallback_insight(category).to_string(),
        suggestions: fallback_suggestion(category).to_string(),
    }
}

/// Offline suggestion set keyed by overall score band: `>= 80`, `50..80`, `< 50`.
pub fn fallback_suggestions(overall_score: u8) -> Vec<SuggestionResponse> {
    let suggestion = if overall_score >= 80 {
        SuggestionResponse::new(
            SuggestionKind::Celebrate,
            "Soul-Deep Seeing",
            "You've walked barefoot into truth's garden. But there's still that one locked door—the one your heart knocks on when you're silent.",
        )
    } else if overall_score >= 50 {
        SuggestionResponse::new(
            SuggestionKind::Growth,
            "Half-Open Windows",
            "You've cracked open the windows, letting some fresh air in. But what if you removed the whole wall? What light might flood every corner then?",
        )
    } else {
        SuggestionResponse::new(
            SuggestionKind::Beginning,
            "Truth's First Steps",
            "We all start wearing masks—comfortable disguises. But real love needs your unfiltered heart, even when it shows up messy and unprepared.",
        )
    };
    vec![suggestion]
}

/// Returned when all three reflections are blank.
pub fn beginning_suggestion() -> SuggestionResponse {
    SuggestionResponse::new(
        SuggestionKind::Beginning,
        "Beginning Your Journey",
        "Relationship reflection is a powerful tool for growth. Consider spending more time exploring each area to gain valuable insights.",
    )
}
