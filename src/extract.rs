//! Place-name extraction from free-form user text.
//!
//! A cascade of heuristics, tried in order, first hit wins:
//! 1. phrase patterns against the lowercased input ("going to X", "weather in X", ...)
//! 2. capitalized words from the original input
//! 3. the final word, when it looks like a proper noun
//! 4. the static gazetteer
//! 5. the raw input itself, trimmed and title-cased
//!
//! Explicit phrasing is the least ambiguous cue, so it outranks blind
//! capitalization, which in turn outranks guessing from sentence position.
//! The function is total: it never fails and never returns garbage it did
//! not at least normalize.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::gazetteer;

/// Phrase patterns, most specific first. Each captures the place-name span
/// from the lowercased input.
static PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"going to ([a-z\s]+),",
        r"going to ([a-z\s]+)\?",
        r"going to ([a-z\s]+)$",
        r"to ([a-z\s]+),",
        r"to ([a-z\s]+)\?",
        r"to ([a-z\s]+)$",
        r"visit ([a-z\s]+)",
        r"about ([a-z\s]+)",
        r"search ([a-z\s]+)",
        r"find ([a-z\s]+)",
        r"what's the weather in ([a-z\s]+)",
        r"weather in ([a-z\s]+)",
        r"places to visit in ([a-z\s]+)",
        r"attractions in ([a-z\s]+)",
        r"what can i do in ([a-z\s]+)",
        r"tell me about ([a-z\s]+)",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("invalid extraction pattern"))
    .collect()
});

/// Trailing filler phrases stripped from a pattern-captured span
const FILLER_PHRASES: &[&str] = &[
    "what is the temperature there",
    "and what are the places i can visit",
    "lets plan my trip",
    "what's the weather",
    "weather and",
    "attractions and",
    "for my trip",
    "today",
    "now",
    "right now",
];

/// Punctuation trimmed off word boundaries
const EDGE_PUNCTUATION: &[char] = &['.', ',', '?', '!'];

/// Extract the best-guess place name from raw user text.
///
/// Always returns a string; when every heuristic misses, the trimmed,
/// title-cased input is returned verbatim.
#[must_use]
pub fn extract_place_name(raw: &str) -> String {
    let input_lower = raw.to_lowercase();

    if let Some(place) = match_phrase_patterns(&input_lower) {
        debug!("extracted '{}' via phrase pattern", place);
        return place;
    }

    if let Some(place) = collect_capitalized_words(raw) {
        debug!("extracted '{}' via capitalized words", place);
        return place;
    }

    if let Some(place) = last_word_candidate(raw) {
        debug!("extracted '{}' via last word", place);
        return place;
    }

    if let Some(place) = gazetteer::lookup(&input_lower) {
        debug!("extracted '{}' via gazetteer", place);
        return place.to_string();
    }

    title_case(raw.trim())
}

/// Stage 1: ordered phrase patterns, first match wins
fn match_phrase_patterns(input_lower: &str) -> Option<String> {
    for pattern in PATTERNS.iter() {
        if let Some(captures) = pattern.captures(input_lower) {
            let span = captures.get(1).map_or("", |m| m.as_str());
            let cleaned = strip_fillers(span);
            if !cleaned.is_empty() {
                return Some(title_case(&cleaned));
            }
        }
    }
    None
}

/// Stage 2: first three words that start uppercase, are longer than two
/// characters and are not the pronoun "I"
fn collect_capitalized_words(raw: &str) -> Option<String> {
    let candidates: Vec<&str> = raw
        .split_whitespace()
        .filter(|word| {
            word.chars().next().is_some_and(char::is_uppercase)
                && word.chars().count() > 2
                && *word != "I"
        })
        .map(|word| word.trim_matches(EDGE_PUNCTUATION))
        .filter(|word| !word.is_empty())
        .take(3)
        .collect();

    if candidates.is_empty() {
        None
    } else {
        Some(candidates.join(" "))
    }
}

/// Stage 3: final token, if it reads like a proper noun
fn last_word_candidate(raw: &str) -> Option<String> {
    let last = raw.split_whitespace().last()?.trim_matches(EDGE_PUNCTUATION);
    if last.chars().count() > 2 && last.chars().next().is_some_and(char::is_uppercase) {
        Some(title_case(last))
    } else {
        None
    }
}

fn strip_fillers(span: &str) -> String {
    let mut place = span.trim().to_string();
    for filler in FILLER_PHRASES {
        place = place.replace(filler, "");
    }
    place.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Uppercase the first letter of each whitespace-separated word, lowercase
/// the rest
fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
