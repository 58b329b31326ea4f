//! Text normalization for series and title fields.
//!
//! Fields are folded to ASCII, split into words and re-joined with `.`, with
//! every word capitalized except function words (stopwords) after the first.

use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;
use unicode_normalization::UnicodeNormalization;

/// French function words kept lowercase inside a field.
pub const STOPWORDS_FR: [&str; 13] = [
    "de", "le", "la", "les", "a", "du", "ou", "l", "d", "et", "des", "au", "aux",
];

/// English function words kept lowercase inside a field.
pub const STOPWORDS_EN: [&str; 6] = ["the", "a", "his", "her", "this", "on"];

lazy_static! {
    pub static ref STOPWORDS: HashSet<&'static str> = STOPWORDS_FR
        .iter()
        .chain(STOPWORDS_EN.iter())
        .copied()
        .collect();
    static ref NON_WORD_REGEX: Regex = Regex::new(r"\W+").unwrap();
}

/// Returns true when `word` (any case) is a stopword.
pub fn is_stopword(word: &str) -> bool {
    STOPWORDS.contains(word.to_lowercase().as_str())
}

/// Folds `text` to ASCII: combining marks are decomposed away and anything
/// else outside ASCII is dropped ("Bâtard" -> "Batard").
pub fn to_ascii(text: &str) -> String {
    text.nfkd().filter(char::is_ascii).collect()
}

/// Upper-cases every letter that follows a non-letter and lower-cases the rest.
pub fn title_case(word: &str) -> String {
    let mut result = String::with_capacity(word.len());
    let mut previous_is_letter = false;
    for c in word.chars() {
        if c.is_alphabetic() {
            if previous_is_letter {
                result.extend(c.to_lowercase());
            } else {
                result.extend(c.to_uppercase());
            }
            previous_is_letter = true;
        } else {
            result.push(c);
            previous_is_letter = false;
        }
    }
    result
}

/// Capitalization for the first word of a field: all-caps words are kept as
/// acronyms, anything else is title-cased.
pub fn capitalize_first(word: &str) -> String {
    if word == word.to_uppercase() {
        word.to_string()
    } else {
        title_case(word)
    }
}

/// Capitalization for the following words: stopwords go lowercase.
pub fn capitalize(word: &str) -> String {
    let lower = word.to_lowercase();
    if STOPWORDS.contains(lower.as_str()) {
        lower
    } else {
        capitalize_first(word)
    }
}

/// Splits ASCII-folded text on runs of non-word characters, skipping empty pieces.
pub fn tokenize(text: &str) -> Vec<String> {
    NON_WORD_REGEX
        .split(&to_ascii(text))
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// Normalizes a series or title field: `"Là où va l Indien"` -> `"La.ou.Va.l.Indien"`.
pub fn pretty(text: &str) -> String {
    let tokens = tokenize(text);
    let mut words = tokens.iter();

    let Some(first) = words.next() else {
        return String::new();
    };

    std::iter::once(capitalize_first(first))
        .chain(words.map(|w| capitalize(w)))
        .collect::<Vec<_>>()
        .join(".")
}
