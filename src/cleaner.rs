//! Cleanup of the text around the volume number.
//!
//! The part before the number carries the series (plus site tags and inverted
//! articles), the part after it carries the title, annotations and the suffix.

use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

use crate::strategy::{SEPARATOR, drop_last_char};
use crate::text::is_stopword;
use crate::types::ParseOptions;

/// Characters removed from a title that carries an annotation.
const ANNOTATION_PUNCTUATION: &[char] = &['(', ')', '-', '.', '[', ']', '{', '}'];

lazy_static! {
    /// `[BD Fr]`, `[BD-FR]`, `BD.FR.` and their doubled forms.
    static ref SITE_TAG_REGEX: Regex = {
        let bracketed = r"\[?BD[\s.-]?[Ff][Rr]\]";
        let dotted = r"BD[.]FR[.]";
        Regex::new(&format!(
            r"({bracketed}(\s+{dotted})?)|({dotted}(\s+{bracketed})?){SEPARATOR}"
        ))
        .unwrap()
    };
    static ref PAREN_STOPWORD_REGEX: Regex = Regex::new(r"(?i)[(](?P<stp>\w+)[)]").unwrap();
    static ref ANNOTATION_REGEX: Regex =
        Regex::new(r"\s*(?P<author>[(].+[)])|\s*(?P<resolution>[\[].+[\]])").unwrap();
}

/// Cleans the text found before the volume number (the series).
///
/// Strips a leading site tag, then moves a parenthesized stopword to the
/// front: `"Sang des Porphyre (Le)"` becomes `"Le Sang des Porphyre"`.
pub fn clean_before(text: &str, options: &ParseOptions) -> String {
    let stripped = match SITE_TAG_REGEX.find(text) {
        Some(tag) => text[tag.end()..].trim_start_matches(['.', '-', ' ']),
        None => text,
    };

    let Some(captures) = PAREN_STOPWORD_REGEX.captures(stripped) else {
        return stripped.to_string();
    };
    let (Some(stopword), Some(span)) = (captures.name("stp"), captures.get(0)) else {
        return stripped.to_string();
    };
    if !is_stopword(stopword.as_str()) {
        return stripped.to_string();
    }

    let head = drop_last_char(&stripped[..span.start()]);
    let tail = &stripped[span.end()..];
    if options.trace {
        debug!("clean_before: moving '{}' to the front", stopword.as_str());
    }
    format!("{} {}{}", stopword.as_str(), head, tail)
}

/// Cleans the text found after the volume number.
///
/// Returns `(title, suffix)`. The suffix is the lowercased archive extension,
/// or empty when the text does not end with a known one. When the title holds
/// an author credit in parentheses or a bracketed tag, every character of
/// `()-.[]{}` is removed from the title.
pub fn clean_after(text: &str, options: &ParseOptions) -> (String, String) {
    let (title, suffix) = match options.suffix_regex.captures(text) {
        Some(captures) => match (captures.get(0), captures.name("suffix")) {
            (Some(span), Some(suffix)) => (&text[..span.start()], suffix.as_str().to_lowercase()),
            _ => (text, String::new()),
        },
        None => (text, String::new()),
    };

    if let Some(annotation) = ANNOTATION_REGEX.find(title) {
        if options.trace {
            debug!(
                "clean_after: annotation '{}' in '{}'",
                annotation.as_str().trim(),
                title
            );
        }
        let title = title.replace(ANNOTATION_PUNCTUATION, "");
        return (title, suffix);
    }

    (title.to_string(), suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn before(text: &str) -> String {
        clean_before(text, &ParseOptions::default())
    }

    fn after(text: &str) -> (String, String) {
        clean_after(text, &ParseOptions::default())
    }

    #[test]
    fn test_site_tags_are_stripped() {
        assert_eq!(before("BD.FR.-.Waterloo.1911"), "Waterloo.1911");
        assert_eq!(before("[BD Fr] Agence Touristes"), "Agence Touristes");
        assert_eq!(before("[BD Fr] BD.FR.-.Disparitions"), "Disparitions");
        assert_eq!(before("[BD-FR] - Sang des Porphyre"), "Sang des Porphyre");
    }

    #[test]
    fn test_tag_at_end_of_text() {
        assert_eq!(before("[BD FR]"), "");
    }

    #[test]
    fn test_parenthesized_stopword_moves_to_front() {
        assert_eq!(
            before("[BD-FR] - Sang des Porphyre (Le)"),
            "Le Sang des Porphyre"
        );
        assert_eq!(before("Chat (le) noir"), "le Chat noir");
    }

    #[test]
    fn test_other_parentheses_are_kept() {
        assert_eq!(before("Supercrooks (2012)"), "Supercrooks (2012)");
    }

    #[test]
    fn test_suffix_extraction() {
        assert_eq!(
            after("Le Gouffre Interdit.zip"),
            ("Le Gouffre Interdit".to_string(), "zip".to_string())
        );
        assert_eq!(after(".PDF "), (String::new(), "pdf".to_string()));
        assert_eq!(
            after("Le.zipper.cbr"),
            ("Le.zipper".to_string(), "cbr".to_string())
        );
    }

    #[test]
    fn test_unknown_suffix_keeps_text() {
        assert_eq!(
            after("Le Gouffre.epub"),
            ("Le Gouffre.epub".to_string(), String::new())
        );
    }

    #[test]
    fn test_annotation_strips_all_punctuation() {
        assert_eq!(
            after("(2011).pdf"),
            ("2011".to_string(), "pdf".to_string())
        );
        assert_eq!(
            after("La version Irlandaise (Van.Hamme-Vance).cbr"),
            (
                "La version Irlandaise VanHammeVance".to_string(),
                "cbr".to_string()
            )
        );
        assert_eq!(
            after("Voyages a la carte [1920].cbr"),
            ("Voyages a la carte 1920".to_string(), "cbr".to_string())
        );
    }

    #[test]
    fn test_custom_suffixes() {
        let options = ParseOptions::new(false, &["epub", ".cb7"]).unwrap();
        assert_eq!(
            clean_after("Le Gouffre.cb7", &options),
            ("Le Gouffre".to_string(), "cb7".to_string())
        );
        assert_eq!(
            clean_after("Le Gouffre.pdf", &options),
            ("Le Gouffre.pdf".to_string(), String::new())
        );
    }
}
