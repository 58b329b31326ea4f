//! Property tests for the strategy cascade and the field normalizer.

use proptest::prelude::*;
use seiri::strategy::{NumberStrategy, default_strategies};
use seiri::text::{STOPWORDS_EN, STOPWORDS_FR, pretty};
use seiri::types::{ParseOptions, StrategyOutcome};

/// Archive-like names that most strategies can match, mixed with arbitrary text.
fn archive_name() -> impl Strategy<Value = String> {
    prop_oneof![
        3 => "[A-Za-z]{1,8}( [A-Za-z]{1,8}){0,2}( - |_| |[.]-[.])(T|Tome |tome |V|T?HS ?)?[0-9]{1,3}(#[0-9]{2}| #[0-9] [(]of [0-9]{1,2}[)])?( - |_| |[.])[A-Za-z]{1,8}( [A-Za-z]{1,8}){0,2}[.](pdf|cbr|zip|txt) ?",
        1 => "[0-9]{1,2}( - |_)[A-Za-z]{1,8}( - |_)[A-Za-z]{1,8}[.]cbr",
        1 => "\\PC{0,40}",
    ]
}

fn stopword() -> impl Strategy<Value = String> {
    let words: Vec<&'static str> = STOPWORDS_FR.iter().chain(STOPWORDS_EN.iter()).copied().collect();
    (prop::sample::select(words), any::<bool>()).prop_map(|(word, upper)| {
        if upper {
            word.to_uppercase()
        } else {
            word.to_string()
        }
    })
}

proptest! {
    #[test]
    fn strategy_splits_come_from_the_input(text in archive_name()) {
        let options = ParseOptions::default();
        for strategy in default_strategies() {
            let Ok(StrategyOutcome::Matched(split)) = strategy.attempt(&text, &options) else {
                continue;
            };
            let name = strategy.name();

            prop_assert!(!split.number.is_empty(), "{}: empty number", name);
            prop_assert!(text.ends_with(&split.after), "{}: after {:?}", name, split.after);
            match name {
                // The series of a run-on name sits after the number.
                "run-on" => {
                    prop_assert!(text.contains(&split.before), "{}: before {:?}", name, split.before);
                }
                "no-series" => {
                    prop_assert!(split.before.is_empty(), "{}: before {:?}", name, split.before);
                }
                _ => {
                    prop_assert!(text.starts_with(&split.before), "{}: before {:?}", name, split.before);
                }
            }
            prop_assert!(
                split.before.len() + split.after.len() < text.len(),
                "{}: nothing removed from {:?}",
                name,
                text
            );
        }
    }

    #[test]
    fn pretty_is_idempotent(s in "\\PC{0,40}") {
        let once = pretty(&s);
        let twice = pretty(&once);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn pretty_output_is_dotted_ascii(s in "\\PC{0,40}") {
        let result = pretty(&s);
        prop_assert!(result.is_ascii());
        prop_assert!(!result.starts_with('.'));
        prop_assert!(!result.ends_with('.'));
        prop_assert!(!result.contains(".."));
    }

    #[test]
    fn stopwords_after_the_first_word_are_lowercase(
        first in "[A-Za-z]{1,8}",
        word in stopword(),
        rest in "( [A-Za-z]{1,8}){0,3}",
    ) {
        let result = pretty(&format!("{} {}{}", first, word, rest));
        let tokens: Vec<&str> = result.split('.').collect();
        let lower = word.to_lowercase();
        prop_assert_eq!(tokens.get(1).copied(), Some(lower.as_str()));
    }

    #[test]
    fn leading_stopword_is_capitalized(word in stopword(), rest in "( [A-Za-z]{1,8}){1,3}") {
        let result = pretty(&format!("{}{}", word, rest));
        let first = result.split('.').next().unwrap_or_default();
        prop_assert!(first.starts_with(|c: char| c.is_ascii_uppercase()), "{:?}", result);
    }
}
