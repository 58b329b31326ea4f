//! Out-of-series issues ("hors-série"): `Valerian HS - ...`, `Valerian THS 01 - ...`.

use lazy_static::lazy_static;
use regex::Regex;

use super::{NumberStrategy, SEPARATOR, group, trace, whole};
use crate::error::Result;
use crate::types::{NumberSplit, ParseOptions, StrategyOutcome};

const NAME: &str = "special-issue";

lazy_static! {
    static ref SPECIAL_ISSUE_REGEX: Regex = Regex::new(&format!(
        r"(?i){SEPARATOR}T?(?P<hs>HS)(?:\s*(?P<hsn>\d{{1,2}}))?{SEPARATOR}"
    ))
    .unwrap();
}

/// Produces `HS` or `HS<digits>` as the number, keeping the case it was written in.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpecialIssueStrategy;

impl NumberStrategy for SpecialIssueStrategy {
    fn name(&self) -> &'static str {
        NAME
    }

    fn attempt(&self, text: &str, options: &ParseOptions) -> Result<StrategyOutcome> {
        let Some(captures) = SPECIAL_ISSUE_REGEX.captures(text) else {
            trace(options, NAME, "no '- HS n -' pattern");
            return Ok(StrategyOutcome::NotMatched);
        };

        let marker = group(&captures, NAME, "hs")?;
        let span = whole(&captures, NAME)?;
        let number = match captures.name("hsn") {
            Some(sub_number) => format!("{}{}", marker.as_str(), sub_number.as_str()),
            None => marker.as_str().to_string(),
        };
        trace(options, NAME, &format!("matched '{}' as {}", span.as_str(), number));

        Ok(StrategyOutcome::Matched(NumberSplit::new(
            &text[..span.start()],
            number,
            &text[span.end()..],
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split(text: &str) -> NumberSplit {
        SpecialIssueStrategy
            .attempt(text, &ParseOptions::default())
            .unwrap()
            .into_split()
            .unwrap()
    }

    #[test]
    fn test_bare_marker() {
        assert_eq!(
            split("Valerian HS - Par Les Chemins De L Espace.cbr"),
            NumberSplit::new("Valerian", "HS", "Par Les Chemins De L Espace.cbr")
        );
    }

    #[test]
    fn test_tome_prefixed_marker_with_sub_number() {
        assert_eq!(split("Valerian THS1 - Espace.cbr").number, "HS1");
        assert_eq!(split("Valerian THS 01 - Espace.cbr").number, "HS01");
    }

    #[test]
    fn test_marker_case_is_preserved() {
        assert_eq!(split("Valerian_hs2_Espace.cbr").number, "hs2");
    }

    #[test]
    fn test_marker_inside_word_is_ignored() {
        let outcome = SpecialIssueStrategy
            .attempt("Fishs - 01 - Title.cbr", &ParseOptions::default())
            .unwrap();
        assert_eq!(outcome, StrategyOutcome::NotMatched);
    }
}
