//! The common case: `Series - T01 - Title`, `series_12_title`, `XIII Mystery T2 - Irina`.

use lazy_static::lazy_static;
use regex::{Match, Regex};

use super::{NumberStrategy, SEPARATOR, TOME_PREFIX, VOLUME_NUMBER, group, trace, whole};
use crate::error::Result;
use crate::types::{NumberSplit, ParseOptions, StrategyOutcome};

const NAME: &str = "general";

lazy_static! {
    static ref GENERAL_REGEX: Regex =
        Regex::new(&format!("{SEPARATOR}{TOME_PREFIX}{VOLUME_NUMBER}{SEPARATOR}")).unwrap();
}

/// Weight of a matched span: characters that are neither digits nor whitespace.
/// A prefixed span such as `- Tome 12 -` outweighs a bare ` 11 `.
pub fn marker_weight(span: &str) -> usize {
    span.chars()
        .filter(|c| !c.is_ascii_digit() && !c.is_whitespace())
        .count()
}

/// Separator-bounded, optionally prefixed one or two digit number.
///
/// When a second candidate follows the first, the heavier one wins and ties
/// keep the first.
#[derive(Debug, Clone, Copy, Default)]
pub struct GeneralStrategy;

struct Candidate<'t> {
    span_start: usize,
    span_end: usize,
    span: &'t str,
    number: Match<'t>,
}

impl GeneralStrategy {
    fn candidate_at<'t>(text: &'t str, offset: usize) -> Result<Option<Candidate<'t>>> {
        let Some(captures) = GENERAL_REGEX.captures(&text[offset..]) else {
            return Ok(None);
        };
        let span = whole(&captures, NAME)?;
        let number = group(&captures, NAME, "number")?;
        Ok(Some(Candidate {
            span_start: offset + span.start(),
            span_end: offset + span.end(),
            span: span.as_str(),
            number,
        }))
    }
}

impl NumberStrategy for GeneralStrategy {
    fn name(&self) -> &'static str {
        NAME
    }

    fn attempt(&self, text: &str, options: &ParseOptions) -> Result<StrategyOutcome> {
        let Some(first) = Self::candidate_at(text, 0)? else {
            trace(options, NAME, "no separated number");
            return Ok(StrategyOutcome::NotMatched);
        };

        let chosen = match Self::candidate_at(text, first.span_end)? {
            Some(second) => {
                let (first_weight, second_weight) =
                    (marker_weight(first.span), marker_weight(second.span));
                trace(
                    options,
                    NAME,
                    &format!(
                        "2 candidates: '{}' ({}) and '{}' ({})",
                        first.span, first_weight, second.span, second_weight
                    ),
                );
                if second_weight > first_weight {
                    second
                } else {
                    first
                }
            }
            None => first,
        };

        Ok(StrategyOutcome::Matched(NumberSplit::new(
            &text[..chosen.span_start],
            chosen.number.as_str(),
            &text[chosen.span_end..],
        )))
    }
}
