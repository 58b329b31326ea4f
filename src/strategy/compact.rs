//! Compact `volume#total` syntax: `Tif et Tondu - 026#045 - Le Gouffre Interdit`.
//!
//! A series name ending in a number followed by this token would be mis-split by
//! the general matcher, so it gets its own earlier pass.

use lazy_static::lazy_static;
use regex::Regex;

use super::{NumberStrategy, SEPARATOR, group, trace, whole};
use crate::error::Result;
use crate::types::{NumberSplit, ParseOptions, StrategyOutcome};

const NAME: &str = "compact-total";

lazy_static! {
    static ref COMPACT_TOTAL_REGEX: Regex =
        Regex::new(&format!(r"{SEPARATOR}(?P<number>\d+)[#]\d+{SEPARATOR}")).unwrap();
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CompactTotalStrategy;

impl NumberStrategy for CompactTotalStrategy {
    fn name(&self) -> &'static str {
        NAME
    }

    fn attempt(&self, text: &str, options: &ParseOptions) -> Result<StrategyOutcome> {
        let Some(captures) = COMPACT_TOTAL_REGEX.captures(text) else {
            trace(options, NAME, "no '- N#P -' pattern");
            return Ok(StrategyOutcome::NotMatched);
        };

        let number = group(&captures, NAME, "number")?;
        let span = whole(&captures, NAME)?;
        trace(options, NAME, &format!("matched '{}'", span.as_str()));

        Ok(StrategyOutcome::Matched(NumberSplit::new(
            &text[..span.start()],
            number.as_str(),
            &text[span.end()..],
        )))
    }
}
