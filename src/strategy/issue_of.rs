//! Issue syntax found on translated comics: `V3 #3 (of 5)`.

use lazy_static::lazy_static;
use regex::Regex;

use super::{NumberStrategy, drop_last_char, group, trace, whole};
use crate::error::Result;
use crate::types::{NumberSplit, ParseOptions, StrategyOutcome};

const NAME: &str = "issue-of";

lazy_static! {
    static ref ISSUE_OF_REGEX: Regex =
        Regex::new(r"V(?P<number>\d+)\s+[#]\d+\s+[(]of\s\d+[)]").unwrap();
}

/// Takes the `V<n>` number of a `V<n> #<m> (of <k>)` run.
#[derive(Debug, Clone, Copy, Default)]
pub struct IssueOfStrategy;

impl NumberStrategy for IssueOfStrategy {
    fn name(&self) -> &'static str {
        NAME
    }

    fn attempt(&self, text: &str, options: &ParseOptions) -> Result<StrategyOutcome> {
        let Some(captures) = ISSUE_OF_REGEX.captures(text) else {
            trace(options, NAME, "no 'Vn #n (of N)' pattern");
            return Ok(StrategyOutcome::NotMatched);
        };

        let number = group(&captures, NAME, "number")?;
        let span = whole(&captures, NAME)?;
        trace(options, NAME, &format!("matched '{}'", span.as_str()));

        Ok(StrategyOutcome::Matched(NumberSplit::new(
            drop_last_char(&text[..span.start()]),
            number.as_str(),
            &text[span.end()..],
        )))
    }
}
