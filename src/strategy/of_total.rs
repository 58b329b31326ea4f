//! "N of M" reducer: `1 of 3`, `01 (of 04)`.
//!
//! This dialect is a count rather than a volume marker, and it confuses the
//! later matchers, so it is cut out of the text before they run. The number it
//! captured is only kept when nothing better turns up.

use lazy_static::lazy_static;
use regex::Regex;

use super::{drop_last_char, group, trace, whole};
use crate::error::Result;
use crate::types::{NumberSplit, ParseOptions};

const NAME: &str = "of-total";

lazy_static! {
    static ref OF_TOTAL_REGEX: Regex = Regex::new(r"(?i)(?P<first>\d+)\s[(]?of\s\d+[)]?").unwrap();
}

/// Text shrunk by the reducer, plus the tentative split it implies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reduction {
    /// Input with the "N of M" span and the character before it removed.
    pub text: String,
    pub split: NumberSplit,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct OfTotalReducer;

impl OfTotalReducer {
    pub fn reduce(&self, text: &str, options: &ParseOptions) -> Result<Option<Reduction>> {
        let Some(captures) = OF_TOTAL_REGEX.captures(text) else {
            trace(options, NAME, "no 'N of M' pattern");
            return Ok(None);
        };

        let first = group(&captures, NAME, "first")?;
        let span = whole(&captures, NAME)?;

        let head = drop_last_char(&text[..span.start()]);
        let tail = &text[span.end()..];
        let reduced = format!("{}{}", head, tail);
        trace(options, NAME, &format!("reduced to '{}'", reduced));

        Ok(Some(Reduction {
            text: reduced,
            split: NumberSplit::new(head, first.as_str(), tail),
        }))
    }
}
