//! Last-resort matchers for names missing a series, a title, or both.

use lazy_static::lazy_static;
use regex::Regex;

use super::{NumberStrategy, SEPARATOR, TOME_PREFIX, VOLUME_NUMBER, group, trace, whole};
use crate::error::Result;
use crate::types::{NumberSplit, ParseOptions, StrategyOutcome};

lazy_static! {
    static ref NO_TITLE_REGEX: Regex =
        Regex::new(&format!("{SEPARATOR}{TOME_PREFIX}{VOLUME_NUMBER}")).unwrap();
    static ref NO_SERIES_REGEX: Regex =
        Regex::new(&format!("{TOME_PREFIX}{VOLUME_NUMBER}{SEPARATOR}")).unwrap();
    static ref NUMBER_ONLY_REGEX: Regex =
        Regex::new(&format!("{TOME_PREFIX}{VOLUME_NUMBER}")).unwrap();
}

/// Shared body: split around the first match of `regex`.
fn split_around(
    regex: &Regex,
    name: &'static str,
    text: &str,
    keep_before: bool,
    options: &ParseOptions,
) -> Result<StrategyOutcome> {
    let Some(captures) = regex.captures(text) else {
        trace(options, name, "no match");
        return Ok(StrategyOutcome::NotMatched);
    };

    let number = group(&captures, name, "number")?;
    let span = whole(&captures, name)?;
    trace(options, name, &format!("matched '{}'", span.as_str()));

    let before = if keep_before {
        &text[..span.start()]
    } else {
        ""
    };

    Ok(StrategyOutcome::Matched(NumberSplit::new(
        before,
        number.as_str(),
        &text[span.end()..],
    )))
}

/// Number preceded by a separator with nothing separated after it:
/// `Les Bidochon - tome 19.pdf`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTitleStrategy;

impl NumberStrategy for NoTitleStrategy {
    fn name(&self) -> &'static str {
        "no-title"
    }

    fn attempt(&self, text: &str, options: &ParseOptions) -> Result<StrategyOutcome> {
        split_around(&NO_TITLE_REGEX, self.name(), text, true, options)
    }
}

/// Number followed by a separator, whatever precedes it is dropped:
/// `12 - title.pdf`, `T12 _ title.pdf`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSeriesStrategy;

impl NumberStrategy for NoSeriesStrategy {
    fn name(&self) -> &'static str {
        "no-series"
    }

    fn attempt(&self, text: &str, options: &ParseOptions) -> Result<StrategyOutcome> {
        split_around(&NO_SERIES_REGEX, self.name(), text, false, options)
    }
}

/// Any one or two digit number at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct NumberOnlyStrategy;

impl NumberStrategy for NumberOnlyStrategy {
    fn name(&self) -> &'static str {
        "number-only"
    }

    fn attempt(&self, text: &str, options: &ParseOptions) -> Result<StrategyOutcome> {
        split_around(&NUMBER_ONLY_REGEX, self.name(), text, true, options)
    }
}
