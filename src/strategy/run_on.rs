//! Number, series and title written as one run: `01 - Serenity - Those Left Behind.cbr`.

use lazy_static::lazy_static;
use regex::Regex;

use super::{NumberStrategy, SEPARATOR, VOLUME_NUMBER, group, trace, whole};
use crate::error::Result;
use crate::types::{NumberSplit, ParseOptions, StrategyOutcome};

const NAME: &str = "run-on";

// `A-z` also spans `[\]^_` and the backtick, so a lone `_` can be captured as a word.
const WORD: &str = r"(?:[A-z][A-z0-9]*)";

lazy_static! {
    static ref RUN_ON_REGEX: Regex = Regex::new(&format!(
        r"{VOLUME_NUMBER}{SEPARATOR}(?P<series>{WORD}+(?:\s{WORD})*){SEPARATOR}(?P<title>{WORD}(?:\s{WORD})*)[.]"
    ))
    .unwrap();
}

fn is_bare_separator(fragment: &str) -> bool {
    fragment == "_" || fragment == "-"
}

/// Takes the series from the words after the number instead of the text before it.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOnStrategy;

impl NumberStrategy for RunOnStrategy {
    fn name(&self) -> &'static str {
        NAME
    }

    fn attempt(&self, text: &str, options: &ParseOptions) -> Result<StrategyOutcome> {
        let Some(captures) = RUN_ON_REGEX.captures(text) else {
            trace(options, NAME, "no 'number series title.' run");
            return Ok(StrategyOutcome::NotMatched);
        };

        let number = group(&captures, NAME, "number")?;
        let series = group(&captures, NAME, "series")?;
        let title = group(&captures, NAME, "title")?;
        let span = whole(&captures, NAME)?;

        if is_bare_separator(series.as_str()) || is_bare_separator(title.as_str()) {
            trace(
                options,
                NAME,
                &format!(
                    "rejected series '{}' / title '{}'",
                    series.as_str(),
                    title.as_str()
                ),
            );
            return Ok(StrategyOutcome::NotMatched);
        }

        trace(
            options,
            NAME,
            &format!(
                "series={} number={} title={}",
                series.as_str(),
                number.as_str(),
                title.as_str()
            ),
        );

        Ok(StrategyOutcome::Matched(NumberSplit::new(
            series.as_str(),
            number.as_str(),
            format!("{}.{}", title.as_str(), &text[span.end()..]),
        )))
    }
}
