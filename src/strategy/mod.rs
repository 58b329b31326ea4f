//! Strategy module provides the trait and implementations for volume number matchers.
//!
//! Each strategy recognizes one filename dialect ("Tome 12", "026#045", "HS", ...)
//! and splits the filename around the volume number it finds. Strategies are
//! pure: they never touch shared state and only report through the `log` facade
//! when tracing is enabled in the [`ParseOptions`].

use log::debug;
use regex::{Captures, Match};

use crate::error::{Error, Result};
use crate::types::{ParseOptions, StrategyOutcome};

pub mod compact;
pub mod fallback;
pub mod general;
pub mod issue_of;
pub mod of_total;
pub mod run_on;
pub mod special;

pub use compact::CompactTotalStrategy;
pub use fallback::{NoSeriesStrategy, NoTitleStrategy, NumberOnlyStrategy};
pub use general::GeneralStrategy;
pub use issue_of::IssueOfStrategy;
pub use of_total::{OfTotalReducer, Reduction};
pub use run_on::RunOnStrategy;
pub use special::SpecialIssueStrategy;

/// Separator between filename parts: a dot is allowed only around a run of
/// dashes, underscores or whitespace.
pub const SEPARATOR: &str = r"[.]?[-_\s]+[.]?";

/// Optional volume prefix: `V`, `T`, `Tome`, `Tomes`, with an optional joiner.
pub const TOME_PREFIX: &str = r"(?:[vVtT](?:ome(?:s)?)?[-_ ]?)?";

/// One or two digit volume number.
pub const VOLUME_NUMBER: &str = r"(?P<number>\d{1,2})";

/// Common interface for all volume number matchers.
///
/// Implementations return [`StrategyOutcome::NotMatched`] when their dialect is
/// absent. An `Err` means the pattern matched in an unexpected shape; callers
/// treat it as a failed attempt and move on to the next strategy.
pub trait NumberStrategy {
    /// Short identifier used in traces and errors.
    fn name(&self) -> &'static str;

    /// Tries to locate a volume number in `text`.
    fn attempt(&self, text: &str, options: &ParseOptions) -> Result<StrategyOutcome>;
}

/// The standard cascade, in priority order.
pub fn default_strategies() -> Vec<Box<dyn NumberStrategy + Send + Sync>> {
    vec![
        Box::new(IssueOfStrategy),
        Box::new(CompactTotalStrategy),
        Box::new(SpecialIssueStrategy),
        Box::new(GeneralStrategy),
        Box::new(RunOnStrategy),
        Box::new(NoTitleStrategy),
        Box::new(NoSeriesStrategy),
        Box::new(NumberOnlyStrategy),
    ]
}

/// Fetches a named group, reporting its absence as an ambiguous match.
pub(crate) fn group<'t>(
    captures: &Captures<'t>,
    strategy: &'static str,
    name: &'static str,
) -> Result<Match<'t>> {
    captures
        .name(name)
        .ok_or(Error::AmbiguousMatch {
            strategy,
            group: name,
        })
}

/// Fetches the whole matched span.
pub(crate) fn whole<'t>(captures: &Captures<'t>, strategy: &'static str) -> Result<Match<'t>> {
    captures.get(0).ok_or(Error::AmbiguousMatch {
        strategy,
        group: "0",
    })
}

/// Drops the last character of `text` (usually the separator in front of a match).
pub(crate) fn drop_last_char(text: &str) -> &str {
    text.char_indices()
        .last()
        .map_or(text, |(index, _)| &text[..index])
}

pub(crate) fn trace(options: &ParseOptions, strategy: &'static str, message: &str) {
    if options.trace {
        debug!("{}: {}", strategy, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drop_last_char() {
        assert_eq!(drop_last_char("abc "), "abc");
        assert_eq!(drop_last_char("Vinéa é"), "Vinéa ");
        assert_eq!(drop_last_char("é"), "");
        assert_eq!(drop_last_char(""), "");
    }

    #[test]
    fn test_default_strategies_order() {
        let names = default_strategies()
            .iter()
            .map(|s| s.name())
            .collect::<Vec<_>>();
        assert_eq!(
            names,
            vec![
                "issue-of",
                "compact-total",
                "special-issue",
                "general",
                "run-on",
                "no-title",
                "no-series",
                "number-only",
            ]
        );
    }
}
