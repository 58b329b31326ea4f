//! Volume number extraction: runs the strategy cascade over a filename.

use log::{debug, warn};

use crate::strategy::{NumberStrategy, OfTotalReducer, default_strategies};
use crate::types::{NumberSplit, ParseOptions, StrategyOutcome};

/// Ordered list of strategies, tried until one matches.
///
/// The "N of M" reducer runs first as a pre-pass: it only shrinks the text,
/// and its number is used when no strategy finds anything in the shrunk text.
pub struct NumberExtractor {
    reducer: OfTotalReducer,
    strategies: Vec<Box<dyn NumberStrategy + Send + Sync>>,
}

impl Default for NumberExtractor {
    fn default() -> Self {
        Self::with_strategies(default_strategies())
    }
}

impl std::fmt::Debug for NumberExtractor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NumberExtractor")
            .field(
                "strategies",
                &self.strategies.iter().map(|s| s.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl NumberExtractor {
    pub fn with_strategies(strategies: Vec<Box<dyn NumberStrategy + Send + Sync>>) -> Self {
        Self {
            reducer: OfTotalReducer,
            strategies,
        }
    }

    /// Names of the strategies, in trial order.
    pub fn strategy_names(&self) -> Vec<&'static str> {
        self.strategies.iter().map(|s| s.name()).collect()
    }

    /// Locates the volume number in `name`.
    ///
    /// Always returns a split; a miss is [`NumberSplit::miss`] of the input.
    pub fn extract(&self, name: &str, options: &ParseOptions) -> NumberSplit {
        let reduction = match self.reducer.reduce(name, options) {
            Ok(reduction) => reduction,
            Err(e) => {
                warn!("'{}': {}", name, e);
                None
            }
        };
        let text = reduction.as_ref().map_or(name, |r| r.text.as_str());

        for strategy in &self.strategies {
            match strategy.attempt(text, options) {
                Ok(StrategyOutcome::Matched(split)) => {
                    if options.trace {
                        debug!(
                            "{} matched '{}': [{}] [{}] [{}]",
                            strategy.name(),
                            text,
                            split.before,
                            split.number,
                            split.after
                        );
                    }
                    return split;
                }
                Ok(StrategyOutcome::NotMatched) => {}
                Err(e) => warn!("'{}': {}", text, e),
            }
        }

        if let Some(reduction) = reduction {
            if options.trace {
                debug!("falling back to 'N of M' count for '{}'", name);
            }
            return reduction.split;
        }

        debug!("no volume number found in '{}'", name);
        NumberSplit::miss(name)
    }
}
