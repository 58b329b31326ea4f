//! Core data types, options and reports for the Seiri normalization library.
//!
//! This module defines the fundamental data structures used throughout Seiri:
//! - Parsing intermediates (`NumberSplit`, `StrategyOutcome`)
//! - The decomposed filename (`ParsedFields`)
//! - Per-call parsing configuration (`ParseOptions`)
//! - Rename planning and reporting (`RenameMode`, `RenameOutcome`, `RenameReport`)

use chrono::{DateTime, Utc};
use lazy_static::lazy_static;
use regex::Regex;
use std::path::PathBuf;

use crate::error::Result;

/// Archive extensions recognized by default at the end of a filename.
pub const DEFAULT_ARCHIVE_SUFFIXES: [&str; 5] = ["pdf", "cbz", "cbr", "zip", "rar"];

lazy_static! {
    static ref DEFAULT_SUFFIX_REGEX: Regex =
        Regex::new(r"(?i)[.](?P<suffix>pdf|cbz|cbr|zip|rar)\s*$").unwrap();
}

/// The three-way split produced by locating a volume number in a filename.
///
/// When `number` is empty the split is a miss and `before`/`after` both carry the
/// untouched input text.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "specta", derive(specta::Type))]
pub struct NumberSplit {
    pub before: String,
    pub number: String,
    pub after: String,
}

impl NumberSplit {
    pub fn new(
        before: impl Into<String>,
        number: impl Into<String>,
        after: impl Into<String>,
    ) -> Self {
        Self {
            before: before.into(),
            number: number.into(),
            after: after.into(),
        }
    }

    /// The designated "no match" value for `text`.
    pub fn miss(text: &str) -> Self {
        Self::new(text, "", text)
    }

    pub fn is_miss(&self) -> bool {
        self.number.is_empty()
    }
}

/// Result of a single strategy attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StrategyOutcome {
    Matched(NumberSplit),
    NotMatched,
}

impl StrategyOutcome {
    pub fn into_split(self) -> Option<NumberSplit> {
        match self {
            StrategyOutcome::Matched(split) => Some(split),
            StrategyOutcome::NotMatched => None,
        }
    }
}

/// A decomposed filename: `directory/Series_01_Title.suffix`.
///
/// `series` and `title` are already normalized (ASCII, dot separated, capitalized).
/// An empty `number` means no volume number could be determined.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "specta", derive(specta::Type))]
pub struct ParsedFields {
    pub directory: String,
    pub series: String,
    pub number: String,
    pub title: String,
    pub suffix: String,
}

impl ParsedFields {
    pub fn has_number(&self) -> bool {
        !self.number.is_empty()
    }
}

/// Explicit configuration threaded through every parsing component.
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Emit step-by-step `debug!` traces while parsing.
    pub trace: bool,
    /// Right-anchored archive extension matcher with a `suffix` group.
    pub suffix_regex: Regex,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            trace: false,
            suffix_regex: DEFAULT_SUFFIX_REGEX.clone(),
        }
    }
}

impl ParseOptions {
    /// Builds options recognizing the given archive extensions (without the dot).
    pub fn new<S: AsRef<str>>(trace: bool, suffixes: &[S]) -> Result<Self> {
        Ok(Self {
            trace,
            suffix_regex: suffix_regex(suffixes)?,
        })
    }

    pub fn with_trace(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }
}

/// Compiles a list of extensions into the right-anchored suffix regex.
pub fn suffix_regex<S: AsRef<str>>(suffixes: &[S]) -> Result<Regex> {
    let alternatives = suffixes
        .iter()
        .map(|s| regex::escape(s.as_ref().trim_start_matches('.')))
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>();

    if alternatives.is_empty() {
        return Err("At least one archive suffix is required".into());
    }

    Ok(Regex::new(&format!(
        r"(?i)[.](?P<suffix>{})\s*$",
        alternatives.join("|")
    ))?)
}

/// Whether the walker only reports proposed names or actually moves files.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "specta", derive(specta::Type))]
pub enum RenameMode {
    #[default]
    DryRun,
    Apply,
}

/// What happened to a single file during a run.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "specta", derive(specta::Type))]
pub enum RenameOutcome {
    /// The file already carries its canonical name.
    Unchanged(PathBuf),
    /// Dry run: the file would be moved.
    Planned { from: PathBuf, to: PathBuf },
    Renamed { from: PathBuf, to: PathBuf },
    /// No volume number could be extracted.
    Skipped { path: PathBuf, reason: String },
    Failed {
        from: PathBuf,
        to: PathBuf,
        reason: String,
    },
}

/// Summary of a walk over a source directory.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "specta", derive(specta::Type))]
pub struct RenameReport {
    pub mode: RenameMode,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub outcomes: Vec<RenameOutcome>,
}

impl RenameReport {
    pub fn new(mode: RenameMode) -> Self {
        let now = Utc::now();
        Self {
            mode,
            started_at: now,
            finished_at: now,
            outcomes: Vec::new(),
        }
    }

    pub fn unchanged(&self) -> usize {
        self.count(|o| matches!(o, RenameOutcome::Unchanged(_)))
    }

    pub fn planned(&self) -> usize {
        self.count(|o| matches!(o, RenameOutcome::Planned { .. }))
    }

    pub fn renamed(&self) -> usize {
        self.count(|o| matches!(o, RenameOutcome::Renamed { .. }))
    }

    pub fn skipped(&self) -> usize {
        self.count(|o| matches!(o, RenameOutcome::Skipped { .. }))
    }

    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, RenameOutcome::Failed { .. }))
    }

    fn count<F>(&self, predicate: F) -> usize
    where
        F: Fn(&RenameOutcome) -> bool,
    {
        self.outcomes.iter().filter(|o| predicate(o)).count()
    }
}
