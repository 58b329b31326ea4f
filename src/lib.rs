//! Seiri - Comic and Book Archive Filename Normalization Library
//!
//! This crate turns free-form archive names such as
//! `"Tif et Tondu - 026#045 - Le Gouffre Interdit.zip"` into the canonical
//! `Series/Series_01_Title.ext` layout (`Tif.et.Tondu_26_Le.Gouffre.Interdit.zip`).
//!
//! The core is a synchronous, stateless pipeline: an ordered cascade of number
//! extraction strategies splits a name around its volume number, cleaners tidy
//! the text on each side, and a title-casing pass folds everything to
//! dot-separated ASCII. Around it, [`SeiriConfig`] walks a directory tree and
//! either reports or performs the renames.
//!
//! # Getting Started
//!
//! ```rust
//! let fields = seiri::decompose("Les Bidochon - tome 19.pdf");
//! assert_eq!(fields.series, "Les.Bidochon");
//! assert_eq!(fields.number, "19");
//!
//! assert_eq!(
//!     seiri::canonical_name("Valerian/Valerian HS - Par Les Chemins De L Espace.cbr").unwrap(),
//!     "Valerian/Valerian_HS_Par.les.Chemins.de.l.Espace.cbr"
//! );
//! ```
//!
//! To normalize a whole directory:
//!
//! ```rust,no_run
//! use seiri::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> seiri::error::Result<()> {
//!     let config = SeiriConfig::builder()
//!         .source_path("./comics")
//!         .mode(RenameMode::Apply)
//!         .archive_suffixes(vec!["cbz".to_string(), "cbr".to_string()])
//!         .build()?;
//!
//!     config.preflight_check()?;
//!     let report = config.run().await?;
//!     println!(
//!         "{} renamed, {} skipped, {} failed",
//!         report.renamed(),
//!         report.skipped(),
//!         report.failed()
//!     );
//!
//!     Ok(())
//! }
//! ```

pub mod action;
pub mod cleaner;
pub mod error;
pub mod extractor;
pub mod formatter;
pub mod path_utils;
pub mod seiri;
pub mod strategy;
pub mod text;
pub mod types;
pub mod walker;

// Publicly expose the main `SeiriConfig` struct and its builder
pub use seiri::SeiriConfig;
pub use seiri::SeiriConfigBuilder;
pub use seiri::{canonical_name, decompose, decompose_path};

pub use extractor::NumberExtractor;
pub use types::{
    NumberSplit, ParseOptions, ParsedFields, RenameMode, RenameOutcome, RenameReport,
    StrategyOutcome,
};

/// Prelude module for convenient imports.
///
/// This module re-exports the most commonly used types and traits, allowing you to
/// import everything you need with a single `use seiri::prelude::*;` statement.
pub mod prelude {
    pub use super::{
        NumberExtractor, NumberSplit, ParseOptions, ParsedFields, RenameMode, RenameOutcome,
        RenameReport, SeiriConfig, SeiriConfigBuilder, StrategyOutcome, canonical_name,
        decompose, decompose_path, error, types,
    };
    pub use crate::action::RenameAction;
    pub use crate::strategy::NumberStrategy;
    pub use crate::walker::Walker;
    pub use std::path::{Path, PathBuf};
}
