//! Rename actions: what to do with a file once its canonical name is known.
//!
//! This module contains the common interface for rename actions and the two
//! implementations selected by [`RenameMode`]: a dry run that only reports the
//! proposed move, and an apply action that performs it on disk.

use async_trait::async_trait;
use std::path::Path;

use crate::types::{RenameMode, RenameOutcome};

pub mod apply;
pub mod dry_run;

pub use apply::Apply;
pub use dry_run::DryRun;

/// Common interface for rename actions.
///
/// Implementations never fail as a whole: a problem with one file is reported
/// as [`RenameOutcome::Failed`] so the remaining files are still processed.
#[async_trait]
pub trait RenameAction: Send + Sync {
    /// Moves (or pretends to move) `from` to `to`.
    ///
    /// Callers only invoke this when `from` and `to` differ.
    async fn rename(&self, from: &Path, to: &Path) -> RenameOutcome;
}

/// The action matching a [`RenameMode`].
pub fn for_mode(mode: RenameMode) -> Box<dyn RenameAction> {
    match mode {
        RenameMode::DryRun => Box::new(DryRun),
        RenameMode::Apply => Box::new(Apply),
    }
}
