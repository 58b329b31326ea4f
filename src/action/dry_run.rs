use async_trait::async_trait;
use log::info;
use std::path::Path;

use crate::action::RenameAction;
use crate::path_utils::path_to_string_lossy;
use crate::types::RenameOutcome;

/// Reports the proposed move and leaves the file alone.
#[derive(Debug, Clone, Copy, Default)]
pub struct DryRun;

#[async_trait]
impl RenameAction for DryRun {
    async fn rename(&self, from: &Path, to: &Path) -> RenameOutcome {
        info!(
            "{} would move to {}",
            path_to_string_lossy(from),
            path_to_string_lossy(to)
        );
        RenameOutcome::Planned {
            from: from.to_path_buf(),
            to: to.to_path_buf(),
        }
    }
}
