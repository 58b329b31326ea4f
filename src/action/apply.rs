use async_trait::async_trait;
use log::{info, warn};
use std::path::Path;
use tokio::fs;

use crate::action::RenameAction;
use crate::error::{Error, Result};
use crate::path_utils::path_to_string_lossy;
use crate::types::RenameOutcome;

/// Moves files on disk, refusing to overwrite an existing target.
#[derive(Debug, Clone, Copy, Default)]
pub struct Apply;

impl Apply {
    async fn move_file(from: &Path, to: &Path) -> Result<()> {
        if fs::try_exists(to).await? {
            return Err(Error::RenameCollision(to.to_path_buf()));
        }

        if let Some(parent) = to.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }

        fs::rename(from, to).await?;
        Ok(())
    }
}

#[async_trait]
impl RenameAction for Apply {
    async fn rename(&self, from: &Path, to: &Path) -> RenameOutcome {
        match Self::move_file(from, to).await {
            Ok(()) => {
                info!(
                    "moved {} to {}",
                    path_to_string_lossy(from),
                    path_to_string_lossy(to)
                );
                RenameOutcome::Renamed {
                    from: from.to_path_buf(),
                    to: to.to_path_buf(),
                }
            }
            Err(e) => {
                warn!("could not move {}: {}", path_to_string_lossy(from), e);
                RenameOutcome::Failed {
                    from: from.to_path_buf(),
                    to: to.to_path_buf(),
                    reason: e.to_string(),
                }
            }
        }
    }
}
