//! Recursive collection of the files to normalize.
//!
//! Directories are read level by level: every directory of the current level is
//! read in its own task, bounded by a semaphore, and the sub-directories found
//! form the next level. The collected files are sorted so that a run always
//! visits them in the same order.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use futures::future::try_join_all;
use log::debug;
use rayon::prelude::*;
use tokio::fs::read_dir;
use tokio::spawn;
use tokio::sync::Semaphore;
use tokio::task::JoinHandle;

use crate::error::{Error, Result};
use crate::path_utils::is_hidden_file;

/// Walks a directory tree and collects its regular files.
#[derive(Debug, Clone)]
pub struct Walker {
    root: PathBuf,
    include_hidden: bool,
}

impl Walker {
    /// Creates a walker rooted at `root`. Hidden entries are skipped.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            include_hidden: false,
        }
    }

    /// Also visit entries whose name starts with a dot.
    pub fn include_hidden(mut self, include_hidden: bool) -> Self {
        self.include_hidden = include_hidden;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Collects every regular file below the root, sorted by path.
    ///
    /// Symbolic links are not followed.
    pub async fn collect(&self) -> Result<Vec<PathBuf>> {
        if !self.root.is_dir() {
            return Err(Error::NotFound(format!(
                "Source directory does not exist: {:?}",
                self.root
            )));
        }

        let semaphore = Arc::new(Semaphore::new(num_cpus::get().min(8)));
        let mut files: Vec<PathBuf> = Vec::new();
        let mut level = vec![self.root.clone()];

        while !level.is_empty() {
            let mut handles: Vec<JoinHandle<Result<(Vec<PathBuf>, Vec<PathBuf>)>>> =
                Vec::with_capacity(level.len());

            for directory in level.drain(..) {
                let semaphore = Arc::clone(&semaphore);
                let include_hidden = self.include_hidden;

                handles.push(spawn(async move {
                    let _permit = semaphore.acquire().await?;
                    Self::read_entries(&directory, include_hidden).await
                }));
            }

            for result in try_join_all(handles).await? {
                let (directory_files, sub_directories) = result?;
                files.extend(directory_files);
                level.extend(sub_directories);
            }
        }

        files.par_sort();
        debug!("collected {} files under {:?}", files.len(), self.root);
        Ok(files)
    }

    /// Reads one directory, returning `(files, sub_directories)`.
    async fn read_entries(
        directory: &Path,
        include_hidden: bool,
    ) -> Result<(Vec<PathBuf>, Vec<PathBuf>)> {
        let mut files = Vec::new();
        let mut directories = Vec::new();

        let mut entries = read_dir(directory).await?;
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if !include_hidden && is_hidden_file(&path) {
                continue;
            }

            let file_type = entry.file_type().await?;
            if file_type.is_dir() {
                directories.push(path);
            } else if file_type.is_file() {
                files.push(path);
            }
        }

        Ok((files, directories))
    }
}
