//! Common test utilities for the Seiri crate.
//!
//! Provides functions for setting up test directories and creating dummy
//! archive files.

use rand::{Rng, distributions::Alphanumeric};
use seiri::error::Result;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::fs;

#[allow(dead_code)]
pub const TEST_TMP_DIR: &str = "tests/tmp";
#[allow(dead_code)]
pub const TEST_TIMEOUT: Duration = Duration::from_secs(30);

/// A unique scratch directory with a `source` tree to normalize.
#[allow(dead_code)]
pub struct TestDirs {
    pub base_dir: PathBuf,
    pub source_dir: PathBuf,
}

#[allow(dead_code)]
impl TestDirs {
    pub async fn cleanup(&self) {
        let _ = fs::remove_dir_all(&self.base_dir).await;
    }
}

/// Creates a clean, randomly suffixed test directory with a `source` subdirectory.
#[allow(dead_code)]
pub async fn setup_test_dirs(sub_path: &str) -> TestDirs {
    let rand_string: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(8)
        .map(char::from)
        .collect();
    let base_dir = PathBuf::from(TEST_TMP_DIR).join(format!("{}-{}", sub_path, rand_string));
    if base_dir.exists() {
        fs::remove_dir_all(&base_dir).await.unwrap();
    }
    let source_dir = base_dir.join("source");
    fs::create_dir_all(&source_dir).await.unwrap();

    TestDirs {
        base_dir,
        source_dir,
    }
}

/// Creates an empty file at `path`, along with its parent directories.
#[allow(dead_code)]
pub async fn create_dummy_file(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).await?;
    }
    fs::write(path, b"dummy").await?;
    Ok(())
}
