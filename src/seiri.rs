use lazy_static::lazy_static;
use log::{debug, warn};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::action;
use crate::cleaner::{clean_after, clean_before};
use crate::error::{Error, Result};
use crate::extractor::NumberExtractor;
use crate::formatter::{format_file_name, format_name};
use crate::path_utils::{path_to_string_lossy, split_file_name, validate_path};
use crate::text::pretty;
use crate::types::{
    DEFAULT_ARCHIVE_SUFFIXES, ParseOptions, ParsedFields, RenameMode, RenameOutcome, RenameReport,
};
use crate::walker::Walker;

lazy_static! {
    static ref DEFAULT_EXTRACTOR: NumberExtractor = NumberExtractor::default();
    static ref DEFAULT_OPTIONS: ParseOptions = ParseOptions::default();
}

/// The Seiri configuration, built declaratively using the builder pattern.
///
/// A configuration bundles the parsing options (archive suffixes, tracing) with
/// the settings of a directory run (source path, rename mode, hidden files).
/// The single-name entry points ([`decompose`](SeiriConfig::decompose),
/// [`canonical_name`](SeiriConfig::canonical_name)) only use the former.
///
/// ```rust,no_run
/// # use seiri::prelude::*;
/// # #[tokio::main]
/// # async fn main() -> seiri::error::Result<()> {
/// let config = SeiriConfig::builder()
///     .source_path("./comics")
///     .mode(RenameMode::DryRun)
///     .build()?;
///
/// let report = config.run().await?;
/// println!("{} files would be renamed", report.planned());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, derive_builder::Builder)]
#[builder(
    setter(into, strip_option),
    build_fn(private, name = "build_unchecked", validate = "Self::validate")
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SeiriConfig {
    /// Root of the directory tree walked by [`plan`](SeiriConfig::plan) and
    /// [`run`](SeiriConfig::run).
    #[builder(default)]
    pub source_path: PathBuf,

    /// Whether a run only reports the proposed names or moves the files.
    #[builder(default)]
    pub mode: RenameMode,

    /// Emit step-by-step `debug!` traces while parsing.
    #[builder(default = "false")]
    pub trace: bool,

    /// Archive extensions recognized at the end of a name, without the dot.
    #[builder(default = "DEFAULT_ARCHIVE_SUFFIXES.iter().map(|s| s.to_string()).collect()")]
    pub archive_suffixes: Vec<String>,

    /// Visit files and directories whose name starts with a dot.
    #[builder(default = "false")]
    pub include_hidden: bool,

    // Compiled from `trace` and `archive_suffixes` by the builder.
    #[builder(setter(skip), default)]
    #[cfg_attr(feature = "serde", serde(skip))]
    options: ParseOptions,

    #[builder(setter(skip), default)]
    #[cfg_attr(feature = "serde", serde(skip))]
    extractor: Arc<NumberExtractor>,
}

impl Default for SeiriConfig {
    fn default() -> Self {
        Self {
            source_path: PathBuf::new(),
            mode: RenameMode::default(),
            trace: false,
            archive_suffixes: DEFAULT_ARCHIVE_SUFFIXES
                .iter()
                .map(|s| s.to_string())
                .collect(),
            include_hidden: false,
            options: ParseOptions::default(),
            extractor: Arc::new(NumberExtractor::default()),
        }
    }
}

impl SeiriConfig {
    pub fn builder() -> SeiriConfigBuilder {
        SeiriConfigBuilder::default()
    }

    /// The parsing options compiled from this configuration.
    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Checks that `source_path` can be walked.
    pub fn preflight_check(&self) -> Result<&Self> {
        if self.source_path.as_os_str().is_empty() {
            return Err(Error::Other(
                "`source_path` must be set to walk a directory.".to_string(),
            ));
        }

        validate_path(&self.source_path)?;

        if !self.source_path.exists() {
            return Err(Error::NotFound(format!(
                "Source path does not exist: {:?}",
                self.source_path
            )));
        }
        if !self.source_path.is_dir() {
            return Err(Error::InvalidPath(
                self.source_path.clone(),
                "Source path is not a directory.".to_string(),
            ));
        }

        Ok(self)
    }

    /// Decomposes a bare file name. The returned `directory` is empty.
    pub fn decompose(&self, name: &str) -> ParsedFields {
        decompose_with(&self.extractor, name, &self.options)
    }

    /// Decomposes the file name of `path`, keeping its parent as `directory`.
    pub fn decompose_path(&self, path: &Path) -> ParsedFields {
        decompose_path_with(&self.extractor, path, &self.options)
    }

    /// The canonical name of `path`, or [`Error::NoNumberFound`].
    pub fn canonical_name(&self, path: &Path) -> Result<String> {
        canonical_name_with(&self.extractor, path, &self.options)
    }

    /// Canonical path of a walked file, next to the original.
    ///
    /// The parent directory is reused as-is, so names that are not valid
    /// UTF-8 still resolve to their real location.
    fn target_path(&self, file: &Path) -> Result<PathBuf> {
        let fields = self.decompose_path(file);
        if fields.has_number() && fields.suffix.is_empty() {
            return Err(Error::UnknownSuffix(path_to_string_lossy(file)));
        }
        format_file_name(&fields)
            .map(|name| file.with_file_name(name))
            .ok_or_else(|| Error::NoNumberFound(path_to_string_lossy(file)))
    }

    async fn resolve_targets(&self) -> Result<Vec<(PathBuf, Result<PathBuf>)>> {
        self.preflight_check()?;

        let files = Walker::new(&self.source_path)
            .include_hidden(self.include_hidden)
            .collect()
            .await?;

        Ok(files
            .into_par_iter()
            .map(|file| {
                let target = self.target_path(&file);
                (file, target)
            })
            .collect())
    }

    /// Walks `source_path` and pairs every file with its canonical path.
    ///
    /// Files without a volume number or without a recognized archive suffix
    /// are paired with `None`.
    pub async fn plan(&self) -> Result<Vec<(PathBuf, Option<PathBuf>)>> {
        Ok(self
            .resolve_targets()
            .await?
            .into_iter()
            .map(|(file, target)| (file, target.ok()))
            .collect())
    }

    /// Plans the run and hands every file to the action selected by `mode`.
    ///
    /// Renames happen one after the other in path order, so a collision with a
    /// file moved earlier in the same run is detected.
    pub async fn run(&self) -> Result<RenameReport> {
        let mut report = RenameReport::new(self.mode);
        let action = action::for_mode(self.mode);

        for (from, target) in self.resolve_targets().await? {
            let outcome = match target {
                Err(e) => {
                    warn!("skipping {}: {}", path_to_string_lossy(&from), e);
                    RenameOutcome::Skipped {
                        path: from,
                        reason: e.to_string(),
                    }
                }
                Ok(to) if to == from => RenameOutcome::Unchanged(from),
                Ok(to) => action.rename(&from, &to).await,
            };
            report.outcomes.push(outcome);
        }

        report.finished_at = chrono::Utc::now();
        debug!(
            "run finished: {} unchanged, {} planned, {} renamed, {} skipped, {} failed",
            report.unchanged(),
            report.planned(),
            report.renamed(),
            report.skipped(),
            report.failed()
        );
        Ok(report)
    }
}

impl SeiriConfigBuilder {
    fn validate(&self) -> std::result::Result<(), String> {
        if let Some(suffixes) = &self.archive_suffixes {
            crate::types::suffix_regex(suffixes)
                .map_err(|e| format!("Invalid archive_suffixes {:?}: {}", suffixes, e))?;
        }
        Ok(())
    }

    /// Builds the configuration and compiles its parsing options.
    pub fn build(&self) -> std::result::Result<SeiriConfig, SeiriConfigBuilderError> {
        let mut config = self.build_unchecked()?;
        config.options = ParseOptions::new(config.trace, &config.archive_suffixes)
            .map_err(|e| SeiriConfigBuilderError::ValidationError(e.to_string()))?;
        Ok(config)
    }
}

/// Runs the decomposition pipeline on a bare file name.
pub fn decompose_with(
    extractor: &NumberExtractor,
    name: &str,
    options: &ParseOptions,
) -> ParsedFields {
    let split = extractor.extract(name, options);
    let series = pretty(&clean_before(&split.before, options));
    let (title, suffix) = clean_after(&split.after, options);

    ParsedFields {
        directory: String::new(),
        series,
        number: split.number,
        title: pretty(&title),
        suffix,
    }
}

pub fn decompose_path_with(
    extractor: &NumberExtractor,
    path: &Path,
    options: &ParseOptions,
) -> ParsedFields {
    let (directory, name) = split_file_name(path);
    ParsedFields {
        directory,
        ..decompose_with(extractor, &name, options)
    }
}

pub fn canonical_name_with(
    extractor: &NumberExtractor,
    path: &Path,
    options: &ParseOptions,
) -> Result<String> {
    format_name(&decompose_path_with(extractor, path, options))
        .ok_or_else(|| Error::NoNumberFound(path_to_string_lossy(path)))
}

/// Decomposes a bare file name with the default options.
///
/// ```
/// let fields = seiri::decompose("Les Bidochon - tome 19.pdf");
/// assert_eq!(fields.series, "Les.Bidochon");
/// assert_eq!(fields.number, "19");
/// assert_eq!(fields.suffix, "pdf");
/// ```
pub fn decompose(name: &str) -> ParsedFields {
    decompose_with(&DEFAULT_EXTRACTOR, name, &DEFAULT_OPTIONS)
}

/// Decomposes the file name of `path` with the default options.
pub fn decompose_path(path: impl AsRef<Path>) -> ParsedFields {
    decompose_path_with(&DEFAULT_EXTRACTOR, path.as_ref(), &DEFAULT_OPTIONS)
}

/// The canonical name of `path` with the default options.
///
/// ```
/// assert_eq!(
///     seiri::canonical_name("XIII/XIII 01 - Le jour du soleil noir.cbr").unwrap(),
///     "XIII/XIII_01_Le.Jour.du.Soleil.Noir.cbr"
/// );
/// ```
pub fn canonical_name(path: impl AsRef<Path>) -> Result<String> {
    canonical_name_with(&DEFAULT_EXTRACTOR, path.as_ref(), &DEFAULT_OPTIONS)
}
