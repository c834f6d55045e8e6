//! Directory walk and per-file TOML → YAML conversion.
//!
//! Each candidate file is handled on its own: read, decode, encode, write the
//! sibling `.yaml`, then delete the source. A failure at any step leaves the
//! source in place and is recorded in the [`Report`]; the walk carries on.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{error, info, warn};

use crate::error::{Error, Result};
use crate::options::{Options, SOURCE_EXTENSION, TARGET_EXTENSION};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    pub source: PathBuf,
    pub target: PathBuf,
}

#[derive(Debug)]
pub struct Failure {
    pub path: PathBuf,
    pub error: Error,
}

/// Outcome of a [`convert_dir`] run.
#[derive(Debug, Default)]
pub struct Report {
    pub converted: Vec<Conversion>,
    pub failed: Vec<Failure>,
}

impl Report {
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}

fn source_suffix() -> String {
    format!(".{}", SOURCE_EXTENSION)
}

/// True when the file name ends in `.toml`. Names that are not valid UTF-8
/// never match.
pub fn is_candidate(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.ends_with(&source_suffix()))
}

/// Destination for `source`: the trailing `.toml` of the file name replaced
/// by `.yaml`. Parent directories are never rewritten.
pub fn target_path(source: &Path) -> PathBuf {
    let suffix = source_suffix();
    match source.file_name().and_then(|n| n.to_str()) {
        Some(name) if name.ends_with(&suffix) => {
            let stem = &name[..name.len() - suffix.len()];
            source.with_file_name(format!("{}.{}", stem, TARGET_EXTENSION))
        }
        _ => source.with_extension(TARGET_EXTENSION),
    }
}

/// Convert one TOML file and, unless [`Options::keep_source`] is set, delete
/// it. Returns the path written.
///
/// The destination is written in place (no temporary file and rename), and
/// the source is removed right after the write returns.
pub fn convert_file(source: &Path, options: &Options) -> Result<PathBuf> {
    let text = fs::read_to_string(source)?;
    let yaml = crate::convert_str(&text)?;
    let target = target_path(source);
    fs::write(&target, yaml)?;
    info!("converted {} to {}", source.display(), target.display());
    if !options.keep_source {
        fs::remove_file(source)?;
        info!("deleted original TOML file {}", source.display());
    }
    Ok(target)
}

/// Walk `root` and convert every `.toml` file below it.
///
/// Files in a directory are handled before its subdirectories, both in file
/// name order. Symlinked directories are not followed. A missing or
/// unreadable root produces an empty report.
pub fn convert_dir(root: &Path, options: &Options) -> Report {
    let mut report = Report::default();
    let mut pending = vec![root.to_path_buf()];
    while let Some(dir) = pending.pop() {
        let (files, subdirs) = match list_dir(&dir) {
            Ok(listing) => listing,
            Err(e) => {
                warn!("skipping unreadable directory {}: {}", dir.display(), e);
                continue;
            }
        };
        for path in files {
            if !is_candidate(&path) {
                continue;
            }
            info!("found TOML file {}", path.display());
            match convert_file(&path, options) {
                Ok(target) => report.converted.push(Conversion {
                    source: path,
                    target,
                }),
                Err(e) => {
                    if e.is_decode() {
                        warn!("error decoding TOML file {}: {}", path.display(), e);
                    } else {
                        error!("unexpected error processing {}: {}", path.display(), e);
                    }
                    report.failed.push(Failure { path, error: e });
                }
            }
        }
        // Reversed so the stack pops them in name order.
        pending.extend(subdirs.into_iter().rev());
    }
    report
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EntryKind {
    Dir,
    File,
    Other,
}

fn list_dir(dir: &Path) -> std::io::Result<(Vec<PathBuf>, Vec<PathBuf>)> {
    let entries = fs::read_dir(dir)?.map(|entry| -> std::io::Result<(PathBuf, EntryKind)> {
        let entry = entry?;
        let path = entry.path();
        let file_type = entry.file_type().map_err(|e| {
            std::io::Error::new(e.kind(), format!("{}: {}", path.display(), e))
        })?;
        let kind = if file_type.is_dir() {
            EntryKind::Dir
        } else if file_type.is_file() || (file_type.is_symlink() && path.is_file()) {
            EntryKind::File
        } else {
            EntryKind::Other
        };
        Ok((path, kind))
    });
    Ok(partition_entries(dir, entries))
}

/// Split directory entries into sorted files and subdirectories. An entry
/// that cannot be read is logged and skipped without affecting its siblings.
fn partition_entries<I>(dir: &Path, entries: I) -> (Vec<PathBuf>, Vec<PathBuf>)
where
    I: IntoIterator<Item = std::io::Result<(PathBuf, EntryKind)>>,
{
    let mut files = Vec::new();
    let mut subdirs = Vec::new();
    for entry in entries {
        match entry {
            Ok((path, EntryKind::Dir)) => subdirs.push(path),
            Ok((path, EntryKind::File)) => files.push(path),
            Ok((_, EntryKind::Other)) => {}
            Err(e) => warn!("skipping unreadable entry in {}: {}", dir.display(), e),
        }
    }
    files.sort();
    subdirs.sort();
    (files, subdirs)
}
