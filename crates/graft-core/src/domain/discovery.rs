//! Recursive, suffix-filtered file discovery.
//!
//! Discovery never fails: a missing or unreadable directory yields an empty
//! result, and unreadable entries inside an otherwise readable tree are
//! skipped. Results are sorted by file name because platform directory order
//! is not stable.

use std::path::{Path, PathBuf};

use tracing::trace;
use walkdir::WalkDir;

/// A file found by [`find_by_suffix`]. Transient, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredFile {
    pub absolute_path: PathBuf,
    pub base_name: String,
}

/// Recursively collect every file under `dir` whose name ends with one of
/// `suffixes`.
pub fn find_by_suffix(dir: &Path, suffixes: &[&str]) -> Vec<DiscoveredFile> {
    let mut found: Vec<DiscoveredFile> = WalkDir::new(dir)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .filter_map(|entry| {
            let base_name = entry.file_name().to_str()?.to_owned();
            suffixes
                .iter()
                .any(|suffix| base_name.ends_with(suffix))
                .then(|| DiscoveredFile {
                    absolute_path: entry.path().to_path_buf(),
                    base_name,
                })
        })
        .collect();

    found.sort_by(|a, b| a.base_name.cmp(&b.base_name));
    trace!(dir = %dir.display(), count = found.len(), "discovery finished");
    found
}
