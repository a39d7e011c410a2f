//! The generator chain.
//!
//! Each generator consumes resolved package metadata and scaffolds one
//! concern. All of them share the same idempotence guarantee: an existing
//! destination file is never overwritten, so a developer's manual edits to a
//! generated artifact survive every re-run, and re-running after a partial
//! failure simply completes the remainder.

use std::fs;
use std::path::Path;

use crate::application::error::ApplicationError;
use crate::application::ports::Reporter;
use crate::domain::PackageMetadata;
use crate::error::GraftResult;

mod mapping;
mod serializer;
mod skeleton;
pub mod templates;

pub use mapping::MappingGenerator;
pub use serializer::SerializerGenerator;
pub use skeleton::SkeletonGenerator;

/// Files touched by one generator invocation.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct Outcome {
    /// Artifacts written by this run.
    pub written: usize,
    /// Artifacts left alone because they already existed.
    pub skipped: usize,
}

impl Outcome {
    pub fn merge(&mut self, other: Outcome) {
        self.written += other.written;
        self.skipped += other.skipped;
    }
}

/// One scaffolding concern.
///
/// Implementations never fail for ordinary "nothing to do" conditions: a
/// package without mapping files yields an empty [`Outcome`]. Filesystem
/// write failures propagate.
pub trait Generator: Send + Sync {
    /// Short human label used in progress output.
    fn description(&self) -> &'static str;

    /// Scaffold this generator's artifacts for one package.
    fn generate(&self, metadata: &PackageMetadata, reporter: &dyn Reporter)
    -> GraftResult<Outcome>;
}

pub(crate) enum WriteStatus {
    Written,
    Skipped,
}

/// Write `content` to `path` unless the file already exists, creating parent
/// directories as needed. This is the single choke point for the
/// skip-if-exists policy.
pub(crate) fn write_once(path: &Path, content: &str) -> Result<WriteStatus, ApplicationError> {
    if path.exists() {
        return Ok(WriteStatus::Skipped);
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| ApplicationError::Write {
            path: parent.to_path_buf(),
            source: e,
        })?;
    }

    fs::write(path, content).map_err(|e| ApplicationError::Write {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(WriteStatus::Written)
}

/// [`write_once`] plus the ` + name` / ` ~ name` progress line and outcome
/// bookkeeping shared by every generator.
pub(crate) fn emit(
    outcome: &mut Outcome,
    reporter: &dyn Reporter,
    label: &str,
    path: &Path,
    content: &str,
) -> Result<(), ApplicationError> {
    match write_once(path, content)? {
        WriteStatus::Written => {
            reporter.report(&format!("   + {label}"));
            outcome.written += 1;
        }
        WriteStatus::Skipped => {
            reporter.report(&format!("   ~ {label}"));
            outcome.skipped += 1;
        }
    }
    Ok(())
}
