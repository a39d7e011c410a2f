//! Implementation of the `graft generate` command.
//!
//! Responsibility: translate CLI arguments into a `GenerateConfig`, wire the
//! manifest registry into the core service, and display results. No
//! generation logic lives here.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use graft_adapters::ManifestRegistry;
use graft_core::{application::GenerateService, domain::GenerateConfig};

use crate::{
    cli::{GenerateArgs, GlobalArgs},
    error::{CliError, CliResult},
    output::{ConsoleReporter, OutputManager},
};

/// Execute the `graft generate` command.
///
/// Dispatch sequence:
/// 1. Resolve and validate the destination root
/// 2. Build the run configuration (namespace validation happens here)
/// 3. Load the package manifest
/// 4. Run the generator chain via `GenerateService`
/// 5. Print the success marker and summary
#[instrument(skip_all, fields(packages = args.packages.len()))]
pub fn execute(args: GenerateArgs, global: GlobalArgs, output: OutputManager) -> CliResult<()> {
    // 1. Destination root: must already exist, resolved to an absolute path.
    let dest = resolve_dest(args.dest.as_deref())?;
    debug!(dest = %dest.display(), "destination resolved");

    // 2. Run configuration. A malformed namespace aborts before any
    //    generation.
    let config = GenerateConfig::new(&dest, &args.namespace, &args.namespace_prefix)
        .map_err(|e| CliError::Core(e.into()))?;

    // 3. Package enumeration.
    let registry = ManifestRegistry::load(&args.manifest).map_err(|e| CliError::Core(e.into()))?;

    // 4. Run the chain.
    if !args.packages.is_empty() {
        output.header(&format!(
            "Grafting extensions for {} package(s)...",
            args.packages.len()
        ))?;
    }
    info!(manifest = %args.manifest.display(), "generation started");

    let reporter = ConsoleReporter::new(&output);
    let service = GenerateService::new(Box::new(registry));
    let summary = service
        .run(&args.packages, &config, &reporter)
        .map_err(CliError::Core)?;

    // 5. Success marker + summary.
    output.success("done!")?;
    if !global.quiet && !args.packages.is_empty() {
        output.print(&format!(
            "{} file(s) written, {} already up to date",
            summary.written, summary.skipped
        ))?;
    }

    info!(?summary, "generation completed");
    Ok(())
}

/// Resolve `--dest` to an absolute existing directory.
///
/// Defaults to the current directory when omitted; a missing path is a
/// configuration error surfaced before anything is generated.
fn resolve_dest(dest: Option<&Path>) -> CliResult<PathBuf> {
    match dest {
        Some(path) => path
            .canonicalize()
            .map_err(|_| CliError::DestinationNotFound {
                path: path.to_path_buf(),
            }),
        None => Ok(std::env::current_dir()?),
    }
}
