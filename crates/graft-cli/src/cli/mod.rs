//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use graft_core::domain::DEFAULT_NAMESPACE_TEMPLATE;

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "graft",
    bin_name = "graft",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} Application-space extension scaffolding",
    long_about = "Graft derives an application-space location for \
                  convention-named packages and scaffolds extension \
                  skeletons for their data model without touching them.",
    after_help = "EXAMPLES:\n\
        \x20 graft generate SonataAcmeBundle --dest src\n\
        \x20 graft generate SonataAcmeBundle --namespace App.:vendor --namespace-prefix App\n\
        \x20 graft generate                       # list extendable packages\n\
        \x20 graft completions bash > /usr/share/bash-completion/completions/graft",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate extension skeletons for installed packages.
    #[command(
        visible_alias = "g",
        about = "Generate extension skeletons",
        after_help = "EXAMPLES:\n\
            \x20 graft generate SonataAcmeBundle\n\
            \x20 graft generate SonataAcmeBundle SonataPageBundle --dest src\n\
            \x20 graft generate SonataAcmeBundle --namespace-prefix App"
    )]
    Generate(GenerateArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 graft completions bash > ~/.local/share/bash-completion/completions/graft\n\
            \x20 graft completions zsh  > ~/.zfunc/_graft\n\
            \x20 graft completions fish > ~/.config/fish/completions/graft.fish"
    )]
    Completions(CompletionsArgs),
}

// ── generate ──────────────────────────────────────────────────────────────────

/// Arguments for `graft generate`.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Packages to extend, by short name.  With no names, the extendable
    /// installed packages are listed instead.
    #[arg(value_name = "PACKAGE", help = "Package name(s) to extend")]
    pub packages: Vec<String>,

    /// Destination root the application tree is created under.
    #[arg(
        short = 'd',
        long = "dest",
        value_name = "DIR",
        help = "Base folder the application tree is created in (must exist; default: current directory)"
    )]
    pub dest: Option<PathBuf>,

    /// Namespace template for the generated classes.
    #[arg(
        long = "namespace",
        value_name = "NAMESPACE",
        default_value = DEFAULT_NAMESPACE_TEMPLATE,
        help = "Namespace template (segments of alphanumerics or ':vendor')"
    )]
    pub namespace: String,

    /// Namespace prefix prepended to every derived extension namespace.
    #[arg(
        long = "namespace-prefix",
        value_name = "PREFIX",
        default_value = "",
        hide_default_value = true,
        help = "Namespace prefix for the generated classes"
    )]
    pub namespace_prefix: String,

    /// Package manifest enumerating installed packages.
    #[arg(
        short = 'm',
        long = "manifest",
        value_name = "FILE",
        default_value = "packages.toml",
        help = "Installed-package manifest"
    )]
    pub manifest: PathBuf,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `graft completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── tests ─────────────────────────────────────────────────────────────────────
