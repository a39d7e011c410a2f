//! Run-wide generation configuration.
//!
//! [`GenerateConfig`] is built once per run from the destination root, the
//! namespace template and the namespace prefix, and passed by reference into
//! metadata resolution. It is never mutated afterwards.

use std::path::Path;

use crate::domain::error::DomainError;

/// Separator between namespace segments in package identities and templates.
pub const NAMESPACE_SEPARATOR: char = '.';

/// Placeholder token replaced by the package vendor during derivation.
///
/// The substitution is literal string replacement: every occurrence of the
/// token is replaced, and vendors must not contain the token themselves.
pub const VENDOR_TOKEN: &str = ":vendor";

/// Namespace template used when the caller supplies none.
pub const DEFAULT_NAMESPACE_TEMPLATE: &str = "Application.:vendor";

/// Immutable configuration for one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateConfig {
    /// Destination root joined with the namespace template (path form,
    /// `:vendor` still unsubstituted).
    application_dir: String,
    /// The raw namespace template, e.g. `Application.:vendor`.
    namespace: String,
    /// Normalised namespace prefix: empty, or ending in exactly one separator.
    namespace_prefix: String,
}

impl GenerateConfig {
    /// Build a configuration from CLI-level inputs.
    ///
    /// `dest` is trusted to exist; the CLI resolves and checks it before the
    /// core is reached. The namespace template is validated here: each
    /// `.`-separated segment must be non-empty ASCII-alphanumeric or the
    /// literal [`VENDOR_TOKEN`].
    pub fn new(
        dest: &Path,
        namespace_template: &str,
        namespace_prefix: &str,
    ) -> Result<Self, DomainError> {
        validate_namespace_template(namespace_template)?;

        let application_dir = format!(
            "{}{}{}",
            dest.display(),
            std::path::MAIN_SEPARATOR,
            namespace_template.replace(NAMESPACE_SEPARATOR, std::path::MAIN_SEPARATOR_STR),
        );

        Ok(Self {
            application_dir,
            namespace: namespace_template.to_owned(),
            namespace_prefix: normalize_prefix(namespace_prefix),
        })
    }

    /// Destination directory template, `:vendor` not yet substituted.
    pub fn application_dir(&self) -> &str {
        &self.application_dir
    }

    /// The namespace template as supplied.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Normalised namespace prefix (`""` or `"App."`-shaped).
    pub fn namespace_prefix(&self) -> &str {
        &self.namespace_prefix
    }

    /// First segment of the namespace template, e.g. `Application`.
    pub fn application_root(&self) -> &str {
        self.namespace
            .split(NAMESPACE_SEPARATOR)
            .next()
            .unwrap_or(&self.namespace)
    }
}

/// Check the namespace template against the segment pattern.
fn validate_namespace_template(template: &str) -> Result<(), DomainError> {
    let valid = !template.is_empty()
        && template.split(NAMESPACE_SEPARATOR).all(|segment| {
            segment == VENDOR_TOKEN
                || (!segment.is_empty() && segment.chars().all(|c| c.is_ascii_alphanumeric()))
        });

    if valid {
        Ok(())
    } else {
        Err(DomainError::InvalidNamespaceTemplate {
            template: template.to_owned(),
        })
    }
}

/// Trim trailing separators, then re-append exactly one for non-empty input.
fn normalize_prefix(prefix: &str) -> String {
    let trimmed = prefix.trim_end_matches(NAMESPACE_SEPARATOR);
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("{trimmed}{NAMESPACE_SEPARATOR}")
    }
}
