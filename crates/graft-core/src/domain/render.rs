//! Placeholder rendering and name derivation helpers.
//!
//! Rendering is deliberately a pure string-substitution function, not a
//! template engine: `{{ key }}` markers are replaced literally, every
//! occurrence, nothing else is interpreted.

use crate::domain::config::NAMESPACE_SEPARATOR;

/// Substitute `{{ key }}` placeholders in `template`.
pub fn render(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = template.to_owned();
    for (key, value) in vars {
        out = out.replace(&format!("{{{{ {key} }}}}"), value);
    }
    out
}

/// Snake-case a type name: underscore before each uppercase letter except
/// the first, then lowercase. `BlockEntity` → `block_entity`.
pub fn snake_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for (i, c) in name.chars().enumerate() {
        if c.is_ascii_uppercase() {
            if i > 0 {
                out.push('_');
            }
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// Convert a dot-separated namespace to the form used inside generated
/// source files and descriptors.
pub fn source_namespace(namespace: &str) -> String {
    namespace.replace(NAMESPACE_SEPARATOR, "\\")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_replaces_every_occurrence() {
        let rendered = render(
            "class {{ name }} extends Base{{ name }}",
            &[("name", "Block")],
        );
        assert_eq!(rendered, "class Block extends BaseBlock");
    }

    #[test]
    fn render_ignores_unknown_placeholders() {
        assert_eq!(render("{{ missing }}", &[("name", "x")]), "{{ missing }}");
    }

    #[test]
    fn render_substitutes_multiple_keys() {
        let rendered = render(
            "{{ namespace }}\\{{ name }}",
            &[("namespace", "Application\\Sonata"), ("name", "Page")],
        );
        assert_eq!(rendered, "Application\\Sonata\\Page");
    }

    #[test]
    fn snake_case_splits_on_uppercase() {
        assert_eq!(snake_case("BlockEntity"), "block_entity");
        assert_eq!(snake_case("Page"), "page");
        assert_eq!(snake_case("already_snake"), "already_snake");
        assert_eq!(snake_case(""), "");
    }

    #[test]
    fn source_namespace_uses_backslashes() {
        assert_eq!(
            source_namespace("Application.Sonata.AcmeBundle"),
            "Application\\Sonata\\AcmeBundle"
        );
    }
}
