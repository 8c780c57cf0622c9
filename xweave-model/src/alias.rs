//! Namespace aliases and type-tag substitution.

use serde::Serialize;

/// A markup namespace alias, declared as
/// `xmlns:alias="clr-namespace:Target.Namespace"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NamespaceAlias {
    /// The short prefix used in type tags (e.g. `local`).
    pub alias: String,
    /// The namespace the prefix expands to (e.g. `MyApp.Controls`).
    pub namespace: String,
}

impl NamespaceAlias {
    pub fn new(alias: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self {
            alias: alias.into(),
            namespace: namespace.into(),
        }
    }
}

/// Replace an `alias:LocalType` prefix with the aliased namespace.
///
/// The first declared alias whose `alias:` prefix matches wins, and at most
/// one substitution is applied. A tag with no matching alias is returned
/// unchanged and is assumed to live in the toolkit's default namespace.
///
/// ```
/// use xweave_model::{NamespaceAlias, substitute_alias};
///
/// let aliases = [NamespaceAlias::new("local", "MyApp.Controls")];
/// assert_eq!(substitute_alias("local:Circle", &aliases), "MyApp.Controls.Circle");
/// assert_eq!(substitute_alias("Button", &aliases), "Button");
/// ```
pub fn substitute_alias(tag: &str, aliases: &[NamespaceAlias]) -> String {
    for ns in aliases {
        if let Some(local) = tag.strip_prefix(&format!("{}:", ns.alias)) {
            return format!("{}.{}", ns.namespace, local);
        }
    }
    tag.to_string()
}
