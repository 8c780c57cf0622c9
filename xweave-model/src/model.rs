//! The assembled bindings model.
//!
//! A [`BindingsModel`] captures everything one markup document contributes
//! to its generated code-behind: the target class identity, the base type,
//! the named elements, and the declared event bindings.

use serde::Serialize;

/// A markup node carrying an explicit `x:Name` declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NamedElement {
    /// The declared element name; becomes the generated field name.
    pub name: String,
    /// The owning element tag exactly as written (e.g. `local:Circle`).
    pub raw_tag: String,
    /// The tag after alias substitution; becomes the generated field type.
    pub resolved_type: String,
}

/// The code-behind class the markup targets, split from `x:Class`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodeBehindIdentity {
    /// Everything before the last `.` of the qualified name.
    pub namespace: String,
    /// Everything after the last `.` of the qualified name.
    pub class_name: String,
}

impl CodeBehindIdentity {
    /// Split a fully-qualified class name on its last `.`.
    ///
    /// Returns `None` for a name with no namespace separator; the markup
    /// layer reports that as malformed input.
    pub fn from_qualified(qualified: &str) -> Option<Self> {
        let (namespace, class_name) = qualified.rsplit_once('.')?;
        Some(Self {
            namespace: namespace.to_string(),
            class_name: class_name.to_string(),
        })
    }

    /// The fully-qualified class name, `namespace.class_name`.
    pub fn qualified_name(&self) -> String {
        format!("{}.{}", self.namespace, self.class_name)
    }
}

/// A declared association between an element's event and a handler method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventBinding {
    /// Alias-resolved type of the declaring element.
    pub owner_type: String,
    /// The event member name (the attribute name).
    pub event: String,
    /// The handler method name (the attribute value).
    pub handler: String,
}

/// Everything one markup document contributes to generated code.
#[derive(Debug, Clone, Serialize)]
pub struct BindingsModel {
    /// Target class identity; absent when the markup declares no `x:Class`.
    pub identity: Option<CodeBehindIdentity>,
    /// Root element tag; the generated class's base type.
    pub base_type: String,
    /// Named elements in document order.
    pub named_elements: Vec<NamedElement>,
    /// Event bindings in document pre-order, then attribute order.
    pub event_bindings: Vec<EventBinding>,
}

impl BindingsModel {
    /// A model warrants no output iff it has no named elements, no event
    /// bindings, and no code-behind identity.
    pub fn is_empty(&self) -> bool {
        self.named_elements.is_empty() && self.event_bindings.is_empty() && self.identity.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_splits_on_last_dot() {
        let identity = CodeBehindIdentity::from_qualified("Assets.UI.Views.CircleButton").unwrap();
        assert_eq!(identity.namespace, "Assets.UI.Views");
        assert_eq!(identity.class_name, "CircleButton");
        assert_eq!(identity.qualified_name(), "Assets.UI.Views.CircleButton");
    }

    #[test]
    fn test_identity_rejects_unqualified_name() {
        assert!(CodeBehindIdentity::from_qualified("CircleButton").is_none());
    }

    #[test]
    fn test_model_emptiness() {
        let mut model = BindingsModel {
            identity: None,
            base_type: "Grid".to_string(),
            named_elements: Vec::new(),
            event_bindings: Vec::new(),
        };
        assert!(model.is_empty());

        model.identity = CodeBehindIdentity::from_qualified("App.View");
        assert!(!model.is_empty());

        model.identity = None;
        model.event_bindings.push(EventBinding {
            owner_type: "Button".to_string(),
            event: "Click".to_string(),
            handler: "OnClick".to_string(),
        });
        assert!(!model.is_empty());
    }
}
