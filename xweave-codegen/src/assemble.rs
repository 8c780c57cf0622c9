//! Model assembly: compose the extraction passes into one [`BindingsModel`].

use xweave_markup::MarkupDocument;
use xweave_model::{BindingsModel, substitute_alias};

use crate::{adapters::TypeRegistry, error::Result, events, registry::ToolkitConfig};

/// Run all extraction passes over one document and assemble the result.
///
/// Any scan or parse failure aborts the whole assembly; there is no partial
/// model. Emptiness of the returned model decides whether generation
/// produces, keeps, or deletes the target file.
pub fn assemble_model(
    doc: &MarkupDocument,
    registry: &dyn TypeRegistry,
    toolkit: &ToolkitConfig,
) -> Result<BindingsModel> {
    let aliases = doc.aliases();

    let mut named_elements = doc.named_elements()?;
    for element in &mut named_elements {
        element.resolved_type = substitute_alias(&element.raw_tag, &aliases);
    }

    let base_type = doc.base_type()?;
    let identity = doc.code_behind()?;

    let tree = doc.tree()?;
    let event_bindings = events::extract_events(
        &tree,
        &aliases,
        registry,
        &toolkit.namespace,
        doc.source_path(),
    )?;

    Ok(BindingsModel {
        identity,
        base_type,
        named_elements,
        event_bindings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{ToolkitManifest, TypeDecl};

    fn manifest(types: &[(&str, &[&str])]) -> ToolkitManifest {
        let mut manifest = ToolkitManifest::default();
        for (name, events) in types {
            manifest.types.insert(
                name.to_string(),
                TypeDecl {
                    events: events.iter().map(|e| e.to_string()).collect(),
                },
            );
        }
        manifest
    }

    #[test]
    fn test_assembles_full_model() {
        let registry = manifest(&[
            ("Noesis.UserControl", &[]),
            ("Noesis.Button", &["Click"]),
            ("App.UI.Circle", &[]),
        ]);
        let doc = MarkupDocument::new(
            r#"<UserControl x:Class="App.Views.Main" xmlns:ui="clr-namespace:App.UI">
                <Button x:Name="Ok" Click="OnOk"/>
                <ui:Circle x:Name="Dot"/>
            </UserControl>"#,
            "Assets/Main.xaml",
        );

        let model = assemble_model(&doc, &registry, &registry.toolkit).unwrap();

        assert_eq!(model.base_type, "UserControl");
        assert_eq!(model.identity.as_ref().unwrap().class_name, "Main");
        assert_eq!(model.named_elements.len(), 2);
        assert_eq!(model.named_elements[0].resolved_type, "Button");
        assert_eq!(model.named_elements[1].resolved_type, "App.UI.Circle");
        assert_eq!(model.event_bindings.len(), 1);
        assert!(!model.is_empty());
    }

    #[test]
    fn test_markup_without_bindings_is_empty() {
        let registry = manifest(&[("Noesis.Grid", &[])]);
        let doc = MarkupDocument::new("<Grid></Grid>", "Assets/Plain.xaml");
        let model = assemble_model(&doc, &registry, &registry.toolkit).unwrap();
        assert!(model.is_empty());
    }
}
