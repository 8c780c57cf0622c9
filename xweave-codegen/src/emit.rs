//! Rendering of the generated code-behind source.

use xweave_model::BindingsModel;

use crate::{builder::CodeBuilder, registry::ToolkitConfig};

const HEADER: &str = "/* This file has been generated automatically. All user changes will be overwritten if the XAML is changed. */";

/// Render the code-behind partial class for a model.
///
/// Pure and byte-stable for a given model; the regeneration controller's
/// diff-before-write policy depends on that. Returns `None` when the model
/// has no code-behind identity, since no compilable class header can be
/// produced.
pub fn emit_code_behind(
    model: &BindingsModel,
    source_path: &str,
    toolkit: &ToolkitConfig,
) -> Option<String> {
    let identity = model.identity.as_ref()?;
    let has_elements = !model.named_elements.is_empty();

    let mut b = CodeBuilder::csharp();
    b.push_line(HEADER);
    b.push_line(&format!("using {};", toolkit.namespace));
    b.push_blank();
    b.push_line(&format!("namespace {} {{", identity.namespace));
    b.push_indent();
    b.push_line(&format!("[{}]", toolkit.marker));
    b.push_line(&format!(
        "public partial class {} : {} {{",
        identity.class_name, model.base_type
    ));
    b.push_indent();

    if has_elements {
        b.push_blank();
    }
    for element in &model.named_elements {
        b.push_line(&format!("public {} {};", element.resolved_type, element.name));
    }

    b.push_blank();
    b.push_line("private void InitializeComponent() {");
    b.push_indent();
    b.push_line(&format!("{}(this, \"{}\");", toolkit.loader, source_path));
    if has_elements {
        b.push_blank();
    }
    for element in &model.named_elements {
        b.push_line(&format!(
            "this.{} = ({})FindName(\"{}\");",
            element.name, element.resolved_type, element.name
        ));
    }
    b.push_dedent();
    b.push_line("}");

    if !model.event_bindings.is_empty() {
        b.push_blank();
        b.push_line("protected override bool ConnectEvent(object s, string e, string h) {");
        b.push_indent();
        for binding in &model.event_bindings {
            b.push_line(&format!(
                "if(s is {} && e==\"{}\" && h==\"{}\") {{",
                binding.owner_type, binding.event, binding.handler
            ));
            b.push_indent();
            b.push_line(&format!(
                "(({})s).{}+={};",
                binding.owner_type, binding.event, binding.handler
            ));
            b.push_line("return true;");
            b.push_dedent();
            b.push_line("}");
        }
        b.push_line("return false;");
        b.push_dedent();
        b.push_line("}");
    }

    b.push_dedent();
    b.push_line("}");
    b.push_dedent();
    b.push_line("}");
    Some(b.build())
}

#[cfg(test)]
mod tests {
    use xweave_model::{CodeBehindIdentity, EventBinding, NamedElement};

    use super::*;

    fn model() -> BindingsModel {
        BindingsModel {
            identity: CodeBehindIdentity::from_qualified("App.Views.Main"),
            base_type: "UserControl".to_string(),
            named_elements: vec![NamedElement {
                name: "Ok".to_string(),
                raw_tag: "Button".to_string(),
                resolved_type: "Button".to_string(),
            }],
            event_bindings: vec![EventBinding {
                owner_type: "Button".to_string(),
                event: "Click".to_string(),
                handler: "OnOk".to_string(),
            }],
        }
    }

    #[test]
    fn test_emission_is_byte_stable() {
        let toolkit = ToolkitConfig::default();
        let first = emit_code_behind(&model(), "Assets/Main.xaml", &toolkit).unwrap();
        let second = emit_code_behind(&model(), "Assets/Main.xaml", &toolkit).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_emits_connect_event_branch() {
        let toolkit = ToolkitConfig::default();
        let text = emit_code_behind(&model(), "Assets/Main.xaml", &toolkit).unwrap();
        assert!(text.contains("\t\t\tif(s is Button && e==\"Click\" && h==\"OnOk\") {"));
        assert!(text.contains("\t\t\t\t((Button)s).Click+=OnOk;"));
        assert!(text.contains("\t\t\treturn false;"));
    }

    #[test]
    fn test_no_identity_emits_nothing() {
        let mut m = model();
        m.identity = None;
        let toolkit = ToolkitConfig::default();
        assert!(emit_code_behind(&m, "Assets/Main.xaml", &toolkit).is_none());
    }

    #[test]
    fn test_no_events_omits_connect_event() {
        let mut m = model();
        m.event_bindings.clear();
        let toolkit = ToolkitConfig::default();
        let text = emit_code_behind(&m, "Assets/Main.xaml", &toolkit).unwrap();
        assert!(!text.contains("ConnectEvent"));
        assert!(text.contains("private void InitializeComponent() {"));
    }
}
