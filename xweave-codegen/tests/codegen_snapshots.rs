//! Snapshot tests for emitted code-behind sources.
//!
//! These tests verify that the generated C# matches expected output
//! byte-for-byte. Run `cargo insta review` to update snapshots when making
//! intentional changes.

use xweave_codegen::{ToolkitManifest, assemble_model, emit_code_behind};
use xweave_markup::MarkupDocument;

const REGISTRY: &str = r#"
[types."Noesis.UserControl"]

[types."Noesis.Grid"]

[types."Noesis.Button"]
events = ["Click"]

[types."Assets.UI.Controls.Circle"]
events = ["Tapped"]
"#;

/// Render one markup document through assembly and emission.
fn render(markup: &str, source_path: &str) -> Option<String> {
    let manifest = ToolkitManifest::from_str_with_filename(REGISTRY, "weft.toml").unwrap();
    let doc = MarkupDocument::new(markup, source_path);
    let model = assemble_model(&doc, &manifest, &manifest.toolkit).unwrap();
    emit_code_behind(&model, doc.source_path(), &manifest.toolkit)
}

#[test]
fn test_full_code_behind() {
    let text = render(
        r#"<UserControl x:Class="Assets.UI.Views.CircleButton" xmlns:ui="clr-namespace:Assets.UI.Controls">
    <Button x:Name="AcceptButton" Click="OnAccept"/>
    <ui:Circle x:Name="Indicator" Tapped="OnTapped"/>
</UserControl>"#,
        "Assets/UI/Views/CircleButton.xaml",
    )
    .expect("model should emit");

    insta::assert_snapshot!("full_code_behind", text);
}

#[test]
fn test_class_only_code_behind() {
    let text = render(
        r#"<UserControl x:Class="App.Shell"></UserControl>"#,
        "Assets/Shell.xaml",
    )
    .expect("identity alone should emit");

    insta::assert_snapshot!("class_only_code_behind", text);
}

#[test]
fn test_field_declarations_follow_document_order() {
    let text = render(
        r#"<Grid x:Class="App.Main">
    <Button x:Name="Second"/>
    <Button x:Name="First"/>
</Grid>"#,
        "Assets/Main.xaml",
    )
    .unwrap();

    let second = text.find("public Button Second;").unwrap();
    let first = text.find("public Button First;").unwrap();
    assert!(second < first);
}

#[test]
fn test_duplicate_names_emit_duplicate_fields() {
    let text = render(
        r#"<Grid x:Class="App.Main"><Button x:Name="B"/><Button x:Name="B"/></Grid>"#,
        "Assets/Main.xaml",
    )
    .unwrap();

    assert_eq!(text.matches("public Button B;").count(), 2);
    assert_eq!(text.matches("this.B = (Button)FindName(\"B\");").count(), 2);
}

#[test]
fn test_empty_markup_emits_nothing() {
    assert!(render("<Grid></Grid>", "Assets/Plain.xaml").is_none());
}
