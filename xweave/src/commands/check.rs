use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use xweave_codegen::{ToolkitManifest, assemble_model};
use xweave_markup::MarkupDocument;

use super::UnwrapOrExit;

#[derive(Args)]
pub struct CheckCommand {
    /// Markup files to validate
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Path to the toolkit manifest (defaults to ./weft.toml)
    #[arg(short, long, default_value = "weft.toml")]
    pub registry: PathBuf,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let manifest = ToolkitManifest::from_file(&self.registry).unwrap_or_exit();

        for file in &self.files {
            let doc = MarkupDocument::from_file(file).unwrap_or_exit();
            let model = assemble_model(&doc, &manifest, &manifest.toolkit).unwrap_or_exit();

            println!("✓ {} is valid", doc.source_path());
            println!("  base type: {}", model.base_type);
            match &model.identity {
                Some(identity) => println!("  code-behind: {}", identity.qualified_name()),
                None => println!("  code-behind: none"),
            }
            println!("  named elements: {}", model.named_elements.len());
            println!("  event bindings: {}", model.event_bindings.len());
        }
        Ok(())
    }
}
