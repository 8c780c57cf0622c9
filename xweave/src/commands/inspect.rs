use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use xweave_codegen::{ToolkitManifest, assemble_model};
use xweave_markup::MarkupDocument;

use super::UnwrapOrExit;

#[derive(Args)]
pub struct InspectCommand {
    /// Markup file to inspect
    pub file: PathBuf,

    /// Path to the toolkit manifest (defaults to ./weft.toml)
    #[arg(short, long, default_value = "weft.toml")]
    pub registry: PathBuf,
}

impl InspectCommand {
    /// Run the inspect command
    pub fn run(&self) -> Result<()> {
        let manifest = ToolkitManifest::from_file(&self.registry).unwrap_or_exit();
        let doc = MarkupDocument::from_file(&self.file).unwrap_or_exit();
        let model = assemble_model(&doc, &manifest, &manifest.toolkit).unwrap_or_exit();

        println!("{}", serde_json::to_string_pretty(&model)?);
        Ok(())
    }
}
