use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use xweave_codegen::{
    Generator, Outcome, ToolkitManifest,
    adapters::{DiskStore, MarkupProvider, NoUserImplementations},
};

use super::UnwrapOrExit;

#[derive(Args)]
pub struct GenerateCommand {
    /// Markup files to generate code-behind for
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Path to the toolkit manifest (defaults to ./weft.toml)
    #[arg(short, long, default_value = "weft.toml")]
    pub registry: PathBuf,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let manifest = ToolkitManifest::from_file(&self.registry).unwrap_or_exit();
        let store = DiskStore;
        let probe = NoUserImplementations;
        let generator = Generator::new(&manifest, &probe, &store, manifest.toolkit.clone());

        // Each document is one independent generation pass.
        for file in &self.files {
            let doc = store.load(file).unwrap_or_exit();
            if self.dry_run {
                self.preview_one(&generator, &doc);
            } else {
                self.generate_one(&generator, &doc);
            }
        }
        Ok(())
    }

    fn preview_one(&self, generator: &Generator, doc: &xweave_markup::MarkupDocument) {
        match generator.preview(doc).unwrap_or_exit() {
            Some(text) => {
                println!("// {}", Generator::target_path(doc.source_path()).display());
                print!("{text}");
            }
            None => println!("{}: nothing to generate", doc.source_path()),
        }
    }

    fn generate_one(&self, generator: &Generator, doc: &xweave_markup::MarkupDocument) {
        match generator.generate(doc).unwrap_or_exit() {
            Outcome::Written(path) => println!("  + {}", path.display()),
            Outcome::UpToDate(path) => println!("  = {} (up to date)", path.display()),
            Outcome::Deleted(path) => println!("  - {} (deleted)", path.display()),
            Outcome::NothingToGenerate => {
                println!("  . {} (nothing to generate)", doc.source_path());
            }
            Outcome::NoCodeBehind => {
                println!(
                    "  ! {} declares bindings but no x:Class, skipped",
                    doc.source_path()
                );
            }
            Outcome::SkippedUserImplementation => {
                println!(
                    "  ! {} has a hand-written implementation, skipped",
                    doc.source_path()
                );
            }
        }
    }
}
