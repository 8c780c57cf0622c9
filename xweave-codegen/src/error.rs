use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Result type for codegen operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Markup(#[from] xweave_markup::Error),

    #[error("unknown type '{resolved}' for element <{tag}> in '{path}'")]
    #[diagnostic(
        code(xweave::unknown_type),
        help("declare the type and its events in the toolkit manifest")
    )]
    UnknownType {
        tag: String,
        resolved: String,
        path: String,
    },

    #[error("store operation failed for '{path}'")]
    #[diagnostic(code(xweave::store))]
    Store {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read toolkit manifest '{path}'")]
    #[diagnostic(help("pass --registry to point at a toolkit manifest"))]
    ManifestIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse toolkit manifest '{path}'")]
    #[diagnostic(code(xweave::manifest))]
    Manifest {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

impl From<Box<xweave_markup::Error>> for Box<Error> {
    fn from(err: Box<xweave_markup::Error>) -> Self {
        Box::new(Error::Markup(*err))
    }
}
