use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for markup operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Encapsulates the markup text and its logical path, reducing parameter
/// passing in error factory functions.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    path: String,
}

impl SourceContext {
    /// Create a new source context.
    pub fn new(src: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            path: path.into(),
        }
    }

    /// Get the markup text.
    pub fn src(&self) -> &str {
        &self.src
    }

    /// Get the logical source path.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.path, self.src.clone())
    }

    /// Create a missing-root-element error.
    pub fn missing_root_error(&self) -> Box<Error> {
        Box::new(Error::MissingRootElement {
            src: self.named_source(),
        })
    }

    /// Create a dangling-name-attribute error.
    pub fn dangling_name_error(&self, name: impl Into<String>, span: SourceSpan) -> Box<Error> {
        Box::new(Error::DanglingNameAttribute {
            src: self.named_source(),
            span,
            name: name.into(),
        })
    }

    /// Create an unqualified-class-name error.
    pub fn unqualified_class_error(&self, class: impl Into<String>, span: SourceSpan) -> Box<Error> {
        Box::new(Error::UnqualifiedClassName {
            src: self.named_source(),
            span,
            class: class.into(),
        })
    }

    /// Create an unexpected-end error at the given offset.
    pub fn unexpected_end_error(&self, expected: impl Into<String>, at: usize) -> Box<Error> {
        Box::new(Error::UnexpectedEnd {
            src: self.named_source(),
            span: SourceSpan::from((at.min(self.src.len().saturating_sub(1)), 1)),
            expected: expected.into(),
        })
    }

    /// Create a mismatched-closing-tag error.
    pub fn mismatched_tag_error(
        &self,
        expected: impl Into<String>,
        found: impl Into<String>,
        span: SourceSpan,
    ) -> Box<Error> {
        Box::new(Error::MismatchedClosingTag {
            src: self.named_source(),
            span,
            expected: expected.into(),
            found: found.into(),
        })
    }

    /// Create a malformed-tag error.
    pub fn malformed_error(&self, message: impl Into<String>, span: SourceSpan) -> Box<Error> {
        Box::new(Error::Malformed {
            src: self.named_source(),
            span,
            message: message.into(),
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no root element found")]
    #[diagnostic(
        code(xweave::missing_root),
        help("the markup must contain at least one element, e.g. <Grid ...>")
    )]
    MissingRootElement {
        #[source_code]
        src: NamedSource<String>,
    },

    #[error("x:Name=\"{name}\" is not enclosed in an element")]
    #[diagnostic(
        code(xweave::dangling_name),
        help("x:Name declarations are only valid as attributes of an element")
    )]
    DanglingNameAttribute {
        #[source_code]
        src: NamedSource<String>,
        #[label("no preceding '<' for this declaration")]
        span: SourceSpan,
        name: String,
    },

    #[error("x:Class=\"{class}\" has no namespace")]
    #[diagnostic(
        code(xweave::unqualified_class),
        help("the code-behind class must be fully qualified, e.g. x:Class=\"MyApp.Views.MainView\"")
    )]
    UnqualifiedClassName {
        #[source_code]
        src: NamedSource<String>,
        #[label("missing a '.' separator")]
        span: SourceSpan,
        class: String,
    },

    #[error("unexpected end of markup while looking for {expected}")]
    #[diagnostic(code(xweave::unexpected_end))]
    UnexpectedEnd {
        #[source_code]
        src: NamedSource<String>,
        #[label("markup ends here")]
        span: SourceSpan,
        expected: String,
    },

    #[error("mismatched closing tag: expected </{expected}>, found </{found}>")]
    #[diagnostic(code(xweave::mismatched_tag))]
    MismatchedClosingTag {
        #[source_code]
        src: NamedSource<String>,
        #[label("closes <{expected}>")]
        span: SourceSpan,
        expected: String,
        found: String,
    },

    #[error("{message}")]
    #[diagnostic(code(xweave::malformed))]
    Malformed {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: SourceSpan,
        message: String,
    },
}
