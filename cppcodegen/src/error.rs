use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for fallible operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for configuration error reporting.
#[derive(Debug, Clone)]
pub(crate) struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    pub(crate) fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Locate `key = ...` in the source, falling back to no span.
    pub(crate) fn find_key(&self, key: &str) -> Option<SourceSpan> {
        self.src
            .match_indices(key)
            .find(|(pos, _)| {
                let rest = self.src[pos + key.len()..].trim_start_matches([' ', '\t']);
                rest.starts_with('=')
            })
            .map(|(pos, _)| SourceSpan::from((pos, key.len())))
    }

    pub(crate) fn parse_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            source,
        })
    }

    pub(crate) fn invalid_fill_error(&self, fill: impl Into<String>) -> Box<Error> {
        Box::new(Error::InvalidFill {
            src: self.named_source(),
            span: self.find_key("fill"),
            fill: fill.into(),
        })
    }

    pub(crate) fn validation_error_at(
        &self,
        message: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::Validation {
            src: self.named_source(),
            span,
            message: message.into(),
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to parse indentation config")]
    #[diagnostic(code(cppcodegen::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid fill '{fill}'")]
    #[diagnostic(
        code(cppcodegen::invalid_fill),
        help("the fill must be exactly one character, e.g. \" \" or \"\\t\"")
    )]
    InvalidFill {
        #[source_code]
        src: NamedSource<String>,
        #[label("expected a single character")]
        span: Option<SourceSpan>,
        fill: String,
    },

    #[error("{message}")]
    #[diagnostic(code(cppcodegen::validation_error))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },

    #[error("unknown access specifier '{value}'")]
    #[diagnostic(
        code(cppcodegen::unknown_access_specifier),
        help("valid specifiers are: public, protected, private")
    )]
    UnknownAccessSpecifier { value: String },
}
