use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for grammar operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// The text a grammar was read from.
///
/// Diagnostics embed it so labels can point into the grammar. Built-in
/// grammars get a synthetic listing of their entries.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    pub fn src(&self) -> &str {
        &self.src
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Build a diagnostic that carries this source.
    pub(crate) fn error(&self, build: impl FnOnce(NamedSource<String>) -> Error) -> Box<Error> {
        Box::new(build(NamedSource::new(&self.filename, self.src.clone())))
    }

    /// Wrap a TOML syntax or schema error, keeping its span when it has one.
    pub(crate) fn parse_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        self.error(|src| Error::Parse { src, span, source })
    }

    /// A free-form validation failure, optionally pointing at `span`.
    pub(crate) fn validation_error(
        &self,
        message: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        let message = message.into();
        self.error(|src| Error::Validation { src, span, message })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("check the path passed to --grammar"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse grammar file")]
    #[diagnostic(code(astgen::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("node specification '{entry}' has no ':'")]
    #[diagnostic(
        code(astgen::missing_colon),
        help("write node specifications as 'Name : Type field, Type field'")
    )]
    MissingColon {
        #[source_code]
        src: NamedSource<String>,
        #[label("expected 'Name : fields'")]
        span: SourceSpan,
        entry: String,
    },

    #[error("node specification has an empty type name")]
    #[diagnostic(code(astgen::empty_type_name))]
    EmptyTypeName {
        #[source_code]
        src: NamedSource<String>,
        #[label("type name expected before ':'")]
        span: SourceSpan,
    },

    #[error("malformed field '{field}'")]
    #[diagnostic(
        code(astgen::malformed_field),
        help("each field is exactly one type and one name, e.g. 'Expr left'; found {tokens} token(s)")
    )]
    MalformedField {
        #[source_code]
        src: NamedSource<String>,
        #[label("expected 'Type name'")]
        span: SourceSpan,
        field: String,
        tokens: usize,
    },

    #[error("duplicate family '{name}'")]
    #[diagnostic(
        code(astgen::duplicate_family),
        help("each family generates its own base type and visitor; rename one of them")
    )]
    DuplicateFamily {
        #[source_code]
        src: NamedSource<String>,
        #[label("first defined here")]
        first_span: SourceSpan,
        #[label("defined again here")]
        second_span: SourceSpan,
        name: String,
    },

    #[error("duplicate node type '{name}' in family '{family}'")]
    #[diagnostic(
        code(astgen::duplicate_type),
        help("the visitor would declare 'Visit{name}' twice; rename one of the node types")
    )]
    DuplicateType {
        #[source_code]
        src: NamedSource<String>,
        #[label("first defined here")]
        first_span: SourceSpan,
        #[label("defined again here")]
        second_span: SourceSpan,
        name: String,
        family: String,
    },

    #[error("duplicate field '{name}' in node type '{type_name}'")]
    #[diagnostic(code(astgen::duplicate_field))]
    DuplicateField {
        #[source_code]
        src: NamedSource<String>,
        #[label("first declared here")]
        first_span: SourceSpan,
        #[label("declared again here")]
        second_span: SourceSpan,
        name: String,
        type_name: String,
    },

    #[error("{message}")]
    #[diagnostic(code(astgen::validation_error))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },

    #[error("'{name}' is a C# reserved keyword")]
    #[diagnostic(help("rename '{name}' to something else, e.g. '{name}_'"))]
    ReservedKeyword {
        #[source_code]
        src: NamedSource<String>,
        #[label("reserved keyword used here")]
        span: SourceSpan,
        name: String,
        context: String,
    },

    #[error("family '{family}' names its visit parameter '{param}', a C# reserved keyword")]
    #[diagnostic(
        code(astgen::keyword_parameter),
        help("visit methods take the lowercased family name as their parameter; rename the family")
    )]
    KeywordParameter {
        #[source_code]
        src: NamedSource<String>,
        #[label("lowercases to '{param}'")]
        span: SourceSpan,
        family: String,
        param: String,
    },

    #[error("invalid {context} name '{name}'")]
    #[diagnostic(help(
        "{reason}. Use only letters, numbers, and underscores, starting with a letter or underscore."
    ))]
    InvalidIdentifier {
        #[source_code]
        src: NamedSource<String>,
        #[label("invalid identifier")]
        span: SourceSpan,
        name: String,
        context: String,
        reason: String,
    },
}
