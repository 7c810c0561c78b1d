//! TOML grammar files.
//!
//! ```toml
//! [[family]]
//! name = "Expr"
//! types = [
//!     "BinaryExpr : Expr left, Token operator_, Expr right",
//!     "LiteralExpr : object? value",
//! ]
//! ```

use std::{path::Path, str::FromStr};

use serde::Deserialize;
use toml::Spanned;

use crate::{
    Error, Grammar, Result, SourceContext,
    parse::{FamilySource, Location},
};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct GrammarFile {
    #[serde(default, rename = "family")]
    families: Vec<FamilyTable>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FamilyTable {
    name: Spanned<String>,
    #[serde(default)]
    types: Vec<Spanned<String>>,
}

impl FromStr for Grammar {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_grammar(s, "grammar.toml")
    }
}

impl Grammar {
    /// Parse a grammar file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_grammar(&content, &path.display().to_string())
    }

    /// Parse a grammar from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_grammar(content, filename)
    }
}

fn parse_grammar(content: &str, filename: &str) -> Result<Grammar> {
    let source_ctx = SourceContext::new(content, filename);
    let file: GrammarFile = toml::from_str(content).map_err(|e| source_ctx.parse_error(e))?;

    let families: Vec<FamilySource<'_>> = file
        .families
        .iter()
        .map(|family| FamilySource {
            name: family.name.get_ref(),
            name_location: locate(content, &family.name),
            entries: family
                .types
                .iter()
                .map(|entry| (entry.get_ref().as_str(), locate(content, entry)))
                .collect(),
        })
        .collect();

    Grammar::assemble(source_ctx, &families)
}

/// Locate the contents of a TOML string value in `content`.
///
/// Basic, literal and multi-line strings are supported. Escapes and
/// line-ending backslashes are followed, so every decoded byte maps back to
/// the source text it came from.
fn locate(content: &str, value: &Spanned<String>) -> Location {
    let span = value.span();
    let raw = content.get(span.clone()).unwrap_or_default();

    let (delimiter, basic) = if raw.starts_with("\"\"\"") {
        (3, true)
    } else if raw.starts_with("'''") {
        (3, false)
    } else {
        (1, raw.starts_with('"'))
    };
    let multiline = delimiter == 3;

    let mut start = span.start + delimiter;
    let mut inner = raw
        .get(delimiter..raw.len().saturating_sub(delimiter))
        .unwrap_or_default();
    if multiline {
        // A newline right after the opening delimiter is not part of the value
        let trimmed = inner
            .strip_prefix("\r\n")
            .or_else(|| inner.strip_prefix('\n'))
            .unwrap_or(inner);
        start += inner.len() - trimmed.len();
        inner = trimmed;
    }

    let decoded = value.get_ref().as_str();
    if inner == decoded {
        return Location::At(start);
    }

    let mut offsets = Vec::with_capacity(decoded.len() + 1);
    let mut pos = 0;
    for ch in decoded.chars() {
        if basic && multiline {
            loop {
                let skipped = line_continuation(inner.get(pos..).unwrap_or_default());
                if skipped == 0 {
                    break;
                }
                pos += skipped;
            }
        }

        let rest = inner.get(pos..).unwrap_or_default();
        let raw_len = if basic && rest.starts_with('\\') {
            escape_len(rest)
        } else if ch == '\n' && rest.starts_with("\r\n") {
            2
        } else {
            rest.chars().next().map_or(1, char::len_utf8)
        };

        offsets.extend(std::iter::repeat_n(start + pos, ch.len_utf8()));
        pos += raw_len;
    }
    offsets.push(start + pos);

    Location::Mapped(offsets)
}

/// Length of a line-ending backslash and the whitespace it swallows, or zero
/// when `rest` does not start with one.
fn line_continuation(rest: &str) -> usize {
    let Some(after) = rest.strip_prefix('\\') else {
        return 0;
    };

    let blank = after.trim_start_matches([' ', '\t']);
    if !(blank.starts_with('\n') || blank.starts_with("\r\n")) {
        return 0;
    }

    rest.len() - after.trim_start_matches([' ', '\t', '\r', '\n']).len()
}

/// Source length of the escape sequence at the start of `rest`.
fn escape_len(rest: &str) -> usize {
    match rest.as_bytes().get(1) {
        Some(b'u') => 6,
        Some(b'U') => 10,
        Some(b'x') => 4,
        _ => 2,
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    const GRAMMAR: &str = r#"
[[family]]
name = "Expr"
types = [
    "BinaryExpr : Expr left, Token operator_, Expr right",
    "LiteralExpr : object? value",
]

[[family]]
name = "Stmt"
types = ["PrintStmt : Expr expression"]
"#;

    #[test]
    fn test_parse_grammar() {
        let grammar: Grammar = GRAMMAR.parse().unwrap();

        assert_eq!(grammar.family_names().collect::<Vec<_>>(), ["Expr", "Stmt"]);
        let expr = grammar.family("Expr").unwrap();
        assert_eq!(
            expr.type_names().collect::<Vec<_>>(),
            ["BinaryExpr", "LiteralExpr"]
        );
        assert_eq!(expr.types[0].fields.len(), 3);
    }

    #[test]
    fn test_spans_point_into_file() {
        let grammar: Grammar = GRAMMAR.parse().unwrap();
        let literal = &grammar.family("Expr").unwrap().types[1];

        let start = literal.fields[0].span.offset();
        assert_eq!(&GRAMMAR[start..start + 5], "value");
    }

    #[test]
    fn test_family_without_types() {
        let grammar: Grammar = "[[family]]\nname = \"Expr\"\n".parse().unwrap();
        assert!(grammar.families[0].types.is_empty());
    }

    #[test]
    fn test_empty_file_has_no_families() {
        let err = "".parse::<Grammar>().unwrap_err();
        assert!(matches!(*err, Error::Validation { .. }));
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let err = "[[family]]\nname = \"Expr\"\nnodes = []\n"
            .parse::<Grammar>()
            .unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_malformed_entry_in_file() {
        let err = Grammar::from_str_with_filename(
            "[[family]]\nname = \"Expr\"\ntypes = [\"LiteralExpr object? value\"]\n",
            "ast.toml",
        )
        .unwrap_err();

        match *err {
            Error::MissingColon { ref src, span, .. } => {
                assert_eq!(src.name(), "ast.toml");
                // Label starts just inside the opening quote
                assert_eq!(span.offset(), 35);
            }
            other => panic!("expected MissingColon, got {other:?}"),
        }
    }

    /// The source text under the second label of a duplicate field error.
    fn duplicate_label(content: &str) -> String {
        let err = content.parse::<Grammar>().unwrap_err();
        match *err {
            Error::DuplicateField { second_span, .. } => {
                let start = second_span.offset();
                content[start..start + second_span.len()].to_string()
            }
            other => panic!("expected DuplicateField, got {other:?}"),
        }
    }

    #[test]
    fn test_labels_follow_unicode_escapes() {
        let content = "[[family]]\nname = \"Expr\"\ntypes = [\"\\u0041Lit : Expr a, Expr a\"]\n";
        assert_eq!(duplicate_label(content), "a");
    }

    #[test]
    fn test_labels_follow_short_escapes() {
        let content = "[[family]]\nname = \"Expr\"\ntypes = [\"Lit :\\tExpr a, Expr a\"]\n";
        assert_eq!(duplicate_label(content), "a");
    }

    #[test]
    fn test_labels_in_multiline_strings() {
        let content = "[[family]]\nname = \"Expr\"\ntypes = [\"\"\"\nLit : Expr a, Expr a\"\"\"]\n";
        assert_eq!(duplicate_label(content), "a");
    }

    #[test]
    fn test_labels_after_line_continuation() {
        let content = "[[family]]\nname = \"Expr\"\ntypes = [\"\"\"Lit : Expr a, \\\n    Expr a\"\"\"]\n";
        assert_eq!(duplicate_label(content), "a");
    }

    #[test]
    fn test_labels_in_literal_strings() {
        let content = "[[family]]\nname = 'Expr'\ntypes = ['Lit : Expr a, Expr a']\n";
        assert_eq!(duplicate_label(content), "a");
    }

    #[test]
    fn test_escaped_family_name_span() {
        let content = "[[family]]\nname = \"\\u0045xpr\"\ntypes = []\n";
        let grammar: Grammar = content.parse().unwrap();
        let span = grammar.families[0].span;

        assert_eq!(grammar.families[0].name, "Expr");
        assert_eq!(&content[span.offset()..span.offset() + span.len()], "\\u0045xpr");
    }

    #[test]
    fn test_from_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("lox.toml");
        fs::write(&path, GRAMMAR).unwrap();

        let grammar = Grammar::from_file(&path).unwrap();
        assert_eq!(grammar.families.len(), 2);
        assert_eq!(grammar.source().filename(), path.display().to_string());
    }

    #[test]
    fn test_from_missing_file() {
        let temp = TempDir::new().unwrap();
        let err = Grammar::from_file(temp.path().join("missing.toml")).unwrap_err();
        assert!(matches!(*err, Error::Io { .. }));
    }
}
