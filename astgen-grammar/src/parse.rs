//! Specification string parsing.
//!
//! A node specification is `Name : Type field, Type field`. The name is
//! everything before the first `:`, fields are separated by `", "`, and each
//! field is exactly two whitespace-separated tokens.

use std::str::FromStr;

use miette::SourceSpan;

use crate::{Error, FamilySpec, FieldSpec, Result, SourceContext, TypeSpec};

/// Field list separator.
const FIELD_SEPARATOR: &str = ", ";

/// Maps byte positions within a parsed string back to the grammar source.
#[derive(Debug, Clone)]
pub(crate) enum Location {
    /// The string appears verbatim starting at this offset.
    At(usize),
    /// Source offset of every byte of the string, plus one past its end.
    Mapped(Vec<usize>),
}

impl Location {
    fn offset(&self, local: usize) -> usize {
        match self {
            Self::At(base) => base + local,
            Self::Mapped(offsets) => offsets
                .get(local)
                .or(offsets.last())
                .copied()
                .unwrap_or_default(),
        }
    }

    /// Source span of `len` bytes starting at `local`.
    pub(crate) fn span(&self, local: usize, len: usize) -> SourceSpan {
        let start = self.offset(local);
        let end = self.offset(local + len);
        SourceSpan::from((start, end.saturating_sub(start)))
    }
}

/// A family's raw entries and where they sit in the grammar source.
#[derive(Debug, Clone)]
pub(crate) struct FamilySource<'a> {
    pub name: &'a str,
    pub name_location: Location,
    /// Specification strings paired with their location in the source
    pub entries: Vec<(&'a str, Location)>,
}

pub(crate) fn parse_family(ctx: &SourceContext, family: &FamilySource<'_>) -> Result<FamilySpec> {
    let types = family
        .entries
        .iter()
        .map(|(entry, location)| parse_type_spec(ctx, entry, location))
        .collect::<Result<Vec<_>>>()?;

    Ok(FamilySpec {
        name: family.name.to_string(),
        types,
        span: family.name_location.span(0, family.name.len()),
    })
}

/// Parse one node specification found at `location` in the context's source.
pub(crate) fn parse_type_spec(ctx: &SourceContext, entry: &str, location: &Location) -> Result<TypeSpec> {
    let Some((raw_name, raw_fields)) = entry.split_once(':') else {
        let span = location.span(0, entry.len());
        let entry = entry.trim().to_string();
        return Err(ctx.error(|src| Error::MissingColon { src, span, entry }));
    };

    let name = raw_name.trim();
    if name.is_empty() {
        let span = location.span(0, raw_name.len() + 1);
        return Err(ctx.error(|src| Error::EmptyTypeName { src, span }));
    }

    let fields = parse_fields_at(ctx, raw_fields, location, raw_name.len() + 1)?;

    Ok(TypeSpec {
        name: name.to_string(),
        fields,
        span: location.span(leading_whitespace(raw_name), name.len()),
    })
}

/// Parse a field list such as `"Expr left, Token operator_, Expr right"`.
///
/// An empty (or all-whitespace) list yields no fields.
///
/// ```
/// let fields = astgen_grammar::parse_field_list("Token name, Expr value").unwrap();
/// assert_eq!(fields[1].ty, "Expr");
/// assert_eq!(fields[1].name, "value");
/// ```
pub fn parse_field_list(list: &str) -> Result<Vec<FieldSpec>> {
    let ctx = SourceContext::new(list, "<fields>");
    parse_fields_at(&ctx, list, &Location::At(0), 0)
}

/// Parse the field list `raw`, which starts at byte `start` of the entry.
fn parse_fields_at(
    ctx: &SourceContext,
    raw: &str,
    location: &Location,
    start: usize,
) -> Result<Vec<FieldSpec>> {
    let list = raw.trim();
    if list.is_empty() {
        return Ok(Vec::new());
    }

    let mut position = start + leading_whitespace(raw);
    let mut fields = Vec::new();

    for part in list.split(FIELD_SEPARATOR) {
        fields.push(parse_field(ctx, part, location, position)?);
        position += part.len() + FIELD_SEPARATOR.len();
    }

    Ok(fields)
}

fn parse_field(ctx: &SourceContext, raw: &str, location: &Location, start: usize) -> Result<FieldSpec> {
    let field = raw.trim();
    let field_start = start + leading_whitespace(raw);
    let tokens: Vec<&str> = field.split_whitespace().collect();

    let [ty, name] = tokens.as_slice() else {
        let span = location.span(field_start, field.len().max(1));
        let tokens = tokens.len();
        let field = field.to_string();
        return Err(ctx.error(|src| Error::MalformedField {
            src,
            span,
            field,
            tokens,
        }));
    };

    // The name is the last token, so search from the end
    let name_start = field.rfind(name).unwrap_or_default();

    Ok(FieldSpec {
        ty: ty.to_string(),
        name: name.to_string(),
        span: location.span(field_start + name_start, name.len()),
    })
}

impl FromStr for TypeSpec {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        let ctx = SourceContext::new(s, "<node>");
        parse_type_spec(&ctx, s, &Location::At(0))
    }
}

impl FromStr for FieldSpec {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        let ctx = SourceContext::new(s, "<field>");
        parse_field(&ctx, s, &Location::At(0), 0)
    }
}

fn leading_whitespace(s: &str) -> usize {
    s.len() - s.trim_start().len()
}
