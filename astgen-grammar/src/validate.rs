//! Validation of parsed grammars.
//!
//! Duplicate families, node types and fields are rejected here, before any
//! code is generated, as are names that cannot be used as C# identifiers.

use std::collections::HashMap;

use miette::SourceSpan;

use crate::{Error, FamilySpec, Grammar, Result, SourceContext, TypeSpec};

/// C# reserved keywords that cannot be used as identifiers
/// Source: https://learn.microsoft.com/dotnet/csharp/language-reference/keywords/
pub const CSHARP_KEYWORDS: &[&str] = &[
    "abstract", "as", "base", "bool", "break", "byte", "case", "catch", "char", "checked",
    "class", "const", "continue", "decimal", "default", "delegate", "do", "double", "else",
    "enum", "event", "explicit", "extern", "false", "finally", "fixed", "float", "for",
    "foreach", "goto", "if", "implicit", "in", "int", "interface", "internal", "is", "lock",
    "long", "namespace", "new", "null", "object", "operator", "out", "override", "params",
    "private", "protected", "public", "readonly", "ref", "return", "sbyte", "sealed", "short",
    "sizeof", "stackalloc", "static", "string", "struct", "switch", "this", "throw", "true",
    "try", "typeof", "uint", "ulong", "unchecked", "unsafe", "ushort", "using", "virtual",
    "void", "volatile", "while",
];

/// Check if a name is a C# reserved keyword
pub fn is_csharp_keyword(name: &str) -> bool {
    CSHARP_KEYWORDS.contains(&name)
}

pub(crate) fn validate_grammar(grammar: &Grammar) -> Result<()> {
    let ctx = grammar.source();

    if grammar.families.is_empty() {
        return Err(ctx.validation_error("grammar defines no families", None));
    }

    let mut families: HashMap<&str, SourceSpan> = HashMap::new();
    for family in &grammar.families {
        validate_name(ctx, &family.name, "family", family.span)?;
        validate_parameter(ctx, family)?;

        if let Some(first_span) = families.insert(&family.name, family.span) {
            return Err(ctx.error(|src| Error::DuplicateFamily {
                src,
                first_span,
                second_span: family.span,
                name: family.name.clone(),
            }));
        }

        let mut types: HashMap<&str, SourceSpan> = HashMap::new();
        for ty in &family.types {
            validate_name(ctx, &ty.name, "node type", ty.span)?;

            if ty.name == family.name {
                return Err(ctx.validation_error(
                    format!("node type '{}' has the same name as its family", ty.name),
                    Some(ty.span),
                ));
            }

            if let Some(first_span) = types.insert(&ty.name, ty.span) {
                return Err(ctx.error(|src| Error::DuplicateType {
                    src,
                    first_span,
                    second_span: ty.span,
                    name: ty.name.clone(),
                    family: family.name.clone(),
                }));
            }

            validate_fields(ctx, ty)?;
        }
    }

    Ok(())
}

/// Visit methods name their parameter after the lowercased family.
fn validate_parameter(ctx: &SourceContext, family: &FamilySpec) -> Result<()> {
    let param = family.name.to_lowercase();
    if !is_csharp_keyword(&param) {
        return Ok(());
    }

    Err(ctx.error(|src| Error::KeywordParameter {
        src,
        span: family.span,
        family: family.name.clone(),
        param,
    }))
}

fn validate_fields(ctx: &SourceContext, ty: &TypeSpec) -> Result<()> {
    let mut fields: HashMap<&str, SourceSpan> = HashMap::new();

    for field in &ty.fields {
        validate_name(ctx, &field.name, "field", field.span)?;

        // C# forbids a member named after its enclosing class
        if field.name == ty.name {
            return Err(ctx.validation_error(
                format!("field '{}' has the same name as its node type", field.name),
                Some(field.span),
            ));
        }

        if let Some(first_span) = fields.insert(&field.name, field.span) {
            return Err(ctx.error(|src| Error::DuplicateField {
                src,
                first_span,
                second_span: field.span,
                name: field.name.clone(),
                type_name: ty.name.clone(),
            }));
        }
    }

    Ok(())
}

fn validate_name(ctx: &SourceContext, name: &str, kind: &str, span: SourceSpan) -> Result<()> {
    if is_csharp_keyword(name) {
        return Err(ctx.error(|src| Error::ReservedKeyword {
            src,
            span,
            name: name.to_string(),
            context: kind.to_string(),
        }));
    }

    if let Some(reason) = validate_identifier(name) {
        return Err(ctx.error(|src| Error::InvalidIdentifier {
            src,
            span,
            name: name.to_string(),
            context: kind.to_string(),
            reason: reason.to_string(),
        }));
    }

    Ok(())
}

/// Validate that a name is a valid C# identifier
/// Returns None if valid, Some(reason) if invalid
pub(crate) fn validate_identifier(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();

    // First character must be a letter or underscore
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        Some(_) => return Some("name must start with a letter or underscore"),
        None => return Some("name cannot be empty"),
    }

    if chars.any(|c| !(c.is_ascii_alphanumeric() || c == '_')) {
        return Some("name must contain only letters, numbers, and underscores");
    }

    None
}
