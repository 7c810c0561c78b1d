//! Grammar data model.

use std::fmt;

use miette::SourceSpan;

use crate::{
    Result, SourceContext,
    parse::{FamilySource, Location, parse_family},
    validate::validate_grammar,
};

/// One field of a node type: a declared type text and an identifier.
///
/// The type text is passed through to the generated code verbatim.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    /// Declared type (e.g., `Expr`, `List<Stmt?>`, `object?`)
    pub ty: String,
    /// Field identifier
    pub name: String,
    /// Location of the field name in the grammar source
    pub span: SourceSpan,
}

impl fmt::Display for FieldSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.ty, self.name)
    }
}

/// A node type: its name and ordered field list.
#[derive(Debug, Clone)]
pub struct TypeSpec {
    /// Node type name (e.g., `BinaryExpr`)
    pub name: String,
    /// Fields in declaration order
    pub fields: Vec<FieldSpec>,
    /// Location of the type name in the grammar source
    pub span: SourceSpan,
}

impl TypeSpec {
    /// Re-join the fields as a `"Type name, Type name"` list.
    pub fn field_list(&self) -> String {
        self.fields
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// A family of node types sharing one base type and one visitor interface.
#[derive(Debug, Clone)]
pub struct FamilySpec {
    /// Family name, also the name of the base type (e.g., `Expr`)
    pub name: String,
    /// Node types in declaration order
    pub types: Vec<TypeSpec>,
    /// Location of the family name in the grammar source
    pub span: SourceSpan,
}

impl FamilySpec {
    /// Node type names in declaration order.
    pub fn type_names(&self) -> impl Iterator<Item = &str> {
        self.types.iter().map(|t| t.name.as_str())
    }
}

/// A validated set of node families.
///
/// Every constructor parses and validates its input, so a `Grammar` value is
/// always safe to hand to a generator.
#[derive(Debug, Clone)]
pub struct Grammar {
    /// Families in generation order
    pub families: Vec<FamilySpec>,
    source: SourceContext,
}

impl Grammar {
    /// Build a grammar from literal specification strings.
    ///
    /// `name` identifies the grammar in diagnostics.
    pub fn from_families(name: &str, families: &[(&str, &[&str])]) -> Result<Self> {
        let mut src = String::new();
        let mut sources = Vec::with_capacity(families.len());

        // Lay the entries out as a listing so diagnostics have text to point at
        for (family, entries) in families {
            let name_location = Location::At(src.len());
            src.push_str(family);
            src.push_str(":\n");

            let mut located = Vec::with_capacity(entries.len());
            for entry in *entries {
                src.push_str("    ");
                located.push((*entry, Location::At(src.len())));
                src.push_str(entry);
                src.push('\n');
            }

            sources.push(FamilySource {
                name: family,
                name_location,
                entries: located,
            });
        }

        Self::assemble(SourceContext::new(src, name), &sources)
    }

    /// Parse every family against `source`, then validate the result.
    pub(crate) fn assemble(source: SourceContext, families: &[FamilySource<'_>]) -> Result<Self> {
        let families = families
            .iter()
            .map(|family| parse_family(&source, family))
            .collect::<Result<Vec<_>>>()?;

        let grammar = Self { families, source };
        validate_grammar(&grammar)?;
        Ok(grammar)
    }

    /// Look up a family by name.
    pub fn family(&self, name: &str) -> Option<&FamilySpec> {
        self.families.iter().find(|f| f.name == name)
    }

    /// Family names in generation order.
    pub fn family_names(&self) -> impl Iterator<Item = &str> {
        self.families.iter().map(|f| f.name.as_str())
    }

    /// The source the grammar was read from.
    pub fn source(&self) -> &SourceContext {
        &self.source
    }
}
