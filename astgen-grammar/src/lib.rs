//! Grammar definitions for the astgen AST generator.
//!
//! A [`Grammar`] is an ordered list of node families. Each family is written
//! as specification strings of the form `"Name : Type field, Type field"`:
//!
//! ```
//! use astgen_grammar::Grammar;
//!
//! let grammar = Grammar::from_families(
//!     "example",
//!     &[("Expr", &["LiteralExpr : object? value", "GroupingExpr : Expr expression"])],
//! )
//! .unwrap();
//!
//! let expr = grammar.family("Expr").unwrap();
//! assert_eq!(expr.types[0].name, "LiteralExpr");
//! assert_eq!(expr.types[0].field_list(), "object? value");
//! ```
//!
//! Grammars can also be loaded from TOML with [`Grammar::from_file`], and the
//! Lox interpreter's own table is available as [`Grammar::lox`].

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod builtin;
mod error;
mod file;
mod grammar;
mod parse;
mod validate;

pub use error::{Error, Result, SourceContext};
pub use grammar::{FamilySpec, FieldSpec, Grammar, TypeSpec};
pub use parse::parse_field_list;
pub use validate::{CSHARP_KEYWORDS, is_csharp_keyword};
