//! C# file generators.

mod ast_file;

pub use ast_file::{AstFile, define_ast, render_family};
