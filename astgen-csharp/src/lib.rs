//! C# code generator for the astgen AST generator.
//!
//! For every family of a [`Grammar`](astgen_grammar::Grammar) this crate emits
//! an abstract base class, a generic visitor interface with one `Visit{Type}`
//! method per node, and one class per node type whose `Accept` override
//! dispatches back into the visitor.
//!
//! ```ignore
//! use astgen_codegen::LanguageCodegen;
//! use astgen_csharp::Generator;
//! use astgen_grammar::Grammar;
//!
//! let grammar = Grammar::lox()?;
//! let generator = Generator::new(&grammar);
//!
//! // Preview files without writing
//! let files = generator.preview(&destinations)?;
//!
//! // Write one file per family
//! let result = generator.generate(&destinations)?;
//! ```
//!
//! # Generated Output
//!
//! For a family `Expr`:
//!
//! - `abstract class Expr` with `public abstract T Accept<T>(VisitorExpr<T> visitor);`
//! - `interface VisitorExpr<T>` with `public T Visit{Type}({Type} expr);` per node
//! - `class {Type} : Expr` per node with fields, a constructor and the `Accept` override

mod generator;
mod naming;

pub mod ast;
pub mod emit;
pub mod files;

pub use astgen_codegen::{GenerateResult, LanguageCodegen, PreviewFile};
pub use emit::{define_base, define_type, define_visitor};
pub use files::{AstFile, define_ast, render_family};
pub use generator::Generator;
