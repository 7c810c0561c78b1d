//! Shared code generation utilities for the astgen AST generator.
//!
//! This crate provides language-agnostic abstractions used by the
//! language-specific emitters (e.g., `astgen-csharp`).
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, etc.)
//! - [`language`] - Language-specific abstractions (LanguageCodegen, PreviewFile, etc.)

pub mod builder;
pub mod language;

pub use builder::{CSHARP_INDENT, CodeBuilder, CodeFragment, Renderable};
pub use language::{GenerateResult, GeneratedFamily, LanguageCodegen, PreviewFile};
