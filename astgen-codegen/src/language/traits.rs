//! Language-agnostic code generation traits.

use std::path::PathBuf;

use eyre::Result;

/// Trait for language-specific AST generators.
///
/// Implement this trait to emit node and visitor scaffolding in a new language.
/// Destinations are matched to grammar families by position.
pub trait LanguageCodegen {
    /// Language identifier (e.g., "csharp")
    fn language(&self) -> &'static str;

    /// File extension for generated source files (e.g., "cs")
    fn file_extension(&self) -> &'static str;

    /// Render every family without writing to disk
    fn preview(&self, destinations: &[PathBuf]) -> Result<Vec<PreviewFile>>;

    /// Generate every family into its destination
    fn generate(&self, destinations: &[PathBuf]) -> Result<GenerateResult>;
}

/// Result of code generation
#[derive(Debug, Default)]
pub struct GenerateResult {
    /// Families that were written, in generation order
    pub families: Vec<GeneratedFamily>,
}

impl GenerateResult {
    /// Total number of node types written across all families
    pub fn type_count(&self) -> usize {
        self.families.iter().map(|f| f.types).sum()
    }
}

/// A family that was written to disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFamily {
    /// Family name (e.g., "Expr")
    pub family: String,
    /// Destination the family was written to
    pub path: PathBuf,
    /// Number of node types emitted
    pub types: usize,
    /// Number of bytes written
    pub bytes: usize,
}

/// A generated file for preview
#[derive(Debug)]
pub struct PreviewFile {
    /// Destination the file would be written to
    pub path: String,
    /// File content
    pub content: String,
}
