//! C# generator driving every family of a grammar.

use std::path::PathBuf;

use astgen_codegen::{GenerateResult, GeneratedFamily, LanguageCodegen, PreviewFile};
use astgen_core::GeneratedFile;
use astgen_grammar::{FamilySpec, Grammar};
use eyre::{Result, bail};

use crate::files::AstFile;

/// C# generator emitting one file per grammar family.
pub struct Generator<'a> {
    grammar: &'a Grammar,
}

impl LanguageCodegen for Generator<'_> {
    fn language(&self) -> &'static str {
        "csharp"
    }

    fn file_extension(&self) -> &'static str {
        "cs"
    }

    fn preview(&self, destinations: &[PathBuf]) -> Result<Vec<PreviewFile>> {
        let files = self
            .files(destinations)?
            .into_iter()
            .map(|file| PreviewFile {
                path: file.path().display().to_string(),
                content: file.render(),
            })
            .collect();
        Ok(files)
    }

    fn generate(&self, destinations: &[PathBuf]) -> Result<GenerateResult> {
        let mut result = GenerateResult::default();

        // Families are written one after another; a failure leaves earlier
        // families on disk.
        for file in self.files(destinations)? {
            let written = file.write()?;
            result.families.push(GeneratedFamily {
                family: file.family().name.clone(),
                path: written.path,
                types: file.family().types.len(),
                bytes: written.bytes,
            });
        }

        Ok(result)
    }
}

impl<'a> Generator<'a> {
    pub fn new(grammar: &'a Grammar) -> Self {
        Self { grammar }
    }

    /// Pair each family with its destination, by position.
    fn files(&self, destinations: &[PathBuf]) -> Result<Vec<AstFile<'a>>> {
        let grammar: &'a Grammar = self.grammar;
        let families = &grammar.families;

        if destinations.len() != families.len() {
            bail!(
                "expected {} destination(s), one per family ({}), got {}",
                families.len(),
                family_list(families),
                destinations.len()
            );
        }

        Ok(families
            .iter()
            .zip(destinations)
            .map(|(family, path)| AstFile::new(path, family))
            .collect())
    }
}

fn family_list(families: &[FamilySpec]) -> String {
    families
        .iter()
        .map(|f| f.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
