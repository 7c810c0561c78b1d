//! One family's `.cs` file: base type, visitor interface and node types.

use std::path::{Path, PathBuf};

use astgen_core::{GeneratedFile, WriteResult};
use astgen_grammar::FamilySpec;
use eyre::Result;

use crate::emit::{define_base, define_type, define_visitor};

/// The generated file for a single family.
pub struct AstFile<'a> {
    path: PathBuf,
    family: &'a FamilySpec,
}

impl<'a> AstFile<'a> {
    pub fn new(path: impl Into<PathBuf>, family: &'a FamilySpec) -> Self {
        Self {
            path: path.into(),
            family,
        }
    }

    /// The family this file declares.
    pub fn family(&self) -> &FamilySpec {
        self.family
    }
}

impl GeneratedFile for AstFile<'_> {
    fn path(&self) -> &Path {
        &self.path
    }

    fn render(&self) -> String {
        render_family(self.family)
    }
}

/// Concatenate the base type, the visitor interface and every node type in
/// declaration order, separated by blank lines.
pub fn render_family(family: &FamilySpec) -> String {
    let mut code = define_base(&family.name);

    code.push('\n');
    code.push_str(&define_visitor(&family.name, &family.types));

    for ty in &family.types {
        code.push('\n');
        code.push_str(&define_type(&family.name, ty));
    }

    code
}

/// Render `family` and write it to `destination`, replacing any previous
/// content. The destination's directory must already exist.
pub fn define_ast(destination: impl AsRef<Path>, family: &FamilySpec) -> Result<WriteResult> {
    AstFile::new(destination.as_ref(), family).write()
}
