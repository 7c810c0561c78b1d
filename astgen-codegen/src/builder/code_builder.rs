//! Indentation-tracking text builder.

use super::{CodeFragment, Renderable};

/// One indentation level of generated C#.
pub const CSHARP_INDENT: &str = "    ";

/// Accumulates generated lines, prefixing each with the current indentation.
///
/// # Example
///
/// ```
/// use astgen_codegen::builder::CodeBuilder;
///
/// let mut builder = CodeBuilder::csharp();
/// builder
///     .push_line("interface VisitorExpr<T>")
///     .push_line("{")
///     .push_indent()
///     .push_line("public T VisitThisExpr(ThisExpr expr);")
///     .push_dedent()
///     .push_line("}");
///
/// assert_eq!(
///     builder.build(),
///     "interface VisitorExpr<T>\n{\n    public T VisitThisExpr(ThisExpr expr);\n}\n"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    level: usize,
    unit: &'static str,
    buffer: String,
}

impl CodeBuilder {
    /// Create a builder that indents each level with `unit`.
    pub fn new(unit: &'static str) -> Self {
        Self {
            level: 0,
            unit,
            buffer: String::new(),
        }
    }

    pub fn csharp() -> Self {
        Self::new(CSHARP_INDENT)
    }

    pub fn push_line(&mut self, line: &str) -> &mut Self {
        for _ in 0..self.level {
            self.buffer.push_str(self.unit);
        }
        self.buffer.push_str(line);
        self.buffer.push('\n');
        self
    }

    /// Push an empty line. Blank lines never carry indentation.
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    pub fn push_indent(&mut self) -> &mut Self {
        self.level += 1;
        self
    }

    /// Step out one level; stays at zero when already unindented.
    pub fn push_dedent(&mut self) -> &mut Self {
        self.level = self.level.saturating_sub(1);
        self
    }

    /// Append every fragment of `node`.
    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        node.to_fragments()
            .into_iter()
            .for_each(|fragment| self.apply_fragment(fragment));
        self
    }

    pub fn apply_fragment(&mut self, fragment: CodeFragment) {
        match fragment {
            CodeFragment::Line(line) => {
                self.push_line(&line);
            }
            CodeFragment::Blank => {
                self.push_blank();
            }
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                self.push_line(&header).push_indent();
                body.into_iter().for_each(|f| self.apply_fragment(f));
                self.push_dedent().push_line(&close);
            }
            CodeFragment::Sequence(fragments) => {
                fragments.into_iter().for_each(|f| self.apply_fragment(f));
            }
        }
    }

    pub fn build(self) -> String {
        self.buffer
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::csharp()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Lines(&'static [&'static str]);

    impl Renderable for Lines {
        fn to_fragments(&self) -> Vec<CodeFragment> {
            self.0.iter().map(|l| CodeFragment::line(*l)).collect()
        }
    }

    #[test]
    fn test_nested_levels() {
        let mut builder = CodeBuilder::csharp();
        builder
            .push_line("class BlockStmt : Stmt")
            .push_line("{")
            .push_indent()
            .push_line("public BlockStmt(List<Stmt?> statements)")
            .push_line("{")
            .push_indent()
            .push_line("this.statements = statements;")
            .push_dedent()
            .push_line("}")
            .push_dedent()
            .push_line("}");

        assert_eq!(
            builder.build(),
            "class BlockStmt : Stmt\n{\n    public BlockStmt(List<Stmt?> statements)\n    {\n        this.statements = statements;\n    }\n}\n"
        );
    }

    #[test]
    fn test_blank_line_is_unindented() {
        let mut builder = CodeBuilder::csharp();
        builder
            .push_indent()
            .push_line("public Token name;")
            .push_blank()
            .push_line("public Expr value;");

        assert_eq!(
            builder.build(),
            "    public Token name;\n\n    public Expr value;\n"
        );
    }

    #[test]
    fn test_dedent_stops_at_zero() {
        let mut builder = CodeBuilder::default();
        builder
            .push_indent()
            .push_dedent()
            .push_dedent()
            .push_line("}");
        assert_eq!(builder.build(), "}\n");
    }

    #[test]
    fn test_custom_unit() {
        let mut builder = CodeBuilder::new("\t");
        builder.push_indent().push_line("x;");
        assert_eq!(builder.build(), "\tx;\n");
    }

    #[test]
    fn test_emit_renderable() {
        let mut builder = CodeBuilder::csharp();
        builder
            .emit(&Lines(&["using System;", "using System.Collections.Generic;"]))
            .push_blank();
        assert_eq!(
            builder.build(),
            "using System;\nusing System.Collections.Generic;\n\n"
        );
    }

    #[test]
    fn test_block_closes_at_header_level() {
        let mut builder = CodeBuilder::csharp();
        builder.push_indent().apply_fragment(CodeFragment::block(
            "{",
            vec![CodeFragment::line("return;")],
            "}",
        ));
        assert_eq!(builder.build(), "    {\n        return;\n    }\n");
    }

    #[test]
    fn test_nested_braced_blocks() {
        let mut builder = CodeBuilder::csharp();
        builder.apply_fragment(CodeFragment::braced(
            "abstract class Expr",
            vec![CodeFragment::braced(
                "public void Run()",
                vec![CodeFragment::line("return;")],
            )],
        ));
        assert_eq!(
            builder.build(),
            "abstract class Expr\n{\n    public void Run()\n    {\n        return;\n    }\n}\n"
        );
    }
}
