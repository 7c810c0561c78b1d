//! Code fragments and the [`Renderable`] trait.
//!
//! Declarations describe themselves as a tree of [`CodeFragment`]s; the
//! [`CodeBuilder`](super::CodeBuilder) turns that tree into indented text.

/// A piece of generated code.
#[derive(Debug, Clone, PartialEq)]
pub enum CodeFragment {
    /// One line, emitted at the current indentation.
    Line(String),
    /// An empty line.
    Blank,
    /// A header line followed by a body indented one level deeper, and a
    /// closing line back at the header's indentation.
    Block {
        header: String,
        body: Vec<CodeFragment>,
        close: String,
    },
    /// Fragments emitted one after another at the same indentation.
    Sequence(Vec<CodeFragment>),
}

impl CodeFragment {
    pub fn line(s: impl Into<String>) -> Self {
        Self::Line(s.into())
    }

    pub fn blank() -> Self {
        Self::Blank
    }

    pub fn block(
        header: impl Into<String>,
        body: Vec<CodeFragment>,
        close: impl Into<String>,
    ) -> Self {
        Self::Block {
            header: header.into(),
            body,
            close: close.into(),
        }
    }

    /// A declaration whose braces sit on their own lines.
    ///
    /// ```
    /// use astgen_codegen::{CodeBuilder, CodeFragment};
    ///
    /// let mut builder = CodeBuilder::csharp();
    /// builder.apply_fragment(CodeFragment::braced(
    ///     "class Foo",
    ///     vec![CodeFragment::line("public int x;")],
    /// ));
    /// assert_eq!(builder.build(), "class Foo\n{\n    public int x;\n}\n");
    /// ```
    pub fn braced(header: impl Into<String>, body: Vec<CodeFragment>) -> Self {
        Self::Sequence(vec![
            Self::Line(header.into()),
            Self::block("{", body, "}"),
        ])
    }
}

/// A declaration that can describe itself as code fragments.
pub trait Renderable {
    fn to_fragments(&self) -> Vec<CodeFragment>;
}

impl<T: Renderable + ?Sized> Renderable for &T {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        (*self).to_fragments()
    }
}
