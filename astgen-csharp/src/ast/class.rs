//! C# class builder.

use astgen_codegen::{CodeFragment, Renderable};

use super::Method;

/// A public field declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub ty: String,
    pub name: String,
}

impl Field {
    pub fn new(ty: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            ty: ty.into(),
            name: name.into(),
        }
    }
}

/// Builder for C# classes.
///
/// Fields render first, then methods, with a blank line between the field
/// block and each method.
#[derive(Debug, Clone)]
pub struct Class {
    name: String,
    base: Option<String>,
    is_abstract: bool,
    fields: Vec<Field>,
    methods: Vec<Method>,
}

impl Class {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            base: None,
            is_abstract: false,
            fields: Vec::new(),
            methods: Vec::new(),
        }
    }

    /// Set the base class.
    pub fn extends(mut self, base: impl Into<String>) -> Self {
        self.base = Some(base.into());
        self
    }

    /// Mark the class abstract.
    pub fn abstract_class(mut self) -> Self {
        self.is_abstract = true;
        self
    }

    /// Add a public field.
    pub fn field(mut self, ty: impl Into<String>, name: impl Into<String>) -> Self {
        self.fields.push(Field::new(ty, name));
        self
    }

    /// Add a method or constructor.
    pub fn method(mut self, method: Method) -> Self {
        self.methods.push(method);
        self
    }

    /// Get the fields.
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Get the methods.
    pub fn methods(&self) -> &[Method] {
        &self.methods
    }

    fn header(&self) -> String {
        let modifier = if self.is_abstract { "abstract " } else { "" };
        match &self.base {
            Some(base) => format!("{}class {} : {}", modifier, self.name, base),
            None => format!("{}class {}", modifier, self.name),
        }
    }
}

impl Renderable for Class {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut body: Vec<CodeFragment> = self
            .fields
            .iter()
            .map(|f| CodeFragment::line(format!("public {} {};", f.ty, f.name)))
            .collect();

        for (i, method) in self.methods.iter().enumerate() {
            if i > 0 || !self.fields.is_empty() {
                body.push(CodeFragment::blank());
            }
            body.extend(method.to_fragments());
        }

        vec![CodeFragment::braced(self.header(), body)]
    }
}
