//! C# interface builder.

use astgen_codegen::{CodeFragment, Renderable};

use super::Method;

/// Builder for generic C# interfaces.
#[derive(Debug, Clone)]
pub struct Interface {
    name: String,
    generics: Vec<String>,
    methods: Vec<Method>,
}

impl Interface {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            generics: Vec::new(),
            methods: Vec::new(),
        }
    }

    /// Add a generic type parameter.
    pub fn generic(mut self, name: impl Into<String>) -> Self {
        self.generics.push(name.into());
        self
    }

    /// Add a method declaration.
    pub fn method(mut self, method: Method) -> Self {
        self.methods.push(method);
        self
    }

    /// Get the methods.
    pub fn methods(&self) -> &[Method] {
        &self.methods
    }
}

impl Renderable for Interface {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let header = if self.generics.is_empty() {
            format!("interface {}", self.name)
        } else {
            format!("interface {}<{}>", self.name, self.generics.join(", "))
        };

        let body = self.methods.iter().flat_map(|m| m.to_fragments()).collect();
        vec![CodeFragment::braced(header, body)]
    }
}
