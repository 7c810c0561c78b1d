//! C# method and constructor builder.

use astgen_codegen::{CodeFragment, Renderable};

/// A method parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    pub ty: String,
    pub name: String,
}

impl Param {
    pub fn new(ty: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            ty: ty.into(),
            name: name.into(),
        }
    }
}

/// Builder for C# methods and constructors.
///
/// A method without a body renders as a declaration ending in `;`
/// (abstract and interface members).
#[derive(Debug, Clone)]
pub struct Method {
    name: String,
    modifiers: Vec<&'static str>,
    return_type: Option<String>,
    generics: Vec<String>,
    params: Vec<Param>,
    body: Option<Vec<String>>,
}

impl Method {
    /// Create a method returning `return_type`.
    pub fn new(name: impl Into<String>, return_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            modifiers: Vec::new(),
            return_type: Some(return_type.into()),
            generics: Vec::new(),
            params: Vec::new(),
            body: None,
        }
    }

    /// Create a constructor for the type `name`.
    pub fn constructor(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            modifiers: Vec::new(),
            return_type: None,
            generics: Vec::new(),
            params: Vec::new(),
            body: Some(Vec::new()),
        }
    }

    /// Add a modifier such as `public` or `override`.
    pub fn modifier(mut self, modifier: &'static str) -> Self {
        self.modifiers.push(modifier);
        self
    }

    /// Add a generic type parameter.
    pub fn generic(mut self, name: impl Into<String>) -> Self {
        self.generics.push(name.into());
        self
    }

    /// Add a parameter.
    pub fn param(mut self, ty: impl Into<String>, name: impl Into<String>) -> Self {
        self.params.push(Param::new(ty, name));
        self
    }

    /// Add a statement to the body, giving the method a body if it had none.
    pub fn statement(mut self, line: impl Into<String>) -> Self {
        self.body.get_or_insert_with(Vec::new).push(line.into());
        self
    }

    /// Get the parameters.
    pub fn params(&self) -> &[Param] {
        &self.params
    }

    /// Render the signature without a trailing `;` or body.
    pub fn signature(&self) -> String {
        let mut parts: Vec<String> = self.modifiers.iter().map(|m| m.to_string()).collect();
        if let Some(ret) = &self.return_type {
            parts.push(ret.clone());
        }

        let generics = if self.generics.is_empty() {
            String::new()
        } else {
            format!("<{}>", self.generics.join(", "))
        };
        let params = self
            .params
            .iter()
            .map(|p| format!("{} {}", p.ty, p.name))
            .collect::<Vec<_>>()
            .join(", ");

        parts.push(format!("{}{}({})", self.name, generics, params));
        parts.join(" ")
    }
}

impl Renderable for Method {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        match &self.body {
            None => vec![CodeFragment::line(format!("{};", self.signature()))],
            Some(body) => vec![CodeFragment::braced(
                self.signature(),
                body.iter().map(CodeFragment::line).collect(),
            )],
        }
    }
}
