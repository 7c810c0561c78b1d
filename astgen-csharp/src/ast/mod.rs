//! C# declaration builders.
//!
//! Each builder implements [`Renderable`] so it can be emitted through a
//! [`CodeBuilder`] with C# indentation.

mod class;
mod interface;
mod method;

use astgen_codegen::{CodeBuilder, Renderable};
pub use class::{Class, Field};
pub use interface::Interface;
pub use method::{Method, Param};

/// Render a node to a string with 4-space indentation.
pub fn render(node: &impl Renderable) -> String {
    let mut builder = CodeBuilder::csharp();
    builder.emit(node);
    builder.build()
}
