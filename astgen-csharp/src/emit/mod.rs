//! Pure emitters, one per generated construct.
//!
//! Every emitter returns text and performs no I/O; the family file in
//! [`crate::files`] concatenates them and owns the single write.

mod base;
mod node;
mod visitor;

pub use base::{base_type, define_base};
pub use node::{define_type, node_type};
pub use visitor::{define_visitor, visitor_interface};

use crate::{
    ast::Method,
    naming::{ACCEPT_METHOD, RESULT_TYPE, visitor_type},
};

/// `Accept<T>(Visitor{F}<T> visitor)` with the given modifiers.
fn accept_method(family: &str, modifiers: &[&'static str]) -> Method {
    let method = modifiers
        .iter()
        .fold(Method::new(ACCEPT_METHOD, RESULT_TYPE), |m, &modifier| {
            m.modifier(modifier)
        });

    method
        .generic(RESULT_TYPE)
        .param(visitor_type(family), "visitor")
}
