//! Node type emitter.

use astgen_grammar::TypeSpec;

use super::accept_method;
use crate::{
    ast::{Class, Method, render},
    naming::visit_method,
};

/// A concrete node type: public fields, a constructor assigning every field
/// in order, and an `Accept` override dispatching to `Visit{Type}`.
pub fn node_type(family: &str, ty: &TypeSpec) -> Class {
    let constructor = ty.fields.iter().fold(
        Method::constructor(&ty.name).modifier("public"),
        |ctor, field| {
            ctor.param(&field.ty, &field.name)
                .statement(format!("this.{0} = {0};", field.name))
        },
    );

    let accept = accept_method(family, &["public", "override"])
        .statement(format!("return visitor.{}(this);", visit_method(&ty.name)));

    ty.fields
        .iter()
        .fold(Class::new(&ty.name).extends(family), |class, field| {
            class.field(&field.ty, &field.name)
        })
        .method(constructor)
        .method(accept)
}

/// Emit one node type of a family.
pub fn define_type(family: &str, ty: &TypeSpec) -> String {
    render(&node_type(family, ty))
}
