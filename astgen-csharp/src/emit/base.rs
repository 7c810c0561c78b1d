//! Family base type emitter.

use super::accept_method;
use crate::ast::{Class, render};

/// The abstract base class of a family, declaring the dispatch operation.
pub fn base_type(family: &str) -> Class {
    Class::new(family)
        .abstract_class()
        .method(accept_method(family, &["public", "abstract"]))
}

/// Emit the family's base type.
///
/// ```
/// assert_eq!(
///     astgen_csharp::define_base("Expr"),
///     "abstract class Expr\n{\n    public abstract T Accept<T>(VisitorExpr<T> visitor);\n}\n"
/// );
/// ```
pub fn define_base(family: &str) -> String {
    render(&base_type(family))
}
