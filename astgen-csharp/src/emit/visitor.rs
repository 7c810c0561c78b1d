//! Visitor interface emitter.

use astgen_grammar::TypeSpec;

use crate::{
    ast::{Interface, Method, render},
    naming::{RESULT_TYPE, node_param, visit_method, visitor_name},
};

/// The visitor interface of a family: one `Visit{Type}` method per node type,
/// in declaration order.
pub fn visitor_interface(family: &str, types: &[TypeSpec]) -> Interface {
    let param = node_param(family);

    types.iter().fold(
        Interface::new(visitor_name(family)).generic(RESULT_TYPE),
        |interface, ty| {
            interface.method(
                Method::new(visit_method(&ty.name), RESULT_TYPE)
                    .modifier("public")
                    .param(&ty.name, &param),
            )
        },
    )
}

/// Emit the family's visitor interface.
pub fn define_visitor(family: &str, types: &[TypeSpec]) -> String {
    render(&visitor_interface(family, types))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn types(entries: &[&str]) -> Vec<TypeSpec> {
        entries.iter().map(|e| e.parse().unwrap()).collect()
    }

    #[test]
    fn test_one_method_per_type_in_order() {
        let types = types(&[
            "UnaryExpr : Token operator_, Expr right",
            "AssignExpr : Token name, Expr value",
        ]);

        assert_eq!(
            define_visitor("Expr", &types),
            "interface VisitorExpr<T>\n\
             {\n    \
             public T VisitUnaryExpr(UnaryExpr expr);\n    \
             public T VisitAssignExpr(AssignExpr expr);\n\
             }\n"
        );
    }

    #[test]
    fn test_parameter_named_after_family() {
        let types = types(&["WhileStmt : Expr condition, Stmt body"]);
        assert!(define_visitor("Stmt", &types).contains("public T VisitWhileStmt(WhileStmt stmt);"));
    }

    #[test]
    fn test_empty_family() {
        assert_eq!(define_visitor("Expr", &[]), "interface VisitorExpr<T>\n{\n}\n");
    }
}
