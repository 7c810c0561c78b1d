//! Naming conventions shared by the emitted base type, visitor and nodes.

/// Generic parameter carrying the visitor's result type.
pub const RESULT_TYPE: &str = "T";

/// Name of the dispatch method on every node.
pub const ACCEPT_METHOD: &str = "Accept";

/// Visitor interface name for a family (e.g., `Expr` -> `VisitorExpr`).
pub fn visitor_name(family: &str) -> String {
    format!("Visitor{}", family)
}

/// Visitor interface type with the result parameter (e.g., `VisitorExpr<T>`).
pub fn visitor_type(family: &str) -> String {
    format!("{}<{}>", visitor_name(family), RESULT_TYPE)
}

/// Visit method for a node type (e.g., `BinaryExpr` -> `VisitBinaryExpr`).
pub fn visit_method(type_name: &str) -> String {
    format!("Visit{}", type_name)
}

/// Parameter name of visit methods, the lowercased family (e.g., `expr`).
pub fn node_param(family: &str) -> String {
    family.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visitor_names() {
        assert_eq!(visitor_name("Expr"), "VisitorExpr");
        assert_eq!(visitor_type("Stmt"), "VisitorStmt<T>");
    }

    #[test]
    fn test_visit_method() {
        assert_eq!(visit_method("LiteralExpr"), "VisitLiteralExpr");
    }

    #[test]
    fn test_node_param() {
        assert_eq!(node_param("Expr"), "expr");
        assert_eq!(node_param("Stmt"), "stmt");
    }
}
