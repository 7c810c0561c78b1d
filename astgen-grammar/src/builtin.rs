//! The Lox interpreter's node families.

use crate::{Grammar, Result};

impl Grammar {
    /// The expression and statement families consumed by the Lox interpreter.
    ///
    /// Field names that would collide with C# keywords carry a trailing
    /// underscore (`operator_`, `object_`, `params_`).
    pub fn lox() -> Result<Self> {
        const EXPR: &[&str] = &[
            "AssignExpr   : Token name, Expr value",
            "BinaryExpr   : Expr left, Token operator_, Expr right",
            "CallExpr     : Expr callee, Token paren, List<Expr?> arguments",
            "GetExpr      : Expr object_, Token name",
            "GroupingExpr : Expr expression",
            "LiteralExpr  : object? value",
            "LogicalExpr  : Expr left, Token operator_, Expr right",
            "SetExpr      : Expr object_, Token name, Expr value",
            "SuperExpr    : Token keyword, Token method",
            "ThisExpr     : Token keyword",
            "UnaryExpr    : Token operator_, Expr right",
            "VariableExpr : Token name",
        ];

        const STMT: &[&str] = &[
            "BlockStmt      : List<Stmt?> statements",
            "ClassStmt      : Token name, VariableExpr? superclass, List<FunctionStmt> methods",
            "ExpressionStmt : Expr expression",
            "FunctionStmt   : Token name, List<Token> params_, List<Stmt?> body",
            "IfStmt         : Expr condition, Stmt thenBranch, Stmt? elseBranch",
            "PrintStmt      : Expr expression",
            "ReturnStmt     : Token keyword, Expr? value",
            "VarStmt        : Token name, Expr? initializer",
            "WhileStmt      : Expr condition, Stmt body",
        ];

        Self::from_families("<builtin lox grammar>", &[("Expr", EXPR), ("Stmt", STMT)])
    }
}
