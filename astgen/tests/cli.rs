//! End-to-end tests running the `astgen` binary.

use std::{fs, path::Path, process::Command};

use tempfile::TempDir;

fn astgen(args: &[&Path]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_astgen"))
        .args(args)
        .output()
        .expect("failed to run astgen")
}

#[test]
fn test_generates_both_families() {
    let temp = TempDir::new().unwrap();
    let expr = temp.path().join("Expr.cs");
    let stmt = temp.path().join("Stmt.cs");

    let output = astgen(&[&expr, &stmt]);
    assert!(output.status.success(), "{output:?}");

    let expr_cs = fs::read_to_string(&expr).unwrap();
    assert!(expr_cs.starts_with("abstract class Expr\n"));
    assert!(expr_cs.contains("class VariableExpr : Expr"));

    let stmt_cs = fs::read_to_string(&stmt).unwrap();
    assert!(stmt_cs.starts_with("abstract class Stmt\n"));
    assert!(stmt_cs.contains("public T VisitWhileStmt(WhileStmt stmt);"));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Generated Expr (12 types)"));
    assert!(stdout.contains("Generated Stmt (9 types)"));
}

#[test]
fn test_second_run_is_byte_identical() {
    let temp = TempDir::new().unwrap();
    let expr = temp.path().join("Expr.cs");
    let stmt = temp.path().join("Stmt.cs");

    assert!(astgen(&[&expr, &stmt]).status.success());
    let first = (fs::read(&expr).unwrap(), fs::read(&stmt).unwrap());

    assert!(astgen(&[&expr, &stmt]).status.success());
    let second = (fs::read(&expr).unwrap(), fs::read(&stmt).unwrap());

    assert_eq!(first, second);
}

#[test]
fn test_missing_destination_directory_fails() {
    let temp = TempDir::new().unwrap();
    let expr = temp.path().join("Expr.cs");
    let stmt = temp.path().join("missing").join("Stmt.cs");

    let output = astgen(&[&expr, &stmt]);
    assert!(!output.status.success());
    assert!(!stmt.exists());
}

#[test]
fn test_wrong_destination_count_writes_nothing() {
    let temp = TempDir::new().unwrap();
    let expr = temp.path().join("Expr.cs");

    let output = astgen(&[&expr]);
    assert!(!output.status.success());
    assert!(!expr.exists());
}

#[test]
fn test_grammar_file() {
    let temp = TempDir::new().unwrap();
    let grammar = temp.path().join("shapes.toml");
    fs::write(
        &grammar,
        "[[family]]\nname = \"Shape\"\ntypes = [\"Circle : double radius\"]\n",
    )
    .unwrap();
    let out = temp.path().join("Shape.cs");

    let output = Command::new(env!("CARGO_BIN_EXE_astgen"))
        .arg("--grammar")
        .arg(&grammar)
        .arg(&out)
        .output()
        .unwrap();
    assert!(output.status.success(), "{output:?}");

    let shape_cs = fs::read_to_string(&out).unwrap();
    assert!(shape_cs.contains("public T VisitCircle(Circle shape);"));
    assert!(shape_cs.contains("        this.radius = radius;\n"));
}

#[test]
fn test_invalid_grammar_file_exits_with_diagnostic() {
    let temp = TempDir::new().unwrap();
    let grammar = temp.path().join("bad.toml");
    fs::write(
        &grammar,
        "[[family]]\nname = \"Expr\"\ntypes = [\"GetExpr : Expr object, Token name\"]\n",
    )
    .unwrap();
    let out = temp.path().join("Expr.cs");

    let output = Command::new(env!("CARGO_BIN_EXE_astgen"))
        .arg("--grammar")
        .arg(&grammar)
        .arg(&out)
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("reserved keyword"));
    assert!(!out.exists());
}

#[test]
fn test_dry_run_writes_nothing() {
    let temp = TempDir::new().unwrap();
    let expr = temp.path().join("Expr.cs");
    let stmt = temp.path().join("Stmt.cs");

    let output = Command::new(env!("CARGO_BIN_EXE_astgen"))
        .arg("--dry-run")
        .arg(&expr)
        .arg(&stmt)
        .output()
        .unwrap();

    assert!(output.status.success());
    assert!(!expr.exists());
    assert!(!stmt.exists());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("Previewing csharp output\n"));
    assert!(stdout.contains("interface VisitorExpr<T>"));
    assert!(stdout.contains("2 files would be generated"));
}

#[test]
fn test_unexpected_extension_warns_but_generates() {
    let temp = TempDir::new().unwrap();
    let expr = temp.path().join("Expr.cs");
    let stmt = temp.path().join("Stmt.txt");

    let output = astgen(&[&expr, &stmt]);
    assert!(output.status.success(), "{output:?}");
    assert!(stmt.exists());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("warning: "));
    assert!(stderr.contains("Stmt.txt' does not have a .cs extension"));
    assert!(!stderr.contains("Expr.cs"));
}
