use std::path::PathBuf;

use astgen_codegen::{GenerateResult, LanguageCodegen};
use astgen_csharp::Generator;
use astgen_grammar::Grammar;
use clap::Parser;
use eyre::{Context, Result};

/// Extension trait for exiting on grammar errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for astgen_grammar::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "astgen")]
#[command(version)]
#[command(about = "Generate AST node classes and visitor interfaces")]
pub(crate) struct Cli {
    /// Destination file for each family, in grammar order (Expr, then Stmt
    /// for the built-in grammar)
    #[arg(required = true, value_name = "DEST")]
    pub destinations: Vec<PathBuf>,

    /// Read families from a TOML grammar file instead of the built-in table
    #[arg(short, long, value_name = "FILE")]
    pub grammar: Option<PathBuf>,

    /// Print generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        let grammar = match &self.grammar {
            Some(path) => Grammar::from_file(path),
            None => Grammar::lox(),
        }
        .unwrap_or_exit();

        let generator = Generator::new(&grammar);

        for warning in extension_warnings(&self.destinations, generator.file_extension()) {
            eprintln!("warning: {}", warning);
        }

        if self.dry_run {
            self.run_preview(&generator)
        } else {
            self.run_generation(&generator)
        }
    }

    fn run_generation(&self, generator: &Generator) -> Result<()> {
        let result = generator
            .generate(&self.destinations)
            .wrap_err("Failed to generate code")?;

        print_summary(&result);
        Ok(())
    }

    fn run_preview(&self, generator: &Generator) -> Result<()> {
        let files = generator.preview(&self.destinations)?;

        println!("Previewing {} output", generator.language());
        for file in &files {
            println!("── {} ──", file.path);
            println!("{}", file.content);
        }

        println!("── Summary ──");
        println!("{} files would be generated", files.len());

        Ok(())
    }
}

/// Destinations whose extension does not match the generated language.
fn extension_warnings(destinations: &[PathBuf], extension: &str) -> Vec<String> {
    destinations
        .iter()
        .filter(|path| path.extension().and_then(|e| e.to_str()) != Some(extension))
        .map(|path| format!("'{}' does not have a .{} extension", path.display(), extension))
        .collect()
}

fn print_summary(result: &GenerateResult) {
    for family in &result.families {
        println!(
            "Generated {} ({} type{}) -> {}",
            family.family,
            family.types,
            if family.types == 1 { "" } else { "s" },
            family.path.display()
        );
    }
}
