//! # Check and Describe Subcommands
//!
//! - `guardkit check --schema <file> <documents...>` — builds the schema's
//!   guard once, then classifies each document and prints `PASS`/`FAIL`
//!   with the diagnostics captured during that document's evaluation.
//!   Exit code 1 if any document fails.
//! - `guardkit describe --schema <file>` — prints the resolved guards.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;

use guardkit_core::config;
use guardkit_core::diagnostics::{capture, Diagnostic};
use guardkit_core::Guard;

use crate::document::load_document;
use crate::schema_file::SchemaFile;

/// Arguments for `guardkit check`.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Schema file (YAML or JSON).
    #[arg(long, short)]
    pub schema: PathBuf,

    /// Documents to check (YAML or JSON).
    #[arg(required = true)]
    pub documents: Vec<PathBuf>,

    /// Replace offending values in diagnostics with a placeholder.
    #[arg(long)]
    pub redact: bool,

    /// Print only the verdict lines, not the diagnostics.
    #[arg(long, short)]
    pub quiet: bool,
}

/// Arguments for `guardkit describe`.
#[derive(Args, Debug)]
pub struct DescribeArgs {
    /// Schema file (YAML or JSON).
    #[arg(long, short)]
    pub schema: PathBuf,
}

/// Outcome of checking one document.
#[derive(Debug, Clone)]
pub struct DocumentReport {
    pub path: PathBuf,
    pub passed: bool,
    pub diagnostics: Vec<Diagnostic>,
}

/// Classify `path` with `guard`, capturing diagnostics.
pub fn check_document(guard: &Guard, path: &Path) -> Result<DocumentReport> {
    let value = load_document(path)?;
    let (passed, diagnostics) = capture(|| guard.check(&value));
    tracing::info!(document = %path.display(), passed, "document checked");
    Ok(DocumentReport {
        path: path.to_path_buf(),
        passed,
        diagnostics,
    })
}

/// Run `guardkit check`. Returns the process exit code.
pub fn run_check(args: &CheckArgs) -> Result<u8> {
    let schema = SchemaFile::load(&args.schema)?;
    let guard = schema
        .build_guard()
        .with_context(|| format!("cannot build guard from {}", args.schema.display()))?;

    if args.redact {
        config::set_redact_values(true);
    }

    let mut failed = 0usize;
    for path in &args.documents {
        let report = check_document(&guard, path)?;
        let verdict = if report.passed { "PASS" } else { "FAIL" };
        println!("{verdict} {}", report.path.display());
        if !args.quiet {
            for diagnostic in &report.diagnostics {
                println!("  {diagnostic}");
            }
        }
        if !report.passed {
            failed += 1;
        }
    }

    println!(
        "{} of {} document(s) conform to {}",
        args.documents.len() - failed,
        args.documents.len(),
        schema.name
    );

    Ok(if failed == 0 { 0 } else { 1 })
}

/// Run `guardkit describe`.
pub fn run_describe(args: &DescribeArgs) -> Result<u8> {
    let schema = SchemaFile::load(&args.schema)?;
    print!("{}", schema.describe()?);
    Ok(0)
}
