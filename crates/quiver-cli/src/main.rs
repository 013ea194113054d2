//! Quiver CLI - run the pipeline over a source file
//!
//! Prints the requested artefacts and exits non-zero when a stage fails or
//! a declared test does not pass.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use quiver_compiler::{compile_source, CompileOutput};
use quiver_types::SourceFile;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "quiver")]
#[command(about = "Lex, parse, bind and test a Quiver program", long_about = None)]
struct Cli {
    /// Source file to compile
    path: PathBuf,

    /// Artefact to print
    #[arg(long, value_enum, default_value_t = Emit::Tests)]
    emit: Emit,

    /// Print artefacts as pretty JSON instead of a debug dump
    #[arg(long)]
    json: bool,

    /// Print nothing; report through the exit status only
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Emit {
    Tokens,
    Ast,
    Program,
    Tests,
    All,
}

fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    let source = std::fs::read_to_string(&cli.path)
        .with_context(|| format!("failed to read {}", cli.path.display()))?;
    let name = cli.path.display().to_string();
    let output = compile_source(&SourceFile::new(name.clone(), source));

    if !cli.quiet {
        if cli.json {
            print_json(&output, cli.emit)?;
        } else {
            print_dump(&output, cli.emit);
        }

        if let Some(diagnostic) = &output.diagnostic {
            eprintln!("{name}: {diagnostic}");
            if !diagnostic.source_line.is_empty() {
                eprintln!("  | {}", diagnostic.source_line);
            }
        }
    }

    if output.all_tests_passed() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}

fn print_json(output: &CompileOutput, emit: Emit) -> Result<()> {
    let json = match emit {
        Emit::Tokens => serde_json::to_string_pretty(&output.lexemes),
        Emit::Ast => serde_json::to_string_pretty(&output.ast),
        Emit::Program => serde_json::to_string_pretty(&output.program),
        Emit::Tests => serde_json::to_string_pretty(&output.results),
        Emit::All => serde_json::to_string_pretty(output),
    }
    .context("failed to serialize output")?;
    println!("{json}");
    Ok(())
}

fn print_dump(output: &CompileOutput, emit: Emit) {
    let all = emit == Emit::All;

    if all || emit == Emit::Tokens {
        if let Some(lexemes) = &output.lexemes {
            for lexeme in lexemes {
                println!("{}\t{}", lexeme.span, lexeme.token);
            }
        }
    }
    if all || emit == Emit::Ast {
        if let Some(ast) = &output.ast {
            println!("{ast:#?}");
        }
    }
    if all || emit == Emit::Program {
        if let Some(program) = &output.program {
            println!("{program:#?}");
        }
    }
    if all || emit == Emit::Tests {
        if let Some(results) = &output.results {
            print!("{results}");
        }
    }
    if all {
        println!("fingerprint: {}", output.fingerprint);
    }
}
