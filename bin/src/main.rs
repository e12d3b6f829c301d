use std::{
    io::{stdin, stdout, Read, Write},
    path::{Path, PathBuf},
    process::ExitCode,
};

use anyhow::Context;
use clap::Parser;

/// Translate postfix (RPN) arithmetic into LaTeX math.
#[derive(clap::Parser)]
struct Args {
    /// File to read the expression from. Reads stdin if omitted or `-`.
    input: Option<PathBuf>,

    /// Write the LaTeX to this file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn read_input(input: Option<&Path>) -> anyhow::Result<String> {
    match input {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        _ => {
            let mut source = String::new();
            stdin().read_to_string(&mut source).context("Failed to read stdin")?;
            Ok(source)
        }
    }
}

fn write_output(latex: &str, output: Option<&Path>) -> anyhow::Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, format!("{latex}\n"))
                .with_context(|| format!("Failed to write {}", path.display()))?;
            eprintln!("Generated {}", path.display());
        }
        None => writeln!(stdout(), "{latex}")?,
    }
    Ok(())
}

fn main() -> anyhow::Result<ExitCode> {
    env_logger::init();
    let args = Args::parse();

    let source = read_input(args.input.as_deref())?;
    log::debug!("Read {} bytes of input", source.len());

    match translator::translate(&source) {
        Ok(latex) => {
            write_output(&latex, args.output.as_deref())?;
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            eprintln!("{}", e.report(&source));
            Ok(ExitCode::FAILURE)
        }
    }
}
