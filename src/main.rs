use std::{
    fs,
    path::{Path, PathBuf},
    process::ExitCode,
};

use anyhow::Context;
use clap::Parser;
use walkdir::WalkDir;
use while_lang::{error::Error, run};

/// Runs programs written in the while-language.
///
/// Given a directory, every source file directly inside it is run in file
/// name order.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Print the canonical rendering of each program before its output.
    #[arg(short, long)]
    ast: bool,

    /// Extension of the source files picked up from a directory.
    #[arg(short, long, default_value = "while")]
    extension: String,

    /// A source file, or a directory of source files.
    path: PathBuf,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    match run_all(&args) {
        Ok(status) => status,
        Err(e) => {
            eprintln!("{e:#}");
            ExitCode::FAILURE
        },
    }
}

/// Lists the files to run, in order.
fn source_files(path: &Path, extension: &str) -> anyhow::Result<Vec<PathBuf>> {
    if !path.is_dir() {
        return Ok(vec![path.to_path_buf()]);
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(path).min_depth(1)
                                   .max_depth(1)
                                   .sort_by_file_name()
    {
        let entry = entry.with_context(|| format!("failed to scan {}", path.display()))?;
        if entry.file_type().is_file()
           && entry.path().extension().is_some_and(|ext| ext == extension)
        {
            files.push(entry.into_path());
        }
    }

    log::debug!("found {} source file(s) in {}", files.len(), path.display());
    Ok(files)
}

/// Runs every source file. A parse error skips to the next file; a runtime
/// error stops the whole run.
fn run_all(args: &Args) -> anyhow::Result<ExitCode> {
    for path in source_files(&args.path, &args.extension)? {
        let source = fs::read_to_string(&path).with_context(|| {
                                                  format!("failed to read {}", path.display())
                                              })?;

        println!("*** Running {} ***", path.display());
        match run(&source) {
            Ok(result) => {
                if args.ast {
                    println!("{}", result.ast_rendering);
                }
                print!("{}", result.output);
            },
            Err(Error::Parse(e)) => eprintln!("{}: {e}", path.display()),
            Err(Error::Runtime { error, output }) => {
                log::debug!("{} aborted on line {}", path.display(), error.line());
                print!("{output}");
                eprintln!("{}: {error}", path.display());
                return Ok(ExitCode::FAILURE);
            },
        }
        println!("---------------");
    }

    Ok(ExitCode::SUCCESS)
}
