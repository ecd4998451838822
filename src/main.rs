use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use strqueue::harness::{Command, Interpreter, Outcome};

/// Interactive console driving the string queue API.
#[derive(Parser)]
#[command(name = "qshell", version, about)]
struct Args {
    /// Read commands from a file instead of stdin
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt().with_max_level(level).init();

    let mut interpreter = Interpreter::new();
    match args.file {
        Some(path) => {
            let file =
                File::open(&path).with_context(|| format!("cannot open {}", path.display()))?;
            run_lines(&mut interpreter, BufReader::new(file).lines(), false)
        }
        None => run_lines(&mut interpreter, io::stdin().lock().lines(), true),
    }
}

fn run_lines<I>(interpreter: &mut Interpreter, lines: I, interactive: bool) -> Result<()>
where
    I: Iterator<Item = io::Result<String>>,
{
    if interactive {
        print_prompt()?;
    }
    for line in lines {
        let line = line.context("failed to read command line")?;
        let trimmed = line.trim();
        // Blank lines and `#` comments are skipped, so command files can
        // be annotated.
        if !trimmed.is_empty() && !trimmed.starts_with('#') {
            debug!(command = trimmed, "executing");
            match trimmed.parse::<Command>().and_then(|cmd| interpreter.run(cmd)) {
                Ok(Outcome::Quit) => break,
                Ok(Outcome::Message(message)) => println!("{message}"),
                Ok(Outcome::Silent) => {}
                Err(err) => eprintln!("error: {err}"),
            }
        }
        if interactive {
            print_prompt()?;
        }
    }
    Ok(())
}

fn print_prompt() -> Result<()> {
    print!("q> ");
    io::stdout().flush().context("cannot flush prompt")
}
