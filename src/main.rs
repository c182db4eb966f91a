//! Read-print loop for the Mallow reader
//!
//! With no arguments, runs an interactive prompt with line history at
//! `~/.mallow_history`. Each remaining command-line argument is otherwise
//! treated as one input line and processed the same way.

use std::path::PathBuf;

use anyhow::Result;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use mallow::{Reader, Value};

const PROMPT: &str = "user> ";
const HISTORY_FILE: &str = ".mallow_history";

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if args.is_empty() {
        return repl();
    }

    for line in &args {
        rep(line);
    }

    Ok(())
}

/// read -> eval -> print for one input line
///
/// Reader errors are the only recovery point: the message is printed in
/// place of a result and the caller moves on to the next line.
fn rep(line: &str) {
    match Reader::parse(line) {
        Ok(ast) => println!("{}", eval(ast)),
        Err(err) => println!("{}", err),
    }
}

/// Evaluation is not implemented yet; the form passes through unchanged
fn eval(ast: Value) -> Value {
    ast
}

fn repl() -> Result<()> {
    println!("Mallow {} read-print loop", mallow::VERSION);
    println!("Press Ctrl-D to exit.");
    println!();

    let mut editor = DefaultEditor::new()?;

    let history_path = history_path();
    if editor.load_history(&history_path).is_err() {
        tracing::debug!(path = %history_path.display(), "no existing history file");
    }

    loop {
        match editor.readline(PROMPT) {
            Ok(line) => {
                let line = line.trim();

                if line.is_empty() {
                    continue;
                }

                editor.add_history_entry(line)?;
                rep(line);
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => return Err(err.into()),
        }
    }

    editor.save_history(&history_path)?;

    Ok(())
}

fn history_path() -> PathBuf {
    let mut path = dirs::home_dir().unwrap_or_default();
    path.push(HISTORY_FILE);
    path
}
