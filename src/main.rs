use std::{
    fs,
    io::{self, BufRead, Write},
    path::{Path, PathBuf},
    process::ExitCode,
};

use calcline::{
    Session,
    interpreter::{evaluator::function::FUNCTION_NAMES, parser::grammar::Grammar},
};
use clap::Parser;
use log::{debug, info};

/// The keyword that ends an interactive session.
const EXIT_KEYWORD: &str = "exit";

/// calcline is an interactive calculator with variables, hexadecimal and
/// binary literals, and the functions sin and cos.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Evaluates every line of this file in one session instead of reading
    /// from standard input.
    file: Option<PathBuf>,

    /// Prints the parse tree of every line before its value.
    #[arg(short, long)]
    tree: bool,

    /// Prints the grammar rules and exits.
    #[arg(short, long)]
    grammar: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    if args.grammar {
        print_grammar(&Grammar::new());
        return ExitCode::SUCCESS;
    }

    match args.file.as_deref() {
        Some(path) => run_file(path, args.tree),
        None => run_interactive(args.tree),
    }
}

/// Evaluates every line of `path` in one session.
///
/// Failing lines are echoed with their diagnostic and the session carries on;
/// the exit code reports whether any line failed.
fn run_file(path: &Path, tree: bool) -> ExitCode {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) => {
            eprintln!("Failed to read the input file '{}': {e}", path.display());
            return ExitCode::FAILURE;
        },
    };

    let mut session = Session::new();
    let mut failures = 0usize;

    for line in contents.lines() {
        if line.trim().is_empty() {
            continue;
        }
        if !run_line(&mut session, line, tree, true) {
            failures += 1;
        }
    }

    let environment = session.environment();
    info!("evaluated {} with {failures} failing line(s) and {} binding(s)",
          path.display(),
          environment.len());
    for (name, value) in environment.iter() {
        debug!("{name} = {value}");
    }

    if failures == 0 { ExitCode::SUCCESS } else { ExitCode::FAILURE }
}

/// Reads and evaluates lines from standard input until `exit` or end of
/// input.
fn run_interactive(tree: bool) -> ExitCode {
    let mut session = Session::new();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!("Enter '{EXIT_KEYWORD}' to exit the program.");

    loop {
        print!("> ");
        if let Err(e) = io::stdout().flush() {
            eprintln!("Failed to write to standard output: {e}");
            return ExitCode::FAILURE;
        }

        let line = match lines.next() {
            Some(Ok(line)) => line,
            Some(Err(e)) => {
                eprintln!("Failed to read from standard input: {e}");
                return ExitCode::FAILURE;
            },
            None => {
                println!();
                return ExitCode::SUCCESS;
            },
        };

        let trimmed = line.trim();
        if trimmed == EXIT_KEYWORD {
            println!("Bye bye.");
            return ExitCode::SUCCESS;
        }
        if trimmed.is_empty() {
            continue;
        }

        run_line(&mut session, &line, tree, false);
    }
}

/// Parses, evaluates and prints one line. Returns `false` on a syntax error.
///
/// `echo` repeats the line under a `> ` prompt before a diagnostic so the
/// caret lines up when the input was not typed at the prompt.
fn run_line(session: &mut Session, line: &str, tree: bool, echo: bool) -> bool {
    match session.parse(line) {
        Ok(expr) => {
            if tree {
                println!("{expr}");
            }
            let value = session.evaluate_tree(&expr);
            println!("{line} = {value}");
            true
        },
        Err(error) => {
            if echo {
                println!("> {line}");
            }
            println!("{}", error.render(line));
            false
        },
    }
}

fn print_grammar(grammar: &Grammar) {
    let width = grammar.rules().map(|rule| rule.name().len()).max().unwrap_or(0);
    for rule in grammar.rules() {
        let marker = if rule == grammar.start() { "*" } else { " " };
        println!("{marker} {:<width$} <- {}", rule.name(), rule.definition());
    }
    println!();
    println!("functions: {}", FUNCTION_NAMES.join(", "));
}
