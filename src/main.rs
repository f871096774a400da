use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::PathBuf,
    process::ExitCode,
};

use clap::{ArgAction, Parser};
use commacalc::{error::INVALID_EXPRESSION, evaluate_expression, parse};
use tracing::{error, level_filters::LevelFilter};
use tracing_subscriber::EnvFilter;

/// commacalc evaluates mathematical expressions written with a decimal
/// comma, such as `sin (pi / 2) + 0,5`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Evaluates every non-empty line of a file instead of an argument.
    #[arg(short, long, value_name = "PATH", conflicts_with = "expression")]
    file: Option<PathBuf>,

    /// Prints the fully parenthesized expression tree instead of the value.
    #[arg(short, long)]
    tree: bool,

    /// Raises log verbosity; repeat for more detail.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// The expression to evaluate. Read from standard input when absent.
    expression: Option<String>,
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    let filter = EnvFilter::builder().with_default_directive(default.into())
                                     .from_env_lossy();

    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(io::stderr)
                             .init();
}

fn render(expression: &str, tree: bool) -> String {
    if !tree {
        return evaluate_expression(expression);
    }

    if expression.trim().is_empty() {
        return "0".to_string();
    }

    parse(expression).map_or_else(|_| INVALID_EXPRESSION.to_string(), |expr| expr.to_string())
}

fn run_lines(reader: impl BufRead, tree: bool) -> io::Result<()> {
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        println!("{}", render(&line, tree));
    }

    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    let result = match (&args.expression, &args.file) {
        (Some(expression), _) => {
            println!("{}", render(expression, args.tree));
            Ok(())
        },
        (None, Some(path)) => File::open(path).and_then(|file| run_lines(BufReader::new(file), args.tree)),
        (None, None) => run_lines(io::stdin().lock(), args.tree),
    };

    if let Err(e) = result {
        error!(error = %e, "failed to read input");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
