use std::{fs, process::ExitCode};

use clap::{ArgAction, Parser};
use exprtree::{calculate_with, interpreter::parser::core::{DEFAULT_MAX_DEPTH, TreeBuilder}};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Expression evaluated when no input is given: Machin's formula for PI.
const DEMO_EXPRESSION: &str = "16 * atan ( 1 / 5 ) - 4 * atan ( 1 / 239 )";

/// exprtree parses a whitespace-delimited mathematical expression, prints it
/// back in canonical form and evaluates it.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells exprtree to read the expression from the file named by
    /// `contents`.
    #[arg(short, long)]
    file: bool,

    /// Maximum nesting depth accepted by the parser.
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Increases log verbosity on stderr (`-v` debug, `-vv` trace).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// The expression, with every token separated by whitespace.
    #[arg(default_value = DEMO_EXPRESSION)]
    contents: String,
}

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(directive_for_verbosity(args.verbose))),
        )
        .with_writer(std::io::stderr)
        .init();

    let source = if args.file {
        match fs::read_to_string(&args.contents) {
            Ok(source) => source,
            Err(e) => {
                eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist? \
                           ({e})",
                          &args.contents);
                return ExitCode::FAILURE;
            },
        }
    } else {
        args.contents
    };

    debug!(max_depth = args.max_depth, "calculating expression");
    match calculate_with(&TreeBuilder::with_max_depth(args.max_depth), &source) {
        Ok(calculation) => {
            println!("{calculation}");
            ExitCode::SUCCESS
        },
        Err(e) => {
            println!("{e}");
            ExitCode::FAILURE
        },
    }
}

const fn directive_for_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "exprtree=warn",
        1 => "exprtree=debug",
        _ => "exprtree=trace",
    }
}
