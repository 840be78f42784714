use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use log::LevelFilter;
use parex::{run_json, run_parse, run_tokens, EXIT_IO_ERROR};
use parex_parser::parser::config::parse_max_depth;
use parex_parser::parser::ParserConfig;

#[derive(Debug, Parser)]
#[command(
    name = "parex",
    version,
    about = "Parse parenthesized expressions into trees",
    long_about = "parex reads a sequence of atoms and parentheses and builds the nested\n\
        expression tree they describe. Every '(' must be matched by a ')'.\n\n\
        EXAMPLES:\n\
        \n  parex parse input.txt                 Print the tree in source form\n\
        \n  echo '((a))' | parex json             Print the tree as JSON\n\
        \n  parex tokens input.txt                List the tokens with positions\n\
        \n  parex --allow-trailing parse many.txt Parse several top-level expressions"
)]
struct Cli {
    /// Increase verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(flatten)]
    options: ParseOptions,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Args, Clone, Default)]
struct ParseOptions {
    /// Maximum group nesting depth (a number, or 'none' for no limit) [env: PAREX_MAX_DEPTH]
    #[arg(long = "max-depth", value_name = "N", value_parser = parse_depth_arg, global = true, conflicts_with = "unlimited_depth")]
    max_depth: Option<DepthLimit>,

    /// Disable the nesting depth limit
    #[arg(long = "unlimited-depth", global = true)]
    unlimited_depth: bool,

    /// Parse every top-level expression instead of requiring exactly one [env: PAREX_ALLOW_TRAILING]
    #[arg(long = "allow-trailing", global = true)]
    allow_trailing: bool,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Parse the input and print the tree in source form
    Parse(InputArgs),

    /// Parse the input and print the tree as JSON, one expression per line
    Json(InputArgs),

    /// Print the token stream with line and column numbers
    Tokens(InputArgs),
}

#[derive(Debug, Args, Clone, Default)]
struct InputArgs {
    /// Input file (reads from stdin if not provided)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,
}

/// Value of `--max-depth`; `None` inside means no limit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct DepthLimit(Option<usize>);

fn parse_depth_arg(raw: &str) -> Result<DepthLimit, String> {
    parse_max_depth(raw)
        .map(DepthLimit)
        .ok_or_else(|| format!("invalid depth '{raw}': expected a number or 'none'"))
}

fn level_for(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn init_logging(verbose: u8) {
    // RUST_LOG, when set, takes precedence over -v
    let _ = env_logger::Builder::new()
        .filter_level(level_for(verbose))
        .parse_default_env()
        .try_init();
}

/// Environment defaults with command-line flags layered on top
fn resolve_config(options: &ParseOptions, base: ParserConfig) -> ParserConfig {
    let mut config = base;
    if let Some(DepthLimit(max_depth)) = options.max_depth {
        config.max_depth = max_depth;
    }
    if options.unlimited_depth {
        config.max_depth = None;
    }
    if options.allow_trailing {
        config.allow_trailing = true;
    }
    config
}

fn read_source_from_input(input: &Option<PathBuf>) -> Result<String, String> {
    if let Some(path) = input {
        fs::read_to_string(path).map_err(|e| format!("failed to read '{}': {e}", path.display()))
    } else {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| format!("failed to read from stdin: {e}"))?;
        Ok(buf)
    }
}

fn run_cli() -> i32 {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = resolve_config(&cli.options, ParserConfig::from_env());
    log::debug!("effective configuration: {config:?}");

    let command = cli.command.unwrap_or(Command::Parse(InputArgs::default()));
    let input = match &command {
        Command::Parse(args) | Command::Json(args) | Command::Tokens(args) => &args.input,
    };
    let source = match read_source_from_input(input) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: {e}");
            return EXIT_IO_ERROR;
        }
    };

    let mut out = io::stdout().lock();
    let mut err = io::stderr().lock();
    match command {
        Command::Parse(_) => run_parse(&source, &config, &mut out, &mut err),
        Command::Json(_) => run_json(&source, &config, &mut out, &mut err),
        Command::Tokens(_) => run_tokens(&source, &mut out, &mut err),
    }
}

fn main() {
    std::process::exit(run_cli());
}
