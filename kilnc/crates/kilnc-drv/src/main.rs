//! kilnc - command-line front end for the Kiln lexer.
//!
//! Parses arguments with clap, sets up logging, loads `kilnc.toml` and
//! dispatches to the `tokens` or `check` subcommand.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use kilnc_drv::{Config, OutputFormat, Session};

/// kilnc - inspect how Kiln source is tokenized
#[derive(Parser, Debug)]
#[command(name = "kilnc")]
#[command(author = "Kiln Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Lexical front end for the Kiln language", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "KILNC_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "KILNC_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "KILNC_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the token stream of a file
    ///
    /// Whitespace tokens are hidden unless `--all` is given. The listing
    /// stops after the first EndOfFile token.
    Tokens(TokensCommand),

    /// Report lexical errors in a file
    ///
    /// Exits with status 1 if any error was found.
    Check(CheckCommand),
}

#[derive(Parser, Debug)]
struct TokensCommand {
    /// Source file to tokenize
    file: PathBuf,

    /// Output format (default: from config)
    #[arg(short = 'F', long, value_enum)]
    format: Option<OutputFormat>,

    /// Include whitespace tokens
    #[arg(short, long)]
    all: bool,

    /// Print the source between banners before the listing
    #[arg(short, long)]
    echo_source: bool,
}

#[derive(Parser, Debug)]
struct CheckCommand {
    /// Source file to check
    file: PathBuf,
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        },
    }
}

fn run() -> Result<ExitCode> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.no_color)?;

    let config = load_config(cli.config.as_deref())?;

    execute_command(cli.command, config)
}

/// Installs the tracing subscriber.
///
/// `RUST_LOG` wins over `--verbose` when set. Logs go to stderr so token
/// listings on stdout stay clean.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .context("failed to initialize logging")?;

    Ok(())
}

fn load_config(config_path: Option<&Path>) -> Result<Config> {
    let config = match config_path {
        Some(path) => Config::load_from_path(path)?,
        None => Config::load()?,
    };
    Ok(config)
}

fn execute_command(command: Commands, config: Config) -> Result<ExitCode> {
    match command {
        Commands::Tokens(args) => execute_tokens(args, config),
        Commands::Check(args) => execute_check(args, config),
    }
}

fn execute_tokens(args: TokensCommand, config: Config) -> Result<ExitCode> {
    let mut output = config.output;
    if let Some(format) = args.format {
        output.format = format;
    }
    output.show_whitespace |= args.all;
    output.echo_source |= args.echo_source;

    let session = Session::open(&args.file, output)?;
    print!("{}", session.render_tokens()?);
    Ok(ExitCode::SUCCESS)
}

fn execute_check(args: CheckCommand, config: Config) -> Result<ExitCode> {
    let session = Session::open(&args.file, config.output)?;
    let report = session.check();

    for diagnostic in &report.rendered {
        eprintln!("{}", diagnostic);
    }
    println!("{}", report.summary());

    Ok(if report.has_errors() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_tokens() {
        let cli = Cli::parse_from(["kilnc", "tokens", "main.kln"]);
        if let Commands::Tokens(args) = cli.command {
            assert_eq!(args.file, PathBuf::from("main.kln"));
            assert_eq!(args.format, None);
            assert!(!args.all);
            assert!(!args.echo_source);
        } else {
            panic!("Expected Tokens command");
        }
    }

    #[test]
    fn test_cli_parse_tokens_with_flags() {
        let cli = Cli::parse_from([
            "kilnc",
            "tokens",
            "main.kln",
            "--format",
            "json",
            "--all",
            "--echo-source",
        ]);
        if let Commands::Tokens(args) = cli.command {
            assert_eq!(args.format, Some(OutputFormat::Json));
            assert!(args.all);
            assert!(args.echo_source);
        } else {
            panic!("Expected Tokens command");
        }
    }

    #[test]
    fn test_cli_parse_check() {
        let cli = Cli::parse_from(["kilnc", "check", "main.kln"]);
        assert!(matches!(cli.command, Commands::Check(_)));
    }

    #[test]
    fn test_cli_parse_global_flags() {
        let cli = Cli::parse_from([
            "kilnc",
            "check",
            "main.kln",
            "--verbose",
            "--no-color",
            "--config",
            "/tmp/kilnc.toml",
        ]);
        assert!(cli.verbose);
        assert!(cli.no_color);
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/kilnc.toml")));
    }

    #[test]
    fn test_cli_rejects_unknown_format() {
        let result = Cli::try_parse_from(["kilnc", "tokens", "main.kln", "--format", "yaml"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_requires_file() {
        assert!(Cli::try_parse_from(["kilnc", "check"]).is_err());
    }
}
