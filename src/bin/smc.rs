//! Command-line interface for simple-markup
//!
//! Usage:
//!   smc convert `<path|->` [--from `<dialect>`] [--to `<format>`] [--output `<file>`]
//!   smc dialects                - List available dialects
//!   smc formats                 - List available output formats
//!
//! Every command accepts `--config <file>`, layered over the built-in defaults
//! and an optional `smc.toml` in the working directory.

use clap::{Parser, Subcommand};
use simple_markup::config::{Loader, SmcConfig};
use simple_markup::formats::FormatRegistry;
use simple_markup::Converter;
use std::fs;
use std::io::{self, IsTerminal, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

const LOCAL_CONFIG: &str = "smc.toml";

#[derive(Parser)]
#[command(name = "smc", version)]
#[command(about = "Convert txt2tags and DokuWiki style markup to HTML")]
struct Cli {
    /// Configuration file layered over the defaults
    #[arg(long, short = 'c', global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a document and write the result to stdout
    Convert {
        /// Input file, or `-` for stdin
        input: String,
        /// Source dialect (overrides convert.dialect)
        #[arg(long, short = 'f')]
        from: Option<String>,
        /// Output format (overrides convert.format)
        #[arg(long, short = 't')]
        to: Option<String>,
        /// Write the result to a file instead of stdout
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },
    /// List available dialects
    Dialects,
    /// List available output formats
    Formats,
}

/// Process exit status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Exit {
    Success = 0,
    ConversionFailed = 1,
    IoFailed = 2,
    Usage = 3,
}

impl From<Exit> for ExitCode {
    fn from(exit: Exit) -> Self {
        ExitCode::from(exit as u8)
    }
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return if err.use_stderr() {
                Exit::Usage
            } else {
                Exit::Success
            }
            .into();
        }
    };
    run(cli).into()
}

fn run(cli: Cli) -> Exit {
    match cli.command {
        Commands::Convert {
            input,
            from,
            to,
            output,
        } => {
            let mut overrides = Vec::new();
            if let Some(dialect) = from {
                overrides.push(("convert.dialect", dialect));
            }
            if let Some(format) = to {
                overrides.push(("convert.format", format));
            }
            match load_config(cli.config.as_deref(), overrides) {
                Ok(config) => handle_convert(&config, &input, output.as_deref()),
                Err(exit) => exit,
            }
        }
        Commands::Dialects => match load_config(cli.config.as_deref(), Vec::new()) {
            Ok(config) => handle_dialects(&config),
            Err(exit) => exit,
        },
        Commands::Formats => handle_formats(),
    }
}

/// Load configuration and install the log subscriber it asks for
fn load_config(path: Option<&Path>, overrides: Vec<(&str, String)>) -> Result<SmcConfig, Exit> {
    let mut loader = Loader::new().with_optional_file(LOCAL_CONFIG);
    if let Some(path) = path {
        loader = loader.with_file(path);
    }
    for (key, value) in overrides {
        loader = loader.set_override(key, value).map_err(|e| {
            eprintln!("Configuration error: {e}");
            Exit::Usage
        })?;
    }
    let config = loader.build().map_err(|e| {
        eprintln!("Configuration error: {e}");
        Exit::Usage
    })?;
    init_logging(&config.logging.filter);
    Ok(config)
}

/// `RUST_LOG` wins over `logging.filter`
fn init_logging(filter: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .try_init();
}

fn handle_convert(config: &SmcConfig, input: &str, output: Option<&Path>) -> Exit {
    let converter = match config.converter() {
        Ok(converter) => converter,
        Err(e) => {
            eprintln!("{e}");
            return Exit::Usage;
        }
    };
    let format = config.convert.format.as_str();
    if converter.formats().resolve(format).is_err() {
        eprintln!("Unknown format '{format}'");
        eprintln!("Available formats: {}", converter.formats().names().join(", "));
        return Exit::Usage;
    }

    let source = match read_input(input) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error reading {input}: {e}");
            return Exit::IoFailed;
        }
    };

    let rendered = match convert(&converter, &source, format) {
        Ok(rendered) => rendered,
        Err(exit) => return exit,
    };

    match write_output(output, &rendered) {
        Ok(()) => Exit::Success,
        Err(e) => {
            eprintln!("Error writing output: {e}");
            Exit::IoFailed
        }
    }
}

fn convert(converter: &Converter, source: &str, format: &str) -> Result<String, Exit> {
    debug!(dialect = %converter.dialect().name, format, "converting");
    converter.convert_to(source, format).map_err(|e| {
        eprintln!("{e}");
        Exit::ConversionFailed
    })
}

fn read_input(input: &str) -> io::Result<String> {
    if input == "-" {
        let mut source = String::new();
        io::stdin().read_to_string(&mut source)?;
        Ok(source)
    } else {
        fs::read_to_string(input)
    }
}

fn write_output(output: Option<&Path>, rendered: &str) -> io::Result<()> {
    match output {
        Some(path) => fs::write(path, rendered),
        None => {
            let mut stdout = io::stdout().lock();
            if !rendered.is_empty() {
                writeln!(stdout, "{rendered}")?;
            }
            stdout.flush()
        }
    }
}

fn handle_dialects(config: &SmcConfig) -> Exit {
    let registry = match config.dialect_registry() {
        Ok(registry) => registry,
        Err(e) => {
            eprintln!("{e}");
            return Exit::Usage;
        }
    };
    for name in registry.list_dialects() {
        println!("{name}");
    }
    Exit::Success
}

fn handle_formats() -> Exit {
    let registry = FormatRegistry::with_defaults();
    for (name, description) in registry.descriptions() {
        println!("{name:<6} {description}");
    }
    Exit::Success
}
