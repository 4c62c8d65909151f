//! `oasproto` command line: read an OpenAPI document, write a proto3 file.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use oasproto_core::{LoadError, ProtoOptions};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Command line arguments.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "oasproto",
    version,
    about = "Generate a proto3 file from an OpenAPI 3.x document"
)]
pub struct Args {
    /// OpenAPI document to read (JSON or YAML)
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Proto file to write
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Proto package name (overrides the config file)
    #[arg(long, value_name = "PACKAGE")]
    pub package: Option<String>,

    /// Service name (overrides the config file)
    #[arg(long, value_name = "NAME")]
    pub service: Option<String>,

    /// TOML config file with a `[proto]` table
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// Process exit status of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Proto file written.
    Success,
    /// Bad command line.
    Usage,
    /// Unreadable input, bad config, or a document that fails to parse.
    InvalidInput,
    /// The document parsed to null.
    NullDocument,
    /// The output file could not be written.
    WriteFailed,
}

impl ExitCode {
    /// Numeric process status.
    pub fn code(self) -> i32 {
        match self {
            ExitCode::Success => 0,
            ExitCode::Usage => 1,
            ExitCode::InvalidInput => 2,
            ExitCode::NullDocument => 3,
            ExitCode::WriteFailed => 4,
        }
    }
}

/// Install the stderr tracing subscriber. `RUST_LOG` overrides the default filter.
pub fn init_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "oasproto_cli=warn,oasproto_core=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Generate the output file and report the outcome on stdout/stderr.
pub fn run(args: Args) -> ExitCode {
    let options = match resolve_options(&args) {
        Ok(options) => options,
        Err(message) => return report_parse_errors(&[message]),
    };
    debug!(
        input = %args.input.display(),
        package = %options.package,
        service = %options.service_name,
        "Generating proto."
    );

    let source = match fs::read_to_string(&args.input) {
        Ok(source) => source,
        Err(err) => {
            return report_parse_errors(&[format!(
                "Failed to read {}: {err}",
                args.input.display()
            )]);
        }
    };

    let proto = match oasproto_core::generate_with_options(&source, &options) {
        Ok(proto) => proto,
        Err(LoadError::NullDocument) => {
            eprintln!("Failed to parse OpenAPI document: result is null");
            return ExitCode::NullDocument;
        }
        Err(err) => return report_parse_errors(&[err.to_string()]),
    };

    if let Err(err) = fs::write(&args.output, proto) {
        eprintln!("Failed to write proto file: {err}");
        return ExitCode::WriteFailed;
    }

    println!("Wrote proto to {}", absolute_display(&args.output));
    ExitCode::Success
}

/// Config file values first, then command line flags on top.
fn resolve_options(args: &Args) -> Result<ProtoOptions, String> {
    let mut options = match &args.config {
        Some(path) => ProtoOptions::load(path).map_err(|err| err.to_string())?,
        None => ProtoOptions::default(),
    };
    if let Some(package) = &args.package {
        options.package.clone_from(package);
    }
    if let Some(service) = &args.service {
        options.service_name.clone_from(service);
    }
    Ok(options)
}

fn report_parse_errors(messages: &[String]) -> ExitCode {
    eprintln!("Errors parsing OpenAPI spec:");
    for message in messages {
        eprintln!("  - {message}");
    }
    ExitCode::InvalidInput
}

fn absolute_display(path: &Path) -> String {
    std::path::absolute(path)
        .unwrap_or_else(|_| path.to_path_buf())
        .display()
        .to_string()
}
