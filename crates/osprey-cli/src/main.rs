//! Osprey command-line shell.
//!
//! This is the thin caller around the probe engine: it collects one raw
//! identifier, re-validates it, runs the check and prints the result lines.
//! Core logic lives in the `crates/` directory.

use anyhow::Result;
use clap::{Parser, ValueEnum};
use osprey_core::identifier::{is_email, is_username};
use osprey_core::{IdentifierKind, OspreyConfig};
use osprey_probe::ProbeEngine;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "osprey",
    version,
    about = "Probe third-party endpoints for accounts tied to an email, phone number or username"
)]
struct Args {
    /// Identifier to check (email, phone number or username)
    identifier: String,

    /// Force the identifier kind instead of auto-detecting
    #[arg(long, value_enum)]
    kind: Option<KindArg>,

    /// Username site-list file (one URL template per line)
    #[arg(long)]
    sites: Option<PathBuf>,

    /// Configuration file (defaults to the XDG config path)
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum KindArg {
    Email,
    Phone,
    Username,
}

impl From<KindArg> for IdentifierKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Email => Self::Email,
            KindArg::Phone => Self::Phone,
            KindArg::Username => Self::Username,
        }
    }
}

/// Initialize tracing subscriber for logging
fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn,osprey=info"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(filter)
        .init();
}

fn load_config(args: &Args) -> Result<OspreyConfig> {
    let mut config = match &args.config {
        Some(path) => OspreyConfig::load_from(path)?,
        None => OspreyConfig::load_with_env()?,
    };
    if let Some(sites) = &args.sites {
        config.probe.sites_file = sites.clone();
    }
    Ok(config)
}

async fn run(args: Args) -> Result<ExitCode> {
    let config = load_config(&args)?;
    let engine = ProbeEngine::new(config);

    let input = args.identifier.trim();
    let kind = args
        .kind
        .map(IdentifierKind::from)
        .or_else(|| IdentifierKind::detect(input));

    let Some(kind) = kind else {
        eprintln!("could not classify '{input}' as email, phone number or username");
        return Ok(ExitCode::from(2));
    };

    // Validate up front so malformed input exits distinctly
    let valid = match kind {
        IdentifierKind::Email => is_email(input),
        IdentifierKind::Username => is_username(input),
        IdentifierKind::Phone => true,
    };
    if !valid {
        eprintln!("'{input}' is not a valid {kind}");
        return Ok(ExitCode::from(2));
    }

    info!(%kind, "checking identifier");
    let lines = match kind {
        IdentifierKind::Email => engine.check_email(input).await?,
        IdentifierKind::Phone => engine.check_phone(input).await?,
        IdentifierKind::Username => engine.check_username(input).await?,
    };

    if lines.is_empty() {
        println!("nothing found");
    } else {
        for line in lines {
            println!("{line}");
        }
    }

    Ok(ExitCode::SUCCESS)
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    init_tracing();
    let args = Args::parse();
    run(args).await
}
