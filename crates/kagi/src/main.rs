//! kagi - Kagi FastGPT from the command line
//!
//! # Examples
//!
//! ```bash
//! kagi golang best practices
//! kagi -f json golang concurrency > result.json
//! echo "explain kubernetes" | kagi -q
//! ```

mod cli;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use std::env;
use std::io::{self, Write};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use kagi::config::ENV_API_KEY;
use kagi::render::should_use_color;
use kagi::{render, resolve_query, ApiClient, FileConfig, Settings, StdTerminal, Terminal};

use crate::cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {}", "Error:".red().bold(), err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    if cli.version {
        print_version(cli.quiet);
        return Ok(());
    }

    // Settings (and the API key check) come before stdin is touched
    let file = FileConfig::load()?;
    let settings = Settings::resolve(&cli.overrides(), env::var(ENV_API_KEY).ok(), &file)?;

    init_logging(settings.verbose, settings.debug);

    let terminal = StdTerminal;
    let query = resolve_query(&cli.query, io::stdin().lock(), terminal.stdin_is_terminal())?;
    let config = settings.render_config(query);

    tracing::debug!(api_key = "***", "using API key");
    tracing::debug!(query = %config.query, "query");
    tracing::debug!(format = %config.format, "format");
    tracing::debug!(timeout = settings.timeout, "timeout");
    tracing::debug!(color = %config.color, "color");

    tracing::info!("Querying Kagi FastGPT API...");
    let client = ApiClient::new(settings.api_key.clone(), settings.timeout)?;
    let response = client.query(&config.query)?;
    tracing::info!("Response received ({}ms)", response.meta.ms);

    let use_color = should_use_color(config.color, terminal.stdout_is_terminal());
    let output = render(&response, &config, use_color)?;

    let mut stdout = io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;

    Ok(())
}

/// Initialize stderr logging; `--debug` and `--verbose` override `RUST_LOG`
fn init_logging(verbose: bool, debug: bool) {
    let filter = if debug {
        EnvFilter::new("kagi=debug")
    } else if verbose {
        EnvFilter::new("kagi=info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn print_version(quiet: bool) {
    let version = env!("CARGO_PKG_VERSION");
    if quiet {
        println!("{}", version);
    } else {
        println!("kagi v{}", version);
        println!("Repository: {}", kagi::REPOSITORY);
        println!("Report issues: {}/issues/new", kagi::REPOSITORY);
    }
}
