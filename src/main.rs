//! ssmenv - Render AWS SSM Parameter Store paths into config files.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use ssmenv::cli::{execute, output, Cli};
use ssmenv::error::Error;

fn main() {
    let cli = Cli::parse();

    // SSMENV_LOG overrides the -v mapping entirely.
    let filter = EnvFilter::try_from_env("SSMENV_LOG").unwrap_or_else(|_| match cli.verbose {
        0 => EnvFilter::new("ssmenv=warn"),
        1 => EnvFilter::new("ssmenv=info"),
        2 => EnvFilter::new("ssmenv=debug"),
        _ => EnvFilter::new("debug"),
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    if let Err(e) = execute(cli) {
        let hint = match &e {
            Error::EmptyPath => Some("pass at least one non-empty ssm-path"),
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(msg) = hint {
            output::hint(msg);
        }
        std::process::exit(1);
    }
}
