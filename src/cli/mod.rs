//! Command-line interface.

pub mod completions;
pub mod output;

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use clap::{ArgAction, Parser, ValueEnum};
use tracing::debug;

use crate::core::emit::{dir::DirEmitter, env, env::EnvFlavor, ini, java};
use crate::core::store::SsmStore;
use crate::core::walk::Walker;
use crate::error::Result;

/// Walk the path of an SSM Parameter Store and build an environment file
/// from the results.
#[derive(Parser)]
#[command(
    name = "ssmenv",
    about = "Walk SSM Parameter Store paths and build config files from the results",
    version
)]
pub struct Cli {
    /// Filename (or directory, for the file style) to store the output in
    #[arg(short, long, env = "OUTPUT", value_name = "OUTPUT")]
    pub output: Option<String>,

    /// Recursively walk the parameter store path
    #[arg(
        short,
        long,
        env = "RECURSIVE",
        value_parser = clap::builder::BoolishValueParser::new(),
        action = ArgAction::SetTrue
    )]
    pub recursive: bool,

    /// What style to output. dotenv and bash both quote for the shell but
    /// bash adds "export", and docker is a plain output
    #[arg(short, long, env = "STYLE", value_enum, default_value_t = Style::Dotenv)]
    pub style: Style,

    /// Increase the logging level (app INFO, app DEBUG, all DEBUG)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Generate shell completions and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<clap_complete::Shell>,

    /// Parameter paths to walk; defaults to the values of environment
    /// variables named PARAMETER*, sorted by variable name
    #[arg(value_name = "ssm-path")]
    pub paths: Vec<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Style {
    Bash,
    Dotenv,
    Docker,
    Ini,
    Java,
    File,
}

/// Paths to walk when none are given on the command line: values of
/// `PARAMETER*` environment variables, in variable-name order.
fn paths_from_env() -> Vec<String> {
    let mut vars: Vec<(String, String)> = std::env::vars()
        .filter(|(k, _)| k.starts_with("PARAMETER"))
        .collect();
    vars.sort_by(|a, b| a.0.cmp(&b.0));
    vars.into_iter().map(|(_, v)| v).collect()
}

/// Open the stream destination: a file, or stdout when none is configured.
fn open_output(output: Option<&str>) -> Result<Box<dyn Write>> {
    match output {
        Some(path) => Ok(Box::new(File::create(path)?)),
        None => Ok(Box::new(io::stdout().lock())),
    }
}

/// Resolve arguments, connect to the store, and run the selected emitter.
pub fn execute(cli: Cli) -> Result<()> {
    if let Some(shell) = cli.completions {
        completions::execute(shell);
        return Ok(());
    }

    let paths = if cli.paths.is_empty() {
        paths_from_env()
    } else {
        cli.paths
    };

    debug!("Arg: output = {:?}", cli.output);
    debug!("Arg: recursive = {:?}", cli.recursive);
    debug!("Arg: style = {:?}", cli.style);
    debug!("Arg: paths = {:?}", paths);

    let store = SsmStore::connect()?;
    let walker = Walker::new(&store, &paths, cli.recursive)?;

    match cli.style {
        Style::Bash => env::write(walker, EnvFlavor::Bash, &mut open_output(cli.output.as_deref())?),
        Style::Dotenv => env::write(
            walker,
            EnvFlavor::Dotenv,
            &mut open_output(cli.output.as_deref())?,
        ),
        Style::Docker => env::write(
            walker,
            EnvFlavor::Docker,
            &mut open_output(cli.output.as_deref())?,
        ),
        Style::Ini => ini::write(walker, &mut open_output(cli.output.as_deref())?),
        Style::Java => java::write(walker, &mut open_output(cli.output.as_deref())?),
        Style::File => {
            let root = cli.output.as_deref().ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::InvalidInput,
                    "the file style needs --output pointing at a directory",
                )
            })?;
            DirEmitter::new(Path::new(root))?.write_all(walker)
        }
    }
}
