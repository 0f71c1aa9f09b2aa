//! Shell-style env file serializer (bash, dotenv, docker).
//!
//! All three write a `# <full name>` comment followed by `name=value`; bash
//! prefixes `export `, and bash/dotenv shell-quote the value while docker
//! leaves it raw (Docker's `--env-file` does no unquoting).

use std::io::Write;

use tracing::warn;

use crate::core::key;
use crate::core::store::Parameter;
use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvFlavor {
    Bash,
    Dotenv,
    Docker,
}

impl EnvFlavor {
    fn quoted(self) -> bool {
        matches!(self, EnvFlavor::Bash | EnvFlavor::Dotenv)
    }
}

fn is_shell_safe(c: char) -> bool {
    c.is_ascii_alphanumeric() || "_@%+=:,./-".contains(c)
}

/// POSIX single-quote scheme: safe strings pass through, anything else is
/// wrapped in single quotes with embedded quotes spliced as `'"'"'`.
pub fn shell_quote(s: &str) -> String {
    if s.is_empty() {
        return "''".to_string();
    }
    if s.chars().all(is_shell_safe) {
        return s.to_string();
    }
    format!("'{}'", s.replace('\'', "'\"'\"'"))
}

/// Stream parameters to `out` as shell assignments.
///
/// Parameters whose trailing name segment is not a valid shell identifier
/// are warned about and skipped.
pub fn write<W, I>(params: I, flavor: EnvFlavor, out: &mut W) -> Result<()>
where
    W: Write,
    I: IntoIterator<Item = (Parameter, String)>,
{
    for (param, _base) in params {
        let Some(name) = key::env_name(&param.name) else {
            warn!("{}: skipping parameter because of invalid bash name", param.name);
            continue;
        };
        let value = if flavor.quoted() {
            shell_quote(&param.value)
        } else {
            param.value.clone()
        };

        super::debug_value(&param, name);

        writeln!(out, "# {}", param.name)?;
        if flavor == EnvFlavor::Bash {
            write!(out, "export ")?;
        }
        writeln!(out, "{}={}", name, value)?;
    }
    out.flush()?;
    Ok(())
}
