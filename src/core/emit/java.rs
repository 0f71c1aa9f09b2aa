//! Java `.properties` serializer.
//!
//! Accumulates dotted keys across all paths (last-write-wins, insertion
//! ordered), then serializes once using the standard properties escaping
//! rules. Output bytes are plain ASCII (non-ASCII characters become
//! `\uXXXX`), written through a byte stream.

use std::fmt::Write as FmtWrite;
use std::io::Write;

use tracing::warn;

use crate::core::key;
use crate::core::store::Parameter;
use crate::error::Result;

/// Ordered in-memory properties map.
#[derive(Debug, Default)]
pub struct Properties {
    entries: Vec<(String, String)>,
}

impl Properties {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: &str, value: &str) {
        match self.entries.iter_mut().find(|(n, _)| n == name) {
            Some((_, v)) => *v = value.to_string(),
            None => self.entries.push((name.to_string(), value.to_string())),
        }
    }

    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<()> {
        for (name, value) in &self.entries {
            let line = format!("{}={}\n", escape(name, true), escape(value, false));
            out.write_all(line.as_bytes())?;
        }
        Ok(())
    }
}

/// Properties escaping: backslash-escape `\`, `=`, `:`, `#`, `!` and control
/// whitespace; encode anything outside printable ASCII as `\uXXXX`. Spaces
/// are escaped everywhere in keys but only in leading position in values.
fn escape(s: &str, is_key: bool) -> String {
    let mut out = String::with_capacity(s.len());
    let mut leading = true;
    for c in s.chars() {
        match c {
            '\\' | '=' | ':' | '#' | '!' => {
                out.push('\\');
                out.push(c);
            }
            ' ' if is_key || leading => out.push_str("\\ "),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if (' '..='\u{7e}').contains(&c) => out.push(c),
            c => {
                let mut buf = [0u16; 2];
                for unit in c.encode_utf16(&mut buf) {
                    let _ = write!(out, "\\u{:04x}", unit);
                }
            }
        }
        if c != ' ' {
            leading = false;
        }
    }
    out
}

/// Drain `params` into a [`Properties`] map and serialize it to `out`.
///
/// The dotted key is the whole path relative to the base that produced the
/// parameter, with `/` replaced by `.`.
pub fn write<W, I>(params: I, out: &mut W) -> Result<()>
where
    W: Write,
    I: IntoIterator<Item = (Parameter, String)>,
{
    let mut props = Properties::new();
    for (param, base) in params {
        let parsed = key::relative_path(&param.name, &base).and_then(key::java_key);
        let Some(name) = parsed else {
            warn!(
                "{}: skipping parameter because of invalid Java property name",
                param.name
            );
            continue;
        };

        super::debug_value(&param, &name);
        props.insert(&name, &param.value);
    }
    props.write_to(out)?;
    out.flush()?;
    Ok(())
}
