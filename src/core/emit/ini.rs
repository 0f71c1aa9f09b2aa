//! INI serializer.
//!
//! Accumulates every accepted parameter into an ordered section map, then
//! serializes once at the end. Sections and keys appear in first-insertion
//! order; a later value for the same (section, key) pair wins.

use std::io::Write;

use tracing::warn;

use crate::core::key;
use crate::core::store::Parameter;
use crate::error::Result;

const DEFAULT_SECTION: &str = "main";

/// Ordered in-memory INI document.
#[derive(Debug, Default)]
pub struct IniFile {
    sections: Vec<(String, Vec<(String, String)>)>,
}

impl IniFile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, section: &str, name: &str, value: &str) {
        let entries = match self.sections.iter_mut().find(|(s, _)| s == section) {
            Some((_, entries)) => entries,
            None => {
                self.sections.push((section.to_string(), Vec::new()));
                &mut self.sections.last_mut().unwrap().1
            }
        };
        match entries.iter_mut().find(|(n, _)| n == name) {
            Some((_, v)) => *v = value.to_string(),
            None => entries.push((name.to_string(), value.to_string())),
        }
    }

    /// ConfigParser-style serialization: `[section]` headers, `key = value`
    /// lines, a blank line after each section.
    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<()> {
        for (section, entries) in &self.sections {
            writeln!(out, "[{}]", section)?;
            for (name, value) in entries {
                writeln!(out, "{} = {}", name, value)?;
            }
            writeln!(out)?;
        }
        Ok(())
    }
}

/// Drain `params` into an [`IniFile`] and serialize it to `out`.
///
/// The key is parsed from the path relative to the base that produced the
/// parameter; a missing section prefix lands the key in `[main]`.
pub fn write<W, I>(params: I, out: &mut W) -> Result<()>
where
    W: Write,
    I: IntoIterator<Item = (Parameter, String)>,
{
    let mut ini = IniFile::new();
    for (param, base) in params {
        let parsed = key::relative_path(&param.name, &base).and_then(key::ini_key);
        let Some(parsed) = parsed else {
            warn!("{}: skipping parameter because of invalid ini name", param.name);
            continue;
        };
        let section = parsed.section.as_deref().unwrap_or(DEFAULT_SECTION);

        super::debug_value(&param, &parsed.name);
        ini.insert(section, &parsed.name, &param.value);
    }
    ini.write_to(out)?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::store::ParameterKind;

    fn param(name: &str, value: &str, base: &str) -> (Parameter, String) {
        (
            Parameter {
                name: name.to_string(),
                value: value.to_string(),
                kind: ParameterKind::String,
            },
            base.to_string(),
        )
    }

    fn render(params: Vec<(Parameter, String)>) -> String {
        let mut out = Vec::new();
        write(params, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_section_and_default_section() {
        let out = render(vec![
            param("/a/sec.key", "1", "/a"),
            param("/a/key", "2", "/a"),
        ]);
        assert_eq!(out, "[sec]\nkey = 1\n\n[main]\nkey = 2\n\n");
    }

    #[test]
    fn test_last_write_wins() {
        let out = render(vec![
            param("/a/sec.key", "first", "/a"),
            param("/b/sec.key", "second", "/b"),
        ]);
        assert_eq!(out, "[sec]\nkey = second\n\n");
    }

    #[test]
    fn test_insertion_order_preserved() {
        let out = render(vec![
            param("/a/zz.k", "1", "/a"),
            param("/a/aa.k", "2", "/a"),
            param("/a/zz.j", "3", "/a"),
        ]);
        let zz = out.find("[zz]").unwrap();
        let aa = out.find("[aa]").unwrap();
        assert!(zz < aa);
        assert!(out.find("k = 1").unwrap() < out.find("j = 3").unwrap());
    }

    #[test]
    fn test_invalid_name_skipped() {
        let out = render(vec![
            param("/a/deep/nested/key", "x", "/a"),
            param("/a/ok", "y", "/a"),
        ]);
        assert!(!out.contains("nested"));
        assert!(out.contains("ok = y"));
    }
}
