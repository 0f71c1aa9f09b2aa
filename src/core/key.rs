//! Parameter name -> emission key parsing.
//!
//! Each output style has its own rule for turning a slash-delimited store
//! name into an output key. These are explicit parsers returning `Option`;
//! `None` means the parameter does not fit the style and must be skipped.

/// Trailing segment of a full name, valid as a shell variable:
/// `[A-Za-z_][A-Za-z0-9_]*`.
pub fn env_name(name: &str) -> Option<&str> {
    let (_, tail) = name.rsplit_once('/')?;
    let mut chars = tail.chars();
    let first = chars.next()?;
    if !(first.is_ascii_alphabetic() || first == '_') {
        return None;
    }
    if chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        Some(tail)
    } else {
        None
    }
}

/// An INI key parsed from a path relative to its base.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IniKey {
    pub section: Option<String>,
    pub name: String,
}

fn ini_word(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

/// Parse `/name` or `/section.name` or `/section/name`; section and name are
/// both `[A-Za-z0-9_-]+`. Anything else (deeper nesting, other characters)
/// does not fit the INI style.
pub fn ini_key(relative: &str) -> Option<IniKey> {
    let rest = relative.strip_prefix('/')?;
    let mut separators = rest.match_indices(|c| c == '.' || c == '/');
    match (separators.next(), separators.next()) {
        (None, _) => {
            if ini_word(rest) {
                Some(IniKey {
                    section: None,
                    name: rest.to_string(),
                })
            } else {
                None
            }
        }
        (Some((at, _)), None) => {
            let (section, name) = (&rest[..at], &rest[at + 1..]);
            if ini_word(section) && ini_word(name) {
                Some(IniKey {
                    section: Some(section.to_string()),
                    name: name.to_string(),
                })
            } else {
                None
            }
        }
        (Some(_), Some(_)) => None,
    }
}

/// Dotted Java property key: the whole path relative to its base, with every
/// `/` turned into `.`.
pub fn java_key(relative: &str) -> Option<String> {
    let rest = relative.strip_prefix('/')?;
    if rest.is_empty() {
        return None;
    }
    Some(rest.replace('/', "."))
}

/// Path relative to a base, without the leading `/`. Used by the per-file
/// emitter as a filesystem-relative key.
pub fn relative_key<'a>(name: &'a str, base: &str) -> Option<&'a str> {
    name.strip_prefix(base)?.strip_prefix('/')
}

/// `name` with the base prefix stripped, keeping the leading `/`.
pub fn relative_path<'a>(name: &'a str, base: &str) -> Option<&'a str> {
    let rest = name.strip_prefix(base)?;
    rest.starts_with('/').then_some(rest)
}
