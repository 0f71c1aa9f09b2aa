//! Per-parameter file output.
//!
//! Every parameter becomes one regular file below the output root, at the
//! path given by its name relative to the base path that produced it.
//! A resolved target is rejected if it would land outside the root.
//!
//! The hierarchical namespace allows a name to act as both a leaf value and
//! a directory (`/a` and `/a/b`). When a needed directory segment already
//! exists as a value file, the file is renamed aside, the directory created,
//! and the old content preserved as a `.value` entry inside it.

use std::fs;
use std::path::{Component, Path, PathBuf};

use tracing::{error, warn};
use uuid::Uuid;

use crate::core::key;
use crate::core::store::Parameter;
use crate::error::{Error, Result};

pub struct DirEmitter {
    root: PathBuf,
}

impl DirEmitter {
    /// Create the output root if needed and pin its canonical path for the
    /// escape checks.
    pub fn new(root: &Path) -> Result<Self> {
        fs::create_dir_all(root)?;
        Ok(Self {
            root: root.canonicalize()?,
        })
    }

    /// Resolve `relative` lexically against the root.
    ///
    /// `..` components pop; popping above the root, or an absolute
    /// component, is an escape.
    fn resolve(&self, relative: &str) -> Result<PathBuf> {
        let mut stack: Vec<&std::ffi::OsStr> = Vec::new();
        for component in Path::new(relative).components() {
            match component {
                Component::Normal(c) => stack.push(c),
                Component::ParentDir => {
                    if stack.pop().is_none() {
                        return Err(Error::Escape(self.root.join(relative)));
                    }
                }
                Component::CurDir => {}
                Component::RootDir | Component::Prefix(_) => {
                    return Err(Error::Escape(PathBuf::from(relative)));
                }
            }
        }
        if stack.is_empty() {
            // The parameter would overwrite the root itself.
            return Err(Error::Escape(self.root.clone()));
        }
        let mut target = self.root.clone();
        target.extend(stack);
        Ok(target)
    }

    /// `create_dir_all` that also handles a path segment already existing as
    /// a leaf value file: the file is moved into the new directory as
    /// `.value`.
    fn ensure_dirs(&self, dir: &Path) -> Result<()> {
        let relative = dir.strip_prefix(&self.root).unwrap_or(dir);
        let mut current = self.root.clone();
        for component in relative.components() {
            current.push(component);
            if current.is_dir() {
                continue;
            }
            if current.exists() {
                let aside = current.with_extension(format!("{}", Uuid::new_v4()));
                fs::rename(&current, &aside)?;
                fs::create_dir(&current)?;
                fs::rename(&aside, current.join(".value"))?;
            } else {
                fs::create_dir(&current)?;
            }
        }
        Ok(())
    }

    fn emit_one(&self, param: &Parameter, relative: &str) -> Result<()> {
        let target = self.resolve(relative)?;
        if let Some(parent) = target.parent() {
            self.ensure_dirs(parent)?;
        }
        fs::write(&target, &param.value)?;
        Ok(())
    }

    /// Write every parameter below the root. Failures are logged per
    /// parameter; the run continues.
    pub fn write_all<I>(&self, params: I) -> Result<()>
    where
        I: IntoIterator<Item = (Parameter, String)>,
    {
        for (param, base) in params {
            let Some(relative) = key::relative_key(&param.name, &base) else {
                warn!("{}: skipping parameter outside its base path", param.name);
                continue;
            };

            super::debug_value(&param, relative);

            if let Err(e) = self.emit_one(&param, relative) {
                error!("{}: unable to write parameter: {}", param.name, e);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::store::ParameterKind;
    use tempfile::TempDir;

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

    #[test]
    fn test_writes_nested_files() {
        let tmp = TempDir::new().unwrap();
        let emitter = DirEmitter::new(tmp.path()).unwrap();
        emitter
            .write_all(vec![
                param("/base/top", "1", "/base"),
                param("/base/db/password", "2", "/base"),
            ])
            .unwrap();

        assert_eq!(fs::read_to_string(tmp.path().join("top")).unwrap(), "1");
        assert_eq!(
            fs::read_to_string(tmp.path().join("db/password")).unwrap(),
            "2"
        );
    }

    #[test]
    fn test_escape_is_rejected() {
        let tmp = TempDir::new().unwrap();
        let out_root = tmp.path().join("out");
        let emitter = DirEmitter::new(&out_root).unwrap();
        emitter
            .write_all(vec![param("/base/x/../../etc/passwd", "pwned", "/base")])
            .unwrap();

        assert!(!tmp.path().join("etc/passwd").exists());
        assert!(!out_root.join("etc/passwd").exists());
    }

    #[test]
    fn test_parent_dir_inside_root_is_allowed() {
        let tmp = TempDir::new().unwrap();
        let emitter = DirEmitter::new(tmp.path()).unwrap();
        emitter
            .write_all(vec![param("/base/a/../b", "v", "/base")])
            .unwrap();
        assert_eq!(fs::read_to_string(tmp.path().join("b")).unwrap(), "v");
    }

    #[test]
    fn test_leaf_value_becomes_dot_value_on_collision() {
        let tmp = TempDir::new().unwrap();
        let emitter = DirEmitter::new(tmp.path()).unwrap();
        emitter
            .write_all(vec![
                param("/base/a", "leaf", "/base"),
                param("/base/a/b", "child", "/base"),
            ])
            .unwrap();

        assert_eq!(
            fs::read_to_string(tmp.path().join("a/.value")).unwrap(),
            "leaf"
        );
        assert_eq!(fs::read_to_string(tmp.path().join("a/b")).unwrap(), "child");
    }

    #[test]
    fn test_one_failure_does_not_stop_the_run() {
        let tmp = TempDir::new().unwrap();
        let emitter = DirEmitter::new(tmp.path()).unwrap();
        emitter
            .write_all(vec![
                param("/base/../abs", "nope", "/base"),
                param("/base/ok", "yes", "/base"),
            ])
            .unwrap();
        assert_eq!(fs::read_to_string(tmp.path().join("ok")).unwrap(), "yes");
    }
}
