//! In-memory parameter store.
//!
//! Serves a fixed entry list with configurable page size; used by the unit
//! tests in place of a live AWS account. A path can be poisoned to fail on a
//! chosen page to exercise the walker's best-effort policy.

use std::collections::HashMap;

use super::{Page, Parameter, ParameterKind, ParameterStore};
use crate::error::{Error, Result};

#[derive(Debug)]
pub struct MemoryStore {
    entries: Vec<Parameter>,
    page_size: usize,
    // path -> page index at which list() starts failing
    failures: HashMap<String, usize>,
}

impl MemoryStore {
    pub fn new(page_size: usize) -> Self {
        assert!(page_size > 0);
        Self {
            entries: Vec::new(),
            page_size,
            failures: HashMap::new(),
        }
    }

    pub fn insert(&mut self, name: &str, value: &str, kind: ParameterKind) -> &mut Self {
        self.entries.push(Parameter {
            name: name.to_string(),
            value: value.to_string(),
            kind,
        });
        self
    }

    /// Make `list` fail for `path` starting at page index `page`.
    pub fn fail_at(&mut self, path: &str, page: usize) -> &mut Self {
        self.failures.insert(path.to_string(), page);
        self
    }

    fn matches(&self, name: &str, path: &str, recursive: bool) -> bool {
        let Some(rest) = name.strip_prefix(path) else {
            return false;
        };
        let Some(rest) = rest.strip_prefix('/') else {
            return false;
        };
        recursive || !rest.contains('/')
    }
}

impl ParameterStore for MemoryStore {
    fn list(&self, path: &str, recursive: bool, next_token: Option<&str>) -> Result<Page> {
        let page: usize = match next_token {
            Some(t) => t
                .parse()
                .map_err(|_| Error::Store(format!("bad token {:?}", t)))?,
            None => 0,
        };

        if let Some(&fail_page) = self.failures.get(path) {
            if page >= fail_page {
                return Err(Error::Store(format!("injected failure for {:?}", path)));
            }
        }

        let matching: Vec<&Parameter> = self
            .entries
            .iter()
            .filter(|p| self.matches(&p.name, path, recursive))
            .collect();

        let start = page * self.page_size;
        let parameters = matching
            .iter()
            .skip(start)
            .take(self.page_size)
            .map(|p| (*p).clone())
            .collect::<Vec<_>>();

        let next_token = if start + self.page_size < matching.len() {
            Some((page + 1).to_string())
        } else {
            None
        };

        Ok(Page {
            parameters,
            next_token,
        })
    }
}
