//! Lazy, paginated walk over one or more store paths.
//!
//! The walk is best-effort: a store failure abandons the remaining pages of
//! the current path only and moves on to the next path. It is never surfaced
//! to the consumer.

use std::collections::VecDeque;

use tracing::{error, info};

use crate::core::store::{Parameter, ParameterStore};
use crate::error::{Error, Result};

/// Prefix with `/` if missing, strip one trailing `/`.
///
/// An empty path is an argument error, not a skippable one.
fn normalize(path: &str) -> Result<String> {
    if path.is_empty() {
        return Err(Error::EmptyPath);
    }
    let mut path = if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{}", path)
    };
    if path.len() > 1 && path.ends_with('/') {
        path.pop();
    }
    Ok(path)
}

#[derive(Debug)]
enum PathState {
    // next_token is None both before the first page and after the last one;
    // `started` disambiguates.
    Fetching {
        started: bool,
        next_token: Option<String>,
    },
    Done,
}

/// Iterator over `(parameter, base path)` tuples.
///
/// One page is fetched per continuation step, so the consumer can start
/// emitting before the whole namespace has been read. The sequence is finite
/// and single-pass; build a new `Walker` for a fresh pass.
#[derive(Debug)]
pub struct Walker<'a, S: ParameterStore> {
    store: &'a S,
    recursive: bool,
    paths: VecDeque<String>,
    base: String,
    state: PathState,
    buffer: VecDeque<Parameter>,
}

impl<'a, S: ParameterStore> Walker<'a, S> {
    /// Validate and normalize `paths`; fails on an empty path string.
    pub fn new<I, P>(store: &'a S, paths: I, recursive: bool) -> Result<Self>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<str>,
    {
        let paths = paths
            .into_iter()
            .map(|p| normalize(p.as_ref()))
            .collect::<Result<VecDeque<_>>>()?;

        Ok(Self {
            store,
            recursive,
            paths,
            base: String::new(),
            state: PathState::Done,
            buffer: VecDeque::new(),
        })
    }

    /// Advance to the next input path, if any.
    fn next_path(&mut self) -> bool {
        match self.paths.pop_front() {
            Some(base) => {
                self.base = base;
                self.state = PathState::Fetching {
                    started: false,
                    next_token: None,
                };
                true
            }
            None => false,
        }
    }

    /// Fetch one page for the current path into the buffer.
    fn fetch(&mut self, started: bool, next_token: Option<String>) {
        if started && next_token.is_none() {
            info!(path = %self.base, "finished iterating parameters");
            self.state = PathState::Done;
            return;
        }

        info!(path = %self.base, "getting parameters");
        match self.store.list(&self.base, self.recursive, next_token.as_deref()) {
            Ok(page) => {
                self.buffer.extend(page.parameters);
                self.state = PathState::Fetching {
                    started: true,
                    next_token: page.next_token,
                };
            }
            Err(e) => {
                // Best effort: give up on this path, keep going to the next.
                error!(path = %self.base, "unable to process parameters: {}", e);
                self.state = PathState::Done;
            }
        }
    }
}

impl<S: ParameterStore> Iterator for Walker<'_, S> {
    type Item = (Parameter, String);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(param) = self.buffer.pop_front() {
                return Some((param, self.base.clone()));
            }
            match std::mem::replace(&mut self.state, PathState::Done) {
                PathState::Fetching {
                    started,
                    next_token,
                } => self.fetch(started, next_token),
                PathState::Done => {
                    if !self.next_path() {
                        return None;
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::store::{MemoryStore, ParameterKind};

    fn names<S: ParameterStore>(walker: Walker<'_, S>) -> Vec<(String, String)> {
        walker.map(|(p, base)| (p.name, base)).collect()
    }

    #[test]
    fn test_normalize_adds_leading_slash() {
        assert_eq!(normalize("app/db").unwrap(), "/app/db");
    }

    #[test]
    fn test_normalize_strips_trailing_slash() {
        assert_eq!(normalize("/app/").unwrap(), "/app");
    }

    #[test]
    fn test_empty_path_is_an_error() {
        let store = MemoryStore::new(10);
        let err = Walker::new(&store, ["/ok", ""], false).unwrap_err();
        assert!(matches!(err, Error::EmptyPath));
    }

    #[test]
    fn test_pagination_yields_all_pages_in_order() {
        let mut store = MemoryStore::new(2);
        for name in ["a", "b", "c", "d", "e"] {
            store.insert(&format!("/app/{}", name), "v", ParameterKind::String);
        }
        // Three pages: [a b], [c d], [e] (last without a token).
        let walker = Walker::new(&store, ["/app"], false).unwrap();
        let got = names(walker);
        assert_eq!(
            got.iter().map(|(n, _)| n.as_str()).collect::<Vec<_>>(),
            ["/app/a", "/app/b", "/app/c", "/app/d", "/app/e"]
        );
        assert!(got.iter().all(|(_, base)| base == "/app"));
    }

    #[test]
    fn test_recursion_flag_controls_depth() {
        let mut store = MemoryStore::new(10);
        store.insert("/app/top", "v", ParameterKind::String);
        store.insert("/app/db/nested", "v", ParameterKind::String);

        let flat = Walker::new(&store, ["/app"], false).unwrap();
        assert_eq!(names(flat).len(), 1);

        let deep = Walker::new(&store, ["/app"], true).unwrap();
        assert_eq!(names(deep).len(), 2);
    }

    #[test]
    fn test_store_failure_aborts_path_not_run() {
        let mut store = MemoryStore::new(1);
        store.insert("/bad/a", "v", ParameterKind::String);
        store.insert("/bad/b", "v", ParameterKind::String);
        store.insert("/good/c", "v", ParameterKind::String);
        store.fail_at("/bad", 1);

        let walker = Walker::new(&store, ["/bad", "/good"], false).unwrap();
        let got = names(walker);
        // /bad yields its first page then fails; /good is still walked.
        assert_eq!(
            got.iter().map(|(n, _)| n.as_str()).collect::<Vec<_>>(),
            ["/bad/a", "/good/c"]
        );
    }

    #[test]
    fn test_multiple_paths_carry_their_base() {
        let mut store = MemoryStore::new(10);
        store.insert("/one/x", "v", ParameterKind::String);
        store.insert("/two/y", "v", ParameterKind::String);

        let walker = Walker::new(&store, ["/one", "two/"], false).unwrap();
        let got = names(walker);
        assert_eq!(got[0], ("/one/x".to_string(), "/one".to_string()));
        assert_eq!(got[1], ("/two/y".to_string(), "/two".to_string()));
    }
}
