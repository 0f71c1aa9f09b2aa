//! Parameter store backends.
//!
//! The walker talks to the store through the [`ParameterStore`] trait so the
//! entry point can hand it a real AWS client while tests hand it a canned
//! in-memory one.

pub mod memory;
pub mod ssm;

pub use memory::MemoryStore;
pub use ssm::SsmStore;

use crate::error::Result;

/// What kind of value the store holds at a name.
///
/// Drives log redaction only; the emitted output is identical for both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterKind {
    String,
    SecureString,
}

impl ParameterKind {
    pub fn is_secret(self) -> bool {
        matches!(self, ParameterKind::SecureString)
    }
}

/// One retrieved entry: a fully-qualified slash-delimited name and its
/// (already decrypted) value.
#[derive(Debug, Clone)]
pub struct Parameter {
    pub name: String,
    pub value: String,
    pub kind: ParameterKind,
}

/// One page of a listing, with the cursor for the next page if any.
#[derive(Debug, Default)]
pub struct Page {
    pub parameters: Vec<Parameter>,
    pub next_token: Option<String>,
}

/// A hierarchical key-value namespace that can be listed page by page.
pub trait ParameterStore {
    /// List the entries under `path`, decrypting secure values.
    ///
    /// Pass the `next_token` of the previous page to continue a listing; the
    /// returned page carries `None` when the listing is exhausted.
    fn list(&self, path: &str, recursive: bool, next_token: Option<&str>) -> Result<Page>;
}
