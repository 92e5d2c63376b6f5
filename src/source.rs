//! Source document carrier shared by cursors and diagnostics.

use std::fmt;
use std::sync::Arc;

/// An immutable source document: the raw byte buffer plus an origin label
/// (typically a file name) echoed in diagnostics.
///
/// Cloning is cheap; the buffer and label are shared. One `Source` can back
/// any number of cursors and errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    body: Arc<[u8]>,
    name: Arc<str>,
}

impl Source {
    pub fn new(name: impl Into<String>, body: impl Into<Vec<u8>>) -> Self {
        Self {
            body: Arc::from(body.into()),
            name: Arc::from(name.into()),
        }
    }

    /// The raw document bytes. Not required to be valid UTF-8; malformed
    /// sequences surface through scanner rules, not here.
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
