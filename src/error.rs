//! Resolver error types.
//!
//! Unresolvable modules are *not* an error here — resolution simply returns `None` for
//! those. This enum only carries the fatal cases: a malformed manifest, or an I/O failure
//! flushing the trace log, both of which the compiler driver is expected to turn into its
//! own internal exit code rather than a per-specifier diagnostic.

use std::{fmt, io, path::PathBuf, sync::Arc};

use thiserror::Error;

/// Fatal resolver errors.
#[derive(Debug, Clone, Error)]
#[non_exhaustive]
pub enum ResolverError {
    /// `package.json` exists but could not be parsed as JSON.
    #[error("Malformed package manifest in {dir:?}: {message}")]
    MalformedManifest { dir: PathBuf, message: String },

    /// The trace log sink could not be written to. The trace log is a contract; a write
    /// failure must not be silently swallowed.
    #[error("Failed to write trace log: {0}")]
    TraceSinkIo(IoError),

    /// Any other I/O failure surfaced while probing the filesystem.
    #[error("{0}")]
    Io(IoError),
}

impl From<io::Error> for ResolverError {
    fn from(err: io::Error) -> Self {
        Self::Io(IoError::new(err))
    }
}

/// `Clone`-able wrapper around [`io::Error`], which is not itself `Clone`.
#[derive(Debug, Clone)]
pub struct IoError(Arc<io::Error>);

impl IoError {
    #[must_use]
    pub fn new(err: io::Error) -> Self {
        Self(Arc::new(err))
    }
}

impl fmt::Display for IoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
