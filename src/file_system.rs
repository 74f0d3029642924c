//! Filesystem abstraction.
//!
//! `ResolverGeneric<Fs>` is kept generic over this trait so a test harness or an embedding
//! compiler host can supply a virtual filesystem instead of touching real disk — the same
//! injection principle workspace discovery relies on applies equally to raw file I/O.

use std::{fs, io, path::Path};

/// Raw filesystem primitives the resolver probes through.
///
/// [`crate::context::Ctx`] is the component that wraps these with trace-on-miss
/// semantics.
pub trait FileSystem: Send + Sync {
    /// See [`std::fs::metadata`] — used to test file existence.
    fn is_file(&self, path: &Path) -> bool;

    /// See [`std::fs::metadata`] — used to test directory existence.
    fn is_directory(&self, path: &Path) -> bool;

    /// See [`std::fs::read_to_string`].
    ///
    /// # Errors
    /// See [`std::fs::read_to_string`].
    fn read_to_string(&self, path: &Path) -> io::Result<String>;
}

/// The real operating-system filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct FileSystemOs;

impl FileSystem for FileSystemOs {
    fn is_file(&self, path: &Path) -> bool {
        fs::metadata(path).is_ok_and(|m| m.is_file())
    }

    fn is_directory(&self, path: &Path) -> bool {
        fs::metadata(path).is_ok_and(|m| m.is_dir())
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(path)
    }
}
