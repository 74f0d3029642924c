//! The outcome of a resolved specifier.

use std::path::{Path, PathBuf};

use crate::extensions::Extension;

/// The outcome of a successful resolution, returned to the compiler host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedModule {
    pub absolute_path: PathBuf,
    pub extension: Extension,
}

impl ResolvedModule {
    #[must_use]
    pub fn new(absolute_path: PathBuf, extension: Extension) -> Self {
        Self { absolute_path, extension }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.absolute_path
    }
}
