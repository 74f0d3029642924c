//! Dependency-tracking accumulator, and the internal per-call context that threads the
//! filesystem, trace log, and accumulator through the resolution algorithm.

use std::path::{Path, PathBuf};

use rustc_hash::FxHashSet;

use crate::{error::ResolverError, file_system::FileSystem, trace::TraceLog};

/// Files touched during a `resolve_module_names` call, for build-system cache invalidation.
///
/// Pure bookkeeping: it adds no new externally observable resolution behavior.
#[derive(Debug, Default, Clone)]
pub struct ResolveContext {
    pub file_dependencies: FxHashSet<PathBuf>,
    pub missing_dependencies: FxHashSet<PathBuf>,
}

/// Bundles the filesystem, trace log, and dependency accumulator for one resolution.
///
/// Every raw `is_file`/`is_directory` check is routed through here so the "emit a trace
/// line on miss" rule is enforced in exactly one place rather than at each call site.
pub(crate) struct Ctx<'a, Fs> {
    fs: &'a Fs,
    pub trace: &'a TraceLog,
    pub record: &'a mut ResolveContext,
}

impl<'a, Fs: FileSystem> Ctx<'a, Fs> {
    pub fn new(fs: &'a Fs, trace: &'a TraceLog, record: &'a mut ResolveContext) -> Self {
        Self { fs, trace, record }
    }

    /// Probes for a file, tracing `"File <p> does not exist."` on miss.
    pub fn is_file(&mut self, path: &Path) -> Result<bool, ResolverError> {
        let exists = self.fs.is_file(path);
        if exists {
            self.record.file_dependencies.insert(path.to_path_buf());
        } else {
            self.record.missing_dependencies.insert(path.to_path_buf());
            self.trace.log(format!("File {} does not exist.", path.display()))?;
        }
        Ok(exists)
    }

    /// Probes for a directory, tracing `"Directory <p> does not exist."` on miss.
    pub fn is_directory(&mut self, path: &Path) -> Result<bool, ResolverError> {
        let exists = self.fs.is_directory(path);
        if !exists {
            self.trace.log(format!("Directory {} does not exist.", path.display()))?;
        }
        Ok(exists)
    }

    pub fn read_package_manifest(
        &mut self,
        dir: &Path,
    ) -> Result<Option<crate::package_json::PackageManifest>, ResolverError> {
        crate::package_json::read_package_manifest(self.fs, dir)
    }
}
