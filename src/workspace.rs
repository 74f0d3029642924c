//! Workspace index: the set of in-repo packages discovered by the monorepo enumerator.
//!
//! Workspace discovery is a one-shot global, enumerated once by the compiler host at
//! startup (`enumerateWorkspaces(cwd) -> Workspace[]`) and injected here rather than read
//! from the current working directory inside library code — this keeps workspace
//! discovery testable without touching `cwd`. This module only owns the immutable index
//! and its two queries.

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use crate::{package_json::PackageManifest, path::PathUtil, specifier::ModuleRef};

/// An in-repo package discovered by the monorepo enumerator.
#[derive(Debug, Clone)]
pub struct Workspace {
    pub name: String,
    pub root_path: PathBuf,
    pub manifest: Arc<PackageManifest>,
}

impl Workspace {
    #[must_use]
    pub fn new(name: impl Into<String>, root_path: PathBuf, manifest: PackageManifest) -> Self {
        Self { name: name.into(), root_path, manifest: Arc::new(manifest) }
    }
}

/// The immutable, injected set of workspaces, with the two supported queries.
#[derive(Debug, Clone, Default)]
pub struct WorkspaceIndex {
    workspaces: Vec<Workspace>,
}

impl WorkspaceIndex {
    #[must_use]
    pub fn new(workspaces: Vec<Workspace>) -> Self {
        Self { workspaces }
    }

    /// Linear scan matching `manifest.name` exactly.
    #[must_use]
    pub fn by_name(&self, name: &str) -> Option<&Workspace> {
        self.workspaces.iter().find(|w| w.name == name)
    }

    /// Linear scan returning the workspace whose root is a prefix of `abs_path`.
    ///
    /// Implemented with component-wise [`Path::strip_prefix`] rather than naive string
    /// concatenation with a trailing separator: it gives the same "`pkg`/`pkg-foo`
    /// false-match" guarantee without manual separator bookkeeping.
    #[must_use]
    pub fn containing_path(&self, abs_path: &Path) -> Option<&Workspace> {
        self.workspaces.iter().find(|w| abs_path.strip_prefix(&w.root_path).is_ok())
    }

    /// Resolves `spec` against a workspace, if any.
    ///
    /// Returns the owning workspace plus the sub-path within it (empty for an exact
    /// workspace-root hit).
    #[must_use]
    pub fn query_module_ref(
        &self,
        spec: &str,
        containing_file: &Path,
    ) -> Option<(Workspace, Option<String>)> {
        match ModuleRef::parse(spec) {
            ModuleRef::Package { scope, name, sub_path } => {
                let qualified = match scope {
                    Some(scope) => format!("@{scope}/{name}"),
                    None => name,
                };
                self.by_name(&qualified).map(|w| (w.clone(), sub_path))
            }
            ModuleRef::File { path } => {
                let dir = containing_file.parent().unwrap_or_else(|| Path::new(""));
                let abs = dir.normalize_with(Path::new(&path)).normalize();
                self.containing_path(&abs).map(|w| {
                    let sub_path = abs
                        .strip_prefix(&w.root_path)
                        .ok()
                        .map(|p| p.to_string_lossy().replace('\\', "/"))
                        .filter(|s| !s.is_empty());
                    (w.clone(), sub_path)
                })
            }
            ModuleRef::Builtin => None,
        }
    }
}
