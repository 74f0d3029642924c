//! `package.json` manifests.
//!
//! The manifest is treated as an opaque record; only the six fields the resolver actually
//! reads are deserialized — no `exports`, `imports`, `browser`, or `sideEffects` fields,
//! since this resolver does not implement the ESM conditional-exports algorithm.

use std::path::Path;

use serde::Deserialize;

use crate::{error::ResolverError, file_system::FileSystem};

/// The subset of `package.json` fields this resolver reads.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PackageManifest {
    pub name: Option<String>,
    pub types: Option<String>,
    pub typings: Option<String>,
    pub main: Option<String>,
    pub homepage: Option<String>,
    pub version: Option<String>,
}

/// Reads and parses `<dir>/package.json`.
///
/// Returns `Ok(None)` when the file is simply absent (not an error). Returns `Err` only
/// when the file exists but fails to parse as JSON — a malformed manifest is fatal.
pub fn read_package_manifest<Fs: FileSystem>(
    fs: &Fs,
    dir: &Path,
) -> Result<Option<PackageManifest>, ResolverError> {
    let manifest_path = dir.join("package.json");
    let contents = match fs.read_to_string(&manifest_path) {
        Ok(contents) => contents,
        Err(_) => return Ok(None),
    };
    serde_json::from_str(&contents).map(Some).map_err(|e| {
        tracing::warn!(dir = %dir.display(), error = %e, "failed to parse package.json");
        ResolverError::MalformedManifest { dir: dir.to_path_buf(), message: e.to_string() }
    })
}
