//! External-Package Locator.
//!
//! Walks `node_modules` upward from a start directory to find a package, then falls back
//! to its `@types` sidecar when the package itself has no usable entry point.

use std::path::{Path, PathBuf};

use crate::{
    context::Ctx, entry_point::resolve_entry_point, error::ResolverError, extensions::Extension,
    file_system::FileSystem, resolution::ResolvedModule,
};

/// An external package reference, as produced by [`crate::specifier::ModuleRef::Package`].
#[derive(Debug, Clone)]
pub struct PackageRef {
    pub scope: Option<String>,
    pub name: String,
    pub sub_path: Option<String>,
}

impl PackageRef {
    fn node_modules_segment(&self) -> String {
        match &self.scope {
            Some(scope) => format!("@{scope}/{}", self.name),
            None => self.name.clone(),
        }
    }
}

/// Walks parents of `start_dir` (inclusive) for a `node_modules/<segment>` directory, the
/// way a single `current = parent(current)` loop avoids recursion depth surprises on deep
/// trees.
pub fn find_package_dependency_dir<Fs: FileSystem>(
    ctx: &mut Ctx<'_, Fs>,
    package_ref: &PackageRef,
    start_dir: &Path,
) -> Result<Option<PathBuf>, ResolverError> {
    let segment = package_ref.node_modules_segment();
    let mut current = start_dir;
    loop {
        let candidate = current.join("node_modules").join(&segment);
        tracing::trace!(candidate = %candidate.display(), "probing node_modules ancestor");
        if ctx.is_directory(&candidate)? {
            return Ok(Some(candidate));
        }
        match current.parent() {
            Some(parent) => current = parent,
            None => return Ok(None),
        }
    }
}

pub fn resolve_package<Fs: FileSystem>(
    ctx: &mut Ctx<'_, Fs>,
    platform_exts: &[String],
    package_ref: &PackageRef,
    start_dir: &Path,
    allowed_exts: &[Extension],
) -> Result<Option<ResolvedModule>, ResolverError> {
    if let Some(found) = try_locate(ctx, platform_exts, package_ref, start_dir, allowed_exts)? {
        return Ok(Some(found));
    }

    let types_ref = PackageRef {
        scope: Some("types".to_string()),
        name: mangle_types_name(package_ref),
        sub_path: package_ref.sub_path.clone(),
    };
    let dts_only = [Extension::DTs];
    try_locate(ctx, platform_exts, &types_ref, start_dir, &dts_only)
}

fn mangle_types_name(package_ref: &PackageRef) -> String {
    match &package_ref.scope {
        Some(scope) => format!("{scope}__{}", package_ref.name),
        None => package_ref.name.clone(),
    }
}

fn try_locate<Fs: FileSystem>(
    ctx: &mut Ctx<'_, Fs>,
    platform_exts: &[String],
    package_ref: &PackageRef,
    start_dir: &Path,
    allowed_exts: &[Extension],
) -> Result<Option<ResolvedModule>, ResolverError> {
    let Some(pkg_dir) = find_package_dependency_dir(ctx, package_ref, start_dir)? else {
        return Ok(None);
    };

    let sub_path = package_ref.sub_path.as_deref();
    if let Some(found) = resolve_entry_point(ctx, platform_exts, &pkg_dir, sub_path, allowed_exts)? {
        return Ok(Some(found));
    }

    if sub_path.is_some() {
        let dts_only = [Extension::DTs];
        if let Some(found) = resolve_entry_point(ctx, platform_exts, &pkg_dir, None, &dts_only)? {
            return Ok(Some(found));
        }
    }

    Ok(None)
}
