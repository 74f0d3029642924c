//! # RN Resolver
//!
//! A React-Native-aware module resolver for an AOT TypeScript-like compilation driver.
//!
//! Given a textual specifier appearing in a containing source file, the resolver
//! deterministically locates the file on disk the compiler should consume, applying
//! platform-extension precedence (`Button.ios.tsx`, `Button.native.ts`), in-repo workspace
//! shortcuts, external-package lookup with typings-first preference, and a structured
//! trace log whose buffering policy depends on the outcome of each resolution.
//!
//! ## References
//!
//! * Directory-walk and finder structure adapted from the Node.js CommonJS/ESM module
//!   resolution algorithms, as implemented by `enhanced-resolve` and `oxc_resolver`.
//! * Platform-extension precedence and `react-native` package substitution follow the
//!   Metro/React Native out-of-tree-platform convention.

mod builtins;
mod context;
mod entry_point;
mod error;
mod extensions;
mod file_system;
mod finder;
mod locator;
mod options;
mod package_json;
mod path;
mod platform;
mod resolution;
mod specifier;
mod trace;
mod workspace;


use std::{
    cell::RefCell,
    path::{Path, PathBuf},
};

pub use crate::{
    builtins::{is_builtin, NODEJS_BUILTINS},
    context::ResolveContext,
    error::{IoError, ResolverError},
    extensions::Extension,
    file_system::{FileSystem, FileSystemOs},
    locator::PackageRef,
    options::ResolverConfig,
    package_json::PackageManifest,
    resolution::ResolvedModule,
    specifier::ModuleRef,
    trace::{Sink, TraceMode},
    workspace::{Workspace, WorkspaceIndex},
};

use crate::{
    builtins::should_show_resolver_failure,
    context::Ctx,
    entry_point::resolve_entry_point,
    extensions::{allowed_extensions, is_declaration_file},
    finder::{find_module_file, platform_extension_ladder},
    locator::resolve_package,
    trace::TraceLog,
};

/// The resolver, generic over its filesystem so tests can inject an in-memory tree.
pub struct ResolverGeneric<Fs> {
    fs: Fs,
    config: ResolverConfig,
    platform_ext_ladder: Vec<String>,
    workspace_index: WorkspaceIndex,
    trace: TraceLog,
    dependencies: RefCell<ResolveContext>,
}

/// The resolver backed by the real operating-system filesystem.
pub type Resolver = ResolverGeneric<FileSystemOs>;

impl ResolverGeneric<FileSystemOs> {
    /// Builds a resolver over the real filesystem.
    ///
    /// `workspaces` is the already-enumerated monorepo package set: enumeration itself
    /// walks the current working directory and is the compiler host's job, not the
    /// resolver's (it is injected so tests never depend on `cwd`).
    #[must_use]
    pub fn new(config: ResolverConfig, workspaces: Vec<Workspace>) -> Self {
        Self::new_with_file_system(FileSystemOs, config, workspaces)
    }
}

impl<Fs: FileSystem> ResolverGeneric<Fs> {
    #[must_use]
    pub fn new_with_file_system(fs: Fs, config: ResolverConfig, workspaces: Vec<Workspace>) -> Self {
        let platform_ext_ladder =
            platform_extension_ladder(&config.platform, &config.extra_platform_extensions);
        let trace = TraceLog::new(config.trace_mode, config.trace_sink.clone());
        Self {
            fs,
            config,
            platform_ext_ladder,
            workspace_index: WorkspaceIndex::new(workspaces),
            trace,
            dependencies: RefCell::new(ResolveContext::default()),
        }
    }

    /// Files observed to exist during resolution so far, for build-cache invalidation.
    #[must_use]
    pub fn file_dependencies(&self) -> Vec<PathBuf> {
        self.dependencies.borrow().file_dependencies.iter().cloned().collect()
    }

    /// Paths probed and found missing during resolution so far, for build-cache invalidation.
    #[must_use]
    pub fn missing_dependencies(&self) -> Vec<PathBuf> {
        self.dependencies.borrow().missing_dependencies.iter().cloned().collect()
    }

    /// Resolves each specifier in `names` against `containing_file`.
    ///
    /// The output array has exactly `names.len()` entries, positionally matching the
    /// input; a `None` entry means the specifier could not be resolved to a file, which is
    /// not itself an error — it is the compiler host's job to turn that into a diagnostic.
    ///
    /// # Errors
    /// Returns `Err` only for fatal conditions: a malformed `package.json` along the search
    /// path, or an I/O failure flushing the trace sink.
    pub fn resolve_module_names(
        &self,
        names: &[String],
        containing_file: &Path,
    ) -> Result<Vec<Option<ResolvedModule>>, ResolverError> {
        tracing::debug!(
            names = ?names,
            containing_file = %containing_file.display(),
            "resolving module names"
        );
        let containing_file_str = containing_file.to_string_lossy();
        let containing_is_declaration = is_declaration_file(&containing_file_str);
        let extensions =
            allowed_extensions(containing_is_declaration, self.config.check_js, self.config.resolve_json_module);
        let dir = containing_file.parent().unwrap_or_else(|| Path::new(""));

        let mut results = Vec::with_capacity(names.len());

        for name in names {
            self.trace.begin();
            self.trace.log(format!(
                "======== Resolving module '{name}' from '{containing_file_str}' ========"
            ))?;

            let effective = match platform::substitute(
                name,
                &self.config.platform,
                self.config.disable_rn_package_substitution,
            ) {
                Some(substituted) => {
                    self.trace.log(format!("Substituting module '{name}' with '{substituted}'."))?;
                    substituted
                }
                None => name.clone(),
            };

            let resolved = {
                let mut dependencies = self.dependencies.borrow_mut();
                let mut ctx = Ctx::new(&self.fs, &self.trace, &mut dependencies);

                if let Some((workspace, sub_path)) =
                    self.workspace_index.query_module_ref(&effective, containing_file)
                {
                    self.trace.log(format!(
                        "Loading module '{effective}' from workspace '{}' located at directory '{}'.",
                        workspace.name,
                        workspace.root_path.display()
                    ))?;
                    resolve_entry_point(
                        &mut ctx,
                        &self.platform_ext_ladder,
                        &workspace.root_path,
                        sub_path.as_deref(),
                        &extensions,
                    )?
                } else {
                    match ModuleRef::parse(&effective) {
                        ModuleRef::Package { scope, name: pkg_name, sub_path } => {
                            let package_ref = PackageRef { scope, name: pkg_name, sub_path };
                            resolve_package(&mut ctx, &self.platform_ext_ladder, &package_ref, dir, &extensions)?
                        }
                        ModuleRef::File { path } => {
                            self.trace.log(format!(
                                "Loading module as file / folder, candidate module location '{}'.",
                                dir.join(&path).display()
                            ))?;
                            find_module_file(&mut ctx, &self.platform_ext_ladder, dir, &path, &extensions)?
                        }
                        ModuleRef::Builtin => None,
                    }
                }
            };

            match &resolved {
                Some(resolved_module) => {
                    self.trace.log(format!(
                        "File '{}' exists - using it as a module resolution result.",
                        resolved_module.absolute_path.display()
                    ))?;
                    self.trace.log(format!(
                        "======== Module name '{name}' was successfully resolved to '{}' ========",
                        resolved_module.absolute_path.display()
                    ))?;
                    self.trace.end_success()?;
                }
                None => {
                    self.trace.log(format!("Failed to resolve module '{name}' to a file."))?;
                    self.trace.log(format!("======== Module name '{name}' failed to resolve ========"))?;
                    if should_show_resolver_failure(name) {
                        self.trace.end_failure()?;
                    } else {
                        self.trace.reset();
                    }
                }
            }

            results.push(resolved);
        }

        Ok(results)
    }

    /// Resolves `<reference types="..."/>` directives.
    ///
    /// A thin wrapper around [`Self::resolve_module_names`]: this crate does not model
    /// ambient-type search as a distinct algorithm from package resolution, since the
    /// external-package locator's `@types` fallback already covers it.
    ///
    /// # Errors
    /// Same as [`Self::resolve_module_names`].
    pub fn resolve_type_reference_directives(
        &self,
        names: &[String],
        containing_file: &Path,
    ) -> Result<Vec<Option<ResolvedModule>>, ResolverError> {
        self.resolve_module_names(names, containing_file)
    }

    /// Logs `message` as a standalone trace line, for compiler-driven diagnostics that
    /// want to funnel through the same sink as resolution traces.
    ///
    /// # Errors
    /// Propagates a trace-sink I/O failure.
    pub fn trace(&self, message: impl Into<String>) -> Result<(), ResolverError> {
        self.trace.log(message)
    }
}

#[cfg(test)]
mod lib_tests {
    use super::*;
    use crate::tests::memory_fs::MemoryFS;

    #[test]
    fn output_length_matches_input_length() {
        let fs = MemoryFS::new(&[]);
        let resolver = ResolverGeneric::new_with_file_system(
            fs,
            ResolverConfig::default().platform("ios"),
            vec![],
        );
        let names = vec!["./a".to_string(), "./b".to_string(), "lodash".to_string()];
        let results = resolver.resolve_module_names(&names, Path::new("/repo/src/index.ts")).unwrap();
        assert_eq!(results.len(), names.len());
    }

    #[test]
    fn resolves_relative_file_with_platform_precedence() {
        let fs = MemoryFS::new(&[
            ("/repo/src/App.ios.tsx", ""),
            ("/repo/src/App.ts", ""),
        ]);
        let resolver = ResolverGeneric::new_with_file_system(
            fs,
            ResolverConfig::default().platform("ios").extra_platform_extensions(vec!["native".into()]),
            vec![],
        );
        let names = vec!["./App".to_string()];
        let results = resolver
            .resolve_module_names(&names, Path::new("/repo/src/index.ios.ts"))
            .unwrap();
        let resolved = results[0].as_ref().unwrap();
        assert_eq!(resolved.absolute_path, PathBuf::from("/repo/src/App.ios.tsx"));
        assert_eq!(resolved.extension, Extension::Tsx);
    }

    #[test]
    fn substitutes_react_native_and_resolves_under_platform_package() {
        let fs = MemoryFS::new(&[(
            "/repo/node_modules/react-native-windows/Libraries/Foo.ts",
            "",
        )]);
        let resolver = ResolverGeneric::new_with_file_system(
            fs,
            ResolverConfig::default().platform("windows"),
            vec![],
        );
        let names = vec!["react-native/Libraries/Foo".to_string()];
        let results = resolver
            .resolve_module_names(&names, Path::new("/repo/app/index.windows.ts"))
            .unwrap();
        let resolved = results[0].as_ref().unwrap();
        assert_eq!(
            resolved.absolute_path,
            PathBuf::from("/repo/node_modules/react-native-windows/Libraries/Foo.ts")
        );
    }

    #[test]
    fn declaration_containing_file_restricts_to_dts_then_ts() {
        let fs = MemoryFS::new(&[
            ("/repo/types/sub.d.ts", ""),
            ("/repo/types/sub.ts", ""),
        ]);
        let resolver =
            ResolverGeneric::new_with_file_system(fs, ResolverConfig::default().platform("ios"), vec![]);
        let names = vec!["./sub".to_string()];
        let results = resolver
            .resolve_module_names(&names, Path::new("/repo/types/index.d.ts"))
            .unwrap();
        assert_eq!(results[0].as_ref().unwrap().extension, Extension::DTs);
    }

    #[test]
    fn asset_specifier_fails_without_being_an_error() {
        let fs = MemoryFS::new(&[]);
        let resolver =
            ResolverGeneric::new_with_file_system(fs, ResolverConfig::default().platform("ios"), vec![]);
        let names = vec!["./assets/logo.png".to_string()];
        let results = resolver
            .resolve_module_names(&names, Path::new("/repo/src/index.ts"))
            .unwrap();
        assert!(results[0].is_none());
    }

    #[test]
    fn workspace_package_resolves_via_main_field() {
        let fs = MemoryFS::new(&[
            ("/repo/packages/ui/package.json", r#"{"name":"@acme/ui","main":"lib/index.js"}"#),
            ("/repo/packages/ui/lib/index.js", ""),
        ]);
        let workspace = Workspace::new(
            "@acme/ui",
            PathBuf::from("/repo/packages/ui"),
            PackageManifest { name: Some("@acme/ui".into()), main: Some("lib/index.js".into()), ..Default::default() },
        );
        let resolver = ResolverGeneric::new_with_file_system(
            fs,
            ResolverConfig::default().platform("ios").check_js(true),
            vec![workspace],
        );
        let names = vec!["@acme/ui".to_string()];
        let results = resolver
            .resolve_module_names(&names, Path::new("/repo/app/x.ts"))
            .unwrap();
        assert_eq!(
            results[0].as_ref().unwrap().absolute_path,
            PathBuf::from("/repo/packages/ui/lib/index.js")
        );
    }

    #[test]
    fn types_package_fallback_for_bare_subpath_import() {
        let fs = MemoryFS::new(&[("/repo/node_modules/@types/lodash/isString.d.ts", "")]);
        let resolver =
            ResolverGeneric::new_with_file_system(fs, ResolverConfig::default().platform("ios"), vec![]);
        let names = vec!["lodash/isString".to_string()];
        let results = resolver
            .resolve_module_names(&names, Path::new("/repo/app/x.ts"))
            .unwrap();
        assert_eq!(
            results[0].as_ref().unwrap().absolute_path,
            PathBuf::from("/repo/node_modules/@types/lodash/isString.d.ts")
        );
    }

    #[test]
    fn workspace_wins_over_external_package_with_same_name() {
        let fs = MemoryFS::new(&[
            ("/repo/packages/ui/index.ts", ""),
            ("/repo/node_modules/@acme/ui/index.ts", ""),
        ]);
        let workspace = Workspace::new(
            "@acme/ui",
            PathBuf::from("/repo/packages/ui"),
            PackageManifest { name: Some("@acme/ui".into()), ..Default::default() },
        );
        let resolver =
            ResolverGeneric::new_with_file_system(fs, ResolverConfig::default().platform("ios"), vec![workspace]);
        let names = vec!["@acme/ui".to_string()];
        let results = resolver
            .resolve_module_names(&names, Path::new("/repo/app/x.ts"))
            .unwrap();
        assert_eq!(
            results[0].as_ref().unwrap().absolute_path,
            PathBuf::from("/repo/packages/ui/index.ts")
        );
    }

    #[test]
    fn trace_on_failure_mode_flushes_only_when_a_specifier_fails() {
        let dir = std::env::temp_dir().join(format!("rn_resolver_lib_test_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("trace.log");
        let _ = std::fs::remove_file(&path);

        let fs = MemoryFS::new(&[("/repo/src/App.ts", "")]);
        let resolver = ResolverGeneric::new_with_file_system(
            fs,
            ResolverConfig::default()
                .platform("ios")
                .trace_mode(TraceMode::OnFailure)
                .trace_sink(Sink::File(path.clone())),
            vec![],
        );
        let results = resolver
            .resolve_module_names(&["./App".to_string()], Path::new("/repo/src/index.ts"))
            .unwrap();
        assert!(results[0].is_some());
        assert!(!path.exists(), "a successful resolution must not flush in OnFailure mode");

        let results = resolver
            .resolve_module_names(&["./Ghost".to_string()], Path::new("/repo/src/index.ts"))
            .unwrap();
        assert!(results[0].is_none());
        assert!(path.exists(), "a failed resolution must flush in OnFailure mode");
    }

    #[test]
    fn standalone_trace_pass_through() {
        let fs = MemoryFS::new(&[]);
        let resolver =
            ResolverGeneric::new_with_file_system(fs, ResolverConfig::default().platform("ios"), vec![]);
        resolver.trace("compiler says hello").unwrap();
    }
}
