//! Package Entry-Point Resolver.
//!
//! Chooses the file a bare package import lands on: an explicit sub-path, or the
//! manifest's `types`/`typings`/`main` fields, or finally `index`.

use std::path::Path;

use crate::{
    context::Ctx, error::ResolverError, extensions::Extension, file_system::FileSystem,
    finder::find_module_file, resolution::ResolvedModule,
};

pub fn resolve_entry_point<Fs: FileSystem>(
    ctx: &mut Ctx<'_, Fs>,
    platform_exts: &[String],
    pkg_dir: &Path,
    sub_path: Option<&str>,
    allowed_exts: &[Extension],
) -> Result<Option<ResolvedModule>, ResolverError> {
    if let Some(sub_path) = sub_path {
        return find_module_file(ctx, platform_exts, pkg_dir, sub_path, allowed_exts);
    }

    let manifest = ctx.read_package_manifest(pkg_dir)?;
    let Some(manifest) = manifest else {
        return find_module_file(ctx, platform_exts, pkg_dir, "index", allowed_exts);
    };

    if allowed_exts.contains(&Extension::DTs) {
        let typed_field = manifest
            .types
            .as_deref()
            .map(|v| ("types", v))
            .or_else(|| manifest.typings.as_deref().map(|v| ("typings", v)));
        if let Some((field, value)) = typed_field {
            ctx.trace.log(format!("Package has '{field}' field '{value}'."))?;
            if let Some(found) = find_module_file(ctx, platform_exts, pkg_dir, value, allowed_exts)? {
                return Ok(Some(found));
            }
        }
    }

    if let Some(main) = manifest.main.as_deref() {
        ctx.trace.log(format!("Package has 'main' field '{main}'."))?;
        if let Some(found) = find_module_file(ctx, platform_exts, pkg_dir, main, allowed_exts)? {
            return Ok(Some(found));
        }
    }

    find_module_file(ctx, platform_exts, pkg_dir, "index", allowed_exts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{context::ResolveContext, tests::memory_fs::MemoryFS, trace::{Sink, TraceLog, TraceMode}};
    use std::path::PathBuf;

    fn run(
        fs: &MemoryFS,
        pkg_dir: &str,
        sub_path: Option<&str>,
        allowed_exts: &[Extension],
    ) -> Option<ResolvedModule> {
        let ladder = crate::finder::platform_extension_ladder("ios", &[]);
        let trace = TraceLog::new(TraceMode::Never, Sink::Stdout);
        let mut record = ResolveContext::default();
        let mut ctx = Ctx::new(fs, &trace, &mut record);
        resolve_entry_point(&mut ctx, &ladder, Path::new(pkg_dir), sub_path, allowed_exts).unwrap()
    }

    #[test]
    fn explicit_sub_path_wins() {
        let fs = MemoryFS::new(&[("/repo/node_modules/ui/lib/Button.ts", "")]);
        let exts = [Extension::Ts, Extension::Tsx, Extension::DTs];
        let resolved = run(&fs, "/repo/node_modules/ui", Some("lib/Button"), &exts).unwrap();
        assert_eq!(resolved.absolute_path, PathBuf::from("/repo/node_modules/ui/lib/Button.ts"));
    }

    #[test]
    fn types_field_preferred_over_main() {
        let fs = MemoryFS::new(&[
            (
                "/repo/node_modules/ui/package.json",
                r#"{"types":"lib/index.d.ts","main":"lib/index.js"}"#,
            ),
            ("/repo/node_modules/ui/lib/index.d.ts", ""),
            ("/repo/node_modules/ui/lib/index.js", ""),
        ]);
        let exts = [Extension::Ts, Extension::Tsx, Extension::DTs, Extension::Js];
        let resolved = run(&fs, "/repo/node_modules/ui", None, &exts).unwrap();
        assert_eq!(resolved.absolute_path, PathBuf::from("/repo/node_modules/ui/lib/index.d.ts"));
    }

    #[test]
    fn falls_back_to_main_then_index() {
        let fs = MemoryFS::new(&[
            ("/repo/node_modules/ui/package.json", r#"{"main":"lib/index.js"}"#),
            ("/repo/node_modules/ui/lib/index.js", ""),
        ]);
        let exts = [Extension::Ts, Extension::Tsx, Extension::DTs, Extension::Js];
        let resolved = run(&fs, "/repo/node_modules/ui", None, &exts).unwrap();
        assert_eq!(resolved.absolute_path, PathBuf::from("/repo/node_modules/ui/lib/index.js"));
    }

    #[test]
    fn no_manifest_falls_back_to_index() {
        let fs = MemoryFS::new(&[("/repo/node_modules/ui/index.ts", "")]);
        let exts = [Extension::Ts, Extension::Tsx, Extension::DTs];
        let resolved = run(&fs, "/repo/node_modules/ui", None, &exts).unwrap();
        assert_eq!(resolved.absolute_path, PathBuf::from("/repo/node_modules/ui/index.ts"));
    }

    #[test]
    fn checkjs_disabled_and_no_source_falls_through_to_none() {
        let fs = MemoryFS::new(&[("/repo/node_modules/ui/package.json", r#"{"main":"lib/index.js"}"#)]);
        let exts = [Extension::Ts, Extension::Tsx, Extension::DTs];
        assert!(run(&fs, "/repo/node_modules/ui", None, &exts).is_none());
    }
}
