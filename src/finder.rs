//! File finder: the hardest single piece of the resolver. Platform-extension precedence
//! must win over generic extension precedence at every nesting level, and the `.js`/`.ts`
//! explicit extension retry must not leak into the directory-index fallback path.

use std::path::{Path, PathBuf};

use crate::{context::Ctx, error::ResolverError, extensions::Extension, file_system::FileSystem, resolution::ResolvedModule};

/// Builds the ordered platform-extension ladder once, at construction time:
/// `[".<platform>", ".<extra_1>", ..., ".<extra_n>", ""]`, the trailing empty string
/// always representing "no platform suffix".
#[must_use]
pub fn platform_extension_ladder(platform: &str, extra_platform_extensions: &[String]) -> Vec<String> {
    let mut ladder = Vec::with_capacity(extra_platform_extensions.len() + 2);
    ladder.push(format!(".{platform}"));
    ladder.extend(extra_platform_extensions.iter().map(|e| format!(".{e}")));
    ladder.push(String::new());
    ladder
}

/// Given a search directory, a logical module path (no resolved extension), and the
/// allowed extensions, finds the file the compiler should consume.
pub fn find_module_file<Fs: FileSystem>(
    ctx: &mut Ctx<'_, Fs>,
    platform_exts: &[String],
    search_dir: &Path,
    module_path: &str,
    allowed_exts: &[Extension],
) -> Result<Option<ResolvedModule>, ResolverError> {
    if let Some(matched) = longest_matching_extension(module_path, allowed_exts) {
        let candidate = search_dir.join(module_path);
        if ctx.is_file(&candidate)? {
            return Ok(Some(ResolvedModule::new(candidate, matched)));
        }
        // An explicit `.js`/`.jsx` specifier that didn't exist verbatim still gets a shot
        // at a same-named TypeScript source file: `import "./foo.js"` may resolve to
        // `./foo.ts`.
        if matches!(matched, Extension::Js | Extension::Jsx) {
            let trimmed = &module_path[..module_path.len() - matched.as_str().len()];
            return search_without_explicit_extension(ctx, platform_exts, search_dir, trimmed, allowed_exts);
        }
        return Ok(None);
    }
    search_without_explicit_extension(ctx, platform_exts, search_dir, module_path, allowed_exts)
}

/// Longest allowed-extension suffix of `module_path`, so `.d.ts` is preferred over `.ts`
/// when a specifier is already fully spelled out (e.g. `./foo.d.ts`).
fn longest_matching_extension(module_path: &str, allowed_exts: &[Extension]) -> Option<Extension> {
    allowed_exts
        .iter()
        .copied()
        .filter(|ext| module_path.ends_with(ext.as_str()))
        .max_by_key(|ext| ext.as_str().len())
}

/// The platform × extension cross-product, then the directory-index fallback. Platform
/// suffix is the outer loop so it always wins over extension order at the same nesting
/// level.
fn search_without_explicit_extension<Fs: FileSystem>(
    ctx: &mut Ctx<'_, Fs>,
    platform_exts: &[String],
    search_dir: &Path,
    module_path: &str,
    allowed_exts: &[Extension],
) -> Result<Option<ResolvedModule>, ResolverError> {
    for pext in platform_exts {
        for ext in allowed_exts {
            let candidate = search_dir.join(format!("{module_path}{pext}{ext}"));
            if ctx.is_file(&candidate)? {
                return Ok(Some(ResolvedModule::new(candidate, *ext)));
            }
        }
    }

    let dir_candidate: PathBuf = search_dir.join(module_path);
    if ctx.is_directory(&dir_candidate)? {
        return find_module_file(ctx, platform_exts, &dir_candidate, "index", allowed_exts);
    }
    Ok(None)
}
