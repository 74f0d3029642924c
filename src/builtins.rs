//! The platform builtin-module list and the failure-suppression predicate.
//!
//! Builtin classification is never produced by [`crate::specifier::ModuleRef::parse`]:
//! it only feeds [`should_show_resolver_failure`], which decides whether a failed
//! resolution is worth a trace record.

/// Node.js core module names, sorted for `binary_search`.
///
/// Kept in sync with the Node.js `module.builtinModules` list; `fs/promises` is included
/// even though Node itself nests it under `fs`, since callers reference it as a bare
/// specifier.
pub const NODEJS_BUILTINS: &[&str] = &[
    "assert",
    "assert/strict",
    "async_hooks",
    "buffer",
    "child_process",
    "cluster",
    "console",
    "constants",
    "crypto",
    "dgram",
    "diagnostics_channel",
    "dns",
    "dns/promises",
    "domain",
    "events",
    "fs",
    "fs/promises",
    "http",
    "http2",
    "https",
    "inspector",
    "inspector/promises",
    "module",
    "net",
    "os",
    "path",
    "path/posix",
    "path/win32",
    "perf_hooks",
    "process",
    "punycode",
    "querystring",
    "readline",
    "readline/promises",
    "repl",
    "stream",
    "stream/consumers",
    "stream/promises",
    "stream/web",
    "string_decoder",
    "sys",
    "timers",
    "timers/promises",
    "tls",
    "trace_events",
    "tty",
    "url",
    "util",
    "util/types",
    "v8",
    "vm",
    "wasi",
    "worker_threads",
    "zlib",
];

/// Extensions of files the bundler hands off to an asset pipeline rather than the type
/// checker. A missing resolution for one of these is expected, not a compiler bug.
const MULTIMEDIA_EXTENSIONS: &[&str] = &[
    "aac", "aiff", "bmp", "caf", "css", "gif", "html", "jpeg", "jpg", "m4a", "m4v", "mov", "mp3",
    "mp4", "mpeg", "mpg", "obj", "otf", "pdf", "png", "psd", "svg", "ttf", "wav", "webm", "webp",
];

/// Whether `specifier` names a builtin module: one of [`NODEJS_BUILTINS`], or anything
/// spelled with a `node:` prefix (case-insensitive).
#[must_use]
pub fn is_builtin(specifier: &str) -> bool {
    specifier.to_ascii_lowercase().starts_with("node:")
        || NODEJS_BUILTINS.binary_search(&specifier).is_ok()
}

fn extension_of(specifier: &str) -> Option<&str> {
    // Only the final path segment's extension matters; specifiers are never Windows paths.
    let file_name = specifier.rsplit('/').next().unwrap_or(specifier);
    let dot = file_name.rfind('.')?;
    if dot == 0 { None } else { Some(&file_name[dot + 1..]) }
}

/// Should a failed resolution of `name` actually be reported (traced on failure)?
///
/// Builtins, `node:`-prefixed specifiers, and known multimedia/asset extensions are
/// expected to "fail" resolution (the bundler's asset pipeline owns them, not the type
/// checker) so their failures are suppressed.
#[must_use]
pub fn should_show_resolver_failure(name: &str) -> bool {
    if is_builtin(name) {
        return false;
    }
    match extension_of(name) {
        Some(ext) => !MULTIMEDIA_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()),
        None => true,
    }
}
