//! Extension table.
//!
//! Extension precedence is always an ordered sequence, never a set — the finder relies on
//! iterating `allowed_extensions` in the exact order produced here.

use std::fmt;

/// The closed, ordered set of extensions the resolver understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Extension {
    DTs,
    Ts,
    Tsx,
    Js,
    Jsx,
    Json,
}

impl Extension {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DTs => ".d.ts",
            Self::Ts => ".ts",
            Self::Tsx => ".tsx",
            Self::Js => ".js",
            Self::Jsx => ".jsx",
            Self::Json => ".json",
        }
    }
}

impl fmt::Display for Extension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether `containing_file` is a TypeScript declaration file, per its filename suffix.
#[must_use]
pub fn is_declaration_file(containing_file: &str) -> bool {
    containing_file.ends_with(".d.ts")
}

/// The ordered list of extensions the finder should probe for a given containing file.
///
/// `.d.ts` containing files only ever resolve into `.d.ts`/`.ts` (the `.ts` entry lets a
/// specifier written as `./foo.d` resolve to `./foo.d.ts`). Everything else gets the base
/// ladder `[.ts, .tsx, .d.ts]`, extended with `[.js, .jsx]` under `checkJs` and `[.json]`
/// under `resolveJsonModule`.
#[must_use]
pub fn allowed_extensions(
    containing_is_declaration: bool,
    check_js: bool,
    resolve_json_module: bool,
) -> Vec<Extension> {
    if containing_is_declaration {
        return vec![Extension::DTs, Extension::Ts];
    }
    let mut exts = vec![Extension::Ts, Extension::Tsx, Extension::DTs];
    if check_js {
        exts.push(Extension::Js);
        exts.push(Extension::Jsx);
    }
    if resolve_json_module {
        exts.push(Extension::Json);
    }
    exts
}
