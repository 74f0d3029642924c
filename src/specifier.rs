//! Specifier classification.

/// A textual module specifier classified into one of three shapes.
///
/// `Builtin` is never produced by [`ModuleRef::parse`]: builtin classification is a
/// separate predicate consulted only by the failure-suppression check, see
/// [`crate::builtins::should_show_resolver_failure`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModuleRef {
    Package { scope: Option<String>, name: String, sub_path: Option<String> },
    File { path: String },
    Builtin,
}

impl ModuleRef {
    /// Classifies `spec` as a relative/absolute file, a package reference, or (defensively)
    /// an unresolvable file path, by checking the rules below in order.
    #[must_use]
    pub fn parse(spec: &str) -> Self {
        if is_relative_or_absolute(spec) {
            return Self::File { path: spec.to_string() };
        }
        if let Some(scoped) = spec.strip_prefix('@') {
            if let Some((scope, after_scope)) = scoped.split_once('/') {
                if !scope.is_empty() {
                    let (name, sub_path) = split_head(after_scope);
                    if !name.is_empty() {
                        return Self::Package {
                            scope: Some(scope.to_string()),
                            name: name.to_string(),
                            sub_path,
                        };
                    }
                }
            }
            return Self::File { path: spec.to_string() };
        }
        let (name, sub_path) = split_head(spec);
        if !name.is_empty() && !name.contains('\\') {
            return Self::Package { scope: None, name: name.to_string(), sub_path };
        }
        // Defensive: an empty or malformed head falls back to an unresolvable File.
        Self::File { path: spec.to_string() }
    }
}

fn is_relative_or_absolute(spec: &str) -> bool {
    spec.starts_with("./") || spec.starts_with("../") || spec.starts_with('/') || is_drive_letter(spec)
}

fn is_drive_letter(spec: &str) -> bool {
    let bytes = spec.as_bytes();
    bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':'
}

/// Splits `s` at its first `/`, returning the head and the remainder (without the slash).
fn split_head(s: &str) -> (&str, Option<String>) {
    match s.split_once('/') {
        Some((head, rest)) => (head, Some(rest.to_string())),
        None => (s, None),
    }
}
