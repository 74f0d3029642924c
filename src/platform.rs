//! Platform substitution: rewriting a bare `react-native` reference to the package name of
//! the active out-of-tree platform.

/// The closed map from a React Native out-of-tree platform to its package name.
///
/// Platforms absent from this map (e.g. `ios`, `android`, or any custom platform) simply
/// have no substitution: an unmapped platform silently opts out rather than erroring.
#[must_use]
pub fn mapped_package(platform: &str) -> Option<&'static str> {
    match platform {
        "windows" => Some("react-native-windows"),
        "macos" => Some("react-native-macos"),
        "win32" => Some("@office-iss/react-native-win32"),
        _ => None,
    }
}

const TOKEN: &str = "react-native";

/// Rewrites a leading `react-native` reference to the platform-specific package name.
///
/// Returns `None` when no substitution applies (disabled, unmapped platform, or `spec`
/// doesn't start with the exact token `react-native`), in which case the caller should
/// keep using the original specifier unchanged and skip emitting a trace line.
#[must_use]
pub fn substitute(spec: &str, platform: &str, disabled: bool) -> Option<String> {
    if disabled {
        return None;
    }
    let mapped = mapped_package(platform)?;
    let remainder = spec.strip_prefix(TOKEN)?;
    if remainder.is_empty() || remainder.starts_with('/') || remainder.starts_with('?') {
        Some(format!("{mapped}{remainder}"))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substitutes_bare_react_native() {
        assert_eq!(substitute("react-native", "windows", false).as_deref(), Some("react-native-windows"));
    }

    #[test]
    fn substitutes_react_native_subpath() {
        assert_eq!(
            substitute("react-native/Libraries/Foo", "windows", false).as_deref(),
            Some("react-native-windows/Libraries/Foo")
        );
        assert_eq!(
            substitute("react-native/Libraries/Foo", "macos", false).as_deref(),
            Some("react-native-macos/Libraries/Foo")
        );
        assert_eq!(
            substitute("react-native/Libraries/Foo", "win32", false).as_deref(),
            Some("@office-iss/react-native-win32/Libraries/Foo")
        );
    }

    #[test]
    fn leaves_unrelated_specifiers_untouched() {
        assert_eq!(substitute("react-native-community/slider", "windows", false), None);
        assert_eq!(substitute("./react-native", "windows", false), None);
        assert_eq!(substitute("lodash", "windows", false), None);
    }

    #[test]
    fn unmapped_platform_silently_opts_out() {
        assert_eq!(substitute("react-native/Foo", "ios", false), None);
        assert_eq!(substitute("react-native/Foo", "android", false), None);
        assert_eq!(substitute("react-native/Foo", "custom-tv", false), None);
    }

    #[test]
    fn disabled_is_idempotent() {
        assert_eq!(substitute("react-native/Foo", "windows", true), None);
    }

    #[test]
    fn idempotence_for_non_react_native_specifiers() {
        for s in ["lodash", "./App", "@acme/ui"] {
            assert_eq!(substitute(s, "windows", false), None);
        }
    }
}
