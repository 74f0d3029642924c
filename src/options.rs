//! Resolver construction options (`ResolverConfig`).

use crate::trace::{Sink, TraceMode};

/// Construction inputs for [`crate::ResolverGeneric`], bit-exact with the options a
/// compiler driver already threads through CLI flags (`--platform`, `--platformExtensions`,
/// `--disableReactNativePackageSubstitution`, ...).
#[derive(Debug, Clone)]
pub struct ResolverConfig {
    /// Lowercased before use; e.g. `ios`, `android`, `windows`, `macos`, `win32`, or a
    /// custom out-of-tree platform name.
    pub platform: String,

    /// Bare tokens (no leading `.`) appended to the platform-extension ladder, e.g.
    /// `["native", "mobile"]`.
    pub extra_platform_extensions: Vec<String>,

    /// Disables the `react-native` → platform-package rewrite entirely.
    pub disable_rn_package_substitution: bool,

    /// Whether `.js`/`.jsx` are part of the allowed extension ladder.
    pub check_js: bool,

    /// Whether `.json` is part of the allowed extension ladder.
    pub resolve_json_module: bool,

    pub trace_mode: TraceMode,
    pub trace_sink: Sink,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            platform: "ios".to_string(),
            extra_platform_extensions: Vec::new(),
            disable_rn_package_substitution: false,
            check_js: false,
            resolve_json_module: false,
            trace_mode: TraceMode::Never,
            trace_sink: Sink::Stdout,
        }
    }
}

impl ResolverConfig {
    #[must_use]
    pub fn platform(mut self, platform: impl Into<String>) -> Self {
        self.platform = platform.into().to_lowercase();
        self
    }

    #[must_use]
    pub fn extra_platform_extensions(mut self, extensions: Vec<String>) -> Self {
        self.extra_platform_extensions = extensions;
        self
    }

    #[must_use]
    pub fn disable_rn_package_substitution(mut self, disabled: bool) -> Self {
        self.disable_rn_package_substitution = disabled;
        self
    }

    #[must_use]
    pub fn check_js(mut self, check_js: bool) -> Self {
        self.check_js = check_js;
        self
    }

    #[must_use]
    pub fn resolve_json_module(mut self, resolve_json_module: bool) -> Self {
        self.resolve_json_module = resolve_json_module;
        self
    }

    #[must_use]
    pub fn trace_mode(mut self, mode: TraceMode) -> Self {
        self.trace_mode = mode;
        self
    }

    #[must_use]
    pub fn trace_sink(mut self, sink: Sink) -> Self {
        self.trace_sink = sink;
        self
    }
}
