//! Engine configuration.

/// Env var holding the combination ceiling (`none` or `0` disables it).
pub const MAX_COMBINATIONS_ENV: &str = "SHOPDESK_MAX_COMBINATIONS";

/// Env var toggling whether the display/media feature takes part in generation.
pub const INCLUDE_DISPLAY_FEATURE_ENV: &str = "SHOPDESK_INCLUDE_DISPLAY_FEATURE";

pub const DEFAULT_MAX_COMBINATIONS: usize = 10_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Upper bound on generated combinations; `None` means unbounded.
    pub max_combinations: Option<usize>,
    /// Whether the feature flagged `is_default` is a generation dimension.
    pub include_display_feature: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_combinations: Some(DEFAULT_MAX_COMBINATIONS),
            include_display_feature: true,
        }
    }
}

impl EngineConfig {
    /// No ceiling, display feature included.
    pub fn unbounded() -> Self {
        Self {
            max_combinations: None,
            ..Self::default()
        }
    }

    pub fn with_max_combinations(mut self, max_combinations: Option<usize>) -> Self {
        self.max_combinations = max_combinations;
        self
    }

    pub fn with_include_display_feature(mut self, include_display_feature: bool) -> Self {
        self.include_display_feature = include_display_feature;
        self
    }

    /// Read configuration from the process environment.
    ///
    /// Unset or unparsable variables fall back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`EngineConfig::from_env`], with an explicit variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = lookup(MAX_COMBINATIONS_ENV) {
            match raw.trim() {
                "none" | "0" => config.max_combinations = None,
                value => match value.parse::<usize>() {
                    Ok(limit) => config.max_combinations = Some(limit),
                    Err(_) => tracing::warn!(
                        var = MAX_COMBINATIONS_ENV,
                        value = %raw,
                        "invalid combination ceiling; using default {DEFAULT_MAX_COMBINATIONS}"
                    ),
                },
            }
        }

        if let Some(raw) = lookup(INCLUDE_DISPLAY_FEATURE_ENV) {
            match raw.trim().parse::<bool>() {
                Ok(include) => config.include_display_feature = include,
                Err(_) => tracing::warn!(
                    var = INCLUDE_DISPLAY_FEATURE_ENV,
                    value = %raw,
                    "invalid boolean; display feature stays included"
                ),
            }
        }

        config
    }
}
