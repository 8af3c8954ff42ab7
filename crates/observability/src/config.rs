use core::str::FromStr;

use thiserror::Error;

/// Filter directives, e.g. `info` or `stockroom_inventory=debug`.
pub const FILTER_ENV: &str = "RUST_LOG";

/// Output format: `json` (default) or `text`.
pub const FORMAT_ENV: &str = "STOCKROOM_LOG_FORMAT";

const DEFAULT_FILTER: &str = "info";

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// One JSON object per line, with timestamps.
    #[default]
    Json,
    /// Human-readable single-line output.
    Text,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown log format: {0}")]
pub struct UnknownLogFormat(pub String);

impl FromStr for LogFormat {
    type Err = UnknownLogFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(LogFormat::Json),
            "text" | "pretty" | "plain" => Ok(LogFormat::Text),
            other => Err(UnknownLogFormat(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservabilityConfig {
    pub filter: String,
    pub format: LogFormat,
    pub with_target: bool,
    /// Set when the requested format was not recognized; reported once logging is up.
    pub rejected_format: Option<UnknownLogFormat>,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_FILTER.to_string(),
            format: LogFormat::default(),
            with_target: false,
            rejected_format: None,
        }
    }
}

impl ObservabilityConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup (the process environment in production).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(filter) = lookup(FILTER_ENV).filter(|f| !f.trim().is_empty()) {
            config.filter = filter;
        }

        if let Some(raw) = lookup(FORMAT_ENV) {
            match raw.parse::<LogFormat>() {
                Ok(format) => config.format = format,
                Err(err) => config.rejected_format = Some(err),
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_to_info_json() {
        let config = ObservabilityConfig::from_lookup(lookup(&[]));
        assert_eq!(config, ObservabilityConfig::default());
        assert_eq!(config.filter, "info");
        assert_eq!(config.format, LogFormat::Json);
    }

    #[test]
    fn reads_filter_and_format() {
        let config = ObservabilityConfig::from_lookup(lookup(&[
            (FILTER_ENV, "stockroom_inventory=debug"),
            (FORMAT_ENV, " Text "),
        ]));
        assert_eq!(config.filter, "stockroom_inventory=debug");
        assert_eq!(config.format, LogFormat::Text);
        assert_eq!(config.rejected_format, None);
    }

    #[test]
    fn blank_filter_keeps_default() {
        let config = ObservabilityConfig::from_lookup(lookup(&[(FILTER_ENV, "  ")]));
        assert_eq!(config.filter, "info");
    }

    #[test]
    fn unknown_format_falls_back_to_json() {
        let config = ObservabilityConfig::from_lookup(lookup(&[(FORMAT_ENV, "xml")]));
        assert_eq!(config.format, LogFormat::Json);
        assert_eq!(config.rejected_format, Some(UnknownLogFormat("xml".to_string())));
    }
}
