use tracing_subscriber::EnvFilter;

use crate::config::{LogFormat, ObservabilityConfig};

/// Install the global fmt subscriber.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init(config: &ObservabilityConfig) {
    let filter = EnvFilter::try_new(&config.filter).unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(config.with_target);

    let installed = match config.format {
        LogFormat::Json => builder
            .json()
            .with_timer(tracing_subscriber::fmt::time::SystemTime)
            .try_init(),
        LogFormat::Text => builder.try_init(),
    };

    if installed.is_ok() {
        if let Some(rejected) = &config.rejected_format {
            tracing::warn!(error = %rejected, "falling back to json logs");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_init_is_harmless() {
        let config = ObservabilityConfig {
            filter: "not a [valid filter".to_string(),
            ..ObservabilityConfig::default()
        };
        init(&config);
        init(&ObservabilityConfig::default());
        tracing::info!("still logging");
    }
}
