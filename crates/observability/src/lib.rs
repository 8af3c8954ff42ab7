//! Tracing/logging setup shared by anything that embeds the inventory.

/// Environment-driven logging configuration.
pub mod config;

/// Subscriber installation (filters, output format).
pub mod subscriber;

pub use config::{LogFormat, ObservabilityConfig, UnknownLogFormat};

/// Initialize process-wide logging from the environment.
///
/// Safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    init_with(&ObservabilityConfig::from_env());
}

/// Initialize process-wide logging from an explicit configuration.
pub fn init_with(config: &ObservabilityConfig) {
    subscriber::init(config);
}
