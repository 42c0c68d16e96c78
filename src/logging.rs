use figment::providers::{Env, Serialized};
use figment::Figment;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::EnvironmentError;

/// LoggingConfig controls how the inspector binary initializes tracing.
///
/// Logging is tool-side configuration, so it lives in `BREWENV_LOG_*`
/// variables rather than in the environment record itself; the record keeps
/// exactly the shape the application binds to.
#[derive(Deserialize, Serialize, Debug, JsonSchema)]
pub struct LoggingConfig {
    pub level: String,  // e.g. "info", "debug", "warn"
    pub format: String, // e.g. "json", "console"
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: "info".to_string(),
            format: "console".to_string(),
        }
    }
}

/// Read the logging config from `BREWENV_LOG_LEVEL` / `BREWENV_LOG_FORMAT`,
/// falling back to the defaults for anything unset.
pub fn logging_from_env() -> Result<LoggingConfig, EnvironmentError> {
    let config = Figment::from(Serialized::defaults(LoggingConfig::default()))
        .merge(Env::prefixed("BREWENV_LOG_"))
        .extract()?;
    Ok(config)
}

pub fn init_logging(logging_config: &LoggingConfig) {
    let level_filter = match logging_config.level.trim().to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        // Unknown levels fall back to info rather than aborting the tool.
        _ => LevelFilter::INFO,
    };

    // This can be used to allow env-based overrides, plus the default:
    let filter_layer = EnvFilter::default().add_directive(level_filter.into());

    match logging_config.format.to_lowercase().as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(filter_layer)
                .with(fmt::layer().json())
                .init();
        }
        _ => {
            // Human-readable console output, also the fallback for unknown
            // formats.
            tracing_subscriber::registry()
                .with(filter_layer)
                .with(fmt::layer().pretty())
                .init();
        }
    }
}
