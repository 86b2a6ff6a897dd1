use super::constant::DEFAULT_LOG_LEVEL;
use std::env;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Clone, Debug, Default)]
pub struct TracingConfig {
    pub log_level: String,
}

impl TracingConfig {
    pub fn init_from_env(&mut self) -> Result<(), String> {
        self.log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string());
        Ok(())
    }

    /// Installs the global subscriber. `RUST_LOG` wins over `LOG_LEVEL` when set.
    pub fn init_subscriber(&self) -> Result<(), String> {
        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(&self.log_level))
            .map_err(|e| format!("Invalid log filter '{}': {}", self.log_level, e))?;

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(true))
            .try_init()
            .map_err(|e| format!("Failed to install tracing subscriber: {}", e))
    }
}
