use super::constant::{DEFAULT_GEMINI_API_BASE, DEFAULT_GEMINI_MODEL, DEFAULT_GEMINI_TIMEOUT_SECS};
use std::env;
use std::time::Duration;

#[derive(Clone, Debug, Default)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
    pub api_base: String,
    pub timeout_secs: u64,
}

impl GeminiConfig {
    pub fn get_timeout(&self) -> Option<Duration> {
        match self.timeout_secs {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        }
    }

    pub fn init_from_env(&mut self) -> Result<(), String> {
        self.api_key = env::var("GEMINI_API_KEY")
            .or_else(|_| env::var("API_KEY"))
            .map_err(|_| "GEMINI_API_KEY not set in environment".to_string())?;
        if self.api_key.trim().is_empty() {
            return Err("GEMINI_API_KEY is empty".to_string());
        }

        self.model = env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_GEMINI_MODEL.to_string());

        self.api_base = env::var("GEMINI_API_BASE")
            .map(|base| base.trim().trim_end_matches('/').to_string())
            .ok()
            .filter(|base| !base.is_empty())
            .unwrap_or_else(|| DEFAULT_GEMINI_API_BASE.to_string());

        self.timeout_secs = match env::var("GEMINI_TIMEOUT_SECS") {
            Ok(value) => value
                .parse::<u64>()
                .map_err(|_| "GEMINI_TIMEOUT_SECS is not a valid u64".to_string())?,
            Err(_) => DEFAULT_GEMINI_TIMEOUT_SECS,
        };

        Ok(())
    }
}
