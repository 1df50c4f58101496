use std::env;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use std::time::Duration;
use crate::error::{AppError, Result};

pub const DEFAULT_MODEL_NAME: &str = "sshleifer/distilbart-cnn-12-6";
pub const DEFAULT_INFERENCE_URL: &str = "https://api-inference.huggingface.co/models";
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 20;

#[derive(Clone, Debug)]
pub struct Config {
    pub server_addr: SocketAddr,
    /// Pretrained summarization model, e.g. `sshleifer/distilbart-cnn-12-6`.
    pub model_name: String,
    pub inference_url: String,
    pub hf_api_token: Option<String>,
    pub fetch_timeout: Duration,
}

impl Config {
    pub fn load() -> Result<Self> {
        // Load environment variables from .env file if it exists
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup so it can be exercised without
    /// touching the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let model_name = non_empty("MODEL_NAME").unwrap_or_else(|| DEFAULT_MODEL_NAME.to_string());
        let inference_url = non_empty("HF_INFERENCE_URL")
            .unwrap_or_else(|| DEFAULT_INFERENCE_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        let hf_api_token = non_empty("HF_API_TOKEN");

        let fetch_timeout = match non_empty("FETCH_TIMEOUT_SECS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .map_err(|e| AppError::ConfigError(format!("Invalid FETCH_TIMEOUT_SECS: {}", e)))?,
            None => DEFAULT_FETCH_TIMEOUT_SECS,
        };

        // Load server configuration with defaults
        let host = non_empty("HOST").unwrap_or_else(|| "127.0.0.1".to_string());
        let port = non_empty("PORT").unwrap_or_else(|| "3000".to_string());
        let port = port.parse::<u16>().map_err(|e| AppError::ConfigError(format!("Invalid port: {}", e)))?;
        let ip = IpAddr::from_str(&host).map_err(|e| AppError::ConfigError(format!("Invalid host address: {}", e)))?;

        Ok(Config {
            server_addr: SocketAddr::new(ip, port),
            model_name,
            inference_url,
            hf_api_token,
            fetch_timeout: Duration::from_secs(fetch_timeout),
        })
    }
}
