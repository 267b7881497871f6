use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use log::LevelFilter;

use crate::error::ConfigError;

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_SPOTIFY_ACCOUNTS_URL: &str = "https://accounts.spotify.com";
pub const DEFAULT_SPOTIFY_API_URL: &str = "https://api.spotify.com";
pub const DEFAULT_HF_INFERENCE_URL: &str = "https://api-inference.huggingface.co";
pub const DEFAULT_HF_MODEL: &str = "distilbert-base-uncased-finetuned-sst-2-english";

/// Process-wide settings, read once at startup and handed to the clients.
#[derive(Clone)]
pub struct Config {
    pub spotify_client_id: String,
    pub spotify_client_secret: String,
    pub hf_api_token: String,
    pub host: String,
    pub port: u16,
    /// `None` waits on upstreams indefinitely.
    pub request_timeout: Option<Duration>,
    pub log_level: LevelFilter,
    pub spotify_accounts_url: String,
    pub spotify_api_url: String,
    pub hf_inference_url: String,
    pub hf_model: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // missing secrets surface as upstream auth failures per request
        let secret = |key: &str| -> String { lookup(key).unwrap_or_default() };
        let optional = |key: &str, default: &str| -> String {
            lookup(key)
                .filter(|value| !value.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let port = parse_or(&lookup, "PORT", DEFAULT_PORT)?;
        let timeout_ms: Option<u64> = parse_opt(&lookup, "REQUEST_TIMEOUT_MS")?;
        let log_level = parse_or(&lookup, "LOG_LEVEL", LevelFilter::Info)?;

        Ok(Config {
            spotify_client_id: secret("SPOTIFY_CLIENT_ID"),
            spotify_client_secret: secret("SPOTIFY_CLIENT_SECRET"),
            hf_api_token: secret("HF_API_TOKEN"),
            host: optional("HOST", DEFAULT_HOST),
            port,
            request_timeout: timeout_ms.map(Duration::from_millis),
            log_level,
            spotify_accounts_url: trim_base(optional("SPOTIFY_ACCOUNTS_URL", DEFAULT_SPOTIFY_ACCOUNTS_URL)),
            spotify_api_url: trim_base(optional("SPOTIFY_API_URL", DEFAULT_SPOTIFY_API_URL)),
            hf_inference_url: trim_base(optional("HF_INFERENCE_URL", DEFAULT_HF_INFERENCE_URL)),
            hf_model: optional("HF_MODEL", DEFAULT_HF_MODEL),
        })
    }

    /// Names of the credential variables left unset or empty.
    pub fn missing_secrets(&self) -> Vec<&'static str> {
        [
            ("SPOTIFY_CLIENT_ID", &self.spotify_client_id),
            ("SPOTIFY_CLIENT_SECRET", &self.spotify_client_secret),
            ("HF_API_TOKEN", &self.hf_api_token),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(key, _)| key)
        .collect()
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Message worth logging for a `.env` load result. A missing file is normal.
pub fn dotenv_warning(result: Result<PathBuf, dotenvy::Error>) -> Option<String> {
    match result {
        Err(err) if !err.not_found() => Some(format!("failed to load .env: {err}")),
        _ => None,
    }
}

fn parse_opt<F, T>(lookup: &F, key: &'static str) -> Result<Option<T>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key).filter(|value| !value.is_empty()) {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Invalid { key, value }),
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    Ok(parse_opt(lookup, key)?.unwrap_or(default))
}

fn trim_base(url: String) -> String {
    url.trim_end_matches('/').to_string()
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("spotify_client_id", &self.spotify_client_id)
            .field("spotify_client_secret", &"<redacted>")
            .field("hf_api_token", &"<redacted>")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("request_timeout", &self.request_timeout)
            .field("log_level", &self.log_level)
            .field("spotify_accounts_url", &self.spotify_accounts_url)
            .field("spotify_api_url", &self.spotify_api_url)
            .field("hf_inference_url", &self.hf_inference_url)
            .field("hf_model", &self.hf_model)
            .finish()
    }
}
