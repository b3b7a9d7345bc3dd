/// Client configuration, resolved at build time
use crate::error::ConfigError;
use url::Url;

pub const DEFAULT_API_BASE_URL: &str = "https://jobscrape-i388.onrender.com/api";
pub const DEFAULT_LOG_LEVEL: log::Level = log::Level::Info;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base_url: Url,
    pub log_level: log::Level,
}

impl ClientConfig {
    pub fn new(api_base_url: &str) -> Result<Self, ConfigError> {
        Ok(ClientConfig {
            api_base_url: parse_base_url(api_base_url)?,
            log_level: DEFAULT_LOG_LEVEL,
        })
    }

    /// Build config from variables captured when the WASM bundle was compiled.
    ///
    /// Optional:
    /// - `JOBSCRAPE_API_BASE_URL`: backend root, default [`DEFAULT_API_BASE_URL`]
    /// - `JOBSCRAPE_LOG_LEVEL`: `error`..`trace`, default `info`
    pub fn from_env() -> Result<Self, ConfigError> {
        let base = option_env!("JOBSCRAPE_API_BASE_URL").unwrap_or(DEFAULT_API_BASE_URL);
        let log_level = parse_log_level(option_env!("JOBSCRAPE_LOG_LEVEL"))?;
        Ok(ClientConfig::new(base)?.with_log_level(log_level))
    }

    pub fn with_log_level(mut self, log_level: log::Level) -> Self {
        self.log_level = log_level;
        self
    }
}

fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw.trim()).map_err(|source| ConfigError::InvalidBaseUrl {
        value: raw.to_string(),
        source,
    })?;

    if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() {
        return Err(ConfigError::UnsupportedBaseUrl(raw.to_string()));
    }

    Ok(url)
}

fn parse_log_level(raw: Option<&str>) -> Result<log::Level, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_LOG_LEVEL),
        Some(value) => value
            .parse()
            .map_err(|_| ConfigError::InvalidLogLevel(value.to_string())),
    }
}
