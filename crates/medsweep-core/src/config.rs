use config::{Config, ConfigError, Environment, File as ConfigFile};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Root directory of the movie library. Unset means movies are not scanned.
    pub movie_path: Option<String>,
    /// Root directory of the TV library. Unset means TV shows are not scanned.
    pub tv_path: Option<String>,
    /// TMDb API read access token (bearer). Required for scanning.
    pub tmdb_api_key: Option<String>,
    #[serde(default)]
    pub use_proxy: bool,
    pub proxy_url: Option<String>,
    /// Directory holding all intermediate artifacts and the master ledger.
    pub data_dir: String,
    /// Language sent to TMDb for localized titles and overviews.
    pub language: String,
}

pub fn load_configuration() -> Result<AppConfig, ConfigError> {
    let builder = Config::builder()
        .set_default("data_dir", "./data")?
        .set_default("language", "zh-CN")?
        .add_source(ConfigFile::with_name("Config").required(false))
        .add_source(Environment::with_prefix("MEDSWEEP").try_parsing(true))
        .build()?;
    builder.try_deserialize::<AppConfig>()
}

impl AppConfig {
    /// The configured API key, treating an empty or whitespace-only value as unset.
    pub fn api_key(&self) -> Option<&str> {
        self.tmdb_api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> AppConfig {
        AppConfig {
            movie_path: None,
            tv_path: None,
            tmdb_api_key: None,
            use_proxy: false,
            proxy_url: None,
            data_dir: "./data".to_string(),
            language: "en-US".to_string(),
        }
    }

    #[test]
    fn test_api_key_absent() {
        assert_eq!(base_config().api_key(), None);
    }

    #[test]
    fn test_api_key_blank_is_unset() {
        let mut config = base_config();
        config.tmdb_api_key = Some("   ".to_string());
        assert_eq!(config.api_key(), None);
    }

    #[test]
    fn test_api_key_trimmed() {
        let mut config = base_config();
        config.tmdb_api_key = Some(" token ".to_string());
        assert_eq!(config.api_key(), Some("token"));
    }
}
