use serde::Deserialize;

use crate::models::MAX_RECOMMENDATIONS;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Base URL of the book backend serving `/api/*`
    #[serde(default = "default_backend_url")]
    pub backend_url: String,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// JSON file holding the persisted theme
    #[serde(default = "default_settings_path")]
    pub settings_path: String,

    /// Recommendation count used when the form leaves it blank
    #[serde(default = "default_num_recommendations")]
    pub default_num_recommendations: u32,
}

fn default_backend_url() -> String {
    "http://127.0.0.1:5002".to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_settings_path() -> String {
    "bookmatch-settings.json".to_string()
}

fn default_num_recommendations() -> u32 {
    5
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_vars(std::env::vars())
    }

    /// Load configuration from explicit key/value pairs
    pub fn from_vars<I>(vars: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let config = envy::from_iter::<_, Config>(vars)
            .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;
        anyhow::ensure!(
            (1..=MAX_RECOMMENDATIONS).contains(&config.default_num_recommendations),
            "Failed to load config: DEFAULT_NUM_RECOMMENDATIONS must be between 1 and {}, got {}",
            MAX_RECOMMENDATIONS,
            config.default_num_recommendations
        );
        Ok(config)
    }

    /// Socket address the web surface binds to
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_apply_when_unset() {
        let config = Config::from_vars(Vec::new()).unwrap();
        assert_eq!(config.backend_url, "http://127.0.0.1:5002");
        assert_eq!(config.bind_addr(), "127.0.0.1:3000");
        assert_eq!(config.settings_path, "bookmatch-settings.json");
        assert_eq!(config.default_num_recommendations, 5);
    }

    #[test]
    fn test_overrides_from_vars() {
        let vars = vec![
            ("BACKEND_URL".to_string(), "http://books.local".to_string()),
            ("PORT".to_string(), "8080".to_string()),
            ("DEFAULT_NUM_RECOMMENDATIONS".to_string(), "3".to_string()),
        ];
        let config = Config::from_vars(vars).unwrap();
        assert_eq!(config.backend_url, "http://books.local");
        assert_eq!(config.port, 8080);
        assert_eq!(config.default_num_recommendations, 3);
    }

    #[test]
    fn test_out_of_range_default_count_is_rejected() {
        for value in ["0", "21", "50"] {
            let vars = vec![(
                "DEFAULT_NUM_RECOMMENDATIONS".to_string(),
                value.to_string(),
            )];
            let err = Config::from_vars(vars).unwrap_err();
            assert!(err.to_string().contains("DEFAULT_NUM_RECOMMENDATIONS"));
        }

        let vars = vec![("DEFAULT_NUM_RECOMMENDATIONS".to_string(), "20".to_string())];
        assert_eq!(Config::from_vars(vars).unwrap().default_num_recommendations, 20);
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        let vars = vec![("PORT".to_string(), "not-a-port".to_string())];
        assert!(Config::from_vars(vars).is_err());
    }
}
