//! Server configuration from the environment, with local defaults.

use std::env;

pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_path: String,
    pub static_dir: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            host: env::var("DIARY_HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("DIARY_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            database_path: env::var("DIARY_DB").unwrap_or_else(|_| "diary.sqlite".to_string()),
            static_dir: env::var("DIARY_STATIC").unwrap_or_else(|_| "./static".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_env_is_unset() {
        let config = Config::from_env();
        assert!(!config.host.is_empty());
        assert!(config.port > 0);
        assert!(!config.database_path.is_empty());
    }
}
