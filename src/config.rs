// src/config.rs

use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub database_url: Option<String>,
    pub database_name: Option<String>,
}

impl Config {
    /// Reads the process configuration once at startup. Never fails: missing
    /// or malformed values fall back to defaults, and missing database
    /// settings leave the store unconfigured.
    pub fn from_env() -> Self {
        Self {
            server_host: env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            server_port: env::var("PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(8000),
            database_url: non_empty_var("DATABASE_URL"),
            database_name: non_empty_var("DATABASE_NAME"),
        }
    }

    pub fn database_url_set(&self) -> bool {
        self.database_url.is_some()
    }

    pub fn database_name_set(&self) -> bool {
        self.database_name.is_some()
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}
