use crate::error::{Error, Result};
use dotenvy::dotenv;
use std::env;
use std::sync::OnceLock;

#[derive(Debug, Clone)]
pub struct Config {
    pub server_address: String,
    pub database_url: String,
    pub session_secret: String,
    pub session_ttl_hours: i64,
    pub max_upload_mb: usize,
    pub db_max_connections: u32,
    pub secure_cookies: bool,
}

pub static CONFIG: OnceLock<Config> = OnceLock::new();

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        Ok(Self {
            server_address: env::var("SERVER_ADDRESS").unwrap_or_else(|_| "0.0.0.0:5000".to_string()),
            database_url: get_env("DATABASE_URL")?,
            session_secret: get_env("SESSION_SECRET")?,
            session_ttl_hours: get_env_parse_or("SESSION_TTL_HOURS", 24)?,
            max_upload_mb: get_env_parse_or("MAX_UPLOAD_MB", 10)?,
            db_max_connections: get_env_parse_or("DB_MAX_CONNECTIONS", 10)?,
            secure_cookies: get_env_parse_or("SECURE_COOKIES", false)?,
        })
    }
}

fn get_env(name: &str) -> Result<String> {
    env::var(name).map_err(|_| Error::Config(format!("Missing environment variable: {}", name)))
}

fn get_env_parse_or<T>(name: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) => raw
            .parse()
            .map_err(|e| Error::Config(format!("Invalid value for {}: {}", name, e))),
        Err(_) => Ok(default),
    }
}

pub fn init_config() -> Result<()> {
    let config = Config::from_env()?;
    CONFIG
        .set(config)
        .map_err(|_| Error::Config("Configuration has already been initialized".to_string()))?;
    Ok(())
}

/// Installs an explicit configuration, ignoring a second call. Used by tests
/// that build routers without touching the process environment.
pub fn init_with(config: Config) {
    let _ = CONFIG.set(config);
}

pub fn get_config() -> &'static Config {
    CONFIG
        .get()
        .expect("Configuration has not been initialized")
}
