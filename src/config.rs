//! Service configuration
//!
//! Loaded once at startup from an optional `config.toml` overlaid with
//! `LINKGATE__*` environment variables (separator `__`), e.g.
//! `LINKGATE__SERVER__PORT=9090` or `LINKGATE__FALLBACKS__BASE_URL=...`.

use std::sync::{Arc, OnceLock};

use arc_swap::ArcSwap;
use serde::{Deserialize, Serialize};

static CONFIG: OnceLock<ArcSwap<AppConfig>> = OnceLock::new();

/// Get the global configuration instance
///
/// Returns an Arc pointer to the configuration, cheap to clone and lock-free.
pub fn get_config() -> Arc<AppConfig> {
    CONFIG
        .get()
        .expect("Config not initialized. Call init_config() first.")
        .load_full()
}

/// Initialize the global configuration
pub fn init_config() {
    CONFIG.get_or_init(|| ArcSwap::from_pointee(AppConfig::load()));
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub fallbacks: FallbackConfig,
    #[serde(default)]
    pub cors: CorsConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_server_host")]
    pub host: String,
    #[serde(default = "default_server_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default = "default_database_url")]
    pub url: String,
    #[serde(default = "default_database_pool_size")]
    pub pool_size: u32,
}

/// Fallback destinations for every non-success resolution outcome.
///
/// The pages themselves live in the dashboard app; this service only ever
/// issues redirects to them. `base_url` alone is the home fallback.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FallbackConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_not_found_path")]
    pub not_found_path: String,
    #[serde(default = "default_inactive_path")]
    pub inactive_path: String,
    #[serde(default = "default_expired_path")]
    pub expired_path: String,
    #[serde(default = "default_error_path")]
    pub error_path: String,
}

impl FallbackConfig {
    pub fn home_url(&self) -> String {
        self.base_url.clone()
    }

    pub fn not_found_url(&self) -> String {
        format!("{}{}", self.base_url, self.not_found_path)
    }

    pub fn inactive_url(&self) -> String {
        format!("{}{}", self.base_url, self.inactive_path)
    }

    pub fn expired_url(&self) -> String {
        format!("{}{}", self.base_url, self.expired_path)
    }

    pub fn error_url(&self) -> String {
        format!("{}{}", self.base_url, self.error_path)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    #[serde(default = "default_cors_allowed_headers")]
    pub allowed_headers: Vec<String>,
    #[serde(default = "default_cors_max_age")]
    pub max_age: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
    #[serde(default)]
    pub file: Option<String>,
    #[serde(default = "default_max_backups")]
    pub max_backups: u32,
    #[serde(default = "default_enable_rotation")]
    pub enable_rotation: bool,
}

impl AppConfig {
    /// Load configuration from TOML file and environment variables
    ///
    /// Priority: ENV > config.toml > defaults.
    pub fn load() -> Self {
        use config::{Config, Environment, File};

        let path = "config.toml";

        let builder = Config::builder()
            .add_source(File::with_name(path).required(false))
            .add_source(
                Environment::with_prefix("LINKGATE")
                    .separator("__")
                    .try_parsing(true),
            );

        match builder.build() {
            Ok(settings) => match settings.try_deserialize::<AppConfig>() {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("[ERROR] Failed to deserialize config: {}", e);
                    Self::default()
                }
            },
            Err(e) => {
                eprintln!("[ERROR] Failed to build config: {}", e);
                Self::default()
            }
        }
    }
}

fn default_server_host() -> String {
    "127.0.0.1".to_string()
}

fn default_server_port() -> u16 {
    8080
}

fn default_database_url() -> String {
    "sqlite://linkgate.db?mode=rwc".to_string()
}

fn default_database_pool_size() -> u32 {
    10
}

fn default_base_url() -> String {
    "http://localhost:3000".to_string()
}

fn default_not_found_path() -> String {
    "/404".to_string()
}

fn default_inactive_path() -> String {
    "/link-inactive".to_string()
}

fn default_expired_path() -> String {
    "/link-expired".to_string()
}

fn default_error_path() -> String {
    "/error".to_string()
}

fn default_cors_allowed_headers() -> Vec<String> {
    vec![
        "Authorization".to_string(),
        "X-Client-Info".to_string(),
        "Apikey".to_string(),
        "Content-Type".to_string(),
    ]
}

fn default_cors_max_age() -> u64 {
    3600
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

fn default_max_backups() -> u32 {
    7
}

fn default_enable_rotation() -> bool {
    true
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_server_host(),
            port: default_server_port(),
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: default_database_url(),
            pool_size: default_database_pool_size(),
        }
    }
}

impl Default for FallbackConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            not_found_path: default_not_found_path(),
            inactive_path: default_inactive_path(),
            expired_path: default_expired_path(),
            error_path: default_error_path(),
        }
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_headers: default_cors_allowed_headers(),
            max_age: default_cors_max_age(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            file: None,
            max_backups: default_max_backups(),
            enable_rotation: default_enable_rotation(),
        }
    }
}
