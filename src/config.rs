use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::constants::DEFAULT_DATA_FILE;
use crate::constants::session::DEFAULT_SESSION_HOURS;

pub const DATABASE_URL_ENV: &str = "DATABASE_URL";
pub const DATA_FILE_ENV: &str = "STOREFRONT_DATA_FILE";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,

    pub server: ServerConfig,

    pub storage: StorageConfig,

    pub admin: AdminConfig,

    pub enquiry: EnquiryConfig,

    pub observability: ObservabilityConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    pub log_level: String,

    /// Number of tokio worker threads (default: 2)
    /// Set to 0 to use the number of CPU cores
    pub worker_threads: usize,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            worker_threads: 2,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub port: u16,

    pub cors_allowed_origins: Vec<String>,

    /// Directory holding the built storefront pages, served at `/`.
    pub static_dir: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            cors_allowed_origins: vec![
                "http://localhost:3000".to_string(),
                "http://127.0.0.1:3000".to_string(),
            ],
            static_dir: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// JSON file used when no database is configured, and as the fallback when it fails.
    pub data_file: String,

    /// Presence selects the database backend.
    pub database_url: Option<String>,

    pub max_db_connections: u32,

    pub min_db_connections: u32,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_file: DEFAULT_DATA_FILE.to_string(),
            database_url: None,
            max_db_connections: 5,
            min_db_connections: 1,
        }
    }
}

impl StorageConfig {
    /// The configured database URL, ignoring blank values.
    #[must_use]
    pub fn database_url(&self) -> Option<&str> {
        self.database_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AdminConfig {
    pub username: String,

    pub password: String,

    /// How long a login stays valid on the client.
    pub session_hours: u32,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            username: "admin".to_string(),
            password: "admin123".to_string(),
            session_hours: DEFAULT_SESSION_HOURS,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EnquiryConfig {
    /// Shop number in any format; only digits are used in links.
    pub whatsapp_number: String,
}

impl Default for EnquiryConfig {
    fn default() -> Self {
        Self {
            whatsapp_number: "+910000000000".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    pub metrics_enabled: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            metrics_enabled: true,
        }
    }
}

impl Config {
    /// Loads the first config file found, then applies environment overrides.
    pub fn load() -> Result<Self> {
        let mut config = Self::load_file()?;
        config.apply_env_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    fn load_file() -> Result<Self> {
        for path in &Self::config_paths() {
            if path.exists() {
                info!("Loading config from: {}", path.display());
                return Self::load_from_path(path);
            }
        }

        info!("No config file found, using defaults");
        Ok(Self::default())
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// `lookup` abstracts the process environment so overrides are testable.
    pub fn apply_env_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = lookup(DATABASE_URL_ENV) {
            self.storage.database_url = Some(url);
        }
        if let Some(path) = lookup(DATA_FILE_ENV).filter(|p| !p.trim().is_empty()) {
            self.storage.data_file = path;
        }
    }

    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        info!("Config saved to: {}", path.display());
        Ok(())
    }

    fn config_paths() -> Vec<PathBuf> {
        let mut paths = vec![Self::default_config_path()];

        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join("storefront").join("config.toml"));
        }

        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".storefront").join("config.toml"));
        }

        paths
    }

    fn default_config_path() -> PathBuf {
        PathBuf::from("config.toml")
    }

    pub fn create_default_if_missing() -> Result<bool> {
        let path = Self::default_config_path();
        if path.exists() {
            Ok(false)
        } else {
            Self::default().save_to_path(&path)?;
            info!("Created default config file: {}", path.display());
            Ok(true)
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.storage.data_file.trim().is_empty() {
            anyhow::bail!("storage.data_file cannot be empty");
        }

        if self.storage.min_db_connections > self.storage.max_db_connections {
            anyhow::bail!(
                "storage.min_db_connections ({}) cannot exceed max_db_connections ({})",
                self.storage.min_db_connections,
                self.storage.max_db_connections
            );
        }

        if self.admin.session_hours == 0 {
            anyhow::bail!("admin.session_hours must be > 0");
        }

        Ok(())
    }

    #[must_use]
    pub fn uses_database(&self) -> bool {
        self.storage.database_url().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.storage.data_file, "data/products.json");
        assert_eq!(config.admin.session_hours, 24);
        assert!(!config.uses_database());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        assert!(toml_str.contains("[general]"));
        assert!(toml_str.contains("[storage]"));
        assert!(toml_str.contains("[admin]"));
    }

    #[test]
    fn test_config_deserialization() {
        let toml_str = r#"
            [general]
            log_level = "debug"

            [storage]
            database_url = "sqlite:data/storefront.db"
        "#;

        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.log_level, "debug");
        assert!(config.uses_database());

        assert_eq!(config.server.port, 3000);
        assert_eq!(config.storage.data_file, "data/products.json");
    }

    #[test]
    fn test_blank_database_url_selects_file_backend() {
        let mut config = Config::default();
        config.storage.database_url = Some("   ".to_string());
        assert!(!config.uses_database());
    }

    #[test]
    fn test_env_overrides() {
        let mut config = Config::default();
        config.apply_env_overrides(|key| match key {
            DATABASE_URL_ENV => Some("sqlite::memory:".to_string()),
            DATA_FILE_ENV => Some("/tmp/catalog.json".to_string()),
            _ => None,
        });

        assert_eq!(config.storage.database_url(), Some("sqlite::memory:"));
        assert_eq!(config.storage.data_file, "/tmp/catalog.json");
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = Config::default();
        config.admin.session_hours = 0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.storage.min_db_connections = 10;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.storage.data_file = String::new();
        assert!(config.validate().is_err());
    }
}
