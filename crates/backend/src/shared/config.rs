use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub seed: Option<SeedConfig>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub path: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,
    /// Comma separated list of allowed origins, `*` allows any
    #[serde(default = "default_cors_origins")]
    pub cors_origins: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            cors_origins: default_cors_origins(),
        }
    }
}

fn default_port() -> u16 {
    8000
}

fn default_cors_origins() -> String {
    "http://localhost:3000".to_string()
}

/// Orders imported into an empty database on startup
#[derive(Debug, Deserialize, Clone)]
pub struct SeedConfig {
    pub file: String,
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[database]
path = "target/db/production.db"

[server]
port = 8000
cors_origins = "http://localhost:3000"
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
///
/// `PORT` and `CORS_ORIGINS` environment variables override the file.
pub fn load_config() -> anyhow::Result<Config> {
    let config = load_file_config()?;
    Ok(apply_env_overrides(
        config,
        std::env::var("PORT").ok(),
        std::env::var("CORS_ORIGINS").ok(),
    ))
}

fn load_file_config() -> anyhow::Result<Config> {
    // Try to find config.toml next to the executable
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                let config: Config = toml::from_str(&contents)?;
                return Ok(config);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    let config: Config = toml::from_str(DEFAULT_CONFIG)?;
    Ok(config)
}

pub fn apply_env_overrides(
    mut config: Config,
    port: Option<String>,
    cors_origins: Option<String>,
) -> Config {
    if let Some(port) = port {
        match port.trim().parse::<u16>() {
            Ok(p) => config.server.port = p,
            Err(_) => tracing::warn!("Ignoring invalid PORT value: {}", port),
        }
    }
    if let Some(origins) = cors_origins.filter(|o| !o.trim().is_empty()) {
        config.server.cors_origins = origins;
    }
    config
}

impl ServerConfig {
    /// Origins as a list; `None` means any origin is allowed
    pub fn allowed_origins(&self) -> Option<Vec<String>> {
        let origins: Vec<String> = self
            .cors_origins
            .split(',')
            .map(|o| o.trim().to_string())
            .filter(|o| !o.is_empty())
            .collect();
        if origins.iter().any(|o| o == "*") {
            None
        } else {
            Some(origins)
        }
    }
}

/// Resolve a configured path relative to the executable directory
pub fn resolve_path(path_str: &str) -> PathBuf {
    let path = Path::new(path_str);

    if path.is_absolute() {
        return path.to_path_buf();
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            return exe_dir.join(path);
        }
    }

    // Fallback: use relative to current directory
    PathBuf::from(path_str)
}

/// Get the database file path from configuration
pub fn get_database_path(config: &Config) -> PathBuf {
    resolve_path(&config.database.path)
}
