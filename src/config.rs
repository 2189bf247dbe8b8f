//! Layered settings: environment > dotenv > YAML > JSON > TOML > defaults.
//!
//! Sources are applied in a fixed order at startup and produce one immutable
//! [`Settings`] value that is passed by reference to every component. Nested
//! fields use `__` as the env delimiter (e.g. `DATABASE__HOST`).

use config::{Config, ConfigError, Environment as EnvSource, File, FileFormat};
use serde::Deserialize;
use std::env;

/// Deployment environment. Controls log formatting and whether the docs UI is mounted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Production,
}

impl Default for Environment {
    fn default() -> Self {
        Self::Development
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Logging {
    /// Default filter directive for the subscriber (e.g. "info", "debug").
    pub level: String,
}

impl Default for Logging {
    fn default() -> Self {
        Self {
            level: "info".into(),
        }
    }
}

/// Database connection fields. An explicit `url` overrides the individual parts.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Database {
    pub url: Option<String>,
    pub kind: String,
    pub username: String,
    pub password: String,
    pub host: String,
    pub port: u16,
    pub name: String,
}

impl Default for Database {
    fn default() -> Self {
        Self {
            url: None,
            kind: "postgres".into(),
            username: "username".into(),
            password: "password".into(),
            host: "localhost".into(),
            port: 5432,
            name: "database".into(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Service name, attached to spans and log output.
    pub service: String,
    pub host: String,
    pub port: u16,
    pub environment: Environment,
    pub logging: Logging,
    pub database: Database,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            service: "sample-service".into(),
            host: "0.0.0.0".into(),
            port: 8080,
            environment: Environment::default(),
            logging: Logging::default(),
            database: Database::default(),
        }
    }
}

/// Settings file locations, each overridable through its own env var.
#[derive(Debug, Clone)]
pub struct SettingsFiles {
    pub toml: String,
    pub json: String,
    pub yaml: String,
}

impl SettingsFiles {
    pub fn from_env() -> Self {
        Self {
            toml: env::var("CONFIG_TOML").unwrap_or_else(|_| "config.toml".into()),
            json: env::var("CONFIG_JSON").unwrap_or_else(|_| "config.json".into()),
            yaml: env::var("CONFIG_YAML").unwrap_or_else(|_| "config.yaml".into()),
        }
    }
}

impl Settings {
    /// Load settings with the documented precedence. `.env` is folded into the
    /// process environment first; existing variables win over dotenv entries.
    pub fn load() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::from_sources(&SettingsFiles::from_env())
    }

    /// Build from explicit file locations. Missing files are skipped; later
    /// sources override earlier ones, so the environment has the last word.
    pub fn from_sources(files: &SettingsFiles) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::new(&files.toml, FileFormat::Toml).required(false))
            .add_source(File::new(&files.json, FileFormat::Json).required(false))
            .add_source(File::new(&files.yaml, FileFormat::Yaml).required(false))
            .add_source(EnvSource::default().separator("__").try_parsing(true))
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::sync::Mutex;

    // Config loading reads the process environment, which is shared across the
    // test binary's threads.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn files_in(dir: &std::path::Path) -> SettingsFiles {
        SettingsFiles {
            toml: dir.join("config.toml").to_string_lossy().into_owned(),
            json: dir.join("config.json").to_string_lossy().into_owned(),
            yaml: dir.join("config.yaml").to_string_lossy().into_owned(),
        }
    }

    #[test]
    fn defaults_apply_when_no_sources_exist() {
        let _guard = ENV_LOCK.lock().unwrap();
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::from_sources(&files_in(dir.path())).unwrap();
        assert_eq!(settings.service, "sample-service");
        assert_eq!(settings.host, "0.0.0.0");
        assert_eq!(settings.port, 8080);
        assert_eq!(settings.environment, Environment::Development);
        assert_eq!(settings.logging.level, "info");
        assert_eq!(settings.database.port, 5432);
        assert!(settings.database.url.is_none());
    }

    #[test]
    fn yaml_overrides_json_overrides_toml() {
        let _guard = ENV_LOCK.lock().unwrap();
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("config.toml"),
            "service = \"from-toml\"\nport = 1000\n\n[database]\nhost = \"toml-db\"\n",
        )
        .unwrap();
        fs::write(
            dir.path().join("config.json"),
            "{\"port\": 2000, \"logging\": {\"level\": \"debug\"}}",
        )
        .unwrap();
        fs::write(dir.path().join("config.yaml"), "port: 3000\n").unwrap();

        let settings = Settings::from_sources(&files_in(dir.path())).unwrap();
        // Highest file layer wins for contested keys.
        assert_eq!(settings.port, 3000);
        // Keys set only in lower layers survive the merge.
        assert_eq!(settings.service, "from-toml");
        assert_eq!(settings.logging.level, "debug");
        assert_eq!(settings.database.host, "toml-db");
    }

    #[test]
    fn environment_overrides_files() {
        let _guard = ENV_LOCK.lock().unwrap();
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("config.yaml"), "port: 3000\nenvironment: development\n").unwrap();

        env::set_var("PORT", "4000");
        env::set_var("ENVIRONMENT", "production");
        env::set_var("DATABASE__NAME", "from-env");
        let settings = Settings::from_sources(&files_in(dir.path()));
        env::remove_var("PORT");
        env::remove_var("ENVIRONMENT");
        env::remove_var("DATABASE__NAME");

        let settings = settings.unwrap();
        assert_eq!(settings.port, 4000);
        assert_eq!(settings.environment, Environment::Production);
        assert_eq!(settings.database.name, "from-env");
    }
}
