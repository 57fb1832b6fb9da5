use crate::errors::{AppError, AppResult};
use crate::models::chart::ChartDimensions;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_format")]
    pub default_format: String,
    #[serde(default)]
    pub chart: ChartDimensions,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}

fn default_format() -> String {
    "text".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            default_format: default_format(),
            chart: ChartDimensions::default(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA")
                .map(PathBuf::from)
                .ok()
                .or_else(dirs::config_dir)
                .unwrap_or_else(|| PathBuf::from("."));
            appdata.join("timereport")
        } else {
            let home = env::var("HOME")
                .map(PathBuf::from)
                .ok()
                .or_else(dirs::home_dir)
                .unwrap_or_else(|| PathBuf::from("."));
            home.join(".timereport")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("timereport.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("timereport.sqlite")
    }

    /// Relative database names live in the configuration directory.
    pub fn resolve_db_path(name: &str) -> PathBuf {
        let p = Path::new(name);
        if p.is_absolute() {
            p.to_path_buf()
        } else {
            Self::config_dir().join(p)
        }
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        let yaml = serde_yaml::to_string(self).map_err(|_| AppError::ConfigSave)?;
        fs::write(path, yaml).map_err(|_| AppError::ConfigSave)
    }

    /// Initialize configuration and database paths.
    ///
    /// Returns the database path written into the configuration. In test mode
    /// the configuration file is left untouched.
    pub fn init_all(custom_db: Option<&str>, is_test: bool) -> AppResult<PathBuf> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let db_path = match custom_db {
            Some(name) => Self::resolve_db_path(name),
            None => Self::database_file(),
        };

        if !is_test {
            let config = Config {
                database: db_path.to_string_lossy().to_string(),
                ..Config::default()
            };
            config.save_to(&Self::config_file())?;
        }

        Ok(db_path)
    }
}
