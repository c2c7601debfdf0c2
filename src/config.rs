use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use mealmix_catalog::Columns;
use mealmix_mealplan::{DEFAULT_MEMORY_CAPACITY, DEFAULT_OVERUSE_THRESHOLD, Eviction};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub planner: PlannerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SourceConfig {
    #[serde(default = "default_source_path")]
    pub path: String,
    #[serde(default)]
    pub columns: Columns,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            path: default_source_path(),
            columns: Columns::default(),
        }
    }
}

fn default_source_path() -> String {
    "data/meals.csv".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct PlannerConfig {
    /// How many recently used meals are kept out of the draw
    #[serde(default = "default_memory_capacity")]
    pub memory_capacity: usize,
    #[serde(default)]
    pub eviction: Eviction,
    /// Meals served more often than this in one plan are reported
    #[serde(default = "default_overuse_threshold")]
    pub overuse_threshold: usize,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            memory_capacity: default_memory_capacity(),
            eviction: Eviction::default(),
            overuse_threshold: default_overuse_threshold(),
        }
    }
}

fn default_memory_capacity() -> usize {
    DEFAULT_MEMORY_CAPACITY
}

fn default_overuse_threshold() -> usize {
    DEFAULT_OVERUSE_THRESHOLD
}

#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (MEALMIX__SOURCE__PATH, MEALMIX__PLANNER__EVICTION, etc.)
    /// 2. Config file specified by path, CONFIG_PATH, or config/default.toml
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("source.path", default_source_path())?
            .set_default("planner.memory_capacity", DEFAULT_MEMORY_CAPACITY as u64)?
            .set_default("planner.overuse_threshold", DEFAULT_OVERUSE_THRESHOLD as u64)?
            .set_default("logging.level", default_log_level())?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // optional: a missing file falls back to defaults
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("MEALMIX")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.source.path.trim().is_empty() {
            return Err("Source path must not be empty".to_string());
        }

        let columns = [
            &self.source.columns.breakfast,
            &self.source.columns.lunch,
            &self.source.columns.dinner,
        ];
        if columns.iter().any(|c| c.trim().is_empty()) {
            return Err("Source column names must not be empty".to_string());
        }
        if columns[0] == columns[1] || columns[1] == columns[2] || columns[0] == columns[2] {
            return Err("Source column names must be distinct".to_string());
        }

        if self.planner.memory_capacity < 1 {
            return Err("Planner memory_capacity must be at least 1".to_string());
        }
        if self.logging.level.trim().is_empty() {
            return Err("Logging level must not be empty".to_string());
        }
        Ok(())
    }
}
