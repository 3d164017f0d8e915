//! Project configuration for crafter.
//! This module locates and parses the optional project configuration file,
//! falling back to conventional defaults when none exists.

use crate::error::{Error, Result};
use log::debug;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Supported configuration file names, probed in order.
pub const CONFIG_FILES: [&str; 3] = ["crafter.json", "crafter.yml", "crafter.yaml"];

/// Output locations and server settings for one project.
///
/// Every field is individually defaultable, so a configuration file only
/// needs to name the values it overrides.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    /// Directory holding the artifact templates
    pub templates_dir: PathBuf,
    pub controllers_dir: PathBuf,
    pub models_dir: PathBuf,
    pub services_dir: PathBuf,
    pub validators_dir: PathBuf,
    pub routes_dir: PathBuf,
    pub middlewares_dir: PathBuf,
    pub tests_dir: PathBuf,
    pub seeders_dir: PathBuf,
    pub migrations_dir: PathBuf,
    /// Command line launched by `serve`
    pub dev_command: String,
    /// Default bind host for `serve`
    pub host: String,
    /// Default port for `serve`
    pub port: u16,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            templates_dir: PathBuf::from("templates"),
            controllers_dir: PathBuf::from("src/controllers"),
            models_dir: PathBuf::from("src/models"),
            services_dir: PathBuf::from("src/services"),
            validators_dir: PathBuf::from("src/validators"),
            routes_dir: PathBuf::from("src/routes"),
            middlewares_dir: PathBuf::from("src/middlewares"),
            tests_dir: PathBuf::from("src/tests"),
            seeders_dir: PathBuf::from("src/database/seeders"),
            migrations_dir: PathBuf::from("src/database/migrations"),
            dev_command: String::from("npm run dev"),
            host: String::from("localhost"),
            port: 3000,
        }
    }
}

impl ProjectConfig {
    /// Loads the project configuration from `project_dir`, trying the file
    /// names in [`CONFIG_FILES`] in order.
    ///
    /// # Returns
    /// * The parsed configuration, or the defaults when no file exists
    ///
    /// # Errors
    /// * `Error::ConfigError` if a file exists but cannot be parsed
    pub fn load<P: AsRef<Path>>(project_dir: P) -> Result<Self> {
        for file in CONFIG_FILES {
            let config_path = project_dir.as_ref().join(file);
            if config_path.exists() {
                debug!("Loading configuration from {}", config_path.display());
                let content =
                    std::fs::read_to_string(&config_path).map_err(Error::IoError)?;
                return parse_config(&content);
            }
        }

        debug!("No configuration file found (tried: {}), using defaults", CONFIG_FILES.join(", "));
        Ok(Self::default())
    }
}

/// Parses configuration content, trying JSON first and YAML second.
///
/// # Errors
/// * `Error::ConfigError` if neither format parses
pub fn parse_config(content: &str) -> Result<ProjectConfig> {
    match serde_json::from_str(content) {
        Ok(config) => Ok(config),
        Err(_) => serde_yaml::from_str(content)
            .map_err(|e| Error::ConfigError(format!("Invalid configuration format: {}", e))),
    }
}
