use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{prediction, provider::weatherapi};

/// Environment variable that overrides the stored weather API key.
pub const API_KEY_ENV: &str = "WEATHER_API_KEY";

/// WeatherAPI.com credentials and endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherApiConfig {
    pub api_key: Option<String>,

    #[serde(default = "default_weather_base_url")]
    pub base_url: String,
}

impl Default for WeatherApiConfig {
    fn default() -> Self {
        Self { api_key: None, base_url: default_weather_base_url() }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionConfig {
    #[serde(default = "default_prediction_base_url")]
    pub base_url: String,
}

impl Default for PredictionConfig {
    fn default() -> Self {
        Self { base_url: default_prediction_base_url() }
    }
}

fn default_weather_base_url() -> String {
    weatherapi::DEFAULT_BASE_URL.to_string()
}

fn default_prediction_base_url() -> String {
    prediction::DEFAULT_BASE_URL.to_string()
}

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// locations_file = "/home/me/locations.txt"
///
/// [weather_api]
/// api_key = "..."
///
/// [prediction]
/// base_url = "https://rnn-weather-forecast-api.onrender.com"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub weather_api: WeatherApiConfig,

    #[serde(default)]
    pub prediction: PredictionConfig,

    /// Newline-delimited list of locations; the bundled list is used if unset.
    pub locations_file: Option<PathBuf>,
}

impl Config {
    /// Load config from disk, then apply environment overrides.
    pub fn load() -> Result<Self> {
        let mut cfg = Self::load_from(&Self::config_file_path()?)?;
        cfg.apply_env(|name| std::env::var(name).ok());
        Ok(cfg)
    }

    /// Load config from `path`, or return an empty default if it doesn't exist yet.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            // First run: no config file, return empty.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Override values from the environment; `lookup` returns a variable's value.
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(key) = lookup(API_KEY_ENV).filter(|k| !k.trim().is_empty()) {
            self.weather_api.api_key = Some(key);
        }
    }

    /// Save config to the platform config file.
    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::config_file_path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    /// Save config to `path`, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "sky-view", "skyview")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    pub fn set_weather_api_key(&mut self, api_key: String) {
        self.weather_api.api_key = Some(api_key);
    }

    /// The weather API key, or an error with a hint on how to set one.
    pub fn weather_api_key(&self) -> Result<&str> {
        self.weather_api.api_key.as_deref().ok_or_else(|| {
            anyhow!(
                "No weather API key configured.\n\
                 Hint: run `skyview configure` or set {API_KEY_ENV}."
            )
        })
    }
}
