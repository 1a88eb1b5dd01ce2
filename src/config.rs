use serde::Deserialize;
use std::path::{Path, PathBuf};
use directories::{ProjectDirs, UserDirs};
use std::fs;
use crate::error::ConfigError;
use crate::matcher::Weights;

#[derive(Deserialize, Debug, Clone)]
pub struct Config {
    #[serde(default = "default_min_display")]
    pub min_display: usize,
    #[serde(default = "default_data_path")]
    pub data_path: PathBuf,
    #[serde(default)]
    pub inventory_path: Option<PathBuf>,
    #[serde(default)]
    pub weights: WeightsConfig,
    #[serde(default)]
    pub player: PlayerConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default = "default_pager")]
    pub pager: String,
}

fn default_min_display() -> usize { 5 }
fn default_pager() -> String { "less".to_string() }

fn default_data_path() -> PathBuf {
    UserDirs::new()
        .and_then(|dirs| dirs.video_dir().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("Media"))
}

/// Weight vector as it appears in the config file.
#[derive(Deserialize, Debug, Clone)]
pub struct WeightsConfig {
    #[serde(default = "default_lcs_weight")]
    pub longest_common_substring: f64,
    #[serde(default = "default_levenshtein_weight")]
    pub levenshtein: f64,
    #[serde(default)]
    pub offset: f64,
}

fn default_lcs_weight() -> f64 { 1.0 }
fn default_levenshtein_weight() -> f64 { 1.0 }

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            longest_common_substring: default_lcs_weight(),
            levenshtein: default_levenshtein_weight(),
            offset: 0.0,
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct PlayerConfig {
    #[serde(default = "default_player")]
    pub command: String,
    #[serde(default)]
    pub args: Vec<String>,
}

fn default_player() -> String { "vlc".to_string() }

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            command: default_player(),
            args: Vec::new(),
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct SearchConfig {
    #[serde(default = "default_search_url")]
    pub url: String,
    #[serde(default = "default_browser")]
    pub browser: String,
    #[serde(default = "default_search_label")]
    pub label: String,
}

fn default_search_url() -> String { "https://thepiratebay.org/search/{query}/0/99/0".to_string() }
fn default_browser() -> String { "xdg-open".to_string() }
fn default_search_label() -> String { "<New Movie Torrent>".to_string() }

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            url: default_search_url(),
            browser: default_browser(),
            label: default_search_label(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            min_display: default_min_display(),
            data_path: default_data_path(),
            inventory_path: None,
            weights: WeightsConfig::default(),
            player: PlayerConfig::default(),
            search: SearchConfig::default(),
            pager: default_pager(),
        }
    }
}

impl Config {
    pub fn weights(&self) -> Weights {
        Weights {
            lcs: self.weights.longest_common_substring,
            edit: self.weights.levenshtein,
            offset: self.weights.offset,
        }
    }

    pub fn inventory_path(&self) -> PathBuf {
        self.inventory_path
            .clone()
            .unwrap_or_else(|| self.data_path.join("inventory.txt"))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_display == 0 {
            return Err(ConfigError::Invalid("min_display must be at least 1".to_string()));
        }
        let w = &self.weights;
        for (name, value) in [
            ("longest_common_substring", w.longest_common_substring),
            ("levenshtein", w.levenshtein),
            ("offset", w.offset),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "weights.{} must be a non-negative number, got {}",
                    name, value
                )));
            }
        }
        if !self.search.url.contains("{query}") {
            return Err(ConfigError::Invalid("search.url must contain {query}".to_string()));
        }
        Ok(())
    }
}

fn default_config_path() -> Option<PathBuf> {
    let dirs = ProjectDirs::from("org", "watch", "watch")?;
    let toml_path = dirs.config_dir().join("config.toml");
    if toml_path.exists() {
        return Some(toml_path);
    }
    let json_path = dirs.config_dir().join("config.json");
    json_path.exists().then_some(json_path)
}

pub fn parse_config(path: &Path, content: &str) -> Result<Config, ConfigError> {
    let is_json = path.extension().and_then(|s| s.to_str()) == Some("json");
    let parsed: Result<Config, String> = if is_json {
        serde_json::from_str(content).map_err(|e| e.to_string())
    } else {
        toml::from_str(content).map_err(|e| e.to_string())
    };
    let config = parsed.map_err(|message| ConfigError::Parse {
        path: path.to_path_buf(),
        message,
    })?;
    config.validate()?;
    Ok(config)
}

/// Loads `explicit` if given, otherwise the platform config file, otherwise defaults.
pub fn load_config(explicit: Option<&Path>) -> Result<Config, ConfigError> {
    let config_path = match explicit {
        Some(path) => path.to_path_buf(),
        None => match default_config_path() {
            Some(path) => path,
            None => {
                log::debug!("No config file found, using defaults");
                return Ok(Config::default());
            }
        },
    };

    log::debug!("Loading config from {:?}", config_path);
    let content = fs::read_to_string(&config_path).map_err(|source| ConfigError::Read {
        path: config_path.clone(),
        source,
    })?;
    parse_config(&config_path, &content)
}
