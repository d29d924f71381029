use serde::Deserialize;
use std::fs;
use std::path::Path;

const ENV_CONFIG_PATH: &str = "TRIGGER_SCREEN_CONFIG_PATH";
const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// Generation and windowing parameters for trigger analysis.
///
/// Defaults match the generation budget the service was tuned for: 1024
/// character windows with 128 characters of overlap leave room in a small
/// context window for the category response, and the 768 character preview
/// conserves output budget.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisConfig {
    /// Sampling randomness
    #[serde(default = "default_temperature")]
    pub temperature: f64,
    /// Nucleus sampling cutoff
    #[serde(default = "default_top_p")]
    pub top_p: f64,
    /// Repeat suppression
    #[serde(default = "default_repetition_penalty")]
    pub repetition_penalty: f64,
    /// Input token budget per generation call
    #[serde(default = "default_max_input_tokens")]
    pub max_input_tokens: u64,
    /// Output token budget per generation call
    #[serde(default = "default_max_output_tokens")]
    pub max_output_tokens: u64,
    /// Window size in characters
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,
    /// Overlap between consecutive windows, in characters
    #[serde(default = "default_chunk_overlap")]
    pub chunk_overlap: usize,
    /// Characters of each window embedded in the prompt
    #[serde(default = "default_preview_chars")]
    pub preview_chars: usize,
}

fn default_temperature() -> f64 {
    0.2
}

fn default_top_p() -> f64 {
    0.9
}

fn default_repetition_penalty() -> f64 {
    1.05
}

fn default_max_input_tokens() -> u64 {
    1536
}

fn default_max_output_tokens() -> u64 {
    512
}

fn default_chunk_size() -> usize {
    1024
}

fn default_chunk_overlap() -> usize {
    128
}

fn default_preview_chars() -> usize {
    768
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            temperature: default_temperature(),
            top_p: default_top_p(),
            repetition_penalty: default_repetition_penalty(),
            max_input_tokens: default_max_input_tokens(),
            max_output_tokens: default_max_output_tokens(),
            chunk_size: default_chunk_size(),
            chunk_overlap: default_chunk_overlap(),
            preview_chars: default_preview_chars(),
        }
    }
}

/// YAML configuration file structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub analysis: AnalysisConfig,
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub analysis: AnalysisConfig,
    pub port: u16,
    pub host: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            analysis: AnalysisConfig::default(),
            port: 8080,
            host: "127.0.0.1".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment and config file
    pub fn from_env() -> Self {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(8080);

        let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());

        let config_path =
            std::env::var(ENV_CONFIG_PATH).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

        let analysis = Self::load_config_file(&config_path)
            .map(|cf| cf.analysis)
            .unwrap_or_default();

        Self {
            analysis,
            port,
            host,
        }
    }

    /// Load configuration from YAML file
    fn load_config_file(path: &str) -> Option<ConfigFile> {
        let path = Path::new(path);

        if !path.exists() {
            tracing::debug!(path = %path.display(), "Config file not found, using defaults");
            return None;
        }

        match fs::read_to_string(path) {
            Ok(contents) => {
                let contents = contents.trim();
                if contents.is_empty() {
                    tracing::debug!(path = %path.display(), "Config file is empty, using defaults");
                    return Some(ConfigFile::default());
                }

                match serde_yaml::from_str(contents) {
                    Ok(config) => {
                        tracing::info!(path = %path.display(), "Loaded configuration from file");
                        Some(config)
                    }
                    Err(e) => {
                        tracing::warn!(path = %path.display(), error = %e, "Failed to parse config file, using defaults");
                        None
                    }
                }
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Failed to read config file, using defaults");
                None
            }
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
