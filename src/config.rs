use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Top-level configuration (from config.toml + CLI args)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub model: ModelConfig,
    pub speech: SpeechConfig,
    pub voices: VoicesConfig,
    pub logging: LoggingConfig,
}

pub const DEFAULT_PREAMBLE: &str = "You are the best university teacher of all time. You have a Nobel prize in everything and all of your students also have a Nobel prize in every category. You can make a person understand anything entirely. You are the master of all things and the most expert.";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    pub name: String,
    /// Instruction prepended to every prompt
    pub preamble: String,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            name: "gemini-2.0-flash".into(),
            preamble: DEFAULT_PREAMBLE.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SpeechConfig {
    /// "auto", "say", "espeak" or "sapi"
    pub engine: String,
    pub espeak_binary: String,
    pub prefer_female: bool,
    pub volume: f32,
    pub default_language: String,
    pub output_file: PathBuf,
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            engine: "auto".into(),
            espeak_binary: "espeak-ng".into(),
            prefer_female: true,
            volume: 1.0,
            default_language: crate::languages::DEFAULT_CODE.into(),
            output_file: PathBuf::from("output.txt"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VoicesConfig {
    pub dump_file: PathBuf,
}

impl Default for VoicesConfig {
    fn default() -> Self {
        Self {
            dump_file: PathBuf::from("available_voices.json"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".into(),
            file: None,
        }
    }
}

impl Config {
    /// Load config from default path (~/.config/lingovox/config.toml)
    pub fn load() -> Result<Self> {
        let config_path = Self::default_path();
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load config from a specific path
    pub fn load_from(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading config from {}", path.display()))?;
        toml::from_str(&content).with_context(|| "parsing config file")
    }

    pub fn default_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("lingovox")
    }

    /// Save config to default path
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::default_path())
    }

    pub fn save_to(&self, path: &PathBuf) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
