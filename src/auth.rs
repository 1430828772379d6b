use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::config::Config;

/// Credential store — environment first, then credentials.toml
#[derive(Debug, Default)]
pub struct AuthStore {
    credentials: Credentials,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
struct Credentials {
    gemini: Option<GeminiCreds>,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiCreds {
    api_key: String,
}

const KEY_VARS: [&str; 2] = ["GEMINI_API_KEY", "GOOGLE_API_KEY"];

impl AuthStore {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::credentials_path())
    }

    pub fn load_from(path: &PathBuf) -> Result<Self> {
        let credentials = if path.exists() {
            let content =
                std::fs::read_to_string(path).with_context(|| "reading credentials.toml")?;
            toml::from_str(&content).with_context(|| "parsing credentials.toml")?
        } else {
            Credentials::default()
        };
        Ok(Self { credentials })
    }

    /// Resolve the Gemini API key
    /// Priority: GEMINI_API_KEY → GOOGLE_API_KEY → credentials.toml
    pub fn gemini_api_key(&self) -> Result<String> {
        let from_env = KEY_VARS.iter().find_map(|var| std::env::var(var).ok());
        let key = from_env.or_else(|| self.credentials.gemini.as_ref().map(|g| g.api_key.clone()));

        match key {
            Some(key) if validate_api_key(&key) => Ok(key),
            _ => anyhow::bail!(
                "No Gemini API key found.\n\
                 Options:\n\
                 1. Set GEMINI_API_KEY environment variable\n\
                 2. Add [gemini] api_key = \"...\" to {}\n\
                 3. Run `lingovox init`",
                Self::credentials_path().display()
            ),
        }
    }

    pub fn credentials_path() -> PathBuf {
        Config::config_dir().join("credentials.toml")
    }
}

pub fn validate_api_key(key: &str) -> bool {
    !key.trim().is_empty()
}
