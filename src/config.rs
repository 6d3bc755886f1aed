//! Settings, constructed once at startup and passed in explicitly.
//!
//! Precedence: `$SOCIAL_PULSE_CONFIG` (must exist when set), then
//! `config/settings.toml`, then built-in defaults. The bearer token always
//! comes from the environment; `.env` is loaded by the binary before this
//! runs.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;

use crate::twitter::DEFAULT_API_BASE;

const ENV_CONFIG_PATH: &str = "SOCIAL_PULSE_CONFIG";
const ENV_BEARER_TOKEN: &str = "BEARER_TOKEN";
const DEFAULT_CONFIG_PATH: &str = "config/settings.toml";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";

#[derive(Debug, Clone)]
pub struct Settings {
    pub bearer_token: String,
    pub api_base: String,
    pub bind_addr: String,
}

#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    api_base: Option<String>,
    bind_addr: Option<String>,
}

impl Settings {
    pub fn load() -> Result<Self> {
        let file = if let Ok(p) = std::env::var(ENV_CONFIG_PATH) {
            let pb = PathBuf::from(p);
            if !pb.exists() {
                return Err(anyhow!("SOCIAL_PULSE_CONFIG points to a non-existent path"));
            }
            read_file_settings(&pb)?
        } else {
            let fallback = Path::new(DEFAULT_CONFIG_PATH);
            if fallback.exists() {
                read_file_settings(fallback)?
            } else {
                FileSettings::default()
            }
        };

        let bearer_token =
            std::env::var(ENV_BEARER_TOKEN).context("BEARER_TOKEN is not set")?;

        Ok(Self {
            bearer_token,
            api_base: file
                .api_base
                .unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
            bind_addr: file
                .bind_addr
                .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
        })
    }
}

fn read_file_settings(path: &Path) -> Result<FileSettings> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("reading settings from {}", path.display()))?;
    toml::from_str(&content).with_context(|| format!("parsing settings from {}", path.display()))
}
