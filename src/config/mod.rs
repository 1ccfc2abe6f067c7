//! Application Configuration
//!
//! User settings and preferences stored in TOML format.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::scan::languages::DEFAULT_LANGUAGE;
use crate::text_layer::Platform;

/// Application settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Scan settings
    pub scan: ScanConfig,
    /// Output settings
    pub output: OutputConfig,
}

/// Scan-related settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Recognition language code (e.g., "eng")
    pub language: String,
    /// Render quality multiplier; output DPI is 96 times this
    pub quality: f64,
    /// Platform whose render quirks to reproduce
    pub platform: PlatformSetting,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            language: DEFAULT_LANGUAGE.to_string(),
            quality: 1.0,
            platform: PlatformSetting::Auto,
        }
    }
}

/// Platform selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum PlatformSetting {
    /// Detect from the running host
    #[default]
    Auto,
    Windows,
    Other,
}

impl PlatformSetting {
    pub fn resolve(self) -> Platform {
        match self {
            PlatformSetting::Auto => Platform::host(),
            PlatformSetting::Windows => Platform::Windows,
            PlatformSetting::Other => Platform::Other,
        }
    }
}

/// Output-related settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Indent the written JSON
    pub pretty: bool,
}

/// Load configuration from file
pub fn load_config(path: &Path) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    let config: AppConfig = toml::from_str(&content)?;
    Ok(config)
}

/// Load configuration from `path` if it exists, defaults otherwise.
///
/// A file that exists but cannot be read or parsed is an error rather than
/// a silent fallback.
pub fn load_or_default(path: &Path) -> Result<AppConfig> {
    if !path.exists() {
        return Ok(AppConfig::default());
    }
    load_config(path).with_context(|| format!("Failed to load configuration from {:?}", path))
}

/// Save configuration to file
pub fn save_config(config: &AppConfig, path: &Path) -> Result<()> {
    let content = toml::to_string_pretty(config)?;
    std::fs::write(path, content)?;
    Ok(())
}
