use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use serde::Deserialize;
use crate::color::Rgb;
use crate::constants::*;
use crate::error::{Result, SlideshowError};

/// The config document as written on disk. Missing keys, empty strings and a
/// zero interval all fall back to defaults in `Config::resolve`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawConfig {
    content_directory: String,
    manifest_path: String,
    slide_interval: u64,
    fill_color: String,
    text_color: String,
    enable_text: bool,
    is_random_order: bool,
    random_seed: Option<u64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub content_directory: PathBuf,
    pub manifest_path: PathBuf,
    pub slide_interval: Duration,
    pub fill_color: Rgb,
    pub text_color: Rgb,
    pub enable_text: bool,
    pub is_random_order: bool,
    pub random_seed: Option<u64>,
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| SlideshowError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content, path)
    }

    fn parse(content: &str, path: &Path) -> Result<Self> {
        // An empty document means "all defaults"
        let raw = if content.trim().is_empty() {
            RawConfig::default()
        } else {
            serde_yaml::from_str(content).map_err(|source| SlideshowError::ConfigParse {
                path: path.to_path_buf(),
                source,
            })?
        };
        Self::resolve(raw)
    }

    fn resolve(raw: RawConfig) -> Result<Self> {
        let or_default = |value: String, default: &str| {
            if value.is_empty() { default.to_string() } else { value }
        };

        let slide_interval = match raw.slide_interval {
            0 => DEFAULT_SLIDE_INTERVAL,
            secs => Duration::from_secs(secs),
        };

        Ok(Self {
            content_directory: PathBuf::from(or_default(raw.content_directory, DEFAULT_CONTENT_DIRECTORY)),
            manifest_path: PathBuf::from(or_default(raw.manifest_path, DEFAULT_MANIFEST_PATH)),
            slide_interval,
            fill_color: Rgb::parse_hex(&or_default(raw.fill_color, DEFAULT_FILL_COLOR))?,
            text_color: Rgb::parse_hex(&or_default(raw.text_color, DEFAULT_TEXT_COLOR))?,
            enable_text: raw.enable_text,
            is_random_order: raw.is_random_order,
            random_seed: raw.random_seed,
        })
    }
}
