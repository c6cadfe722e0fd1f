// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Application configuration.
//!
//! Settings are read once at startup from `config.yaml` or `config.json` in
//! the platform config directory. A missing file means defaults; an
//! unreadable one is logged and also falls back to defaults.

use crate::models::{properties::AnnotationProperties, tool::Tool};
use crate::view::zoom::ZoomLimits;
use anyhow::{bail, Context, Result};
use egui::Color32;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

const APP_DIR: &str = "annotator";
const CONFIG_FILES: &[&str] = &["config.yaml", "config.yml", "config.json"];

/// Initial window size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
        }
    }
}

/// Complete configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Background shown under and around the image. Translucent colors are
    /// painted over a checkerboard.
    #[serde(with = "crate::util::color")]
    pub canvas_color: Color32,
    pub zoom: ZoomLimits,
    /// Per-tool style overrides.
    pub tools: BTreeMap<Tool, AnnotationProperties>,
    pub window: WindowConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            canvas_color: Color32::WHITE,
            zoom: ZoomLimits::default(),
            tools: BTreeMap::new(),
            window: WindowConfig::default(),
        }
    }
}

impl Config {
    /// Load the user configuration, falling back to defaults.
    pub fn load_or_default() -> Self {
        let Some(path) = find_config_file() else {
            log::debug!("No configuration file found, using defaults");
            return Self::default();
        };

        match load(&path) {
            Ok(config) => {
                log::info!("Loaded configuration from {}", path.display());
                config
            }
            Err(e) => {
                log::warn!("Ignoring configuration: {:#}", e);
                Self::default()
            }
        }
    }
}

/// Directory holding the configuration files.
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR))
}

fn find_config_file() -> Option<PathBuf> {
    let dir = config_dir()?;
    CONFIG_FILES.iter().map(|name| dir.join(name)).find(|path| path.is_file())
}

/// Load a configuration file, choosing the format from its extension.
pub fn load(path: &Path) -> Result<Config> {
    let text = std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    parse(&text, path.extension().and_then(|s| s.to_str()))
        .with_context(|| format!("Failed to parse {}", path.display()))
}

fn parse(text: &str, extension: Option<&str>) -> Result<Config> {
    let config = match extension {
        Some("yaml") | Some("yml") => serde_yaml::from_str(text)?,
        Some("json") => serde_json::from_str(text)?,
        _ => bail!("Unsupported configuration format: {:?}", extension),
    };
    Ok(config)
}
