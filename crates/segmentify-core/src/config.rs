use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::rules::SectionPlan;

/// Global configuration loaded from `~/.config/segmentify/config.toml`.
///
/// Every field has a default, so partial files are fine. With all defaults the
/// generator emits exactly the six built-in sections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SegmentifyConfig {
    /// Output file name, created in the current working directory.
    pub output_filename: String,
    /// Extract header rows discounted from the "Total URLs processed" count.
    pub header_rows: u64,
    /// Print a progress tick every N scanned lines (0 = never).
    pub progress_interval: u64,
    /// Colour section banners on the console.
    pub color: bool,
    /// Drop folder keys whose count is at most `floor(largest * percent)`.
    /// 0 keeps every folder.
    pub folder_threshold_percent: f64,
    /// Emit the `sl_parameter_Keys` section.
    pub parameter_keys: bool,
    /// Emit SFCC / Shopify sections when the extract looks like either platform.
    pub platform_sections: bool,
    /// Emit the `sl_static_Resources` section.
    pub static_resources: bool,
}

impl Default for SegmentifyConfig {
    fn default() -> Self {
        Self {
            output_filename: "segment.txt".to_string(),
            header_rows: 2,
            progress_interval: 10_000,
            color: true,
            folder_threshold_percent: 0.0,
            parameter_keys: false,
            platform_sections: false,
            static_resources: false,
        }
    }
}

impl SegmentifyConfig {
    /// Optional sections selected by this config.
    pub fn section_plan(&self) -> SectionPlan {
        SectionPlan {
            parameter_keys: self.parameter_keys,
            platform_sections: self.platform_sections,
            static_resources: self.static_resources,
        }
    }

    /// Output path under `dir`.
    pub fn output_path(&self, dir: &Path) -> PathBuf {
        dir.join(&self.output_filename)
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("segmentify")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<SegmentifyConfig> {
    load_or_init_at(&config_path()?)
}

/// Same as [`load_or_init`] for an explicit path.
pub fn load_or_init_at(path: &Path) -> Result<SegmentifyConfig> {
    if !path.exists() {
        let default_cfg = SegmentifyConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path)?;
    let cfg: SegmentifyConfig = toml::from_str(&data)?;
    Ok(cfg)
}
