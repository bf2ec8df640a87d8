//! CLI for segmentify: the rule generator and the two extract reports.

mod commands;
mod console;

use anyhow::Result;
use clap::Parser;
use segmentify_core::config::{self, SegmentifyConfig};
use std::path::PathBuf;

use commands::{run_foldercount, run_paramcount, run_segment};

/// Generate segmentation rules from a crawler URL extract.
#[derive(Debug, Parser)]
#[command(name = "segmentify", version)]
#[command(about = "Generate segmentation rules from a crawler URL extract", long_about = None)]
pub struct SegmentifyCli {
    /// URL extract (first line `sep=<c>`, one URL per line).
    pub input: PathBuf,
}

/// Count URLs per first-level folder.
#[derive(Debug, Parser)]
#[command(name = "foldercount", version)]
#[command(about = "Count URLs per first-level folder in a URL extract", long_about = None)]
pub struct FolderCountCli {
    /// URL extract (first line `sep=<c>`, one URL per line).
    pub input: PathBuf,
}

/// Count query-parameter usage and keys.
#[derive(Debug, Parser)]
#[command(name = "paramcount", version)]
#[command(about = "Count query parameters and their keys in a URL extract", long_about = None)]
pub struct ParamCountCli {
    /// URL extract (first line `sep=<c>`, one URL per line).
    pub input: PathBuf,
}

/// Load config, falling back to defaults when it can't be read. A broken config
/// file should not stop a run that needs none of it.
fn load_config() -> SegmentifyConfig {
    match config::load_or_init() {
        Ok(cfg) => {
            tracing::debug!("loaded config: {:?}", cfg);
            cfg
        }
        Err(e) => {
            tracing::warn!("config unavailable, using defaults: {:#}", e);
            SegmentifyConfig::default()
        }
    }
}

fn apply_color(cfg: &SegmentifyConfig) {
    if !cfg.color {
        colored::control::set_override(false);
    }
}

impl SegmentifyCli {
    pub fn run_from_args() -> Result<()> {
        let cli = Self::parse();
        let cfg = load_config();
        apply_color(&cfg);
        let output_dir = std::env::current_dir()?;
        run_segment(&cli.input, &cfg, &output_dir)?;
        Ok(())
    }
}

impl FolderCountCli {
    pub fn run_from_args() -> Result<()> {
        let cli = Self::parse();
        let cfg = load_config();
        apply_color(&cfg);
        run_foldercount(&cli.input, &cfg)?;
        Ok(())
    }
}

impl ParamCountCli {
    pub fn run_from_args() -> Result<()> {
        let cli = Self::parse();
        let cfg = load_config();
        apply_color(&cfg);
        run_paramcount(&cli.input, &cfg)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests;
