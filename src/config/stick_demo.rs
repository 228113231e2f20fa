use crate::detector::StickParams;
use crate::render::OverlayStyle;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct StickDemoConfig {
    /// JSON file with the raw segments of one image.
    pub input: PathBuf,
    /// Image to draw the overlay on; a blank canvas is used when absent.
    #[serde(default)]
    pub background: Option<PathBuf>,
    #[serde(default)]
    pub params: StickParams,
    #[serde(default)]
    pub style: OverlayStyle,
    pub output: StickOutputConfig,
}

#[derive(Debug, Deserialize)]
pub struct StickOutputConfig {
    pub report_json: PathBuf,
    #[serde(default)]
    pub overlay_image: Option<PathBuf>,
}

pub fn load_config(path: &Path) -> Result<StickDemoConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    parse_config(&data).map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

pub(crate) fn parse_config(data: &str) -> Result<StickDemoConfig, serde_json::Error> {
    serde_json::from_str(data)
}
