//! I/O helpers for segment lists, images and JSON.
//!
//! - `load_segments`: read raw segments from JSON (flat, Hough-nested or
//!   wrapped in an object; `null` means no candidate lines).
//! - `load_rgb_image` / `save_rgb_image`: background and overlay images.
//! - `write_json_file`: pretty-print a serializable value to disk.
use crate::segments::Segment;
use image::RgbImage;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Accepted layouts of a segment file.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SegmentFile {
    Flat(Vec<[i32; 4]>),
    /// `[[[x1, y1, x2, y2]], ...]` as emitted by probabilistic Hough detectors.
    Nested(Vec<[[i32; 4]; 1]>),
    Wrapped {
        #[serde(default)]
        segments: Option<Vec<[i32; 4]>>,
    },
}

/// Parse raw segments from a JSON string.
pub fn parse_segments(json: &str) -> Result<Vec<Segment>, String> {
    let file: Option<SegmentFile> =
        serde_json::from_str(json).map_err(|e| format!("Failed to parse segments: {e}"))?;
    let coords: Vec<[i32; 4]> = match file {
        None => Vec::new(),
        Some(SegmentFile::Flat(v)) => v,
        Some(SegmentFile::Nested(v)) => v.into_iter().map(|[c]| c).collect(),
        Some(SegmentFile::Wrapped { segments }) => segments.unwrap_or_default(),
    };
    Ok(coords.into_iter().map(Segment::from_coords).collect())
}

/// Load raw segments from a JSON file.
pub fn load_segments(path: &Path) -> Result<Vec<Segment>, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read segments {}: {e}", path.display()))?;
    parse_segments(&data).map_err(|e| format!("{e} ({})", path.display()))
}

/// Load an image from disk as 8-bit RGB.
pub fn load_rgb_image(path: &Path) -> Result<RgbImage, String> {
    Ok(image::open(path)
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))?
        .into_rgb8())
}

/// Save an RGB image, creating parent directories.
pub fn save_rgb_image(image: &RgbImage, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    image
        .save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_and_nested_layouts() {
        let flat = parse_segments("[[0, 0, 10, 0], [5, 5, 5, 50]]").unwrap();
        let nested = parse_segments("[[[0, 0, 10, 0]], [[5, 5, 5, 50]]]").unwrap();
        assert_eq!(flat, nested);
        assert_eq!(flat[1], Segment::from_coords([5, 5, 5, 50]));
    }

    #[test]
    fn absent_segments_mean_no_lines() {
        assert!(parse_segments("null").unwrap().is_empty());
        assert!(parse_segments(r#"{"segments": null}"#).unwrap().is_empty());
        assert!(parse_segments("{}").unwrap().is_empty());
        assert!(parse_segments("[]").unwrap().is_empty());
    }

    #[test]
    fn malformed_segments_are_reported() {
        let err = parse_segments("[[1, 2, 3]]").unwrap_err();
        assert!(err.starts_with("Failed to parse segments"));
    }
}
