//! Contents.json data model for an Xcode asset catalog icon set
//!
//! Mirrors the subset of Apple's asset catalog schema that a macOS
//! `AppIcon.appiconset` needs: one image entry per rendered PNG plus the
//! versioning block.

use anyhow::{Context, Result};
use serde::Serialize;
use std::path::Path;

/// Root structure of a Contents.json file
#[derive(Serialize, Debug, Clone)]
pub struct ContentsFile {
    /// Array of image entries for different scales and sizes
    pub images: Vec<ImageEntry>,

    /// Versioning and authorship information
    pub info: Info,
}

/// Individual image entry within an icon set
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ImageEntry {
    /// The PNG file inside the icon set directory
    pub filename: String,

    /// The device type for the image; always "mac" for this icon set
    pub idiom: String,

    /// The scale factor for the image ("1x" or "2x")
    pub scale: String,

    /// The size of the image in points (e.g., "16x16", "512x512")
    pub size: String,
}

/// Versioning and authorship information for the asset catalog
#[derive(Serialize, Debug, Clone)]
pub struct Info {
    /// The format version of the asset catalog (always 1)
    pub version: u8,

    /// The tool that authored the asset catalog
    pub author: String,
}

impl ContentsFile {
    /// Creates an empty Contents.json structure with the specified author
    pub fn new(author: String) -> Self {
        Self {
            images: Vec::new(),
            info: Info { version: 1, author },
        }
    }

    pub fn add_image(&mut self, image: ImageEntry) {
        self.images.push(image);
    }
}

impl ImageEntry {
    /// Creates a macOS icon entry
    ///
    /// # Arguments
    /// * `filename` - The PNG filename
    /// * `size` - The size in points (e.g., "128x128")
    /// * `scale` - The scale factor (e.g., "2x")
    pub fn mac(filename: String, size: String, scale: String) -> Self {
        Self {
            filename,
            idiom: "mac".to_string(),
            scale,
            size,
        }
    }
}

/// Writes a Contents.json file into `dir`
///
/// # Errors
/// Returns an error if serialization fails or the file cannot be written.
pub fn write_contents_json(dir: &Path, images: Vec<ImageEntry>) -> Result<()> {
    let mut contents = ContentsFile::new(env!("CARGO_PKG_NAME").to_string());
    for image in images {
        contents.add_image(image);
    }

    let json =
        serde_json::to_string_pretty(&contents).context("Failed to serialize Contents.json")?;
    let path = dir.join("Contents.json");
    std::fs::write(&path, json).with_context(|| format!("Failed to write {}", path.display()))
}
