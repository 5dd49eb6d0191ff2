use crate::contents_json::{write_contents_json, ImageEntry};
use crate::render::render_icon;
use anyhow::{Context, Result};
use icns::{IconFamily, IconType, OSType};
use image::{
    codecs::png::{CompressionType, FilterType as PngFilterType, PngEncoder},
    ColorType, ImageEncoder, RgbaImage,
};
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

/// Where the app's asset catalog keeps its icon set, relative to the repo root.
pub const DEFAULT_OUTPUT_DIR: &str =
    "ClipboardManager/ClipboardManager/Assets.xcassets/AppIcon.appiconset";

/// One image of the icon set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconSpec {
    /// Asset name, e.g. `16x16@2x`.
    pub name: &'static str,
    /// Edge length in pixels.
    pub size: u32,
    /// Element type used when packing into an `.icns` file.
    pub ostype: [u8; 4],
}

impl IconSpec {
    const fn new(name: &'static str, size: u32, ostype: &[u8; 4]) -> Self {
        Self {
            name,
            size,
            ostype: *ostype,
        }
    }

    pub fn filename(&self) -> String {
        format!("icon_{}.png", self.name)
    }

    pub fn scale(&self) -> &'static str {
        if self.name.ends_with("@2x") {
            "2x"
        } else {
            "1x"
        }
    }

    /// Size in points, the name without its scale suffix.
    pub fn point_size(&self) -> &'static str {
        self.name.trim_end_matches("@2x")
    }
}

/// The macOS icon set, in the order files are written.
pub const ICON_SET: [IconSpec; 10] = [
    IconSpec::new("16x16", 16, b"is32"),
    IconSpec::new("16x16@2x", 32, b"ic11"),
    IconSpec::new("32x32", 32, b"il32"),
    IconSpec::new("32x32@2x", 64, b"ic12"),
    IconSpec::new("128x128", 128, b"ic07"),
    IconSpec::new("128x128@2x", 256, b"ic13"),
    IconSpec::new("256x256", 256, b"ic08"),
    IconSpec::new("256x256@2x", 512, b"ic14"),
    IconSpec::new("512x512", 512, b"ic09"),
    IconSpec::new("512x512@2x", 1024, b"ic10"),
];

/// Extra artifacts written next to the PNGs.
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Also write the asset catalog's `Contents.json`.
    pub contents_json: bool,
    /// Also pack every rendered size into `icon.icns`.
    pub icns: bool,
}

/// Renders every entry of [`ICON_SET`] and writes it as PNG into `out_dir`.
///
/// The directory must already exist. The first failing write aborts the run;
/// files written before it are left in place.
pub fn generate_icon_set(out_dir: &Path, options: &GenerateOptions) -> Result<()> {
    anyhow::ensure!(
        out_dir.is_dir(),
        "Output directory {} does not exist",
        out_dir.display()
    );

    println!("Generating glassmorphism icon set...");

    let mut family = options.icns.then(IconFamily::new);

    for spec in &ICON_SET {
        let filename = spec.filename();
        let icon = render_icon(spec.size);

        let mut png = Vec::new();
        write_png(&icon, &mut png).with_context(|| format!("Failed to encode {filename}"))?;
        save_png(&png, &out_dir.join(&filename))?;
        println!("  ✓ {} ({}x{})", filename, spec.size, spec.size);

        if let Some(family) = family.as_mut() {
            add_to_family(family, spec, &png)?;
        }
    }

    if let Some(family) = family {
        write_icns(&family, out_dir)?;
    }

    if options.contents_json {
        write_contents_json(out_dir, build_contents_entries())?;
        println!("  ✓ Contents.json");
    }

    println!("\n✓ Icon set complete");
    println!("  Saved to {}", out_dir.display());
    Ok(())
}

/// One Contents.json entry per icon, idiom "mac".
pub fn build_contents_entries() -> Vec<ImageEntry> {
    ICON_SET
        .iter()
        .map(|spec| {
            ImageEntry::mac(
                spec.filename(),
                spec.point_size().to_string(),
                spec.scale().to_string(),
            )
        })
        .collect()
}

fn save_png(png: &[u8], path: &Path) -> Result<()> {
    let mut file = BufWriter::new(
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?,
    );
    file.write_all(png)
        .and_then(|_| file.flush())
        .with_context(|| format!("Failed to write {}", path.display()))
}

// Encode image data as PNG with compression
fn write_png<W: Write>(image: &RgbaImage, w: W) -> Result<()> {
    let encoder = PngEncoder::new_with_quality(w, CompressionType::Best, PngFilterType::Adaptive);
    encoder.write_image(image.as_raw(), image.width(), image.height(), ColorType::Rgba8)?;
    Ok(())
}

fn add_to_family(family: &mut IconFamily, spec: &IconSpec, png: &[u8]) -> Result<()> {
    let icon_type = IconType::from_ostype(OSType(spec.ostype))
        .with_context(|| format!("No icns element type for {}", spec.name))?;
    let image = icns::Image::read_png(png)
        .with_context(|| format!("Can't decode {} for icns", spec.filename()))?;

    family
        .add_icon_with_type(&image, icon_type)
        .with_context(|| format!("Can't add {} to Icns Family", spec.name))
}

fn write_icns(family: &IconFamily, out_dir: &Path) -> Result<()> {
    let path = out_dir.join("icon.icns");
    let mut out_file = BufWriter::new(
        File::create(&path).with_context(|| format!("Failed to create {}", path.display()))?,
    );
    family.write(&mut out_file)?;
    out_file.flush()?;

    println!("  ✓ icon.icns");
    Ok(())
}
