//! Dominant-color palettes with human-readable names.
//!
//! An image is sampled onto a fixed 100×100 grid, the samples are clustered
//! with mini-batch k-means, and every cluster center is labelled with the
//! nearest CSS3 named color.
//!
//! ```no_run
//! let palette = palette_namer::extract_palette("photo.png", 10)?;
//! for entry in &palette {
//!     println!("{} {}", entry.hex, entry.name);
//! }
//! # Ok::<(), palette_namer::PaletteError>(())
//! ```

use js_sys::{Array, Object, Reflect};
use palette::Srgb;
#[cfg(not(target_arch = "wasm32"))]
use std::path::Path;
use wasm_bindgen::prelude::*;

pub mod cluster;
pub mod color;
pub mod error;
pub mod namer;
pub mod reference;
pub mod sampler;

pub use cluster::{MiniBatchKMeans, cluster};
pub use color::{HexCode, distance_squared, parse_hex};
pub use error::{PaletteError, ParseHexError};
pub use namer::{name_of, nearest};
pub use reference::{CSS3_COLORS, NamedColor, ReferenceTable};
pub use sampler::{SAMPLE_COUNT, sample, sample_image};

/// Palette size used when the caller does not ask for one.
pub const DEFAULT_COLORS: usize = 10;

/// One extracted color: its hex code, its nearest reference name, and the
/// center it was built from.
#[derive(Debug, Clone, PartialEq)]
pub struct PaletteEntry {
    pub hex: HexCode,
    pub name: &'static str,
    pub color: Srgb<u8>,
}

impl PaletteEntry {
    /// Label `color` against `table`.
    pub fn new(color: Srgb<u8>, table: &ReferenceTable) -> Self {
        Self {
            hex: HexCode::from(color),
            name: name_of(color, table),
            color,
        }
    }
}

/// Options for a single extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Number of palette entries (`k`).
    pub colors: usize,
    /// Seed for clustering; `None` draws one from the operating system.
    pub seed: Option<u64>,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            colors: DEFAULT_COLORS,
            seed: None,
        }
    }
}

impl ExtractOptions {
    pub fn new(colors: usize) -> Self {
        Self {
            colors,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Cluster the samples and name every center, keeping cluster order.
pub fn palette_from_samples(
    samples: &[Srgb<u8>],
    options: &ExtractOptions,
) -> Result<Vec<PaletteEntry>, PaletteError> {
    let centers = MiniBatchKMeans::new(options.colors)
        .maybe_seed(options.seed)
        .fit(samples)?;

    let palette: Vec<PaletteEntry> = centers
        .into_iter()
        .map(|c| PaletteEntry::new(c, &CSS3_COLORS))
        .collect();

    tracing::debug!(
        "Extracted palette: {}",
        palette
            .iter()
            .map(|e| format!("{} {}", e.hex, e.name))
            .collect::<Vec<_>>()
            .join(", ")
    );

    Ok(palette)
}

/// Extract a `k`-color named palette from the image at `path`.
#[cfg(not(target_arch = "wasm32"))]
pub fn extract_palette(
    path: impl AsRef<Path>,
    k: usize,
) -> Result<Vec<PaletteEntry>, PaletteError> {
    extract_palette_with(path, &ExtractOptions::new(k))
}

#[cfg(not(target_arch = "wasm32"))]
pub fn extract_palette_with(
    path: impl AsRef<Path>,
    options: &ExtractOptions,
) -> Result<Vec<PaletteEntry>, PaletteError> {
    let path = path.as_ref();
    tracing::debug!("Extracting {} colors from {}", options.colors, path.display());
    let samples = sampler::sample_path(path)?;
    palette_from_samples(&samples, options)
}

/// Same as [`extract_palette_with`] for an image already in memory.
pub fn extract_palette_bytes(
    input: &[u8],
    options: &ExtractOptions,
) -> Result<Vec<PaletteEntry>, PaletteError> {
    let samples = sample(input)?;
    palette_from_samples(&samples, options)
}

/// Extract a named palette from encoded image bytes.
///
/// Returns an array of `{ hex, name }` objects in cluster order.
#[wasm_bindgen]
pub fn extract_palette_js(
    input: Vec<u8>,
    n_colors: usize,
    seed: Option<u64>,
) -> Result<Array, JsValue> {
    let options = ExtractOptions {
        colors: n_colors,
        seed,
    };
    let palette = extract_palette_bytes(&input, &options)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    let out = Array::new();
    for entry in palette {
        let obj = Object::new();
        Reflect::set(&obj, &JsValue::from_str("hex"), &JsValue::from_str(entry.hex.as_str()))?;
        Reflect::set(&obj, &JsValue::from_str("name"), &JsValue::from_str(entry.name))?;
        out.push(&obj);
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
    use pretty_assertions::assert_eq;
    use std::io::Cursor;

    fn png(img: RgbImage) -> Vec<u8> {
        let mut buf = Vec::new();
        DynamicImage::ImageRgb8(img)
            .write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
            .unwrap();
        buf
    }

    #[test]
    fn test_entry_formats_and_names() {
        let entry = PaletteEntry::new(Srgb::new(255, 0, 16), &CSS3_COLORS);
        assert_eq!(entry.hex.as_str(), "#ff0010");
        assert_eq!(entry.name, "red");
    }

    #[test]
    fn test_default_options() {
        let options = ExtractOptions::default();
        assert_eq!(options.colors, 10);
        assert_eq!(options.seed, None);
        assert_eq!(ExtractOptions::new(4).seed(9).seed, Some(9));
    }

    #[test]
    fn test_bytes_solid_image() {
        let bytes = png(RgbImage::from_pixel(8, 8, Rgb([0, 128, 0])));
        let palette = extract_palette_bytes(&bytes, &ExtractOptions::new(3).seed(5)).unwrap();
        assert_eq!(palette.len(), 3);
        for entry in &palette {
            assert_eq!(entry.hex.as_str(), "#008000");
            assert_eq!(entry.name, "green");
        }
    }

    #[test]
    fn test_bytes_errors_propagate() {
        let err = extract_palette_bytes(b"nope", &ExtractOptions::default()).unwrap_err();
        assert!(matches!(err, PaletteError::Decode(_)));

        let bytes = png(RgbImage::from_pixel(2, 2, Rgb([1, 2, 3])));
        let err = extract_palette_bytes(&bytes, &ExtractOptions::new(0)).unwrap_err();
        assert!(matches!(err, PaletteError::InvalidArgument { k: 0, .. }));
    }
}
