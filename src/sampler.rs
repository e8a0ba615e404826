//! Image decoding and fixed-grid pixel sampling.

use std::path::Path;

use image::{DynamicImage, GenericImageView, imageops::FilterType};
use palette::Srgb;

use crate::error::PaletteError;

pub const SAMPLE_WIDTH: u32 = 100;
pub const SAMPLE_HEIGHT: u32 = 100;
pub const SAMPLE_COUNT: usize = (SAMPLE_WIDTH * SAMPLE_HEIGHT) as usize;

/// Resampling filter for the fixed grid. Nearest-neighbour keeps every sample
/// an actual source color, so a 2×2 image becomes four 50×50 blocks.
pub const SAMPLE_FILTER: FilterType = FilterType::Nearest;

/// Decode `bytes` and return [`SAMPLE_COUNT`] row-major RGB samples.
pub fn sample(bytes: &[u8]) -> Result<Vec<Srgb<u8>>, PaletteError> {
    let img = image::load_from_memory(bytes)?;
    Ok(sample_image(&img))
}

/// Read and decode the image at `path`, then sample it like [`sample`].
pub fn sample_path(path: impl AsRef<Path>) -> Result<Vec<Srgb<u8>>, PaletteError> {
    let img = image::open(path)?;
    Ok(sample_image(&img))
}

/// Sample an already-decoded image. Alpha is dropped without blending.
pub fn sample_image(img: &DynamicImage) -> Vec<Srgb<u8>> {
    let (w, h) = img.dimensions();
    let rgb = img.to_rgb8();
    let grid = image::imageops::resize(&rgb, SAMPLE_WIDTH, SAMPLE_HEIGHT, SAMPLE_FILTER);

    tracing::debug!("Sampled {}x{} image onto {}x{} grid", w, h, SAMPLE_WIDTH, SAMPLE_HEIGHT);

    grid.pixels()
        .map(|p| Srgb::new(p[0], p[1], p[2]))
        .collect()
}
