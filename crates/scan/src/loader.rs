//! Decoding and downsampling images into countable pixels.
//!
//! This module is feature-gated behind `decode` (default on) so that the
//! aggregation logic can be used without pulling in the `image` crate.

use asset_palette_core::config::{ResizeFilter, SampleSize};
use asset_palette_core::{AnalysisConfig, ColorHistogram, PaletteError, Rgb};
use image::imageops::{self, FilterType};
use image::RgbImage;
use std::path::Path;
use tracing::debug;

fn filter_type(filter: ResizeFilter) -> FilterType {
    match filter {
        ResizeFilter::Nearest => FilterType::Nearest,
        ResizeFilter::Triangle => FilterType::Triangle,
        ResizeFilter::CatmullRom => FilterType::CatmullRom,
        ResizeFilter::Gaussian => FilterType::Gaussian,
        ResizeFilter::Lanczos3 => FilterType::Lanczos3,
    }
}

/// Decodes `path`, drops any alpha channel and resizes to exactly `size`.
///
/// Alpha is discarded, not composited: a transparent pixel keeps whatever
/// color it stores.
pub fn load_sample(
    path: &Path,
    size: SampleSize,
    filter: ResizeFilter,
) -> Result<RgbImage, PaletteError> {
    if size.width == 0 || size.height == 0 {
        return Err(PaletteError::InvalidDimensions);
    }
    let img = image::open(path).map_err(|e| PaletteError::image_load(path, e))?;
    debug!(
        path = %path.display(),
        width = img.width(),
        height = img.height(),
        "decoded image"
    );
    let rgb = img.to_rgb8();
    Ok(imageops::resize(&rgb, size.width, size.height, filter_type(filter)))
}

/// Counts every pixel of `img` in row-major order.
pub fn histogram(img: &RgbImage) -> ColorHistogram<Rgb> {
    ColorHistogram::from_pixels(img.as_raw())
}

/// Up to `n` most frequent exact colors of `img`.
pub fn dominant_in(img: &RgbImage, n: usize) -> Vec<Rgb> {
    histogram(img).top(n)
}

/// Loads `path` with the config's sampling parameters and returns its
/// `config.top_colors` dominant colors.
pub fn dominant_colors(path: &Path, config: &AnalysisConfig) -> Result<Vec<Rgb>, PaletteError> {
    let sample = load_sample(path, config.sample_size, config.filter)?;
    Ok(dominant_in(&sample, config.top_colors))
}

/// File name used to label an image in reports.
pub(crate) fn asset_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
