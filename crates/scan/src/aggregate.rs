//! Directory-wide palette: cross-image ranking and bucket partition.
//!
//! Every asset contributes its own top colors once each. Those lists are
//! concatenated and counted again, so a color that is dominant in two images
//! counts twice. The global top is classified and split into three capped
//! buckets whose predicates are independent; a dark, muted hue can be both a
//! background and a primary color.

use asset_palette_core::{AnalysisConfig, ColorHistogram, ColorStat, PaletteError, Rgb};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Dominant colors of one asset, most frequent first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetColors {
    pub name: String,
    pub colors: Vec<Rgb>,
}

/// The three capped color groups derived from ranked stats.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Buckets {
    /// Chromatic, not vibrant.
    pub primary: Vec<ColorStat>,
    /// Chromatic and vibrant.
    pub accent: Vec<ColorStat>,
    /// Dark, any category.
    pub background: Vec<ColorStat>,
}

/// Outcome of analyzing a set of assets.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub individual_assets: Vec<AssetColors>,
    pub most_common_colors: Vec<Rgb>,
    pub color_stats: Vec<ColorStat>,
    pub primary_colors: Vec<ColorStat>,
    pub accent_colors: Vec<ColorStat>,
    pub background_colors: Vec<ColorStat>,
}

impl AnalysisResult {
    /// True when no colors were found at all.
    pub fn is_empty(&self) -> bool {
        self.most_common_colors.is_empty()
    }
}

/// Splits `stats` into buckets, keeping rank order and at most `cap` per bucket.
pub fn partition(stats: &[ColorStat], cap: usize) -> Buckets {
    Buckets {
        primary: take_matching(stats, cap, |s| !s.category.is_neutral() && !s.is_vibrant),
        accent: take_matching(stats, cap, |s| !s.category.is_neutral() && s.is_vibrant),
        background: take_matching(stats, cap, |s| s.is_dark),
    }
}

fn take_matching(
    stats: &[ColorStat],
    cap: usize,
    pred: impl Fn(&ColorStat) -> bool,
) -> Vec<ColorStat> {
    stats.iter().filter(|s| pred(s)).take(cap).cloned().collect()
}

/// Re-ranks per-asset colors and builds the full result. Performs no I/O.
pub fn aggregate(assets: Vec<AssetColors>, config: &AnalysisConfig) -> AnalysisResult {
    let counts: ColorHistogram<Rgb> = assets
        .iter()
        .flat_map(|asset| asset.colors.iter().copied())
        .collect();
    let most_common_colors = counts.top(config.global_top);
    let color_stats: Vec<ColorStat> = most_common_colors
        .iter()
        .copied()
        .map(ColorStat::from_rgb)
        .collect();
    let Buckets {
        primary,
        accent,
        background,
    } = partition(&color_stats, config.bucket_cap);

    AnalysisResult {
        individual_assets: assets,
        most_common_colors,
        color_stats,
        primary_colors: primary,
        accent_colors: accent,
        background_colors: background,
    }
}

/// Regular files directly inside `dir` whose name ends with `suffix`,
/// sorted by file name. Symlinks count when they resolve to a file.
///
/// A missing directory yields no assets rather than an error.
pub fn enumerate_assets(dir: &Path, suffix: &str) -> Result<Vec<PathBuf>, PaletteError> {
    if !dir.is_dir() {
        warn!(dir = %dir.display(), "asset directory not found, nothing to analyze");
        return Ok(Vec::new());
    }
    let mut assets = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| PaletteError::Io(e.to_string()))?;
        if !entry.path().is_file() {
            continue;
        }
        if entry.file_name().to_string_lossy().ends_with(suffix) {
            assets.push(entry.into_path());
        }
    }
    debug!(dir = %dir.display(), count = assets.len(), "enumerated assets");
    Ok(assets)
}

/// Analyzes every matching asset in `dir`.
///
/// Under [`FailurePolicy::Abort`](asset_palette_core::FailurePolicy::Abort)
/// the first image that fails to load ends the run with its error. Under
/// `Skip` that asset is listed with no colors.
#[cfg(feature = "decode")]
pub fn analyze_directory(
    dir: &Path,
    config: &AnalysisConfig,
) -> Result<AnalysisResult, PaletteError> {
    use crate::loader::{asset_name, dominant_colors};
    use asset_palette_core::FailurePolicy;

    config.validate()?;
    let paths = enumerate_assets(dir, &config.extension)?;
    let mut assets = Vec::with_capacity(paths.len());
    for path in &paths {
        let colors = match dominant_colors(path, config) {
            Ok(colors) => colors,
            Err(err) if config.failure_policy == FailurePolicy::Skip => {
                warn!(path = %path.display(), error = %err, "skipping asset");
                Vec::new()
            }
            Err(err) => return Err(err),
        };
        assets.push(AssetColors {
            name: asset_name(path),
            colors,
        });
    }
    Ok(aggregate(assets, config))
}
