//! Per-image dominant color reports over an explicit list of files.

use asset_palette_core::{AnalysisConfig, ColorStat, FailurePolicy, PaletteError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::loader::{asset_name, dominant_colors};

/// Dominant colors of one image, classified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurveyReport {
    pub name: String,
    pub path: PathBuf,
    pub colors: Vec<ColorStat>,
    /// Set when the image was skipped after failing to load.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Samples and classifies a single image. Always fails on a load error.
pub fn survey_image(path: &Path, config: &AnalysisConfig) -> Result<SurveyReport, PaletteError> {
    let colors = dominant_colors(path, config)?
        .into_iter()
        .map(ColorStat::from_rgb)
        .collect();
    Ok(SurveyReport {
        name: asset_name(path),
        path: path.to_path_buf(),
        colors,
        error: None,
    })
}

/// Reports on every path in order.
///
/// Under [`FailurePolicy::Skip`] an image that fails to load gets an empty
/// color list and its error message; under [`FailurePolicy::Abort`] the first
/// failure is returned.
pub fn survey_images<P: AsRef<Path>>(
    paths: &[P],
    config: &AnalysisConfig,
) -> Result<Vec<SurveyReport>, PaletteError> {
    config.validate()?;
    let mut reports = Vec::with_capacity(paths.len());
    for path in paths {
        let path = path.as_ref();
        match survey_image(path, config) {
            Ok(report) => reports.push(report),
            Err(err) if config.failure_policy == FailurePolicy::Skip => {
                warn!(path = %path.display(), error = %err, "skipping image");
                reports.push(SurveyReport {
                    name: asset_name(path),
                    path: path.to_path_buf(),
                    colors: Vec::new(),
                    error: Some(err.to_string()),
                });
            }
            Err(err) => return Err(err),
        }
    }
    info!(images = reports.len(), "survey complete");
    Ok(reports)
}
