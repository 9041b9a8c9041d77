//! Tunable parameters for a sampling run.
//!
//! Two presets reproduce the two ways the tool is used: [`AnalysisConfig::survey`]
//! reports on an explicit list of images and skips the ones that fail to
//! decode, [`AnalysisConfig::assets`] aggregates a directory and stops at the
//! first failure. Either preset can be adjusted from a JSON object whose keys
//! override individual fields:
//!
//! ```
//! use asset_palette_core::config::{AnalysisConfig, FailurePolicy};
//!
//! let overrides = serde_json::json!({"top_colors": 3, "failure_policy": "skip"});
//! let config = AnalysisConfig::assets().with_overrides(&overrides)?;
//! assert_eq!(config.top_colors, 3);
//! assert_eq!(config.failure_policy, FailurePolicy::Skip);
//! # Ok::<(), asset_palette_core::PaletteError>(())
//! ```

use crate::error::PaletteError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Target resolution every image is resized to before counting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleSize {
    pub width: u32,
    pub height: u32,
}

impl SampleSize {
    pub const fn square(side: u32) -> Self {
        SampleSize {
            width: side,
            height: side,
        }
    }
}

impl fmt::Display for SampleSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Parses `"150"` (square) or `"150x100"`.
impl FromStr for SampleSize {
    type Err = PaletteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse = |part: &str| {
            part.trim()
                .parse::<u32>()
                .map_err(|e| PaletteError::InvalidConfig(format!("invalid sample size {s:?}: {e}")))
        };
        let size = match s.split_once(['x', 'X']) {
            Some((w, h)) => SampleSize {
                width: parse(w)?,
                height: parse(h)?,
            },
            None => SampleSize::square(parse(s)?),
        };
        if size.width == 0 || size.height == 0 {
            return Err(PaletteError::InvalidDimensions);
        }
        Ok(size)
    }
}

/// Resampling filter used when downsizing. Catmull-Rom is bicubic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResizeFilter {
    Nearest,
    Triangle,
    #[default]
    CatmullRom,
    Gaussian,
    Lanczos3,
}

/// What to do when an image cannot be decoded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// Log the failure, record no colors for that image, keep going.
    Skip,
    /// Return the first failure and stop.
    #[default]
    Abort,
}

/// Complete parameter set for a survey or directory analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Resolution images are resized to before counting.
    pub sample_size: SampleSize,
    /// Dominant colors kept per image.
    pub top_colors: usize,
    /// Colors kept after re-ranking across images.
    pub global_top: usize,
    /// Maximum length of each primary/accent/background bucket.
    pub bucket_cap: usize,
    pub filter: ResizeFilter,
    pub failure_policy: FailurePolicy,
    /// File name suffix selecting assets in a directory, matched case-sensitively.
    pub extension: String,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self::assets()
    }
}

impl AnalysisConfig {
    /// Per-image report: 150×150, top 8, skip failures.
    pub fn survey() -> Self {
        AnalysisConfig {
            sample_size: SampleSize::square(150),
            top_colors: 8,
            failure_policy: FailurePolicy::Skip,
            ..Self::assets()
        }
    }

    /// Directory aggregation: 100×100, top 5 per image, top 10 overall,
    /// buckets of 3, abort on failure.
    pub fn assets() -> Self {
        AnalysisConfig {
            sample_size: SampleSize::square(100),
            top_colors: 5,
            global_top: 10,
            bucket_cap: 3,
            filter: ResizeFilter::default(),
            failure_policy: FailurePolicy::Abort,
            extension: ".png".to_string(),
        }
    }

    /// Rejects values that would make a run meaningless.
    pub fn validate(&self) -> Result<(), PaletteError> {
        if self.sample_size.width == 0 || self.sample_size.height == 0 {
            return Err(PaletteError::InvalidDimensions);
        }
        if self.top_colors == 0 {
            return Err(PaletteError::InvalidConfig(
                "top_colors must be at least 1".into(),
            ));
        }
        if self.global_top == 0 {
            return Err(PaletteError::InvalidConfig(
                "global_top must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// Returns a copy with every key of the JSON object `overrides` replacing
    /// the matching field. Unknown keys are rejected.
    pub fn with_overrides(&self, overrides: &Value) -> Result<Self, PaletteError> {
        let Some(fields) = overrides.as_object() else {
            return Err(PaletteError::InvalidConfig(
                "config overrides must be a JSON object".into(),
            ));
        };
        let mut merged = serde_json::to_value(self)
            .map_err(|e| PaletteError::InvalidConfig(e.to_string()))?;
        let Some(base) = merged.as_object_mut() else {
            return Err(PaletteError::InvalidConfig(
                "config did not serialize to an object".into(),
            ));
        };
        for (key, value) in fields {
            if !base.contains_key(key) {
                return Err(PaletteError::InvalidConfig(format!("unknown field {key:?}")));
            }
            base.insert(key.clone(), value.clone());
        }
        let config: Self = serde_json::from_value(merged)
            .map_err(|e| PaletteError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads a JSON object from `path` and applies it with
    /// [`with_overrides`](Self::with_overrides).
    pub fn with_overrides_file(&self, path: &Path) -> Result<Self, PaletteError> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| PaletteError::Io(format!("cannot read {}: {e}", path.display())))?;
        let overrides: Value = serde_json::from_str(&text).map_err(|e| {
            PaletteError::InvalidConfig(format!("{} is not valid JSON: {e}", path.display()))
        })?;
        self.with_overrides(&overrides)
    }
}
