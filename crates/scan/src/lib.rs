#![deny(unsafe_code)]
//! Image sampling and palette analysis for asset-palette.
//!
//! This crate sits between `asset-palette-core` (colors, classifier,
//! histogram, config) and the CLI. It provides the two entry points:
//! [`survey::survey_images`] for a per-image report over an explicit list of
//! files and [`aggregate::analyze_directory`] for a directory-wide palette.

pub mod aggregate;

#[cfg(feature = "decode")]
pub mod loader;
#[cfg(feature = "decode")]
pub mod survey;

pub use aggregate::{aggregate, enumerate_assets, partition, AnalysisResult, AssetColors, Buckets};

#[cfg(feature = "decode")]
pub use aggregate::analyze_directory;
#[cfg(feature = "decode")]
pub use survey::{survey_images, SurveyReport};
