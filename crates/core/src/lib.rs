#![deny(unsafe_code)]
//! Core types for asset-palette.
//!
//! Provides the exact 8-bit `Rgb` color with its hex form, `Hsv` conversion,
//! the threshold classifier producing `Category` and `ColorStat`, the
//! insertion-ordered `ColorHistogram`, and `AnalysisConfig`.

pub mod classify;
pub mod color;
pub mod config;
pub mod error;
pub mod histogram;

pub use classify::{classify, Category, ColorStat};
pub use color::{rgb_to_hsv, Hsv, Rgb};
pub use config::{AnalysisConfig, FailurePolicy, ResizeFilter, SampleSize};
pub use error::PaletteError;
pub use histogram::ColorHistogram;
