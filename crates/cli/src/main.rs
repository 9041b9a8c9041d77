#![deny(unsafe_code)]
//! CLI binary for asset-palette.
//!
//! Subcommands:
//! - `survey <PATH>...` — dominant colors of each listed image
//! - `assets <DIR>` — palette aggregated across every `.png` in a directory

mod error;
mod render;

use asset_palette_core::{AnalysisConfig, FailurePolicy, SampleSize};
use asset_palette_scan::{analyze_directory, survey_images};
use clap::{ArgAction, Args, Parser, Subcommand};
use error::CliError;
use std::path::{Path, PathBuf};
use std::process;
use tracing::debug;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "asset-palette", about = "Dominant color analysis for image assets")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    /// JSON file whose keys override the command's default settings.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Report the dominant colors of each image (150x150, top 8, skips failures).
    Survey {
        /// Image files to analyze, in report order.
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        #[command(flatten)]
        overrides: Overrides,
    },
    /// Aggregate a palette across every asset in a directory (100x100, top 5, aborts).
    Assets {
        /// Directory holding the assets.
        dir: PathBuf,

        #[command(flatten)]
        overrides: Overrides,
    },
}

#[derive(Args)]
struct Overrides {
    /// Dominant colors kept per image.
    #[arg(short = 'n', long)]
    top: Option<usize>,

    /// Sample resolution, e.g. "150" or "120x80".
    #[arg(short, long)]
    size: Option<SampleSize>,

    /// Keep going when an image fails to load.
    #[arg(long, conflicts_with = "abort_on_failure")]
    skip_failures: bool,

    /// Stop at the first image that fails to load.
    #[arg(long)]
    abort_on_failure: bool,
}

impl Overrides {
    fn apply(&self, mut config: AnalysisConfig) -> Result<AnalysisConfig, CliError> {
        if let Some(top) = self.top {
            config.top_colors = top;
        }
        if let Some(size) = self.size {
            config.sample_size = size;
        }
        if self.skip_failures {
            config.failure_policy = FailurePolicy::Skip;
        }
        if self.abort_on_failure {
            config.failure_policy = FailurePolicy::Abort;
        }
        config.validate()?;
        Ok(config)
    }
}

/// Preset, then the `--config` file, then command-line flags.
fn resolve_config(
    preset: AnalysisConfig,
    file: Option<&Path>,
    overrides: &Overrides,
) -> Result<AnalysisConfig, CliError> {
    let config = match file {
        Some(path) => preset.with_overrides_file(path)?,
        None => preset,
    };
    let config = overrides.apply(config)?;
    debug!(?config, "resolved configuration");
    Ok(config)
}

fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        _ => LevelFilter::DEBUG,
    };
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<(), CliError> {
    let config_file = cli.config.as_deref();
    match cli.command {
        Command::Survey { paths, overrides } => {
            let config = resolve_config(AnalysisConfig::survey(), config_file, &overrides)?;
            let reports = survey_images(&paths, &config)?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&reports)?);
            } else {
                print!("{}", render::survey_text(&reports));
            }
        }
        Command::Assets { dir, overrides } => {
            let config = resolve_config(AnalysisConfig::assets(), config_file, &overrides)?;
            let result = analyze_directory(&dir, &config)?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                print!("{}", render::assets_text(&result));
            }
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn no_overrides() -> Overrides {
        Overrides {
            top: None,
            size: None,
            skip_failures: false,
            abort_on_failure: false,
        }
    }

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn survey_parses_paths_and_overrides() {
        let cli = Cli::try_parse_from([
            "asset-palette",
            "--json",
            "survey",
            "a.png",
            "b.png",
            "--top",
            "3",
            "--size",
            "64x32",
        ])
        .unwrap();
        assert!(cli.json);
        let Command::Survey { paths, overrides } = cli.command else {
            panic!("expected survey");
        };
        assert_eq!(paths.len(), 2);
        assert_eq!(overrides.top, Some(3));
        assert_eq!(overrides.size, Some(SampleSize { width: 64, height: 32 }));
    }

    #[test]
    fn survey_requires_a_path() {
        assert!(Cli::try_parse_from(["asset-palette", "survey"]).is_err());
    }

    #[test]
    fn failure_flags_conflict() {
        let parsed = Cli::try_parse_from([
            "asset-palette",
            "assets",
            "dir",
            "--skip-failures",
            "--abort-on-failure",
        ]);
        assert!(parsed.is_err());
    }

    #[test]
    fn flags_override_preset() {
        let overrides = Overrides {
            skip_failures: true,
            top: Some(2),
            ..no_overrides()
        };
        let config = resolve_config(AnalysisConfig::assets(), None, &overrides).unwrap();
        assert_eq!(config.failure_policy, FailurePolicy::Skip);
        assert_eq!(config.top_colors, 2);
        assert_eq!(config.global_top, 10);
    }

    #[test]
    fn zero_top_is_input_error() {
        let overrides = Overrides {
            top: Some(0),
            ..no_overrides()
        };
        let err = resolve_config(AnalysisConfig::survey(), None, &overrides).unwrap_err();
        assert_eq!(err.exit_code(), 12);
    }

    #[test]
    fn config_file_applies_before_flags() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("palette.json");
        std::fs::write(&path, r#"{"top_colors": 6, "bucket_cap": 2}"#).unwrap();
        let overrides = Overrides {
            top: Some(4),
            ..no_overrides()
        };
        let config = resolve_config(AnalysisConfig::assets(), Some(&path), &overrides).unwrap();
        assert_eq!(config.top_colors, 4);
        assert_eq!(config.bucket_cap, 2);
    }

    #[test]
    fn assets_on_corrupt_file_exits_with_analysis_code() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("broken.png"), b"nope").unwrap();
        let dir_arg = dir.path().to_str().unwrap();
        let cli = Cli::try_parse_from(["asset-palette", "assets", dir_arg]).unwrap();
        let err = run(cli).unwrap_err();
        assert_eq!(err.exit_code(), 10);
    }

    #[test]
    fn survey_skips_corrupt_file_by_default() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("good.png");
        image::RgbImage::from_pixel(10, 10, image::Rgb([0, 0, 255]))
            .save(&good)
            .unwrap();
        let cli = Cli::try_parse_from([
            "asset-palette",
            "survey",
            dir.path().join("missing.png").to_str().unwrap(),
            good.to_str().unwrap(),
        ])
        .unwrap();
        assert!(run(cli).is_ok());
    }
}
