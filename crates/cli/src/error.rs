//! Maps run failures onto process exit codes.
//!
//! | code | cause |
//! |------|-------|
//! | 2    | bad arguments, reported by clap before `run` starts |
//! | 10   | an image could not be analyzed under the abort policy, or the sample size is zero |
//! | 11   | the `--config` file or the asset directory could not be read |
//! | 12   | the `--config` file or a flag holds an unusable value |
//! | 13   | the JSON report could not be written |

use asset_palette_core::PaletteError;
use std::fmt;

#[derive(Debug)]
pub enum CliError {
    Analysis(PaletteError),
    Io(String),
    Input(String),
    Serialization(String),
}

impl CliError {
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Analysis(_) => 10,
            CliError::Io(_) => 11,
            CliError::Input(_) => 12,
            CliError::Serialization(_) => 13,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Analysis(e) => write!(f, "{e}"),
            CliError::Io(msg) | CliError::Input(msg) | CliError::Serialization(msg) => {
                f.write_str(msg)
            }
        }
    }
}

/// Config problems become input errors, read failures stay I/O errors and
/// everything else is an analysis failure.
impl From<PaletteError> for CliError {
    fn from(e: PaletteError) -> Self {
        match e {
            PaletteError::Io(msg) => CliError::Io(msg),
            PaletteError::InvalidConfig(msg) => CliError::Input(msg),
            other => CliError::Analysis(other),
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Serialization(e.to_string())
    }
}
