use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::Level;

use crate::error::{ResumeError, Result};

/// Config file picked up from the working directory when present
pub const DEFAULT_CONFIG_FILE: &str = "resume-parser.toml";

/// Main configuration for resume-parser
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ParserConfig {
    /// Path to the resume PDF. Always taken from the command line.
    #[serde(skip)]
    pub input: PathBuf,
    /// Path of the JSON file to write. Always taken from the command line.
    #[serde(skip)]
    pub output: PathBuf,
    /// Print the human-readable summary to stdout
    pub print_summary: bool,
    /// Enable debug logging
    pub verbose: bool,
}

impl ParserConfig {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            ..Default::default()
        }
    }

    /// True when the input path points at an existing regular file.
    pub fn input_exists(&self) -> bool {
        self.input.is_file()
    }

    pub fn log_level(&self) -> Level {
        if self.verbose {
            Level::DEBUG
        } else {
            Level::INFO
        }
    }

    /// Loads configuration from an explicit TOML file.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        Self::load_optional(path)?.ok_or_else(|| ResumeError::Config {
            path: path.to_path_buf(),
            message: "file not found".to_string(),
        })
    }

    /// Loads `path` if it exists. Any other read or parse error is returned.
    pub fn load_optional(path: &Path) -> Result<Option<Self>> {
        let config_error = |message: String| ResumeError::Config {
            path: path.to_path_buf(),
            message,
        };

        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(config_error(e.to_string())),
        };

        toml::from_str(&content)
            .map(Some)
            .map_err(|e| config_error(e.to_string()))
    }

    /// Loads `resume-parser.toml` from the current directory, if present.
    pub fn load_default() -> Result<Option<Self>> {
        Self::load_optional(Path::new(DEFAULT_CONFIG_FILE))
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("resume.pdf"),
            output: PathBuf::from("resume.json"),
            print_summary: true,
            verbose: false,
        }
    }
}
