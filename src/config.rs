//! Configuration for staffdb
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

use crate::error::{Result, StaffError};

/// Main configuration for a staffdb session
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Export Configuration
    // -------------------------------------------------------------------------
    /// Directory export base names are resolved against
    ///   {export_dir}/{base_name}.{export_extension}
    pub export_dir: PathBuf,

    /// Extension appended to export base names (without the dot)
    pub export_extension: String,

    /// Spaces per nesting level in the exported JSON
    pub indent_width: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            export_dir: PathBuf::from("."),
            export_extension: "json".to_string(),
            indent_width: 1,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the directory exports are written to
    pub fn export_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.export_dir = path.into();
        self
    }

    /// Set the export file extension (a leading dot is stripped)
    pub fn export_extension(mut self, extension: impl Into<String>) -> Self {
        let extension = extension.into();
        self.config.export_extension = extension.trim_start_matches('.').to_string();
        self
    }

    /// Set the number of spaces per JSON nesting level
    pub fn indent_width(mut self, width: usize) -> Self {
        self.config.indent_width = width;
        self
    }

    /// Validate and produce the config
    pub fn build(self) -> Result<Config> {
        if self.config.export_extension.is_empty() {
            return Err(StaffError::Config(
                "export extension must not be empty".to_string(),
            ));
        }

        Ok(self.config)
    }
}
