//! Exporter implementation

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use tempfile::NamedTempFile;
use tracing::{info, warn};

use crate::config::Config;
use crate::error::{Result, StaffError};
use crate::store::HistoryLog;

/// Writes the history log to disk
#[derive(Debug, Clone)]
pub struct Exporter {
    /// Directory base names resolve against
    export_dir: PathBuf,

    /// Extension without the dot
    extension: String,

    /// One indent level, e.g. `b" "`
    indent: Vec<u8>,
}

impl Exporter {
    pub fn new(config: &Config) -> Self {
        Self {
            export_dir: config.export_dir.clone(),
            extension: config.export_extension.clone(),
            indent: vec![b' '; config.indent_width],
        }
    }

    /// Resolve a base name to `{export_dir}/{base}.{extension}`
    pub fn resolve_path(&self, base_name: &str) -> Result<PathBuf> {
        let base_name = base_name.trim();
        if base_name.is_empty() {
            return Err(StaffError::invalid_input("file name must not be empty"));
        }

        Ok(self
            .export_dir
            .join(format!("{}.{}", base_name, self.extension)))
    }

    /// Create (or truncate) the export file for a base name
    pub fn create_file(&self, base_name: &str) -> Result<PathBuf> {
        let path = self.resolve_path(base_name)?;

        if let Err(e) = File::create(&path) {
            warn!(path = %path.display(), error = %e, "Failed to create export file");
            return Err(e.into());
        }

        Ok(path)
    }

    /// Render the history log as indented JSON
    pub fn render(&self, history: &HistoryLog) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(&self.indent);
        let mut serializer = Serializer::with_formatter(&mut buf, formatter);

        history
            .serialize(&mut serializer)
            .map_err(|e| StaffError::Serialization(e.to_string()))?;

        Ok(buf)
    }

    /// Write the full history log to `path`, replacing any existing content
    pub fn export_data(&self, history: &HistoryLog, path: &Path) -> Result<()> {
        let bytes = self.render(history)?;

        if let Err(e) = Self::write_file(path, &bytes) {
            warn!(path = %path.display(), error = %e, "Failed to write export file");
            return Err(e);
        }

        info!(
            path = %path.display(),
            ids = history.len(),
            records = history.total_records(),
            "Exported history"
        );

        Ok(())
    }

    /// Resolve a base name and export to it in one step
    pub fn export(&self, history: &HistoryLog, base_name: &str) -> Result<PathBuf> {
        let path = self.resolve_path(base_name)?;
        self.export_data(history, &path)?;
        Ok(path)
    }

    // =========================================================================
    // Private Helpers
    // =========================================================================

    /// Write to a uniquely named temp file beside `path`, then rename it
    /// over `path`. The temp file is removed if any step fails.
    fn write_file(path: &Path, bytes: &[u8]) -> Result<()> {
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut temp = NamedTempFile::new_in(dir)?;
        temp.write_all(bytes)?;
        temp.as_file().sync_all()?;
        temp.persist(path).map_err(|e| e.error)?;
        Ok(())
    }
}
