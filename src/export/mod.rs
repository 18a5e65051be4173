mod csv;
mod json;

use crate::errors::{AppError, AppResult};
use crate::models::entry::Entry;
use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

#[derive(Clone, Debug, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// Write `entries` to `path` in the requested format.
/// Refuses to overwrite an existing file unless `force` is set.
pub fn write(entries: &[Entry], format: &ExportFormat, path: &str, force: bool) -> AppResult<()> {
    if Path::new(path).exists() && !force {
        return Err(AppError::Export(format!(
            "file already exists: {} (use --force to overwrite)",
            path
        )));
    }

    match format {
        ExportFormat::Csv => csv::write_csv(path, entries)?,
        ExportFormat::Json => json::write_json(path, entries)?,
    }

    success(format!(
        "{} export completed: {}",
        format.as_str().to_uppercase(),
        path
    ));
    Ok(())
}
