//! Output formatting and persistence for dashboard reports.
//!
//! Supports pretty-printing, JSON serialization to disk, and per-aggregate
//! CSV table export for chart tooling.

use anyhow::Result;
use serde::Serialize;
use tracing::{debug, info};

use crate::pipeline::types::DashboardReport;
use csv::WriterBuilder;
use std::fs::File;
use std::path::Path;

/// Logs a report using Rust's debug pretty-print format.
pub fn print_pretty(report: &DashboardReport) {
    debug!("{:#?}", report);
}

/// Logs a value as pretty-printed JSON.
pub fn print_json(value: &impl Serialize) -> Result<()> {
    info!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Serializes a value as JSON to a local file, creating parent directories.
pub fn write_json(path: &str, value: &impl Serialize) -> Result<()> {
    ensure_parent_dir(path)?;

    let body = serde_json::to_vec_pretty(value)?;
    std::fs::write(path, body)?;

    debug!(path, "JSON written");
    Ok(())
}

/// Writes one derived aggregate as a CSV table: a header row followed by one
/// row per entry.
pub fn write_table_csv<T: Serialize>(path: &str, rows: &[T]) -> Result<()> {
    ensure_parent_dir(path)?;

    let file = File::create(path)?;
    let mut writer = WriterBuilder::new().from_writer(file);

    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;

    debug!(path, rows = rows.len(), "CSV table written");
    Ok(())
}

fn ensure_parent_dir(path: &str) -> Result<()> {
    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}
