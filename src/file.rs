// src/file.rs

use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use tempfile::NamedTempFile;
use tracing::{info, warn};

use crate::config::consts::CSV_SEP;
use crate::config::options::ExportOptions;
use crate::csv::rows_to_string;
use crate::data::FIELDS;
use crate::error::{Error, Result};
use crate::store::RegistrantCollection;

/// Array of registrant objects in roster order, two-space indented.
pub fn render_json(collection: &RegistrantCollection) -> Result<String> {
    Ok(serde_json::to_string_pretty(collection.as_slice())?)
}

/// Header row of field names, then one row per registrant in roster order.
pub fn render_csv(collection: &RegistrantCollection) -> Result<String> {
    let rows: Vec<Vec<String>> = collection.iter().map(|r| r.to_row()).collect();
    Ok(rows_to_string(&FIELDS, &rows, CSV_SEP)?)
}

/// Write the requested documents. Everything is rendered and staged next to
/// its target before the first one is moved into place; if any step fails,
/// documents already moved are removed again. Returns the paths written,
/// JSON first.
pub fn export(collection: &RegistrantCollection, export: &ExportOptions) -> Result<Vec<PathBuf>> {
    let mut pending: Vec<(PathBuf, String)> = Vec::with_capacity(2);
    if export.json {
        pending.push((export.json_path(), render_json(collection)?));
    }
    if export.csv {
        pending.push((export.csv_path(), render_csv(collection)?));
    }
    if pending.is_empty() {
        warn!("neither JSON nor CSV output selected; nothing written");
        return Ok(Vec::new());
    }

    ensure_directory(&export.out_dir)?;
    let mut staged = Vec::with_capacity(pending.len());
    for (path, contents) in pending {
        let mut tmp = NamedTempFile::new_in(&export.out_dir)?;
        tmp.write_all(contents.as_bytes())?;
        tmp.flush()?;
        staged.push((path, tmp));
    }

    // Unpersisted temp files delete themselves on drop.
    let mut written: Vec<PathBuf> = Vec::with_capacity(staged.len());
    for (path, tmp) in staged {
        if let Err(err) = tmp.persist(&path) {
            remove_all(&written);
            return Err(Error::Io(err.error));
        }
        info!(path = %path.display(), registrants = collection.len(), "wrote export");
        written.push(path);
    }
    Ok(written)
}

fn remove_all(paths: &[PathBuf]) {
    for path in paths {
        if let Err(err) = fs::remove_file(path) {
            warn!(path = %path.display(), %err, "could not remove partial export");
        }
    }
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(Error::Io(std::io::Error::new(
            std::io::ErrorKind::AlreadyExists,
            format!("Path exists but is not a directory: {}", dir.display()),
        )));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}
