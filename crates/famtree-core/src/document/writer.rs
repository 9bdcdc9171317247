//! Document text output
//!
//! Uses temp→rename so a reader never sees a partially written document.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use super::builder::PersonDocument;
use crate::errors::{io_error, Result};
use crate::{log_op_end, log_op_error, log_op_start};

/// Render a document as pretty-printed JSON (2-space indent)
///
/// # Errors
/// * `Serialization` - If encoding fails
pub fn to_pretty_json(doc: &PersonDocument) -> Result<String> {
    Ok(serde_json::to_string_pretty(doc)?)
}

/// Write a document to `target` as pretty-printed JSON
///
/// Parent directories are created as needed.
///
/// # Errors
/// * `Serialization` - If encoding fails
/// * `Io` - If the file cannot be written
pub fn write_document(doc: &PersonDocument, target: &Path) -> Result<()> {
    log_op_start!("write_document", path = %target.display());
    let start = Instant::now();

    let result = to_pretty_json(doc).and_then(|text| atomic_write(target, text.as_bytes()));
    if let Err(e) = &result {
        log_op_error!(
            "write_document",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        return result;
    }

    log_op_end!(
        "write_document",
        duration_ms = start.elapsed().as_millis() as u64,
        path = %target.display()
    );
    Ok(())
}

/// Atomically write bytes to a file
pub(crate) fn atomic_write(target: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = target.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| io_error("create_output_dir", e))?;
    }

    let temp = temp_path(target);
    fs::write(&temp, content).map_err(|e| io_error("write_output_temp", e))?;

    if let Err(e) = fs::rename(&temp, target) {
        let _ = fs::remove_file(&temp);
        return Err(io_error("rename_output_temp", e));
    }

    Ok(())
}

fn temp_path(target: &Path) -> PathBuf {
    let mut name = target
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| OsString::from("document"));
    name.push(".tmp");
    target.with_file_name(name)
}
