//! JSON output writing for converted files
//!
//! Serializes a file's records as one compact JSON array to a sibling file
//! named `<original-path>.json`. Existing outputs are overwritten with no
//! backup; write failures are the one hard error surface of a conversion and
//! propagate to the caller.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::app::models::Record;
use crate::constants::OUTPUT_EXTENSION;
use crate::{Error, Result};

/// Conversion-output path for an input file
///
/// The output sits next to the input with the `.json` suffix appended to the
/// full file name, so `detail-1000.spop` becomes `detail-1000.spop.json`.
pub fn output_path(input: &Path) -> PathBuf {
    let mut name = input.as_os_str().to_os_string();
    name.push(".");
    name.push(OUTPUT_EXTENSION);
    PathBuf::from(name)
}

/// Write a file's records as a compact JSON array
///
/// Element order matches input line order. Returns the path written to.
pub fn write_records(input: &Path, records: &[Record]) -> Result<PathBuf> {
    let path = output_path(input);
    debug!("Writing {}", path.display());

    let file = File::create(&path)
        .map_err(|e| Error::io(format!("Failed to create output file {}", path.display()), e))?;

    let mut writer = BufWriter::new(file);
    serde_json::to_writer(&mut writer, records)
        .map_err(|e| Error::serialization(format!("Failed to serialize {}", path.display()), e))?;
    writer
        .flush()
        .map_err(|e| Error::io(format!("Failed to flush output file {}", path.display()), e))?;

    Ok(path)
}
