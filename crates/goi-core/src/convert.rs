use std::fs;
use std::path::Path;

use goi_types::{Dataset, SourceFormat};

use crate::error::ConvertError;
use crate::formats;

/// Run a dataset's conversion with its fixed paths, returning the entry count
pub fn convert_dataset(dataset: &Dataset) -> Result<usize, ConvertError> {
    convert_file(
        Path::new(dataset.input),
        Path::new(dataset.output),
        dataset.format,
        dataset.textbook,
    )
}

/// Read a raw word list, parse it, and write the entries as pretty JSON.
///
/// The output keeps non-ASCII characters literal and uses 2-space
/// indentation. Read, serialize, and write failures all propagate; parsing
/// itself never fails (malformed lines are silently dropped).
pub fn convert_file(
    input: &Path,
    output: &Path,
    format: SourceFormat,
    textbook: &str,
) -> Result<usize, ConvertError> {
    let raw = fs::read_to_string(input).map_err(|source| ConvertError::Read {
        path: input.to_path_buf(),
        source,
    })?;
    tracing::info!("Read {} bytes from {}", raw.len(), input.display());

    let entries = formats::parse(format, &raw, textbook);
    tracing::info!("Parsed {} entries", entries.len());

    let json = serde_json::to_string_pretty(&entries)?;

    if let Some(parent) = output.parent() {
        fs::create_dir_all(parent).map_err(|source| ConvertError::Write {
            path: output.to_path_buf(),
            source,
        })?;
    }
    fs::write(output, json).map_err(|source| ConvertError::Write {
        path: output.to_path_buf(),
        source,
    })?;
    tracing::info!("Wrote {} entries to {}", entries.len(), output.display());

    Ok(entries.len())
}
