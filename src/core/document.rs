use crate::core::error::InspectError;
use serde_yaml::Value;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;
use tracing::debug;

/// Read `path` as UTF-8 text and decode it into a generic YAML value.
///
/// A missing file maps to [`InspectError::NotFound`], malformed YAML to
/// [`InspectError::Syntax`]; any other read failure (permissions, invalid
/// UTF-8) is reported as [`InspectError::Read`].
pub fn load_document(path: &Path) -> Result<Value, InspectError> {
    let text = read_text(path)?;
    debug!(path = %path.display(), bytes = text.len(), "read workflow file");
    decode_document(&text)
}

/// Decode YAML text and resolve `<<` merge keys.
///
/// Documents with more than one `---` section and mappings with duplicate
/// keys are rejected as syntax errors.
pub fn decode_document(text: &str) -> Result<Value, InspectError> {
    let mut document: Value = serde_yaml::from_str(text)?;
    document.apply_merge()?;
    Ok(document)
}

fn read_text(path: &Path) -> Result<String, InspectError> {
    let mut file = File::open(path).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => InspectError::NotFound(path.to_path_buf()),
        _ => InspectError::Read {
            path: path.to_path_buf(),
            source: err,
        },
    })?;
    let mut text = String::new();
    file.read_to_string(&mut text)
        .map_err(|err| InspectError::Read {
            path: path.to_path_buf(),
            source: err,
        })?;
    Ok(text)
}
