use std::fs;
use std::path::Path;

use optyx_core::errors::{ErrorInfo, OptyxError};

use crate::model::Catalog;
use crate::serde::{from_json_slice, from_yaml_slice};

fn io_error(code: &str, path: &Path, err: impl ToString) -> OptyxError {
    OptyxError::Catalog(
        ErrorInfo::new(code, err.to_string()).with_context("path", path.display().to_string()),
    )
}

impl Catalog {
    /// Decodes a catalog from YAML bytes.
    pub fn from_yaml_slice(data: &[u8]) -> Result<Self, OptyxError> {
        from_yaml_slice(data)
    }

    /// Decodes a catalog from JSON bytes.
    pub fn from_json_slice(data: &[u8]) -> Result<Self, OptyxError> {
        from_json_slice(data)
    }
}

/// Loads a catalog from a YAML file on disk.
///
/// Catalogs are static configuration: load once at process start and pass
/// the result wherever matching happens.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Catalog, OptyxError> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|err| io_error("catalog_read", path, err))?;
    Catalog::from_yaml_slice(&bytes)
}
