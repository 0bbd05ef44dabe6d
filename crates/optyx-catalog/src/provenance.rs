//! Provenance descriptors attached to loaded catalogs.

use optyx_core::errors::OptyxError;
use serde::{Deserialize, Serialize};

use crate::hash::stable_hash_string;
use crate::model::Catalog;

/// Semantic version describing the catalog file schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SchemaVersion {
    /// Major version incremented for breaking changes.
    pub major: u32,
    /// Minor version incremented for additive changes.
    pub minor: u32,
    /// Patch version incremented for bug fixes and documentation updates.
    pub patch: u32,
}

impl SchemaVersion {
    /// Creates a new schema version descriptor.
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }
}

impl Default for SchemaVersion {
    fn default() -> Self {
        Self::new(1, 0, 0)
    }
}

/// Identity of a loaded catalog: which brand, which schema, which bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CatalogProvenance {
    /// Schema version of the catalog model.
    pub schema_version: SchemaVersion,
    /// Brand label from the catalog file.
    pub brand: String,
    /// Canonical content hash of the catalog.
    pub catalog_hash: String,
}

/// Computes the provenance descriptor for a loaded catalog.
pub fn provenance(catalog: &Catalog) -> Result<CatalogProvenance, OptyxError> {
    Ok(CatalogProvenance {
        schema_version: SchemaVersion::default(),
        brand: catalog.brand.clone(),
        catalog_hash: stable_hash_string(catalog)?,
    })
}
