//! Catalog authoring checks.
//!
//! A row whose range string fails its category's grammar silently never
//! matches, which is the right behavior at match time and the wrong thing
//! to leave undiagnosed at authoring time. Validation parses every row the
//! way the matcher would and reports what the matcher would skip.

use optyx_catalog::{Catalog, CategoryId};
use serde::{Deserialize, Serialize};

use crate::range::{standardize_axis, BandRange, RangeSpec};

/// A problem detected in one catalog row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogIssue {
    /// Category slot of the offending row.
    pub category: CategoryId,
    /// Zero-based row index within the category.
    pub row: usize,
    /// The offending range string.
    pub range: String,
    /// What is wrong with it.
    pub message: String,
}

/// Checks every row of every category against its mandated grammar.
/// Issues never fail a load; they are authoring diagnostics.
pub fn validate_catalog(catalog: &Catalog) -> Vec<CatalogIssue> {
    let mut issues = Vec::new();
    for (category, rows) in catalog.categories() {
        for (index, row) in rows.iter().enumerate() {
            let finding = match RangeSpec::parse(category.grammar(), &row.range) {
                Err(err) => Some(err.info().message.clone()),
                Ok(spec) => lint(&spec),
            };
            if let Some(message) = finding {
                issues.push(CatalogIssue {
                    category,
                    row: index,
                    range: row.range.clone(),
                    message,
                });
            }
        }
    }
    issues
}

/// Flags rows that parse but can never take an order.
fn lint(spec: &RangeSpec) -> Option<String> {
    match spec {
        RangeSpec::Band(BandRange::Add { base }) if *base == 0.0 => {
            Some("zero-based ADD range can never match".to_string())
        }
        RangeSpec::CylAxis(range) if standardize_axis(range.axis) != range.axis => Some(format!(
            "axis {}° is not one of the standard axes and can never match",
            range.axis
        )),
        _ => None,
    }
}
