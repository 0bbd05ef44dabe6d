#![deny(missing_docs)]
#![doc = "Brand catalog model, YAML loading and provenance for the optyx engine."]

pub mod hash;
mod load;
mod model;
pub mod provenance;
pub mod serde;

pub use hash::stable_hash_string;
pub use load::load_catalog;
pub use model::{
    Catalog, CategoryId, Price, PriceEntry, RangeGrammar, RangeRow, SingleVisionTables,
};
pub use provenance::{provenance, CatalogProvenance, SchemaVersion};
