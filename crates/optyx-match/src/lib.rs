#![deny(missing_docs)]
#![doc = "Prescription-to-catalog matching: range grammars, transposition, the category walk, coating extraction and catalog validation."]

mod assemble;
mod coatings;
mod matcher;
pub mod range;
mod transpose;
mod validate;

pub use assemble::{
    match_lens_styles, match_prescription, EyeMatch, EyeOutcome, LensStyleOutcome, MatchFailure,
    MatchOutcome, NO_MATCH_MESSAGE,
};
pub use coatings::{available_coatings, averaged_coatings, display_name, Coating};
pub use matcher::{find_best_match, CategoryMatch};
pub use range::{standardize_axis, BandRange, CompoundRange, CylAxisRange, RangeSpec};
pub use transpose::transpose;
pub use validate::{validate_catalog, CatalogIssue};
