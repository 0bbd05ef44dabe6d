//! Per-eye match results and the dual-eye / dual-style entry points.

use optyx_catalog::{Catalog, CategoryId, PriceEntry};
use optyx_core::{EyePrescription, PowerType, PrescriptionPair, Rx};
use serde::{Deserialize, Serialize};

use crate::matcher::find_best_match;

/// Fixed message carried by unmatched eye results.
pub const NO_MATCH_MESSAGE: &str = "No matching range found for this prescription";

/// A successful per-eye match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EyeMatch {
    /// Category slot the matched row belongs to.
    pub category: CategoryId,
    /// Range string of the matched row.
    pub range: String,
    /// Coating prices of the matched row, in catalog authoring order.
    pub prices: Vec<PriceEntry>,
    /// The prescription the walk was run with (pre-transposition values).
    pub prescription: Rx,
}

impl EyeMatch {
    /// Legacy top-level category label, e.g. `single_vision`.
    pub fn category_label(&self) -> &'static str {
        self.category.category()
    }

    /// Legacy subcategory label, e.g. `Minus Comp`.
    pub fn subcategory_label(&self) -> &'static str {
        self.category.subcategory()
    }
}

/// An eye the catalog has no range for. This is an expected outcome, not
/// an error: callers render it as "no options for this prescription".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchFailure {
    /// Always [`NO_MATCH_MESSAGE`]; kept as a field for wire compatibility.
    pub error: String,
    /// The prescription the walk was run with.
    pub prescription: Rx,
}

impl MatchFailure {
    fn new(prescription: Rx) -> Self {
        Self {
            error: NO_MATCH_MESSAGE.to_string(),
            prescription,
        }
    }
}

/// Outcome of matching one eye. Exactly one of the two shapes exists per
/// result; the enum carries that invariant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EyeOutcome {
    /// A catalog row covers the prescription.
    Matched(EyeMatch),
    /// The walk exhausted both notations without a hit.
    NoMatch(MatchFailure),
}

impl EyeOutcome {
    /// Returns the match when one exists.
    pub fn matched(&self) -> Option<&EyeMatch> {
        match self {
            EyeOutcome::Matched(eye_match) => Some(eye_match),
            EyeOutcome::NoMatch(_) => None,
        }
    }

    /// True when a catalog row was found.
    pub fn is_matched(&self) -> bool {
        self.matched().is_some()
    }

    /// The prescription values this outcome was computed for.
    pub fn prescription(&self) -> Rx {
        match self {
            EyeOutcome::Matched(eye_match) => eye_match.prescription,
            EyeOutcome::NoMatch(failure) => failure.prescription,
        }
    }
}

/// Match results for both eyes against one catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchOutcome {
    /// Right eye (OD) result.
    pub right_eye: EyeOutcome,
    /// Left eye (OS) result.
    pub left_eye: EyeOutcome,
    /// Brand of the catalog the match ran against.
    pub brand: String,
}

/// Matches both eyes of a prescription against the catalog for the given
/// power type. Each eye is independent; one eye failing to match never
/// affects the other.
pub fn match_prescription(
    catalog: &Catalog,
    pair: &PrescriptionPair,
    power: PowerType,
) -> MatchOutcome {
    MatchOutcome {
        right_eye: match_eye(catalog, &pair.right, power),
        left_eye: match_eye(catalog, &pair.left, power),
        brand: catalog.brand.clone(),
    }
}

fn match_eye(catalog: &Catalog, eye: &EyePrescription, power: PowerType) -> EyeOutcome {
    let rx = eye.distance_rx();
    match find_best_match(rx, catalog, power) {
        Some(found) => EyeOutcome::Matched(EyeMatch {
            category: found.category,
            range: found.row.range.clone(),
            prices: found.row.prices.clone(),
            prescription: rx,
        }),
        None => EyeOutcome::NoMatch(MatchFailure::new(rx)),
    }
}

/// Results across lens styles for one prescription.
///
/// ADD-power prescriptions are priced against both the bifocal and the
/// progressive catalogs so the customer can compare the two styles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LensStyleOutcome {
    /// Single vision: one result set.
    SingleVision(MatchOutcome),
    /// ADD power: one result set per lens style.
    AddPower {
        /// Results against the bifocal tables.
        bifocal: MatchOutcome,
        /// Results against the progressive tables.
        progressive: MatchOutcome,
    },
}

/// Runs the matcher across every lens style the power type calls for.
pub fn match_lens_styles(
    catalog: &Catalog,
    pair: &PrescriptionPair,
    power: PowerType,
) -> LensStyleOutcome {
    if power.requires_add() {
        LensStyleOutcome::AddPower {
            bifocal: match_prescription(catalog, pair, PowerType::Bifocal),
            progressive: match_prescription(catalog, pair, PowerType::Progressive),
        }
    } else {
        LensStyleOutcome::SingleVision(match_prescription(catalog, pair, PowerType::WithPower))
    }
}
