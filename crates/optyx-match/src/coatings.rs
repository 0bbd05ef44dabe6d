//! Coating extraction and dual-eye price averaging.

use serde::{Deserialize, Serialize};

use crate::assemble::EyeOutcome;

/// A purchasable coating option derived from a matched row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coating {
    /// Short catalog code.
    pub code: String,
    /// Human readable display name.
    pub name: String,
    /// Price in whole currency units.
    pub price: u32,
}

/// Display names for the known coating codes. Codes outside this table
/// fall back to the raw code so new catalog entries surface rather than
/// disappear.
pub fn display_name(code: &str) -> Option<&'static str> {
    Some(match code {
        "HC" => "Hard Coat",
        "ARC" => "Anti-Reflective Coating",
        "HC_PG" => "Hard Coat + Photogray",
        "ARC_PG" => "ARC + Photogray",
        "ARC_POLY" => "ARC Polycarbonate",
        "BLUCUT" => "Blue Cut",
        "BLUCUT_PC_POLY" => "Blue Cut PC Poly",
        "ARC_1_67" => "ARC 1.67 Index",
        "BLUCUT_1_67" => "Blue Cut 1.67 Index",
        "NIGHT_DRIVE" => "Night Drive",
        "PG_BC_GREEN" => "Photogray Blue Cut Green",
        "PG_BC_BLUE" => "Photogray Blue Cut Blue",
        "PG_BC_KT_GREEN" => "PG Blue Cut KT Green",
        "PG_BC_KT_BLUE" => "PG Blue Cut KT Blue",
        _ => return None,
    })
}

/// Lists the coatings a matched eye can order: every priced entry of the
/// matched row, in catalog authoring order, skipping not-offered entries.
/// Unmatched eyes have no coatings.
pub fn available_coatings(outcome: &EyeOutcome) -> Vec<Coating> {
    let Some(matched) = outcome.matched() else {
        return Vec::new();
    };
    matched
        .prices
        .iter()
        .filter_map(|entry| {
            entry.price.amount().map(|price| Coating {
                code: entry.code.clone(),
                name: display_name(&entry.code)
                    .unwrap_or(entry.code.as_str())
                    .to_string(),
                price,
            })
        })
        .collect()
}

/// Coatings offered for both eyes, priced at the rounded mean of the two
/// per-eye prices. Codes available for only one eye are dropped; a pair of
/// lenses needs the coating on both. Order follows the right eye's list.
pub fn averaged_coatings(right: &EyeOutcome, left: &EyeOutcome) -> Vec<Coating> {
    let right_list = available_coatings(right);
    let left_list = available_coatings(left);
    right_list
        .into_iter()
        .filter_map(|coating| {
            left_list
                .iter()
                .find(|candidate| candidate.code == coating.code)
                .map(|candidate| Coating {
                    price: mean_rounded(coating.price, candidate.price),
                    ..coating
                })
        })
        .collect()
}

/// Arithmetic mean rounded half-up to the nearest currency unit.
fn mean_rounded(a: u32, b: u32) -> u32 {
    ((f64::from(a) + f64::from(b)) / 2.0).round() as u32
}
