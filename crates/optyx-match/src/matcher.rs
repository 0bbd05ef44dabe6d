//! The category walk: which catalog tables are tried, in which order.

use optyx_catalog::{Catalog, CategoryId, RangeRow};
use optyx_core::{PowerType, Rx};

use crate::range::{BandRange, CompoundRange, CylAxisRange};
use crate::transpose::transpose;

/// A catalog row satisfied by a prescription.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryMatch<'a> {
    /// Category slot the row came from.
    pub category: CategoryId,
    /// The satisfied row.
    pub row: &'a RangeRow,
}

/// Finds the first catalog row the prescription satisfies, walking the
/// categories in the order mandated by the power type. When the walk
/// exhausts without a hit and the prescription carries cylinder, the
/// transposed notation gets one full retry. No further fallbacks exist;
/// `None` means no range covers this prescription.
pub fn find_best_match<'a>(
    rx: Rx,
    catalog: &'a Catalog,
    power: PowerType,
) -> Option<CategoryMatch<'a>> {
    if let Some(found) = try_categories(rx, catalog, power) {
        return Some(found);
    }
    transpose(rx).and_then(|flipped| try_categories(flipped, catalog, power))
}

fn try_categories<'a>(
    rx: Rx,
    catalog: &'a Catalog,
    power: PowerType,
) -> Option<CategoryMatch<'a>> {
    match power {
        PowerType::Bifocal => try_add_power(
            rx,
            catalog,
            CategoryId::CylKt,
            CategoryId::CompKt,
            CategoryId::BifocalKt,
        ),
        PowerType::Progressive => try_add_power(
            rx,
            catalog,
            CategoryId::ProgressiveCyl,
            CategoryId::ProgressiveComp,
            CategoryId::ProgressiveSph,
        ),
        PowerType::WithPower => try_single_vision(rx, catalog),
    }
}

/// Bifocal and progressive walks share one shape; only the category slots
/// differ. Cylinder with a near-zero sphere goes to the cylinder table,
/// cylinder with real sphere to the compound table, and the sphere/ADD
/// table is always tried last.
fn try_add_power<'a>(
    rx: Rx,
    catalog: &'a Catalog,
    cyl_slot: CategoryId,
    comp_slot: CategoryId,
    sph_slot: CategoryId,
) -> Option<CategoryMatch<'a>> {
    if rx.sph.abs() <= 1.0 && rx.cyl != 0.0 {
        if let Some(found) = find_cyl_axis(catalog, cyl_slot, rx) {
            return Some(found);
        }
    }
    if rx.sph.abs() > 1.0 && rx.cyl != 0.0 {
        if let Some(found) = find_compound(catalog, comp_slot, rx) {
            return Some(found);
        }
    }
    find_band(catalog, sph_slot, rx)
}

fn try_single_vision<'a>(rx: Rx, catalog: &'a Catalog) -> Option<CategoryMatch<'a>> {
    // Plano orders price off the first minus table row regardless of the
    // row's declared range.
    if rx.is_plano() {
        if let Some(row) = catalog.rows(CategoryId::SvMinusComp).first() {
            return Some(CategoryMatch {
                category: CategoryId::SvMinusComp,
                row,
            });
        }
    }
    let crossed = (rx.sph > 0.0 && rx.cyl < 0.0) || (rx.sph < 0.0 && rx.cyl > 0.0);
    if crossed {
        if let Some(found) = find_band(catalog, CategoryId::SvCrossComp, rx) {
            return Some(found);
        }
    }
    if rx.sph < 0.0 || (rx.sph == 0.0 && rx.cyl < 0.0) {
        if let Some(found) = find_band(catalog, CategoryId::SvMinusComp, rx) {
            return Some(found);
        }
    }
    if rx.sph > 0.0 || (rx.sph == 0.0 && rx.cyl > 0.0) {
        if let Some(found) = find_band(catalog, CategoryId::SvPlusComp, rx) {
            return Some(found);
        }
    }
    if rx.cyl != 0.0 && rx.axis != 0 {
        if let Some(found) = find_cyl_axis(catalog, CategoryId::CylKt, rx) {
            return Some(found);
        }
    }
    if rx.cyl != 0.0 {
        if let Some(found) = find_compound(catalog, CategoryId::CompKt, rx) {
            return Some(found);
        }
    }
    None
}

fn find_band<'a>(catalog: &'a Catalog, slot: CategoryId, rx: Rx) -> Option<CategoryMatch<'a>> {
    catalog
        .rows(slot)
        .iter()
        .find(|row| {
            BandRange::parse(&row.range).map_or(false, |spec| spec.matches(rx.sph, rx.cyl))
        })
        .map(|row| CategoryMatch {
            category: slot,
            row,
        })
}

fn find_cyl_axis<'a>(catalog: &'a Catalog, slot: CategoryId, rx: Rx) -> Option<CategoryMatch<'a>> {
    catalog
        .rows(slot)
        .iter()
        .find(|row| CylAxisRange::parse(&row.range).map_or(false, |spec| spec.matches(rx)))
        .map(|row| CategoryMatch {
            category: slot,
            row,
        })
}

fn find_compound<'a>(catalog: &'a Catalog, slot: CategoryId, rx: Rx) -> Option<CategoryMatch<'a>> {
    catalog
        .rows(slot)
        .iter()
        .find(|row| CompoundRange::parse(&row.range).map_or(false, |spec| spec.matches(rx)))
        .map(|row| CategoryMatch {
            category: slot,
            row,
        })
}
