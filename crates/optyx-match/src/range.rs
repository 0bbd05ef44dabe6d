//! Range-string grammars and their match predicates.
//!
//! Catalog ranges are authored in four compact textual forms. Each category
//! mandates one grammar family; rows whose range string fails to parse
//! never match (catalog validation reports them). Numeric fields are read
//! as leading prefixes, so trailing annotations in authored strings are
//! tolerated the same way the legacy catalogs relied on.

use optyx_core::errors::{ErrorInfo, OptyxError};
use optyx_core::Rx;

use optyx_catalog::RangeGrammar;

fn grammar_error(raw: &str, message: &str) -> OptyxError {
    OptyxError::Range(ErrorInfo::new("range_parse", message).with_context("range", raw))
}

/// Reads the leading signed decimal number of a string, ignoring anything
/// after it.
fn leading_float(raw: &str) -> Option<f64> {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;
    if end < bytes.len() && (bytes[end] == b'+' || bytes[end] == b'-') {
        end += 1;
    }
    let mut seen_digit = false;
    let mut seen_dot = false;
    while end < bytes.len() {
        match bytes[end] {
            b'0'..=b'9' => {
                seen_digit = true;
                end += 1;
            }
            b'.' if !seen_dot => {
                seen_dot = true;
                end += 1;
            }
            _ => break,
        }
    }
    if !seen_digit {
        return None;
    }
    s[..end].parse().ok()
}

/// Reads the leading signed integer of a string.
fn leading_int(raw: &str) -> Option<i32> {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;
    if end < bytes.len() && (bytes[end] == b'+' || bytes[end] == b'-') {
        end += 1;
    }
    let digits_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    if end == digits_start {
        return None;
    }
    s[..end].parse().ok()
}

/// Finds the first `<digits>°` marker in a string and returns the digits.
fn axis_marker(raw: &str) -> Option<u16> {
    let mut run_start: Option<usize> = None;
    for (idx, ch) in raw.char_indices() {
        if ch.is_ascii_digit() {
            if run_start.is_none() {
                run_start = Some(idx);
            }
        } else if ch == '°' {
            if let Some(start) = run_start {
                return raw[start..idx].parse().ok();
            }
        } else {
            run_start = None;
        }
    }
    None
}

/// Maps a prescription axis onto the nearest of the four standard axes
/// catalog rows are authored at (45, 90, 135, 180). Zero is its own fixed
/// point; ties resolve to the smaller standard axis.
pub fn standardize_axis(axis: u16) -> u16 {
    if axis == 0 {
        return 0;
    }
    const STANDARDS: [u16; 4] = [45, 90, 135, 180];
    let mut best = STANDARDS[0];
    for candidate in STANDARDS.into_iter().skip(1) {
        let current = (i32::from(candidate) - i32::from(axis)).abs();
        let previous = (i32::from(best) - i32::from(axis)).abs();
        if current < previous {
            best = candidate;
        }
    }
    best
}

/// Band-family range: plain sphere, sphere band with cylinder tier, or
/// sphere/ADD form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BandRange {
    /// `"<target> sph"`: a single sphere value with no cylinder.
    Sph {
        /// Sphere the row is centered on; matches within ±1.0 D.
        target: f64,
    },
    /// `"<maxSph> to <cylBand>"`: sphere from zero to the bound, cylinder
    /// magnitude banded into tiers.
    Band {
        /// Sphere bound; its sign selects the minus or plus direction.
        max_sph: f64,
        /// Cylinder tier key; its magnitude selects the covered band.
        cyl_band: f64,
    },
    /// `"<base>/+ ADD"`: distance sphere window for ADD-power lenses.
    Add {
        /// Base sphere bound of the window.
        base: f64,
    },
}

impl BandRange {
    /// Parses a band-family range string. The three sub-forms are tried in
    /// the legacy dispatch order: `sph` marker first, then `to`, then
    /// `ADD`.
    pub fn parse(raw: &str) -> Result<Self, OptyxError> {
        let trimmed = raw.trim();
        if trimmed.contains("sph") {
            let target = leading_float(trimmed)
                .ok_or_else(|| grammar_error(raw, "no sphere value before \"sph\""))?;
            return Ok(BandRange::Sph { target });
        }
        if trimmed.contains("to") {
            let parts: Vec<&str> = trimmed.split("to").collect();
            if parts.len() == 2 {
                let max_sph = leading_float(parts[0].trim())
                    .ok_or_else(|| grammar_error(raw, "unreadable sphere bound"))?;
                let cyl_band = leading_float(parts[1].trim())
                    .ok_or_else(|| grammar_error(raw, "unreadable cylinder band"))?;
                return Ok(BandRange::Band { max_sph, cyl_band });
            }
        }
        if trimmed.contains("ADD") {
            let base = leading_float(trimmed)
                .ok_or_else(|| grammar_error(raw, "no base value before ADD marker"))?;
            return Ok(BandRange::Add { base });
        }
        Err(grammar_error(raw, "unrecognized band range"))
    }

    /// Whether the given sphere/cylinder pair falls inside this range.
    /// Axis never participates in band-family matching.
    pub fn matches(&self, sph: f64, cyl: f64) -> bool {
        match self {
            BandRange::Sph { target } => (sph - target).abs() <= 1.0 && cyl == 0.0,
            BandRange::Band { max_sph, cyl_band } => {
                let sph_in_range = if *max_sph < 0.0 {
                    sph <= 0.0 && sph >= *max_sph
                } else {
                    sph >= 0.0 && sph <= *max_sph
                };
                if !sph_in_range {
                    return false;
                }
                // No cylinder: only the smallest band row takes the order.
                if cyl == 0.0 {
                    return cyl_band.abs() == 2.0;
                }
                let cyl_abs = cyl.abs();
                let band_abs = cyl_band.abs();
                if band_abs == 2.0 {
                    (0.25..=2.0).contains(&cyl_abs)
                } else if band_abs == 4.0 {
                    (2.25..=4.0).contains(&cyl_abs)
                } else if band_abs == 6.0 {
                    (4.25..=6.0).contains(&cyl_abs)
                } else {
                    (cyl_abs - band_abs).abs() <= 0.5
                }
            }
            BandRange::Add { base } => {
                if cyl != 0.0 {
                    return false;
                }
                if *base > 0.0 {
                    let lower = if *base > 3.0 { base - 1.0 + 0.25 } else { 0.0 };
                    sph >= lower && sph <= *base
                } else if *base < 0.0 {
                    let upper = if *base < -2.0 { base + 1.0 - 0.25 } else { 0.0 };
                    sph >= *base && sph <= upper
                } else {
                    // A zero base bounds an empty window; validation flags
                    // such rows.
                    false
                }
            }
        }
    }
}

/// `"<cyl>, <axis>°"` range for prescriptions whose sphere is near zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CylAxisRange {
    /// Cylinder the row is centered on; matches within ±1.0 D.
    pub cyl: f64,
    /// Standard axis the row is authored at.
    pub axis: u16,
}

impl CylAxisRange {
    /// Parses a cylinder/axis pair range string.
    pub fn parse(raw: &str) -> Result<Self, OptyxError> {
        let parts: Vec<&str> = raw.split(',').collect();
        if parts.len() < 2 {
            return Err(grammar_error(raw, "missing comma separator"));
        }
        let cyl = leading_float(parts[0])
            .ok_or_else(|| grammar_error(raw, "unreadable cylinder value"))?;
        let axis_text = parts[1].trim().replacen('°', "", 1);
        let axis = leading_int(&axis_text)
            .and_then(|value| u16::try_from(value).ok())
            .ok_or_else(|| grammar_error(raw, "unreadable axis value"))?;
        Ok(Self { cyl, axis })
    }

    /// Whether the prescription sits on this row: sphere near zero,
    /// cylinder within tolerance, standardized axis equal.
    pub fn matches(&self, rx: Rx) -> bool {
        rx.sph.abs() <= 1.0
            && (rx.cyl - self.cyl).abs() <= 1.0
            && standardize_axis(rx.axis) == self.axis
    }
}

/// `"<sph>/<cyl> <axis>°"` compound range (commas tolerated and ignored).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompoundRange {
    /// Sphere the row is authored at.
    pub sph: f64,
    /// Cylinder the row is authored at.
    pub cyl: f64,
    /// Axis constraint; `None` when the row encodes no axis (a literal
    /// `0°` is the same as omitting it).
    pub axis: Option<u16>,
}

impl CompoundRange {
    /// Parses a compound range string.
    pub fn parse(raw: &str) -> Result<Self, OptyxError> {
        let clean = raw.replace(',', "");
        let parts: Vec<&str> = clean.split('/').collect();
        if parts.len() < 2 {
            return Err(grammar_error(raw, "missing '/' separator"));
        }
        let sph = leading_float(parts[0])
            .ok_or_else(|| grammar_error(raw, "unreadable sphere value"))?;
        let cyl_part = parts[1].trim();
        let cyl = leading_float(cyl_part)
            .ok_or_else(|| grammar_error(raw, "unreadable cylinder value"))?;
        let axis = axis_marker(cyl_part).filter(|value| *value != 0);
        Ok(Self { sph, cyl, axis })
    }

    /// Whether the prescription matches by whole-diopter category and
    /// sign, plus the exact standardized axis when the row carries one.
    pub fn matches(&self, rx: Rx) -> bool {
        let sph_ok = whole_diopter_match(rx.sph, self.sph);
        let cyl_ok = whole_diopter_match(rx.cyl, self.cyl);
        match self.axis {
            None => sph_ok && cyl_ok,
            Some(axis) => sph_ok && cyl_ok && standardize_axis(rx.axis) == axis,
        }
    }
}

/// Compares a prescription value and a range value by rounding magnitudes
/// to whole-diopter categories; values below half a diopter are
/// sign-agnostic.
fn whole_diopter_match(value: f64, range_value: f64) -> bool {
    let same_category = value.abs().round() == range_value.abs().round();
    let sign_ok = (value >= 0.0) == (range_value >= 0.0) || value.abs() < 0.5;
    same_category && sign_ok
}

/// A range string parsed with the grammar its category mandates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RangeSpec {
    /// Band-family range.
    Band(BandRange),
    /// Cylinder/axis pair range.
    CylAxis(CylAxisRange),
    /// Compound sphere/cylinder range.
    Compound(CompoundRange),
}

impl RangeSpec {
    /// Parses a range string under the given grammar family.
    pub fn parse(grammar: RangeGrammar, raw: &str) -> Result<Self, OptyxError> {
        match grammar {
            RangeGrammar::Band => BandRange::parse(raw).map(RangeSpec::Band),
            RangeGrammar::CylAxis => CylAxisRange::parse(raw).map(RangeSpec::CylAxis),
            RangeGrammar::Compound => CompoundRange::parse(raw).map(RangeSpec::Compound),
        }
    }
}
