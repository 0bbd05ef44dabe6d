//! Normalization of as-entered form values into effective prescriptions.
//!
//! Configurator forms deliver free text. The matching engine only consumes
//! numbers, so every field passes through one named policy:
//! empty or unparseable input becomes zero. An unset sphere therefore
//! behaves exactly like a measured zero sphere; callers that want to reject
//! incomplete prescriptions must validate before normalizing.

use serde::{Deserialize, Serialize};

use crate::types::{AddRx, Rx};

/// Parses a diopter field, coercing empty or malformed input to zero.
pub fn float_or_zero(raw: &str) -> f64 {
    raw.trim().parse::<f64>().unwrap_or(0.0)
}

/// Parses an axis field, coercing empty, malformed or negative input to
/// zero. Fractional degrees truncate toward zero.
pub fn axis_or_zero(raw: &str) -> u16 {
    let value = raw.trim().parse::<f64>().unwrap_or(0.0);
    if value.is_finite() && value >= 0.0 {
        value as u16
    } else {
        0
    }
}

/// One eye's form fields as entered, before normalization.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RawRx {
    /// Sphere field text.
    #[serde(default)]
    pub sph: String,
    /// Cylinder field text.
    #[serde(default)]
    pub cyl: String,
    /// Axis field text.
    #[serde(default)]
    pub axis: String,
}

impl RawRx {
    /// Applies the zero-coercion policy to every field.
    pub fn normalize_or_zero(&self) -> Rx {
        Rx::new(
            float_or_zero(&self.sph),
            float_or_zero(&self.cyl),
            axis_or_zero(&self.axis),
        )
    }
}

/// Bifocal/progressive form fields as entered.
///
/// Only the DV block and the ADD/NV-sphere fields are free: NV cylinder
/// and axis are mirrored from DV during normalization, never read from the
/// form.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RawAddRx {
    /// Distance vision fields.
    #[serde(default)]
    pub dv: RawRx,
    /// Near vision sphere field; empty means "derive from DV + ADD".
    #[serde(default)]
    pub nv_sph: String,
    /// Addition power field.
    #[serde(default)]
    pub add: String,
}

impl RawAddRx {
    /// Normalizes the form into a consistent [`AddRx`].
    ///
    /// An explicitly entered NV sphere wins over the ADD field, matching
    /// the last-edited-wins behavior of the entry form.
    pub fn normalize_or_zero(&self) -> AddRx {
        let dv = self.dv.normalize_or_zero();
        if self.nv_sph.trim().is_empty() {
            AddRx::from_distance(dv, float_or_zero(&self.add))
        } else {
            AddRx::from_near(dv, float_or_zero(&self.nv_sph))
        }
    }
}
