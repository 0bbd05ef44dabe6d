use serde::{Deserialize, Serialize};

/// Effective prescription values for one eye.
///
/// Sphere and cylinder are diopters on a 0.25 step grid; axis is whole
/// degrees in `[0, 180]`. A zero field means "no correction", which by the
/// input policy is indistinguishable from an unset form field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rx {
    /// Spherical power in diopters.
    pub sph: f64,
    /// Cylindrical power in diopters.
    pub cyl: f64,
    /// Cylinder axis in degrees.
    pub axis: u16,
}

impl Rx {
    /// Creates a prescription from raw component values.
    pub fn new(sph: f64, cyl: f64, axis: u16) -> Self {
        Self { sph, cyl, axis }
    }

    /// Returns true when both sphere and cylinder are zero.
    pub fn is_plano(&self) -> bool {
        self.sph == 0.0 && self.cyl == 0.0
    }
}

/// Bifocal/progressive prescription carrying distance and near components.
///
/// Invariant: NV cylinder and axis always mirror DV, and
/// `add == nv.sph - dv.sph`. The constructors maintain both; either the
/// ADD power or the NV sphere may drive the other.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AddRx {
    /// Distance vision component.
    pub dv: Rx,
    /// Near vision component.
    pub nv: Rx,
    /// Addition power in diopters.
    pub add: f64,
}

impl AddRx {
    /// Builds the near component from the distance component and ADD power.
    pub fn from_distance(dv: Rx, add: f64) -> Self {
        let nv = Rx::new(dv.sph + add, dv.cyl, dv.axis);
        Self { dv, nv, add }
    }

    /// Derives the ADD power from an explicitly entered NV sphere.
    pub fn from_near(dv: Rx, nv_sph: f64) -> Self {
        let nv = Rx::new(nv_sph, dv.cyl, dv.axis);
        Self {
            dv,
            nv,
            add: nv_sph - dv.sph,
        }
    }
}

/// Per-eye prescription, tagged by shape.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EyePrescription {
    /// Single vision: one set of SPH/CYL/AXIS values.
    Single(Rx),
    /// Bifocal or progressive: distance plus near components.
    AddPower(AddRx),
}

impl EyePrescription {
    /// Returns the values the range matcher consumes: the distance
    /// component for add-power shapes, the plain values otherwise.
    pub fn distance_rx(&self) -> Rx {
        match self {
            EyePrescription::Single(rx) => *rx,
            EyePrescription::AddPower(add) => add.dv,
        }
    }
}

/// Prescriptions for both eyes of one order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PrescriptionPair {
    /// Right eye (OD).
    pub right: EyePrescription,
    /// Left eye (OS).
    pub left: EyePrescription,
}

/// Lens power type selected in the configurator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PowerType {
    /// Single vision lenses.
    WithPower,
    /// Bifocal lenses with a reading segment.
    Bifocal,
    /// Progressive lenses.
    Progressive,
}

impl PowerType {
    /// Parses the wire string used by configurator front ends. Unknown
    /// values fall back to single vision.
    pub fn from_wire(raw: &str) -> Self {
        match raw {
            "bifocal" => PowerType::Bifocal,
            "progressive" => PowerType::Progressive,
            _ => PowerType::WithPower,
        }
    }

    /// Whether this power type carries an ADD component.
    pub fn requires_add(&self) -> bool {
        matches!(self, PowerType::Bifocal | PowerType::Progressive)
    }
}
