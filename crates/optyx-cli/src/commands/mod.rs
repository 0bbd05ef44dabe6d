pub mod coatings;
pub mod match_rx;
pub mod validate;

use std::error::Error;
use std::path::PathBuf;

use clap::Args;
use optyx_catalog::{load_catalog, Catalog};
use optyx_core::{EyePrescription, PowerType, PrescriptionPair, RawAddRx, RawRx};

/// Catalog and prescription flags shared by the match and coatings
/// commands. Eye fields are free text and run through the standard
/// empty-or-invalid-becomes-zero policy.
#[derive(Args, Debug)]
pub struct PrescriptionArgs {
    /// Catalog YAML file to match against.
    #[arg(long)]
    pub catalog: PathBuf,
    /// Power type: with-power, bifocal or progressive.
    #[arg(long, default_value = "with-power")]
    pub power_type: String,
    /// Right eye sphere.
    #[arg(long, default_value = "")]
    pub right_sph: String,
    /// Right eye cylinder.
    #[arg(long, default_value = "")]
    pub right_cyl: String,
    /// Right eye axis in degrees.
    #[arg(long, default_value = "")]
    pub right_axis: String,
    /// Right eye ADD power (bifocal/progressive only).
    #[arg(long, default_value = "")]
    pub right_add: String,
    /// Left eye sphere.
    #[arg(long, default_value = "")]
    pub left_sph: String,
    /// Left eye cylinder.
    #[arg(long, default_value = "")]
    pub left_cyl: String,
    /// Left eye axis in degrees.
    #[arg(long, default_value = "")]
    pub left_axis: String,
    /// Left eye ADD power (bifocal/progressive only).
    #[arg(long, default_value = "")]
    pub left_add: String,
}

impl PrescriptionArgs {
    pub fn load_catalog(&self) -> Result<Catalog, Box<dyn Error>> {
        load_catalog(&self.catalog).map_err(|err| Box::new(err) as Box<dyn Error>)
    }

    pub fn power_type(&self) -> PowerType {
        PowerType::from_wire(&self.power_type)
    }

    pub fn pair(&self) -> PrescriptionPair {
        let power = self.power_type();
        PrescriptionPair {
            right: eye(
                power,
                &self.right_sph,
                &self.right_cyl,
                &self.right_axis,
                &self.right_add,
            ),
            left: eye(
                power,
                &self.left_sph,
                &self.left_cyl,
                &self.left_axis,
                &self.left_add,
            ),
        }
    }
}

fn eye(power: PowerType, sph: &str, cyl: &str, axis: &str, add: &str) -> EyePrescription {
    let raw = RawRx {
        sph: sph.to_string(),
        cyl: cyl.to_string(),
        axis: axis.to_string(),
    };
    if power.requires_add() {
        let raw_add = RawAddRx {
            dv: raw,
            nv_sph: String::new(),
            add: add.to_string(),
        };
        EyePrescription::AddPower(raw_add.normalize_or_zero())
    } else {
        EyePrescription::Single(raw.normalize_or_zero())
    }
}
