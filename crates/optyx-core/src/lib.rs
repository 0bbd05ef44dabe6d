#![deny(missing_docs)]
#![doc = "Core prescription types, input policy and errors for the optyx matching engine."]

pub mod errors;
pub mod input;
mod types;

pub use errors::{ErrorInfo, OptyxError};
pub use input::{axis_or_zero, float_or_zero, RawAddRx, RawRx};
pub use types::{AddRx, EyePrescription, PowerType, PrescriptionPair, Rx};
