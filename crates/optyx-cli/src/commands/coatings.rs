use std::error::Error;

use clap::Args;
use optyx_match::{
    available_coatings, averaged_coatings, match_lens_styles, LensStyleOutcome, MatchOutcome,
};
use serde_json::{json, Value};

use crate::commands::PrescriptionArgs;

#[derive(Args, Debug)]
pub struct CoatingsArgs {
    #[command(flatten)]
    pub prescription: PrescriptionArgs,
}

fn coating_summary(outcome: &MatchOutcome) -> Value {
    json!({
        "right_eye": available_coatings(&outcome.right_eye),
        "left_eye": available_coatings(&outcome.left_eye),
        "averaged": averaged_coatings(&outcome.right_eye, &outcome.left_eye),
    })
}

pub fn run(args: &CoatingsArgs) -> Result<(), Box<dyn Error>> {
    let catalog = args.prescription.load_catalog()?;
    let pair = args.prescription.pair();
    let styles = match_lens_styles(&catalog, &pair, args.prescription.power_type());

    let payload = match &styles {
        LensStyleOutcome::SingleVision(outcome) => coating_summary(outcome),
        LensStyleOutcome::AddPower {
            bifocal,
            progressive,
        } => json!({
            "bifocal": coating_summary(bifocal),
            "progressive": coating_summary(progressive),
        }),
    };
    println!("{}", serde_json::to_string_pretty(&payload)?);
    Ok(())
}
