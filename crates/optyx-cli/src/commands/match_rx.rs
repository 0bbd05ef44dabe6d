use std::error::Error;

use clap::Args;
use optyx_match::match_lens_styles;

use crate::commands::PrescriptionArgs;

#[derive(Args, Debug)]
pub struct MatchArgs {
    #[command(flatten)]
    pub prescription: PrescriptionArgs,
}

pub fn run(args: &MatchArgs) -> Result<(), Box<dyn Error>> {
    let catalog = args.prescription.load_catalog()?;
    let pair = args.prescription.pair();
    let outcome = match_lens_styles(&catalog, &pair, args.prescription.power_type());
    println!("{}", serde_json::to_string_pretty(&outcome)?);
    Ok(())
}
