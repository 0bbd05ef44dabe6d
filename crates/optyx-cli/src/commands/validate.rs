use std::error::Error;
use std::path::PathBuf;

use clap::Args;
use optyx_catalog::{load_catalog, provenance};
use optyx_match::validate_catalog;
use serde_json::json;

#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Catalog YAML file to check.
    #[arg(long)]
    pub catalog: PathBuf,
}

pub fn run(args: &ValidateArgs) -> Result<(), Box<dyn Error>> {
    let catalog = load_catalog(&args.catalog).map_err(|err| Box::new(err) as Box<dyn Error>)?;
    let provenance = provenance(&catalog).map_err(|err| Box::new(err) as Box<dyn Error>)?;
    let issues = validate_catalog(&catalog);
    let issue_count = issues.len();

    let payload = json!({
        "provenance": provenance,
        "rows": catalog.row_count(),
        "issues": issues,
    });
    println!("{}", serde_json::to_string_pretty(&payload)?);

    if issue_count == 0 {
        Ok(())
    } else {
        Err(format!("catalog has {issue_count} authoring issue(s)").into())
    }
}
