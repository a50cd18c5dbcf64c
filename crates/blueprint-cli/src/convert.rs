//! Convert command implementation

use anyhow::Result;
use blueprint_strings::Case;
use tracing::debug;

/// Apply `case` to each input, one result per line
pub fn convert_all(case: Case, inputs: &[String]) -> Vec<String> {
    inputs.iter().map(|input| case.apply(input)).collect()
}

/// Run the convert command
pub fn run(case: Case, inputs: &[String]) -> Result<()> {
    debug!(%case, count = inputs.len(), "converting");

    for converted in convert_all(case, inputs) {
        println!("{converted}");
    }

    Ok(())
}
