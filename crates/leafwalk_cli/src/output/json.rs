//! JSON output formatter

use miette::{IntoDiagnostic, Result};

pub fn output_json(leaves: &[String]) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(leaves).into_diagnostic()?);
    Ok(())
}
