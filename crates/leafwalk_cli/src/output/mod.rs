//! Output formatting module

mod json;
mod text;

use miette::Result;

use crate::config::OutputFormat;

pub fn output_leaves(leaves: &[String], format: OutputFormat, count: bool) -> Result<()> {
    if count {
        println!("{}", leaves.len());
        return Ok(());
    }

    match format {
        OutputFormat::Json => json::output_json(leaves)?,
        OutputFormat::Text => text::output_text(leaves),
    }

    Ok(())
}
