//! List command - show the builtin madlibs

use crate::output::{print_json, print_text};
use anyhow::Result;
use colored::Colorize;
use madlib_core::Variant;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct VariantInfo {
    name: &'static str,
    fillers: usize,
    segments: usize,
}

/// List builtin madlibs
///
/// # Arguments
///
/// * `json` - Output as JSON if true
pub fn run(json: bool) -> Result<()> {
    let variants = Variant::ALL
        .iter()
        .map(|variant| -> Result<VariantInfo> {
            let madlib = variant.load()?;
            Ok(VariantInfo {
                name: variant.name(),
                fillers: madlib.fillers().len(),
                segments: madlib.text().len(),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    if json {
        return print_json(&serde_json::json!({
            "schema_version": "1.0",
            "variants": variants,
        }));
    }

    for info in &variants {
        print_text(&format!(
            "{} {} ({} fillers, {} segments)",
            "•".cyan(),
            info.name.bold(),
            info.fillers,
            info.segments
        ))?;
    }

    Ok(())
}
