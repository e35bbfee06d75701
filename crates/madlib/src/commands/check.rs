//! Check command - validate a madlib file against the madlib contract

use crate::output::{print_json, print_text};
use anyhow::{Result, bail};
use colored::Colorize;
use madlib_core::{MadLib, Segment};
use std::path::PathBuf;

/// Ids of fillers that no fillable segment uses
fn unused_fillers(madlib: &MadLib) -> Vec<&str> {
    madlib
        .fillers()
        .iter()
        .filter(|filler| {
            !madlib
                .text()
                .iter()
                .any(|s| matches!(s, Segment::Fillable { id } if *id == filler.id))
        })
        .map(|filler| filler.id.as_str())
        .collect()
}

/// Load a madlib file and report whether it holds together
///
/// # Arguments
///
/// * `file` - Madlib TOML file
/// * `json` - Output as JSON if true
///
/// # Exit Code
///
/// Exits 1 when the file cannot be loaded. Unused fillers are warnings only.
pub fn run(file: PathBuf, json: bool) -> Result<()> {
    let madlib = match MadLib::from_file(&file) {
        Ok(madlib) => madlib,
        Err(e) => {
            if json {
                print_json(&serde_json::json!({
                    "schema_version": "1.0",
                    "file": file.display().to_string(),
                    "valid": false,
                    "error": e.to_string(),
                }))?;
            } else {
                print_text(&format!("{} {}", "✗".red().bold(), file.display()))?;
            }
            bail!(e);
        }
    };

    let unused = unused_fillers(&madlib);
    for id in &unused {
        tracing::warn!(filler = %id, "filler is never used in the text");
    }

    if json {
        return print_json(&serde_json::json!({
            "schema_version": "1.0",
            "file": file.display().to_string(),
            "valid": true,
            "fillers": madlib.fillers().len(),
            "segments": madlib.text().len(),
            "unused_fillers": unused,
        }));
    }

    print_text(&format!(
        "{} {} is a valid madlib ({} fillers, {} segments)",
        "✓".green().bold(),
        file.display(),
        madlib.fillers().len(),
        madlib.text().len()
    ))?;
    for id in &unused {
        print_text(&format!(
            "  {} filler '{}' is never used in the text",
            "!".yellow(),
            id
        ))?;
    }

    Ok(())
}
