//! Fill command - generate a madlib from prepared answers

use crate::cli::SourceArgs;
use crate::context::Context;
use crate::output::print_json;
use crate::terminal::TerminalSurface;
use anyhow::{Context as _, Result, bail};
use madlib_core::Session;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Read a flat `id = "value"` TOML table
fn load_answers(path: &Path) -> Result<BTreeMap<String, String>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read answers file {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Answers file {} must map ids to strings", path.display()))
}

/// Split an `ID=VALUE` argument at the first `=`
fn parse_assignment(entry: &str) -> Result<(String, String)> {
    match entry.split_once('=') {
        Some((id, value)) if !id.trim().is_empty() => {
            Ok((id.trim().to_string(), value.to_string()))
        }
        _ => bail!("Invalid --set '{}', expected ID=VALUE", entry),
    }
}

/// Fill in every field and generate once
///
/// # Arguments
///
/// * `source` - Which madlib to fill
/// * `answers` - Optional answers file
/// * `set` - `ID=VALUE` overrides applied after the answers file
/// * `json` - Output as JSON if true
/// * `verbose` - Enable verbose output if true
///
/// # Exit Code
///
/// Exits 1 when any field fails validation.
pub fn run(
    source: SourceArgs,
    answers: Option<PathBuf>,
    set: Vec<String>,
    json: bool,
    verbose: bool,
) -> Result<()> {
    let ctx = Context::new(&source, verbose)?;
    let json = ctx.json_output(json);

    let mut values = match answers {
        Some(path) => load_answers(&path)?,
        None => BTreeMap::new(),
    };
    for entry in &set {
        let (id, value) = parse_assignment(entry)?;
        values.insert(id, value);
    }

    if let Some(unknown) = values.keys().find(|id| ctx.madlib.filler(id).is_none()) {
        bail!("Unknown filler '{}' (not in {})", unknown, ctx.source);
    }

    let mut session = Session::start(ctx.madlib.clone(), TerminalSurface::new(!json));
    for filler in ctx.madlib.fillers() {
        if let Some(value) = values.get(&filler.id) {
            session
                .surface_mut()
                .inner_mut()
                .set_value(&filler.input_id(), value.as_str());
        }
    }

    let generated = session.generate()?;

    if json {
        print_json(&serde_json::json!({
            "schema_version": "1.0",
            "source": ctx.source.to_string(),
            "outcome": generated.outcome,
            "acknowledgment": generated.outcome.message(),
            "fields": generated.report.verdicts(),
            "paragraphs": generated.paragraphs,
        }))?;
    }

    if !generated.outcome.is_success() {
        bail!(
            "{} field(s) failed validation",
            generated.report.invalid_ids().len()
        );
    }

    Ok(())
}
