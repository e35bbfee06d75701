//! Form command - render the input form for a madlib

use crate::cli::SourceArgs;
use crate::context::Context;
use crate::output::{print_json, print_text};
use anyhow::Result;
use colored::Colorize;
use madlib_core::MemorySurface;
use madlib_core::form::FormRenderer;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct FormField<'a> {
    id: &'a str,
    #[serde(rename = "type")]
    filler_type: &'a str,
    label: &'a str,
    placeholder: &'a str,
    input_id: &'a str,
    error_id: &'a str,
}

/// Show the form fields a madlib asks for
///
/// # Arguments
///
/// * `source` - Which madlib to render
/// * `json` - Output as JSON if true
/// * `verbose` - Enable verbose output if true
pub fn run(source: SourceArgs, json: bool, verbose: bool) -> Result<()> {
    let ctx = Context::new(&source, verbose)?;
    let json = ctx.json_output(json);

    let mut surface = MemorySurface::new();
    FormRenderer::render(&ctx.madlib, &mut surface);

    let fields = surface
        .fields()
        .map(|field| FormField {
            id: &field.filler_id,
            filler_type: ctx
                .madlib
                .filler(&field.filler_id)
                .map(|f| f.filler_type.as_str())
                .unwrap_or_default(),
            label: &field.label,
            placeholder: &field.placeholder,
            input_id: &field.input_id,
            error_id: &field.error_id,
        })
        .collect::<Vec<_>>();

    if json {
        return print_json(&serde_json::json!({
            "schema_version": "1.0",
            "source": ctx.source.to_string(),
            "fields": fields,
        }));
    }

    if ctx.verbose {
        print_text(&format!("{} Form for {}\n", "→".cyan(), ctx.source))?;
    }

    for field in &fields {
        print_text(&format!(
            "{} {} {}",
            "•".cyan(),
            field.label.bold(),
            format!("(e.g. {})", field.placeholder).dimmed()
        ))?;
        print_text(&format!(
            "  {} [{}] error: {}",
            field.input_id, field.filler_type, field.error_id
        ))?;
    }

    Ok(())
}
