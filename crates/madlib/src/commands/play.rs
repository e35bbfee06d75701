//! Play command - fill in a madlib at the prompt

use crate::cli::SourceArgs;
use crate::context::Context;
use crate::terminal::TerminalSurface;
use anyhow::{Result, bail};
use colored::Colorize;
use madlib_core::{Filler, GenerateOutcome, Session};
use std::io::{self, BufRead, Write};

/// Prompt for fields until generation succeeds
///
/// The first round asks for every field. After a failed attempt only the
/// invalid fields are asked again. Returns `None` when input runs out first.
pub fn play<R: BufRead, W: Write>(
    session: &mut Session<TerminalSurface>,
    input: &mut R,
    out: &mut W,
) -> Result<Option<GenerateOutcome>> {
    let mut pending: Vec<Filler> = session.madlib().fillers().to_vec();

    loop {
        for filler in &pending {
            write!(
                out,
                "{} {}: ",
                filler.friendly_text.bold(),
                format!("(e.g. {})", filler.example_text).dimmed()
            )?;
            out.flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                writeln!(out)?;
                return Ok(None);
            }
            let value = line.trim_end_matches(['\n', '\r']);

            let input_id = filler.input_id();
            if !session.surface_mut().inner_mut().set_value(&input_id, value) {
                bail!("Missing control {}", input_id);
            }
        }

        let generated = session.generate()?;
        if generated.outcome.is_success() {
            return Ok(Some(generated));
        }

        pending = generated
            .report
            .invalid_ids()
            .into_iter()
            .filter_map(|id| session.madlib().filler(id))
            .cloned()
            .collect();
        tracing::debug!(remaining = pending.len(), "asking again for invalid fields");
    }
}

/// Run an interactive session on stdin/stdout
///
/// # Exit Code
///
/// Exits 1 if stdin closes before every field is valid.
pub fn run(source: SourceArgs, verbose: bool) -> Result<()> {
    let ctx = Context::new(&source, verbose)?;
    if ctx.verbose {
        println!("{} Playing {}\n", "→".cyan(), ctx.source);
    }

    let mut session = Session::start(ctx.madlib, TerminalSurface::new(true));
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();

    match play(&mut session, &mut input, &mut out)? {
        Some(_) => Ok(()),
        None => bail!("Input ended before the madlib was complete"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use madlib_core::MadLib;
    use madlib_testkit::fixtures::ALL_TYPES_MADLIB;
    use std::io::Cursor;

    fn session() -> Session<TerminalSurface> {
        let madlib = MadLib::from_toml_str(ALL_TYPES_MADLIB).unwrap();
        Session::start(madlib, TerminalSurface::new(false))
    }

    #[test]
    fn test_play_succeeds_first_round() {
        let mut session = session();
        let mut input = Cursor::new("lamp\nAda\nhappy\n'Hi'\n");
        let mut out = Vec::new();

        let generated = play(&mut session, &mut input, &mut out).unwrap().unwrap();
        assert!(generated.outcome.is_success());
        assert_eq!(session.surface().inner().acknowledgments().len(), 1);
    }

    #[test]
    fn test_play_asks_only_for_invalid_fields() {
        let mut session = session();
        // round one: thing and mood are wrong; round two fixes both
        let mut input = Cursor::new("two words\nAda\nsad\n'Hi'\nlamp\nhappy\n");
        let mut out = Vec::new();

        let generated = play(&mut session, &mut input, &mut out).unwrap().unwrap();
        assert!(generated.outcome.is_success());

        let prompts = String::from_utf8(out).unwrap();
        assert_eq!(prompts.matches("A thing").count(), 2);
        assert_eq!(prompts.matches("A name").count(), 1);
        assert_eq!(prompts.matches("A mood ending in y").count(), 2);
        assert_eq!(prompts.matches("A saying").count(), 1);
    }

    #[test]
    fn test_play_stops_at_end_of_input() {
        let mut session = session();
        let mut input = Cursor::new("lamp\n");
        let mut out = Vec::new();

        let generated = play(&mut session, &mut input, &mut out).unwrap();
        assert!(generated.is_none());
        assert!(session.surface().inner().acknowledgments().is_empty());
    }
}
