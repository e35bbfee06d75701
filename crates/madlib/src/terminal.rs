//! Terminal surface - prints feedback as the session produces it

use colored::Colorize;
use madlib_core::{FieldHandle, FieldSpec, FieldState, MemorySurface, Outcome, Surface};

/// Surface that keeps its elements in memory and echoes feedback to stdout
///
/// With `echo` off nothing is printed, which JSON output relies on.
pub struct TerminalSurface {
    inner: MemorySurface,
    echo: bool,
}

impl TerminalSurface {
    pub fn new(echo: bool) -> Self {
        Self {
            inner: MemorySurface::new(),
            echo,
        }
    }

    pub fn inner(&self) -> &MemorySurface {
        &self.inner
    }

    pub fn inner_mut(&mut self) -> &mut MemorySurface {
        &mut self.inner
    }
}

impl Surface for TerminalSurface {
    fn append_field(&mut self, spec: FieldSpec<'_>) -> FieldHandle {
        self.inner.append_field(spec)
    }

    fn field_present(&self, handle: FieldHandle) -> bool {
        self.inner.field_present(handle)
    }

    fn input_value(&self, handle: FieldHandle) -> Option<String> {
        self.inner.input_value(handle)
    }

    fn set_feedback(&mut self, handle: FieldHandle, state: FieldState, message: &str) {
        self.inner.set_feedback(handle, state, message);

        if self.echo && state == FieldState::Invalid {
            let label = self
                .inner
                .field_at(handle)
                .map(|f| f.label.as_str())
                .unwrap_or_default();
            println!("{} {}: {}", "✗".red().bold(), label, message.red());
        }
    }

    fn replace_result(&mut self, paragraphs: &[String]) {
        self.inner.replace_result(paragraphs);
    }

    fn acknowledge(&mut self, outcome: Outcome) {
        self.inner.acknowledge(outcome);
        if !self.echo {
            return;
        }

        match outcome {
            Outcome::Success => {
                println!("{} {}", "✓".green().bold(), outcome.message());
                for paragraph in self.inner.result() {
                    println!("\n{}", paragraph);
                }
            }
            Outcome::Failure => {
                println!("{} {}", "!".yellow().bold(), outcome.message().yellow());
            }
        }
    }
}
