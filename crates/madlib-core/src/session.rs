//! Controller - wires the generate action to validation and rendering

use crate::compose::ResultRenderer;
use crate::config::consts::acknowledgment;
use crate::error::Result;
use crate::form::{FieldBindings, FormRenderer};
use crate::model::MadLib;
use crate::surface::Surface;
use crate::validate::{ValidationReport, Validator};
use serde::Serialize;
use std::fmt;

/// Aggregate result of a generate attempt, as acknowledged to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Success,
    Failure,
}

impl Outcome {
    pub fn message(&self) -> &'static str {
        match self {
            Outcome::Success => acknowledgment::SUCCESS,
            Outcome::Failure => acknowledgment::FAILURE,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Everything produced by one generate attempt
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerateOutcome {
    pub outcome: Outcome,
    pub report: ValidationReport,
    /// Composed paragraphs, present only on success
    pub paragraphs: Option<Vec<String>>,
}

/// A madlib mounted on a surface
///
/// Starting a session renders the form exactly once; every later call to
/// [`Session::generate`] reuses the same field bindings.
pub struct Session<S: Surface> {
    madlib: MadLib,
    bindings: FieldBindings,
    surface: S,
    validator: Validator,
}

impl<S: Surface> Session<S> {
    /// Render the form for `madlib` onto `surface`
    pub fn start(madlib: MadLib, mut surface: S) -> Self {
        let bindings = FormRenderer::render(&madlib, &mut surface);
        Self {
            madlib,
            bindings,
            surface,
            validator: Validator::new(),
        }
    }

    /// Validate, and on success render the result
    ///
    /// On failure the result container is left untouched.
    pub fn generate(&mut self) -> Result<GenerateOutcome> {
        let report = self
            .validator
            .validate(&self.madlib, &self.bindings, &mut self.surface);

        if !report.is_valid() {
            tracing::info!(invalid = ?report.invalid_ids(), "generate rejected");
            self.surface.acknowledge(Outcome::Failure);
            return Ok(GenerateOutcome {
                outcome: Outcome::Failure,
                report,
                paragraphs: None,
            });
        }

        let paragraphs = ResultRenderer::render(&self.madlib, &self.bindings, &mut self.surface)?;
        tracing::info!(paragraphs = paragraphs.len(), "generate succeeded");
        self.surface.acknowledge(Outcome::Success);
        Ok(GenerateOutcome {
            outcome: Outcome::Success,
            report,
            paragraphs: Some(paragraphs),
        })
    }

    pub fn madlib(&self) -> &MadLib {
        &self.madlib
    }

    pub fn bindings(&self) -> &FieldBindings {
        &self.bindings
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// End the session and hand the surface back
    pub fn into_surface(self) -> S {
        self.surface
    }
}
