//! LilyPond document rendering with mustache templates.
//!
//! Converted notes are exposed as `tablily_notes`. Templates must use the
//! triple mustache form `{{{tablily_notes}}}`, the double form HTML-escapes
//! the octave marks.

use crate::tuning::Instrument;
use crate::TablilyError;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Template bundled with the tool, a staff and a tab staff sharing the notes
pub const DEFAULT_TEMPLATE: &str = include_str!("templates/tab.ly.mustache");

/// Context data for template rendering
#[derive(Debug, Clone, Serialize)]
pub struct TemplateContext {
    /// Converted notes joined by spaces
    pub tablily_notes: String,
    pub instrument: String,
    /// Scheme tuning for `TabStaff.stringTunings`
    pub string_tunings: String,
    pub clef: String,
}

impl TemplateContext {
    pub fn new(tablily_notes: String, instrument: Instrument) -> Self {
        Self {
            tablily_notes,
            instrument: instrument.to_string(),
            string_tunings: instrument.string_tunings().to_string(),
            clef: instrument.clef().to_string(),
        }
    }
}

/// Render `context` with a template source
pub fn render_str(template: &str, context: &TemplateContext) -> Result<String, TablilyError> {
    let template = mustache::compile_str(template)?;
    Ok(template.render_to_string(context)?)
}

/// Render `context` with the template at `path`, or the bundled one
pub fn render_lilypond(
    path: Option<&Path>,
    context: &TemplateContext,
) -> Result<String, TablilyError> {
    match path {
        Some(path) => {
            log::info!("Rendering with template {path:?}");
            let template = fs::read_to_string(path).map_err(|err| {
                TablilyError::TemplateError(format!("Could not read template {path:?}: {err}"))
            })?;
            render_str(&template, context)
        }
        None => {
            log::info!("Rendering with bundled template");
            render_str(DEFAULT_TEMPLATE, context)
        }
    }
}
