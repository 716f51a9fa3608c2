//! Tablily - tablature to LilyPond converter
//!
//! This library provides:
//! - Parsing of compact tab entries (`fret[:duration][\string]`, `x`, `r`)
//! - Pitch and relative octave resolution for guitar and bass tunings
//! - LilyPond document rendering from mustache templates
//!
//! # Example
//!
//! ```
//! use tablily::{convert, ParseState, Tuning};
//!
//! let notes = convert("0:8\\6 3 3:4\\1 r", Tuning::guitar(), ParseState::default()).unwrap();
//! assert_eq!(notes, "e,8\\6 g8\\6 g''4\\1 r4");
//! ```

pub mod conversion;
pub mod error;
pub mod lilypond;
pub mod parser;
pub mod tuning;

// Re-export main types for convenience
pub use conversion::{convert, join_tokens, tokenize, Converter, TabToken};
pub use error::{ParseError, ResolveError, TablilyError};
pub use lilypond::{
    pitch_resolver::{floor_div, floor_mod, resolve, RenderedToken, ResolveState},
    template::{render_lilypond, render_str, TemplateContext, DEFAULT_TEMPLATE},
};
pub use parser::tab_entry::{parse_tab_entry, NoteEvent, ParseState};
pub use tuning::{Instrument, Tuning, BASS_TUNING, GUITAR_TUNING};
