use crate::error::ResolveError;
use crate::parser::tab_entry::NoteEvent;
use crate::tuning::{
    semitone_of, spelling_of, Tuning, OCTAVE_DOWN_MARK, OCTAVE_UP_MARK, SEMITONES_PER_OCTAVE,
};
use std::fmt;

/// Highest fret accepted by the resolver, ten octaves above the open string
pub const MAX_FRET: u32 = 120;

/// Octave of the previously resolved note
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ResolveState {
    pub current_octave: i32,
}

impl ResolveState {
    pub const fn new(current_octave: i32) -> Self {
        Self { current_octave }
    }
}

/// A LilyPond token ready to be written in a score
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderedToken {
    Note {
        spelling: &'static str,
        /// Octaves relative to the previous note
        octave_shift: i32,
        duration: u32,
        string_number: u32,
    },
    /// Pitch-free muted note
    DeadNote { duration: u32, string_number: u32 },
    Rest { duration: u32 },
    LineBreak,
}

impl RenderedToken {
    pub const fn octave_shift(&self) -> i32 {
        match self {
            Self::Note { octave_shift, .. } => *octave_shift,
            _ => 0,
        }
    }
}

impl fmt::Display for RenderedToken {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Note {
                spelling,
                octave_shift,
                duration,
                string_number,
            } => {
                let mark = if *octave_shift > 0 {
                    OCTAVE_UP_MARK
                } else {
                    OCTAVE_DOWN_MARK
                };
                let marks = mark.to_string().repeat(octave_shift.unsigned_abs() as usize);
                write!(f, "{spelling}{marks}{duration}\\{string_number}")
            }
            Self::DeadNote {
                duration,
                string_number,
            } => write!(f, "x{duration}\\{string_number}"),
            Self::Rest { duration } => write!(f, "r{duration}"),
            Self::LineBreak => writeln!(f),
        }
    }
}

/// Floored division, rounds toward negative infinity
pub const fn floor_div(value: i32, divisor: i32) -> i32 {
    value.div_euclid(divisor)
}

/// Floored modulo, always in `0..divisor` for a positive divisor
pub const fn floor_mod(value: i32, divisor: i32) -> i32 {
    value.rem_euclid(divisor)
}

/// Resolve the LilyPond pitch of `event`.
///
/// Octave marks are relative to `state.current_octave`, the returned state
/// carries the octave of the resolved note. Rests and dead notes leave the
/// octave untouched. Frets above [`MAX_FRET`] are rejected.
pub fn resolve(
    event: &NoteEvent,
    tuning: Tuning,
    state: ResolveState,
) -> Result<(RenderedToken, ResolveState), ResolveError> {
    if event.is_rest {
        let token = RenderedToken::Rest {
            duration: event.duration,
        };
        return Ok((token, state));
    }
    if event.is_dead_note {
        let token = RenderedToken::DeadNote {
            duration: event.duration,
            string_number: event.string_number,
        };
        return Ok((token, state));
    }

    let open_string = tuning.open_string(event.string_number).ok_or(
        ResolveError::InvalidStringNumber {
            string_number: event.string_number,
            string_count: tuning.string_count(),
        },
    )?;
    let open_string_semitone = semitone_of(open_string)
        .ok_or_else(|| ResolveError::InvalidOpenStringNote(open_string.to_string()))?;
    if event.fret > MAX_FRET {
        return Err(ResolveError::FretOutOfRange(event.fret));
    }
    let absolute_semitone = open_string_semitone + event.fret as i32;

    let pitch_class = floor_mod(absolute_semitone, SEMITONES_PER_OCTAVE);
    let spelling =
        spelling_of(pitch_class).ok_or(ResolveError::InvalidNoteIndex(absolute_semitone))?;
    let target_octave = floor_div(absolute_semitone, SEMITONES_PER_OCTAVE);
    let octave_shift = target_octave - state.current_octave;
    log::debug!(
        "Open string {open_string} ({open_string_semitone}) + fret {} -> {spelling} octave {target_octave} shift {octave_shift}",
        event.fret
    );

    let token = RenderedToken::Note {
        spelling,
        octave_shift,
        duration: event.duration,
        string_number: event.string_number,
    };
    Ok((token, ResolveState::new(target_octave)))
}
