//! Tab entry parsing.
//!
//! A tab entry reads `fret[:duration][\string]` where `fret` can be replaced
//! by `x` for a dead note or `r` for a rest, e.g. `3:8\2`, `5`, `x\4`, `r:2`.
//! Missing duration and string are inherited from the previous entry.

use crate::error::ParseError;
use crate::parser::primitive_parser::{number, split_suffix};
use crate::tuning::Tuning;

pub const STRING_SEPARATOR: char = '\\';
pub const DURATION_SEPARATOR: char = ':';
pub const DEAD_NOTE: &str = "x";
pub const REST: &str = "r";

pub const DEFAULT_STRING_NUMBER: u32 = 1;
pub const DEFAULT_DURATION: u32 = 4;

/// One parsed tab entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoteEvent {
    pub fret: u32,
    /// 1 is the highest pitched string
    pub string_number: u32,
    pub duration: u32,
    pub is_dead_note: bool,
    pub is_rest: bool,
}

/// Values inherited by the next tab entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseState {
    pub previous_string_number: u32,
    pub previous_duration: u32,
}

impl ParseState {
    pub const fn new(previous_string_number: u32, previous_duration: u32) -> Self {
        Self {
            previous_string_number,
            previous_duration,
        }
    }
}

impl Default for ParseState {
    fn default() -> Self {
        Self::new(DEFAULT_STRING_NUMBER, DEFAULT_DURATION)
    }
}

impl From<&NoteEvent> for ParseState {
    fn from(event: &NoteEvent) -> Self {
        Self::new(event.string_number, event.duration)
    }
}

/// Parse a single tab entry, inheriting string and duration from `state`
pub fn parse_tab_entry(
    token: &str,
    state: ParseState,
    tuning: Tuning,
) -> Result<NoteEvent, ParseError> {
    log::debug!("Parsing tab entry '{token}' with {state:?}");
    if token.matches(STRING_SEPARATOR).count() > 1 || token.matches(DURATION_SEPARATOR).count() > 1
    {
        return Err(ParseError::InvalidFormat {
            token: token.to_string(),
        });
    }
    let invalid_format = |_| ParseError::InvalidFormat {
        token: token.to_string(),
    };

    let (_, (body, string_suffix)) = split_suffix(STRING_SEPARATOR)(token).map_err(invalid_format)?;
    let string_number = match string_suffix {
        Some(suffix) => parse_string_number(suffix, token, tuning)?,
        None => state.previous_string_number,
    };

    let (_, (fret_part, duration_suffix)) =
        split_suffix(DURATION_SEPARATOR)(body).map_err(invalid_format)?;
    let duration = match duration_suffix {
        Some(suffix) => number(suffix).ok_or_else(|| ParseError::InvalidDuration {
            value: suffix.to_string(),
            token: token.to_string(),
        })?,
        None => state.previous_duration,
    };

    let (fret, is_dead_note, is_rest) = match fret_part {
        DEAD_NOTE => (0, true, false),
        REST => (0, false, true),
        fret => {
            let fret = number(fret).ok_or_else(|| ParseError::InvalidFret {
                value: fret.to_string(),
                token: token.to_string(),
            })?;
            (fret, false, false)
        }
    };

    let event = NoteEvent {
        fret,
        string_number,
        duration,
        is_dead_note,
        is_rest,
    };
    log::debug!("Parsed {event:?}");
    Ok(event)
}

fn parse_string_number(suffix: &str, token: &str, tuning: Tuning) -> Result<u32, ParseError> {
    match number(suffix) {
        Some(string_number)
            if string_number >= 1 && string_number as usize <= tuning.string_count() =>
        {
            Ok(string_number)
        }
        _ => {
            log::debug!(
                "String '{suffix}' out of a {} string tuning",
                tuning.string_count()
            );
            Err(ParseError::InvalidStringNumber {
                value: suffix.to_string(),
                token: token.to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn init_logger() {
        env_logger::builder()
            .is_test(true)
            .try_init()
            .unwrap_or_default();
    }

    fn parse(token: &str, state: ParseState) -> Result<NoteEvent, ParseError> {
        init_logger();
        parse_tab_entry(token, state, Tuning::guitar())
    }

    #[test]
    fn test_parse_explicit_suffixes() {
        for state in [ParseState::default(), ParseState::new(6, 16)] {
            let event = parse("3:8\\2", state).unwrap();
            assert_eq!(
                event,
                NoteEvent {
                    fret: 3,
                    string_number: 2,
                    duration: 8,
                    is_dead_note: false,
                    is_rest: false,
                }
            );
        }
    }

    #[test]
    fn test_parse_inherits_string_and_duration() {
        let event = parse("7", ParseState::new(5, 2)).unwrap();
        assert_eq!(event.fret, 7);
        assert_eq!(event.string_number, 5);
        assert_eq!(event.duration, 2);

        let event = parse("7:16", ParseState::new(5, 2)).unwrap();
        assert_eq!((event.string_number, event.duration), (5, 16));

        let event = parse("7\\3", ParseState::new(5, 2)).unwrap();
        assert_eq!((event.string_number, event.duration), (3, 2));
    }

    #[test]
    fn test_parse_state_follows_events() {
        let mut state = ParseState::default();
        let mut strings = vec![];
        for token in ["0:8\\6", "2", "3\\5", "5:4", "r"] {
            let event = parse(token, state).unwrap();
            state = ParseState::from(&event);
            strings.push((event.string_number, event.duration));
        }
        assert_eq!(strings, vec![(6, 8), (6, 8), (5, 8), (5, 4), (5, 4)]);
    }

    #[test]
    fn test_parse_rest() {
        let event = parse("r", ParseState::new(2, 8)).unwrap();
        assert!(event.is_rest);
        assert!(!event.is_dead_note);
        assert_eq!(event.fret, 0);
        assert_eq!(event.duration, 8);

        let event = parse("r:1", ParseState::new(2, 8)).unwrap();
        assert!(event.is_rest);
        assert_eq!(event.duration, 1);
    }

    #[test]
    fn test_parse_dead_note() {
        let event = parse("x\\4", ParseState::new(1, 8)).unwrap();
        assert!(event.is_dead_note);
        assert!(!event.is_rest);
        assert_eq!(event.fret, 0);
        assert_eq!(event.string_number, 4);
        assert_eq!(event.duration, 8);
    }

    #[test]
    fn test_parse_leading_zeros() {
        let event = parse("03:04\\01", ParseState::default()).unwrap();
        assert_eq!((event.fret, event.duration, event.string_number), (3, 4, 1));
    }

    #[test]
    fn test_parse_invalid_string_number() {
        let err = parse("3\\invalid", ParseState::default()).unwrap_err();
        assert_eq!(
            err,
            ParseError::InvalidStringNumber {
                value: "invalid".to_string(),
                token: "3\\invalid".to_string(),
            }
        );
        let message = err.to_string();
        assert!(message.contains("invalid"));
        assert!(message.contains("3\\invalid"));
    }

    #[test]
    fn test_parse_string_number_out_of_tuning() {
        for token in ["3\\0", "3\\7"] {
            assert!(matches!(
                parse(token, ParseState::default()),
                Err(ParseError::InvalidStringNumber { .. })
            ));
        }
        assert!(parse("3\\6", ParseState::default()).is_ok());
        // bass only has 4 strings
        assert!(matches!(
            parse_tab_entry("3\\5", ParseState::default(), Tuning::bass()),
            Err(ParseError::InvalidStringNumber { .. })
        ));
    }

    #[test]
    fn test_parse_invalid_duration() {
        for token in ["3:quarter", "3:", "3:-4\\2"] {
            assert!(
                matches!(
                    parse(token, ParseState::default()),
                    Err(ParseError::InvalidDuration { .. })
                ),
                "{token}"
            );
        }
    }

    #[test]
    fn test_parse_invalid_fret() {
        for token in ["", "a", "-1", "3.5", "xx", "\\2", ":4"] {
            assert!(
                matches!(
                    parse(token, ParseState::default()),
                    Err(ParseError::InvalidFret { .. })
                ),
                "{token}"
            );
        }
    }

    #[test]
    fn test_parse_invalid_format() {
        for token in ["3\\2\\1", "3:4:8", "3::4", "\\\\"] {
            assert_eq!(
                parse(token, ParseState::default()),
                Err(ParseError::InvalidFormat {
                    token: token.to_string()
                }),
                "{token}"
            );
        }
    }
}
