use serde::{Deserialize, Serialize};
use std::fmt;

/// LilyPond spelling of the 12 chromatic semitones above `c`
pub const PITCH_NAMES: [(&str, i32); 12] = [
    ("c", 0),
    ("cis", 1),
    ("d", 2),
    ("dis", 3),
    ("e", 4),
    ("f", 5),
    ("fis", 6),
    ("g", 7),
    ("gis", 8),
    ("a", 9),
    ("ais", 10),
    ("b", 11),
];

pub const SEMITONES_PER_OCTAVE: i32 = 12;

pub const OCTAVE_UP_MARK: char = '\'';
pub const OCTAVE_DOWN_MARK: char = ',';

/// Standard guitar tuning (E A D G B e), lowest string first
pub const GUITAR_TUNING: [&str; 6] = ["e,", "a,", "d", "g", "b", "e'"];

/// Standard bass tuning (E A D G), lowest string first
pub const BASS_TUNING: [&str; 4] = ["e,", "a,", "d", "g"];

/// Semitone of a LilyPond absolute pitch (`e,`, `d`, `e'`...) relative to `c`.
///
/// Octave marks are only allowed in one direction.
pub fn semitone_of(spelling: &str) -> Option<i32> {
    let name = spelling.trim_end_matches([OCTAVE_UP_MARK, OCTAVE_DOWN_MARK]);
    let marks = &spelling[name.len()..];
    let (_, class) = PITCH_NAMES.iter().find(|(n, _)| *n == name)?;
    let octave = if marks.chars().all(|c| c == OCTAVE_UP_MARK) {
        marks.len() as i32
    } else if marks.chars().all(|c| c == OCTAVE_DOWN_MARK) {
        -(marks.len() as i32)
    } else {
        return None;
    };
    Some(class + SEMITONES_PER_OCTAVE * octave)
}

/// Canonical spelling for a pitch class in `0..12`
pub fn spelling_of(pitch_class: i32) -> Option<&'static str> {
    PITCH_NAMES
        .iter()
        .find(|(_, semitone)| *semitone == pitch_class)
        .map(|(name, _)| *name)
}

/// Open string pitches of an instrument, lowest string first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tuning<'a> {
    open_strings: &'a [&'a str],
}

impl<'a> Tuning<'a> {
    pub const fn new(open_strings: &'a [&'a str]) -> Self {
        Self { open_strings }
    }

    pub const fn string_count(&self) -> usize {
        self.open_strings.len()
    }

    /// Open string note of `string_number` where 1 is the highest string
    pub fn open_string(&self, string_number: u32) -> Option<&'a str> {
        if string_number == 0 {
            return None;
        }
        let index = self
            .string_count()
            .checked_sub(usize::try_from(string_number).ok()?)?;
        self.open_strings.get(index).copied()
    }

    pub const fn open_strings(&self) -> &'a [&'a str] {
        self.open_strings
    }
}

impl Tuning<'static> {
    pub const fn guitar() -> Self {
        Self::new(&GUITAR_TUNING)
    }

    pub const fn bass() -> Self {
        Self::new(&BASS_TUNING)
    }
}

#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Instrument {
    #[default]
    Guitar,
    Bass,
}

impl Instrument {
    pub const fn tuning(self) -> Tuning<'static> {
        match self {
            Self::Guitar => Tuning::guitar(),
            Self::Bass => Tuning::bass(),
        }
    }

    /// Scheme name of the matching `TabStaff.stringTunings`
    pub const fn string_tunings(self) -> &'static str {
        match self {
            Self::Guitar => "guitar-tuning",
            Self::Bass => "bass-tuning",
        }
    }

    pub const fn clef(self) -> &'static str {
        match self {
            Self::Guitar => "treble_8",
            Self::Bass => "bass_8",
        }
    }
}

impl fmt::Display for Instrument {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Guitar => write!(f, "guitar"),
            Self::Bass => write!(f, "bass"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_tunings_resolve() {
        for tuning in [Tuning::guitar(), Tuning::bass()] {
            for open_string in tuning.open_strings() {
                assert!(
                    semitone_of(open_string).is_some(),
                    "unknown open string {open_string}"
                );
            }
        }
    }

    #[test]
    fn test_semitone_of_reference_offsets() {
        assert_eq!(semitone_of("e,"), Some(-8));
        assert_eq!(semitone_of("a,"), Some(-3));
        assert_eq!(semitone_of("c"), Some(0));
        assert_eq!(semitone_of("d"), Some(2));
        assert_eq!(semitone_of("b"), Some(11));
        assert_eq!(semitone_of("e'"), Some(16));
        assert_eq!(semitone_of("c''"), Some(24));
        assert_eq!(semitone_of("c,,"), Some(-24));
    }

    #[test]
    fn test_semitone_of_rejects_unknown() {
        assert_eq!(semitone_of("E"), None);
        assert_eq!(semitone_of("h"), None);
        assert_eq!(semitone_of(""), None);
        assert_eq!(semitone_of("e',"), None);
    }

    #[test]
    fn test_spelling_of() {
        assert_eq!(spelling_of(0), Some("c"));
        assert_eq!(spelling_of(6), Some("fis"));
        assert_eq!(spelling_of(11), Some("b"));
        assert_eq!(spelling_of(12), None);
        assert_eq!(spelling_of(-1), None);
    }

    #[test]
    fn test_open_string_counts_from_highest() {
        let guitar = Tuning::guitar();
        assert_eq!(guitar.open_string(1), Some("e'"));
        assert_eq!(guitar.open_string(2), Some("b"));
        assert_eq!(guitar.open_string(3), Some("g"));
        assert_eq!(guitar.open_string(4), Some("d"));
        assert_eq!(guitar.open_string(6), Some("e,"));
        assert_eq!(guitar.open_string(0), None);
        assert_eq!(guitar.open_string(7), None);

        let bass = Tuning::bass();
        assert_eq!(bass.open_string(1), Some("g"));
        assert_eq!(bass.open_string(3), Some("a,"));
        assert_eq!(bass.open_string(4), Some("e,"));
        assert_eq!(bass.open_string(5), None);
    }

    #[test]
    fn test_instrument_tuning() {
        assert_eq!(Instrument::Guitar.tuning().string_count(), 6);
        assert_eq!(Instrument::Bass.tuning().string_count(), 4);
        assert_eq!(Instrument::default(), Instrument::Guitar);
        assert_eq!(Instrument::Bass.to_string(), "bass");
    }
}
