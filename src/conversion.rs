use crate::lilypond::pitch_resolver::{resolve, RenderedToken, ResolveState};
use crate::parser::tab_entry::{parse_tab_entry, ParseState};
use crate::tuning::Tuning;
use crate::TablilyError;

/// Input unit of a conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabToken<'a> {
    Entry(&'a str),
    LineBreak,
}

/// Split tab text on whitespace, keeping a line break between lines
pub fn tokenize(input: &str) -> Vec<TabToken<'_>> {
    let mut tokens = vec![];
    for (index, line) in input.lines().enumerate() {
        if index > 0 {
            tokens.push(TabToken::LineBreak);
        }
        tokens.extend(line.split_whitespace().map(TabToken::Entry));
    }
    tokens
}

/// Converts tab entries in order, carrying string, duration and octave
/// from one entry to the next.
pub struct Converter<'a> {
    tuning: Tuning<'a>,
    parse_state: ParseState,
    resolve_state: ResolveState,
}

impl<'a> Converter<'a> {
    pub fn new(tuning: Tuning<'a>, parse_state: ParseState) -> Self {
        Self {
            tuning,
            parse_state,
            resolve_state: ResolveState::default(),
        }
    }

    pub const fn parse_state(&self) -> ParseState {
        self.parse_state
    }

    pub const fn resolve_state(&self) -> ResolveState {
        self.resolve_state
    }

    /// Convert one tab entry, states only move forward on success
    pub fn convert_entry(&mut self, token: &str) -> Result<RenderedToken, TablilyError> {
        let event = parse_tab_entry(token, self.parse_state, self.tuning)?;
        let (rendered, resolve_state) = resolve(&event, self.tuning, self.resolve_state)
            .map_err(|source| TablilyError::ResolveError {
                token: token.to_string(),
                source,
            })?;
        log::debug!("Converted '{token}' -> '{rendered}'");
        self.parse_state = ParseState::from(&event);
        self.resolve_state = resolve_state;
        Ok(rendered)
    }

    /// Convert all tokens, stopping at the first failure
    pub fn convert_all(&mut self, tokens: &[TabToken]) -> Result<Vec<RenderedToken>, TablilyError> {
        let mut rendered = Vec::with_capacity(tokens.len());
        for token in tokens {
            match token {
                TabToken::Entry(entry) => rendered.push(self.convert_entry(entry)?),
                TabToken::LineBreak => rendered.push(RenderedToken::LineBreak),
            }
        }
        Ok(rendered)
    }
}

/// Join rendered tokens with single spaces
pub fn join_tokens(tokens: &[RenderedToken]) -> String {
    tokens
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Convert tab text into space separated LilyPond notes
pub fn convert(
    input: &str,
    tuning: Tuning,
    parse_state: ParseState,
) -> Result<String, TablilyError> {
    let tokens = tokenize(input);
    log::info!("Converting {} tokens", tokens.len());
    let rendered = Converter::new(tuning, parse_state).convert_all(&tokens)?;
    Ok(join_tokens(&rendered))
}
