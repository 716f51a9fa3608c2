use crate::AppError::ConfigError;
use clap::Parser;
use config::Config;
use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;
use tablily::{
    convert, render_lilypond, Instrument, ParseState, TablilyError as LibTablilyError,
    TemplateContext,
};

mod config;

const INPUT_HELP: &str = "Enter tab (format: fret[:duration][\\string], e.g. 3:4\\1 for the 3rd fret on the 1st string with duration 4, r for rest, x\\string for dead note), end with Ctrl-D:";

fn main() {
    let result = main_result();
    std::process::exit(match result {
        Ok(()) => 0,
        Err(err) => {
            // use Display instead of Debug for user friendly error messages
            log::error!("{err}");
            1
        }
    });
}

pub fn main_result() -> Result<(), AppError> {
    // args
    let args = CliArgs::parse();

    // setup logging
    let default_filter = format!("tablily={}", log_level(args.verbosity));
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    // read local config
    let local_config = Config::read_config()?;

    let instrument = args
        .instrument
        .or_else(|| local_config.instrument())
        .unwrap_or_default();
    let defaults = ParseState::default();
    let parse_state = ParseState::new(
        args.default_string
            .or_else(|| local_config.default_string())
            .unwrap_or(defaults.previous_string_number),
        args.default_duration
            .or_else(|| local_config.default_duration())
            .unwrap_or(defaults.previous_duration),
    );
    let template = args.template.or_else(|| local_config.template());

    // check if input and template files exist
    if let Some(input) = &args.input {
        if !input.exists() {
            return Err(ConfigError(format!("Input file not found {input:?}")));
        }
    }
    if let Some(template) = &template {
        if !template.exists() {
            return Err(ConfigError(format!("Template file not found {template:?}")));
        }
    }
    log::info!("Converting {instrument} tab starting with {parse_state:?}");

    let input = read_input(args.input.as_ref())?;

    // go!
    let notes = convert(&input, instrument.tuning(), parse_state)?;
    let context = TemplateContext::new(notes, instrument);
    let rendered = render_lilypond(template.as_deref(), &context)?;

    match &args.output {
        Some(output) => {
            fs::write(output, rendered)?;
            log::info!("Wrote LilyPond file {output:?}");
        }
        None => println!("{rendered}"),
    }
    Ok(())
}

fn read_input(input: Option<&PathBuf>) -> Result<String, AppError> {
    match input {
        Some(path) => {
            log::info!("Reading tab file {path:?}");
            Ok(fs::read_to_string(path)?)
        }
        None => {
            let mut stdin = io::stdin();
            if stdin.is_terminal() {
                eprintln!("{INPUT_HELP}");
            }
            let mut input = String::new();
            stdin.read_to_string(&mut input)?;
            Ok(input)
        }
    }
}

const fn log_level(verbosity: u8) -> log::LevelFilter {
    match verbosity {
        0 => log::LevelFilter::Error,
        1 => log::LevelFilter::Warn,
        2 => log::LevelFilter::Info,
        3 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    }
}

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct CliArgs {
    /// Instrument tuning.
    #[arg(short = 'I', long, value_enum)]
    instrument: Option<Instrument>,
    /// Tab input file, reads stdin when absent.
    #[arg(short = 'i', long)]
    input: Option<PathBuf>,
    /// LilyPond mustache template, `{{{tablily_notes}}}` is replaced by the notes.
    #[arg(short = 't', long)]
    template: Option<PathBuf>,
    /// Output file, prints to stdout when absent.
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,
    /// Log level from 0 (errors only) to 4.
    #[arg(short = 'v', long, default_value_t = 1, value_parser = clap::value_parser!(u8).range(0..=4))]
    verbosity: u8,
    /// String number used until the first explicit string.
    #[arg(long)]
    default_string: Option<u32>,
    /// Duration used until the first explicit duration.
    #[arg(long)]
    default_duration: Option<u32>,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    ConfigError(String),
    #[error("parsing error: {0}")]
    ParsingError(String),
    #[error("template error: {0}")]
    TemplateError(String),
    #[error("other error: {0}")]
    OtherError(String),
}

impl From<LibTablilyError> for AppError {
    fn from(error: LibTablilyError) -> Self {
        match error {
            LibTablilyError::ParsingError(e) => Self::ParsingError(e.to_string()),
            e @ LibTablilyError::ResolveError { .. } => Self::ParsingError(e.to_string()),
            LibTablilyError::ConfigError(s) => Self::ConfigError(s),
            LibTablilyError::TemplateError(s) => Self::TemplateError(s),
            LibTablilyError::IoError(s) => Self::OtherError(s),
        }
    }
}

impl From<io::Error> for AppError {
    fn from(error: io::Error) -> Self {
        Self::OtherError(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        CliArgs::command().debug_assert();
    }

    #[test]
    fn test_cli_short_flags() {
        let args =
            CliArgs::try_parse_from(["tablily", "-I", "bass", "-i", "song.tab", "-v", "3"]).unwrap();
        assert_eq!(args.instrument, Some(Instrument::Bass));
        assert_eq!(args.input, Some(PathBuf::from("song.tab")));
        assert_eq!(args.verbosity, 3);
        assert!(args.template.is_none());
    }

    #[test]
    fn test_cli_rejects_unknown_instrument() {
        assert!(CliArgs::try_parse_from(["tablily", "-I", "banjo"]).is_err());
        assert!(CliArgs::try_parse_from(["tablily", "-v", "9"]).is_err());
    }

    #[test]
    fn test_log_level() {
        assert_eq!(log_level(0), log::LevelFilter::Error);
        assert_eq!(log_level(1), log::LevelFilter::Warn);
        assert_eq!(log_level(4), log::LevelFilter::Trace);
    }
}
