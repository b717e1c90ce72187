//! Public parser surface: schema registration, parsing, and result queries.
//!
//! Submodules: [`grammar`] and [`cyk`] are the CNF/CYK recognizer (C1-C4);
//! [`fast_path`] is the alternative hand-coded recognizer (C8); [`registry`]
//! is the schema database (C5); [`driver`] is the state machine that ties a
//! recognizer to the registry while walking a token stream (C6).

mod cyk;
mod driver;
mod fast_path;
mod grammar;
mod registry;
mod token_info;

pub use driver::{Mode, ParseFailure, RecognizerKind};
pub use registry::ArgInstance;

use crate::error::ParserError;
use crate::logging::scope;

use driver::Driver;
use registry::ArgRegistry;

/// Construction-time options for a [`Parser`].
#[derive(Debug, Clone, Default)]
pub struct ParserConfig {
    pub mode: Mode,
    pub recognizer: RecognizerKind,
}

/// A reusable argument-schema registry and one-shot token-stream parser.
///
/// Not `Sync`: a single instance is meant to be driven by one thread through
/// registration and a single `parse` call, mirroring the original C API's
/// single-owner `ArgParser` handle.
pub struct Parser {
    registry: ArgRegistry,
    config: ParserConfig,
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser {
    /// A parser with the default configuration: `Mode::Strict` and the
    /// grammar-driven recognizer.
    pub fn new() -> Self {
        Self::with_config(ParserConfig::default())
    }

    pub fn with_config(config: ParserConfig) -> Self {
        scope!();
        Self {
            registry: ArgRegistry::new(),
            config,
        }
    }

    /// Registers a flag. `short`, if given, must be alphanumeric and unused
    /// by any other flag or option.
    pub fn add_flag(&mut self, long: &str, short: Option<char>) -> Result<(), ParserError> {
        scope!();
        self.registry.add_flag(long, short)
    }

    /// Registers an option (a flag that also takes a value). Same
    /// constraints on `long`/`short` as [`Parser::add_flag`].
    pub fn add_option(&mut self, long: &str, short: Option<char>) -> Result<(), ParserError> {
        scope!();
        self.registry.add_option(long, short)
    }

    /// Parses `tokens[begin..end]`, populating flag occurrences, option
    /// values and the free-value list. Intended to be called once per
    /// instance; re-parsing is not a supported workflow (see `DESIGN.md`).
    pub fn parse<S: AsRef<str>>(
        &mut self,
        tokens: &[S],
        begin: usize,
        end: usize,
    ) -> Result<(), ParseFailure> {
        scope!();
        if begin > end || end > tokens.len() {
            return Err(ParseFailure {
                error: ParserError::BeginEndRangeNotValid { begin, end },
                error_position: None,
            });
        }

        let mut driver = Driver::new(self.config.mode, self.config.recognizer);
        driver.run(tokens, begin, end, &mut self.registry)
    }

    pub fn flag_count(&self, long: &str) -> usize {
        self.registry.flag_count(long)
    }

    pub fn flag_instance_position(&self, long: &str, index: usize) -> Result<usize, ParserError> {
        self.registry.flag_instance_position(long, index)
    }

    pub fn option_count(&self, long: &str) -> usize {
        self.registry.option_count(long)
    }

    pub fn option_instance_position(
        &self,
        long: &str,
        index: usize,
    ) -> Result<usize, ParserError> {
        self.registry.option_instance_position(long, index)
    }

    pub fn option_instance_value(&self, long: &str, index: usize) -> Result<&str, ParserError> {
        self.registry.option_instance_value(long, index)
    }

    pub fn free_value_count(&self) -> usize {
        self.registry.free_value_count()
    }

    pub fn free_value_instance_position(&self, index: usize) -> Result<usize, ParserError> {
        self.registry.free_value_instance_position(index)
    }

    pub fn free_value_instance_value(&self, index: usize) -> Result<&str, ParserError> {
        self.registry.free_value_instance_value(index)
    }
}
