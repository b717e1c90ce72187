//! Crate-wide error type.
//!
//! `ParserError` mirrors the exit-code enumeration of the schema/parse API
//! one variant at a time. There is no `Success` variant: success is `Ok`.

use thiserror::Error;

/// Everything that can go wrong registering a schema or parsing a token
/// stream.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParserError {
    /// Retained for fidelity to the exit-code enumeration. No path in this
    /// API takes a nullable out-parameter on its primary path, so this does
    /// not occur in practice; see `DESIGN.md`.
    #[error("a required argument was null")]
    NullArgument,

    /// Retained for fidelity to the exit-code enumeration; unreachable in
    /// practice because allocation failure aborts the process rather than
    /// returning `Err`. See `DESIGN.md`.
    #[error("memory allocation failed")]
    MemoryAllocationFailure,

    #[error("range begin {begin} is greater than range end {end}")]
    BeginEndRangeNotValid { begin: usize, end: usize },

    #[error("option '{long}' requires a value but none was supplied")]
    OptionRequiresValue { long: String },

    #[error("{parameter} must not be an empty string")]
    EmptyStringParameter { parameter: &'static str },

    #[error("'{long}' is already registered")]
    IdAlreadyInUse { long: String },

    #[error("'{value}' is not a valid long-form argument name")]
    StringNotValid { value: String },

    #[error("'{character}' is not a valid short-form argument character")]
    CharacterNotValid { character: char },

    #[error("'{long}' is not a registered long-form argument")]
    ArgLongFormNotValid { long: String },

    #[error("'{short}' is not a registered short-form argument")]
    ArgShortFormNotValid { short: char },

    #[error("instance index {index} is out of range (found {count} instance(s))")]
    InstanceIndexNotValid { index: usize, count: usize },

    #[error("byte {position} of token '{token}' belongs to no terminal class")]
    TerminalTokenNotValid { token: String, position: usize },

    #[error("the start symbol does not derive token '{token}'")]
    StartSymbolNotDerivedFromInput { token: String },

    #[error("token '{token}' was expected to be an argument-list token")]
    ExpectedArgListToken { token: String },

    #[error("rule identifier {rule} does not name a grammar non-terminal")]
    RuleIdentifierNotValid { rule: usize },

    #[error("{code} is not a recognized result code")]
    ResultCodeNotValid { code: i32 },

    #[error("token '{token}' was not handled by any driver state")]
    TokenNotHandled { token: String },
}

impl ParserError {
    /// The bare symbolic variant name (e.g. `"NullArgument"`), as distinct
    /// from the prose `Display` message. Mirrors `NonTerminal::name` in
    /// `grammar.rs`.
    pub fn name(&self) -> &'static str {
        match self {
            Self::NullArgument => "NullArgument",
            Self::MemoryAllocationFailure => "MemoryAllocationFailure",
            Self::BeginEndRangeNotValid { .. } => "BeginEndRangeNotValid",
            Self::OptionRequiresValue { .. } => "OptionRequiresValue",
            Self::EmptyStringParameter { .. } => "EmptyStringParameter",
            Self::IdAlreadyInUse { .. } => "IdAlreadyInUse",
            Self::StringNotValid { .. } => "StringNotValid",
            Self::CharacterNotValid { .. } => "CharacterNotValid",
            Self::ArgLongFormNotValid { .. } => "ArgLongFormNotValid",
            Self::ArgShortFormNotValid { .. } => "ArgShortFormNotValid",
            Self::InstanceIndexNotValid { .. } => "InstanceIndexNotValid",
            Self::TerminalTokenNotValid { .. } => "TerminalTokenNotValid",
            Self::StartSymbolNotDerivedFromInput { .. } => "StartSymbolNotDerivedFromInput",
            Self::ExpectedArgListToken { .. } => "ExpectedArgListToken",
            Self::RuleIdentifierNotValid { .. } => "RuleIdentifierNotValid",
            Self::ResultCodeNotValid { .. } => "ResultCodeNotValid",
            Self::TokenNotHandled { .. } => "TokenNotHandled",
        }
    }
}
