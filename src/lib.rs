//! A command-line argument parser whose token recognition is a
//! general context-free-grammar chart parser.
//!
//! Each CLI token is recognized on its own by a CNF/CYK recognizer (see
//! [`parser`]) whose per-production semantic actions populate a small
//! accumulator; a driver layer then interprets that accumulator against a
//! user-registered schema of flags and options to build occurrence counts,
//! option values, and a free-value list.
//!
//! ```
//! use chartargs::Parser;
//!
//! let mut parser = Parser::new();
//! parser.add_option("width", Some('w')).unwrap();
//! parser.add_flag("verbose", Some('v')).unwrap();
//!
//! let tokens = ["--width=1280", "-v", "input.png"];
//! parser.parse(&tokens, 0, tokens.len()).unwrap();
//!
//! assert_eq!(parser.option_instance_value("width", 0).unwrap(), "1280");
//! assert_eq!(parser.flag_count("verbose"), 1);
//! assert_eq!(parser.free_value_instance_value(0).unwrap(), "input.png");
//! ```
//!
//! A second recognizer (`RecognizerKind::FastPath`) implements the same
//! contract with hand-coded prefix matching instead of a chart; either can
//! be selected via [`ParserConfig`].
//!
//! Out of scope: help-text rendering, type coercion of option values,
//! shell completion, subcommand hierarchies, localization, and concurrent
//! use of one [`Parser`] from multiple threads.

pub mod error;
pub mod logging;
pub mod parser;

pub use error::ParserError;
pub use parser::{ArgInstance, Mode, ParseFailure, Parser, ParserConfig, RecognizerKind};
