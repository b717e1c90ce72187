//! Parse driver & state machine (C6): walks the token stream, invokes a
//! recognizer per token, and interprets the resulting `TokenInfo` against
//! the schema registry.

use crate::error::ParserError;
use crate::logging::scope;

use super::cyk;
use super::fast_path;
use super::registry::ArgRegistry;
use super::token_info::TokenInfo;

/// Which recognizer implementation fills `TokenInfo` for each token.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum RecognizerKind {
    #[default]
    Grammar,
    FastPath,
}

/// Strict rejects malformed argument lists outright; Lenient demotes an
/// unrecognised `-`-prefixed token to a free value instead of failing.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Strict,
    Lenient,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum State {
    ParseInputToken,
    HandleOptionValue,
    HandleOptionRogueValue,
    HandleRogueFreeValue,
}

/// The option awaiting a value supplied by a following token, plus the
/// absolute argv position of the token that put it in this state (used if
/// the stream ends before a value arrives).
#[derive(Debug, Clone, PartialEq, Eq)]
enum PendingOption {
    None,
    Long(String, usize),
    Short(char, usize),
}

/// A failed parse: the triggering error plus the absolute token index (within
/// the caller's `[begin, end)` range) at which it occurred, when known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseFailure {
    pub error: ParserError,
    pub error_position: Option<usize>,
}

impl std::fmt::Display for ParseFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl std::error::Error for ParseFailure {}

/// Runs the state machine over `tokens[begin..end]`, mutating `registry`.
pub struct Driver {
    state: State,
    pending: PendingOption,
    mode: Mode,
    recognizer: RecognizerKind,
}

impl Driver {
    pub fn new(mode: Mode, recognizer: RecognizerKind) -> Self {
        Self {
            state: State::ParseInputToken,
            pending: PendingOption::None,
            mode,
            recognizer,
        }
    }

    fn recognize(&self, token: &str) -> Result<TokenInfo, ParserError> {
        match self.recognizer {
            RecognizerKind::Grammar => cyk::recognize(token),
            RecognizerKind::FastPath => fast_path::recognize(token),
        }
    }

    pub fn run(
        &mut self,
        tokens: &[impl AsRef<str>],
        begin: usize,
        end: usize,
        registry: &mut ArgRegistry,
    ) -> Result<(), ParseFailure> {
        scope!();

        for i in begin..end {
            let token = tokens[i].as_ref();
            // `position` is relative to `begin` (what ArgInstance/free-value
            // records store); `i` is the absolute argv index (what errors
            // report, per the absolute-errorPosition contract).
            let position = i - begin;

            let result = match self.state {
                State::ParseInputToken => self.parse_input_token(token, position, i, registry),
                State::HandleOptionValue => {
                    self.handle_option_value(token, registry, true)
                }
                State::HandleOptionRogueValue => {
                    self.handle_option_value(token, registry, false)
                }
                State::HandleRogueFreeValue => {
                    registry.push_free_value(position, token.to_string());
                    self.state = State::ParseInputToken;
                    Ok(())
                }
            };

            if let Err(error) = result {
                return Err(ParseFailure {
                    error,
                    error_position: Some(i),
                });
            }
        }

        match &self.pending {
            PendingOption::None => Ok(()),
            PendingOption::Long(_, position) | PendingOption::Short(_, position) => {
                Err(ParseFailure {
                    error: ParserError::OptionRequiresValue {
                        long: describe_pending(&self.pending),
                    },
                    error_position: Some(*position),
                })
            }
        }
    }

    fn parse_input_token(
        &mut self,
        token: &str,
        position: usize,
        abs_position: usize,
        registry: &mut ArgRegistry,
    ) -> Result<(), ParserError> {
        if token == "--" {
            self.state = State::HandleRogueFreeValue;
            return Ok(());
        }

        if token.chars().count() == 1 {
            registry.push_free_value(position, token.to_string());
            return Ok(());
        }

        let info = self.recognize(token)?;

        if info.is_free_val {
            registry.push_free_value(position, token.to_string());
        } else if info.is_arg_list {
            self.handle_arg_list(&info, token, position, abs_position, registry)?;
        } else if info.arg_name.chars().count() == 1 {
            self.handle_short_arg(&info, position, abs_position, registry)?;
        } else {
            self.handle_long_arg(&info, position, abs_position, registry)?;
        }

        Ok(())
    }

    fn handle_option_value(
        &mut self,
        token: &str,
        registry: &mut ArgRegistry,
        enforce_dash_check: bool,
    ) -> Result<(), ParserError> {
        if enforce_dash_check && token == "--" {
            self.state = State::HandleOptionRogueValue;
            return Ok(());
        }

        if enforce_dash_check && token.starts_with('-') {
            return Err(ParserError::OptionRequiresValue {
                long: describe_pending(&self.pending),
            });
        }

        match std::mem::replace(&mut self.pending, PendingOption::None) {
            PendingOption::Long(long, _) => registry.set_pending_long_value(&long, token.to_string()),
            PendingOption::Short(short, _) => {
                registry.set_pending_short_value(short, token.to_string())
            }
            PendingOption::None => {}
        }
        self.state = State::ParseInputToken;
        Ok(())
    }

    /// `-abco=v`: every character but the last must be a registered flag; the
    /// last must be a flag or an option.
    fn handle_arg_list(
        &mut self,
        info: &TokenInfo,
        token: &str,
        position: usize,
        abs_position: usize,
        registry: &mut ArgRegistry,
    ) -> Result<(), ParserError> {
        let chars: Vec<char> = info.arg_name.chars().collect();
        let (prefix, last) = chars.split_at(chars.len() - 1);
        let last = last[0];

        let prefix_ok = prefix.iter().all(|&c| registry.is_flag_short(c));
        let last_ok = registry.is_flag_short(last) || registry.is_option_short(last);

        if !prefix_ok || !last_ok {
            return match self.mode {
                Mode::Lenient => {
                    registry.push_free_value(position, token.to_string());
                    Ok(())
                }
                Mode::Strict => Err(ParserError::ExpectedArgListToken {
                    token: token.to_string(),
                }),
            };
        }

        for &c in prefix {
            registry.push_flag_short(c, position);
        }

        if registry.is_flag_short(last) {
            registry.push_flag_short(last, position);
        } else if !info.arg_val.is_empty() {
            registry.push_option_short(last, position, info.arg_val.clone());
        } else {
            registry.push_option_short(last, position, String::new());
            self.pending = PendingOption::Short(last, abs_position);
            self.state = State::HandleOptionValue;
        }

        Ok(())
    }

    fn handle_short_arg(
        &mut self,
        info: &TokenInfo,
        position: usize,
        abs_position: usize,
        registry: &mut ArgRegistry,
    ) -> Result<(), ParserError> {
        let c = info.arg_name.chars().next().expect("single-character arg name");

        if registry.is_option_short(c) {
            if !info.arg_val.is_empty() {
                registry.push_option_short(c, position, info.arg_val.clone());
            } else {
                registry.push_option_short(c, position, String::new());
                self.pending = PendingOption::Short(c, abs_position);
                self.state = State::HandleOptionValue;
            }
        } else if registry.is_flag_short(c) {
            registry.push_flag_short(c, position);
        } else {
            return Err(ParserError::ArgShortFormNotValid { short: c });
        }

        Ok(())
    }

    fn handle_long_arg(
        &mut self,
        info: &TokenInfo,
        position: usize,
        abs_position: usize,
        registry: &mut ArgRegistry,
    ) -> Result<(), ParserError> {
        if registry.is_option_long(&info.arg_name) {
            if !info.arg_val.is_empty() {
                registry.push_option_long(&info.arg_name, position, info.arg_val.clone());
            } else {
                registry.push_option_long(&info.arg_name, position, String::new());
                self.pending = PendingOption::Long(info.arg_name.clone(), abs_position);
                self.state = State::HandleOptionValue;
            }
        } else if registry.is_flag_long(&info.arg_name) {
            registry.push_flag_long(&info.arg_name, position);
        } else {
            return Err(ParserError::ArgLongFormNotValid {
                long: info.arg_name.clone(),
            });
        }

        Ok(())
    }
}

fn describe_pending(pending: &PendingOption) -> String {
    match pending {
        PendingOption::Long(long, _) => long.clone(),
        PendingOption::Short(short, _) => short.to_string(),
        PendingOption::None => String::new(),
    }
}
