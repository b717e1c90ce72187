//! Hand-coded prefix-matching recognizer (C8): the same `TokenInfo` contract
//! as [`super::cyk::recognize`] without building a chart.
//!
//! Grounded on the original library's simpler, non-CYK `argParser.cpp`
//! variant, which recognized long/short forms with direct string
//! operations (`starts_with`, `find('=')`) instead of a grammar.

use crate::error::ParserError;

use super::token_info::TokenInfo;

fn validate_printable(token: &str) -> Result<(), ParserError> {
    for (i, b) in token.as_bytes().iter().enumerate() {
        if !(33..=126).contains(&(*b as u32)) {
            return Err(ParserError::TerminalTokenNotValid {
                token: token.to_string(),
                position: i,
            });
        }
    }
    Ok(())
}

fn split_assignment(s: &str) -> (&str, Option<&str>) {
    match s.find('=') {
        Some(idx) => (&s[..idx], Some(&s[idx + 1..])),
        None => (s, None),
    }
}

/// Validates a long-form name: alphanumeric runs separated by single `-` or
/// `_` delimiters, no leading/trailing/doubled delimiter. Mirrors what the
/// grammar's `SimpleLongArg`/`LongArgExtension` productions accept.
fn validate_long_name(name: &str, token: &str, offset: usize) -> Result<(), ParserError> {
    let invalid = |i: usize| ParserError::TerminalTokenNotValid {
        token: token.to_string(),
        position: offset + i,
    };

    if name.is_empty() {
        return Err(invalid(0));
    }

    let mut prev_was_alnum = false;
    for (i, c) in name.chars().enumerate() {
        if c.is_ascii_alphanumeric() {
            prev_was_alnum = true;
        } else if c == '-' || c == '_' {
            if !prev_was_alnum {
                return Err(invalid(i));
            }
            prev_was_alnum = false;
        } else {
            return Err(invalid(i));
        }
    }

    if !prev_was_alnum {
        return Err(invalid(name.len() - 1));
    }

    Ok(())
}

/// Recognizes a single CLI token by direct string matching rather than a
/// chart, producing the same `TokenInfo` a successful CYK parse would.
pub fn recognize(token: &str) -> Result<TokenInfo, ParserError> {
    validate_printable(token)?;

    let mut info = TokenInfo::new();

    if let Some(rest) = token.strip_prefix("--") {
        if rest.is_empty() {
            // The driver special-cases a bare "--" before calling any
            // recognizer; reaching here means a caller invoked us directly.
            return Err(ParserError::TerminalTokenNotValid {
                token: token.to_string(),
                position: 1,
            });
        }
        let (name, val) = split_assignment(rest);
        validate_long_name(name, token, 2)?;
        info.arg_name = name.to_string();
        if let Some(v) = val {
            info.arg_val = v.to_string();
        }
        return Ok(info);
    }

    if let Some(rest) = token.strip_prefix('-') {
        if rest.chars().count() == 1 {
            let c = rest.chars().next().expect("checked length above");
            if !c.is_ascii_alphanumeric() {
                return Err(ParserError::TerminalTokenNotValid {
                    token: token.to_string(),
                    position: 1,
                });
            }
            info.arg_name = c.to_string();
            return Ok(info);
        }

        let (name, val) = split_assignment(rest);

        if name.chars().count() == 1 {
            let c = name.chars().next().expect("checked length above");
            if !c.is_ascii_alphanumeric() {
                return Err(ParserError::TerminalTokenNotValid {
                    token: token.to_string(),
                    position: 1,
                });
            }
            info.arg_name = c.to_string();
            if let Some(v) = val {
                info.arg_val = v.to_string();
            }
            return Ok(info);
        }

        if name.chars().count() < 2 || !name.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(ParserError::TerminalTokenNotValid {
                token: token.to_string(),
                position: 1,
            });
        }
        info.arg_name = name.to_string();
        info.is_arg_list = true;
        if let Some(v) = val {
            info.arg_val = v.to_string();
        }
        return Ok(info);
    }

    info.is_free_val = true;
    Ok(info)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_flag_sets_arg_name() {
        let info = recognize("--help").unwrap();
        assert_eq!(info.arg_name, "help");
        assert!(!info.is_arg_list);
        assert!(!info.is_free_val);
    }

    #[test]
    fn short_flag_sets_single_char_name() {
        let info = recognize("-h").unwrap();
        assert_eq!(info.arg_name, "h");
    }

    #[test]
    fn compound_arg_list_sets_is_arg_list() {
        let info = recognize("-abc").unwrap();
        assert_eq!(info.arg_name, "abc");
        assert!(info.is_arg_list);
    }

    #[test]
    fn long_option_with_assignment() {
        let info = recognize("--width=1280").unwrap();
        assert_eq!(info.arg_name, "width");
        assert_eq!(info.arg_val, "1280");
    }

    #[test]
    fn hyphen_extension_is_kept_verbatim() {
        let info = recognize("--foo-bar").unwrap();
        assert_eq!(info.arg_name, "foo-bar");
    }

    #[test]
    fn underscore_extension_is_kept_verbatim() {
        let info = recognize("--foo_bar").unwrap();
        assert_eq!(info.arg_name, "foo_bar");
    }

    #[test]
    fn free_value_token_is_flagged() {
        let info = recognize("pos1").unwrap();
        assert!(info.is_free_val);
    }

    #[test]
    fn compound_arg_with_inline_value() {
        let info = recognize("-abo=42").unwrap();
        assert_eq!(info.arg_name, "abo");
        assert_eq!(info.arg_val, "42");
        assert!(info.is_arg_list);
    }

    #[test]
    fn single_character_short_option_with_inline_value() {
        let info = recognize("-o=1280").unwrap();
        assert_eq!(info.arg_name, "o");
        assert_eq!(info.arg_val, "1280");
        assert!(!info.is_arg_list);
    }

    #[test]
    fn leading_delimiter_in_long_name_is_rejected() {
        assert!(recognize("---foo").is_err());
    }

    #[test]
    fn trailing_delimiter_in_long_name_is_rejected() {
        assert!(recognize("--foo-").is_err());
    }

    #[test]
    fn doubled_delimiter_in_long_name_is_rejected() {
        assert!(recognize("--foo--bar").is_err());
    }
}
