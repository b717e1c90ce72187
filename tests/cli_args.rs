//! End-to-end scenarios for schema registration and parsing, exercised
//! through the public `chartargs::Parser` API.

use chartargs::{Mode, ParserConfig, RecognizerKind};

#[test]
fn scenario_long_options_and_a_flag() {
    let mut parser = chartargs::Parser::new();
    parser.add_option("width", Some('w')).unwrap();
    parser.add_option("height", Some('h')).unwrap();
    parser.add_flag("debug", Some('d')).unwrap();

    let tokens = ["--width=1280", "-h", "720", "-d"];
    parser.parse(&tokens, 0, tokens.len()).unwrap();

    assert_eq!(parser.option_instance_position("width", 0).unwrap(), 0);
    assert_eq!(parser.option_instance_value("width", 0).unwrap(), "1280");
    assert_eq!(parser.option_instance_position("height", 0).unwrap(), 1);
    assert_eq!(parser.option_instance_value("height", 0).unwrap(), "720");
    assert_eq!(parser.flag_count("debug"), 1);
    assert_eq!(parser.free_value_count(), 0);
}

#[test]
fn scenario_compound_short_list_then_rogue_separator() {
    let mut parser = chartargs::Parser::new();
    parser.add_flag("a", None).unwrap();
    parser.add_flag("b", None).unwrap();
    parser.add_flag("c", None).unwrap();
    parser.add_option("output", Some('o')).unwrap();

    let tokens = ["-abco", "value", "pos1", "--", "--not-a-flag"];
    parser.parse(&tokens, 0, tokens.len()).unwrap();

    for flag in ["a", "b", "c"] {
        assert_eq!(parser.flag_count(flag), 1);
        assert_eq!(parser.flag_instance_position(flag, 0).unwrap(), 0);
    }
    assert_eq!(parser.option_instance_value("output", 0).unwrap(), "value");
    assert_eq!(parser.option_instance_position("output", 0).unwrap(), 0);

    assert_eq!(parser.free_value_count(), 2);
    assert_eq!(parser.free_value_instance_position(0).unwrap(), 2);
    assert_eq!(parser.free_value_instance_value(0).unwrap(), "pos1");
    assert_eq!(parser.free_value_instance_position(1).unwrap(), 4);
    assert_eq!(parser.free_value_instance_value(1).unwrap(), "--not-a-flag");
}

#[test]
fn scenario_underscore_extension_long_option() {
    let mut parser = chartargs::Parser::new();
    parser.add_option("foo_bar", Some('F')).unwrap();

    let tokens = ["--foo_bar", "x"];
    parser.parse(&tokens, 0, tokens.len()).unwrap();

    assert_eq!(parser.option_instance_value("foo_bar", 0).unwrap(), "x");
    assert_eq!(parser.free_value_count(), 0);
}

#[test]
fn scenario_option_with_no_value_fails() {
    let mut parser = chartargs::Parser::new();
    parser.add_option("output", Some('o')).unwrap();

    let tokens = ["-o"];
    let failure = parser.parse(&tokens, 0, tokens.len()).unwrap_err();

    assert!(matches!(
        failure.error,
        chartargs::ParserError::OptionRequiresValue { .. }
    ));
    assert_eq!(failure.error_position, Some(0));
}

#[test]
fn scenario_compound_arg_list_with_inline_assignment() {
    let mut parser = chartargs::Parser::new();
    parser.add_flag("a", None).unwrap();
    parser.add_flag("b", None).unwrap();
    parser.add_option("output", Some('o')).unwrap();

    let tokens = ["-abo=42"];
    parser.parse(&tokens, 0, tokens.len()).unwrap();

    assert_eq!(parser.flag_count("a"), 1);
    assert_eq!(parser.flag_count("b"), 1);
    assert_eq!(parser.option_instance_value("output", 0).unwrap(), "42");
    assert_eq!(parser.free_value_count(), 0);
}

#[test]
fn scenario_lone_dash_is_a_free_value() {
    let mut parser = chartargs::Parser::new();
    parser.add_flag("verbose", Some('v')).unwrap();

    let tokens = ["-"];
    parser.parse(&tokens, 0, tokens.len()).unwrap();

    assert_eq!(parser.free_value_count(), 1);
    assert_eq!(parser.free_value_instance_value(0).unwrap(), "-");
    assert_eq!(parser.flag_count("verbose"), 0);
}

#[test]
fn scenario_duplicate_registration_is_rejected_and_leaves_state_untouched() {
    let mut parser = chartargs::Parser::new();
    parser.add_flag("help", Some('h')).unwrap();

    let failure = parser.add_option("help", Some('H'));
    assert!(matches!(
        failure,
        Err(chartargs::ParserError::IdAlreadyInUse { .. })
    ));
    assert_eq!(parser.flag_count("help"), 0);
}

#[test]
fn lenient_mode_demotes_malformed_arg_list_to_free_value() {
    let mut parser = chartargs::Parser::with_config(ParserConfig {
        mode: Mode::Lenient,
        recognizer: RecognizerKind::Grammar,
    });
    parser.add_flag("v", None).unwrap();

    let tokens = ["-vz"];
    parser.parse(&tokens, 0, tokens.len()).unwrap();

    assert_eq!(parser.free_value_count(), 1);
    assert_eq!(parser.free_value_instance_value(0).unwrap(), "-vz");
}

#[test]
fn strict_mode_rejects_malformed_arg_list() {
    let mut parser = chartargs::Parser::new();
    parser.add_flag("v", None).unwrap();

    let tokens = ["-vz"];
    let failure = parser.parse(&tokens, 0, tokens.len()).unwrap_err();
    assert!(matches!(
        failure.error,
        chartargs::ParserError::ExpectedArgListToken { .. }
    ));
}
