//! Chart-parsing edge cases exercised through the public `Parser` API:
//! multi-segment extensions, inline assignment, and compound arg lists that
//! terminate in an option rather than a flag.

use chartargs::Parser;

#[test]
fn long_option_with_multiple_hyphenated_segments() {
    let mut parser = Parser::new();
    parser.add_option("dry-run-only", Some('n')).unwrap();

    let tokens = ["--dry-run-only=yes"];
    parser.parse(&tokens, 0, tokens.len()).unwrap();

    assert_eq!(
        parser.option_instance_value("dry-run-only", 0).unwrap(),
        "yes"
    );
}

#[test]
fn mixed_hyphen_and_underscore_extensions_merge_in_order() {
    let mut parser = Parser::new();
    parser.add_flag("log_to-file", None).unwrap();

    let tokens = ["--log_to-file"];
    parser.parse(&tokens, 0, tokens.len()).unwrap();

    assert_eq!(parser.flag_count("log_to-file"), 1);
}

#[test]
fn compound_arg_list_terminating_in_a_bare_option_is_pending() {
    let mut parser = Parser::new();
    parser.add_flag("a", None).unwrap();
    parser.add_option("output", Some('o')).unwrap();

    let tokens = ["-ao", "result.txt"];
    parser.parse(&tokens, 0, tokens.len()).unwrap();

    assert_eq!(parser.flag_count("a"), 1);
    assert_eq!(
        parser.option_instance_value("output", 0).unwrap(),
        "result.txt"
    );
}

#[test]
fn repeated_flag_occurrences_are_each_recorded() {
    let mut parser = Parser::new();
    parser.add_flag("verbose", Some('v')).unwrap();

    let tokens = ["-v", "-v", "-v"];
    parser.parse(&tokens, 0, tokens.len()).unwrap();

    assert_eq!(parser.flag_count("verbose"), 3);
    assert_eq!(parser.flag_instance_position("verbose", 2).unwrap(), 2);
}

#[test]
fn repeated_option_occurrences_keep_each_value() {
    let mut parser = Parser::new();
    parser.add_option("include", Some('I')).unwrap();

    let tokens = ["--include=a", "--include=b"];
    parser.parse(&tokens, 0, tokens.len()).unwrap();

    assert_eq!(parser.option_count("include"), 2);
    assert_eq!(parser.option_instance_value("include", 0).unwrap(), "a");
    assert_eq!(parser.option_instance_value("include", 1).unwrap(), "b");
}

#[test]
fn assignment_with_empty_right_hand_side_is_an_empty_value() {
    let mut parser = Parser::new();
    parser.add_option("tag", Some('t')).unwrap();

    let tokens = ["--tag="];
    parser.parse(&tokens, 0, tokens.len()).unwrap();

    assert_eq!(parser.option_instance_value("tag", 0).unwrap(), "");
}

#[test]
fn free_values_before_and_after_options_preserve_positions() {
    let mut parser = Parser::new();
    parser.add_flag("v", None).unwrap();

    let tokens = ["first", "-v", "second", "third"];
    parser.parse(&tokens, 0, tokens.len()).unwrap();

    assert_eq!(parser.free_value_count(), 3);
    assert_eq!(parser.free_value_instance_position(0).unwrap(), 0);
    assert_eq!(parser.free_value_instance_position(1).unwrap(), 2);
    assert_eq!(parser.free_value_instance_position(2).unwrap(), 3);
}

#[test]
fn parsing_a_subrange_reports_positions_relative_to_begin() {
    let mut parser = Parser::new();
    parser.add_flag("v", None).unwrap();

    let tokens = ["prog", "-v", "input.png"];
    parser.parse(&tokens, 1, tokens.len()).unwrap();

    assert_eq!(parser.flag_instance_position("v", 0).unwrap(), 0);
    assert_eq!(parser.free_value_instance_position(0).unwrap(), 1);
}
