//! Demonstration binary: registers a small sample schema, parses
//! `std::env::args()` with the library's own [`chartargs::Parser`], and
//! prints the result tables. Doubles as the crate's own smoke test of its
//! public API.

use clap::Parser as ClapParser;

use chartargs::{Mode, ParserConfig, RecognizerKind};

/// Meta-arguments for the demo itself, parsed by `clap` before anything is
/// handed to the library parser under test.
#[derive(ClapParser, Debug)]
#[command(name = "chartargs-demo")]
#[command(about = "Registers a sample schema and parses the rest of argv with chartargs")]
struct DemoArgs {
    /// Use the hand-coded fast-path recognizer instead of the CYK grammar.
    #[arg(long)]
    fast_path: bool,

    /// Demote malformed argument-list tokens to free values instead of failing.
    #[arg(long)]
    lenient: bool,

    /// Tokens to feed to the library parser, e.g. `-- --width=1280 -v input.png`.
    #[arg(last = true)]
    rest: Vec<String>,
}

fn main() {
    env_logger::init();

    let args = DemoArgs::parse();

    let config = ParserConfig {
        mode: if args.lenient { Mode::Lenient } else { Mode::Strict },
        recognizer: if args.fast_path {
            RecognizerKind::FastPath
        } else {
            RecognizerKind::Grammar
        },
    };

    let mut parser = chartargs::Parser::with_config(config);
    parser.add_option("width", Some('w')).expect("schema registration");
    parser.add_option("height", Some('h')).expect("schema registration");
    parser.add_flag("verbose", Some('v')).expect("schema registration");

    if let Err(failure) = parser.parse(&args.rest, 0, args.rest.len()) {
        eprintln!("parse failed: {failure}");
        std::process::exit(1);
    }

    println!("verbose: {}", parser.flag_count("verbose"));
    for long in ["width", "height"] {
        for i in 0..parser.option_count(long) {
            println!(
                "{long}[{i}] = {:?} (at token {})",
                parser.option_instance_value(long, i).unwrap(),
                parser.option_instance_position(long, i).unwrap()
            );
        }
    }
    for i in 0..parser.free_value_count() {
        println!(
            "free[{i}] = {:?} (at token {})",
            parser.free_value_instance_value(i).unwrap(),
            parser.free_value_instance_position(i).unwrap()
        );
    }
}
