//! Terminal mapping and CNF grammar tables for the token recognizer.
//!
//! Every right-hand side here is a pair of non-terminals (or, at chart row 0,
//! a single terminal class resolved straight from [`terminal_classes`]). The
//! grammar is a dense table indexed by [`NonTerminal`] discriminant so the
//! chart in [`super::cyk`] can be flat arrays rather than hash maps.

use std::ops::Range;

use super::token_info::TokenInfo;

/// Non-terminal identifiers, dense so they double as array indices.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(usize)]
pub enum NonTerminal {
    Digit,
    SmallLetter,
    BigLetter,
    Letter,
    Alnum,
    NonAlnum,
    Printable,
    NonShortArgPrefix,
    ShortArgPrefix,
    AssignmentOp,
    Comma,
    Underscore,
    ArgTerm,
    LongArgPrefix,
    AlnumString,
    PrintableString,
    ShortArg,
    CompoundArg,
    SimpleLongArg,
    UnderscoreExtension,
    DashExtension,
    LongArgExtension,
    LongArg,
    FreeValue,
    AssignmentRight,
    Start,
}

impl NonTerminal {
    /// Number of distinct non-terminals; the dimension of the chart's third axis.
    pub const COUNT: usize = Self::Start as usize + 1;

    pub fn name(self) -> &'static str {
        match self {
            Self::Digit => "Digit",
            Self::SmallLetter => "SmallLetter",
            Self::BigLetter => "BigLetter",
            Self::Letter => "Letter",
            Self::Alnum => "Alnum",
            Self::NonAlnum => "NonAlnum",
            Self::Printable => "Printable",
            Self::NonShortArgPrefix => "NonShortArgPrefix",
            Self::ShortArgPrefix => "ShortArgPrefix",
            Self::AssignmentOp => "AssignmentOp",
            Self::Comma => "Comma",
            Self::Underscore => "Underscore",
            Self::ArgTerm => "ArgTerm",
            Self::LongArgPrefix => "LongArgPrefix",
            Self::AlnumString => "AlnumString",
            Self::PrintableString => "PrintableString",
            Self::ShortArg => "ShortArg",
            Self::CompoundArg => "CompoundArg",
            Self::SimpleLongArg => "SimpleLongArg",
            Self::UnderscoreExtension => "UnderscoreExtension",
            Self::DashExtension => "DashExtension",
            Self::LongArgExtension => "LongArgExtension",
            Self::LongArg => "LongArg",
            Self::FreeValue => "FreeValue",
            Self::AssignmentRight => "AssignmentRight",
            Self::Start => "Start",
        }
    }
}

/// Terminal-class membership for a single character. A character may belong
/// to several classes at once (e.g. `'a'` is `SmallLetter`, `Letter` and
/// `Alnum`), which is why this returns a small owned vector rather than one
/// answer.
pub fn terminal_classes(c: char) -> Vec<NonTerminal> {
    use NonTerminal::*;

    let mut classes = Vec::with_capacity(4);

    if c.is_ascii_lowercase() {
        classes.push(SmallLetter);
        classes.push(Letter);
        classes.push(Alnum);
    } else if c.is_ascii_uppercase() {
        classes.push(BigLetter);
        classes.push(Letter);
        classes.push(Alnum);
    } else if c.is_ascii_digit() {
        classes.push(Digit);
        classes.push(Alnum);
    }

    let code = c as u32;
    if (33..=126).contains(&code) {
        classes.push(Printable);
        if c != '-' {
            classes.push(NonShortArgPrefix);
        }
        if !c.is_ascii_alphanumeric() {
            classes.push(NonAlnum);
        }
    }

    match c {
        '-' => classes.push(ShortArgPrefix),
        '=' => classes.push(AssignmentOp),
        ',' => classes.push(Comma),
        '_' => classes.push(Underscore),
        _ => {}
    }

    classes
}

/// A pure function of (token, range covered by the left child, range covered
/// by the right child) that mutates the per-token accumulator. Ranges are
/// absolute byte offsets into the token.
pub type SemanticAction = fn(&str, Range<usize>, Range<usize>, &mut TokenInfo);

/// One CNF variant of a production: `lhs -> (a, b)` plus an optional action.
#[derive(Clone, Copy)]
pub struct Production {
    pub a: NonTerminal,
    pub b: NonTerminal,
    pub action: Option<SemanticAction>,
}

impl Production {
    const fn new(a: NonTerminal, b: NonTerminal) -> Self {
        Self { a, b, action: None }
    }

    const fn with_action(a: NonTerminal, b: NonTerminal, action: SemanticAction) -> Self {
        Self { a, b, action: Some(action) }
    }
}

/// Dense table of productions indexed by LHS discriminant; each entry is an
/// ordered list of variants tried in declaration order during extraction.
pub struct Grammar {
    rules: Vec<Vec<Production>>,
}

impl Grammar {
    pub fn variants(&self, lhs: NonTerminal) -> &[Production] {
        &self.rules[lhs as usize]
    }
}

fn add_name(input: &str, _a: Range<usize>, b: Range<usize>, info: &mut TokenInfo) {
    info.arg_name.push_str(&input[b]);
}

fn arg_list_add_name(input: &str, _a: Range<usize>, b: Range<usize>, info: &mut TokenInfo) {
    info.arg_name = input[b].to_string();
    info.is_arg_list = true;
}

fn add_ext(input: &str, a: Range<usize>, b: Range<usize>, info: &mut TokenInfo) {
    info.arg_ext.push_str(&input[a]);
    info.arg_ext.push_str(&input[b]);
}

fn merge_ext(_input: &str, _a: Range<usize>, _b: Range<usize>, info: &mut TokenInfo) {
    let ext = std::mem::take(&mut info.arg_ext);
    info.arg_name.push_str(&ext);
}

fn assign(input: &str, _a: Range<usize>, b: Range<usize>, info: &mut TokenInfo) {
    info.arg_val = input[b].to_string();
}

fn free_val(_input: &str, _a: Range<usize>, _b: Range<usize>, info: &mut TokenInfo) {
    info.is_free_val = true;
}

/// Builds the CNF grammar described in the module mapping above. Built once
/// per process via [`grammar`] and shared thereafter.
fn build_grammar() -> Grammar {
    use NonTerminal::*;

    let mut rules: Vec<Vec<Production>> = vec![Vec::new(); NonTerminal::COUNT];

    rules[ArgTerm as usize] = vec![Production::new(ShortArgPrefix, ShortArgPrefix)];

    rules[LongArgPrefix as usize] = vec![Production::new(ShortArgPrefix, ShortArgPrefix)];

    rules[AlnumString as usize] = vec![
        Production::new(Alnum, Alnum),
        Production::new(Alnum, AlnumString),
    ];

    rules[PrintableString as usize] = vec![
        Production::new(Printable, Printable),
        Production::new(Printable, PrintableString),
    ];

    rules[ShortArg as usize] = vec![Production::with_action(ShortArgPrefix, Alnum, add_name)];

    rules[CompoundArg as usize] = vec![Production::with_action(
        ShortArgPrefix,
        AlnumString,
        arg_list_add_name,
    )];

    rules[SimpleLongArg as usize] = vec![
        Production::with_action(LongArgPrefix, Alnum, add_name),
        Production::with_action(LongArgPrefix, AlnumString, add_name),
    ];

    rules[UnderscoreExtension as usize] = vec![
        Production::with_action(Underscore, AlnumString, add_ext),
        Production::with_action(Underscore, Alnum, add_ext),
    ];

    rules[DashExtension as usize] = vec![
        Production::with_action(ShortArgPrefix, AlnumString, add_ext),
        Production::with_action(ShortArgPrefix, Alnum, add_ext),
    ];

    rules[LongArgExtension as usize] = vec![
        Production::with_action(Underscore, AlnumString, add_ext),
        Production::with_action(Underscore, Alnum, add_ext),
        Production::with_action(ShortArgPrefix, Alnum, add_ext),
        Production::with_action(ShortArgPrefix, AlnumString, add_ext),
        Production::new(UnderscoreExtension, LongArgExtension),
        Production::new(DashExtension, LongArgExtension),
    ];

    rules[LongArg as usize] = vec![
        Production::with_action(SimpleLongArg, LongArgExtension, merge_ext),
        Production::with_action(LongArgPrefix, Alnum, add_name),
        Production::with_action(LongArgPrefix, AlnumString, add_name),
    ];

    rules[FreeValue as usize] = vec![Production::new(NonShortArgPrefix, PrintableString)];

    rules[AssignmentRight as usize] = vec![Production::with_action(
        AssignmentOp,
        PrintableString,
        assign,
    )];

    rules[Start as usize] = vec![
        Production::with_action(LongArgPrefix, Alnum, add_name),
        Production::with_action(LongArgPrefix, AlnumString, add_name),
        Production::with_action(SimpleLongArg, LongArgExtension, merge_ext),
        Production::with_action(ShortArgPrefix, Alnum, add_name),
        Production::with_action(ShortArgPrefix, AlnumString, arg_list_add_name),
        Production::with_action(NonShortArgPrefix, PrintableString, free_val),
        Production::new(CompoundArg, AssignmentRight),
        Production::new(LongArg, AssignmentRight),
        Production::new(ShortArg, AssignmentRight),
    ];

    Grammar { rules }
}

/// Returns the process-wide grammar, building it on first use.
pub fn grammar() -> &'static Grammar {
    use std::sync::OnceLock;
    static GRAMMAR: OnceLock<Grammar> = OnceLock::new();
    GRAMMAR.get_or_init(build_grammar)
}
