//! The CYK chart recognizer (C2), derivation extractor (C3) and semantic
//! action dispatcher (C4).
//!
//! `recognize` is the single entry point: given one CLI token, it builds the
//! chart, confirms the start symbol derives the token, walks the chosen
//! derivation in post-order and runs every attached semantic action,
//! producing a filled-in [`TokenInfo`].

use std::ops::Range;

use crate::error::ParserError;

use super::grammar::{grammar, terminal_classes, Grammar, NonTerminal};
use super::token_info::TokenInfo;

/// One child reference inside a [`BackPointer`]: which non-terminal, which
/// chart cell it was proven in, and the absolute token range it spans.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
struct RuleRef {
    id: NonTerminal,
    row: usize,
    col: usize,
    begin: usize,
    end: usize,
}

/// How a chart cell came to be true: which production variant fired, at
/// which split point, and the two child cells that satisfied it.
#[derive(Debug, Copy, Clone)]
struct BackPointer {
    variant: usize,
    lhs: RuleRef,
    rhs: RuleRef,
}

/// chart\[row\]\[col\]\[nt\] is true iff `nt` derives `input[col..col+row+1]`.
type Chart = Vec<Vec<Vec<bool>>>;
/// back\[row\]\[col\]\[nt\] lists every way `nt` was proven for that cell, in
/// the order productions were tried (first entry is authoritative).
type BackTable = Vec<Vec<Vec<Vec<BackPointer>>>>;

fn empty_chart(n: usize) -> Chart {
    vec![vec![vec![false; NonTerminal::COUNT]; n]; n]
}

fn empty_back(n: usize) -> BackTable {
    vec![vec![vec![Vec::new(); NonTerminal::COUNT]; n]; n]
}

/// Fills chart row 0 from the terminal mapping. Fails fast on the first byte
/// that belongs to no terminal class.
fn seed_terminals(input: &str, chart: &mut Chart) -> Result<(), ParserError> {
    for (i, byte) in input.as_bytes().iter().enumerate() {
        if !byte.is_ascii() {
            return Err(ParserError::TerminalTokenNotValid {
                token: input.to_string(),
                position: i,
            });
        }
        let classes = terminal_classes(*byte as char);
        if classes.is_empty() {
            return Err(ParserError::TerminalTokenNotValid {
                token: input.to_string(),
                position: i,
            });
        }
        for nt in classes {
            chart[0][i][nt as usize] = true;
        }
    }
    Ok(())
}

/// Runs the O(n^3 * |G|) CYK fill, then checks whether `Start` derives the
/// whole token.
fn build_chart(input: &str, grammar: &Grammar) -> Result<(Chart, BackTable), ParserError> {
    let n = input.len();
    let mut chart = empty_chart(n.max(1));
    let mut back = empty_back(n.max(1));

    seed_terminals(input, &mut chart)?;

    for row in 1..n {
        for col in 0..(n - row) {
            for split in 0..row {
                for nt in 0..NonTerminal::COUNT {
                    let lhs_id = unsafe_nt(nt);
                    for (variant, production) in grammar.variants(lhs_id).iter().enumerate() {
                        let a_row = split;
                        let a_col = col;
                        let b_row = row - split - 1;
                        let b_col = col + split + 1;

                        if chart[a_row][a_col][production.a as usize]
                            && chart[b_row][b_col][production.b as usize]
                        {
                            back[row][col][nt].push(BackPointer {
                                variant,
                                lhs: RuleRef {
                                    id: production.a,
                                    row: a_row,
                                    col: a_col,
                                    begin: a_col,
                                    end: a_col + a_row + 1,
                                },
                                rhs: RuleRef {
                                    id: production.b,
                                    row: b_row,
                                    col: b_col,
                                    begin: b_col,
                                    end: b_col + b_row + 1,
                                },
                            });
                            chart[row][col][nt] = true;
                        }
                    }
                }
            }
        }
    }

    if n == 0 || !chart[n - 1][0][NonTerminal::Start as usize] {
        return Err(ParserError::StartSymbolNotDerivedFromInput {
            token: input.to_string(),
        });
    }

    Ok((chart, back))
}

/// `NonTerminal` is `#[repr(usize)]` and dense, so this round-trips any value
/// produced by `0..NonTerminal::COUNT`.
fn unsafe_nt(index: usize) -> NonTerminal {
    const TABLE: [NonTerminal; NonTerminal::COUNT] = {
        use NonTerminal::*;
        [
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
        ]
    };
    TABLE[index]
}

/// Descends the chosen derivation in post-order (left child, right child,
/// then this node) and runs every attached semantic action along the way.
///
/// Row-0 cells are terminal leaves with no back-pointer entries and no
/// action of their own, so recursion bottoms out there.
fn dispatch(
    input: &str,
    back: &BackTable,
    grammar: &Grammar,
    row: usize,
    col: usize,
    nt: NonTerminal,
    info: &mut TokenInfo,
) {
    if row == 0 {
        return;
    }

    let entries = &back[row][col][nt as usize];
    let Some(bp) = entries.first() else {
        return;
    };
    let bp = *bp;

    dispatch(input, back, grammar, bp.lhs.row, bp.lhs.col, bp.lhs.id, info);
    dispatch(input, back, grammar, bp.rhs.row, bp.rhs.col, bp.rhs.id, info);

    let production = &grammar.variants(nt)[bp.variant];
    if let Some(action) = production.action {
        let a: Range<usize> = bp.lhs.begin..bp.lhs.end;
        let b: Range<usize> = bp.rhs.begin..bp.rhs.end;
        action(input, a, b, info);
    }
}

/// Recognizes a single CLI token with the CNF/CYK grammar and returns the
/// [`TokenInfo`] built by the derivation's semantic actions.
pub fn recognize(input: &str) -> Result<TokenInfo, ParserError> {
    let grammar = grammar();
    let (_chart, back) = build_chart(input, grammar)?;

    let mut info = TokenInfo::new();
    let n = input.len();
    dispatch(input, &back, grammar, n - 1, 0, NonTerminal::Start, &mut info);
    Ok(info)
}
