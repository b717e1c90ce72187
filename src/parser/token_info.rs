//! The per-token accumulator filled in by grammar semantic actions (or by
//! the fast-path recognizer) and consumed by the parse driver.

/// Everything a recognizer learns about a single CLI token.
///
/// Reset to its default at the start of every token; never shared across
/// tokens.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TokenInfo {
    /// The canonical long or single-letter identifier, e.g. `"foo-bar"` or `"x"`.
    pub arg_name: String,
    /// Extension piece for hyphenated/underscored long forms, merged into
    /// `arg_name` by the `mergeExt` action before the driver ever sees it.
    pub arg_ext: String,
    /// The right-hand side of an `=` assignment, if any.
    pub arg_val: String,
    /// True when the token was a bundled short-flag list (`-abc`).
    pub is_arg_list: bool,
    /// True when the token is a free/positional value.
    pub is_free_val: bool,
}

impl TokenInfo {
    pub fn new() -> Self {
        Self::default()
    }
}
