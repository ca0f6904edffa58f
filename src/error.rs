use std::fmt::{Display, Formatter};

/// Reasons a pattern can be rejected by [`compile`](crate::compile).
///
/// Every variant carries the character index (not byte offset) of the token
/// that could not be compiled.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum CompileError {
    /// A `\` with nothing after it, e.g. `abc\`.
    DanglingEscape(usize),
    /// A `[` with no closing `]`, e.g. `[abc`.
    UnterminatedClass(usize),
    /// A `?`, `*` or `+` with no operator before it, e.g. `*abc`.
    NothingToRepeat(usize, char),
}

impl CompileError {
    /// The character position at which the error occurred.
    pub fn idx(&self) -> usize {
        match *self {
            CompileError::DanglingEscape(loc)
            | CompileError::UnterminatedClass(loc)
            | CompileError::NothingToRepeat(loc, _) => loc,
        }
    }
}

impl Display for CompileError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            CompileError::DanglingEscape(loc) => {
                write!(f, "Dangling escape at character {}", loc)
            }
            CompileError::UnterminatedClass(loc) => {
                write!(f, "Unterminated character class at character {}", loc)
            }
            CompileError::NothingToRepeat(loc, quantifier) => {
                write!(f, "Nothing to repeat for '{}' at character {}", quantifier, loc)
            }
        }
    }
}

impl std::error::Error for CompileError {}
