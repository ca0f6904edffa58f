//! A small backtracking regular-expression engine.
//!
//! Patterns are compiled into a flat sequence of [`Operator`]s, each an
//! [`Atom`] (a literal, `.`, `[...]` or `[^...]`) with repetition bounds set
//! by `?`, `*` or `+`. A backslash makes the next character literal. There are
//! no groups, alternation or anchors.
//!
//! ```
//! use mini_regex::{Range, Regex};
//!
//! let regex = Regex::new("a*ab").unwrap();
//! assert_eq!(regex.find("xaaab"), Some(Range::new(1, 5)));
//! assert!(Regex::new("colou?r").unwrap().full_match("color"));
//! ```

pub mod error;
mod matcher;
pub mod parser;
pub mod regex;
pub mod trace;

pub use error::CompileError;
pub use parser::compile;
pub use regex::{Atom, Matches, Operator, Quantifier, Range, Regex, RegexBuilder, Repeat};
pub use trace::{Event, NoTrace, Trace, WriteTrace};
