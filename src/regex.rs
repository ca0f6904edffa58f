use std::fmt::{self, Display, Formatter};

use crate::error::CompileError;
use crate::matcher::Search;
use crate::parser::compile;
use crate::trace::{NoTrace, Trace};

/// A half-open interval `[start, end)` of character indices into a text.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct Range {
    pub start: usize,
    pub end: usize,
}

impl Range {
    /// # Panics
    ///
    /// Panics if `start` is greater than `end`.
    pub fn new(start: usize, end: usize) -> Range {
        assert!(start <= end, "range start {} is past its end {}", start, end);
        Range { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The characters of `text` covered by this range.
    pub fn extract(&self, text: &str) -> String {
        text.chars().skip(self.start).take(self.len()).collect()
    }
}

impl From<Range> for std::ops::Range<usize> {
    fn from(range: Range) -> Self {
        range.start..range.end
    }
}

impl Display for Range {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

/// The single-character test an operator applies at each repetition.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Atom {
    Char(char),                 // c
    Dot,                        // .
    Set(Vec<char>),             // [abc]
    NegatedSet(Vec<char>),      // [^abc]
}

impl Atom {
    /// Tries to match one character of `text` at index `at`.
    pub fn match_unit(&self, text: &[char], at: usize) -> Option<Range> {
        let c = *text.get(at)?;
        let hit = match self {
            Atom::Char(expected) => c == *expected,
            Atom::Dot => true,
            Atom::Set(chars) => chars.contains(&c),
            Atom::NegatedSet(chars) => !chars.contains(&c),
        };
        hit.then(|| Range::new(at, at + 1))
    }
}

impl Display for Atom {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Atom::Char(c) => {
                if "\\[.?*+".contains(*c) {
                    write!(f, "\\")?;
                }
                write!(f, "{}", c)
            }
            Atom::Dot => write!(f, "."),
            Atom::Set(chars) => {
                write!(f, "[")?;
                write_class_members(f, chars, true)?;
                write!(f, "]")
            }
            Atom::NegatedSet(chars) => {
                write!(f, "[^")?;
                write_class_members(f, chars, false)?;
                write!(f, "]")
            }
        }
    }
}

fn write_class_members(f: &mut Formatter<'_>, chars: &[char], guard_caret: bool) -> fmt::Result {
    for (i, c) in chars.iter().enumerate() {
        let leading_caret = guard_caret && i == 0 && *c == '^';
        if *c == ']' || *c == '\\' || leading_caret {
            write!(f, "\\")?;
        }
        write!(f, "{}", c)?;
    }
    Ok(())
}

/// A repetition modifier written after an atom.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Quantifier {
    Optional,   // ?
    Star,       // *
    Plus,       // +
}

impl Quantifier {
    pub fn symbol(self) -> char {
        match self {
            Quantifier::Optional => '?',
            Quantifier::Star => '*',
            Quantifier::Plus => '+',
        }
    }
}

/// How many consecutive times an operator must and may match.
///
/// `max` of `None` means unbounded.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Repeat {
    min: usize,
    max: Option<usize>,
}

impl Repeat {
    pub const ONCE: Repeat = Repeat { min: 1, max: Some(1) };

    pub fn min(&self) -> usize {
        self.min
    }

    pub fn max(&self) -> Option<usize> {
        self.max
    }

    /// Whether a `count`-th application is still within the upper bound.
    pub fn admits(&self, count: usize) -> bool {
        self.max.map_or(true, |max| count <= max)
    }

    pub fn apply(&mut self, quantifier: Quantifier) {
        match quantifier {
            Quantifier::Optional => self.min = 0,
            Quantifier::Star => {
                self.min = 0;
                self.max = None;
            }
            Quantifier::Plus => {
                self.min = 1;
                self.max = None;
            }
        }
    }
}

impl Default for Repeat {
    fn default() -> Self {
        Repeat::ONCE
    }
}

impl Display for Repeat {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match (self.min, self.max) {
            (0, Some(1)) => write!(f, "?"),
            (0, None) => write!(f, "*"),
            (1, None) => write!(f, "+"),
            _ => Ok(()),
        }
    }
}

/// One compiled matching unit: an atom plus its repetition bounds.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Operator {
    pub atom: Atom,
    pub repeat: Repeat,
}

impl Operator {
    pub fn new(atom: Atom) -> Operator {
        Operator { atom, repeat: Repeat::ONCE }
    }
}

impl Display for Operator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.atom, self.repeat)
    }
}

/// Configures and compiles a [`Regex`].
#[derive(Debug, Clone)]
pub struct RegexBuilder {
    pattern: String,
    step_limit: Option<usize>,
}

impl RegexBuilder {
    pub fn new(pattern: &str) -> RegexBuilder {
        RegexBuilder {
            pattern: pattern.to_string(),
            step_limit: None,
        }
    }

    /// Caps the number of single-character match attempts one search call
    /// may make. A search that runs out reports no match.
    pub fn step_limit(&mut self, limit: usize) -> &mut RegexBuilder {
        self.step_limit = Some(limit);
        self
    }

    pub fn build(&self) -> Result<Regex, CompileError> {
        Ok(Regex {
            pattern: self.pattern.clone(),
            operators: compile(&self.pattern)?,
            step_limit: self.step_limit,
        })
    }
}

/// A compiled pattern.
///
/// Matching never mutates a `Regex`, so one instance can be shared between
/// threads and searched concurrently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Regex {
    pattern: String,
    operators: Vec<Operator>,
    step_limit: Option<usize>,
}

impl Regex {
    pub fn new(pattern: &str) -> Result<Regex, CompileError> {
        RegexBuilder::new(pattern).build()
    }

    pub fn as_str(&self) -> &str {
        &self.pattern
    }

    pub fn operators(&self) -> &[Operator] {
        &self.operators
    }

    pub fn step_limit(&self) -> Option<usize> {
        self.step_limit
    }

    /// Matches starting exactly at character index `start`.
    pub fn find_at(&self, text: &str, start: usize) -> Option<Range> {
        self.find_at_traced(text, start, &mut NoTrace)
    }

    pub fn find_at_traced(&self, text: &str, start: usize, trace: &mut dyn Trace) -> Option<Range> {
        let chars: Vec<char> = text.chars().collect();
        Search::new(&self.operators, &chars, self.step_limit, trace).find_at(start)
    }

    /// The leftmost match in `text`.
    pub fn find(&self, text: &str) -> Option<Range> {
        self.find_traced(text, &mut NoTrace)
    }

    pub fn find_traced(&self, text: &str, trace: &mut dyn Trace) -> Option<Range> {
        let chars: Vec<char> = text.chars().collect();
        Search::new(&self.operators, &chars, self.step_limit, trace).find_from(0)
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.find(text).is_some()
    }

    /// True when the leftmost match spans all of `text`.
    pub fn full_match(&self, text: &str) -> bool {
        let len = text.chars().count();
        self.find(text) == Some(Range::new(0, len))
    }

    /// Successive non-overlapping leftmost matches in `text`.
    pub fn find_iter(&self, text: &str) -> Matches<'_> {
        Matches {
            regex: self,
            text: text.chars().collect(),
            next_start: 0,
        }
    }
}

impl Display for Regex {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for operator in &self.operators {
            write!(f, "{}", operator)?;
        }
        Ok(())
    }
}

/// Iterator returned by [`Regex::find_iter`].
#[derive(Debug)]
pub struct Matches<'r> {
    regex: &'r Regex,
    text: Vec<char>,
    next_start: usize,
}

impl Iterator for Matches<'_> {
    type Item = Range;

    fn next(&mut self) -> Option<Range> {
        if self.next_start > self.text.len() {
            return None;
        }
        let found = Search::new(&self.regex.operators, &self.text, self.regex.step_limit, &mut NoTrace)
            .find_from(self.next_start);
        match found {
            Some(range) => {
                self.next_start = if range.is_empty() { range.end + 1 } else { range.end };
                Some(range)
            }
            None => {
                self.next_start = self.text.len() + 1;
                None
            }
        }
    }
}
