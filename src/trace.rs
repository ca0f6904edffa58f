//! Optional tracing of the backtracking search.
//!
//! A search reports what it is doing to a [`Trace`] sink. The default sink
//! ([`NoTrace`]) discards everything; [`WriteTrace`] prints one line per event
//! and a `Vec<Event>` collects them for inspection.

use std::fmt::{self, Display, Formatter};
use std::io::Write;

use crate::regex::Range;

/// One step of the search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A new attempt begins at `start`.
    Attempt { start: usize },
    /// The operator at index `operator` is about to be applied from `at`.
    Apply { operator: usize, at: usize },
    /// One repetition of the operator matched `range`.
    Unit { operator: usize, range: Range },
    /// The operator reached its minimum after `count` repetitions.
    Satisfied { operator: usize, count: usize },
    /// The operator matched only `count` times but needs `min`.
    TooFew { operator: usize, count: usize, min: usize },
    /// An earlier operator gave up one repetition and now holds `count`.
    GiveBack { operator: usize, count: usize },
    /// An operator at its minimum was removed from the applied stack.
    Unapply { operator: usize },
    Matched { range: Range },
    Failed { start: usize },
    /// The step budget ran out during the attempt at `start`.
    Exhausted { start: usize },
}

impl Display for Event {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Event::Attempt { start } => write!(f, "Attempting match starting at index {}", start),
            Event::Apply { operator, at } => write!(f, "  Applying operator {} at index {}", operator, at),
            Event::Unit { range, .. } => write!(f, "    * Matched range {}", range),
            Event::Satisfied { operator, count } => {
                write!(f, "  -> Operator {} satisfied after {} repetition(s)", operator, count)
            }
            Event::TooFew { operator, count, min } => write!(
                f,
                "  -> Operator {} matched {} time(s), {} required; backtracking",
                operator, count, min
            ),
            Event::GiveBack { operator, count } => {
                write!(f, "  -> Operator {} gives back one repetition, now {}", operator, count)
            }
            Event::Unapply { operator } => write!(f, "  -> Un-applying operator {}", operator),
            Event::Matched { range } => write!(f, "--- Match succeeded on range {} ---", range),
            Event::Failed { start } => write!(f, "--- No match starting at index {} ---", start),
            Event::Exhausted { start } => {
                write!(f, "--- Step limit reached during attempt at index {} ---", start)
            }
        }
    }
}

/// Receives search events.
pub trait Trace {
    fn record(&mut self, event: Event);
}

/// Discards every event.
#[derive(Debug, Copy, Clone, Default)]
pub struct NoTrace;

impl Trace for NoTrace {
    fn record(&mut self, _event: Event) {}
}

impl Trace for Vec<Event> {
    fn record(&mut self, event: Event) {
        self.push(event);
    }
}

/// Writes each event as a line of text.
///
/// Write errors are ignored; a broken trace must not change the match result.
#[derive(Debug)]
pub struct WriteTrace<W: Write> {
    out: W,
}

impl<W: Write> WriteTrace<W> {
    pub fn new(out: W) -> Self {
        WriteTrace { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Trace for WriteTrace<W> {
    fn record(&mut self, event: Event) {
        let _ = writeln!(self.out, "{}", event);
    }
}
