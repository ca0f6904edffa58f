//! Backtracking search over a compiled operator sequence.
//!
//! The search walks the operators left to right. Each operator is applied
//! greedily, as many times as its upper bound allows, and the ranges it
//! consumed are kept in a [`Frame`] on the `applied` stack. When an operator
//! cannot reach its minimum, the search gives back one repetition of the
//! nearest earlier operator that has some to spare and tries again from the
//! operator after it. Operators that are already at their minimum are popped
//! entirely. An empty stack means no match at this start position.
//!
//! All history lives in the search call. The operators themselves are never
//! mutated.

use crate::regex::{Operator, Range};
use crate::trace::{Event, Trace};

/// The ranges one operator matched during the current attempt.
#[derive(Debug, Default)]
struct Frame {
    history: Vec<Range>,
}

impl Frame {
    fn count(&self) -> usize {
        self.history.len()
    }

    fn push(&mut self, unit: Range) {
        debug_assert!(self.history.last().map_or(true, |last| last.end == unit.start));
        self.history.push(unit);
    }

    /// Drops the last repetition if that still leaves at least `min`.
    fn give_back_above(&mut self, min: usize) -> Option<Range> {
        if self.history.len() > min {
            self.history.pop()
        } else {
            None
        }
    }
}

/// Remaining single-character attempts, or unlimited.
#[derive(Debug)]
struct Budget {
    remaining: Option<usize>,
}

impl Budget {
    fn spend(&mut self) -> bool {
        match &mut self.remaining {
            None => true,
            Some(0) => false,
            Some(n) => {
                *n -= 1;
                true
            }
        }
    }
}

enum Attempt {
    Matched(Range),
    Failed,
    Exhausted,
}

pub(crate) struct Search<'a, T: Trace + ?Sized> {
    operators: &'a [Operator],
    text: &'a [char],
    budget: Budget,
    trace: &'a mut T,
}

impl<'a, T: Trace + ?Sized> Search<'a, T> {
    pub(crate) fn new(
        operators: &'a [Operator],
        text: &'a [char],
        step_limit: Option<usize>,
        trace: &'a mut T,
    ) -> Self {
        Search {
            operators,
            text,
            budget: Budget { remaining: step_limit },
            trace,
        }
    }

    /// Tries every start position from `from` through the end of the text
    /// and returns the first match.
    pub(crate) fn find_from(&mut self, from: usize) -> Option<Range> {
        for start in from..=self.text.len() {
            match self.attempt(start) {
                Attempt::Matched(range) => return Some(range),
                Attempt::Failed => continue,
                Attempt::Exhausted => return None,
            }
        }
        None
    }

    pub(crate) fn find_at(&mut self, start: usize) -> Option<Range> {
        if start > self.text.len() {
            return None;
        }
        match self.attempt(start) {
            Attempt::Matched(range) => Some(range),
            Attempt::Failed | Attempt::Exhausted => None,
        }
    }

    fn attempt(&mut self, start: usize) -> Attempt {
        let operators = self.operators;
        let text = self.text;
        self.trace.record(Event::Attempt { start });

        let mut matched_end = start;
        let mut applied: Vec<Frame> = Vec::with_capacity(operators.len());

        while applied.len() < operators.len() {
            let index = applied.len();
            let operator = &operators[index];
            self.trace.record(Event::Apply { operator: index, at: matched_end });

            // Greedy: take as many repetitions as the upper bound allows.
            let mut frame = Frame::default();
            let mut cursor = matched_end;
            while operator.repeat.admits(frame.count() + 1) {
                if !self.budget.spend() {
                    self.trace.record(Event::Exhausted { start });
                    return Attempt::Exhausted;
                }
                match operator.atom.match_unit(text, cursor) {
                    Some(unit) => {
                        self.trace.record(Event::Unit { operator: index, range: unit });
                        frame.push(unit);
                        cursor = unit.end;
                    }
                    None => break,
                }
            }

            if frame.count() >= operator.repeat.min() {
                self.trace.record(Event::Satisfied { operator: index, count: frame.count() });
                applied.push(frame);
                matched_end = cursor;
                continue;
            }

            self.trace.record(Event::TooFew {
                operator: index,
                count: frame.count(),
                min: operator.repeat.min(),
            });

            loop {
                let top = match applied.len().checked_sub(1) {
                    Some(top) => top,
                    None => {
                        self.trace.record(Event::Failed { start });
                        return Attempt::Failed;
                    }
                };
                match applied[top].give_back_above(operators[top].repeat.min()) {
                    Some(unit) => {
                        matched_end = unit.start;
                        self.trace.record(Event::GiveBack {
                            operator: top,
                            count: applied[top].count(),
                        });
                        break;
                    }
                    None => {
                        applied.pop();
                        self.trace.record(Event::Unapply { operator: top });
                    }
                }
            }
        }

        let range = Range::new(start, matched_end);
        self.trace.record(Event::Matched { range });
        Attempt::Matched(range)
    }
}
