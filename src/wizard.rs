//! Wizard Controller
//!
//! Drives the user through the question catalog one question at a time,
//! collecting one answer per question. Pure state machine -- no terminal
//! or rendering concerns, so any front end can sit on top of it.

use crate::catalog::Question;

/// Where the wizard stands after an [`Wizard::advance`] call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Step {
    /// Still on a question: either moved forward to it, or held in place
    /// because the current answer is unset.
    Active(usize),
    /// The final answer was accepted. Terminal -- no transition leaves it.
    Completed,
}

/// The form's only mutable state: a position in the catalog and one
/// answer slot per question. An empty string marks an unanswered slot.
pub struct Wizard<'a> {
    catalog: &'a [Question],
    current: usize,
    answers: Vec<String>,
    complete: bool,
}

impl<'a> Wizard<'a> {
    /// A fresh wizard positioned on the first question with every slot unset.
    pub fn new(catalog: &'a [Question]) -> Self {
        Self {
            catalog,
            current: 0,
            answers: vec![String::new(); catalog.len()],
            complete: false,
        }
    }

    /// Record `value` as the answer to the current question, replacing any
    /// earlier selection. The surrounding picker only offers catalog values,
    /// so membership is not re-checked here. No-op once completed.
    pub fn select_answer(&mut self, value: &str) {
        if self.complete {
            return;
        }
        self.answers[self.current] = value.to_string();
    }

    /// Move to the next question, or complete the form from the last one.
    ///
    /// Guarded: if the current answer is unset this does nothing and the
    /// index stays put. The front end disables its "next" affordance in that
    /// case, but the controller holds the line regardless.
    pub fn advance(&mut self) -> Step {
        if self.complete {
            return Step::Completed;
        }
        if self.answers[self.current].is_empty() {
            return Step::Active(self.current);
        }
        if self.current + 1 < self.catalog.len() {
            self.current += 1;
            Step::Active(self.current)
        } else {
            self.complete = true;
            Step::Completed
        }
    }

    /// Fraction of the form reached, in `(0, 1]`. Derived from the index on
    /// every read; used only for progress display.
    pub fn progress_fraction(&self) -> f64 {
        (self.current + 1) as f64 / self.catalog.len() as f64
    }

    /// One-based position for display: `(current question, total)`.
    pub fn position(&self) -> (usize, usize) {
        (self.current + 1, self.catalog.len())
    }

    /// The question currently awaiting an answer, or `None` once completed.
    pub fn current_question(&self) -> Option<&'a Question> {
        if self.complete {
            None
        } else {
            Some(&self.catalog[self.current])
        }
    }

    /// The answer slot for the current question; empty while unset.
    pub fn current_answer(&self) -> &str {
        &self.answers[self.current]
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// All answer slots, in catalog order. Slots past the current question
    /// are empty until answered.
    pub fn answers(&self) -> &[String] {
        &self.answers
    }

    /// Consume the wizard and hand back the collected answers.
    pub fn into_answers(self) -> Vec<String> {
        self.answers
    }
}
