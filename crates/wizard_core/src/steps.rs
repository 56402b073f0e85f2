//! Linear five-step navigation. Moving between steps never touches form data.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

pub const TOTAL_STEPS: u8 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    EntrySelection = 1,
    Biography = 2,
    Family = 3,
    LifeEvents = 4,
    Review = 5,
}

impl Step {
    pub const ALL: [Step; TOTAL_STEPS as usize] = [
        Step::EntrySelection,
        Step::Biography,
        Step::Family,
        Step::LifeEvents,
        Step::Review,
    ];

    pub fn number(self) -> u8 {
        self as u8
    }

    pub fn from_number(number: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|step| step.number() == number)
    }

    pub fn title(self) -> &'static str {
        match self {
            Step::EntrySelection => "Create a story to celebrate a life well lived.",
            Step::Biography => "About the Deceased",
            Step::Family => "Immediate Family",
            Step::LifeEvents => "Life Story",
            Step::Review => "Review your obituary",
        }
    }

    /// Steps that only collect optional lists can be skipped outright.
    pub fn is_skippable(self) -> bool {
        matches!(self, Step::Family | Step::LifeEvents)
    }

    fn following(self) -> Self {
        Self::from_number(self.number() + 1).unwrap_or(Step::Review)
    }

    fn preceding(self) -> Self {
        Self::from_number(self.number().saturating_sub(1)).unwrap_or(Step::EntrySelection)
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Step::EntrySelection => "entry_selection",
            Step::Biography => "biography",
            Step::Family => "family",
            Step::LifeEvents => "life_events",
            Step::Review => "review",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepController {
    current: Step,
    finished: bool,
}

impl Default for StepController {
    fn default() -> Self {
        Self::new()
    }
}

impl StepController {
    pub fn new() -> Self {
        Self {
            current: Step::EntrySelection,
            finished: false,
        }
    }

    pub fn current(&self) -> Step {
        self.current
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn next(&mut self) -> Step {
        self.move_to(self.current.following(), "next")
    }

    pub fn back(&mut self) -> Step {
        self.move_to(self.current.preceding(), "back")
    }

    /// Advances like [`next`](Self::next) when the current step may be
    /// skipped. Returns whether the step changed.
    pub fn skip(&mut self) -> bool {
        if !self.current.is_skippable() {
            debug!(step = %self.current, "skip not offered; ignored");
            return false;
        }
        let before = self.current;
        self.move_to(self.current.following(), "skip") != before
    }

    /// The terminal action. Only the review step can finish.
    pub fn finish(&mut self) -> bool {
        if self.current != Step::Review {
            debug!(step = %self.current, "finish before review; ignored");
            return false;
        }
        self.finished = true;
        debug!("wizard finished");
        true
    }

    pub fn can_go_back(&self) -> bool {
        self.current != Step::EntrySelection
    }

    pub fn show_skip(&self) -> bool {
        self.current.is_skippable()
    }

    pub fn primary_action_label(&self) -> &'static str {
        if self.current == Step::Review {
            "Finish"
        } else {
            "Next step"
        }
    }

    pub fn progress_label(&self) -> String {
        format!("STEP {} OF {TOTAL_STEPS}", self.current.number())
    }

    pub fn progress_fraction(&self) -> f32 {
        f32::from(self.current.number()) / f32::from(TOTAL_STEPS)
    }

    fn move_to(&mut self, target: Step, action: &'static str) -> Step {
        if target != self.current {
            debug!(action, from = %self.current, to = %target, "step changed");
            self.current = target;
            self.finished = false;
        }
        self.current
    }
}

#[cfg(test)]
#[path = "tests/steps_tests.rs"]
mod tests;
