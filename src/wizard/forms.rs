use super::controller::WizardCommand;
use super::navigation::WizardAction;
use super::state::{Handle, IntervalMinutes, HANDLE_MARKER, INTERVAL_OPTIONS};
use crate::verification::{VerificationOutcome, VerificationProbe, VerificationStatus};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormOutcome {
    Idle,
    Commit(WizardCommand),
    Feedback(String),
}

pub const EMPTY_HANDLE_FEEDBACK: &str = "Enter your username to continue.";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HandleForm {
    text: String,
}

impl HandleForm {
    pub fn new(current: Option<&Handle>) -> Self {
        let text = current
            .map(|handle| handle.as_str().trim_start_matches(HANDLE_MARKER).to_string())
            .unwrap_or_default();
        Self { text }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn can_submit(&self) -> bool {
        Handle::normalize(&self.text).is_some()
    }

    pub fn handle(&mut self, action: WizardAction) -> FormOutcome {
        match action {
            // the marker is rendered as a fixed prefix
            WizardAction::Input(HANDLE_MARKER) => FormOutcome::Idle,
            WizardAction::Input(ch) => {
                self.text.push(ch);
                FormOutcome::Idle
            }
            WizardAction::Erase => {
                self.text.pop();
                FormOutcome::Idle
            }
            WizardAction::Submit => match Handle::normalize(&self.text) {
                Some(handle) => FormOutcome::Commit(WizardCommand::SubmitHandle(handle)),
                None => FormOutcome::Feedback(EMPTY_HANDLE_FEEDBACK.to_string()),
            },
            _ => FormOutcome::Idle,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntervalForm {
    initial: IntervalMinutes,
    selected: Option<usize>,
}

impl IntervalForm {
    pub fn new(current: IntervalMinutes) -> Self {
        Self {
            initial: current,
            selected: current.option_index(),
        }
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn value(&self) -> IntervalMinutes {
        self.selected
            .and_then(|idx| INTERVAL_OPTIONS.get(idx))
            .and_then(|option| IntervalMinutes::from_option(option.minutes))
            .unwrap_or(self.initial)
    }

    pub fn handle(&mut self, action: WizardAction) -> FormOutcome {
        let last = INTERVAL_OPTIONS.len() - 1;
        match action {
            WizardAction::MovePrev => {
                self.selected = Some(self.selected.map_or(0, |idx| idx.saturating_sub(1)));
                FormOutcome::Idle
            }
            WizardAction::MoveNext => {
                self.selected = Some(self.selected.map_or(0, |idx| (idx + 1).min(last)));
                FormOutcome::Idle
            }
            WizardAction::Submit => FormOutcome::Commit(WizardCommand::SubmitInterval(self.value())),
            WizardAction::Back => FormOutcome::Commit(WizardCommand::Back),
            _ => FormOutcome::Idle,
        }
    }
}

/// Review step. Owns the verification probe, which is dropped with the form
/// when the user leaves the step.
#[derive(Debug, Clone)]
pub struct ReviewForm {
    handle: String,
    probe: VerificationProbe,
}

impl ReviewForm {
    pub fn new(handle: Option<&Handle>, verification_delay_ms: u64) -> Self {
        Self {
            handle: handle.map(|h| h.as_str().to_string()).unwrap_or_default(),
            probe: VerificationProbe::new(verification_delay_ms),
        }
    }

    pub fn verification(&self) -> &VerificationStatus {
        self.probe.status()
    }

    pub fn next_deadline(&self) -> Option<u64> {
        self.probe.next_deadline()
    }

    pub fn poll(&mut self, now_ms: u64) -> Option<VerificationOutcome> {
        self.probe.poll(now_ms)
    }

    pub fn handle(&mut self, action: WizardAction, now_ms: u64) -> FormOutcome {
        match action {
            WizardAction::Test => match self.probe.start(&self.handle, now_ms) {
                Ok(()) => FormOutcome::Feedback("Simulating...".to_string()),
                // one check at a time; extra presses are dropped
                Err(_) => FormOutcome::Idle,
            },
            WizardAction::Edit => FormOutcome::Commit(WizardCommand::Edit),
            WizardAction::Submit => FormOutcome::Commit(WizardCommand::Confirm),
            _ => FormOutcome::Idle,
        }
    }
}
