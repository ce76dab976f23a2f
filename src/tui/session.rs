use crate::config::Settings;
use crate::shared::{Clock, EventLog, ManualClock};
use crate::verification::VerificationOutcome;
use crate::wizard::controller::{WizardCommand, WizardController};
use crate::wizard::forms::{FormOutcome, HandleForm, IntervalForm, ReviewForm};
use crate::wizard::navigation::{wizard_action_from_key, WizardAction};
use crate::wizard::progress::{ActivationSequencer, SequencerEvent};
use crate::wizard::screens::{project_wizard_view_model, ScreenContext, WizardViewModel};
use crate::wizard::state::WizardStep;
use crossterm::event::KeyEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardExit {
    Quit,
    Cancel,
    ScriptEnded,
}

impl WizardExit {
    pub fn as_str(self) -> &'static str {
        match self {
            WizardExit::Quit => "quit",
            WizardExit::Cancel => "cancel",
            WizardExit::ScriptEnded => "script_ended",
        }
    }
}

fn step_status_text(step: WizardStep) -> &'static str {
    match step {
        WizardStep::Handle => "Enter the username that should receive alerts.",
        WizardStep::Interval => "Choose how often to check for new posts.",
        WizardStep::Confirm => "Review your configuration before activating.",
        WizardStep::Activating => "Activating your notifier...",
        WizardStep::Done => "Your notifier is active.",
    }
}

/// One interactive wizard run: the controller plus the live form for the
/// current step and every timer the step owns. Single-threaded; time only
/// enters through the `now_ms` arguments.
#[derive(Debug)]
pub struct WizardSession {
    controller: WizardController,
    handle_form: HandleForm,
    interval_form: IntervalForm,
    review: Option<ReviewForm>,
    sequencer: ActivationSequencer,
    status_text: String,
    verification_delay_ms: u64,
    bot_url: String,
    activations: u32,
    log: EventLog,
}

impl WizardSession {
    pub fn new(settings: &Settings, log: EventLog) -> Self {
        Self::with_controller(WizardController::new(), settings, log)
    }

    pub fn with_controller(controller: WizardController, settings: &Settings, log: EventLog) -> Self {
        let handle_form = HandleForm::new(controller.state().handle.as_ref());
        let interval_form = IntervalForm::new(controller.state().interval);
        Self {
            controller,
            handle_form,
            interval_form,
            review: None,
            sequencer: ActivationSequencer::standard(),
            status_text: step_status_text(WizardStep::Handle).to_string(),
            verification_delay_ms: settings.verification.delay_ms,
            bot_url: settings.delivery.bot_url.clone(),
            activations: 0,
            log,
        }
    }

    pub fn controller(&self) -> &WizardController {
        &self.controller
    }

    pub fn step(&self) -> WizardStep {
        self.controller.step()
    }

    pub fn status_text(&self) -> &str {
        &self.status_text
    }

    pub fn review(&self) -> Option<&ReviewForm> {
        self.review.as_ref()
    }

    pub fn sequencer(&self) -> &ActivationSequencer {
        &self.sequencer
    }

    pub fn completed_activations(&self) -> u32 {
        self.activations
    }

    pub fn view_model(&self) -> WizardViewModel {
        project_wizard_view_model(&ScreenContext {
            state: self.controller.state(),
            handle_form: &self.handle_form,
            interval_form: &self.interval_form,
            review: self.review.as_ref(),
            sequencer: &self.sequencer,
            status_text: &self.status_text,
            bot_url: &self.bot_url,
        })
    }

    /// Earliest timer deadline owned by the current step.
    pub fn next_deadline(&self) -> Option<u64> {
        let review = self.review.as_ref().and_then(ReviewForm::next_deadline);
        let activation = if self.step() == WizardStep::Activating {
            self.sequencer.next_deadline()
        } else {
            None
        };
        match (review, activation) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent, now_ms: u64) -> Option<WizardExit> {
        let action = wizard_action_from_key(self.step(), key)?;
        self.handle_action(action, now_ms)
    }

    pub fn handle_action(&mut self, action: WizardAction, now_ms: u64) -> Option<WizardExit> {
        match action {
            WizardAction::Cancel => return Some(WizardExit::Cancel),
            WizardAction::Quit => return Some(WizardExit::Quit),
            _ => {}
        }
        let outcome = match self.step() {
            WizardStep::Handle => self.handle_form.handle(action),
            WizardStep::Interval => self.interval_form.handle(action),
            WizardStep::Confirm => match self.review.as_mut() {
                Some(review) => review.handle(action, now_ms),
                None => FormOutcome::Idle,
            },
            WizardStep::Activating => FormOutcome::Idle,
            WizardStep::Done if action == WizardAction::Reset => {
                FormOutcome::Commit(WizardCommand::Reset)
            }
            WizardStep::Done => FormOutcome::Idle,
        };
        match outcome {
            FormOutcome::Idle => {}
            FormOutcome::Feedback(text) => self.status_text = text,
            FormOutcome::Commit(command) => self.apply(command, now_ms),
        }
        None
    }

    pub fn tick(&mut self, now_ms: u64) {
        if let Some(outcome) = self.review.as_mut().and_then(|review| review.poll(now_ms)) {
            self.report_verification(&outcome);
        }
        if self.step() != WizardStep::Activating {
            return;
        }
        let events = self.sequencer.tick(now_ms);
        for event in events {
            match event {
                SequencerEvent::TaskCompleted(idx) => {
                    if let Some(task) = self.sequencer.tasks().get(idx) {
                        self.status_text = format!("Done: {}", task.label);
                    }
                }
                SequencerEvent::Finished => self.apply(WizardCommand::Complete, now_ms),
            }
        }
    }

    fn report_verification(&mut self, outcome: &VerificationOutcome) {
        if outcome.success {
            self.status_text = "Simulation OK!".to_string();
            self.log.info("verification.succeeded", "simulated check passed");
        } else {
            self.status_text = "Simulation Failed".to_string();
            self.log.info("verification.failed", &outcome.message);
        }
    }

    fn apply(&mut self, command: WizardCommand, now_ms: u64) {
        let name = command.as_str();
        match self.controller.apply(command) {
            Ok(transition) => {
                self.log.info(
                    "wizard.transition",
                    &format!("{} -> {} ({name})", transition.from, transition.to),
                );
                self.enter_step(transition.to, now_ms);
            }
            Err(err) => {
                self.log.warn("wizard.invalid_transition", &err.to_string());
                self.status_text = err.to_string();
            }
        }
    }

    fn enter_step(&mut self, step: WizardStep, now_ms: u64) {
        let state = self.controller.state();
        // leaving the review step discards any verification in flight
        self.review = None;
        match step {
            WizardStep::Handle => self.handle_form = HandleForm::new(state.handle.as_ref()),
            WizardStep::Interval => self.interval_form = IntervalForm::new(state.interval),
            WizardStep::Confirm => {
                self.review = Some(ReviewForm::new(
                    state.handle.as_ref(),
                    self.verification_delay_ms,
                ));
            }
            WizardStep::Activating => {
                self.sequencer = ActivationSequencer::standard();
                self.sequencer.start(now_ms);
            }
            WizardStep::Done => self.activations += 1,
        }
        self.status_text = step_status_text(step).to_string();
    }
}

/// Replays scripted keys against a virtual clock. After each key every
/// pending timer is run to completion, so scripts never wait on wall time.
pub fn run_scripted(
    session: &mut WizardSession,
    keys: Vec<KeyEvent>,
    clock: &ManualClock,
) -> WizardExit {
    for key in keys {
        if let Some(exit) = session.handle_key(key, clock.now_ms()) {
            return exit;
        }
        settle_timers(session, clock);
    }
    WizardExit::ScriptEnded
}

pub fn settle_timers(session: &mut WizardSession, clock: &ManualClock) {
    while let Some(deadline) = session.next_deadline() {
        clock.set(deadline);
        session.tick(clock.now_ms());
    }
}
